//! Decoding of the wamd subchunk stream.
//!
//! The payload of a wamd chunk is a flat sequence of (tag: u16,
//! length: u32, value) frames, all little-endian. The first frame must be
//! the version tag; everything after it is read until the payload is
//! exhausted. A frame that overruns the payload aborts the whole decode:
//! partial metadata is discarded rather than returned, since a misaligned
//! stream cannot be trusted to resynchronize.

use tracing::{debug, warn};

use crate::constants::{META_VERSION, SUBCHUNK_HEADER_LEN, VERSION_VALUE_LEN};
use crate::error::{Result, WamdError};
use crate::metadata::{WamdMetadata, WamdSubchunk};
use crate::riff;
use crate::tag::{self, METATAG_PADDING, METATAG_VERSION};

/// Decode the payload bytes of a wamd chunk into a [`WamdMetadata`].
///
/// An unrecognized version is not fatal: the subchunks are still decoded
/// and retained raw, but the model's semantic accessors are disabled.
pub fn decode_wamd(payload: &[u8]) -> Result<WamdMetadata> {
    let version = read_version(payload)?;
    let supported = version == META_VERSION;
    if !supported {
        warn!(version, "unsupported wamd version, semantic accessors disabled");
    }

    let mut subchunks = Vec::new();
    let mut pos = 0usize;
    while pos < payload.len() {
        let sub = read_subchunk(payload, &mut pos)?;
        if sub.tag != METATAG_PADDING && tag::tag_name(sub.tag).is_none() {
            debug!(tag = sub.tag, len = sub.len(), "unknown wamd tag retained as raw bytes");
        }
        subchunks.push(sub);
    }

    Ok(WamdMetadata::assemble(version, supported, subchunks))
}

/// Locate and decode the wamd chunk of a WAVE file in one step.
///
/// Returns `Ok(None)` when the file has no wamd chunk at all; callers
/// should treat a failed decode as "no metadata available" for the
/// recording, since the audio data chunk remains independently readable.
pub fn extract_wamd(bytes: &[u8]) -> Result<Option<WamdMetadata>> {
    let Some(chunk) = riff::find_wamd(bytes)? else {
        return Ok(None);
    };
    decode_wamd(chunk.payload(bytes)).map(Some)
}

/// Check whether a WAVE file carries a wamd chunk of the supported version,
/// reading only the chunk's leading version frame.
pub fn has_version1_wamd(bytes: &[u8]) -> Result<bool> {
    let Some(chunk) = riff::find_wamd(bytes)? else {
        return Ok(false);
    };
    Ok(read_version(chunk.payload(bytes))? == META_VERSION)
}

/// Read the mandatory leading version frame: tag 0x0000, length 2,
/// little-endian u16 value.
fn read_version(payload: &[u8]) -> Result<u16> {
    if payload.len() < SUBCHUNK_HEADER_LEN {
        return Err(WamdError::TruncatedSubchunk {
            offset: 0,
            needed: SUBCHUNK_HEADER_LEN,
            remaining: payload.len(),
        });
    }
    let tag = u16::from_le_bytes([payload[0], payload[1]]);
    let length = u32::from_le_bytes([payload[2], payload[3], payload[4], payload[5]]);
    if tag != METATAG_VERSION || length != VERSION_VALUE_LEN {
        return Err(WamdError::MissingVersionTag { found: tag });
    }
    let remaining = payload.len() - SUBCHUNK_HEADER_LEN;
    if remaining < VERSION_VALUE_LEN as usize {
        return Err(WamdError::TruncatedSubchunk {
            offset: SUBCHUNK_HEADER_LEN,
            needed: VERSION_VALUE_LEN as usize,
            remaining,
        });
    }
    Ok(u16::from_le_bytes([
        payload[SUBCHUNK_HEADER_LEN],
        payload[SUBCHUNK_HEADER_LEN + 1],
    ]))
}

fn read_subchunk(buf: &[u8], pos: &mut usize) -> Result<WamdSubchunk> {
    let remaining = buf.len() - *pos;
    if remaining < SUBCHUNK_HEADER_LEN {
        return Err(WamdError::TruncatedSubchunk {
            offset: *pos,
            needed: SUBCHUNK_HEADER_LEN,
            remaining,
        });
    }

    let tag = u16::from_le_bytes([buf[*pos], buf[*pos + 1]]);
    let length = u32::from_le_bytes([
        buf[*pos + 2],
        buf[*pos + 3],
        buf[*pos + 4],
        buf[*pos + 5],
    ]) as usize;
    *pos += SUBCHUNK_HEADER_LEN;

    let remaining = buf.len() - *pos;
    if length > remaining {
        return Err(WamdError::TruncatedSubchunk {
            offset: *pos - SUBCHUNK_HEADER_LEN,
            needed: length,
            remaining,
        });
    }

    let value = buf[*pos..*pos + length].to_vec();
    *pos += length;
    Ok(WamdSubchunk { tag, value })
}
