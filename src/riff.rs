//! Generic RIFF container parsing.
//!
//! RIFF (Resource Interchange File Format) is the tagged-chunk container
//! used by WAV files. This module validates the outer header and walks the
//! chunk sequence of a WAVE form, yielding one [`RiffChunk`] header per
//! chunk. Unknown chunk ids ("JUNK", "fmt ", "data", vendor chunks) are
//! surfaced as opaque chunks and skipped by advancing the cursor; they are
//! never errors.

use crate::constants::{CHUNK_HEADER_LEN, RIFF_HEADER_LEN};
use crate::error::{Result, WamdError};

/// RIFF header magic bytes
pub const RIFF_MAGIC: &[u8; 4] = b"RIFF";

/// WAV form type
pub const WAVE_FORM: &[u8; 4] = b"WAVE";

/// Wildlife Acoustics metadata chunk id
pub const WAMD_CHUNK_ID: &[u8; 4] = b"wamd";

/// One chunk header located inside a caller-owned buffer.
///
/// This is a transient cursor view: it records where the payload lives but
/// never owns the bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RiffChunk {
    /// Four-character chunk id
    pub id: [u8; 4],
    /// Byte offset of the payload within the scanned buffer
    pub offset: usize,
    /// Declared payload length
    pub length: u32,
}

impl RiffChunk {
    /// Re-borrow this chunk's payload from the buffer it was scanned from.
    pub fn payload<'a>(&self, buf: &'a [u8]) -> &'a [u8] {
        &buf[self.offset..self.offset + self.length as usize]
    }

    pub fn is(&self, id: &[u8; 4]) -> bool {
        &self.id == id
    }
}

/// Render a fourCC for error messages and logs.
pub fn fourcc(id: &[u8; 4]) -> String {
    String::from_utf8_lossy(id).into_owned()
}

/// Parse a RIFF container header and return (form_type, total_size).
///
/// The header is 12 bytes:
/// - Bytes 0-3: "RIFF"
/// - Bytes 4-7: Chunk size (little-endian u32) - size of everything after this field
/// - Bytes 8-11: Form type (e.g., "WAVE")
///
/// Total file size = chunk_size + 8
pub fn parse_riff_header(header: &[u8]) -> Result<([u8; 4], u64)> {
    if header.len() < RIFF_HEADER_LEN {
        return Err(WamdError::InvalidRiff("header too short".to_string()));
    }

    if &header[0..4] != RIFF_MAGIC {
        return Err(WamdError::InvalidRiff("magic mismatch".to_string()));
    }

    let chunk_size = u32::from_le_bytes([header[4], header[5], header[6], header[7]]) as u64;
    let total_size = chunk_size.saturating_add(8);

    let mut form_type = [0u8; 4];
    form_type.copy_from_slice(&header[8..12]);

    Ok((form_type, total_size))
}

/// Lazy, restartable walk over the chunk headers in a byte buffer.
///
/// Each step reads a 4-byte id and a little-endian u32 length, then advances
/// past the payload rounded up to an even byte boundary (RIFF chunks are
/// word-aligned). The iterator fuses after the first structural error.
#[derive(Debug, Clone)]
pub struct ChunkIter<'a> {
    buf: &'a [u8],
    pos: usize,
    done: bool,
}

impl<'a> ChunkIter<'a> {
    pub fn new(buf: &'a [u8], start: usize) -> Self {
        Self {
            buf,
            pos: start,
            done: false,
        }
    }
}

impl<'a> Iterator for ChunkIter<'a> {
    type Item = Result<RiffChunk>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let remaining = self.buf.len().saturating_sub(self.pos);
        if remaining == 0 {
            self.done = true;
            return None;
        }
        if remaining < CHUNK_HEADER_LEN {
            self.done = true;
            return Some(Err(WamdError::TruncatedHeader { offset: self.pos }));
        }

        let mut id = [0u8; 4];
        id.copy_from_slice(&self.buf[self.pos..self.pos + 4]);
        let length = u32::from_le_bytes([
            self.buf[self.pos + 4],
            self.buf[self.pos + 5],
            self.buf[self.pos + 6],
            self.buf[self.pos + 7],
        ]);

        let offset = self.pos + CHUNK_HEADER_LEN;
        let payload_remaining = self.buf.len() - offset;
        if length as usize > payload_remaining {
            self.done = true;
            return Some(Err(WamdError::TruncatedPayload {
                id: fourcc(&id),
                declared: length,
                remaining: payload_remaining,
            }));
        }

        // Word alignment: odd payloads are followed by one pad byte. The pad
        // may be absent when the chunk is the last thing in the buffer.
        let padded = (length as usize).saturating_add(length as usize & 1);
        self.pos = (offset + padded).min(self.buf.len());

        Some(Ok(RiffChunk { id, offset, length }))
    }
}

/// Validate the RIFF/WAVE header of `bytes` and iterate the chunks of the
/// WAVE form body.
pub fn wave_chunks(bytes: &[u8]) -> Result<ChunkIter<'_>> {
    let (form, _) = parse_riff_header(bytes)?;
    if &form != WAVE_FORM {
        return Err(WamdError::InvalidRiff(format!(
            "form type \"{}\" is not WAVE",
            fourcc(&form)
        )));
    }
    Ok(ChunkIter::new(bytes, RIFF_HEADER_LEN))
}

/// Scan a WAVE file for the first chunk with the given id.
///
/// Chunks with other ids are skipped; structural errors propagate.
pub fn find_chunk(bytes: &[u8], id: &[u8; 4]) -> Result<Option<RiffChunk>> {
    for chunk in wave_chunks(bytes)? {
        let chunk = chunk?;
        if chunk.is(id) {
            return Ok(Some(chunk));
        }
    }
    Ok(None)
}

/// Scan a WAVE file for its wamd chunk.
pub fn find_wamd(bytes: &[u8]) -> Result<Option<RiffChunk>> {
    find_chunk(bytes, WAMD_CHUNK_ID)
}
