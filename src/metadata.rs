//! Typed view over a decoded wamd subchunk stream.
//!
//! Every subchunk is held uniformly as `(tag, bytes)`; the semantic
//! accessors are layered on top via the static tag catalog and never
//! reject unknown tags. When the stream's version is one this crate does
//! not support, the raw sequence is retained for inspection but the
//! semantic accessors report nothing rather than guessing the layout.

use std::collections::HashMap;

use serde::Serialize;

use crate::constants::META_VERSION;
use crate::error::{Result, WamdError};
use crate::tag::{self, TagKind, METATAG_PADDING};

/// One (tag, value) record from a wamd chunk payload.
///
/// The wire-format length field is implied by `value.len()`; storing it
/// separately would allow the two to disagree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WamdSubchunk {
    pub tag: u16,
    pub value: Vec<u8>,
}

impl WamdSubchunk {
    pub fn new(tag: u16, value: impl Into<Vec<u8>>) -> Self {
        Self {
            tag,
            value: value.into(),
        }
    }

    pub fn len(&self) -> usize {
        self.value.len()
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    pub fn is_padding(&self) -> bool {
        self.tag == METATAG_PADDING
    }
}

/// A decoded wamd chunk: format version plus the ordered subchunk sequence.
///
/// The sequence is owned exclusively by the model and includes the leading
/// version subchunk, so re-encoding reproduces the original byte stream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WamdMetadata {
    version: u16,
    version_supported: bool,
    subchunks: Vec<WamdSubchunk>,
    /// tag -> indices into `subchunks`, insertion order preserved among
    /// duplicates; padding subchunks are never indexed
    #[serde(skip_serializing)]
    index: HashMap<u16, Vec<usize>>,
}

impl WamdMetadata {
    /// Build a model from a version and an ordered subchunk sequence, e.g.
    /// for encoding metadata assembled by the caller.
    pub fn new(version: u16, subchunks: Vec<WamdSubchunk>) -> Self {
        Self::assemble(version, version == META_VERSION, subchunks)
    }

    pub(crate) fn assemble(
        version: u16,
        version_supported: bool,
        subchunks: Vec<WamdSubchunk>,
    ) -> Self {
        let mut index: HashMap<u16, Vec<usize>> = HashMap::new();
        for (i, sub) in subchunks.iter().enumerate() {
            if sub.is_padding() {
                continue;
            }
            index.entry(sub.tag).or_default().push(i);
        }
        Self {
            version,
            version_supported,
            subchunks,
            index,
        }
    }

    pub fn version(&self) -> u16 {
        self.version
    }

    /// False when the stream declared a version other than
    /// [`META_VERSION`]; the raw subchunks remain inspectable but the
    /// semantic accessors return nothing.
    pub fn version_supported(&self) -> bool {
        self.version_supported
    }

    /// The full decoded sequence, padding subchunks included, in stream order.
    pub fn subchunks(&self) -> &[WamdSubchunk] {
        &self.subchunks
    }

    fn first_occurrence(&self, tag: u16) -> Option<&[u8]> {
        let indices = self.index.get(&tag)?;
        indices.first().map(|&i| self.subchunks[i].value.as_slice())
    }

    /// Decode a text tag's value. A single trailing NUL is stripped:
    /// hardware may or may not terminate these strings, and both spellings
    /// must decode identically.
    pub fn get_string(&self, tag: u16) -> Result<Option<String>> {
        if tag::tag_kind(tag) != TagKind::Text {
            return Err(WamdError::WrongKind { tag });
        }
        if !self.version_supported {
            return Ok(None);
        }
        let Some(bytes) = self.first_occurrence(tag) else {
            return Ok(None);
        };
        let trimmed = match bytes.split_last() {
            Some((0, rest)) => rest,
            _ => bytes,
        };
        match std::str::from_utf8(trimmed) {
            Ok(text) => Ok(Some(text.to_string())),
            Err(_) => Err(WamdError::InvalidString { tag }),
        }
    }

    /// Decode a fixed 2-byte little-endian value, such as the time
    /// expansion factor. A stored length other than 2 is a `WrongLength`
    /// error local to this query.
    pub fn get_u16(&self, tag: u16) -> Result<Option<u16>> {
        if !self.version_supported {
            return Ok(None);
        }
        let Some(bytes) = self.first_occurrence(tag) else {
            return Ok(None);
        };
        if bytes.len() != 2 {
            return Err(WamdError::WrongLength {
                tag,
                expected: 2,
                actual: bytes.len(),
            });
        }
        Ok(Some(u16::from_le_bytes([bytes[0], bytes[1]])))
    }

    /// Raw bytes of the first occurrence of a tag. Always available,
    /// including for unknown tags, the embedded-WAV voice note, and streams
    /// with an unsupported version.
    pub fn get_blob(&self, tag: u16) -> Option<&[u8]> {
        self.first_occurrence(tag)
    }

    /// Raw bytes of every occurrence of a tag, in stream order. Tags are
    /// not required to be unique in the wire format.
    pub fn get_raw(&self, tag: u16) -> Vec<&[u8]> {
        match self.index.get(&tag) {
            Some(indices) => indices
                .iter()
                .map(|&i| self.subchunks[i].value.as_slice())
                .collect(),
            None => Vec::new(),
        }
    }
}
