//! # Error Module
//!
//! Unified error handling for the wamdkit crate.
//!
//! Structural errors (`Truncated*`, `MissingVersionTag`) abort an entire
//! wamd chunk decode: a misaligned subchunk stream cannot be trusted to
//! resynchronize, so no partial metadata is ever returned. Accessor errors
//! (`WrongKind`, `WrongLength`, `InvalidString`) are local to a single
//! query and leave the decoded model intact.

use thiserror::Error;

/// Central error type for wamdkit operations.
#[derive(Debug, Error)]
pub enum WamdError {
    /// The buffer does not start with a well-formed RIFF container header
    #[error("invalid RIFF container: {0}")]
    InvalidRiff(String),

    /// Fewer than 8 bytes remain where a chunk header was expected
    #[error("truncated chunk header at offset {offset}")]
    TruncatedHeader { offset: usize },

    /// A chunk declares more payload bytes than remain in the buffer
    #[error("chunk \"{id}\" payload truncated: {declared} bytes declared, {remaining} remain")]
    TruncatedPayload {
        id: String,
        declared: u32,
        remaining: usize,
    },

    /// A wamd subchunk frame overruns the remaining chunk payload
    #[error("wamd subchunk truncated at offset {offset}: {needed} bytes needed, {remaining} remain")]
    TruncatedSubchunk {
        offset: usize,
        needed: usize,
        remaining: usize,
    },

    /// The first subchunk of a wamd payload is not a 2-byte version tag
    #[error("first wamd subchunk is not a version tag (found {found:#06x})")]
    MissingVersionTag { found: u16 },

    /// A typed accessor was used on a tag whose catalog hint does not match
    #[error("tag {tag:#06x} does not carry text")]
    WrongKind { tag: u16 },

    /// A fixed-width accessor found a value of the wrong stored length
    #[error("tag {tag:#06x} has length {actual}, expected {expected}")]
    WrongLength {
        tag: u16,
        expected: usize,
        actual: usize,
    },

    /// A text accessor found bytes that are not valid UTF-8
    #[error("tag {tag:#06x} holds bytes that are not valid UTF-8")]
    InvalidString { tag: u16 },
}

/// Result type alias using WamdError
pub type Result<T> = std::result::Result<T, WamdError>;
