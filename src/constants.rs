//! # Constants Module
//!
//! Centralized framing constants for the RIFF container and the wamd
//! subchunk stream. This avoids magic numbers scattered across the codebase.

/// The only wamd format version this crate knows how to interpret
pub const META_VERSION: u16 = 1;

/// RIFF container header: "RIFF" + u32 size + form type (12 bytes)
pub const RIFF_HEADER_LEN: usize = 12;

/// RIFF chunk header: 4-byte fourCC + u32 length (8 bytes)
pub const CHUNK_HEADER_LEN: usize = 8;

/// wamd subchunk header: u16 tag + u32 length (6 bytes)
pub const SUBCHUNK_HEADER_LEN: usize = 6;

/// Declared length of the leading version subchunk value
pub const VERSION_VALUE_LEN: u32 = 2;
