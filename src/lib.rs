//! # wamdkit
//!
//! Parser and encoder for the Wildlife Acoustics "wamd" metadata chunk
//! embedded in RIFF/WAVE recordings.
//!
//! This crate provides the generic RIFF chunk reader used to locate the
//! chunk, the subchunk decoder and encoder for its tag/length/value
//! stream, and a typed metadata model over the decoded records. All
//! operations are pure functions over caller-owned byte buffers; file I/O,
//! PCM decoding, and interpretation of field payloads (GPS strings,
//! temperatures) are left to callers.
//!
//! ```
//! use wamdkit::{extract_wamd, tag};
//!
//! # fn demo(wav_bytes: &[u8]) -> wamdkit::Result<()> {
//! if let Some(meta) = extract_wamd(wav_bytes)? {
//!     if let Some(model) = meta.get_string(tag::METATAG_DEV_MODEL)? {
//!         println!("recorded on a {model}");
//!     }
//! }
//! # Ok(())
//! # }
//! ```

pub mod constants;
pub mod decode;
pub mod encode;
pub mod error;
pub mod metadata;
pub mod riff;
pub mod tag;

pub use decode::{decode_wamd, extract_wamd, has_version1_wamd};
pub use encode::encode_wamd;
pub use error::{Result, WamdError};
pub use metadata::{WamdMetadata, WamdSubchunk};
pub use riff::{find_chunk, find_wamd, wave_chunks, ChunkIter, RiffChunk};
