//! Serialization of a [`WamdMetadata`] back into a wamd chunk body.
//!
//! The output is the chunk payload only; writing the outer "wamd" fourCC,
//! length field, and RIFF word-alignment pad is the chunk writer's job.

use crate::constants::SUBCHUNK_HEADER_LEN;
use crate::metadata::WamdMetadata;
use crate::tag::METATAG_VERSION;

/// Serialize a metadata model to a wamd chunk body.
///
/// The version subchunk is always emitted first, even if the model's
/// sequence was reordered by the caller. Every other subchunk is written
/// byte-exact in model order, padding and unknown tags included, so that
/// decode → encode → decode yields an identical model. No alignment
/// padding is invented beyond explicit PADDING subchunks in the model.
pub fn encode_wamd(meta: &WamdMetadata) -> Vec<u8> {
    let body_len: usize = meta
        .subchunks()
        .iter()
        .map(|sub| SUBCHUNK_HEADER_LEN + sub.len())
        .sum();
    let mut out = Vec::with_capacity(body_len.max(SUBCHUNK_HEADER_LEN + 2));

    write_subchunk(&mut out, METATAG_VERSION, &meta.version().to_le_bytes());

    // The canonical version frame is re-synthesized above; skip its first
    // occurrence in the sequence and pass everything else through.
    let mut version_skipped = false;
    for sub in meta.subchunks() {
        if !version_skipped && sub.tag == METATAG_VERSION {
            version_skipped = true;
            continue;
        }
        write_subchunk(&mut out, sub.tag, &sub.value);
    }

    out
}

fn write_subchunk(out: &mut Vec<u8>, tag: u16, value: &[u8]) {
    out.extend_from_slice(&tag.to_le_bytes());
    out.extend_from_slice(&(value.len() as u32).to_le_bytes());
    out.extend_from_slice(value);
}
