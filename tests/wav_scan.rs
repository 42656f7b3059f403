//! Chunk reader tests over complete in-memory WAV files.

mod common;

use common::{build_wav, subchunk, wamd_payload};
use wamdkit::{find_chunk, find_wamd, wave_chunks, WamdError};

#[test]
fn walks_every_chunk_of_a_wav_file() {
    let payload = wamd_payload(&[subchunk(0x0001, b"SM3")]);
    let wav = build_wav(Some(&payload));

    let ids: Vec<[u8; 4]> = wave_chunks(&wav)
        .expect("riff header")
        .map(|c| c.expect("chunk").id)
        .collect();
    assert_eq!(ids, vec![*b"fmt ", *b"JUNK", *b"data", *b"wamd"]);
}

#[test]
fn locates_the_wamd_chunk_past_junk_and_data() {
    let payload = wamd_payload(&[subchunk(0x0001, b"SM3")]);
    let wav = build_wav(Some(&payload));

    let chunk = find_wamd(&wav).expect("scan").expect("wamd present");
    assert_eq!(chunk.payload(&wav), payload.as_slice());
}

#[test]
fn wav_without_wamd_is_not_an_error() {
    let wav = build_wav(None);
    assert!(find_wamd(&wav).expect("scan").is_none());
    // other chunks are still reachable
    let fmt = find_chunk(&wav, b"fmt ").expect("scan").expect("fmt");
    assert_eq!(fmt.length, 16);
}

#[test]
fn non_riff_input_is_rejected() {
    let err = find_wamd(b"not a wav file at all").err().expect("error");
    assert!(matches!(err, WamdError::InvalidRiff(_)));
}

#[test]
fn truncated_file_surfaces_a_structural_error() {
    let payload = wamd_payload(&[subchunk(0x0001, b"SM3")]);
    let wav = build_wav(Some(&payload));

    // cut the file in the middle of the data chunk payload
    let cut = &wav[..wav.len() - payload.len() - 8 - 16];
    let err = find_wamd(cut).err().expect("error");
    assert!(matches!(err, WamdError::TruncatedPayload { .. }));
}
