//! Shared builders for assembling complete WAV files in memory.

/// Frame one wamd subchunk: u16 tag + u32 length + value, little-endian.
pub fn subchunk(tag: u16, value: &[u8]) -> Vec<u8> {
    let mut buf = Vec::new();
    buf.extend_from_slice(&tag.to_le_bytes());
    buf.extend_from_slice(&(value.len() as u32).to_le_bytes());
    buf.extend_from_slice(value);
    buf
}

/// A version-1 wamd payload followed by the given subchunk frames.
pub fn wamd_payload(frames: &[Vec<u8>]) -> Vec<u8> {
    let mut payload = subchunk(0x0000, &1u16.to_le_bytes());
    for frame in frames {
        payload.extend_from_slice(frame);
    }
    payload
}

/// Build a minimal PCM WAV file with fmt, an optional JUNK chunk, a data
/// chunk, and optionally a trailing wamd chunk.
pub fn build_wav(wamd: Option<&[u8]>) -> Vec<u8> {
    let sample_rate = 256_000u32;
    let channels = 1u16;
    let bits_per_sample = 16u16;
    let block_align = channels * bits_per_sample / 8;
    let samples: Vec<u8> = vec![0u8; 32];

    let mut body = Vec::new();

    // fmt chunk (PCM)
    body.extend_from_slice(b"fmt ");
    body.extend_from_slice(&16u32.to_le_bytes());
    body.extend_from_slice(&1u16.to_le_bytes()); // format tag: PCM
    body.extend_from_slice(&channels.to_le_bytes());
    body.extend_from_slice(&sample_rate.to_le_bytes());
    body.extend_from_slice(&(sample_rate * block_align as u32).to_le_bytes());
    body.extend_from_slice(&block_align.to_le_bytes());
    body.extend_from_slice(&bits_per_sample.to_le_bytes());

    // JUNK chunk, which readers must skip without error
    body.extend_from_slice(b"JUNK");
    body.extend_from_slice(&8u32.to_le_bytes());
    body.extend_from_slice(&[0u8; 8]);

    // data chunk
    body.extend_from_slice(b"data");
    body.extend_from_slice(&(samples.len() as u32).to_le_bytes());
    body.extend_from_slice(&samples);

    if let Some(payload) = wamd {
        body.extend_from_slice(b"wamd");
        body.extend_from_slice(&(payload.len() as u32).to_le_bytes());
        body.extend_from_slice(payload);
        if payload.len() % 2 != 0 {
            body.push(0); // RIFF word alignment
        }
    }

    let mut wav = Vec::new();
    wav.extend_from_slice(b"RIFF");
    wav.extend_from_slice(&((body.len() + 4) as u32).to_le_bytes());
    wav.extend_from_slice(b"WAVE");
    wav.extend_from_slice(&body);
    wav
}
