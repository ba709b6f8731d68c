use crate::audio::{AudioFormat, SampleFormat};

mod capacity;
mod lifecycle;

/// Two channels of 4-byte samples
pub(super) fn stereo_format() -> AudioFormat {
    AudioFormat::non_interleaved(SampleFormat::I32, 48000, 2)
}

/// Encode samples as native-endian bytes
pub(super) fn encode(values: impl IntoIterator<Item = u32>) -> Vec<u8> {
    values.into_iter().flat_map(u32::to_ne_bytes).collect()
}

/// Decode native-endian bytes into samples
pub(super) fn decode(bytes: &[u8]) -> Vec<u32> {
    bytes
        .chunks_exact(4)
        .map(|c| u32::from_ne_bytes([c[0], c[1], c[2], c[3]]))
        .collect()
}
