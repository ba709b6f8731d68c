//! Owned non-interleaved buffer list

use super::format::AudioFormat;

/// One zero-initialised byte buffer per channel
///
/// The ring buffer transfers data through plain slices (`&[&[u8]]` and
/// `&mut [&mut [u8]]`); this type owns such a set of slices and hands them out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AudioBufferList {
    buffers: Vec<Vec<u8>>,
    bytes_per_frame: usize,
}

impl AudioBufferList {
    /// Create a silent buffer list able to hold `frames` frames of `format`
    #[must_use]
    pub fn new(format: &AudioFormat, frames: usize) -> Self {
        let bytes_per_frame = format.bytes_per_channel_frame();
        Self {
            buffers: vec![vec![0u8; frames * bytes_per_frame]; format.channel_count()],
            bytes_per_frame,
        }
    }

    /// Get number of channel buffers
    #[must_use]
    pub fn channels(&self) -> usize {
        self.buffers.len()
    }

    /// Get number of frames each buffer can hold
    #[must_use]
    pub fn frame_capacity(&self) -> usize {
        match (self.buffers.first(), self.bytes_per_frame) {
            (Some(buffer), bpf) if bpf > 0 => buffer.len() / bpf,
            _ => 0,
        }
    }

    /// Get the bytes of one channel
    ///
    /// # Panics
    ///
    /// Panics if `channel` is out of range.
    #[must_use]
    pub fn channel(&self, channel: usize) -> &[u8] {
        &self.buffers[channel]
    }

    /// Get the bytes of one channel mutably
    ///
    /// # Panics
    ///
    /// Panics if `channel` is out of range.
    pub fn channel_mut(&mut self, channel: usize) -> &mut [u8] {
        &mut self.buffers[channel]
    }

    /// Borrow every channel as a source list
    #[must_use]
    pub fn as_slices(&self) -> Vec<&[u8]> {
        self.buffers.iter().map(Vec::as_slice).collect()
    }

    /// Borrow every channel as a destination list
    pub fn as_mut_slices(&mut self) -> Vec<&mut [u8]> {
        self.buffers.iter_mut().map(Vec::as_mut_slice).collect()
    }

    /// Fill one channel with native-endian `f32` samples, starting at frame 0
    ///
    /// Samples beyond the buffer's capacity are ignored.
    pub fn write_samples_f32(&mut self, channel: usize, samples: &[f32]) {
        let buffer = &mut self.buffers[channel];
        for (chunk, sample) in buffer.chunks_exact_mut(4).zip(samples) {
            chunk.copy_from_slice(&sample.to_ne_bytes());
        }
    }

    /// Decode one channel as native-endian `f32` samples
    #[must_use]
    pub fn samples_f32(&self, channel: usize) -> Vec<f32> {
        self.buffers[channel]
            .chunks_exact(4)
            .map(|chunk| f32::from_ne_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]))
            .collect()
    }

    /// Check whether every byte in every channel is zero
    #[must_use]
    pub fn is_silent(&self) -> bool {
        self.buffers.iter().all(|b| b.iter().all(|&x| x == 0))
    }
}
