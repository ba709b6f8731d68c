//! Audio format definitions

use crate::error::{Result, RingBufferError};

/// Audio sample format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SampleFormat {
    /// 16-bit signed integer
    I16,
    /// 24-bit signed integer (packed)
    I24,
    /// 32-bit signed integer
    I32,
    /// 32-bit float
    F32,
}

impl SampleFormat {
    /// Get bytes per sample
    #[must_use]
    pub fn bytes_per_sample(self) -> u32 {
        match self {
            SampleFormat::I16 => 2,
            SampleFormat::I24 => 3,
            SampleFormat::I32 | SampleFormat::F32 => 4,
        }
    }

    /// Get bits per sample
    #[must_use]
    pub fn bits_per_sample(self) -> u32 {
        self.bytes_per_sample() * 8
    }
}

/// Description of the audio stored in a ring buffer
///
/// Only `bytes_per_frame`, `channels_per_frame` and `interleaved` affect the
/// buffer layout. The remaining fields are carried along for the caller.
///
/// For non-interleaved audio `bytes_per_frame` counts the bytes of a single
/// channel, since each channel lives in its own buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct AudioFormat {
    /// Sample rate in Hz
    pub sample_rate: u32,
    /// Bytes in one frame of one buffer
    pub bytes_per_frame: u32,
    /// Number of channels
    pub channels_per_frame: u32,
    /// Bits per sample
    pub bits_per_channel: u32,
    /// Whether channels share one buffer
    pub interleaved: bool,
}

impl AudioFormat {
    /// Create a non-interleaved format with one buffer per channel
    #[must_use]
    pub fn non_interleaved(sample_format: SampleFormat, sample_rate: u32, channels: u32) -> Self {
        Self {
            sample_rate,
            bytes_per_frame: sample_format.bytes_per_sample(),
            channels_per_frame: channels,
            bits_per_channel: sample_format.bits_per_sample(),
            interleaved: false,
        }
    }

    /// Create an interleaved format with all channels in one buffer
    #[must_use]
    pub fn interleaved(sample_format: SampleFormat, sample_rate: u32, channels: u32) -> Self {
        Self {
            sample_rate,
            bytes_per_frame: sample_format.bytes_per_sample() * channels,
            channels_per_frame: channels,
            bits_per_channel: sample_format.bits_per_sample(),
            interleaved: true,
        }
    }

    /// Check whether each channel has its own buffer
    #[must_use]
    pub fn is_non_interleaved(&self) -> bool {
        !self.interleaved
    }

    /// Get number of channels
    #[must_use]
    pub fn channel_count(&self) -> usize {
        self.channels_per_frame as usize
    }

    /// Get bytes per frame of a single channel buffer
    #[must_use]
    pub fn bytes_per_channel_frame(&self) -> usize {
        self.bytes_per_frame as usize
    }

    /// Check that the format describes a layout a ring buffer can hold
    ///
    /// # Errors
    ///
    /// Returns [`RingBufferError::UnsupportedFormat`] for interleaved formats or
    /// formats with zero bytes per frame or zero channels.
    pub fn validate(&self) -> Result<()> {
        let reason = if self.interleaved {
            "interleaved layout"
        } else if self.bytes_per_frame == 0 {
            "zero bytes per frame"
        } else if self.channels_per_frame == 0 {
            "zero channels"
        } else {
            return Ok(());
        };
        Err(RingBufferError::UnsupportedFormat { reason })
    }

    /// Calculate duration for given number of frames
    #[allow(clippy::cast_precision_loss)]
    #[must_use]
    pub fn frames_to_duration(&self, frames: usize) -> std::time::Duration {
        if self.sample_rate == 0 {
            return std::time::Duration::ZERO;
        }
        std::time::Duration::from_secs_f64(frames as f64 / f64::from(self.sample_rate))
    }

    /// Calculate frames for given duration
    #[allow(clippy::cast_possible_truncation)]
    #[allow(clippy::cast_sign_loss)]
    #[must_use]
    pub fn duration_to_frames(&self, duration: std::time::Duration) -> usize {
        (duration.as_secs_f64() * f64::from(self.sample_rate)).ceil() as usize
    }
}
