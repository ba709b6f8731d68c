//! Ring buffer configuration

use std::time::Duration;

use crate::audio::{AudioFormat, SampleFormat};
use crate::error::{Result, RingBufferError};
use crate::ring::capacity;

/// Configuration for creating an [`AudioRingBuffer`](crate::AudioRingBuffer)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RingBufferConfig {
    /// Format of the audio stored in the buffer (default: stereo f32, 44.1kHz, non-interleaved)
    pub format: AudioFormat,

    /// Minimum capacity in frames, rounded up to a power of two (default: 4096)
    pub min_frame_capacity: usize,
}

impl Default for RingBufferConfig {
    fn default() -> Self {
        Self {
            format: AudioFormat::non_interleaved(SampleFormat::F32, 44100, 2),
            min_frame_capacity: 4096,
        }
    }
}

impl RingBufferConfig {
    /// Create a new config builder
    #[must_use]
    pub fn builder() -> RingBufferConfigBuilder {
        RingBufferConfigBuilder::default()
    }

    /// Capacity a buffer created from this config will have
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the format or capacity is unsupported.
    pub fn planned_capacity(&self) -> Result<usize> {
        capacity::plan_capacity(&self.format, self.min_frame_capacity).map(|plan| plan.frames)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CapacityRequest {
    Frames(usize),
    Duration(Duration),
}

/// Builder for `RingBufferConfig`
#[derive(Debug, Clone)]
pub struct RingBufferConfigBuilder {
    format: AudioFormat,
    capacity: CapacityRequest,
}

impl Default for RingBufferConfigBuilder {
    fn default() -> Self {
        let config = RingBufferConfig::default();
        Self {
            format: config.format,
            capacity: CapacityRequest::Frames(config.min_frame_capacity),
        }
    }
}

impl RingBufferConfigBuilder {
    /// Set the audio format
    #[must_use]
    pub fn format(mut self, format: AudioFormat) -> Self {
        self.format = format;
        self
    }

    /// Set the minimum capacity in frames
    #[must_use]
    pub fn min_frame_capacity(mut self, frames: usize) -> Self {
        self.capacity = CapacityRequest::Frames(frames);
        self
    }

    /// Set the minimum capacity as a duration at the format's sample rate
    #[must_use]
    pub fn buffer_duration(mut self, duration: Duration) -> Self {
        self.capacity = CapacityRequest::Duration(duration);
        self
    }

    /// Build and validate the configuration
    ///
    /// # Errors
    ///
    /// Returns [`RingBufferError::InvalidConfig`] if a duration was given for a
    /// format without a sample rate, or a configuration error if the format or
    /// capacity is unsupported.
    pub fn build(self) -> Result<RingBufferConfig> {
        let min_frame_capacity = match self.capacity {
            CapacityRequest::Frames(frames) => frames,
            CapacityRequest::Duration(_) if self.format.sample_rate == 0 => {
                return Err(RingBufferError::InvalidConfig {
                    message: "buffer duration requires a sample rate".to_string(),
                });
            }
            CapacityRequest::Duration(duration) => self.format.duration_to_frames(duration),
        };

        let config = RingBufferConfig {
            format: self.format,
            min_frame_capacity,
        };
        config.planned_capacity()?;
        Ok(config)
    }
}
