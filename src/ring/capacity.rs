//! Capacity planning
//!
//! Turns a requested minimum frame capacity into the power-of-two capacity the
//! ring buffer actually allocates, bounded by what a buffer list can describe
//! and what the allocator can provide.

use crate::audio::AudioFormat;
use crate::error::{Result, RingBufferError};

/// The minimum supported buffer capacity in frames
pub const MIN_CAPACITY: usize = 2;

/// The maximum supported buffer capacity in frames
pub const MAX_CAPACITY: usize = 1 << (usize::BITS - 1);

/// Largest per-channel byte count a buffer list can describe
pub const MAX_BUFFER_BYTES: usize = u32::MAX as usize;

/// Largest single allocation the allocator accepts
pub const MAX_ALLOCATION_BYTES: usize = isize::MAX as usize;

/// Storage layout computed for a format and capacity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CapacityPlan {
    /// Capacity in frames (a power of two)
    pub frames: usize,
    /// `frames - 1`, maps a position to a slot
    pub mask: usize,
    /// Number of channel regions
    pub channels: usize,
    /// Bytes in each channel region
    pub channel_bytes: usize,
}

impl CapacityPlan {
    /// Total bytes of channel storage
    #[must_use]
    pub fn total_bytes(&self) -> usize {
        self.channel_bytes * self.channels
    }
}

/// Smallest power of two not less than `x`
///
/// Returns 1 for 0 and 1, and `None` if the result does not fit in a `usize`.
#[must_use]
pub fn bit_ceil(x: usize) -> Option<usize> {
    x.checked_next_power_of_two()
}

/// Largest capacity in frames a format can be allocated with
///
/// The format must already be validated (non-zero bytes per frame and channels).
#[must_use]
pub fn max_frame_capacity(format: &AudioFormat) -> usize {
    let bytes_per_frame = format.bytes_per_channel_frame();
    let channels = format.channel_count();

    // Values larger than this overflow a buffer list's byte size
    let buffer_limit = MAX_BUFFER_BYTES / bytes_per_frame;
    // Values larger than this exceed the maximum allocation size, less one
    // pointer-sized word per channel
    let allocation_limit = (MAX_ALLOCATION_BYTES / channels)
        .saturating_sub(std::mem::size_of::<usize>())
        / bytes_per_frame;

    buffer_limit.min(allocation_limit)
}

/// Compute the capacity for `format` holding at least `min_frame_capacity` frames
///
/// # Errors
///
/// Returns [`RingBufferError::UnsupportedFormat`] if the format is invalid,
/// [`RingBufferError::CapacityOutOfRange`] if `min_frame_capacity` is outside
/// [`MIN_CAPACITY`]`..=`[`MAX_CAPACITY`], and
/// [`RingBufferError::CapacityExceeded`] if the rounded capacity is larger than
/// the format allows.
pub fn plan_capacity(format: &AudioFormat, min_frame_capacity: usize) -> Result<CapacityPlan> {
    format.validate()?;

    if !(MIN_CAPACITY..=MAX_CAPACITY).contains(&min_frame_capacity) {
        return Err(RingBufferError::CapacityOutOfRange {
            requested: min_frame_capacity,
            min: MIN_CAPACITY,
            max: MAX_CAPACITY,
        });
    }

    let ceiling = max_frame_capacity(format);
    let frames = match bit_ceil(min_frame_capacity) {
        Some(frames) if frames <= ceiling => frames,
        rounded => {
            return Err(RingBufferError::CapacityExceeded {
                requested: min_frame_capacity,
                rounded: rounded.unwrap_or(usize::MAX),
                ceiling,
            });
        }
    };

    Ok(CapacityPlan {
        frames,
        mask: frames - 1,
        channels: format.channel_count(),
        channel_bytes: frames * format.bytes_per_channel_frame(),
    })
}
