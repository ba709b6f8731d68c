//! Lock-free SPSC ring buffer for non-interleaved audio
//!
//! One producer writes frames and one consumer reads them, concurrently and
//! without locks. Every channel is stored in its own region of a single
//! allocation whose frame capacity is a power of two.
//!
//! Reconfiguration (`allocate`, `deallocate`) takes `&mut self`, so it can
//! never overlap a transfer. For use from two threads, [`AudioRingBuffer::split`]
//! hands out a [`Producer`] and a [`Consumer`].

mod arena;
pub mod capacity;
mod position;
mod split;
mod transfer;

#[cfg(test)]
mod tests;

use tracing::{debug, trace, warn};

use crate::audio::AudioFormat;
use crate::config::RingBufferConfig;
use crate::error::Result;

use arena::ChannelArena;
use position::Cursors;

pub use capacity::{MAX_CAPACITY, MIN_CAPACITY};
pub use split::{Consumer, Producer};

/// Lock-free ring buffer for non-interleaved audio
///
/// Moving a buffer transfers its storage and positions; `std::mem::take`
/// leaves an empty buffer behind. Buffers cannot be cloned.
#[derive(Debug, Default)]
pub struct AudioRingBuffer {
    /// Channel storage, `None` while unallocated
    arena: Option<ChannelArena>,
    /// Capacity in frames
    capacity: usize,
    /// `capacity - 1`
    capacity_mask: usize,
    /// Free-running positions
    cursors: Cursors,
    /// Format of the stored audio
    format: AudioFormat,
}

impl AudioRingBuffer {
    /// Create an empty ring buffer
    ///
    /// [`allocate`](Self::allocate) must be called before audio can be stored.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a ring buffer holding at least `min_frame_capacity` frames of `format`
    ///
    /// The capacity is the smallest power of two not less than `min_frame_capacity`.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the format or capacity is not supported,
    /// or [`RingBufferError::AllocationFailed`](crate::RingBufferError::AllocationFailed)
    /// if memory could not be allocated.
    pub fn with_capacity(format: &AudioFormat, min_frame_capacity: usize) -> Result<Self> {
        let mut buffer = Self::new();
        buffer.try_allocate(format, min_frame_capacity)?;
        Ok(buffer)
    }

    /// Create a ring buffer from a configuration
    ///
    /// # Errors
    ///
    /// See [`with_capacity`](Self::with_capacity).
    pub fn from_config(config: &RingBufferConfig) -> Result<Self> {
        Self::with_capacity(&config.format, config.min_frame_capacity)
    }

    /// Allocate space for audio, replacing any existing allocation
    ///
    /// Returns `false` if the format or capacity is unsupported or memory could
    /// not be allocated.
    pub fn allocate(&mut self, format: &AudioFormat, min_frame_capacity: usize) -> bool {
        self.try_allocate(format, min_frame_capacity).is_ok()
    }

    /// Allocate space for audio, replacing any existing allocation
    ///
    /// A rejected format or capacity leaves the current allocation untouched.
    /// If the allocator fails the buffer is left empty.
    ///
    /// # Errors
    ///
    /// See [`with_capacity`](Self::with_capacity).
    pub fn try_allocate(&mut self, format: &AudioFormat, min_frame_capacity: usize) -> Result<()> {
        let plan = capacity::plan_capacity(format, min_frame_capacity).inspect_err(|e| {
            debug!(min_frame_capacity, error = %e, "rejected ring buffer configuration");
        })?;

        self.deallocate();

        let arena = ChannelArena::allocate(plan.channels, plan.channel_bytes).inspect_err(|e| {
            warn!(bytes = plan.total_bytes(), error = %e, "ring buffer allocation failed");
        })?;

        self.arena = Some(arena);
        self.capacity = plan.frames;
        self.capacity_mask = plan.mask;
        self.cursors.reset();
        self.format = *format;

        debug!(
            capacity = plan.frames,
            channels = plan.channels,
            bytes = plan.total_bytes(),
            "allocated ring buffer"
        );
        Ok(())
    }

    /// Free the audio storage and return to the empty state
    ///
    /// Does nothing if the buffer is not allocated.
    pub fn deallocate(&mut self) {
        if self.arena.take().is_some() {
            trace!(capacity = self.capacity, "deallocated ring buffer");
            self.capacity = 0;
            self.capacity_mask = 0;
            self.cursors.reset();
            self.format = AudioFormat::default();
        }
    }

    /// Check whether space for audio has been allocated
    #[must_use]
    pub fn is_allocated(&self) -> bool {
        self.arena.is_some()
    }

    /// Get the format of the stored audio
    #[must_use]
    pub fn format(&self) -> &AudioFormat {
        &self.format
    }

    /// Get the capacity in frames, 0 if unallocated
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Get frames of free space
    ///
    /// Only exact when called from the producer.
    #[must_use]
    pub fn free_space(&self) -> usize {
        self.capacity - self.cursors.producer_snapshot().used()
    }

    /// Check if no frames can be written
    ///
    /// Only exact when called from the producer. An unallocated buffer is full.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.cursors.producer_snapshot().used() == self.capacity
    }

    /// Get frames available for reading
    ///
    /// Only exact when called from the consumer.
    #[must_use]
    pub fn available_frames(&self) -> usize {
        self.cursors.consumer_snapshot().used()
    }

    /// Check if no frames can be read
    ///
    /// Only exact when called from the consumer.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        let snapshot = self.cursors.consumer_snapshot();
        snapshot.write == snapshot.read
    }

    /// Write up to `frame_count` frames from `buffers`, one slice per channel
    ///
    /// Returns the number of frames written, which is less than requested when
    /// the buffer fills up.
    pub fn write(&mut self, buffers: &[&[u8]], frame_count: usize) -> usize {
        self.produce(buffers, frame_count)
    }

    /// Read up to `frame_count` frames into `buffers`, one slice per channel
    ///
    /// Frames that could not be read are filled with silence. Returns the number
    /// of frames actually read.
    pub fn read(&mut self, buffers: &mut [&mut [u8]], frame_count: usize) -> usize {
        self.consume(buffers, frame_count)
    }

    /// Discard up to `frame_count` frames, returning the number discarded
    pub fn skip(&mut self, frame_count: usize) -> usize {
        self.discard(frame_count)
    }

    /// Discard every frame available, returning the number discarded
    pub fn drain(&mut self) -> usize {
        self.discard_all()
    }
}
