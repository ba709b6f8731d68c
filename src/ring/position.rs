//! Free-running read and write positions
//!
//! The producer owns the write position and the consumer owns the read
//! position. Each side loads its own position relaxed and the other side's
//! with acquire, and publishes its own with release after touching the data.
//! Positions only grow (modulo `usize::MAX + 1`); the frames held are always
//! `write.wrapping_sub(read)`, which stays correct across the integer boundary
//! because the capacity never exceeds half the counter range.

use std::sync::atomic::{AtomicUsize, Ordering};

use crossbeam_utils::CachePadded;

/// Positions observed by one side of the buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Snapshot {
    pub(crate) write: usize,
    pub(crate) read: usize,
}

impl Snapshot {
    /// Frames currently held
    pub(crate) fn used(self) -> usize {
        self.write.wrapping_sub(self.read)
    }
}

/// The two position counters, each on its own cache line
#[derive(Debug, Default)]
pub(crate) struct Cursors {
    write: CachePadded<AtomicUsize>,
    read: CachePadded<AtomicUsize>,
}

impl Cursors {
    /// Load positions as the producer
    #[inline]
    pub(crate) fn producer_snapshot(&self) -> Snapshot {
        Snapshot {
            write: self.write.load(Ordering::Relaxed),
            read: self.read.load(Ordering::Acquire),
        }
    }

    /// Load positions as the consumer
    #[inline]
    pub(crate) fn consumer_snapshot(&self) -> Snapshot {
        Snapshot {
            write: self.write.load(Ordering::Acquire),
            read: self.read.load(Ordering::Relaxed),
        }
    }

    /// Make frames written up to `position` visible to the consumer
    #[inline]
    pub(crate) fn publish_write(&self, position: usize) {
        self.write.store(position, Ordering::Release);
    }

    /// Return space read up to `position` to the producer
    #[inline]
    pub(crate) fn publish_read(&self, position: usize) {
        self.read.store(position, Ordering::Release);
    }

    /// Set both positions to zero; requires exclusive access
    pub(crate) fn reset(&mut self) {
        *self.write.get_mut() = 0;
        *self.read.get_mut() = 0;
    }

    /// Place both positions anywhere in the counter range
    #[cfg(test)]
    pub(crate) fn set(&mut self, write: usize, read: usize) {
        *self.write.get_mut() = write;
        *self.read.get_mut() = read;
    }
}
