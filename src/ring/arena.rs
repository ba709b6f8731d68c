//! Single-allocation storage for every channel region

use std::alloc::{self, Layout};
use std::ptr::NonNull;

use crate::error::{Result, RingBufferError};

/// One zero-initialised heap block holding `channels` equal-sized regions
///
/// Region `i` starts at byte `i * channel_bytes`. Regions are handed out as
/// raw pointers because the producer and consumer access disjoint parts of
/// them concurrently; the position protocol decides which bytes each side may
/// touch.
pub(crate) struct ChannelArena {
    ptr: NonNull<u8>,
    layout: Layout,
    channels: usize,
    channel_bytes: usize,
}

// Safety: the arena exclusively owns its block; concurrent access to the
// bytes is coordinated by the ring buffer's positions.
unsafe impl Send for ChannelArena {}
unsafe impl Sync for ChannelArena {}

impl ChannelArena {
    /// Allocate zeroed storage for `channels` regions of `channel_bytes` bytes
    pub(crate) fn allocate(channels: usize, channel_bytes: usize) -> Result<Self> {
        let bytes = channels.saturating_mul(channel_bytes);
        let layout = Layout::from_size_align(bytes, 1)
            .map_err(|_| RingBufferError::AllocationFailed { bytes })?;
        if layout.size() == 0 {
            return Err(RingBufferError::AllocationFailed { bytes });
        }

        // Safety: the layout has a non-zero size
        let raw = unsafe { alloc::alloc_zeroed(layout) };
        let ptr = NonNull::new(raw).ok_or(RingBufferError::AllocationFailed { bytes })?;

        Ok(Self {
            ptr,
            layout,
            channels,
            channel_bytes,
        })
    }

    pub(crate) fn channels(&self) -> usize {
        self.channels
    }

    /// Copy `src` into channel `channel` starting at byte `offset`
    ///
    /// The caller must own `offset..offset + src.len()` of that region under
    /// the position protocol.
    pub(crate) fn copy_in(&self, channel: usize, offset: usize, src: &[u8]) {
        debug_assert!(channel < self.channels);
        debug_assert!(offset + src.len() <= self.channel_bytes);
        // Safety: the range lies inside region `channel` and is not accessed by
        // the other side until the write position is published.
        unsafe {
            let dst = self.region_ptr(channel).add(offset);
            std::ptr::copy_nonoverlapping(src.as_ptr(), dst, src.len());
        }
    }

    /// Copy bytes of channel `channel` starting at `offset` into `dst`
    ///
    /// The caller must own `offset..offset + dst.len()` of that region under
    /// the position protocol.
    pub(crate) fn copy_out(&self, channel: usize, offset: usize, dst: &mut [u8]) {
        debug_assert!(channel < self.channels);
        debug_assert!(offset + dst.len() <= self.channel_bytes);
        // Safety: the range lies inside region `channel` and is not written by
        // the producer until the read position is published.
        unsafe {
            let src = self.region_ptr(channel).add(offset);
            std::ptr::copy_nonoverlapping(src, dst.as_mut_ptr(), dst.len());
        }
    }

    /// View one region; requires exclusive access to the arena
    #[cfg(test)]
    pub(crate) fn region(&mut self, channel: usize) -> &[u8] {
        assert!(channel < self.channels);
        // Safety: bounds checked above and `&mut self` excludes concurrent writers
        unsafe { std::slice::from_raw_parts(self.region_ptr(channel), self.channel_bytes) }
    }

    fn region_ptr(&self, channel: usize) -> *mut u8 {
        // Safety: callers pass `channel < self.channels`, so the offset stays
        // inside the allocation
        unsafe { self.ptr.as_ptr().add(channel * self.channel_bytes) }
    }
}

impl Drop for ChannelArena {
    fn drop(&mut self) {
        // Safety: `ptr` was returned by `alloc_zeroed` with this exact layout
        unsafe { alloc::dealloc(self.ptr.as_ptr(), self.layout) };
    }
}

impl std::fmt::Debug for ChannelArena {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChannelArena")
            .field("channels", &self.channels)
            .field("channel_bytes", &self.channel_bytes)
            .finish_non_exhaustive()
    }
}
