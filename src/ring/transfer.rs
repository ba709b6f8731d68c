//! Bulk copies between caller buffers and the ring
//!
//! A run of frames starting at a physical index either fits before the end
//! of the channel region or is split in two: up to the end, then from index 0.
//! Nothing here allocates, blocks or logs.

use super::AudioRingBuffer;

/// Frames every buffer can hold, 0 for an empty list
fn frames_in(lengths: impl Iterator<Item = usize>, bytes_per_frame: usize) -> usize {
    lengths.map(|len| len / bytes_per_frame).min().unwrap_or(0)
}

/// Frames of a run of `frames` at `index` before and after the physical end
#[inline]
fn split_run(index: usize, frames: usize, capacity: usize) -> (usize, usize) {
    let to_end = capacity - index;
    if frames <= to_end {
        (frames, 0)
    } else {
        (to_end, frames - to_end)
    }
}

impl AudioRingBuffer {
    /// Copy frames in and advance the write position (producer only)
    pub(crate) fn produce(&self, buffers: &[&[u8]], frame_count: usize) -> usize {
        let Some(arena) = self.arena.as_ref() else {
            return 0;
        };
        if frame_count == 0 || buffers.len() != arena.channels() {
            return 0;
        }

        let bytes_per_frame = self.format.bytes_per_channel_frame();
        let frame_count =
            frame_count.min(frames_in(buffers.iter().map(|b| b.len()), bytes_per_frame));

        let snapshot = self.cursors.producer_snapshot();
        let frames_free = self.capacity - snapshot.used();
        let frames = frames_free.min(frame_count);
        if frames == 0 {
            return 0;
        }

        let index = snapshot.write & self.capacity_mask;
        let (head, tail) = split_run(index, frames, self.capacity);
        let head_bytes = head * bytes_per_frame;
        let total_bytes = frames * bytes_per_frame;

        for (channel, src) in buffers.iter().enumerate() {
            arena.copy_in(channel, index * bytes_per_frame, &src[..head_bytes]);
            if tail > 0 {
                arena.copy_in(channel, 0, &src[head_bytes..total_bytes]);
            }
        }

        self.cursors.publish_write(snapshot.write.wrapping_add(frames));
        frames
    }

    /// Copy frames out, advance the read position and silence the shortfall
    /// (consumer only)
    pub(crate) fn consume(&self, buffers: &mut [&mut [u8]], frame_count: usize) -> usize {
        let Some(arena) = self.arena.as_ref() else {
            return 0;
        };
        if frame_count == 0 || buffers.len() != arena.channels() {
            return 0;
        }

        let bytes_per_frame = self.format.bytes_per_channel_frame();
        let frame_count =
            frame_count.min(frames_in(buffers.iter().map(|b| b.len()), bytes_per_frame));
        if frame_count == 0 {
            return 0;
        }

        let snapshot = self.cursors.consumer_snapshot();
        let frames_available = snapshot.used();

        if frames_available == 0 {
            for dst in buffers.iter_mut() {
                dst.fill(0);
            }
            return 0;
        }

        let frames = frames_available.min(frame_count);
        let index = snapshot.read & self.capacity_mask;
        let (head, tail) = split_run(index, frames, self.capacity);
        let head_bytes = head * bytes_per_frame;
        let total_bytes = frames * bytes_per_frame;

        for (channel, dst) in buffers.iter_mut().enumerate() {
            arena.copy_out(channel, index * bytes_per_frame, &mut dst[..head_bytes]);
            if tail > 0 {
                arena.copy_out(channel, 0, &mut dst[head_bytes..total_bytes]);
            }
        }

        self.cursors.publish_read(snapshot.read.wrapping_add(frames));

        if frames < frame_count {
            let end = frame_count * bytes_per_frame;
            for dst in buffers.iter_mut() {
                dst[total_bytes..end].fill(0);
            }
        }

        frames
    }

    /// Advance the read position by up to `frame_count` frames (consumer only)
    pub(crate) fn discard(&self, frame_count: usize) -> usize {
        if frame_count == 0 || self.arena.is_none() {
            return 0;
        }

        let snapshot = self.cursors.consumer_snapshot();
        let frames = snapshot.used().min(frame_count);
        if frames == 0 {
            return 0;
        }

        self.cursors.publish_read(snapshot.read.wrapping_add(frames));
        frames
    }

    /// Move the read position to the observed write position (consumer only)
    pub(crate) fn discard_all(&self) -> usize {
        if self.arena.is_none() {
            return 0;
        }

        let snapshot = self.cursors.consumer_snapshot();
        let frames = snapshot.used();
        if frames == 0 {
            return 0;
        }

        self.cursors.publish_read(snapshot.write);
        frames
    }
}
