//! Producer and consumer halves of a ring buffer

use std::sync::Arc;

use tracing::trace;

use super::AudioRingBuffer;
use crate::audio::AudioFormat;

/// Writing half of a split ring buffer
///
/// There is exactly one producer per buffer. It can be moved to another
/// thread, such as an audio callback.
#[derive(Debug)]
pub struct Producer {
    buffer: Arc<AudioRingBuffer>,
}

/// Reading half of a split ring buffer
///
/// There is exactly one consumer per buffer. It can be moved to another
/// thread, such as an audio callback.
#[derive(Debug)]
pub struct Consumer {
    buffer: Arc<AudioRingBuffer>,
}

impl AudioRingBuffer {
    /// Split the buffer into a producer and a consumer
    #[must_use]
    pub fn split(self) -> (Producer, Consumer) {
        trace!(capacity = self.capacity, "splitting ring buffer");
        let buffer = Arc::new(self);
        (
            Producer {
                buffer: Arc::clone(&buffer),
            },
            Consumer { buffer },
        )
    }

    /// Join a producer and consumer back into the buffer they were split from
    ///
    /// # Errors
    ///
    /// Returns both halves unchanged if they belong to different buffers.
    pub fn reunite(
        producer: Producer,
        consumer: Consumer,
    ) -> std::result::Result<Self, (Producer, Consumer)> {
        if !Arc::ptr_eq(&producer.buffer, &consumer.buffer) {
            return Err((producer, consumer));
        }

        drop(consumer);
        match Arc::try_unwrap(producer.buffer) {
            Ok(buffer) => {
                trace!(capacity = buffer.capacity, "reunited ring buffer");
                Ok(buffer)
            }
            Err(buffer) => Err((
                Producer {
                    buffer: Arc::clone(&buffer),
                },
                Consumer { buffer },
            )),
        }
    }
}

impl Producer {
    /// Write up to `frame_count` frames from `buffers`, one slice per channel
    ///
    /// Returns the number of frames written. Never blocks.
    pub fn write(&mut self, buffers: &[&[u8]], frame_count: usize) -> usize {
        self.buffer.produce(buffers, frame_count)
    }

    /// Get frames of free space
    #[must_use]
    pub fn free_space(&self) -> usize {
        self.buffer.free_space()
    }

    /// Check if no frames can be written
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.buffer.is_full()
    }

    /// Get the capacity in frames
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.buffer.capacity()
    }

    /// Get the format of the stored audio
    #[must_use]
    pub fn format(&self) -> &AudioFormat {
        self.buffer.format()
    }
}

impl Consumer {
    /// Read up to `frame_count` frames into `buffers`, one slice per channel
    ///
    /// Frames that could not be read are filled with silence. Returns the number
    /// of frames actually read. Never blocks.
    pub fn read(&mut self, buffers: &mut [&mut [u8]], frame_count: usize) -> usize {
        self.buffer.consume(buffers, frame_count)
    }

    /// Discard up to `frame_count` frames, returning the number discarded
    pub fn skip(&mut self, frame_count: usize) -> usize {
        self.buffer.discard(frame_count)
    }

    /// Discard every frame available, returning the number discarded
    pub fn drain(&mut self) -> usize {
        self.buffer.discard_all()
    }

    /// Get frames available for reading
    #[must_use]
    pub fn available_frames(&self) -> usize {
        self.buffer.available_frames()
    }

    /// Check if no frames can be read
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Get the capacity in frames
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.buffer.capacity()
    }

    /// Get the format of the stored audio
    #[must_use]
    pub fn format(&self) -> &AudioFormat {
        self.buffer.format()
    }
}
