//! # audio-ringbuffer
//!
//! A lock-free single-producer/single-consumer ring buffer for non-interleaved,
//! multi-channel audio.
//!
//! ## Features
//!
//! - One allocation holding every channel, sized to a power of two
//! - Wait-free `write`, `read`, `skip` and `drain` that never allocate or block
//! - Reads that come up short are padded with silence
//! - Producer and consumer handles for use from separate threads
//!
//! ## Example
//!
//! ```rust
//! use audio_ringbuffer::{AudioFormat, AudioRingBuffer, SampleFormat};
//!
//! # fn example() -> Result<(), audio_ringbuffer::RingBufferError> {
//! let format = AudioFormat::non_interleaved(SampleFormat::F32, 48000, 2);
//! let buffer = AudioRingBuffer::with_capacity(&format, 1000)?;
//! assert_eq!(buffer.capacity(), 1024);
//!
//! let (mut producer, mut consumer) = buffer.split();
//!
//! let left = [0u8; 64 * 4];
//! let right = [0u8; 64 * 4];
//! assert_eq!(producer.write(&[&left, &right], 64), 64);
//!
//! let mut out_left = [0u8; 64 * 4];
//! let mut out_right = [0u8; 64 * 4];
//! assert_eq!(consumer.read(&mut [&mut out_left, &mut out_right], 64), 64);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```
//!
//! # Architecture
//!
//! - **Capacity planning**: `ring::capacity` rounds the requested capacity and
//!   checks it against buffer-list and allocator limits
//! - **Storage**: a single zeroed block, one region per channel
//! - **Positions**: free-running write and read counters exchanged with
//!   acquire/release ordering
//! - **Transfers**: wraparound-aware copies between caller buffers and the ring

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

/// Audio format and buffer list types
pub mod audio;
/// Configuration
pub mod config;
/// Error types
pub mod error;
pub mod ring;

// Re-exports
pub use audio::{AudioBufferList, AudioFormat, SampleFormat};
pub use config::{RingBufferConfig, RingBufferConfigBuilder};
pub use error::{Result, RingBufferError};
pub use ring::{AudioRingBuffer, Consumer, MAX_CAPACITY, MIN_CAPACITY, Producer};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prelude for common imports
pub mod prelude {
    pub use crate::{
        AudioBufferList, AudioFormat, AudioRingBuffer, Consumer, Producer, RingBufferConfig,
        RingBufferError, SampleFormat,
    };
}
