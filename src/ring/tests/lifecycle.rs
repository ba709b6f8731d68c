use crate::audio::{AudioFormat, SampleFormat};
use crate::config::RingBufferConfig;
use crate::error::RingBufferError;
use crate::ring::AudioRingBuffer;

use super::{encode, stereo_format};

#[test]
fn test_new_is_empty() {
    let buffer = AudioRingBuffer::new();

    assert!(!buffer.is_allocated());
    assert_eq!(buffer.capacity(), 0);
    assert_eq!(*buffer.format(), AudioFormat::default());
}

#[test]
fn test_with_capacity() {
    let buffer = AudioRingBuffer::with_capacity(&stereo_format(), 100).unwrap();

    assert!(buffer.is_allocated());
    assert_eq!(buffer.capacity(), 128);
    assert_eq!(*buffer.format(), stereo_format());
    assert!(buffer.is_empty());
    assert_eq!(buffer.free_space(), 128);
}

#[test]
fn test_with_capacity_errors() {
    let err = AudioRingBuffer::with_capacity(&stereo_format(), 1).unwrap_err();
    assert!(err.is_configuration_error());

    let format = AudioFormat::interleaved(SampleFormat::F32, 48000, 2);
    let err = AudioRingBuffer::with_capacity(&format, 64).unwrap_err();
    assert!(matches!(err, RingBufferError::UnsupportedFormat { .. }));
}

#[test]
fn test_from_config() {
    let config = RingBufferConfig::builder()
        .format(stereo_format())
        .min_frame_capacity(300)
        .build()
        .unwrap();
    let buffer = AudioRingBuffer::from_config(&config).unwrap();

    assert_eq!(buffer.capacity(), 512);
}

#[test]
fn test_allocate_replaces_existing() {
    let mut buffer = AudioRingBuffer::with_capacity(&stereo_format(), 8).unwrap();
    let src = encode(0..4);
    buffer.write(&[&src, &src], 4);

    let mono = AudioFormat::non_interleaved(SampleFormat::I16, 44100, 1);
    assert!(buffer.allocate(&mono, 20));

    assert_eq!(buffer.capacity(), 32);
    assert_eq!(*buffer.format(), mono);
    assert!(buffer.is_empty());
    assert_eq!(buffer.free_space(), 32);
}

#[test]
fn test_rejected_allocate_keeps_existing() {
    let mut buffer = AudioRingBuffer::with_capacity(&stereo_format(), 8).unwrap();
    let src = encode(0..4);
    buffer.write(&[&src, &src], 4);

    assert!(!buffer.allocate(&stereo_format(), 0));
    let mut bad = stereo_format();
    bad.bytes_per_frame = 0;
    assert!(!buffer.allocate(&bad, 8));

    assert!(buffer.is_allocated());
    assert_eq!(buffer.capacity(), 8);
    assert_eq!(buffer.available_frames(), 4);
}

#[cfg(target_pointer_width = "64")]
#[test]
fn test_failed_allocation_leaves_empty() {
    let mut buffer = AudioRingBuffer::with_capacity(&stereo_format(), 8).unwrap();

    // Passes capacity planning but asks the allocator for about 4 EiB
    let mut huge = stereo_format();
    huge.bytes_per_frame = 1;
    huge.channels_per_frame = u32::MAX;
    let err = buffer.try_allocate(&huge, 1 << 30).unwrap_err();

    assert!(err.is_allocation_failure());
    assert!(!buffer.is_allocated());
    assert_eq!(buffer.capacity(), 0);
    assert_eq!(*buffer.format(), AudioFormat::default());
}

#[test]
fn test_deallocate_twice() {
    let mut buffer = AudioRingBuffer::with_capacity(&stereo_format(), 8).unwrap();

    buffer.deallocate();
    assert!(!buffer.is_allocated());
    assert_eq!(buffer.capacity(), 0);
    assert_eq!(*buffer.format(), AudioFormat::default());

    buffer.deallocate();
    assert!(!buffer.is_allocated());
    assert_eq!(buffer.capacity(), 0);
    assert!(buffer.is_empty());
}

#[test]
fn test_take_moves_contents() {
    let mut source = AudioRingBuffer::with_capacity(&stereo_format(), 8).unwrap();
    let src = encode(0..3);
    source.write(&[&src, &src], 3);

    let moved = std::mem::take(&mut source);

    assert!(moved.is_allocated());
    assert_eq!(moved.available_frames(), 3);
    assert!(!source.is_allocated());
    assert_eq!(source.capacity(), 0);
    assert_eq!(source.available_frames(), 0);
}

#[test]
fn test_buffer_is_send_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<AudioRingBuffer>();
}
