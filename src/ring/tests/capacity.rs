use crate::error::RingBufferError;
use crate::ring::capacity::*;

use super::stereo_format;

#[test]
fn test_bit_ceil() {
    assert_eq!(bit_ceil(0), Some(1));
    assert_eq!(bit_ceil(1), Some(1));
    assert_eq!(bit_ceil(2), Some(2));
    assert_eq!(bit_ceil(3), Some(4));
    assert_eq!(bit_ceil(5), Some(8));
    assert_eq!(bit_ceil(1024), Some(1024));
    assert_eq!(bit_ceil(1025), Some(2048));
    assert_eq!(bit_ceil(MAX_CAPACITY), Some(MAX_CAPACITY));
    assert_eq!(bit_ceil(MAX_CAPACITY + 1), None);
}

#[test]
fn test_plan_rounds_up() {
    let plan = plan_capacity(&stereo_format(), 5).unwrap();

    assert_eq!(plan.frames, 8);
    assert_eq!(plan.mask, 7);
    assert_eq!(plan.channels, 2);
    assert_eq!(plan.channel_bytes, 32);
    assert_eq!(plan.total_bytes(), 64);
}

#[test]
fn test_plan_keeps_power_of_two() {
    assert_eq!(plan_capacity(&stereo_format(), 2).unwrap().frames, 2);
    assert_eq!(plan_capacity(&stereo_format(), 4096).unwrap().frames, 4096);
}

#[test]
fn test_plan_rejects_out_of_range() {
    for requested in [0, 1] {
        assert_eq!(
            plan_capacity(&stereo_format(), requested),
            Err(RingBufferError::CapacityOutOfRange {
                requested,
                min: MIN_CAPACITY,
                max: MAX_CAPACITY,
            })
        );
    }

    let err = plan_capacity(&stereo_format(), MAX_CAPACITY + 1).unwrap_err();
    assert!(matches!(err, RingBufferError::CapacityOutOfRange { .. }));
}

#[test]
fn test_plan_rejects_bad_format() {
    let mut format = stereo_format();
    format.interleaved = true;
    let err = plan_capacity(&format, 16).unwrap_err();
    assert!(matches!(err, RingBufferError::UnsupportedFormat { .. }));

    // Format errors take precedence over capacity errors
    let err = plan_capacity(&format, 0).unwrap_err();
    assert!(matches!(err, RingBufferError::UnsupportedFormat { .. }));
}

#[cfg(target_pointer_width = "64")]
#[test]
fn test_plan_rejects_oversized() {
    // 4 bytes per frame: a channel buffer of 2^30 frames no longer fits in u32
    let ceiling = max_frame_capacity(&stereo_format());
    assert!(ceiling < 1 << 30);

    let err = plan_capacity(&stereo_format(), (1 << 29) + 1).unwrap_err();
    match err {
        RingBufferError::CapacityExceeded {
            requested,
            rounded,
            ceiling: reported,
        } => {
            assert_eq!(requested, (1 << 29) + 1);
            assert_eq!(rounded, 1 << 30);
            assert_eq!(reported, ceiling);
        }
        other => panic!("Expected CapacityExceeded, got {other:?}"),
    }

    // The largest power of two under the ceiling is accepted
    assert_eq!(plan_capacity(&stereo_format(), 1 << 29).unwrap().frames, 1 << 29);
}

#[cfg(target_pointer_width = "64")]
#[test]
fn test_ceiling_limited_by_buffer_size() {
    let mut format = stereo_format();
    format.bytes_per_frame = 1;
    format.channels_per_frame = 1;
    assert_eq!(max_frame_capacity(&format), u32::MAX as usize);
}

#[cfg(target_pointer_width = "64")]
#[test]
fn test_ceiling_limited_by_allocation_size() {
    let mut format = stereo_format();
    format.bytes_per_frame = 1;
    format.channels_per_frame = u32::MAX;

    let expected = (isize::MAX as usize / u32::MAX as usize) - std::mem::size_of::<usize>();
    assert_eq!(max_frame_capacity(&format), expected);
    assert!(expected < u32::MAX as usize);
}
