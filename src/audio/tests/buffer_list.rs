use crate::audio::{AudioBufferList, AudioFormat, SampleFormat};

#[test]
fn test_new_is_silent() {
    let format = AudioFormat::non_interleaved(SampleFormat::I16, 44100, 3);
    let list = AudioBufferList::new(&format, 16);

    assert_eq!(list.channels(), 3);
    assert_eq!(list.frame_capacity(), 16);
    assert_eq!(list.channel(2).len(), 32);
    assert!(list.is_silent());
}

#[test]
fn test_f32_samples() {
    let format = AudioFormat::non_interleaved(SampleFormat::F32, 48000, 2);
    let mut list = AudioBufferList::new(&format, 4);

    list.write_samples_f32(1, &[0.5, -0.25, 1.0, 0.0, 9.0]);

    assert_eq!(list.samples_f32(1), vec![0.5, -0.25, 1.0, 0.0]);
    assert_eq!(list.samples_f32(0), vec![0.0; 4]);
    assert!(!list.is_silent());
}

#[test]
fn test_slices_share_storage() {
    let format = AudioFormat::non_interleaved(SampleFormat::I16, 44100, 2);
    let mut list = AudioBufferList::new(&format, 2);

    for slice in list.as_mut_slices() {
        slice[0] = 7;
    }

    let slices = list.as_slices();
    assert_eq!(slices.len(), 2);
    assert_eq!(slices[0][0], 7);
    assert_eq!(slices[1][0], 7);
}

#[test]
fn test_empty_format() {
    let list = AudioBufferList::new(&AudioFormat::default(), 8);
    assert_eq!(list.channels(), 0);
    assert_eq!(list.frame_capacity(), 0);
}
