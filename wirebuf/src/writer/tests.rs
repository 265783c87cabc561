#![cfg(test)]

use super::*;
use rand::Rng;

#[test]
fn with_capacity() {
    let writer = Writer::with_capacity(16);
    assert_eq!(writer.len, 0);
    assert!(writer.capacity() >= 16);
    assert!(!writer.is_fixed());
}

#[test]
fn fixed() {
    let mut buffer = [0u8; 16];
    let writer = Writer::fixed(&mut buffer);
    assert_eq!(writer.len, 0);
    assert_eq!(writer.capacity(), 16);
    assert!(writer.is_fixed());
}

#[test]
fn alloc_is_contiguous() {
    let mut writer = Writer::with_capacity(8);
    assert_eq!(writer.alloc(3), Ok(0));
    assert_eq!(writer.alloc(5), Ok(3));
    assert_eq!(writer.alloc(1), Ok(8));
    assert_eq!(writer.len, 9);
}

#[test]
fn alloc_grows_past_capacity() {
    let mut writer = Writer::with_capacity(2);
    assert_eq!(writer.alloc(1024), Ok(0));
    assert_eq!(writer.len, 1024);
    assert!(writer.capacity() >= 1024);
    assert_eq!(writer.bytes(), &[0u8; 1024][..]);
}

#[test]
fn alloc_zero() {
    let mut writer = Writer::with_capacity(4);
    assert_eq!(writer.alloc(0), Ok(0));
    assert_eq!(writer.alloc(4), Ok(0));
    assert_eq!(writer.alloc(0), Ok(4));
    assert_eq!(writer.len, 4);
}

#[test]
fn alloc_fixed_out_of_memory() {
    let mut buffer = [7u8; 4];
    let mut writer = Writer::fixed(&mut buffer);
    assert_eq!(writer.alloc(4), Ok(0));
    assert_eq!(writer.alloc(1), Err(Error::OutOfMemory));
    assert_eq!(writer.len, 4);
    assert_eq!(writer.bytes(), &[7u8; 4][..]);
}

#[test]
fn alloc_random_offsets_are_prefix_sums() {
    let mut rng = rand::thread_rng();
    let mut writer = Writer::with_capacity(16);
    let mut expected = 0usize;
    for _ in 0..256 {
        let n = rng.gen_range(0..64);
        assert_eq!(writer.alloc(n), Ok(expected));
        expected += n;
    }
    assert_eq!(writer.bytes().len(), expected);
}

#[test]
fn write_at() {
    let mut writer = Writer::with_capacity(4);
    let offset = writer.alloc(4).expect("should allocate four bytes");
    writer.write_at(offset, &[1, 2, 3, 4]);
    assert_eq!(writer.bytes(), &[1, 2, 3, 4]);
    let offset = writer.alloc(4).expect("should allocate four more bytes");
    assert_eq!(offset, 4);
    assert_eq!(writer.bytes().len(), 8);
}

#[test]
fn write_at_fixed() {
    let mut buffer = [0u8; 4];
    let mut writer = Writer::fixed(&mut buffer);
    let offset = writer.alloc(4).expect("should allocate four bytes");
    writer.write_at(offset, &[1, 2, 3, 4]);
    assert_eq!(writer.bytes(), &[1, 2, 3, 4]);
    drop(writer);
    assert_eq!(buffer, [1, 2, 3, 4]);
}

#[test]
#[should_panic(expected = "out of range")]
fn write_at_past_allocation() {
    let mut writer = Writer::with_capacity(4);
    writer.alloc(2).expect("should allocate two bytes");
    writer.write_at(0, &[1, 2, 3, 4]);
}

#[test]
fn try_write_at() {
    let mut writer = Writer::with_capacity(4);
    let offset = writer.alloc(4).expect("should allocate four bytes");
    assert_eq!(writer.try_write_at(offset, &[1, 2, 3, 4]), Ok(()));
    assert_eq!(writer.bytes(), &[1, 2, 3, 4]);
}

#[test]
fn try_write_at_past_allocation() {
    let mut writer = Writer::with_capacity(4);
    writer.alloc(2).expect("should allocate two bytes");
    assert_eq!(
        writer.try_write_at(1, &[1, 2]),
        Err(Error::BufferOverflow)
    );
    assert_eq!(writer.bytes(), &[0, 0]);
}

#[test]
fn reset() {
    let mut writer = Writer::with_capacity(4);
    writer.alloc(64).expect("should allocate into grown storage");
    let capacity = writer.capacity();
    writer.reset();
    assert_eq!(writer.len, 0);
    assert!(writer.is_empty());
    assert_eq!(writer.capacity(), capacity);
    assert_eq!(writer.alloc(4), Ok(0));
}

#[test]
fn reset_empty_writer() {
    let mut writer = Writer::with_capacity(4);
    writer.reset();
    assert_eq!(writer.len, 0);
    assert_eq!(writer.alloc(2), Ok(0));
}

#[test]
fn reset_fixed() {
    let mut buffer = [0u8; 4];
    let mut writer = Writer::fixed(&mut buffer);
    writer.alloc(4).expect("should allocate four bytes");
    writer.reset();
    assert_eq!(writer.len, 0);
    assert_eq!(writer.capacity(), 4);
    assert_eq!(writer.alloc(4), Ok(0));
}

#[test]
fn bytes_length_tracks_allocations() {
    let mut writer = Writer::with_capacity(4);
    assert!(writer.bytes().is_empty());
    writer.alloc(3).expect("should allocate three bytes");
    writer.alloc(5).expect("should allocate five bytes");
    assert_eq!(writer.bytes().len(), 8);
    writer.reset();
    assert!(writer.bytes().is_empty());
}
