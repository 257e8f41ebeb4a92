use super::*;

use crate::frame::source::PlaneRef;

fn solid(dims: VideoDims, rgb: [u8; 3]) -> Vec<u8> {
    let mut data = vec![0u8; dims.rgb_len()];
    for px in data.chunks_exact_mut(3) {
        px.copy_from_slice(&rgb);
    }
    data
}

#[test]
fn small_deltas_are_amplified() {
    let dims = VideoDims::new(4, 2).unwrap();
    let left = solid(dims, [10, 10, 10]);
    let right = solid(dims, [5, 5, 5]);
    let left = SourceFrame::from_rgb(dims, &left).unwrap();
    let right = SourceFrame::from_rgb(dims, &right).unwrap();

    let mut diff = DiffBuffer::new(dims, 2).unwrap();
    diff.update_region(&left, &right, 0).unwrap();
    assert!(diff.data().iter().all(|&b| b == 10));
}

#[test]
fn amplified_deltas_clamp_at_255() {
    let dims = VideoDims::new(2, 2).unwrap();
    let left = solid(dims, [200, 0, 0]);
    let right = solid(dims, [0, 0, 0]);
    let left = SourceFrame::from_rgb(dims, &left).unwrap();
    let right = SourceFrame::from_rgb(dims, &right).unwrap();

    let mut diff = DiffBuffer::new(dims, 2).unwrap();
    diff.update_region(&left, &right, 0).unwrap();
    for px in diff.data().chunks_exact(3) {
        assert_eq!(px, [255, 0, 0]);
    }
}

#[test]
fn difference_is_symmetric_in_the_operands() {
    let dims = VideoDims::new(2, 1).unwrap();
    let a = solid(dims, [30, 60, 90]);
    let b = solid(dims, [90, 60, 30]);
    let fa = SourceFrame::from_rgb(dims, &a).unwrap();
    let fb = SourceFrame::from_rgb(dims, &b).unwrap();

    let mut ab = DiffBuffer::new(dims, 2).unwrap();
    let mut ba = DiffBuffer::new(dims, 2).unwrap();
    ab.update_region(&fa, &fb, 0).unwrap();
    ba.update_region(&fb, &fa, 0).unwrap();
    assert_eq!(ab.data(), ba.data());
    assert_eq!(&ab.data()[0..3], [120, 0, 120]);
}

#[test]
fn columns_left_of_the_split_are_untouched() {
    let dims = VideoDims::new(4, 2).unwrap();
    let left = solid(dims, [100, 100, 100]);
    let right = solid(dims, [0, 0, 0]);
    let left = SourceFrame::from_rgb(dims, &left).unwrap();
    let right = SourceFrame::from_rgb(dims, &right).unwrap();

    let mut diff = DiffBuffer::new(dims, 2).unwrap();
    diff.update_region(&left, &right, 2).unwrap();
    for y in 0..2usize {
        let row = &diff.data()[y * diff.stride()..(y + 1) * diff.stride()];
        assert!(row[..6].iter().all(|&b| b == 0));
        assert!(row[6..].iter().all(|&b| b == 200));
    }
}

#[test]
fn reads_honor_each_sources_own_stride() {
    let dims = VideoDims::new(2, 2).unwrap();
    // Left rows padded to 16 bytes, right tightly packed.
    let mut left = vec![0u8; 16 * 2];
    for y in 0..2 {
        for px in 0..2 {
            left[y * 16 + px * 3] = 50;
        }
    }
    let right = solid(dims, [10, 0, 0]);
    let left = SourceFrame::new(dims, [PlaneRef { data: &left, stride: 16 }]).unwrap();
    let right = SourceFrame::from_rgb(dims, &right).unwrap();

    let mut diff = DiffBuffer::new(dims, 2).unwrap();
    diff.update_region(&left, &right, 0).unwrap();
    for px in diff.data().chunks_exact(3) {
        assert_eq!(px, [80, 0, 0]);
    }
}

#[test]
fn full_split_leaves_the_buffer_unchanged() {
    let dims = VideoDims::new(3, 1).unwrap();
    let left = solid(dims, [255, 255, 255]);
    let right = solid(dims, [0, 0, 0]);
    let left = SourceFrame::from_rgb(dims, &left).unwrap();
    let right = SourceFrame::from_rgb(dims, &right).unwrap();

    let mut diff = DiffBuffer::new(dims, 2).unwrap();
    diff.update_region(&left, &right, dims.width).unwrap();
    assert!(diff.data().iter().all(|&b| b == 0));
}

#[test]
fn mismatched_dimensions_are_rejected() {
    let dims = VideoDims::new(2, 2).unwrap();
    let other = VideoDims::new(3, 2).unwrap();
    let a = solid(dims, [0, 0, 0]);
    let b = solid(other, [0, 0, 0]);
    let fa = SourceFrame::from_rgb(dims, &a).unwrap();
    let fb = SourceFrame::from_rgb(other, &b).unwrap();

    let mut diff = DiffBuffer::new(dims, 2).unwrap();
    assert!(diff.update_region(&fa, &fb, 0).is_err());
    assert!(DiffBuffer::new(dims, 0).is_err());
}
