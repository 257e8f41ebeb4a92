use super::*;

#[test]
fn packed_rgb_frame_is_accepted() {
    let dims = VideoDims::new(4, 3).unwrap();
    let data = vec![7u8; dims.rgb_len()];
    let frame = SourceFrame::from_rgb(dims, &data).unwrap();
    assert_eq!(frame.dims(), dims);
    assert_eq!(frame.rgb().stride, 12);
    assert_eq!(frame.rgb_row(2).len(), 12);
}

#[test]
fn padded_stride_rows_are_sliced_to_packed_length() {
    let dims = VideoDims::new(4, 3).unwrap();
    let stride = 16;
    let mut data = vec![0u8; stride * 3];
    data[stride * 2] = 99; // first byte of the last row
    let frame = SourceFrame::new(dims, [PlaneRef { data: &data, stride }]).unwrap();
    assert_eq!(frame.rgb_row(2)[0], 99);
    assert_eq!(frame.rgb_row(2).len(), 12);
}

#[test]
fn extra_planes_are_accepted_but_ignored() {
    let dims = VideoDims::new(4, 3).unwrap();
    let rgb = vec![0u8; dims.rgb_len()];
    let chroma = vec![0u8; 8];
    let frame = SourceFrame::new(
        dims,
        [
            PlaneRef {
                data: &rgb,
                stride: dims.rgb_stride(),
            },
            PlaneRef {
                data: &chroma,
                stride: 4,
            },
        ],
    )
    .unwrap();
    assert_eq!(frame.rgb().stride, dims.rgb_stride());
}

#[test]
fn undersized_plane_or_stride_is_rejected() {
    let dims = VideoDims::new(4, 3).unwrap();
    let short = vec![0u8; dims.rgb_len() - 1];
    assert!(SourceFrame::from_rgb(dims, &short).is_err());

    let data = vec![0u8; 64];
    assert!(SourceFrame::new(dims, [PlaneRef { data: &data, stride: 11 }]).is_err());
    assert!(SourceFrame::new(dims, std::iter::empty()).is_err());
}
