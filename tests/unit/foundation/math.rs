use super::*;

#[test]
fn clamp_to_byte_saturates_both_ends() {
    assert_eq!(clamp_to_byte(-1), 0);
    assert_eq!(clamp_to_byte(0), 0);
    assert_eq!(clamp_to_byte(128), 128);
    assert_eq!(clamp_to_byte(255), 255);
    assert_eq!(clamp_to_byte(400), 255);
}

#[test]
fn blend_endpoints_are_exact() {
    assert_eq!(blend_u8(10, 200, 0), 10);
    assert_eq!(blend_u8(10, 200, 255), 200);
}

#[test]
fn blend_midpoint_lands_between() {
    let mid = blend_u8(0, 200, 128);
    assert!((99..=101).contains(&mid));
}

#[test]
fn mul_div255_rounds_to_nearest() {
    assert_eq!(mul_div255_u8(255, 255), 255);
    assert_eq!(mul_div255_u8(255, 0), 0);
    assert_eq!(mul_div255_u8(128, 128), 64);
}
