use super::*;

use crate::foundation::core::{SurfaceSize, VideoDims};
use crate::present::soft::SoftBackend;

fn geom() -> ViewGeometry {
    let window = SurfaceSize::new(320, 180).unwrap();
    let video = VideoDims::new(320, 180).unwrap();
    ViewGeometry::new(window, window, video).unwrap()
}

#[test]
fn fade_alpha_matches_the_square_root_curve() {
    assert!((fade_alpha(0.0, 4000.0) - 1.0).abs() < 1e-12);
    assert!((fade_alpha(1000.0, 4000.0) - 0.75f64.sqrt()).abs() < 1e-12);
    assert_eq!(fade_alpha(4000.0, 4000.0), 0.0);
    assert_eq!(fade_alpha(10_000.0, 4000.0), 0.0);
}

#[test]
fn fade_alpha_is_monotonically_non_increasing() {
    let mut prev = f64::INFINITY;
    for step in 0..=100 {
        let alpha = fade_alpha(f64::from(step) * 50.0, 4000.0);
        assert!(alpha <= prev);
        prev = alpha;
    }
}

#[test]
fn banner_replaces_its_texture_instead_of_accumulating() {
    let geom = geom();
    let mut backend = SoftBackend::new(geom.window);
    let mut banner = ErrorBanner::new(4000);

    banner.show(&mut backend, &geom, "").unwrap();
    assert_eq!(backend.texture_count(), 0);

    banner.show(&mut backend, &geom, "decode stalled").unwrap();
    assert_eq!(backend.texture_count(), 1);

    banner.show(&mut backend, &geom, "still stalled").unwrap();
    assert_eq!(backend.texture_count(), 1);

    banner.release(&mut backend);
    assert_eq!(backend.texture_count(), 0);
}

#[test]
fn fresh_banner_draws_at_full_opacity() {
    let geom = geom();
    let mut backend = SoftBackend::new(geom.window);
    let mut banner = ErrorBanner::new(4000);

    backend.clear().unwrap();
    banner.show(&mut backend, &geom, "X").unwrap();
    banner.draw(&mut backend, &geom).unwrap();
    backend.present().unwrap();

    // The glyph "X" has lit corners; the banner is centered.
    let center_x = geom.drawable.width / 2;
    let center_y = geom.drawable.height / 2;
    let mut lit = false;
    for dy in -8..8 {
        for dx in -8..8 {
            if backend.pixel(center_x + dx, center_y + dy) == [255, 255, 255, 255] {
                lit = true;
            }
        }
    }
    assert!(lit, "expected fully opaque banner glyph pixels");
}

#[test]
fn label_swap_exchanges_handles_and_bounds() {
    let geom = geom();
    let mut backend = SoftBackend::new(geom.window);
    let mut hud = Hud::new(&mut backend, &geom, "left.mp4", "r.mp4").unwrap();

    let before = (hud.left_label.id, hud.right_label.id);
    let widths = (hud.left_label.width, hud.right_label.width);
    assert_ne!(widths.0, widths.1);

    hud.swap_labels();
    assert_eq!((hud.right_label.id, hud.left_label.id), before);
    assert_eq!((hud.right_label.width, hud.left_label.width), widths);

    hud.swap_labels();
    assert_eq!((hud.left_label.id, hud.right_label.id), before);

    hud.release(&mut backend);
    assert_eq!(backend.texture_count(), 0);
}
