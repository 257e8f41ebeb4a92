use super::*;

fn geom_200x100() -> ViewGeometry {
    let window = SurfaceSize::new(200, 100).unwrap();
    let video = VideoDims::new(200, 100).unwrap();
    ViewGeometry::new(window, window, video).unwrap()
}

fn state_with(geom: &ViewGeometry, zoom_factor: f64, center: (i32, i32)) -> ViewState {
    let mut state = ViewState::new(geom.video);
    state.zoom_factor = zoom_factor;
    state.set_center(geom.video, center.0, center.1);
    state
}

#[test]
fn scale_is_linear_above_and_harmonic_below() {
    assert!((effective_scale(0.2) - 1.2).abs() < 1e-12);
    assert!((effective_scale(-0.2) - 1.0 / 1.2).abs() < 1e-12);
    assert!((effective_scale(0.0) - 1.0).abs() < 1e-12);
}

#[test]
fn scale_is_continuous_and_increasing_through_zero() {
    assert!((effective_scale(1e-9) - 1.0).abs() < 1e-8);
    assert!((effective_scale(-1e-9) - 1.0).abs() < 1e-8);
    assert!(effective_scale(-0.1) < effective_scale(0.0));
    assert!(effective_scale(0.0) < effective_scale(0.1));
}

#[test]
fn window_to_video_is_identity_at_center_unity_zoom() {
    let geom = geom_200x100();
    let state = ViewState::new(geom.video);
    assert_eq!(
        geom.window_to_video(&state, Point::new(100.0, 50.0)),
        (100, 50)
    );
    assert_eq!(geom.window_to_video(&state, Point::new(0.0, 0.0)), (0, 0));
}

#[test]
fn window_to_video_clamps_for_any_pointer_and_zoom() {
    let geom = geom_200x100();
    for zoom in [-3.0, -0.2, 0.0, 0.2, 5.0] {
        for center in [(0, 0), (100, 50), (200, 100)] {
            let state = state_with(&geom, zoom, center);
            for p in [
                Point::new(-1e6, -1e6),
                Point::new(1e6, 1e6),
                Point::new(1e6, -1e6),
            ] {
                let (x, y) = geom.window_to_video(&state, p);
                assert!((0..=geom.video.width).contains(&x));
                assert!((0..=geom.video.height).contains(&y));
            }
        }
    }
}

#[test]
fn window_to_video_halves_offsets_at_double_scale() {
    let geom = geom_200x100();
    let state = state_with(&geom, 1.0, (100, 50));
    assert_eq!(
        geom.window_to_video(&state, Point::new(150.0, 50.0)),
        (125, 50)
    );
}

#[test]
fn visible_rects_cover_everything_at_unity_zoom() {
    let geom = geom_200x100();
    let state = ViewState::new(geom.video);
    let src = geom.visible_source_rect(&state);
    assert_eq!(src, PixelRect::new(0, 0, 200, 100));
    let dst = geom.visible_dest_rect(&state, src);
    assert_eq!(dst, PixelRect::new(0, 0, 200, 100));
}

#[test]
fn visible_source_rect_halves_at_double_scale() {
    let geom = geom_200x100();
    let state = state_with(&geom, 1.0, (100, 50));
    let src = geom.visible_source_rect(&state);
    assert_eq!(src, PixelRect::new(50, 25, 100, 50));
    let dst = geom.visible_dest_rect(&state, src);
    assert_eq!(dst, PixelRect::new(0, 0, 200, 100));
}

#[test]
fn panning_past_an_edge_clips_instead_of_wrapping() {
    let geom = geom_200x100();
    let state = state_with(&geom, 1.0, (0, 0));
    let src = geom.visible_source_rect(&state);
    assert_eq!(src, PixelRect::new(0, 0, 50, 25));
    let dst = geom.visible_dest_rect(&state, src);
    assert_eq!(dst, PixelRect::new(100, 50, 100, 50));
}

#[test]
fn pan_step_shrinks_with_scale() {
    let geom = geom_200x100();
    let state = state_with(&geom, 0.0, (100, 50));
    assert_eq!(geom.pan_step(&state, 20), (10, 5));

    let zoomed = state_with(&geom, 1.0, (100, 50));
    assert_eq!(geom.pan_step(&zoomed, 20), (5, 2));
}

#[test]
fn density_factors_scale_overlay_coordinates_only() {
    let window = SurfaceSize::new(200, 100).unwrap();
    let drawable = SurfaceSize::new(400, 200).unwrap();
    let video = VideoDims::new(200, 100).unwrap();
    let geom = ViewGeometry::new(window, drawable, video).unwrap();

    assert!((geom.width_density() - 2.0).abs() < 1e-12);
    assert!((geom.font_scale() - 2.0).abs() < 1e-12);
    assert_eq!(geom.window_to_drawable_x(50.0), 100);

    // The zoom/pan math stays in window space.
    let state = ViewState::new(video);
    assert_eq!(
        geom.visible_source_rect(&state),
        PixelRect::new(0, 0, 200, 100)
    );
}
