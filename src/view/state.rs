use crate::foundation::core::{Point, SurfaceSize, VideoDims};

/// Persistent operator-controlled view state.
///
/// Created once at session start and mutated only by the input state
/// machine. `zoom_factor` 0 means 1.0× scale; the pan center is kept in
/// source-video pixel coordinates and clamped into
/// `[0, width] × [0, height]` on every mutation.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ViewState {
    /// Zoom control value; see [`crate::view::transform::effective_scale`].
    pub zoom_factor: f64,
    /// Pan center x in video space.
    pub center_x: i32,
    /// Pan center y in video space.
    pub center_y: i32,
    /// Show the left source.
    pub show_left: bool,
    /// Show the right source.
    pub show_right: bool,
    /// Show the HUD overlay.
    pub show_hud: bool,
    /// Show the amplified difference instead of the right source.
    pub subtraction_mode: bool,
    /// Left/right streams are currently exchanged.
    pub swap_left_right: bool,
}

impl ViewState {
    /// Initial state: unity zoom, centered, both sources and HUD visible.
    pub fn new(video: VideoDims) -> Self {
        let (cx, cy) = video.midpoint();
        Self {
            zoom_factor: 0.0,
            center_x: cx,
            center_y: cy,
            show_left: true,
            show_right: true,
            show_hud: true,
            subtraction_mode: false,
            swap_left_right: false,
        }
    }

    /// Move the pan center, clamping into the video bounds.
    pub fn set_center(&mut self, video: VideoDims, x: i32, y: i32) {
        self.center_x = video.clamp_x(x);
        self.center_y = video.clamp_y(y);
    }

    /// Reset the pan center to the video midpoint.
    pub fn reset_center(&mut self, video: VideoDims) {
        let (cx, cy) = video.midpoint();
        self.center_x = cx;
        self.center_y = cy;
    }
}

/// Pointer tracking state.
///
/// `tracked` drives the compare-mode split and refreshes only while the
/// left button is held; `live` follows every motion event.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerState {
    /// Last reported pointer position, window space.
    pub live: Point,
    /// Split-driving position; refreshed only during left-drag.
    pub tracked: Point,
    /// Left button currently held.
    pub left_down: bool,
    /// Right button currently held.
    pub right_down: bool,
    /// Pointer position captured when the right button went down.
    pub anchor: Point,
    /// Pan center captured when the right button went down.
    pub center_at_anchor: (i32, i32),
}

impl PointerState {
    /// Initial state: both positions at the window center, no buttons held.
    pub fn new(window: SurfaceSize) -> Self {
        let center = Point::new(
            f64::from(window.width) / 2.0,
            f64::from(window.height) / 2.0,
        );
        Self {
            live: center,
            tracked: center,
            left_down: false,
            right_down: false,
            anchor: center,
            center_at_anchor: (0, 0),
        }
    }
}
