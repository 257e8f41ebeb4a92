use crate::foundation::core::{PixelRect, Point, SurfaceSize, VideoDims};
use crate::foundation::error::TwinscopeResult;
use crate::view::state::ViewState;

/// Map the zoom control value to a display scale factor.
///
/// Non-negative values scale linearly (`1 + z`); negative values shrink
/// harmonically (`1 / (1 - z)`), so equal control increments zoom in
/// geometrically faster than they zoom out. Continuous and strictly
/// increasing through `z = 0`.
pub fn effective_scale(zoom_factor: f64) -> f64 {
    if zoom_factor >= 0.0 {
        1.0 + zoom_factor
    } else {
        1.0 / (1.0 - zoom_factor)
    }
}

/// Per-session mapping between video space, logical window space, and
/// physical drawable space.
///
/// The window/drawable density factors are fixed at construction and only
/// affect overlay placement; the zoom/pan math below works entirely in
/// window space.
#[derive(Clone, Copy, Debug)]
pub struct ViewGeometry {
    /// Logical window size (pointer/event coordinate space).
    pub window: SurfaceSize,
    /// Physical drawable size (may differ on high-density displays).
    pub drawable: SurfaceSize,
    /// Source video dimensions.
    pub video: VideoDims,
}

impl ViewGeometry {
    /// Create a validated geometry.
    pub fn new(
        window: SurfaceSize,
        drawable: SurfaceSize,
        video: VideoDims,
    ) -> TwinscopeResult<Self> {
        SurfaceSize::new(window.width, window.height)?;
        SurfaceSize::new(drawable.width, drawable.height)?;
        VideoDims::new(video.width, video.height)?;
        Ok(Self {
            window,
            drawable,
            video,
        })
    }

    /// Horizontal drawable/window density ratio.
    pub fn width_density(&self) -> f64 {
        f64::from(self.drawable.width) / f64::from(self.window.width)
    }

    /// Vertical drawable/window density ratio.
    pub fn height_density(&self) -> f64 {
        f64::from(self.drawable.height) / f64::from(self.window.height)
    }

    /// Overlay scale factor: the average of the two density ratios.
    pub fn font_scale(&self) -> f64 {
        (self.width_density() + self.height_density()) / 2.0
    }

    /// Convert a window-space x coordinate to drawable space.
    pub fn window_to_drawable_x(&self, x: f64) -> i32 {
        (x * self.width_density()).round() as i32
    }

    /// Map a window-space point to video-space pixel coordinates.
    ///
    /// The result is clamped into `[0, width] × [0, height]` regardless of
    /// pointer position or zoom.
    pub fn window_to_video(&self, state: &ViewState, p: Point) -> (i32, i32) {
        let scale = effective_scale(state.zoom_factor);
        let half_w = f64::from(self.window.width) / 2.0;
        let half_h = f64::from(self.window.height) / 2.0;
        let vx = ((p.x - half_w) / scale).round() as i32 + state.center_x;
        let vy = ((p.y - half_h) / scale).round() as i32 + state.center_y;
        (self.video.clamp_x(vx), self.video.clamp_y(vy))
    }

    /// Source-space rectangle currently visible under the zoom and pan
    /// center, each side clamped to the frame bounds independently.
    ///
    /// Recomputed every frame; pan and zoom can change every event cycle.
    pub fn visible_source_rect(&self, state: &ViewState) -> PixelRect {
        let scale = effective_scale(state.zoom_factor);
        let half_w = f64::from(self.window.width) / scale / 2.0;
        let half_h = f64::from(self.window.height) / scale / 2.0;
        let x0 = self.video.clamp_x((f64::from(state.center_x) - half_w) as i32);
        let y0 = self.video.clamp_y((f64::from(state.center_y) - half_h) as i32);
        let x1 = ((f64::from(state.center_x) + half_w) as i32).min(self.video.width);
        let y1 = ((f64::from(state.center_y) + half_h) as i32).min(self.video.height);
        PixelRect::new(x0, y0, x1 - x0, y1 - y0)
    }

    /// Map the (clamped) visible source rectangle back into window space,
    /// clamped to the window bounds, preserving the uniform scale.
    pub fn visible_dest_rect(&self, state: &ViewState, src: PixelRect) -> PixelRect {
        let scale = effective_scale(state.zoom_factor);
        let x = (f64::from(self.window.width) / 2.0
            - f64::from(state.center_x - src.x) * scale) as i32;
        let y = (f64::from(self.window.height) / 2.0
            - f64::from(state.center_y - src.y) * scale) as i32;
        let w = ((f64::from(src.w) * scale) as i32).min(self.window.width);
        let h = ((f64::from(src.h) * scale) as i32).min(self.window.height);
        PixelRect::new(
            x.clamp(0, self.window.width),
            y.clamp(0, self.window.height),
            w,
            h,
        )
    }

    /// Keypad pan step: one `divisor`-th of the visible extent per axis.
    pub fn pan_step(&self, state: &ViewState, divisor: i32) -> (i32, i32) {
        let scale = effective_scale(state.zoom_factor);
        let d = f64::from(divisor.max(1));
        (
            (f64::from(self.window.width) / scale / d) as i32,
            (f64::from(self.window.height) / scale / d) as i32,
        )
    }
}

#[cfg(test)]
#[path = "../../tests/unit/view/transform.rs"]
mod tests;
