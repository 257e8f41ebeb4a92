use std::time::Instant;

use crate::foundation::core::PixelRect;
use crate::foundation::error::TwinscopeResult;
use crate::present::backend::{PresentBackend, Rgba8, TextTexture};
use crate::view::state::{PointerState, ViewState};
use crate::view::transform::{ViewGeometry, effective_scale};

/// Small-font pixel size before density scaling; labels and readouts.
const SMALL_TEXT_PX: f64 = 16.0;
/// Big-font pixel size before density scaling; the error banner.
pub(crate) const BIG_TEXT_PX: f64 = 24.0;
/// Margin from the drawable edges to the HUD panels, drawable pixels.
const HUD_MARGIN: i32 = 20;
/// Vertical spacing between a label and its readout, before scaling.
const LINE_SPACING_PX: f64 = 30.0;
/// Backing-rectangle inflation per side, before scaling.
const BORDER_PX: f64 = 3.0;
/// Semi-transparent black behind HUD text.
const BACKING: Rgba8 = Rgba8::black(64);

/// Fade curve of the error banner: `1.0` at zero elapsed time, `0.0` at or
/// beyond `fade_ms`, monotonically non-increasing in between.
pub fn fade_alpha(elapsed_ms: f64, fade_ms: f64) -> f64 {
    (1.0 - elapsed_ms / fade_ms).max(0.0).sqrt()
}

/// HUD panels: the two filename labels, playback-position readouts, the
/// centered status line, and the compare-mode slider.
///
/// Label textures are rendered once at session start; swapping exchanges
/// the handles and their metadata so the visually-left label always matches
/// the visually-left content.
#[derive(Debug)]
pub(crate) struct Hud {
    left_label: TextTexture,
    right_label: TextTexture,
}

impl Hud {
    pub(crate) fn new(
        backend: &mut dyn PresentBackend,
        geom: &ViewGeometry,
        left_label: &str,
        right_label: &str,
    ) -> TwinscopeResult<Self> {
        let small = SMALL_TEXT_PX * geom.font_scale();
        Ok(Self {
            left_label: backend.render_text(left_label, small)?,
            right_label: backend.render_text(right_label, small)?,
        })
    }

    pub(crate) fn swap_labels(&mut self) {
        std::mem::swap(&mut self.left_label, &mut self.right_label);
    }

    pub(crate) fn draw(
        &self,
        backend: &mut dyn PresentBackend,
        geom: &ViewGeometry,
        state: &ViewState,
        pointer: &PointerState,
        left_position: f32,
        right_position: f32,
        status: &str,
    ) -> TwinscopeResult<()> {
        let font_scale = geom.font_scale();
        let small = SMALL_TEXT_PX * font_scale;
        let border = (BORDER_PX * font_scale) as i32;
        let line1 = HUD_MARGIN;
        let line2 = line1 + (LINE_SPACING_PX * font_scale) as i32;
        let drawable = geom.drawable;

        if state.show_left {
            let readout = backend.render_text(&format!("{left_position:.2}"), small)?;
            let label_rect =
                PixelRect::new(line1, line1, self.left_label.width, self.left_label.height);
            let readout_rect = PixelRect::new(line1, line2, readout.width, readout.height);
            backend.fill_rect(label_rect.inflate(border), BACKING)?;
            backend.fill_rect(readout_rect.inflate(border), BACKING)?;
            backend.copy_texture(self.left_label.id, None, label_rect, 255)?;
            backend.copy_texture(readout.id, None, readout_rect, 255)?;
            backend.destroy_texture(readout.id);
        }

        if state.show_right {
            let readout = backend.render_text(&format!("{right_position:.2}"), small)?;
            let label_rect = PixelRect::new(
                drawable.width - line1 - self.right_label.width,
                line1,
                self.right_label.width,
                self.right_label.height,
            );
            let readout_rect = PixelRect::new(
                drawable.width - line1 - readout.width,
                line2,
                readout.width,
                readout.height,
            );
            backend.fill_rect(label_rect.inflate(border), BACKING)?;
            backend.fill_rect(readout_rect.inflate(border), BACKING)?;
            backend.copy_texture(self.right_label.id, None, label_rect, 255)?;
            backend.copy_texture(readout.id, None, readout_rect, 255)?;
            backend.destroy_texture(readout.id);
        }

        let zoom = effective_scale(state.zoom_factor);
        let center = backend.render_text(&format!("{status}  Zoom: {zoom:.2}"), small)?;
        let center_rect = PixelRect::new(
            drawable.width / 2 - center.width / 2,
            line1,
            center.width,
            center.height,
        );
        backend.fill_rect(center_rect.inflate(border), BACKING)?;
        backend.copy_texture(center.id, None, center_rect, 255)?;
        backend.destroy_texture(center.id);

        if state.show_left && state.show_right {
            let x = geom.window_to_drawable_x(pointer.tracked.x);
            backend.draw_line(x, 0, x, drawable.height, Rgba8::WHITE)?;
        }
        Ok(())
    }

    pub(crate) fn release(&mut self, backend: &mut dyn PresentBackend) {
        backend.destroy_texture(self.left_label.id);
        backend.destroy_texture(self.right_label.id);
    }
}

/// Transient error banner with square-root fade-out.
///
/// A new non-empty message replaces the previous texture and restarts the
/// fade regardless of its current alpha. The last texture is lazily
/// retained after the fade completes and only freed on replacement or
/// shutdown.
#[derive(Debug)]
pub(crate) struct ErrorBanner {
    fade_ms: u64,
    texture: Option<TextTexture>,
    shown_at: Instant,
}

impl ErrorBanner {
    pub(crate) fn new(fade_ms: u64) -> Self {
        Self {
            fade_ms,
            texture: None,
            shown_at: Instant::now(),
        }
    }

    /// Capture a new message, if one was supplied this frame.
    pub(crate) fn show(
        &mut self,
        backend: &mut dyn PresentBackend,
        geom: &ViewGeometry,
        message: &str,
    ) -> TwinscopeResult<()> {
        if message.is_empty() {
            return Ok(());
        }
        if let Some(old) = self.texture.take() {
            backend.destroy_texture(old.id);
        }
        self.texture = Some(backend.render_text(message, BIG_TEXT_PX * geom.font_scale())?);
        self.shown_at = Instant::now();
        Ok(())
    }

    /// Draw the held message at its current fade alpha, centered in the
    /// drawable area. No-op once the alpha has decayed to zero.
    pub(crate) fn draw(
        &self,
        backend: &mut dyn PresentBackend,
        geom: &ViewGeometry,
    ) -> TwinscopeResult<()> {
        let Some(tex) = self.texture else {
            return Ok(());
        };
        let elapsed_ms = self.shown_at.elapsed().as_secs_f64() * 1000.0;
        let alpha = fade_alpha(elapsed_ms, self.fade_ms as f64);

        let drawable = geom.drawable;
        let rect = PixelRect::new(
            drawable.width / 2 - tex.width / 2,
            drawable.height / 2 - tex.height / 2,
            tex.width,
            tex.height,
        );
        backend.fill_rect(rect.inflate(2), Rgba8::black((64.0 * alpha) as u8))?;
        backend.copy_texture(tex.id, None, rect, (255.0 * alpha) as u8)?;
        Ok(())
    }

    pub(crate) fn release(&mut self, backend: &mut dyn PresentBackend) {
        if let Some(tex) = self.texture.take() {
            backend.destroy_texture(tex.id);
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/hud/overlay.rs"]
mod tests;
