use crate::foundation::core::{PixelRect, VideoDims};
use crate::foundation::error::TwinscopeResult;
use crate::frame::diff::DiffBuffer;
use crate::frame::source::SourceFrame;
use crate::present::backend::{PresentBackend, TextureId};
use crate::view::state::{PointerState, ViewState};
use crate::view::transform::ViewGeometry;

/// Owns the shared stream texture and the diff buffer, and decides per
/// frame which region shows left, right, or difference pixels.
#[derive(Debug)]
pub(crate) struct Compositor {
    texture: TextureId,
    diff: DiffBuffer,
}

impl Compositor {
    pub(crate) fn new(
        backend: &mut dyn PresentBackend,
        video: VideoDims,
        amplification: i32,
    ) -> TwinscopeResult<Self> {
        Ok(Self {
            texture: backend.create_stream_texture(video.width, video.height)?,
            diff: DiffBuffer::new(video, amplification)?,
        })
    }

    /// Video-space x coordinate dividing left-sourced pixels from
    /// right/diff-sourced pixels: the tracked pointer in compare mode, the
    /// full width when only the left source is shown, zero otherwise.
    pub(crate) fn split_x(
        geom: &ViewGeometry,
        state: &ViewState,
        pointer: &PointerState,
    ) -> i32 {
        if state.show_left && state.show_right {
            geom.window_to_video(state, pointer.tracked).0
        } else if state.show_left {
            geom.video.width
        } else {
            0
        }
    }

    /// Update the stream texture regions for the current split and blit the
    /// visible source rectangle to the window. Skipped entirely when both
    /// sources are hidden.
    pub(crate) fn render_video(
        &mut self,
        backend: &mut dyn PresentBackend,
        geom: &ViewGeometry,
        state: &ViewState,
        pointer: &PointerState,
        left: &SourceFrame<'_>,
        right: &SourceFrame<'_>,
    ) -> TwinscopeResult<()> {
        if !state.show_left && !state.show_right {
            return Ok(());
        }

        let video = geom.video;
        let split_x = Self::split_x(geom, state, pointer);

        if state.show_left && split_x > 0 {
            let region = PixelRect::new(0, 0, split_x, video.height);
            let plane = left.rgb();
            backend.update_texture(self.texture, region, plane.data, plane.stride)?;
        }
        if state.show_right && split_x < video.width - 1 {
            let region = PixelRect::new(split_x, 0, video.width - split_x, video.height);
            let offset = split_x as usize * 3;
            if state.subtraction_mode {
                self.diff.update_region(left, right, split_x)?;
                backend.update_texture(
                    self.texture,
                    region,
                    &self.diff.data()[offset..],
                    self.diff.stride(),
                )?;
            } else {
                let plane = right.rgb();
                backend.update_texture(self.texture, region, &plane.data[offset..], plane.stride)?;
            }
        }

        let src = geom.visible_source_rect(state);
        let dst = geom.visible_dest_rect(state, src);
        if !src.is_empty() && !dst.is_empty() {
            backend.copy_texture(self.texture, Some(src), dst, 255)?;
        }
        Ok(())
    }

    pub(crate) fn release(&mut self, backend: &mut dyn PresentBackend) {
        backend.destroy_texture(self.texture);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/compose/compositor.rs"]
mod tests;
