use crate::foundation::core::{PixelRect, SurfaceSize};
use crate::foundation::error::TwinscopeResult;
use crate::input::event::InputEvent;

/// Opaque backend texture identifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TextureId(pub u64);

/// A rendered text texture handle plus its glyph bounds.
///
/// Handles are plain metadata; the pixels live in the backend. Swapping
/// two labels exchanges handles, never duplicates them.
#[derive(Clone, Copy, Debug)]
pub struct TextTexture {
    /// Backend texture identifier.
    pub id: TextureId,
    /// Glyph-bound width in pixels.
    pub width: i32,
    /// Glyph-bound height in pixels.
    pub height: i32,
}

/// RGBA color with straight (non-premultiplied) alpha.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgba8 {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel.
    pub a: u8,
}

impl Rgba8 {
    /// Opaque white.
    pub const WHITE: Self = Self {
        r: 255,
        g: 255,
        b: 255,
        a: 255,
    };

    /// Semi-transparent black backing color, alpha as given.
    pub const fn black(a: u8) -> Self {
        Self { r: 0, g: 0, b: 0, a }
    }
}

/// Primitive operations of the underlying 2D rendering backend.
///
/// The engine decides what pixels go where; an implementation owns the
/// real drawing surface, textures, text rasterization, and the input
/// queue. Drawing coordinates are physical drawable pixels. `poll_event`
/// must never block; `present` may block only on frame pacing.
///
/// Failures from these operations are unrecoverable for the session: the
/// engine propagates them without retrying.
pub trait PresentBackend {
    /// Logical window size (pointer/event coordinate space).
    fn window_size(&self) -> SurfaceSize;

    /// Physical drawable size.
    fn drawable_size(&self) -> SurfaceSize;

    /// Pop the next queued input event, if any, without blocking.
    fn poll_event(&mut self) -> Option<InputEvent>;

    /// Clear the whole drawable to the background color.
    fn clear(&mut self) -> TwinscopeResult<()>;

    /// Fill a rectangle, alpha-blended over the current content.
    fn fill_rect(&mut self, rect: PixelRect, color: Rgba8) -> TwinscopeResult<()>;

    /// Draw a one-pixel line between two points.
    fn draw_line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, color: Rgba8)
    -> TwinscopeResult<()>;

    /// Create a streaming RGB24 texture of the given size.
    fn create_stream_texture(&mut self, width: i32, height: i32) -> TwinscopeResult<TextureId>;

    /// Update a sub-rectangle of a streaming texture.
    ///
    /// `pixels` starts at the region's first row; rows advance by `stride`
    /// bytes and each carries `region.w * 3` payload bytes.
    fn update_texture(
        &mut self,
        id: TextureId,
        region: PixelRect,
        pixels: &[u8],
        stride: usize,
    ) -> TwinscopeResult<()>;

    /// Copy a texture region to a destination rectangle with nearest
    /// scaling, modulated by `alpha`. `src = None` means the whole texture.
    fn copy_texture(
        &mut self,
        id: TextureId,
        src: Option<PixelRect>,
        dst: PixelRect,
        alpha: u8,
    ) -> TwinscopeResult<()>;

    /// Rasterize a text string at the given pixel size into a new texture.
    fn render_text(&mut self, text: &str, size_px: f64) -> TwinscopeResult<TextTexture>;

    /// Release a texture. Unknown ids are ignored.
    fn destroy_texture(&mut self, id: TextureId);

    /// Present the completed frame; may wait for vsync-style pacing.
    fn present(&mut self) -> TwinscopeResult<()>;
}

/// Forwarding impl so a session can borrow a backend instead of owning it.
impl<B: PresentBackend + ?Sized> PresentBackend for &mut B {
    fn window_size(&self) -> SurfaceSize {
        (**self).window_size()
    }

    fn drawable_size(&self) -> SurfaceSize {
        (**self).drawable_size()
    }

    fn poll_event(&mut self) -> Option<InputEvent> {
        (**self).poll_event()
    }

    fn clear(&mut self) -> TwinscopeResult<()> {
        (**self).clear()
    }

    fn fill_rect(&mut self, rect: PixelRect, color: Rgba8) -> TwinscopeResult<()> {
        (**self).fill_rect(rect, color)
    }

    fn draw_line(
        &mut self,
        x0: i32,
        y0: i32,
        x1: i32,
        y1: i32,
        color: Rgba8,
    ) -> TwinscopeResult<()> {
        (**self).draw_line(x0, y0, x1, y1, color)
    }

    fn create_stream_texture(&mut self, width: i32, height: i32) -> TwinscopeResult<TextureId> {
        (**self).create_stream_texture(width, height)
    }

    fn update_texture(
        &mut self,
        id: TextureId,
        region: PixelRect,
        pixels: &[u8],
        stride: usize,
    ) -> TwinscopeResult<()> {
        (**self).update_texture(id, region, pixels, stride)
    }

    fn copy_texture(
        &mut self,
        id: TextureId,
        src: Option<PixelRect>,
        dst: PixelRect,
        alpha: u8,
    ) -> TwinscopeResult<()> {
        (**self).copy_texture(id, src, dst, alpha)
    }

    fn render_text(&mut self, text: &str, size_px: f64) -> TwinscopeResult<TextTexture> {
        (**self).render_text(text, size_px)
    }

    fn destroy_texture(&mut self, id: TextureId) {
        (**self).destroy_texture(id)
    }

    fn present(&mut self) -> TwinscopeResult<()> {
        (**self).present()
    }
}
