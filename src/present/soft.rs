use std::collections::HashMap;
use std::collections::VecDeque;

use crate::foundation::core::{PixelRect, SurfaceSize};
use crate::foundation::error::{TwinscopeError, TwinscopeResult};
use crate::foundation::math::{blend_u8, mul_div255_u8};
use crate::input::event::InputEvent;
use crate::present::backend::{PresentBackend, Rgba8, TextTexture, TextureId};
use crate::present::font::{GLYPH_ADVANCE, GLYPH_HEIGHT, GLYPH_WIDTH, glyph5x7};

#[derive(Clone, Debug)]
enum SoftTexture {
    /// Streaming RGB24 pixels, tightly packed.
    Stream {
        width: i32,
        height: i32,
        rgb: Vec<u8>,
    },
    /// Rasterized text, straight-alpha RGBA8.
    Text {
        width: i32,
        height: i32,
        rgba: Vec<u8>,
    },
}

impl SoftTexture {
    fn size(&self) -> (i32, i32) {
        match self {
            SoftTexture::Stream { width, height, .. }
            | SoftTexture::Text { width, height, .. } => (*width, *height),
        }
    }

    fn texel(&self, x: i32, y: i32) -> Rgba8 {
        match self {
            SoftTexture::Stream { width, rgb, .. } => {
                let i = ((y * width + x) * 3) as usize;
                Rgba8 {
                    r: rgb[i],
                    g: rgb[i + 1],
                    b: rgb[i + 2],
                    a: 255,
                }
            }
            SoftTexture::Text { width, rgba, .. } => {
                let i = ((y * width + x) * 4) as usize;
                Rgba8 {
                    r: rgba[i],
                    g: rgba[i + 1],
                    b: rgba[i + 2],
                    a: rgba[i + 3],
                }
            }
        }
    }
}

/// Software implementation of [`PresentBackend`] over an in-memory RGBA8
/// framebuffer.
///
/// Used by tests and demos: events are injected with
/// [`SoftBackend::push_event`], and the last presented frame can be read
/// back with [`SoftBackend::presented`]. Text is rasterized from a built-in
/// monospaced 5x7 bitmap subset. Construct with differing window and
/// drawable sizes to model a high-density display.
#[derive(Clone, Debug)]
pub struct SoftBackend {
    window: SurfaceSize,
    drawable: SurfaceSize,
    frame: Vec<u8>,
    presented: Vec<u8>,
    textures: HashMap<u64, SoftTexture>,
    next_texture: u64,
    events: VecDeque<InputEvent>,
    presents: u64,
}

impl SoftBackend {
    /// Create a backend whose drawable matches the logical window size.
    pub fn new(window: SurfaceSize) -> Self {
        Self::with_density(window, window)
    }

    /// Create a backend with distinct window and drawable sizes.
    pub fn with_density(window: SurfaceSize, drawable: SurfaceSize) -> Self {
        let len = (drawable.width * drawable.height * 4) as usize;
        Self {
            window,
            drawable,
            frame: vec![0; len],
            presented: vec![0; len],
            textures: HashMap::new(),
            next_texture: 1,
            events: VecDeque::new(),
            presents: 0,
        }
    }

    /// Queue a synthetic input event.
    pub fn push_event(&mut self, event: InputEvent) {
        self.events.push_back(event);
    }

    /// The last presented frame, row-major RGBA8 at the drawable size.
    pub fn presented(&self) -> &[u8] {
        &self.presented
    }

    /// Number of completed presents.
    pub fn presents(&self) -> u64 {
        self.presents
    }

    /// Number of live textures; useful for leak checks.
    pub fn texture_count(&self) -> usize {
        self.textures.len()
    }

    /// One pixel of the last presented frame.
    pub fn pixel(&self, x: i32, y: i32) -> [u8; 4] {
        let i = ((y * self.drawable.width + x) * 4) as usize;
        [
            self.presented[i],
            self.presented[i + 1],
            self.presented[i + 2],
            self.presented[i + 3],
        ]
    }

    fn blend_px(&mut self, x: i32, y: i32, color: Rgba8) {
        if x < 0 || y < 0 || x >= self.drawable.width || y >= self.drawable.height {
            return;
        }
        let i = ((y * self.drawable.width + x) * 4) as usize;
        self.frame[i] = blend_u8(self.frame[i], color.r, color.a);
        self.frame[i + 1] = blend_u8(self.frame[i + 1], color.g, color.a);
        self.frame[i + 2] = blend_u8(self.frame[i + 2], color.b, color.a);
        self.frame[i + 3] = 255;
    }

    fn texture(&self, id: TextureId) -> TwinscopeResult<&SoftTexture> {
        self.textures
            .get(&id.0)
            .ok_or_else(|| TwinscopeError::backend(format!("unknown texture id {}", id.0)))
    }
}

impl PresentBackend for SoftBackend {
    fn window_size(&self) -> SurfaceSize {
        self.window
    }

    fn drawable_size(&self) -> SurfaceSize {
        self.drawable
    }

    fn poll_event(&mut self) -> Option<InputEvent> {
        self.events.pop_front()
    }

    fn clear(&mut self) -> TwinscopeResult<()> {
        for px in self.frame.chunks_exact_mut(4) {
            px.copy_from_slice(&[0, 0, 0, 255]);
        }
        Ok(())
    }

    fn fill_rect(&mut self, rect: PixelRect, color: Rgba8) -> TwinscopeResult<()> {
        let bounds = PixelRect::new(0, 0, self.drawable.width, self.drawable.height);
        let rect = rect.intersect(bounds);
        if rect.is_empty() {
            return Ok(());
        }
        for y in rect.y..rect.bottom() {
            for x in rect.x..rect.right() {
                self.blend_px(x, y, color);
            }
        }
        Ok(())
    }

    fn draw_line(
        &mut self,
        x0: i32,
        y0: i32,
        x1: i32,
        y1: i32,
        color: Rgba8,
    ) -> TwinscopeResult<()> {
        // Bresenham; out-of-bounds pixels are clipped per-pixel.
        let (mut x, mut y) = (x0, y0);
        let dx = (x1 - x0).abs();
        let sx = if x0 < x1 { 1 } else { -1 };
        let dy = -(y1 - y0).abs();
        let sy = if y0 < y1 { 1 } else { -1 };
        let mut err = dx + dy;
        loop {
            self.blend_px(x, y, color);
            if x == x1 && y == y1 {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x += sx;
            }
            if e2 <= dx {
                err += dx;
                y += sy;
            }
        }
        Ok(())
    }

    fn create_stream_texture(&mut self, width: i32, height: i32) -> TwinscopeResult<TextureId> {
        if width <= 0 || height <= 0 {
            return Err(TwinscopeError::backend(
                "stream texture size must be strictly positive",
            ));
        }
        let id = self.next_texture;
        self.next_texture += 1;
        self.textures.insert(
            id,
            SoftTexture::Stream {
                width,
                height,
                rgb: vec![0; (width * height * 3) as usize],
            },
        );
        Ok(TextureId(id))
    }

    fn update_texture(
        &mut self,
        id: TextureId,
        region: PixelRect,
        pixels: &[u8],
        stride: usize,
    ) -> TwinscopeResult<()> {
        let (tw, th) = self.texture(id)?.size();
        if region.is_empty() {
            return Ok(());
        }
        if region.x < 0 || region.y < 0 || region.right() > tw || region.bottom() > th {
            return Err(TwinscopeError::backend(
                "texture update region is out of bounds",
            ));
        }
        let row_bytes = region.w as usize * 3;
        let needed = stride * (region.h as usize - 1) + row_bytes;
        if pixels.len() < needed {
            return Err(TwinscopeError::backend(format!(
                "texture update needs {needed} bytes, got {}",
                pixels.len()
            )));
        }

        let Some(SoftTexture::Stream { rgb, .. }) = self.textures.get_mut(&id.0) else {
            return Err(TwinscopeError::backend(
                "streaming update targets a non-stream texture",
            ));
        };
        for y in 0..region.h {
            let src = y as usize * stride;
            let dst = (((region.y + y) * tw + region.x) * 3) as usize;
            rgb[dst..dst + row_bytes].copy_from_slice(&pixels[src..src + row_bytes]);
        }
        Ok(())
    }

    fn copy_texture(
        &mut self,
        id: TextureId,
        src: Option<PixelRect>,
        dst: PixelRect,
        alpha: u8,
    ) -> TwinscopeResult<()> {
        let Self {
            frame,
            textures,
            drawable,
            ..
        } = self;
        let tex = textures
            .get(&id.0)
            .ok_or_else(|| TwinscopeError::backend(format!("unknown texture id {}", id.0)))?;
        let (tw, th) = tex.size();
        let full = PixelRect::new(0, 0, tw, th);
        let src = src.unwrap_or(full).intersect(full);
        if src.is_empty() || dst.is_empty() || alpha == 0 {
            return Ok(());
        }
        for dy in 0..dst.h {
            let y = dst.y + dy;
            if y < 0 || y >= drawable.height {
                continue;
            }
            let sy = src.y + dy * src.h / dst.h;
            for dx in 0..dst.w {
                let x = dst.x + dx;
                if x < 0 || x >= drawable.width {
                    continue;
                }
                let sx = src.x + dx * src.w / dst.w;
                let texel = tex.texel(sx, sy);
                let a = mul_div255_u8(texel.a, alpha);
                if a == 0 {
                    continue;
                }
                let i = ((y * drawable.width + x) * 4) as usize;
                frame[i] = blend_u8(frame[i], texel.r, a);
                frame[i + 1] = blend_u8(frame[i + 1], texel.g, a);
                frame[i + 2] = blend_u8(frame[i + 2], texel.b, a);
                frame[i + 3] = 255;
            }
        }
        Ok(())
    }

    fn render_text(&mut self, text: &str, size_px: f64) -> TwinscopeResult<TextTexture> {
        let scale = ((size_px / f64::from(GLYPH_HEIGHT)).round() as i32).max(1);
        let chars: Vec<char> = text.chars().collect();
        let advance = GLYPH_ADVANCE * scale;
        let width = (advance * chars.len() as i32 - scale).max(GLYPH_WIDTH * scale);
        let height = GLYPH_HEIGHT * scale;
        let mut rgba = vec![0u8; (width * height * 4) as usize];

        for (ci, ch) in chars.iter().enumerate() {
            let Some(rows) = glyph5x7(*ch) else { continue };
            let x0 = advance * ci as i32;
            for (ry, bits) in rows.iter().enumerate() {
                for rx in 0..GLYPH_WIDTH {
                    if bits & (1 << (GLYPH_WIDTH - 1 - rx)) == 0 {
                        continue;
                    }
                    for py in 0..scale {
                        for px in 0..scale {
                            let x = x0 + rx * scale + px;
                            let y = ry as i32 * scale + py;
                            let i = ((y * width + x) * 4) as usize;
                            rgba[i..i + 4].copy_from_slice(&[255, 255, 255, 255]);
                        }
                    }
                }
            }
        }

        let id = self.next_texture;
        self.next_texture += 1;
        self.textures.insert(
            id,
            SoftTexture::Text {
                width,
                height,
                rgba,
            },
        );
        Ok(TextTexture {
            id: TextureId(id),
            width,
            height,
        })
    }

    fn destroy_texture(&mut self, id: TextureId) {
        self.textures.remove(&id.0);
    }

    fn present(&mut self) -> TwinscopeResult<()> {
        self.presented.copy_from_slice(&self.frame);
        self.presents += 1;
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/present/soft.rs"]
mod tests;
