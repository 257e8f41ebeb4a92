use smallvec::SmallVec;

use crate::foundation::core::VideoDims;
use crate::foundation::error::{TwinscopeError, TwinscopeResult};

/// One borrowed pixel plane: raw bytes plus its row stride.
#[derive(Clone, Copy, Debug)]
pub struct PlaneRef<'a> {
    /// Plane bytes, row-major.
    pub data: &'a [u8],
    /// Row stride in bytes; at least the packed row length.
    pub stride: usize,
}

/// Borrowed view of one decoded source frame.
///
/// Plane 0 must be interleaved 3-channel 8-bit RGB at the full video
/// dimensions; additional planes are accepted but ignored by this engine.
/// Construction validates the layout so the compositing and difference
/// math can assume every row access is in bounds.
#[derive(Clone, Debug)]
pub struct SourceFrame<'a> {
    dims: VideoDims,
    planes: SmallVec<[PlaneRef<'a>; 3]>,
}

impl<'a> SourceFrame<'a> {
    /// Build a frame view over caller-owned planes.
    pub fn new(
        dims: VideoDims,
        planes: impl IntoIterator<Item = PlaneRef<'a>>,
    ) -> TwinscopeResult<Self> {
        let dims = VideoDims::new(dims.width, dims.height)?;
        let planes: SmallVec<[PlaneRef<'a>; 3]> = planes.into_iter().collect();
        let Some(rgb) = planes.first() else {
            return Err(TwinscopeError::validation(
                "source frame needs at least one plane",
            ));
        };

        let packed_row = dims.rgb_stride();
        if rgb.stride < packed_row {
            return Err(TwinscopeError::validation(format!(
                "plane 0 stride {} is below the packed row length {packed_row}",
                rgb.stride
            )));
        }
        let needed = rgb.stride * (dims.height as usize - 1) + packed_row;
        if rgb.data.len() < needed {
            return Err(TwinscopeError::validation(format!(
                "plane 0 holds {} bytes but {needed} are required",
                rgb.data.len()
            )));
        }

        Ok(Self { dims, planes })
    }

    /// Build a frame view over a single tightly packed RGB24 buffer.
    pub fn from_rgb(dims: VideoDims, data: &'a [u8]) -> TwinscopeResult<Self> {
        Self::new(
            dims,
            [PlaneRef {
                data,
                stride: dims.rgb_stride(),
            }],
        )
    }

    /// Frame dimensions.
    pub fn dims(&self) -> VideoDims {
        self.dims
    }

    /// The interleaved RGB plane (plane 0).
    pub fn rgb(&self) -> PlaneRef<'a> {
        self.planes[0]
    }

    /// One RGB row as a packed `width * 3` byte slice.
    pub(crate) fn rgb_row(&self, y: i32) -> &'a [u8] {
        let rgb = self.planes[0];
        let start = rgb.stride * y as usize;
        &rgb.data[start..start + self.dims.rgb_stride()]
    }
}

#[cfg(test)]
#[path = "../../tests/unit/frame/source.rs"]
mod tests;
