use crate::foundation::core::VideoDims;
use crate::foundation::error::{TwinscopeError, TwinscopeResult};
use crate::foundation::math::clamp_to_byte;
use crate::frame::source::SourceFrame;

/// Amplified absolute-difference image of the two sources.
///
/// Exclusively owned by the engine and recomputed in place every frame the
/// diff region is visible; content is always stale-overwritten before use,
/// never carried across frames. The buffer is tightly packed RGB24 with a
/// fixed `width * 3` stride.
#[derive(Clone, Debug)]
pub struct DiffBuffer {
    dims: VideoDims,
    amplification: i32,
    data: Vec<u8>,
}

impl DiffBuffer {
    /// Allocate a zeroed buffer for the given dimensions.
    pub fn new(dims: VideoDims, amplification: i32) -> TwinscopeResult<Self> {
        let dims = VideoDims::new(dims.width, dims.height)?;
        if amplification < 1 {
            return Err(TwinscopeError::validation(
                "difference amplification must be at least 1",
            ));
        }
        Ok(Self {
            dims,
            amplification,
            data: vec![0; dims.rgb_len()],
        })
    }

    /// Buffer dimensions.
    pub fn dims(&self) -> VideoDims {
        self.dims
    }

    /// Fixed row stride in bytes.
    pub fn stride(&self) -> usize {
        self.dims.rgb_stride()
    }

    /// Buffer bytes, row-major RGB24.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Recompute the columns `[split_x, width)` of every row as
    /// `clamp(|left - right| * amplification, 0, 255)` per channel.
    ///
    /// Reads honor each source's own row stride; writes use this buffer's
    /// fixed stride. Pixels left of `split_x` are untouched.
    pub fn update_region(
        &mut self,
        left: &SourceFrame<'_>,
        right: &SourceFrame<'_>,
        split_x: i32,
    ) -> TwinscopeResult<()> {
        if left.dims() != self.dims || right.dims() != self.dims {
            return Err(TwinscopeError::validation(
                "difference inputs must match the session video dimensions",
            ));
        }

        let split = split_x.clamp(0, self.dims.width) as usize;
        let offset = split * 3;
        let region = self.dims.rgb_stride() - offset;
        if region == 0 {
            return Ok(());
        }

        let amplification = self.amplification;
        let stride = self.dims.rgb_stride();
        for y in 0..self.dims.height {
            let l = &left.rgb_row(y)[offset..];
            let r = &right.rgb_row(y)[offset..];
            let row_start = stride * y as usize + offset;
            let d = &mut self.data[row_start..row_start + region];
            for ((d, l), r) in d.iter_mut().zip(l).zip(r) {
                let delta = (i32::from(*l) - i32::from(*r)).abs();
                *d = clamp_to_byte(delta * amplification);
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/frame/diff.rs"]
mod tests;
