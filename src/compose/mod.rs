//! Split-screen compositing of the two sources into the shared stream
//! texture and the zoom-transformed blit to the surface.

pub(crate) mod compositor;
