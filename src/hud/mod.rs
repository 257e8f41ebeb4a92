//! HUD panels (labels, position readouts, status line, compare slider)
//! and the fading transient error banner.

pub mod overlay;
