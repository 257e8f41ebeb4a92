//! Twinscope renders two decoded video sources side-by-side or blended for
//! frame-accurate visual comparison: an operator can pan, zoom, split, and
//! diff the two streams interactively.
//!
//! The public API is session-oriented:
//!
//! - Construct a [`Display`] over a [`PresentBackend`] with fixed video
//!   dimensions and two source labels
//! - Each frame, call [`Display::poll_input`] to drain events, then
//!   [`Display::render`] with the two decoded [`SourceFrame`]s
//! - Read the emitted [`CommandSet`] to drive seeking, stepping,
//!   play/pause, stream swapping, and shutdown
//!
//! Decoding, windowing, and text rasterization live with the embedder
//! behind the [`PresentBackend`] boundary; [`SoftBackend`] is a complete
//! software implementation for tests and headless use.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod compose;
mod foundation;
mod frame;
mod hud;
mod input;
/// Presentation backend boundary and the software implementation.
pub mod present;
/// Session-oriented display API.
pub mod session;
mod view;

pub use crate::foundation::core::{PixelRect, Point, SurfaceSize, Vec2, VideoDims};
pub use crate::foundation::error::{TwinscopeError, TwinscopeResult};
pub use crate::frame::diff::DiffBuffer;
pub use crate::frame::source::{PlaneRef, SourceFrame};
pub use crate::hud::overlay::fade_alpha;
pub use crate::input::event::{InputEvent, Key, MouseButton};
pub use crate::input::machine::{CommandSet, InputMachine};
pub use crate::present::backend::{PresentBackend, Rgba8, TextTexture, TextureId};
pub use crate::present::soft::SoftBackend;
pub use crate::session::display::{Display, DisplayOptions};
pub use crate::view::state::{PointerState, ViewState};
pub use crate::view::transform::{ViewGeometry, effective_scale};
