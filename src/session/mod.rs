//! Session-oriented display API.

/// The [`display::Display`] session and its options.
pub mod display;
