//! Bounded preview windowing over a parsed table
//!
//! A parsed upload can hold thousands of rows; rendering them all at once
//! makes the surrounding UI unresponsive. This module owns the full row
//! set and exposes only a bounded prefix, with operations to widen the
//! window incrementally, widen it completely, or collapse it back to the
//! initial bound.

pub mod window;

#[cfg(test)]
pub mod tests;

pub use window::{PreviewWindow, WindowState};
