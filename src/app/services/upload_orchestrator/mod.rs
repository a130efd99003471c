//! Upload orchestration
//!
//! Bridges a file-selection input to the CSV parser and the preview
//! window, and publishes the results to registered listeners. The
//! orchestrator is the only stateful component of the intake pipeline:
//! parsing is pure and the preview window is owned here.
//!
//! ## Architecture
//!
//! - [`orchestrator`] - Upload lifecycle, view state, and windowing
//!   delegation
//! - [`events`] - Outbound event payloads and the listener interface
//! - [`source`] - The narrow capability an upload input must provide

pub mod events;
pub mod orchestrator;
pub mod source;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use events::{IntakeEvent, IntakeListener};
pub use orchestrator::{UploadOrchestrator, UploadTicket};
pub use source::UploadSource;
