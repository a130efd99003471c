//! CSV Intake Library
//!
//! A Rust library implementing the CSV intake stage of a guided data-import
//! flow: a user supplies a CSV file, the library parses it into a table,
//! exposes a bounded preview window over the rows, and publishes structured
//! events for a downstream column-mapping stage.
//!
//! This library provides tools for:
//! - Tokenizing raw CSV text with quoted fields, escaped quotes, and fields
//!   that span line breaks
//! - De-duplicating and back-filling header names deterministically
//! - Windowing large parsed tables so a UI only materializes a bounded prefix
//! - Orchestrating asynchronous uploads with stale-completion protection
//! - Publishing `csvloaded` / `headersready` / `gotomapping` events to
//!   registered listeners

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod csv_parser;
        pub mod preview_window;
        pub mod upload_orchestrator;
    }
    pub mod adapters {
        pub mod upload_sources;
    }
}

// Re-export commonly used types
pub use app::models::{Cell, FileMeta, ParsedTable, Row};
pub use app::services::upload_orchestrator::{
    IntakeEvent, IntakeListener, UploadOrchestrator, UploadSource,
};
pub use config::IntakeConfig;

/// Result type alias for the CSV intake library
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for upload handling
///
/// Structural irregularities in CSV text (ragged rows, unmatched quotes,
/// empty header tokens) are not errors: the parser resolves them with
/// deterministic fallback rules. These variants cover the only genuine
/// failure modes, both of which the orchestrator renders into its
/// `parse_error` view state rather than propagating.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Upload produced a payload that is not textual content
    #[error("Uploaded file is not text: {message}")]
    ContentType { message: String },

    /// The asynchronous read of the upload failed at the I/O level
    #[error("Failed to read uploaded file: {source}")]
    Read {
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    /// Create a content-type error for a non-text payload
    pub fn content_type(message: impl Into<String>) -> Self {
        Self::ContentType {
            message: message.into(),
        }
    }

    /// Create a read error from an I/O failure
    pub fn read(source: std::io::Error) -> Self {
        Self::Read { source }
    }
}
