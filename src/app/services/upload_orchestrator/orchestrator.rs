//! Upload lifecycle and view state
//!
//! One orchestrator instance backs one intake surface. Each accepted
//! upload fully replaces the state of the previous one; the asynchronous
//! read is the only suspension point in the pipeline.

use tracing::{debug, info, warn};

use super::events::{IntakeEvent, IntakeListener};
use super::source::UploadSource;
use crate::app::models::{FileMeta, Row};
use crate::app::services::csv_parser;
use crate::app::services::preview_window::PreviewWindow;
use crate::config::IntakeConfig;
use crate::{Error, Result};

/// Handle for one upload attempt
///
/// Issued by [`UploadOrchestrator::begin_upload`] and consumed by
/// [`UploadOrchestrator::finish_upload`]. A ticket older than the latest
/// `begin_upload` call is stale: completing with it is a no-op, which is
/// what stops a slow read from overwriting the state of a newer upload.
#[derive(Debug)]
pub struct UploadTicket {
    seq: u64,
}

/// State machine bridging file uploads to the parser and preview window
pub struct UploadOrchestrator {
    config: IntakeConfig,
    columns: Vec<String>,
    window: PreviewWindow,
    file_meta: FileMeta,
    parse_error: String,
    upload_seq: u64,
    listeners: Vec<Box<dyn IntakeListener>>,
}

impl std::fmt::Debug for UploadOrchestrator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UploadOrchestrator")
            .field("config", &self.config)
            .field("columns", &self.columns)
            .field("window", &self.window)
            .field("file_meta", &self.file_meta)
            .field("parse_error", &self.parse_error)
            .field("upload_seq", &self.upload_seq)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl UploadOrchestrator {
    /// Create an orchestrator with the given windowing configuration
    pub fn new(config: IntakeConfig) -> Self {
        Self {
            config,
            columns: Vec::new(),
            window: PreviewWindow::new(),
            file_meta: FileMeta::default(),
            parse_error: String::new(),
            upload_seq: 0,
            listeners: Vec::new(),
        }
    }

    /// Register a listener for outbound events
    pub fn subscribe(&mut self, listener: impl IntakeListener + 'static) {
        self.listeners.push(Box::new(listener));
    }

    // =========================================================================
    // Upload lifecycle
    // =========================================================================

    /// Handle a file-selection result end to end
    ///
    /// `None` means the selection dialog produced no file and is a silent
    /// no-op: no state change, no events. With a file present this resets
    /// prior state, captures the file metadata, reads the content, and
    /// completes via [`finish_upload`](Self::finish_upload).
    pub async fn handle_upload<S: UploadSource>(&mut self, source: Option<&S>) {
        let Some(source) = source else {
            debug!("Upload event carried no file, ignoring");
            return;
        };

        let ticket = self.begin_upload(source.name(), source.size_bytes());
        let read_result = source.read().await;
        self.finish_upload(ticket, read_result);
    }

    /// Accept an upload: reset derived state and capture file metadata
    ///
    /// Returns the ticket the eventual read completion must present.
    /// Callers that drive the read themselves (UI shells with their own
    /// scheduler) use this directly; [`handle_upload`](Self::handle_upload)
    /// is the packaged sequence.
    pub fn begin_upload(&mut self, file_name: &str, file_size_bytes: u64) -> UploadTicket {
        self.upload_seq += 1;
        self.clear_derived_state();
        self.file_meta = FileMeta::new(file_name, file_size_bytes);

        info!(
            "Accepted upload '{}' ({} bytes)",
            self.file_meta.file_name, self.file_meta.file_size_bytes
        );
        UploadTicket {
            seq: self.upload_seq,
        }
    }

    /// Complete an upload with the outcome of its content read
    ///
    /// A stale ticket (a newer upload has begun since) is discarded
    /// without touching state. Read failures and non-text content both
    /// surface through `parse_error`; no events are emitted for them.
    pub fn finish_upload(&mut self, ticket: UploadTicket, read_result: std::io::Result<Vec<u8>>) {
        if ticket.seq != self.upload_seq {
            debug!(
                "Discarding stale upload completion (ticket {} superseded by {})",
                ticket.seq, self.upload_seq
            );
            return;
        }

        let text = match Self::decode(read_result) {
            Ok(text) => text,
            Err(error) => {
                self.fail(error);
                return;
            }
        };

        let result = csv_parser::parse(&text);
        self.columns = result.table.columns;
        self.window
            .initialize(result.table.rows, self.config.preview_limit);

        info!(
            "Loaded {} rows x {} columns from '{}' ({} visible)",
            self.window.total_rows(),
            self.columns.len(),
            self.file_meta.file_name,
            self.window.visible_len()
        );
        if result.stats.has_irregularities() {
            debug!(
                "Upload needed fallback handling: {} padded, {} truncated, {} blank, {} renamed headers",
                result.stats.padded_rows,
                result.stats.truncated_rows,
                result.stats.blank_lines_skipped,
                result.stats.renamed_headers
            );
        }

        self.emit(IntakeEvent::CsvLoaded {
            columns: self.columns.clone(),
            rows: self.window.all_rows().to_vec(),
            file_name: self.file_meta.file_name.clone(),
            file_size: self.file_meta.file_size_bytes,
        });
        self.emit(IntakeEvent::HeadersReady {
            columns: self.columns.clone(),
        });
    }

    /// Decode the read outcome into text
    fn decode(read_result: std::io::Result<Vec<u8>>) -> Result<String> {
        let bytes = read_result.map_err(Error::read)?;
        String::from_utf8(bytes)
            .map_err(|e| Error::content_type(format!("invalid UTF-8 at byte {}", e.utf8_error().valid_up_to())))
    }

    /// Record a failed upload: derived state is cleared, metadata is kept
    fn fail(&mut self, error: Error) {
        warn!("Upload '{}' failed: {}", self.file_meta.file_name, error);
        self.clear_derived_state();
        self.parse_error = error.to_string();
    }

    fn clear_derived_state(&mut self) {
        self.columns.clear();
        self.window.clear();
        self.parse_error.clear();
    }

    /// Reset the component to its mounted state
    pub fn reset_state(&mut self) {
        self.clear_derived_state();
        self.file_meta = FileMeta::default();
    }

    // =========================================================================
    // Windowing delegation
    // =========================================================================

    /// Widen the visible window by the configured increment
    pub fn load_next(&mut self) {
        self.window.load_next(self.config.load_increment);
    }

    /// Make every parsed row visible
    pub fn load_all(&mut self) {
        self.window.load_all();
    }

    /// Collapse the visible window back to the configured preview limit
    pub fn reset_view(&mut self) {
        self.window.reset_view(self.config.preview_limit);
    }

    // =========================================================================
    // Mapping handoff
    // =========================================================================

    /// Whether the mapping stage can be entered
    pub fn can_go_to_mapping(&self) -> bool {
        !self.columns.is_empty()
    }

    /// Advance to the mapping stage
    ///
    /// Emits `gotomapping` with the column names (no rows; the mapping
    /// stage only pairs columns with target fields). Returns `false`
    /// without emitting when no columns are loaded.
    pub fn go_to_mapping(&mut self) -> bool {
        if !self.can_go_to_mapping() {
            debug!("Mapping requested with no columns loaded, ignoring");
            return false;
        }

        self.emit(IntakeEvent::GoToMapping {
            columns: self.columns.clone(),
            file_name: self.file_meta.file_name.clone(),
            file_size: self.file_meta.file_size_bytes,
        });
        true
    }

    // =========================================================================
    // View state
    // =========================================================================

    /// Column names of the current table
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// The visible prefix of the parsed rows
    pub fn visible_rows(&self) -> &[Row] {
        self.window.visible_rows()
    }

    /// Total parsed row count
    pub fn total_rows(&self) -> usize {
        self.window.total_rows()
    }

    /// Whether rows beyond the visible window remain hidden
    pub fn is_preview(&self) -> bool {
        self.window.is_preview()
    }

    /// Human-readable failure message; empty when the last upload succeeded
    pub fn parse_error(&self) -> &str {
        &self.parse_error
    }

    /// Whether the last upload failed
    pub fn has_error(&self) -> bool {
        !self.parse_error.is_empty()
    }

    /// Name of the most recently accepted file
    pub fn file_name(&self) -> &str {
        &self.file_meta.file_name
    }

    /// Size of the most recently accepted file
    pub fn file_size_bytes(&self) -> u64 {
        self.file_meta.file_size_bytes
    }

    /// Whether any rows were parsed
    pub fn has_data(&self) -> bool {
        self.window.total_rows() > 0
    }

    /// Whether the windowing actions (load next / load all) apply
    pub fn show_actions(&self) -> bool {
        self.window.total_rows() > 0 && self.window.is_preview()
    }

    fn emit(&self, event: IntakeEvent) {
        debug!("Emitting '{}' to {} listener(s)", event.name(), self.listeners.len());
        for listener in &self.listeners {
            listener.on_event(&event);
        }
    }
}
