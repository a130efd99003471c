//! Test utilities and fixtures for upload orchestration

use std::sync::{Arc, Mutex};

use crate::app::adapters::upload_sources::MemoryUpload;
use crate::app::services::upload_orchestrator::{IntakeEvent, IntakeListener, UploadOrchestrator};
use crate::config::IntakeConfig;


/// Listener that records every delivered event
///
/// Clones share the same buffer, so a test can keep one handle and hand
/// another to the orchestrator.
#[derive(Debug, Clone, Default)]
pub struct RecordingListener {
    events: Arc<Mutex<Vec<IntakeEvent>>>,
}

impl RecordingListener {
    pub fn events(&self) -> Vec<IntakeEvent> {
        self.events.lock().unwrap().clone()
    }

    pub fn event_names(&self) -> Vec<&'static str> {
        self.events().iter().map(|e| e.name()).collect()
    }
}

impl IntakeListener for RecordingListener {
    fn on_event(&self, event: &IntakeEvent) {
        self.events.lock().unwrap().push(event.clone());
    }
}

/// Orchestrator with default config plus a subscribed recorder
pub fn orchestrator_with_recorder() -> (UploadOrchestrator, RecordingListener) {
    orchestrator_with_config(IntakeConfig::default())
}

/// Orchestrator with a custom config plus a subscribed recorder
pub fn orchestrator_with_config(config: IntakeConfig) -> (UploadOrchestrator, RecordingListener) {
    let mut orchestrator = UploadOrchestrator::new(config);
    let recorder = RecordingListener::default();
    orchestrator.subscribe(recorder.clone());
    (orchestrator, recorder)
}

/// In-memory upload holding a small well-formed CSV
pub fn simple_upload() -> MemoryUpload {
    MemoryUpload::from_text(
        "contacts.csv",
        "Name,Age,City\nAlice,30,Paris\nBob,45,London",
    )
}

/// In-memory upload with `rows` numbered data rows
pub fn numbered_upload(rows: usize) -> MemoryUpload {
    let mut text = String::from("id,label\n");
    for i in 0..rows {
        text.push_str(&format!("{},row {}\n", i, i));
    }
    MemoryUpload::from_text("numbered.csv", &text)
}
