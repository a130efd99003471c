//! Integration tests for the full intake flow
//!
//! These tests drive the public crate surface end to end: a CSV file on
//! disk is selected, read through the async filesystem adapter, parsed,
//! windowed, and published to listeners.

use std::io::Write;
use std::sync::{Arc, Mutex};

use csv_intake::app::adapters::upload_sources::FileUpload;
use csv_intake::{IntakeConfig, IntakeEvent, IntakeListener, UploadOrchestrator, UploadSource};
use tempfile::NamedTempFile;

#[derive(Debug, Clone, Default)]
struct Recorder {
    events: Arc<Mutex<Vec<IntakeEvent>>>,
}

impl Recorder {
    fn events(&self) -> Vec<IntakeEvent> {
        self.events.lock().unwrap().clone()
    }
}

impl IntakeListener for Recorder {
    fn on_event(&self, event: &IntakeEvent) {
        self.events.lock().unwrap().push(event.clone());
    }
}

fn write_temp_csv(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    file.write_all(content.as_bytes())
        .expect("Failed to write temp file");
    file
}

#[tokio::test]
async fn test_file_upload_end_to_end() {
    let mut content = String::from("id,name,comment\n");
    for i in 0..150 {
        content.push_str(&format!("{},user{},\"note, {}\"\n", i, i, i));
    }
    let file = write_temp_csv(&content);

    let config = IntakeConfig::default()
        .with_preview_limit(100)
        .with_load_increment(100);
    let mut orchestrator = UploadOrchestrator::new(config);
    let recorder = Recorder::default();
    orchestrator.subscribe(recorder.clone());

    let upload = FileUpload::open(file.path())
        .await
        .expect("Failed to capture file selection");
    assert_eq!(upload.size_bytes(), content.len() as u64);

    orchestrator.handle_upload(Some(&upload)).await;

    assert_eq!(orchestrator.columns(), ["id", "name", "comment"]);
    assert_eq!(orchestrator.total_rows(), 150);
    assert_eq!(orchestrator.visible_rows().len(), 100);
    assert!(orchestrator.is_preview());
    assert_eq!(
        orchestrator.visible_rows()[42].value("comment"),
        Some("note, 42")
    );

    orchestrator.load_next();
    assert_eq!(orchestrator.visible_rows().len(), 150);
    assert!(!orchestrator.is_preview());

    let events = recorder.events();
    assert_eq!(events.len(), 2);
    match &events[0] {
        IntakeEvent::CsvLoaded {
            columns,
            rows,
            file_size,
            ..
        } => {
            assert_eq!(columns.len(), 3);
            assert_eq!(rows.len(), 150);
            assert_eq!(*file_size, content.len() as u64);
        }
        other => panic!("expected csvloaded, got {:?}", other),
    }
    assert!(matches!(&events[1], IntakeEvent::HeadersReady { columns } if columns.len() == 3));
}

#[tokio::test]
async fn test_mapping_handoff_carries_columns_only() {
    let file = write_temp_csv("FirstName,LastName,Email\nAda,Lovelace,ada@example.org\n");

    let mut orchestrator = UploadOrchestrator::new(IntakeConfig::default());
    let recorder = Recorder::default();
    orchestrator.subscribe(recorder.clone());

    let upload = FileUpload::open(file.path()).await.expect("open failed");
    orchestrator.handle_upload(Some(&upload)).await;
    assert!(orchestrator.go_to_mapping());

    match recorder.events().last() {
        Some(IntakeEvent::GoToMapping { columns, .. }) => {
            assert_eq!(columns, &["FirstName", "LastName", "Email"]);
        }
        other => panic!("expected gotomapping, got {:?}", other),
    }
}

#[tokio::test]
async fn test_missing_file_surfaces_read_error() {
    let file = write_temp_csv("a,b\n1,2\n");
    let upload = FileUpload::open(file.path()).await.expect("open failed");

    // Selection happened, then the file disappeared before the read.
    drop(file);

    let mut orchestrator = UploadOrchestrator::new(IntakeConfig::default());
    orchestrator.handle_upload(Some(&upload)).await;

    assert!(orchestrator.has_error());
    assert!(orchestrator.parse_error().contains("Failed to read"));
    assert_eq!(orchestrator.total_rows(), 0);
    assert_eq!(orchestrator.file_name(), upload.name());
}

#[tokio::test]
async fn test_binary_file_surfaces_content_error() {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    file.write_all(&[0x89, 0x50, 0x4e, 0x47, 0xff, 0xfe])
        .expect("Failed to write temp file");

    let upload = FileUpload::open(file.path()).await.expect("open failed");
    let mut orchestrator = UploadOrchestrator::new(IntakeConfig::default());
    orchestrator.handle_upload(Some(&upload)).await;

    assert!(orchestrator.has_error());
    assert!(orchestrator.parse_error().contains("not text"));
    assert!(orchestrator.columns().is_empty());
}
