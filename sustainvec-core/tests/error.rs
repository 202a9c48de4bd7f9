use std::path::PathBuf;

use sustainvec_core::{EmbeddingError, PipelineError, StoreError};

#[test]
fn missing_field_names_element_and_field() {
    let err = PipelineError::missing(Some("t-1"), "text_as_html");
    assert_eq!(
        err.to_string(),
        "Element t-1 is missing required field 'text_as_html'"
    );

    let anonymous = PipelineError::missing(None, "element_id");
    assert!(anonymous.to_string().contains("<no id>"));
}

#[test]
fn io_error_mentions_path() {
    let err = PipelineError::io(
        PathBuf::from("/data/report.json"),
        std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
    );
    assert!(err.to_string().contains("/data/report.json"));
}

#[test]
fn embedding_error_display() {
    let err = EmbeddingError::Provider("upstream timeout".to_string());
    assert_eq!(err.to_string(), "Embedding provider error: upstream timeout");
}

#[test]
fn store_error_display() {
    let err = StoreError::DimensionMismatch {
        expected: 1536,
        got: 3,
    };
    assert_eq!(err.to_string(), "dimension mismatch: expected 1536, got 3");
}
