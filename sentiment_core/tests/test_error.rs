use sentiment_core::{EngineConfig, SentimentError};
use std::io;

#[test]
fn test_error_conversion() {
    let io_error = io::Error::new(io::ErrorKind::NotFound, "file not found");
    let error = SentimentError::from(io_error);
    assert!(matches!(error, SentimentError::Io(_)));

    let json_error = serde_json::from_str::<EngineConfig>("not json").unwrap_err();
    let error = SentimentError::from(json_error);
    assert!(matches!(error, SentimentError::Json(_)));
}

#[test]
fn test_error_display() {
    let error = SentimentError::ScoringFailed("engine panicked".to_string());
    assert_eq!(error.to_string(), "Scoring failed: engine panicked");

    let error = SentimentError::InvalidConfig("at least one granularity is required".to_string());
    assert!(error.to_string().contains("Invalid config"));

    let io_error = io::Error::new(io::ErrorKind::PermissionDenied, "permission denied");
    let error_string = SentimentError::from(io_error).to_string();
    assert!(error_string.contains("IO error"));
    assert!(error_string.contains("permission denied"));
}
