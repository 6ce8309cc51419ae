use crate::error::{PrayerError, ErrorContext};
use crate::prayer_error;

#[test]
fn test_error_context_on_result() {
    let result: Result<i32, std::io::Error> = Err(std::io::Error::new(
        std::io::ErrorKind::NotFound,
        "file not found"
    ));

    let prayer_result = result.context("Failed to read prayer times");
    assert!(prayer_result.is_err());

    match prayer_result {
        Err(PrayerError::Unknown(msg)) => {
            assert!(msg.contains("Failed to read prayer times"));
            assert!(msg.contains("file not found"));
        }
        _ => panic!("Expected PrayerError::Unknown"),
    }
}

#[test]
fn test_error_context_on_option() {
    let option: Option<String> = None;
    let result = option.context("No location saved");

    match result {
        Err(PrayerError::Unknown(msg)) => assert_eq!(msg, "No location saved"),
        _ => panic!("Expected PrayerError::Unknown"),
    }
}

#[test]
fn test_error_context_with_closure() {
    let result: Result<i32, std::io::Error> = Err(std::io::Error::new(
        std::io::ErrorKind::PermissionDenied,
        "access denied"
    ));

    let prayer_result = result.with_context(|| {
        format!("Failed to write settings to: {}", "/tmp/prayer-settings.json")
    });

    match prayer_result {
        Err(PrayerError::Unknown(msg)) => {
            assert!(msg.contains("Failed to write settings to: /tmp/prayer-settings.json"));
            assert!(msg.contains("access denied"));
        }
        _ => panic!("Expected PrayerError::Unknown"),
    }
}

#[test]
fn test_prayer_error_macro() {
    let error = prayer_error!(Persistence, "disk full");
    match error {
        PrayerError::Persistence(msg) => assert_eq!(msg, "disk full"),
        _ => panic!("Expected PrayerError::Persistence"),
    }

    let error = prayer_error!(InvalidInput, "unknown color '{}'", "mauve");
    match error {
        PrayerError::InvalidInput(msg) => assert_eq!(msg, "unknown color 'mauve'"),
        _ => panic!("Expected PrayerError::InvalidInput"),
    }
}

#[test]
fn test_json_errors_convert() {
    let parsed: Result<serde_json::Value, _> = serde_json::from_str("{not json");
    let error: PrayerError = parsed.unwrap_err().into();
    assert!(matches!(error, PrayerError::JsonError(_)));
    assert!(error.to_string().starts_with("JSON error"));
}
