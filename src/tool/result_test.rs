// ABOUTME: Tests for ToolResult - constructors, metadata, defaults.
// ABOUTME: Verifies result structure works correctly.

use super::*;

#[test]
fn test_text_result() {
    let result = ToolResult::text("Hello, world!");
    assert_eq!(result.content, "Hello, world!");
    assert!(!result.is_error);
    assert!(result.metadata.is_empty());
}

#[test]
fn test_json_result() {
    let result = ToolResult::json(&serde_json::json!({"count": 3})).unwrap();
    assert!(!result.is_error);
    assert!(result.content.contains("\"count\": 3"));
}

#[test]
fn test_error_result() {
    let result = ToolResult::error("Something went wrong");
    assert_eq!(result.content, "Something went wrong");
    assert!(result.is_error);
}

#[test]
fn test_with_metadata() {
    let result = ToolResult::text("output")
        .with_metadata("rows", 12)
        .with_metadata("cached", false);

    assert_eq!(result.metadata["rows"], 12);
    assert_eq!(result.metadata["cached"], false);
}

#[test]
fn test_default() {
    let result = ToolResult::default();
    assert_eq!(result.content, "");
    assert!(!result.is_error);
}
