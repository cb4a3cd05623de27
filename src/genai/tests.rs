//! Tests for outcome handling and reply post-processing.

use super::*;
use crate::config::Config;
use crate::test_support::ScriptedGenerator;
use serial_test::serial;

fn request() -> CompletionRequest {
    CompletionRequest {
        instructions: "system".to_string(),
        content: "user".to_string(),
        temperature: 0.5,
        max_tokens: 10,
    }
}

// ============================================================================
// generate_or
// ============================================================================

#[test]
fn test_without_generator_falls_back_with_no_credential() {
    let outcome = generate_or(
        None,
        "title",
        |_| Ok("never".to_string()),
        |reason| format!("fallback: {}", reason),
    );

    assert_eq!(outcome.reason(), Some(FallbackReason::NoCredential));
    assert_eq!(outcome.value(), "fallback: no credential");
}

#[test]
fn test_successful_attempt_is_fresh() {
    let generator = ScriptedGenerator::new().reply("Cube Quest");

    let outcome = generate_or(
        Some(&generator),
        "title",
        |g| g.complete(&request()),
        |_| "fallback".to_string(),
    );

    assert!(outcome.is_fresh());
    assert_eq!(outcome.into_value(), "Cube Quest");
    assert_eq!(generator.calls(), 1);
}

#[test]
fn test_failure_reasons_follow_error_kind() {
    let cases = [
        (
            GenerationError::Request("timeout".into()),
            FallbackReason::ServiceUnavailable,
        ),
        (
            GenerationError::Status {
                status: 500,
                body: "oops".into(),
            },
            FallbackReason::ServiceUnavailable,
        ),
        (GenerationError::EmptyReply, FallbackReason::MalformedResponse),
        (
            GenerationError::Malformed("bad".into()),
            FallbackReason::MalformedResponse,
        ),
        (
            GenerationError::InvalidStructure("no scenes".into()),
            FallbackReason::InvalidStructure,
        ),
    ];

    for (err, expected) in cases {
        let generator = ScriptedGenerator::new().fail(err);
        let outcome = generate_or(
            Some(&generator),
            "steps",
            |g| g.complete(&request()),
            |_| String::new(),
        );
        assert_eq!(outcome.reason(), Some(expected));
    }
}

#[test]
fn test_fallback_sees_reason() {
    let generator = ScriptedGenerator::new();
    let outcome = generate_or(
        Some(&generator),
        "title",
        |g| g.complete(&request()),
        |reason| match reason {
            FallbackReason::NoCredential => "keywords".to_string(),
            _ => "fixed".to_string(),
        },
    );

    assert_eq!(outcome.value(), "fixed");
}

// ============================================================================
// Reply post-processing
// ============================================================================

#[test]
fn test_strip_json_fence() {
    let text = "Here you go:\n```json\n{\"a\": 1}\n```\nEnjoy";
    assert_eq!(strip_code_fence(text), "{\"a\": 1}");
}

#[test]
fn test_strip_plain_fence() {
    assert_eq!(strip_code_fence("```\n[1, 2]\n```"), "[1, 2]");
}

#[test]
fn test_strip_without_fence_trims() {
    assert_eq!(strip_code_fence("  {\"a\": 1}\n"), "{\"a\": 1}");
}

#[test]
fn test_parse_fenced_json() {
    let value: serde_json::Value = parse_json("```json\n{\"given\": [\"5 cubes\"]}\n```").unwrap();
    assert_eq!(value["given"][0], "5 cubes");
}

#[test]
fn test_parse_json_error_is_malformed() {
    let err = parse_json::<serde_json::Value>("not json").unwrap_err();
    assert!(matches!(err, GenerationError::Malformed(_)));
}

#[test]
fn test_step_segments_collapse_line_breaks() {
    let text = "Intro\nStep 1: Find the volume\n  of one cube.\nStep 2: Multiply by 5.\n";
    assert_eq!(
        step_segments(text),
        vec!["Step 1: Find the volume of one cube.", "Step 2: Multiply by 5."]
    );
}

#[test]
fn test_step_segments_none_without_markers() {
    assert!(step_segments("1. First\n2. Second").is_empty());
}

#[test]
fn test_step_lines_only_keeps_leading_markers() {
    let text = "Step 1: a\nnote about Step 2: b\n  Step 3: c";
    assert_eq!(step_lines(text), vec!["Step 1: a", "Step 3: c"]);
}

#[test]
fn test_numbered_items() {
    let text = "Checks:\n1. Check the volume\n  2.  Try other numbers  \nextra";
    assert_eq!(
        numbered_items(text),
        vec!["Check the volume", "Try other numbers"]
    );
}

#[test]
fn test_non_numeric_lines() {
    let text = "First idea\n\n2\n  Second idea ";
    assert_eq!(non_numeric_lines(text), vec!["First idea", "Second idea"]);
}

// ============================================================================
// connect
// ============================================================================

#[test]
#[serial]
fn test_connect_without_credential_is_none() {
    let config = Config {
        api_key_env: "ZAPPLET_TEST_MISSING_KEY".to_string(),
        ..Config::default()
    };
    unsafe {
        std::env::remove_var("ZAPPLET_TEST_MISSING_KEY");
    }

    assert!(connect(&config, None).is_none());
    assert!(connect(&config, Some("   ")).is_none());
}

#[test]
#[serial]
fn test_connect_with_flag_builds_client() {
    let config = Config {
        api_key_env: "ZAPPLET_TEST_MISSING_KEY".to_string(),
        ..Config::default()
    };
    assert!(connect(&config, Some("sk-test")).is_some());
}
