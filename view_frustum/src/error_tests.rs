//! Unit tests for error.rs
//!
//! Tests all Error variants and their implementations (Display, Debug, Clone, std::error::Error).

use crate::error::{Error, Result};

// ============================================================================
// ERROR DISPLAY TESTS
// ============================================================================

#[test]
fn test_invalid_argument_display() {
    let err = Error::InvalidArgument("corner list is empty".to_string());
    let display = format!("{}", err);
    assert!(display.contains("Invalid argument"));
    assert!(display.contains("corner list is empty"));
}

#[test]
fn test_invalid_matrix_display() {
    let err = Error::InvalidMatrix("expected 16 values, got 9".to_string());
    let display = format!("{}", err);
    assert_eq!(display, "Invalid matrix: expected 16 values, got 9");
}

// ============================================================================
// ERROR TRAIT IMPLEMENTATIONS
// ============================================================================

#[test]
fn test_error_is_std_error() {
    let err = Error::InvalidArgument("test".to_string());
    let _: &dyn std::error::Error = &err;
}

#[test]
fn test_error_debug() {
    let err = Error::InvalidMatrix("test".to_string());
    let debug = format!("{:?}", err);
    assert!(debug.contains("InvalidMatrix"));
}

#[test]
fn test_error_clone_and_eq() {
    let err1 = Error::InvalidArgument("box".to_string());
    let err2 = err1.clone();
    assert_eq!(err1, err2);
    assert_ne!(err1, Error::InvalidMatrix("box".to_string()));
}

// ============================================================================
// RESULT TYPE ALIAS
// ============================================================================

#[test]
fn test_result_propagation() {
    fn inner() -> Result<u32> {
        Err(Error::InvalidArgument("missing extents".to_string()))
    }

    fn outer() -> Result<u32> {
        let value = inner()?;
        Ok(value + 1)
    }

    match outer() {
        Err(Error::InvalidArgument(msg)) => assert_eq!(msg, "missing extents"),
        other => panic!("unexpected result: {:?}", other),
    }
}
