use crate::{ClientError, ConflictField};

#[test]
fn test_invalid_identifier_message() {
    let err = ClientError::InvalidIdentifier;
    assert_eq!(err.to_string(), "user identifier cannot be an empty string");
}

#[test]
fn test_not_found_surfaces_service_message_verbatim() {
    let err = ClientError::NotFound {
        message: "\"user\" must be an existing uuid or username".to_string(),
    };
    assert_eq!(
        err.to_string(),
        "\"user\" must be an existing uuid or username"
    );
}

#[test]
fn test_conflict_names_single_field() {
    let err = ClientError::Conflict {
        message: "User already exists".to_string(),
        fields: vec![ConflictField::Username],
    };
    let rendered = err.to_string();
    assert!(rendered.contains("already exists"));
    assert!(rendered.contains("username"));
    assert!(!rendered.contains("email"));
}

#[test]
fn test_conflict_names_both_fields() {
    let err = ClientError::Conflict {
        message: "User already exists".to_string(),
        fields: vec![ConflictField::Username, ConflictField::Email],
    };
    let rendered = err.to_string();
    assert!(rendered.contains("already exists"));
    assert!(rendered.contains("username"));
    assert!(rendered.contains("email"));
}

#[test]
fn test_conflict_without_attribution_still_shows_message() {
    let err = ClientError::Conflict {
        message: "duplicate record".to_string(),
        fields: vec![],
    };
    let rendered = err.to_string();
    assert!(rendered.contains("duplicate record"));
    assert!(rendered.contains("unspecified"));
}

#[test]
fn test_forbidden_message() {
    let err = ClientError::Forbidden {
        message: "insufficient privileges".to_string(),
    };
    let rendered = err.to_string();
    assert!(rendered.contains("forbidden"));
    assert!(rendered.contains("insufficient privileges"));
}
