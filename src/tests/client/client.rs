use crate::client::client::conflict_fields;
use crate::{Client, ConflictField};

use serde_json::json;

#[test]
fn test_base_url_trailing_slash_trimmed() {
    let client = Client::new("http://localhost:8000/", None);
    assert_eq!(client.base_url, "http://localhost:8000");
}

#[test]
fn test_base_url_no_trailing_slash() {
    let client = Client::new("http://localhost:8000", None);
    assert_eq!(client.base_url, "http://localhost:8000");
}

#[test]
fn test_token_stored() {
    let client = Client::new("http://localhost:8000", Some("secret-token"));
    assert_eq!(client.token, Some("secret-token".to_string()));
}

#[test]
fn test_token_none() {
    let client = Client::new("http://localhost:8000", None);
    assert!(client.token.is_none());
}

#[test]
fn test_conflict_fields_structured() {
    let error = json!({"fields": ["email"], "message": "User already exists"});
    let fields = conflict_fields(Some(&error), "User already exists");
    assert_eq!(fields, vec![ConflictField::Email]);
}

#[test]
fn test_conflict_fields_structured_wins_over_message() {
    // The message mentions username, but the structured list is the contract.
    let error = json!({"fields": ["email"]});
    let fields = conflict_fields(Some(&error), "username taken");
    assert_eq!(fields, vec![ConflictField::Email]);
}

#[test]
fn test_conflict_fields_message_fallback() {
    let fields = conflict_fields(None, "A user with that username already exists");
    assert_eq!(fields, vec![ConflictField::Username]);
}

#[test]
fn test_conflict_fields_both_from_message() {
    let fields = conflict_fields(None, "username and email already exist");
    assert_eq!(fields, vec![ConflictField::Username, ConflictField::Email]);
}

#[test]
fn test_conflict_fields_unknown_entries_ignored() {
    let error = json!({"fields": ["password"]});
    let fields = conflict_fields(Some(&error), "email already exists");
    // Nothing recognizable in the structured list, so the message decides.
    assert_eq!(fields, vec![ConflictField::Email]);
}

#[test]
fn test_conflict_fields_empty_when_unattributable() {
    let fields = conflict_fields(None, "duplicate record");
    assert!(fields.is_empty());
}
