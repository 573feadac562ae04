use crate::client::{
    CliClientResult, ClientError,
    models::{ConflictField, UpdateUserRequest, User},
};

use std::panic::Location;

use error_location::ErrorLocation;
use reqwest::{Client as ReqwestClient, Method, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;
use uuid::Uuid;

/// HTTP client for the identity service REST API
pub struct Client {
    pub base_url: String,
    pub token: Option<String>,
    client: ReqwestClient,
}

impl Client {
    /// Create a new client
    ///
    /// # Arguments
    /// * `base_url` - Service URL (e.g., "http://127.0.0.1:8080")
    /// * `token` - Optional session token sent in the X-Session-Token header
    pub fn new(base_url: &str, token: Option<&str>) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            token: token.map(String::from),
            client: ReqwestClient::new(),
        }
    }

    /// Build a request with the optional session token header
    fn request(&self, method: Method, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        let mut req = self.client.request(method, &url);

        if let Some(ref token) = self.token {
            req = req.header("X-Session-Token", token);
        }

        req
    }

    /// Execute a request and classify the response
    async fn execute(&self, req: reqwest::RequestBuilder) -> CliClientResult<Value> {
        let response = req.send().await?;
        let status = response.status();
        let body: Value = response.json().await?;

        if !status.is_success() {
            return Err(classify_failure(status, &body));
        }

        Ok(body)
    }

    // =========================================================================
    // User Operations
    // =========================================================================

    /// Resolve an identifier (UUID or username) to the current user record.
    ///
    /// Resolves fresh on every call; the snapshot is never cached, so two
    /// invocations never act on the same stale record.
    pub async fn user(&self, identifier: &str) -> CliClientResult<User> {
        if identifier.is_empty() {
            return Err(ClientError::InvalidIdentifier);
        }

        let req = self.request(Method::GET, &format!("/api/v1/users/{}", identifier));
        let body = self.execute(req).await?;
        decode(body, "user")
    }

    /// List all users
    pub async fn list_users(&self) -> CliClientResult<Vec<User>> {
        let req = self.request(Method::GET, "/api/v1/users");
        let body = self.execute(req).await?;
        decode(body, "users")
    }

    /// Submit a full-replacement update for a user.
    ///
    /// Addressed by the resolved UUID, never by the identifier string the
    /// operator typed; usernames are exactly what this call may change.
    pub async fn update_user(&self, id: Uuid, update: &UpdateUserRequest) -> CliClientResult<User> {
        let req = self
            .request(Method::PUT, &format!("/api/v1/users/{}", id))
            .json(update);
        let body = self.execute(req).await?;
        decode(body, "user")
    }
}

/// Pull the envelope field out of a response body and deserialize it
#[track_caller]
fn decode<T: DeserializeOwned>(mut body: Value, field: &str) -> CliClientResult<T> {
    let value = body.get_mut(field).map(Value::take).unwrap_or(Value::Null);
    Ok(serde_json::from_value(value)?)
}

/// Map a non-2xx response body to a structured error
#[track_caller]
fn classify_failure(status: StatusCode, body: &Value) -> ClientError {
    let error = body.get("error");
    let message = error
        .and_then(|e| e.get("message"))
        .and_then(|v| v.as_str())
        .unwrap_or("Unknown error")
        .to_string();

    match status {
        StatusCode::NOT_FOUND => ClientError::NotFound { message },
        StatusCode::FORBIDDEN => ClientError::Forbidden { message },
        StatusCode::CONFLICT => {
            let fields = conflict_fields(error, &message);
            ClientError::Conflict { message, fields }
        }
        _ => {
            let code = error
                .and_then(|e| e.get("code"))
                .and_then(|v| v.as_str())
                .unwrap_or("UNKNOWN")
                .to_string();
            ClientError::Api {
                code,
                message,
                location: ErrorLocation::from(Location::caller()),
            }
        }
    }
}

/// Extract which field(s) a conflict response blames.
///
/// The structured `error.fields` array is the primary contract. Services
/// that predate it only name the field inside the message text, so matching
/// on the message is kept as a compatibility fallback.
pub(crate) fn conflict_fields(error: Option<&Value>, message: &str) -> Vec<ConflictField> {
    if let Some(listed) = error.and_then(|e| e.get("fields")).and_then(|v| v.as_array()) {
        let parsed: Vec<ConflictField> = listed
            .iter()
            .filter_map(|v| v.as_str())
            .filter_map(ConflictField::parse)
            .collect();
        if !parsed.is_empty() {
            return parsed;
        }
    }

    let lower = message.to_lowercase();
    let mut fields = Vec::new();
    if lower.contains("username") {
        fields.push(ConflictField::Username);
    }
    if lower.contains("email") {
        fields.push(ConflictField::Email);
    }
    fields
}
