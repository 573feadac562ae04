pub(crate) mod client;
pub(crate) mod error;
pub(crate) mod models;

pub use client::Client;
pub use error::{ClientError, Result as CliClientResult};
pub use models::{ConflictField, UpdateUserRequest, User};
