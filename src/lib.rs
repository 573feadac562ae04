//! userctl library
//!
//! This module exports the HTTP client and the update workflow for use in
//! tests and other crates.

pub(crate) mod client;
pub mod prompt;
pub mod update;

#[cfg(test)]
mod tests;

pub use client::{CliClientResult, Client, ClientError, ConflictField, UpdateUserRequest, User};
