//! Error types for remote calls and configuration.
//!
//! Errors that travel inside actions are `Clone` so actions stay cloneable
//! for the store's broadcast channel.

use thiserror::Error;

/// Failure talking to the hosted movie/ticket tables.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BackendError {
    /// The request never produced a response (connection, TLS, DNS)
    #[error("Request failed: {0}")]
    Request(String),

    /// The backend answered with a non-success status
    #[error("Backend error (status {status}): {message}")]
    Status {
        /// HTTP status code
        status: u16,
        /// `message` from the error body, or the raw body
        message: String,
    },

    /// The response body didn't match the expected rows
    #[error("Response decoding failed: {0}")]
    Decode(String),
}

/// Failure delivering reminder emails.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ReminderError {
    /// The endpoint could not be reached
    #[error("Reminder request failed: {0}")]
    Request(String),

    /// The endpoint answered with a non-2xx status
    #[error("Reminder endpoint rejected the request (status {status}): {message}")]
    Rejected {
        /// HTTP status code
        status: u16,
        /// `message` from the JSON error body, if any
        message: String,
    },

    /// The endpoint answered with a non-2xx status and a body that isn't JSON
    #[error("Reminder endpoint failed (status {status}) with an unreadable body: {reason}")]
    Malformed {
        /// HTTP status code
        status: u16,
        /// Why the body could not be read
        reason: String,
    },
}

/// Invalid or missing configuration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// A required variable is not set
    #[error("Missing required environment variable {0}")]
    Missing(&'static str),

    /// A variable is set to something unusable
    #[error("Invalid value for {var}: {reason}")]
    Invalid {
        /// Variable name
        var: &'static str,
        /// What was wrong with it
        reason: String,
    },
}
