//! Error types for report-dl
//!
//! This module provides error handling for the library:
//! - A top-level [`Error`] covering run-level failures
//! - [`AuthError`] for the login flow (the only run-fatal domain)
//! - A crate-wide [`Result`] alias
//!
//! Per-download failures are deliberately *not* errors: they are recorded in
//! [`DownloadOutcome`](crate::types::DownloadOutcome) and never abort a run.

use thiserror::Error;

/// Result type alias for report-dl operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for report-dl
///
/// Only run-level failures appear here. A single report failing to download
/// is reported through [`DownloadResult`](crate::types::DownloadResult)
/// instead, so one bad record never surfaces as an `Error`.
#[derive(Debug, Error)]
pub enum Error {
    /// Authentication failed - the run aborts before any download starts
    #[error("authentication error: {0}")]
    Auth(#[from] AuthError),

    /// Configuration error with context about which setting is invalid
    #[error("configuration error: {message}")]
    Config {
        /// Human-readable error message describing the configuration issue
        message: String,
        /// The configuration key that caused the error (e.g., "login_url")
        key: Option<String>,
    },

    /// Network error
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Record list could not be read or parsed
    #[error("record list error: {0}")]
    RecordList(#[from] csv::Error),

    /// Serialization error
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Login flow errors
///
/// Any of these aborts the entire batch before a single download is
/// attempted. None of them is retried: without a valid session there is
/// nothing useful to download.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Transport fault while fetching the login page
    #[error("failed to fetch login page: {0}")]
    LoginPageFetch(String),

    /// Login page responded with a non-success status
    #[error("login page returned status {0}")]
    LoginPageStatus(u16),

    /// The login page markup carries no CSRF token meta tag
    #[error("csrf token not found in login page")]
    TokenNotFound,

    /// Transport fault while submitting credentials
    #[error("failed to submit login form: {0}")]
    SubmitFailed(String),

    /// Credentials rejected (final status was neither 200 nor 302)
    #[error("login rejected with status {0}")]
    Rejected(u16),
}
