//! # report-dl
//!
//! Library for bulk-downloading generated PDF reports from a session-based,
//! CSRF-protected web application.
//!
//! ## Design Philosophy
//!
//! report-dl is designed to be:
//! - **Fail-fast on auth** - a login failure aborts before any download starts
//! - **Failure-tolerant per job** - one bad record never stops the rest
//! - **Library-first** - no CLI or UI, purely a Rust crate for embedding
//! - **Stateless across runs** - each run writes into its own fresh directory
//!
//! ## Quick Start
//!
//! ```no_run
//! use report_dl::{BatchRunner, Config, Credentials, records};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::new(Credentials::new("user@example.com", "secret"));
//!     let records = records::read_records("record_list.csv")?;
//!
//!     let summary = BatchRunner::new(config)?.run(records).await?;
//!     println!("{summary}");
//!     for result in summary.results.iter().filter(|r| !r.is_success()) {
//!         eprintln!("failed: {}", result.filename);
//!     }
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::unwrap_used)]
#![warn(clippy::expect_used)]

/// Batch orchestration
pub mod batch;
/// Configuration types
pub mod config;
/// Single-report download job
mod download;
/// Error types
pub mod error;
/// Filename and output-directory naming
pub mod naming;
/// Record list input
pub mod records;
/// Authenticated session establishment
pub mod session;
/// Core types
pub mod types;

// Re-export commonly used types
pub use batch::BatchRunner;
pub use config::{Config, Credentials};
pub use error::{AuthError, Error, Result};
pub use session::Session;
pub use types::{BatchSummary, DownloadOutcome, DownloadResult, ReportRecord};
