//! jsshealth - health-check auditor for JSS admin consoles
//!
//! This library fetches a console's semi-structured diagnostic pages and
//! XML API objects, extracts facts from them, scores the facts against
//! configurable thresholds, and assembles an ordered report tree.
//!
//! # Core Concepts
//!
//! - **Summary**: the tab- and rule-delimited plaintext page every console
//!   serves; [`summary`] splits it into sections and rows and resolves
//!   fields by labeled-section lookup
//! - **Records**: XML API objects read positionally; [`record`] parses
//!   them and [`extract`] applies per-kind slot tables to produce facts
//! - **Report tree**: an insertion-ordered JSON-like tree built through
//!   [`report::ReportBuilder`]; field names and nesting are a stable
//!   contract for downstream tooling
//! - **Evaluation**: pure scoring rules in [`evaluate`], with every
//!   threshold surfaced in [`config`]
//!
//! # Example Usage
//!
//! ```ignore
//! use std::sync::Arc;
//! use jsshealth::{AuditOptions, Auditor, HttpConsoleClient, JssHealthConfig};
//!
//! async fn audit() -> jsshealth::Result<()> {
//!     let config = JssHealthConfig::default();
//!     let client = HttpConsoleClient::new(
//!         "https://jss.example.com:8443",
//!         "admin",
//!         "secret",
//!         config.request_timeout_secs,
//!         false,
//!     )?;
//!     let auditor = Auditor::new(Arc::new(client), config);
//!     let report = auditor.run(&AuditOptions::default()).await?;
//!     println!("{}", report.tree.to_json());
//!     Ok(())
//! }
//! ```
//!
//! # Project Structure
//!
//! - [`audit`]: the orchestrator driving one full pass
//! - [`summary`]: summary page splitting and field extraction
//! - [`extract`]: per-object-kind slot tables and extraction rules

// Public modules
pub mod audit;
pub mod cli;
pub mod client;
pub mod config;
pub mod error;
pub mod evaluate;
pub mod extract;
pub mod record;
pub mod report;
pub mod summary;
pub mod util;

// Re-export key types for convenient access
pub use audit::{AuditOptions, Auditor, CancelToken, CheckOutcome, HealthReport};
pub use client::{ConsoleClient, HttpConsoleClient};
pub use config::{ConfigError, JssHealthConfig};
pub use error::{HealthCheckError, Result};
pub use evaluate::{Evaluation, HealthStatus};
pub use report::{ReportBuilder, ReportNode};
pub use summary::ConsoleSummary;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_exists() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_name_matches_package() {
        assert_eq!(NAME, "jsshealth");
    }
}
