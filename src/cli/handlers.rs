//! Subcommand handlers: wire arguments into the engine and report exit
//! codes. All user-facing failure text goes to stderr; the report itself is
//! the only thing written to stdout or the output file.

use std::sync::Arc;

use tracing::{error, info, warn};

use crate::audit::{AuditOptions, Auditor};
use crate::cli::commands::AuditArgs;
use crate::cli::output::OutputFormatter;
use crate::client::HttpConsoleClient;
use crate::config::JssHealthConfig;

pub async fn handle_audit(args: &AuditArgs) -> i32 {
    let mut config = JssHealthConfig::default();
    if let Some(timeout) = args.timeout {
        config.request_timeout_secs = timeout;
    }
    if args.legacy_summary {
        config.legacy_summary = true;
    }
    if let Err(err) = config.validate() {
        error!("Invalid configuration: {err}");
        return 2;
    }

    let client = match HttpConsoleClient::new(
        &args.url,
        &args.username,
        &args.password,
        config.request_timeout_secs,
        args.insecure,
    ) {
        Ok(client) => Arc::new(client),
        Err(err) => {
            error!("Failed to build HTTP client: {err}");
            return 2;
        }
    };

    let auditor = Auditor::new(client, config);

    // Ctrl-C stops new fetches; the pass then drains and reports whatever
    // it extracted.
    let token = auditor.cancel_token();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            warn!("interrupt received, finishing in-flight fetches");
            token.cancel();
        }
    });

    let options = AuditOptions {
        include_system: !args.no_system,
    };
    let report = match auditor.run(&options).await {
        Ok(report) => report,
        Err(err) => {
            error!("Audit failed: {err}");
            return 1;
        }
    };

    let formatter = OutputFormatter::new(args.format.into());
    let rendered = match formatter.format(&report) {
        Ok(rendered) => rendered,
        Err(err) => {
            error!("Failed to render report: {err}");
            return 1;
        }
    };

    match &args.output {
        Some(path) => {
            if let Err(err) = tokio::fs::write(path, &rendered).await {
                error!("Failed to write {}: {err}", path.display());
                return 1;
            }
            info!("report written to {}", path.display());
        }
        None => println!("{rendered}"),
    }

    0
}
