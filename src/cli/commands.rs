use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Health-check auditor for JSS admin consoles
#[derive(Parser, Debug)]
#[command(
    name = "jsshealth",
    about = "Health-check auditor for JSS admin consoles",
    version,
    author,
    long_about = "jsshealth fetches the console's diagnostic pages and API objects, \
                  extracts environment and configuration facts, scores them against \
                  known-good thresholds, and emits a health report."
)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(long, global = true, value_name = "LEVEL", help = "Set logging level")]
    pub log_level: Option<String>,

    #[arg(short = 'v', long, global = true, help = "Increase verbosity")]
    pub verbose: bool,

    #[arg(
        short = 'q',
        long,
        global = true,
        conflicts_with = "verbose",
        help = "Quiet mode - suppress non-error output"
    )]
    pub quiet: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    #[command(
        about = "Audit a console and emit a health report",
        long_about = "Runs the full audit pass against a console: summary page, startup \
                      page, and every API object kind.\n\n\
                      Examples:\n  \
                      jsshealth audit https://jss.example.com:8443 -u admin\n  \
                      jsshealth audit https://acme.jamfcloud.com -u admin --format json -o report.json"
    )]
    Audit(AuditArgs),
}

#[derive(Parser, Debug, Clone)]
pub struct AuditArgs {
    #[arg(value_name = "URL", help = "Console base URL")]
    pub url: String,

    #[arg(
        short = 'u',
        long,
        env = "JSSHEALTH_USERNAME",
        help = "Console account with read access to the API and summary pages"
    )]
    pub username: String,

    #[arg(
        short = 'p',
        long,
        env = "JSSHEALTH_PASSWORD",
        hide_env_values = true,
        help = "Password for the console account"
    )]
    pub password: String,

    #[arg(
        short = 'f',
        long,
        value_enum,
        default_value = "human",
        help = "Output format"
    )]
    pub format: OutputFormatArg,

    #[arg(
        short = 'o',
        long,
        value_name = "FILE",
        help = "Write the report to a file instead of stdout"
    )]
    pub output: Option<PathBuf>,

    #[arg(long, help = "Skip the summary-derived system object")]
    pub no_system: bool,

    #[arg(long, help = "Accept self-signed TLS certificates")]
    pub insecure: bool,

    #[arg(long, help = "Request the reduced summary form served by older consoles")]
    pub legacy_summary: bool,

    #[arg(
        long,
        value_name = "SECONDS",
        help = "Request timeout in seconds (overrides JSSHEALTH_REQUEST_TIMEOUT)"
    )]
    pub timeout: Option<u64>,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormatArg {
    Json,
    Human,
}

impl From<OutputFormatArg> for super::output::OutputFormat {
    fn from(arg: OutputFormatArg) -> Self {
        match arg {
            OutputFormatArg::Json => super::output::OutputFormat::Json,
            OutputFormatArg::Human => super::output::OutputFormat::Human,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_args_verify() {
        CliArgs::command().debug_assert();
    }

    #[test]
    fn test_default_audit_args() {
        let args = CliArgs::parse_from([
            "jsshealth",
            "audit",
            "https://jss.example.com",
            "-u",
            "admin",
            "-p",
            "secret",
        ]);
        let Commands::Audit(audit) = args.command;
        assert_eq!(audit.url, "https://jss.example.com");
        assert_eq!(audit.format, OutputFormatArg::Human);
        assert!(audit.output.is_none());
        assert!(!audit.no_system);
        assert!(!audit.insecure);
        assert!(!audit.legacy_summary);
        assert!(audit.timeout.is_none());
    }

    #[test]
    fn test_audit_flags() {
        let args = CliArgs::parse_from([
            "jsshealth",
            "audit",
            "https://jss.example.com",
            "-u",
            "admin",
            "-p",
            "secret",
            "--format",
            "json",
            "--no-system",
            "--insecure",
            "--timeout",
            "5",
        ]);
        let Commands::Audit(audit) = args.command;
        assert_eq!(audit.format, OutputFormatArg::Json);
        assert!(audit.no_system);
        assert!(audit.insecure);
        assert_eq!(audit.timeout, Some(5));
    }
}
