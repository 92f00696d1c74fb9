//! Typed fact extraction from the indexed summary.
//!
//! The free functions are the generic primitives (keyed substring lookup,
//! size parsing, table-list and row-count scanning); [`ConsoleSummary`]
//! binds them to the concrete cells the console prints each fact in. Those
//! coordinates are format quirks, not design: they were determined
//! empirically against live dumps and live here in one place so a format
//! revision breaks one module, not the whole crate.

use std::cmp::Ordering;
use std::sync::OnceLock;

use regex::Regex;

use crate::error::{HealthCheckError, Result};
use crate::summary::index::SummaryIndex;
use crate::summary::structured::split;

/// Section offset of the environment block (OS, Java, MySQL, database
/// size). It always follows the first `=` rule.
const ENVIRONMENT_SECTION: usize = 1;

/// Size unit multipliers, normalizing to megabytes.
const KB_TO_MB: f64 = 0.001;
const GB_TO_MB: f64 = 1000.0;

/// Finds `key` inside one tab-delimited cell and returns the trailing text,
/// trimmed, with the vendor's dot-leader artifacts stripped from both ends.
pub fn keyed_substring(cell: &str, key: &str) -> Result<String> {
    let start = cell
        .find(key)
        .ok_or_else(|| HealthCheckError::missing(format!("key {key:?}")))?;
    let value = cell[start + key.len()..]
        .trim()
        .trim_start_matches('.')
        .trim_start()
        .trim_end_matches('.')
        .trim_end();
    Ok(value.to_string())
}

/// Parses a numeric value with a `KB`/`MB`/`GB` unit token, normalized to
/// megabytes. Any other unit is a recoverable [`HealthCheckError::UnitParseError`];
/// the caller decides whether to default or propagate.
pub fn size_with_unit(text: &str) -> Result<f64> {
    static SIZE_PATTERN: OnceLock<Regex> = OnceLock::new();
    let pattern = SIZE_PATTERN
        .get_or_init(|| Regex::new(r"([0-9]+(?:\.[0-9]+)?)\s*([A-Za-z]+)").expect("size pattern"));

    let captures = pattern
        .captures(text)
        .ok_or_else(|| HealthCheckError::UnitParseError(text.to_string()))?;
    let value: f64 = captures[1]
        .parse()
        .map_err(|_| HealthCheckError::UnitParseError(text.to_string()))?;

    match &captures[2] {
        "KB" => Ok(value * KB_TO_MB),
        "MB" => Ok(value),
        "GB" => Ok(value * GB_TO_MB),
        _ => Err(HealthCheckError::UnitParseError(text.to_string())),
    }
}

/// One oversized database table, size normalized to megabytes.
#[derive(Debug, Clone, PartialEq)]
pub struct LargeTable {
    pub name: String,
    pub size_mb: f64,
}

/// Extracts `(name, size, unit)` triples from the table-sizes row.
///
/// Cells that do not parse are skipped. The result is sorted descending by
/// normalized size (stable, so ties keep source order) and truncated to
/// `cells.len() - trailing_tokens`: the source row ends in a fixed number of
/// non-table tokens, and that offset is configuration, not a law of nature.
pub fn large_table_list(cells: &[String], trailing_tokens: usize) -> Vec<LargeTable> {
    let retained = cells.len().saturating_sub(trailing_tokens);

    let mut tables: Vec<LargeTable> = cells
        .iter()
        .filter_map(|cell| {
            let tokens: Vec<&str> = cell.split_whitespace().collect();
            if tokens.len() < 3 {
                return None;
            }
            let size: f64 = tokens[tokens.len() - 2].parse().ok()?;
            let unit = tokens[tokens.len() - 1];
            let size_mb = if unit.contains("KB") {
                size * KB_TO_MB
            } else if unit.contains("GB") {
                size * GB_TO_MB
            } else {
                size
            };
            Some(LargeTable {
                name: tokens[0].to_string(),
                size_mb,
            })
        })
        .collect();

    tables.sort_by(|a, b| b.size_mb.partial_cmp(&a.size_mb).unwrap_or(Ordering::Equal));
    tables.truncate(retained);
    tables
}

/// Row counts of the device tables, as printed by the console.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableRowCounts {
    pub computers: Option<String>,
    pub computers_denormalized: Option<String>,
    pub mobile_devices: Option<String>,
    pub mobile_devices_denormalized: Option<String>,
}

/// Scans the row-counts row for the four known table names.
///
/// The denormalized variants are matched before the base names: the base
/// name is a prefix of the denormalized one, so the reverse order would
/// capture denormalized counts as base counts.
pub fn row_counts(row_text: &str) -> TableRowCounts {
    const KEYS: [&str; 4] = [
        "computers_denormalized",
        "mobile_devices_denormalized",
        "computers",
        "mobile_devices",
    ];

    let tokens: Vec<&str> = row_text.split_whitespace().collect();
    let mut counts = TableRowCounts::default();

    for (i, token) in tokens.iter().enumerate() {
        let Some(key) = KEYS.iter().find(|k| token.contains(**k)) else {
            continue;
        };

        let offset = token.find(key).unwrap_or(0) + key.len();
        let mut value = token[offset..].trim_matches('.').trim().to_string();
        if value.is_empty() {
            // Count printed as the following token.
            value = tokens
                .get(i + 1)
                .map(|t| t.trim_matches('.').trim().to_string())
                .unwrap_or_default();
        }
        if value.is_empty() {
            continue;
        }

        let slot = match *key {
            "computers_denormalized" => &mut counts.computers_denormalized,
            "mobile_devices_denormalized" => &mut counts.mobile_devices_denormalized,
            "computers" => &mut counts.computers,
            _ => &mut counts.mobile_devices,
        };
        *slot = Some(value);
    }

    counts
}

/// Password policy requirement flags, verbatim from the summary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasswordPolicy {
    pub require_uppercase: String,
    pub require_lowercase: String,
    pub require_number: String,
    pub require_special: String,
}

impl PasswordPolicy {
    /// Number of the four requirements that are enabled.
    pub fn met_count(&self) -> u32 {
        [
            &self.require_uppercase,
            &self.require_lowercase,
            &self.require_number,
            &self.require_special,
        ]
        .iter()
        .filter(|v| v.contains("true"))
        .count() as u32
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeManagement {
    pub use_log_file: String,
    pub log_file_path: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TomcatCert {
    pub issuer: String,
    pub expires: String,
}

/// Push certificate expirations; either half may be absent from a dump.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PushCertExpirations {
    pub mdm_push_cert: String,
    pub push_proxy: String,
}

/// Placeholder the console's own reports use for absent push cert data.
pub const NO_DATA: &str = "No Data Available.";

/// Typed accessors over one parsed summary dump.
#[derive(Debug)]
pub struct ConsoleSummary {
    index: SummaryIndex,
}

impl ConsoleSummary {
    /// Parses and indexes a summary blob. The only fatal failure is an
    /// unusable blob; individual facts degrade per accessor.
    pub fn parse(blob: &str) -> Result<Self> {
        Ok(ConsoleSummary {
            index: SummaryIndex::build(split(blob)?),
        })
    }

    pub fn index(&self) -> &SummaryIndex {
        &self.index
    }

    fn keyed_at(&self, section: usize, row: usize, cell: usize, key: &str) -> Result<String> {
        keyed_substring(self.index.value_at(section, row, cell)?, key)
    }

    /// Keyed lookup within the section following a category label.
    fn keyed_after(&self, label: &str, row: usize, cell: usize, key: &str) -> Result<String> {
        let section = self.index.require(label)? + 1;
        self.keyed_at(section, row, cell, key)
    }

    pub fn operating_system(&self) -> Result<String> {
        self.keyed_at(ENVIRONMENT_SECTION, 2, 1, "Operating System")
    }

    pub fn java_version(&self) -> Result<String> {
        self.keyed_at(ENVIRONMENT_SECTION, 4, 1, "Java Version")
    }

    pub fn java_vendor(&self) -> Result<String> {
        self.keyed_at(ENVIRONMENT_SECTION, 4, 3, "Java Vendor")
    }

    /// Web app install directory, with drive-colon and backslash artifacts
    /// normalized away.
    pub fn web_app_dir(&self) -> Result<String> {
        let raw = self.keyed_at(ENVIRONMENT_SECTION, 3, 1, "Web App Installed To")?;
        Ok(raw.replace(':', "").replace('\\', "/"))
    }

    pub fn mysql_version(&self) -> Result<String> {
        self.keyed_at(ENVIRONMENT_SECTION, 9, 20, "version")
    }

    /// Database size normalized to megabytes.
    pub fn database_size_mb(&self) -> Result<f64> {
        let raw = self.keyed_at(ENVIRONMENT_SECTION, 5, 6, "Database Size")?;
        size_with_unit(&raw)
    }

    pub fn clustering_enabled(&self) -> Result<String> {
        self.keyed_after("Clustering", 0, 1, "Clustering Enabled")
    }

    pub fn activation_code_expiration(&self) -> Result<String> {
        self.keyed_after("Activation Code", 1, 4, "Expires")
    }

    pub fn password_policy(&self) -> Result<PasswordPolicy> {
        Ok(PasswordPolicy {
            require_uppercase: self.keyed_after("Password Policy", 1, 1, "Require Uppercase")?,
            require_lowercase: self.keyed_after("Password Policy", 1, 2, "Require Lowercase")?,
            require_number: self.keyed_after("Password Policy", 1, 3, "Require Number")?,
            require_special: self.keyed_after(
                "Password Policy",
                1,
                4,
                "Require Special Characters",
            )?,
        })
    }

    pub fn change_management(&self) -> Result<ChangeManagement> {
        Ok(ChangeManagement {
            use_log_file: self.keyed_after("Change Management", 0, 1, "Use Log File")?,
            log_file_path: self.keyed_after("Change Management", 0, 2, "Location of Log File")?,
        })
    }

    pub fn tomcat_cert(&self) -> Result<TomcatCert> {
        Ok(TomcatCert {
            issuer: self.keyed_after("Apache Tomcat Settings", 0, 2, "SSL Cert Issuer")?,
            expires: self.keyed_after("Apache Tomcat Settings", 0, 3, "SSL Cert Expires")?,
        })
    }

    pub fn log_flushing_time(&self) -> Result<String> {
        self.keyed_after("Log Flushing", 1, 1, "Time to Flush Logs Each Day")
    }

    /// MDM and push-proxy certificate expirations. The console prints the
    /// two certs in consecutive sections; a missing half degrades to the
    /// [`NO_DATA`] placeholder rather than an error.
    pub fn push_cert_expirations(&self) -> Result<PushCertExpirations> {
        let section = self.index.require("Push Certificates")? + 1;

        let mdm = match self.index.row_text(section, 0) {
            Ok(row) if row.contains("MDM Push Notification Certificate") => self
                .keyed_at(section, 0, 3, "Expires")
                .unwrap_or_else(|_| NO_DATA.to_string()),
            _ => NO_DATA.to_string(),
        };

        let proxy = match self.index.row_text(section + 1, 0) {
            Ok(row) if row.contains("Push Proxy Authorization Token") => self
                .keyed_at(section + 1, 0, 3, "Expires")
                .unwrap_or_else(|_| NO_DATA.to_string()),
            _ => NO_DATA.to_string(),
        };

        Ok(PushCertExpirations {
            mdm_push_cert: mdm,
            push_proxy: proxy,
        })
    }

    pub fn login_logout_hooks_enabled(&self) -> Result<bool> {
        let value = self.keyed_after("Check-In", 1, 1, "Login/Logout Hooks")?;
        Ok(value.eq_ignore_ascii_case("true"))
    }

    pub fn table_row_counts(&self) -> Result<TableRowCounts> {
        let section = self.index.require("Table row counts")? + 1;
        Ok(row_counts(&self.index.row_text(section, 0)?))
    }

    pub fn large_tables(&self, trailing_tokens: usize) -> Result<Vec<LargeTable>> {
        let section = self.index.require("Table sizes")? + 1;
        Ok(large_table_list(
            self.index.row_cells(section, 0)?,
            trailing_tokens,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use yare::parameterized;

    #[test]
    fn test_keyed_substring_trims_artifacts() {
        assert_eq!(
            keyed_substring("Clustering Enabled ........... false.", "Clustering Enabled").unwrap(),
            "false"
        );
        assert_eq!(
            keyed_substring("x version ....................5.6.20", "version").unwrap(),
            "5.6.20"
        );
    }

    #[test]
    fn test_keyed_substring_missing_key() {
        let err = keyed_substring("nothing relevant here", "Database Size").unwrap_err();
        assert!(matches!(err, HealthCheckError::MissingField(_)));
    }

    #[parameterized(
        kilobytes = { "12.5 KB", 0.0125 },
        megabytes = { "7 MB", 7.0 },
        gigabytes = { "3 GB", 3000.0 },
        embedded = { "about 2.5 GB on disk", 2500.0 },
    )]
    fn test_size_with_unit(text: &str, expected_mb: f64) {
        let got = size_with_unit(text).unwrap();
        assert!((got - expected_mb).abs() < 1e-9, "{text} -> {got}");
    }

    #[test]
    fn test_size_with_unit_rejects_unknown_unit() {
        assert!(matches!(
            size_with_unit("9 TB"),
            Err(HealthCheckError::UnitParseError(_))
        ));
        assert!(matches!(
            size_with_unit("no size at all"),
            Err(HealthCheckError::UnitParseError(_))
        ));
    }

    #[test]
    fn test_large_table_list_sorted_and_truncated() {
        let mut cells: Vec<String> = vec![
            "logs 10.0 MB".into(),
            "events 2.0 GB".into(),
            "history 500.0 KB".into(),
            "sessions 2000.0 MB".into(),
        ];
        // Trailing non-table junk the console appends to the row.
        for _ in 0..3 {
            cells.push(String::new());
        }

        // 7 cells, 4 trailing tokens retained offset -> keep top 3.
        let tables = large_table_list(&cells, 4);
        assert_eq!(tables.len(), 3);
        assert_eq!(tables[0].name, "events");
        assert!((tables[0].size_mb - 2000.0).abs() < 1e-9);
        // Stable tie: events (2.0 GB) printed before sessions (2000.0 MB).
        assert_eq!(tables[1].name, "sessions");
        assert_eq!(tables[2].name, "logs");
    }

    #[test]
    fn test_large_table_list_never_exceeds_budget() {
        let cells: Vec<String> = (0..5).map(|i| format!("t{i} {i}.0 MB")).collect();
        assert!(large_table_list(&cells, 11).is_empty());
    }

    #[test]
    fn test_row_counts_spec_order() {
        let counts = row_counts(
            "computers 100 computers_denormalized 98 mobile_devices 50 mobile_devices_denormalized 50",
        );
        assert_eq!(counts.computers.as_deref(), Some("100"));
        assert_eq!(counts.computers_denormalized.as_deref(), Some("98"));
        assert_eq!(counts.mobile_devices.as_deref(), Some("50"));
        assert_eq!(counts.mobile_devices_denormalized.as_deref(), Some("50"));
    }

    #[test]
    fn test_row_counts_dot_leader_form() {
        let counts = row_counts(
            "computers..........12 computers_denormalized..........11 mobile_devices..........3 mobile_devices_denormalized..........3",
        );
        assert_eq!(counts.computers.as_deref(), Some("12"));
        assert_eq!(counts.computers_denormalized.as_deref(), Some("11"));
        assert_eq!(counts.mobile_devices.as_deref(), Some("3"));
        assert_eq!(counts.mobile_devices_denormalized.as_deref(), Some("3"));
    }

    #[test]
    fn test_row_counts_tolerates_missing_tables() {
        let counts = row_counts("computers 7 unrelated 9");
        assert_eq!(counts.computers.as_deref(), Some("7"));
        assert_eq!(counts.mobile_devices, None);
    }

    #[test]
    fn test_password_policy_met_count() {
        let policy = PasswordPolicy {
            require_uppercase: "true".into(),
            require_lowercase: "false".into(),
            require_number: "true".into(),
            require_special: "false".into(),
        };
        assert_eq!(policy.met_count(), 2);
    }
}
