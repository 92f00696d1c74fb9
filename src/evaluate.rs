//! Pure scoring functions over extracted facts.
//!
//! Every function here is stateless: facts in, signal out. Thresholds are
//! passed explicitly so each rule is independently testable and the
//! operative constants live in [`crate::config`], not in the logic.

use serde::Serialize;

/// Health signal for one check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Ok,
    Warn,
    Critical,
}

/// One scored check with a human-readable reason.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Evaluation {
    pub status: HealthStatus,
    pub reason: String,
}

impl Evaluation {
    fn ok(reason: impl Into<String>) -> Self {
        Evaluation {
            status: HealthStatus::Ok,
            reason: reason.into(),
        }
    }

    fn warn(reason: impl Into<String>) -> Self {
        Evaluation {
            status: HealthStatus::Warn,
            reason: reason.into(),
        }
    }

    fn critical(reason: impl Into<String>) -> Self {
        Evaluation {
            status: HealthStatus::Critical,
            reason: reason.into(),
        }
    }
}

/// Scores the password policy by how many of the four requirements
/// (uppercase, lowercase, number, special characters) are enabled.
pub fn password_strength(requirements_met: u32) -> Evaluation {
    match requirements_met {
        4 => Evaluation::ok("Excellent"),
        2 | 3 => Evaluation::ok("Good"),
        1 => Evaluation::warn("Poor"),
        _ => Evaluation::critical("Needs Updating"),
    }
}

/// Scores check-in pressure: devices divided by check-in frequency gives
/// the average check-ins hitting the server per minute.
pub fn checkin_load(
    total_devices: u64,
    frequency_minutes: u64,
    warn_per_minute: f64,
    critical_per_minute: f64,
) -> Evaluation {
    if frequency_minutes == 0 {
        return Evaluation::warn("Check-in frequency of 0 minutes reported");
    }

    let per_minute = total_devices as f64 / frequency_minutes as f64;
    if per_minute >= critical_per_minute {
        Evaluation::critical(format!(
            "{total_devices} devices checking in every {frequency_minutes} minutes \
             ({per_minute:.0}/min); raise the check-in frequency"
        ))
    } else if per_minute >= warn_per_minute {
        Evaluation::warn(format!(
            "{total_devices} devices checking in every {frequency_minutes} minutes \
             ({per_minute:.0}/min)"
        ))
    } else {
        Evaluation::ok(format!(
            "Check-in load is {per_minute:.0}/min for {total_devices} devices"
        ))
    }
}

/// Scores database size together with the number of oversized tables.
pub fn database_health(
    size_mb: f64,
    large_table_count: usize,
    warn_mb: f64,
    critical_mb: f64,
    large_table_warn_count: usize,
) -> Evaluation {
    if size_mb >= critical_mb {
        return Evaluation::critical(format!("Database is {size_mb:.0} MB"));
    }
    if size_mb >= warn_mb {
        return Evaluation::warn(format!("Database is {size_mb:.0} MB"));
    }
    if large_table_count >= large_table_warn_count {
        return Evaluation::warn(format!(
            "{large_table_count} oversized tables despite a {size_mb:.0} MB database"
        ));
    }
    Evaluation::ok(format!("Database is {size_mb:.0} MB"))
}

/// MySQL releases with a known corruption bug when run on macOS hosts.
pub const MYSQL_BUGGED_VERSIONS: [&str; 2] = ["5.6.16", "5.6.20"];

/// OS name fragments identifying a macOS host.
pub const MACOS_NAME_FRAGMENTS: [&str; 3] = ["OS X", "OSX", "Mac"];

/// Flags the known-bad MySQL builds when the host OS is macOS.
pub fn mysql_os_bug(mysql_version: &str, operating_system: &str) -> Evaluation {
    let bugged = MYSQL_BUGGED_VERSIONS
        .iter()
        .any(|v| mysql_version.contains(v));
    let on_macos = MACOS_NAME_FRAGMENTS
        .iter()
        .any(|f| operating_system.contains(f));

    if bugged && on_macos {
        Evaluation::critical(format!(
            "MySQL {mysql_version} on {operating_system} has a known replication bug; upgrade MySQL"
        ))
    } else {
        Evaluation::ok(format!("MySQL {mysql_version}"))
    }
}

/// Scores days remaining until an expiration.
pub fn expiration_window(days_left: i64, warn_days: i64) -> Evaluation {
    if days_left <= 0 {
        Evaluation::critical("Expired")
    } else if days_left <= warn_days {
        Evaluation::warn(format!("Expires in {days_left} days"))
    } else {
        Evaluation::ok(format!("Expires in {days_left} days"))
    }
}
