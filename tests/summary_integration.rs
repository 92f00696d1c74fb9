//! End-to-end extraction from a full summary dump: the blob is built with
//! the real delimiters and every accessor is exercised against it.

mod support;

use jsshealth::summary::ConsoleSummary;
use jsshealth::HealthCheckError;

fn parsed() -> ConsoleSummary {
    ConsoleSummary::parse(&support::summary_blob()).expect("fixture blob parses")
}

#[test]
fn test_environment_facts() {
    let summary = parsed();
    assert_eq!(summary.operating_system().unwrap(), "Mac OS X 10.10.5");
    assert_eq!(summary.java_version().unwrap(), "1.8.0_252");
    assert_eq!(summary.java_vendor().unwrap(), "Oracle Corporation");
    assert_eq!(
        summary.web_app_dir().unwrap(),
        "/usr/local/jss/tomcat/webapps"
    );
    assert_eq!(summary.mysql_version().unwrap(), "5.6.20");

    let size = summary.database_size_mb().unwrap();
    assert!((size - 7200.0).abs() < 1e-6, "got {size}");
}

#[test]
fn test_labeled_category_facts() {
    let summary = parsed();
    assert_eq!(summary.clustering_enabled().unwrap(), "false");
    assert_eq!(
        summary.activation_code_expiration().unwrap(),
        "2099/01/01"
    );
    assert_eq!(summary.log_flushing_time().unwrap(), "12:00AM");
    assert!(summary.login_logout_hooks_enabled().unwrap());

    let policy = summary.password_policy().unwrap();
    assert_eq!(policy.require_uppercase, "true");
    assert_eq!(policy.require_special, "false");
    assert_eq!(policy.met_count(), 2);

    let change = summary.change_management().unwrap();
    assert_eq!(change.use_log_file, "true");
    assert_eq!(change.log_file_path, "/var/log/jamfChangeManagement.log");

    let cert = summary.tomcat_cert().unwrap();
    assert_eq!(cert.issuer, "Acme Root CA");
    assert_eq!(cert.expires, "2099/03/15");
}

#[test]
fn test_push_cert_sections() {
    let certs = parsed().push_cert_expirations().unwrap();
    assert_eq!(certs.mdm_push_cert, "2099/05/01");
    assert_eq!(certs.push_proxy, "2099/06/01");
}

#[test]
fn test_table_facts() {
    let summary = parsed();

    let counts = summary.table_row_counts().unwrap();
    assert_eq!(counts.computers.as_deref(), Some("120"));
    assert_eq!(counts.computers_denormalized.as_deref(), Some("118"));
    assert_eq!(counts.mobile_devices.as_deref(), Some("60"));
    assert_eq!(counts.mobile_devices_denormalized.as_deref(), Some("60"));

    let tables = summary.large_tables(11).unwrap();
    assert_eq!(tables.len(), 3);
    assert_eq!(tables[0].name, "logs");
    assert!((tables[0].size_mb - 2000.0).abs() < 1e-9);
    assert_eq!(tables[1].name, "events");
    assert_eq!(tables[2].name, "history");
}

#[test]
fn test_missing_category_degrades_per_fact() {
    // A dump without the labeled categories still yields environment facts.
    let blob = support::summary_blob();
    let truncated: String = blob
        .split("Password Policy")
        .next()
        .unwrap()
        .to_string();
    let summary = ConsoleSummary::parse(&truncated).unwrap();

    assert_eq!(summary.operating_system().unwrap(), "Mac OS X 10.10.5");
    assert!(matches!(
        summary.password_policy(),
        Err(HealthCheckError::MissingField(_))
    ));
    assert!(matches!(
        summary.table_row_counts(),
        Err(HealthCheckError::MissingField(_))
    ));
}

#[test]
fn test_empty_blob_is_fatal() {
    assert!(matches!(
        ConsoleSummary::parse("  \n "),
        Err(HealthCheckError::MalformedInput)
    ));
}
