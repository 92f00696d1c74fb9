//! The audit pass: fetch, extract, score, assemble.
//!
//! One [`Auditor::run`] call fetches the summary page once, probes the
//! startup health page, then walks the fixed list of API object kinds with
//! bounded concurrency. Extraction failures isolate at the smallest unit: a
//! bad record or an unreachable follow-up call is logged and skipped, and
//! the report always contains whatever could be extracted. Only an unusable
//! summary blob aborts the pass.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use chrono::{Local, NaiveDate};
use futures_util::stream::{self, StreamExt};
use tracing::{debug, info, warn};

use crate::client::ConsoleClient;
use crate::config::JssHealthConfig;
use crate::error::Result;
use crate::evaluate::{
    checkin_load, database_health, expiration_window, mysql_os_bug, password_strength, Evaluation,
};
use crate::extract::{
    extract_group, extract_ldap_server, extract_policy, extract_printer, extract_script,
    extract_vpp_account, GroupKind,
};
use crate::record::{self, Record};
use crate::report::{ReportBuilder, ReportNode};
use crate::summary::ConsoleSummary;
use crate::util::dates::days_until;

/// Every API object kind one audit pass visits, in request order.
pub const API_OBJECTS: [&str; 20] = [
    "computers",
    "mobiledevices",
    "users",
    "activationcode",
    "computercheckin",
    "ldapservers",
    "gsxconnection",
    "vppaccounts",
    "computergroups",
    "mobiledevicegroups",
    "usergroups",
    "managedpreferenceprofiles",
    "printers",
    "computerextensionattributes",
    "mobiledeviceextensionattributes",
    "computerconfigurations",
    "scripts",
    "policies",
    "summarydata",
    "smtpserver",
];

/// The summary page with every section toggled on (consoles 9.93+).
pub const MODERN_SUMMARY_PATH: &str = "summary.html?2=on&3=on&4=on&6=on&5=on&9=on&7=on&313=on&24=on&350=on&600=on&22=on&26=on&23=on&24=on&25=on&28=on&27=on&312=on&53=on&54=on&54=on&255=on&24=on&51=on&65=on&80=on&136=on&135=on&133=on&134=on&137=on&221=on&166=on&390=on&72=on&141=on&124=on&125=on&158=on&252=on&163=on&310=on&381=on&500=on&90=on&91=on&92=on&96=on&95=on&94=on&93=on&74=on&75=on&76=on&82=on&81=on&122=on&118=on&119=on&73=on&117=on&123=on&83=on&11=on&77=on&171=on&128=on&86=on&131=on&314=on&169=on&87=on&41=on&42=on&43=on&360=on&44=on&45=on&tableRowCounts=on&tableSize=on&action=Create";

/// Reduced form served by older consoles.
pub const LEGACY_SUMMARY_PATH: &str = "summary.html?2=on&3=off&4=on&6=on&5=on&9=on&7=on&313=on&24=on&350=on&22=on&26=on&23=on&24=on&25=on&28=on&27=on&312=on&53=on&54=on&54=on&255=on&24=on&51=on&65=on&80=on&136=on&135=on&133=on&134=on&137=on&221=on&166=on&72=on&141=on&124=on&125=on&158=on&252=on&163=on&310=on&381=on&90=on&91=on&92=on&96=on&95=on&94=on&93=on&74=on&75=on&76=on&82=on&81=on&122=on&118=on&119=on&73=on&117=on&123=on&83=on&11=on&77=on&171=on&128=on&86=on&131=on&314=on&169=on&87=on&41=on&42=on&43=on&360=on&44=on&45=on&tableRowCounts=on&tableSize=on&Action=Create";

/// Startup self-test page; an empty `[]` body means a clean start.
pub const STARTUP_PAGE: &str = "healthCheck.html";

/// Known startup page error markers and their meanings.
const STARTUP_MARKERS: [(&str, &str); 6] = [
    (
        "DBConnectionError",
        "An error occurred while testing the database connection",
    ),
    ("SetupAssistant", "The setup assistant was detected"),
    (
        "DBConnectionConfigError",
        "A configuration error occurred while attempting to connect to the database",
    ),
    ("Initializing", "The web application is initializing"),
    (
        "ChildNodeStartUpError",
        "A clustered web application instance failed to start",
    ),
    (
        "InitializationError",
        "A fatal error prevented the web application from starting",
    ),
];

/// Maps startup page markers to operator-readable findings.
pub fn assess_startup_page(body: &str) -> Vec<String> {
    if body.trim() == "[]" {
        return Vec::new();
    }
    STARTUP_MARKERS
        .iter()
        .filter(|(marker, _)| body.contains(marker))
        .map(|(_, finding)| (*finding).to_string())
        .collect()
}

/// Whether the console is vendor-hosted rather than on-premise.
pub fn is_hosted(url: &str) -> bool {
    url.contains("jamfcloud.com")
}

/// Externally triggerable cancellation. Cancelling stops new fetches from
/// being issued; in-flight fetches finish or are dropped, and the report
/// tree only ever receives fully extracted nodes.
#[derive(Clone, Debug, Default)]
pub struct CancelToken {
    flag: Arc<AtomicBool>,
}

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.flag.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.flag.load(Ordering::Relaxed)
    }
}

#[derive(Debug, Clone)]
pub struct AuditOptions {
    /// Populate the `system` object (summary-derived environment facts).
    pub include_system: bool,
}

impl Default for AuditOptions {
    fn default() -> Self {
        AuditOptions {
            include_system: true,
        }
    }
}

/// One scored check, named for the fact it covers.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct CheckOutcome {
    pub check: String,
    #[serde(flatten)]
    pub evaluation: Evaluation,
}

/// Result of one audit pass: the report tree plus the scored checks.
#[derive(Debug)]
pub struct HealthReport {
    pub tree: ReportNode,
    pub outcomes: Vec<CheckOutcome>,
}

/// Drives one audit pass against a console.
pub struct Auditor {
    client: Arc<dyn ConsoleClient>,
    config: JssHealthConfig,
    cancel: CancelToken,
}

impl Auditor {
    pub fn new(client: Arc<dyn ConsoleClient>, config: JssHealthConfig) -> Self {
        Auditor {
            client,
            config,
            cancel: CancelToken::new(),
        }
    }

    /// Returns a token that cancels this auditor's pass from another task.
    pub fn cancel_token(&self) -> CancelToken {
        self.cancel.clone()
    }

    /// Runs the full audit. Fatal only when the summary page cannot be
    /// fetched or parsed.
    pub async fn run(&self, options: &AuditOptions) -> Result<HealthReport> {
        info!("fetching console summary");
        let summary_path = if self.config.legacy_summary {
            LEGACY_SUMMARY_PATH
        } else {
            MODERN_SUMMARY_PATH
        };
        let blob = self.client.fetch_text(summary_path).await?;
        let summary = ConsoleSummary::parse(&blob)?;

        match self.client.fetch_text(STARTUP_PAGE).await {
            Ok(body) => {
                for finding in assess_startup_page(&body) {
                    warn!("startup page: {finding}");
                }
            }
            Err(err) => warn!(%err, "startup health page unavailable"),
        }

        let total_computers = self.object_count("computers").await;
        let total_mobile = self.object_count("mobiledevices").await;
        let total_users = self.object_count("users").await;

        let mut builder = ReportBuilder::new();
        let root = builder.root();
        builder.add_leaf(root, "jss_url", self.client.base_url())?;
        builder.add_leaf(root, "totalcomputers", total_computers)?;
        builder.add_leaf(root, "totalmobile", total_mobile)?;
        builder.add_leaf(root, "totalusers", total_users)?;

        if options.include_system {
            info!("running system checks");
            let system = self.system_node(&summary)?;
            builder.add_node(root, "system", system)?;
        }

        let checkdata = builder.add_object(root, "checkdata")?;
        let today = Local::now().date_naive();

        let fragments: Vec<(&str, ReportNode)> = stream::iter(API_OBJECTS.iter().copied())
            .map(|kind| {
                let summary = &summary;
                async move {
                    if self.cancel.is_cancelled() {
                        debug!(kind, "cancelled before fetch");
                        return None;
                    }
                    info!(kind, "checking API object");
                    Some((kind, self.object_node(kind, summary, today).await))
                }
            })
            .buffer_unordered(self.config.fetch_concurrency)
            .filter_map(|fragment| async move { fragment })
            .collect()
            .await;

        for (kind, node) in fragments {
            builder.add_node(checkdata, kind, node)?;
        }

        let tree = builder.finish();
        let outcomes = self.outcomes(&tree, &summary, today);
        Ok(HealthReport { tree, outcomes })
    }

    /// Object count of one collection: list children minus the bookkeeping
    /// offset. Unreachable collections count as -1, mirroring the report
    /// format consumers already handle.
    async fn object_count(&self, collection: &str) -> i64 {
        let path = format!("JSSResource/{collection}");
        let count = match self.client.fetch_text(&path).await {
            Ok(body) => record::list_len(&body),
            Err(err) => {
                warn!(%path, %err, "count unavailable");
                return -1;
            }
        };
        match count {
            Ok(len) => len as i64 - self.config.object_count_offset as i64,
            Err(err) => {
                warn!(%path, %err, "count unavailable");
                -1
            }
        }
    }

    /// Fetches and parses every object of a collection, bounded by the
    /// configured concurrency. A single failed follow-up is logged and
    /// skipped; the rest proceed.
    async fn fetch_records(&self, collection: &str) -> Result<Vec<Record>> {
        let list = self
            .client
            .fetch_text(&format!("JSSResource/{collection}"))
            .await?;
        let ids = record::list_ids(&list)?;

        let records = stream::iter(ids)
            .map(|id| {
                let path = format!("JSSResource/{collection}/id/{id}");
                async move {
                    if self.cancel.is_cancelled() {
                        return None;
                    }
                    let body = match self.client.fetch_text(&path).await {
                        Ok(body) => body,
                        Err(err) => {
                            warn!(%path, %err, "skipping object");
                            return None;
                        }
                    };
                    match Record::parse(&body) {
                        Ok(record) => Some(record),
                        Err(err) => {
                            warn!(%path, %err, "unparseable record");
                            None
                        }
                    }
                }
            })
            .buffer_unordered(self.config.fetch_concurrency)
            .filter_map(|record| async move { record })
            .collect()
            .await;

        Ok(records)
    }

    /// Fetches one singleton object (activation code, check-in, ...).
    async fn fetch_record(&self, collection: &str) -> Result<Record> {
        let body = self
            .client
            .fetch_text(&format!("JSSResource/{collection}"))
            .await?;
        Record::parse(&body)
    }

    /// Summary-derived environment facts.
    fn system_node(&self, summary: &ConsoleSummary) -> Result<ReportNode> {
        let mut b = ReportBuilder::new();
        let root = b.root();

        let mut leaf = |b: &mut ReportBuilder, name: &str, value: Result<String>| {
            match value {
                Ok(value) => {
                    // Names are static and unique; duplicate insertion
                    // cannot occur here.
                    let _ = b.add_leaf(root, name, value);
                }
                Err(err) => debug!(name, %err, "system fact unavailable"),
            }
        };

        leaf(&mut b, "os", summary.operating_system());
        let _ = b.add_leaf(root, "iscloudjss", is_hosted(self.client.base_url()));
        leaf(&mut b, "javaversion", summary.java_version());
        leaf(&mut b, "javavendor", summary.java_vendor());
        leaf(&mut b, "webapp_dir", summary.web_app_dir());
        leaf(&mut b, "clustering", summary.clustering_enabled());
        leaf(&mut b, "mysql_version", summary.mysql_version());

        let tables = b.add_array(root, "largeSQLtables")?;
        match summary.large_tables(self.config.large_table_trailing_tokens) {
            Ok(list) => {
                for table in list {
                    let entry = b.add_array_object(tables);
                    b.add_leaf(entry, "table_name", table.name)?;
                    b.add_leaf(entry, "table_size", format!("{} MB", table.size_mb))?;
                }
            }
            Err(err) => debug!(%err, "large table list unavailable"),
        }

        match summary.database_size_mb() {
            Ok(size) => b.add_leaf(root, "database_size", size)?,
            Err(err) => debug!(%err, "database size unavailable"),
        }

        Ok(b.finish())
    }

    /// Builds the `checkdata` child for one object kind. Never fails the
    /// pass: inner errors degrade to a sparse or empty object.
    async fn object_node(
        &self,
        kind: &str,
        summary: &ConsoleSummary,
        today: NaiveDate,
    ) -> ReportNode {
        let built = match kind {
            "summarydata" => self.summary_data_node(summary),
            "activationcode" => self.activation_code_node(summary).await,
            "computercheckin" => self.checkin_node().await,
            "gsxconnection" => self.gsx_node().await,
            "managedpreferenceprofiles" => self.preference_profiles_node().await,
            "ldapservers" => self.ldap_node().await,
            "vppaccounts" => self.vpp_node(today).await,
            "computergroups" => self.group_node(GroupKind::Computer).await,
            "mobiledevicegroups" => self.group_node(GroupKind::MobileDevice).await,
            "usergroups" => self.group_node(GroupKind::User).await,
            "scripts" => self.scripts_node().await,
            "printers" => self.printers_node().await,
            "policies" => self.policies_node().await,
            "computerextensionattributes"
            | "mobiledeviceextensionattributes"
            | "computerconfigurations" => self.count_node(kind).await,
            "smtpserver" => self.smtp_node().await,
            // Totals for these kinds live at the report root.
            _ => Ok(ReportNode::Object(Vec::new())),
        };

        match built {
            Ok(node) => node,
            Err(err) => {
                warn!(kind, %err, "check degraded to empty object");
                ReportNode::Object(Vec::new())
            }
        }
    }

    fn summary_data_node(&self, summary: &ConsoleSummary) -> Result<ReportNode> {
        let mut b = ReportBuilder::new();
        let root = b.root();

        match summary.password_policy() {
            Ok(policy) => {
                let details = b.add_object(root, "password_strength")?;
                b.add_leaf(details, "uppercase?", policy.require_uppercase)?;
                b.add_leaf(details, "lowercase?", policy.require_lowercase)?;
                b.add_leaf(details, "number?", policy.require_number)?;
                b.add_leaf(details, "spec_chars?", policy.require_special)?;
            }
            Err(err) => debug!(%err, "password policy unavailable"),
        }

        match summary.change_management() {
            Ok(change) => {
                let details = b.add_object(root, "changemanagment")?;
                b.add_leaf(details, "isusinglogfile", change.use_log_file)?;
                b.add_leaf(details, "logpath", change.log_file_path)?;
            }
            Err(err) => debug!(%err, "change management unavailable"),
        }

        match summary.tomcat_cert() {
            Ok(cert) => {
                let details = b.add_object(root, "tomcat")?;
                b.add_leaf(details, "ssl_cert_issuer", cert.issuer)?;
                b.add_leaf(details, "cert_expires", cert.expires)?;
            }
            Err(err) => debug!(%err, "tomcat cert unavailable"),
        }

        match summary.log_flushing_time() {
            Ok(time) => {
                let details = b.add_object(root, "logflushing")?;
                b.add_leaf(details, "log_flush_time", time)?;
            }
            Err(err) => debug!(%err, "log flushing unavailable"),
        }

        match summary.push_cert_expirations() {
            Ok(certs) => {
                let details = b.add_object(root, "push_cert_expirations")?;
                b.add_leaf(details, "mdm_push_cert", certs.mdm_push_cert)?;
                b.add_leaf(details, "push_proxy", certs.push_proxy)?;
            }
            Err(err) => debug!(%err, "push certs unavailable"),
        }

        match summary.login_logout_hooks_enabled() {
            Ok(enabled) => {
                let details = b.add_object(root, "loginlogouthooks")?;
                b.add_leaf(details, "is_configured", enabled.to_string())?;
            }
            Err(err) => debug!(%err, "login/logout hooks unavailable"),
        }

        match summary.table_row_counts() {
            Ok(counts) => {
                let details = b.add_object(root, "device_row_counts")?;
                let pairs = [
                    ("computers", counts.computers),
                    ("computers_denormalized", counts.computers_denormalized),
                    ("mobile_devices", counts.mobile_devices),
                    (
                        "mobile_devices_denormalized",
                        counts.mobile_devices_denormalized,
                    ),
                ];
                for (name, value) in pairs {
                    if let Some(value) = value {
                        b.add_leaf(details, name, value)?;
                    }
                }
            }
            Err(err) => debug!(%err, "table row counts unavailable"),
        }

        Ok(b.finish())
    }

    async fn activation_code_node(&self, summary: &ConsoleSummary) -> Result<ReportNode> {
        let record = self.fetch_record("activationcode").await?;
        let mut b = ReportBuilder::new();
        let root = b.root();
        let details = b.add_object(root, "activationcode")?;

        match summary.activation_code_expiration() {
            Ok(expires) => b.add_leaf(details, "expires", expires)?,
            Err(err) => debug!(%err, "activation code expiration unavailable"),
        }
        match record.text_at(1) {
            Ok(code) => b.add_leaf(details, "code", code)?,
            Err(err) => debug!(%err, "activation code unavailable"),
        }

        Ok(b.finish())
    }

    async fn checkin_node(&self) -> Result<ReportNode> {
        let record = self.fetch_record("computercheckin").await?;
        let mut b = ReportBuilder::new();
        let root = b.root();
        let details = b.add_object(root, "computercheckin")?;
        match record.text_at(0) {
            Ok(frequency) => b.add_leaf(details, "frequency", frequency)?,
            Err(err) => debug!(%err, "check-in frequency unavailable"),
        }
        Ok(b.finish())
    }

    async fn gsx_node(&self) -> Result<ReportNode> {
        let record = self.fetch_record("gsxconnection").await?;
        let mut b = ReportBuilder::new();
        let root = b.root();
        let details = b.add_object(root, "gsxconnection")?;
        if record.text_at(0)? == "true" {
            b.add_leaf(details, "status", "enabled")?;
            match record.text_at(5) {
                Ok(uri) => b.add_leaf(details, "uri", uri)?,
                Err(err) => debug!(%err, "gsx uri unavailable"),
            }
        } else {
            b.add_leaf(details, "status", "disabled")?;
        }
        Ok(b.finish())
    }

    async fn preference_profiles_node(&self) -> Result<ReportNode> {
        let record = self.fetch_record("managedpreferenceprofiles").await?;
        let mut b = ReportBuilder::new();
        let root = b.root();
        let details = b.add_object(root, "managedpreferenceprofiles")?;
        let status = if record.text_at(0)? != "0" {
            "enabled"
        } else {
            "disabled"
        };
        b.add_leaf(details, "status", status)?;
        Ok(b.finish())
    }

    async fn ldap_node(&self) -> Result<ReportNode> {
        let records = self.fetch_records("ldapservers").await?;
        let mut b = ReportBuilder::new();
        let root = b.root();
        let array = b.add_array(root, "ldapservers")?;

        for record in &records {
            let facts = extract_ldap_server(record);
            let entry = b.add_array_object(array);
            if let Some(id) = facts.id {
                b.add_leaf(entry, "id", id)?;
            }
            if let Some(name) = facts.name {
                b.add_leaf(entry, "name", name)?;
            }
            if let Some(server_type) = facts.server_type {
                b.add_leaf(entry, "type", server_type)?;
            }
            if let Some(address) = facts.address {
                b.add_leaf(entry, "address", address)?;
            }
        }
        Ok(b.finish())
    }

    async fn vpp_node(&self, today: NaiveDate) -> Result<ReportNode> {
        let records = self.fetch_records("vppaccounts").await?;
        let mut b = ReportBuilder::new();
        let root = b.root();
        let array = b.add_array(root, "vppaccounts")?;

        for record in &records {
            let facts = extract_vpp_account(record, today);
            let entry = b.add_array_object(array);
            if let Some(id) = facts.id {
                b.add_leaf(entry, "id", id)?;
            }
            if let Some(name) = facts.name {
                b.add_leaf(entry, "name", name)?;
            }
            if let Some(days) = facts.days_until_expire {
                b.add_leaf(entry, "days_until_expire", days)?;
            }
        }
        Ok(b.finish())
    }

    async fn group_node(&self, kind: GroupKind) -> Result<ReportNode> {
        let records = self.fetch_records(kind.api_name()).await?;
        let mut b = ReportBuilder::new();
        let root = b.root();
        let array = b.add_array(root, kind.api_name())?;

        for record in &records {
            let facts = extract_group(kind, record);
            if !facts.flagged(self.config.criteria_count_threshold) {
                continue;
            }
            let entry = b.add_array_object(array);
            if let Some(id) = facts.id {
                b.add_leaf(entry, "id", id)?;
            }
            if let Some(name) = facts.name {
                b.add_leaf(entry, "name", name)?;
            }
            b.add_leaf(entry, "nested_groups_count", facts.nested_count)?;
            if let Some(count) = facts.criteria_count {
                b.add_leaf(entry, "criteria_count", count)?;
            }
        }
        Ok(b.finish())
    }

    async fn scripts_node(&self) -> Result<ReportNode> {
        let records = self.fetch_records("scripts").await?;
        let mut b = ReportBuilder::new();
        let root = b.root();
        let array = b.add_array(root, "scripts_needing_update")?;

        for record in &records {
            let facts = extract_script(record);
            if facts.flagged() {
                let entry = b.add_array_object(array);
                b.add_leaf(entry, "name", facts.name.unwrap_or_default())?;
            }
        }
        Ok(b.finish())
    }

    async fn printers_node(&self) -> Result<ReportNode> {
        let records = self.fetch_records("printers").await?;
        let mut b = ReportBuilder::new();
        let root = b.root();
        let array = b.add_array(root, "printer_warnings")?;

        for record in &records {
            let facts = extract_printer(record);
            if facts.flagged() {
                let entry = b.add_array_object(array);
                b.add_leaf(entry, "model", facts.model.unwrap_or_default())?;
            }
        }
        Ok(b.finish())
    }

    async fn policies_node(&self) -> Result<ReportNode> {
        let records = self.fetch_records("policies").await?;
        let mut b = ReportBuilder::new();
        let root = b.root();
        let array = b.add_array(root, "policies_with_issues")?;

        for record in &records {
            let facts = extract_policy(record);
            if facts.flagged() {
                let entry = b.add_array_object(array);
                b.add_leaf(entry, "name", facts.name.clone().unwrap_or_default())?;
                b.add_leaf(entry, "ongoing", facts.ongoing())?;
                b.add_leaf(entry, "checkin_trigger", facts.checkin_trigger == Some(true))?;
            }
        }
        Ok(b.finish())
    }

    async fn smtp_node(&self) -> Result<ReportNode> {
        let record = self.fetch_record("smtpserver").await?;
        let mut b = ReportBuilder::new();
        let root = b.root();
        let details = b.add_object(root, "smtpserver")?;
        // A configured relay always has a sender address; an empty one
        // means SMTP was never set up.
        match record.text_at(10) {
            Ok(sender) if !sender.is_empty() => {
                b.add_leaf(details, "server", record.text_at(1).unwrap_or_default())?;
                b.add_leaf(details, "sender_email", sender)?;
            }
            _ => debug!("smtp relay not configured"),
        }
        Ok(b.finish())
    }

    async fn count_node(&self, kind: &str) -> Result<ReportNode> {
        let count = self.object_count(kind).await;
        let mut b = ReportBuilder::new();
        let root = b.root();
        let details = b.add_object(root, kind)?;
        b.add_leaf(details, "count", count.to_string())?;
        Ok(b.finish())
    }

    /// Scores the pass. Checks whose facts never materialized are skipped;
    /// the report stays useful with whatever was extracted.
    fn outcomes(
        &self,
        tree: &ReportNode,
        summary: &ConsoleSummary,
        today: NaiveDate,
    ) -> Vec<CheckOutcome> {
        let mut outcomes = Vec::new();
        let mut push = |check: &str, evaluation: Evaluation| {
            outcomes.push(CheckOutcome {
                check: check.to_string(),
                evaluation,
            });
        };

        if let Ok(policy) = summary.password_policy() {
            push("password_strength", password_strength(policy.met_count()));
        }

        if let (Some(total), Some(frequency)) = (
            leaf_i64(tree, &["totalcomputers"]),
            leaf_str(tree, &["checkdata", "computercheckin", "computercheckin", "frequency"])
                .and_then(|f| f.parse::<u64>().ok()),
        ) {
            if total >= 0 {
                push(
                    "checkin_load",
                    checkin_load(
                        total as u64,
                        frequency,
                        self.config.checkin_warn_per_minute,
                        self.config.checkin_critical_per_minute,
                    ),
                );
            }
        }

        if let Ok(size_mb) = summary.database_size_mb() {
            let large_tables = summary
                .large_tables(self.config.large_table_trailing_tokens)
                .map(|t| t.len())
                .unwrap_or(0);
            push(
                "database_health",
                database_health(
                    size_mb,
                    large_tables,
                    self.config.database_warn_mb,
                    self.config.database_critical_mb,
                    self.config.large_table_warn_count,
                ),
            );
        }

        if let (Ok(version), Ok(os)) = (summary.mysql_version(), summary.operating_system()) {
            push("mysql_version", mysql_os_bug(&version, &os));
        }

        if let Ok(cert) = summary.tomcat_cert() {
            if let Ok(days) = days_until(today, &cert.expires) {
                push(
                    "tomcat_certificate",
                    expiration_window(days, self.config.expiration_warn_days),
                );
            }
        }

        if let Ok(expires) = summary.activation_code_expiration() {
            if let Ok(days) = days_until(today, &expires) {
                push(
                    "activation_code",
                    expiration_window(days, self.config.expiration_warn_days),
                );
            }
        }

        outcomes
    }
}

fn leaf_str<'a>(tree: &'a ReportNode, path: &[&str]) -> Option<&'a str> {
    let mut node = tree;
    for name in path {
        node = node.get(name)?;
    }
    node.as_leaf()?.as_str()
}

fn leaf_i64(tree: &ReportNode, path: &[&str]) -> Option<i64> {
    let mut node = tree;
    for name in path {
        node = node.get(name)?;
    }
    node.as_leaf()?.as_i64()
}
