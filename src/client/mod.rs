//! HTTP access to the console.
//!
//! The engine only ever needs raw text bodies, so the seam is a single
//! `fetch_text` method. [`HttpConsoleClient`] is the production
//! implementation; [`MockConsoleClient`] serves canned bodies in tests.

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use tracing::debug;

use crate::error::{HealthCheckError, Result};

/// Browser-ish user agent; some console versions vary their output for
/// unknown agents.
const USER_AGENT: &str = "Mozilla/5.0";

/// Read-only text transport to the console.
#[async_trait]
pub trait ConsoleClient: Send + Sync {
    /// Fetches the body at `path` (relative to the console base URL).
    async fn fetch_text(&self, path: &str) -> Result<String>;

    /// Base URL of the console, for report metadata.
    fn base_url(&self) -> &str;
}

/// `reqwest`-backed client doing Basic-auth GETs.
pub struct HttpConsoleClient {
    base_url: String,
    username: String,
    password: String,
    http: reqwest::Client,
}

impl HttpConsoleClient {
    /// Builds a client for the console at `base_url`. A trailing slash is
    /// stripped so path joining stays predictable. `insecure` disables
    /// certificate verification for consoles with self-signed certs.
    pub fn new(
        base_url: &str,
        username: &str,
        password: &str,
        timeout_secs: u64,
        insecure: bool,
    ) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .user_agent(USER_AGENT)
            .danger_accept_invalid_certs(insecure)
            .build()
            .map_err(|e| HealthCheckError::fetch(base_url, e))?;

        Ok(HttpConsoleClient {
            base_url: base_url.trim_end_matches('/').to_string(),
            username: username.to_string(),
            password: password.to_string(),
            http,
        })
    }
}

#[async_trait]
impl ConsoleClient for HttpConsoleClient {
    async fn fetch_text(&self, path: &str) -> Result<String> {
        let url = format!("{}/{}", self.base_url, path.trim_start_matches('/'));
        debug!(%url, "GET");

        let response = self
            .http
            .get(&url)
            .basic_auth(&self.username, Some(&self.password))
            .send()
            .await
            .map_err(|e| HealthCheckError::fetch(path, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(HealthCheckError::fetch(
                path,
                format!("HTTP {}", status.as_u16()),
            ));
        }

        response
            .text()
            .await
            .map_err(|e| HealthCheckError::fetch(path, e))
    }

    fn base_url(&self) -> &str {
        &self.base_url
    }
}

/// In-memory client for tests: canned bodies per path, plus a request log.
#[derive(Default)]
pub struct MockConsoleClient {
    base_url: String,
    responses: HashMap<String, String>,
    requests: Mutex<Vec<String>>,
}

impl MockConsoleClient {
    pub fn new(base_url: &str) -> Self {
        MockConsoleClient {
            base_url: base_url.trim_end_matches('/').to_string(),
            responses: HashMap::new(),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn with_response(mut self, path: &str, body: &str) -> Self {
        self.responses
            .insert(path.trim_start_matches('/').to_string(), body.to_string());
        self
    }

    /// Paths fetched so far, in call order.
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().expect("request log poisoned").clone()
    }
}

#[async_trait]
impl ConsoleClient for MockConsoleClient {
    async fn fetch_text(&self, path: &str) -> Result<String> {
        let key = path.trim_start_matches('/');
        self.requests
            .lock()
            .expect("request log poisoned")
            .push(key.to_string());

        self.responses
            .get(key)
            .cloned()
            .ok_or_else(|| HealthCheckError::fetch(path, "no canned response"))
    }

    fn base_url(&self) -> &str {
        &self.base_url
    }
}
