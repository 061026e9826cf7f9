//! Reachability probe over HTTP.

use async_trait::async_trait;
use cyberscore_core::{normalize, LivenessProbe, ProbeOutcome, Result, ScoreError};
use reqwest::{Client as HttpClient, Method, StatusCode};
use std::time::Duration;
use tracing::debug;

/// Ceiling applied by the underlying client, on top of per-probe budgets
const DEFAULT_CLIENT_TIMEOUT: Duration = Duration::from_secs(10);

/// Redirects followed before giving up
const DEFAULT_MAX_REDIRECTS: usize = 5;

/// Liveness probe sending `HEAD` (falling back to `GET`) to the target.
///
/// The host counts as reachable when the final answer is 2xx or 3xx.
#[derive(Debug, Clone)]
pub struct HttpProbe {
    http: HttpClient,
}

impl HttpProbe {
    /// Create a probe with default settings
    pub fn new() -> Result<Self> {
        HttpProbeBuilder::new().build()
    }

    /// Create a builder for custom configuration
    #[must_use]
    pub fn builder() -> HttpProbeBuilder {
        HttpProbeBuilder::new()
    }

    /// Send one request and return its status
    async fn request(&self, method: Method, url: &str, timeout: Duration) -> Result<StatusCode> {
        debug!(%method, url, "liveness request");

        let response = self
            .http
            .request(method, url)
            .timeout(timeout)
            .send()
            .await
            .map_err(|e| classify_error(&e, timeout))?;

        Ok(response.status())
    }
}

#[async_trait]
impl LivenessProbe for HttpProbe {
    fn name(&self) -> &'static str {
        "http"
    }

    async fn probe(&self, url: &str, timeout: Duration) -> Result<ProbeOutcome> {
        let target = normalize(url);
        let mut status = self.request(Method::HEAD, &target, timeout).await?;

        // Some servers refuse HEAD outright; ask again with GET.
        if matches!(
            status,
            StatusCode::METHOD_NOT_ALLOWED | StatusCode::NOT_IMPLEMENTED
        ) {
            status = self.request(Method::GET, &target, timeout).await?;
        }

        let reachable = status.is_success() || status.is_redirection();
        debug!(url = %target, status = status.as_u16(), reachable, "liveness answer");
        Ok(ProbeOutcome { reachable })
    }
}

fn classify_error(err: &reqwest::Error, timeout: Duration) -> ScoreError {
    if err.is_timeout() {
        ScoreError::ProbeTimeout(u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX))
    } else {
        ScoreError::ProbeUnavailable(err.to_string())
    }
}

/// Builder for configuring an [`HttpProbe`]
pub struct HttpProbeBuilder {
    timeout: Duration,
    user_agent: String,
    max_redirects: usize,
}

impl Default for HttpProbeBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl HttpProbeBuilder {
    /// Create a builder with default settings
    #[must_use]
    pub fn new() -> Self {
        Self {
            timeout: DEFAULT_CLIENT_TIMEOUT,
            user_agent: format!("cyberscore/{}", env!("CARGO_PKG_VERSION")),
            max_redirects: DEFAULT_MAX_REDIRECTS,
        }
    }

    /// Set the client-wide timeout ceiling
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the User-Agent header
    #[must_use]
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = agent.into();
        self
    }

    /// Set how many redirects to follow
    #[must_use]
    pub const fn max_redirects(mut self, max: usize) -> Self {
        self.max_redirects = max;
        self
    }

    /// Build the probe
    pub fn build(self) -> Result<HttpProbe> {
        let http = HttpClient::builder()
            .timeout(self.timeout)
            .user_agent(&self.user_agent)
            .redirect(reqwest::redirect::Policy::limited(self.max_redirects))
            .gzip(true)
            .build()
            .map_err(|e| ScoreError::ConfigurationInvalid(format!("HTTP client: {e}")))?;

        Ok(HttpProbe { http })
    }
}
