//! Liveness probe capability.

use crate::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Answer from a liveness probe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProbeOutcome {
    /// Whether the host answered with a usable response
    pub reachable: bool,
}

impl ProbeOutcome {
    /// Host answered
    pub const REACHABLE: Self = Self { reachable: true };

    /// Host did not answer, or answered with a failure
    pub const UNREACHABLE: Self = Self { reachable: false };
}

impl From<bool> for ProbeOutcome {
    fn from(reachable: bool) -> Self {
        Self { reachable }
    }
}

/// Best-effort network reachability check for a URL.
///
/// Implementations should honor `timeout` themselves; the engine also wraps
/// every call in its own deadline and treats any error as unreachable.
#[async_trait]
pub trait LivenessProbe: Send + Sync {
    /// Short identifier used in logs
    fn name(&self) -> &'static str;

    /// Probe `url`, giving up after `timeout`
    async fn probe(&self, url: &str, timeout: Duration) -> Result<ProbeOutcome>;
}
