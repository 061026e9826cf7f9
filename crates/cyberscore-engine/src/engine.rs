//! Async evaluation entry point.

use crate::config::ScoringConfig;
use crate::{aggregate, score_parsed};
use cyberscore_core::{
    normalize, LivenessProbe, ParsedUrl, ProbeOutcome, Result, ScoreError, ScoreResult,
};
use futures_util::stream::{self, StreamExt};
use std::sync::Arc;
use tracing::{debug, instrument, warn};

/// Evaluations `evaluate_many` runs at once unless configured otherwise.
pub const DEFAULT_CONCURRENCY: usize = 16;

/// URL trust-scoring engine.
///
/// Holds a validated config and an optional liveness probe. Evaluations share
/// nothing mutable, so one engine can serve concurrent requests.
#[derive(Clone)]
pub struct Engine {
    config: Arc<ScoringConfig>,
    probe: Option<Arc<dyn LivenessProbe>>,
    concurrency: usize,
}

impl std::fmt::Debug for Engine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Engine")
            .field("config", &self.config)
            .field("probe", &self.probe.as_ref().map(|p| p.name()))
            .field("concurrency", &self.concurrency)
            .finish()
    }
}

impl Engine {
    /// Create a builder for `config`
    #[must_use]
    pub fn builder(config: ScoringConfig) -> EngineBuilder {
        EngineBuilder::new(config)
    }

    /// Engine without a probe. Fails if `config` gives liveness any weight.
    pub fn offline(config: ScoringConfig) -> Result<Self> {
        EngineBuilder::new(config).build()
    }

    /// Active configuration
    #[must_use]
    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    /// Score one URL. Always returns a result; unparseable input yields the
    /// `invalid` tier without probing.
    ///
    /// Dropping the returned future cancels a pending probe.
    #[instrument(skip_all, fields(url = %input))]
    pub async fn evaluate(&self, input: &str) -> ScoreResult {
        let parsed = match ParsedUrl::parse(input) {
            Ok(parsed) => parsed,
            Err(e) => {
                debug!(error = %e, "input rejected");
                return aggregate::invalid_result(input, &self.config);
            }
        };

        let liveness = if self.config.uses_liveness() {
            Some(self.probe_liveness(input).await)
        } else {
            None
        };

        let result = score_parsed(input, &parsed, &self.config, liveness);
        debug!(score = result.score(), tier = %result.tier(), "evaluation complete");
        result
    }

    /// Score several URLs, at most `concurrency` at a time. Results keep the
    /// input order.
    pub async fn evaluate_many<S: AsRef<str>>(&self, inputs: &[S]) -> Vec<ScoreResult> {
        stream::iter(inputs)
            .map(|input| self.evaluate(input.as_ref()))
            .buffered(self.concurrency)
            .collect()
            .await
    }

    async fn probe_liveness(&self, input: &str) -> ProbeOutcome {
        let Some(probe) = &self.probe else {
            return ProbeOutcome::UNREACHABLE;
        };

        let timeout = self.config.probe_timeout();
        let target = normalize(input);

        match tokio::time::timeout(timeout, probe.probe(&target, timeout)).await {
            Ok(Ok(outcome)) => outcome,
            Ok(Err(e)) => {
                warn!(probe = probe.name(), error = %e, "liveness probe failed");
                ProbeOutcome::UNREACHABLE
            }
            Err(_) => {
                warn!(
                    probe = probe.name(),
                    timeout_ms = self.config.probe_timeout_ms,
                    "liveness probe timed out"
                );
                ProbeOutcome::UNREACHABLE
            }
        }
    }
}

/// Builder for an [`Engine`]
pub struct EngineBuilder {
    config: ScoringConfig,
    probe: Option<Arc<dyn LivenessProbe>>,
    concurrency: usize,
}

impl EngineBuilder {
    /// Start from `config`
    #[must_use]
    pub fn new(config: ScoringConfig) -> Self {
        Self {
            config,
            probe: None,
            concurrency: DEFAULT_CONCURRENCY,
        }
    }

    /// Attach a liveness probe
    #[must_use]
    pub fn probe<P: LivenessProbe + 'static>(mut self, probe: P) -> Self {
        self.probe = Some(Arc::new(probe));
        self
    }

    /// Attach a shared liveness probe
    #[must_use]
    pub fn shared_probe(mut self, probe: Arc<dyn LivenessProbe>) -> Self {
        self.probe = Some(probe);
        self
    }

    /// Set how many evaluations `evaluate_many` runs at once (at least one)
    #[must_use]
    pub const fn concurrency(mut self, limit: usize) -> Self {
        self.concurrency = if limit == 0 { 1 } else { limit };
        self
    }

    /// Validate the config and build the engine
    pub fn build(self) -> Result<Engine> {
        self.config.validate()?;

        if self.config.uses_liveness() && self.probe.is_none() {
            return Err(ScoreError::ConfigurationInvalid(
                "liveness weight is non-zero but no liveness probe is attached".into(),
            ));
        }

        Ok(Engine {
            config: Arc::new(self.config),
            probe: self.probe,
            concurrency: self.concurrency,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presets::Preset;
    use async_trait::async_trait;
    use cyberscore_core::{CheckId, Tier};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    struct FixedProbe(bool);

    #[async_trait]
    impl LivenessProbe for FixedProbe {
        fn name(&self) -> &'static str {
            "fixed"
        }

        async fn probe(&self, _url: &str, _timeout: Duration) -> Result<ProbeOutcome> {
            Ok(ProbeOutcome::from(self.0))
        }
    }

    struct FailingProbe;

    #[async_trait]
    impl LivenessProbe for FailingProbe {
        fn name(&self) -> &'static str {
            "failing"
        }

        async fn probe(&self, _url: &str, _timeout: Duration) -> Result<ProbeOutcome> {
            Err(ScoreError::ProbeUnavailable("connection refused".into()))
        }
    }

    /// Ignores its timeout and never answers in time.
    struct HangingProbe;

    #[async_trait]
    impl LivenessProbe for HangingProbe {
        fn name(&self) -> &'static str {
            "hanging"
        }

        async fn probe(&self, _url: &str, _timeout: Duration) -> Result<ProbeOutcome> {
            tokio::time::sleep(Duration::from_secs(30)).await;
            Ok(ProbeOutcome::REACHABLE)
        }
    }

    #[derive(Default)]
    struct CountingProbe {
        calls: Arc<AtomicUsize>,
        seen: std::sync::Mutex<Vec<String>>,
    }

    #[async_trait]
    impl LivenessProbe for CountingProbe {
        fn name(&self) -> &'static str {
            "counting"
        }

        async fn probe(&self, url: &str, _timeout: Duration) -> Result<ProbeOutcome> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.seen.lock().unwrap().push(url.to_string());
            Ok(ProbeOutcome::REACHABLE)
        }
    }

    fn fast_config() -> ScoringConfig {
        let mut config = ScoringConfig::default();
        config.probe_timeout_ms = 50;
        config
    }

    #[tokio::test]
    async fn reachable_perfect_url_is_secure() {
        let engine = Engine::builder(ScoringConfig::default())
            .probe(FixedProbe(true))
            .build()
            .unwrap();

        let result = engine.evaluate("https://www.example.com").await;
        assert_eq!(result.score(), 100);
        assert_eq!(result.tier(), Tier::Secure);
    }

    #[tokio::test]
    async fn probe_error_only_costs_liveness() {
        let engine = Engine::builder(ScoringConfig::default())
            .probe(FailingProbe)
            .build()
            .unwrap();

        let result = engine.evaluate("https://www.example.com").await;
        assert_eq!(result.score(), 85);
        let liveness = result.checks().last().unwrap();
        assert_eq!(liveness.check, CheckId::Liveness);
        assert!(!liveness.passed);
    }

    #[tokio::test]
    async fn probe_timeout_is_bounded() {
        let engine = Engine::builder(fast_config())
            .probe(HangingProbe)
            .build()
            .unwrap();

        let started = std::time::Instant::now();
        let result = engine.evaluate("https://www.example.com").await;
        assert!(started.elapsed() < Duration::from_secs(5));
        assert!(matches!(result.tier(), Tier::Secure | Tier::Moderate));
        assert!(!result.checks().last().unwrap().passed);
    }

    #[tokio::test]
    async fn invalid_input_skips_the_probe() {
        let probe = CountingProbe::default();
        let calls = Arc::clone(&probe.calls);
        let engine = Engine::builder(ScoringConfig::default())
            .probe(probe)
            .build()
            .unwrap();

        let result = engine.evaluate("not a url").await;
        assert_eq!(result.tier(), Tier::Invalid);
        assert_eq!(result.score(), 0);
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn probe_receives_normalized_url() {
        let probe = Arc::new(CountingProbe::default());
        let engine = Engine::builder(ScoringConfig::default())
            .shared_probe(probe.clone())
            .build()
            .unwrap();

        engine.evaluate(" www.example.com ").await;
        assert_eq!(probe.seen.lock().unwrap().as_slice(), ["http://www.example.com"]);
    }

    #[tokio::test]
    async fn offline_preset_never_probes() {
        let probe = CountingProbe::default();
        let calls = Arc::clone(&probe.calls);
        let engine = Engine::builder(ScoringConfig::for_preset(Preset::Offline))
            .probe(probe)
            .build()
            .unwrap();

        let result = engine.evaluate("https://www.example.com").await;
        assert_eq!(result.score(), 100);
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn evaluate_many_keeps_input_order() {
        let engine = Engine::builder(fast_config())
            .probe(FixedProbe(true))
            .build()
            .unwrap();

        let inputs = ["https://www.example.com", "not a url", "http://login.example.tk"];
        let results = engine.evaluate_many(&inputs).await;

        let urls: Vec<&str> = results.iter().map(ScoreResult::url).collect();
        assert_eq!(urls, inputs);
        assert_eq!(results[1].tier(), Tier::Invalid);
        assert_eq!(results[2].tier(), Tier::Risky);
    }

    /// Records how many probes are in flight at once.
    #[derive(Default)]
    struct InFlightProbe {
        current: AtomicUsize,
        peak: AtomicUsize,
    }

    #[async_trait]
    impl LivenessProbe for InFlightProbe {
        fn name(&self) -> &'static str {
            "in-flight"
        }

        async fn probe(&self, _url: &str, _timeout: Duration) -> Result<ProbeOutcome> {
            let now = self.current.fetch_add(1, Ordering::SeqCst) + 1;
            self.peak.fetch_max(now, Ordering::SeqCst);
            tokio::time::sleep(Duration::from_millis(5)).await;
            self.current.fetch_sub(1, Ordering::SeqCst);
            Ok(ProbeOutcome::REACHABLE)
        }
    }

    #[tokio::test]
    async fn evaluate_many_bounds_concurrency() {
        let probe = Arc::new(InFlightProbe::default());
        let engine = Engine::builder(ScoringConfig::default())
            .shared_probe(probe.clone())
            .concurrency(3)
            .build()
            .unwrap();

        let inputs: Vec<String> = (0..20).map(|i| format!("https://site{i}.example.com")).collect();
        let results = engine.evaluate_many(&inputs).await;

        assert_eq!(results.len(), 20);
        assert_eq!(results[7].url(), "https://site7.example.com");
        let peak = probe.peak.load(Ordering::SeqCst);
        assert!((1..=3).contains(&peak), "peak {peak}");
    }

    #[test]
    fn zero_concurrency_still_makes_progress() {
        let engine = Engine::builder(ScoringConfig::for_preset(Preset::Offline))
            .concurrency(0)
            .build()
            .unwrap();
        assert_eq!(engine.concurrency, 1);
    }

    #[derive(Clone, Default)]
    struct Capture(Arc<std::sync::Mutex<Vec<u8>>>);

    impl std::io::Write for Capture {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[tokio::test]
    async fn evaluation_span_records_url_once() {
        let capture = Capture::default();
        let writer = capture.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();
        let _guard = tracing::subscriber::set_default(subscriber);

        let engine = Engine::offline(ScoringConfig::for_preset(Preset::Offline)).unwrap();
        engine.evaluate("https://www.example.com").await;

        let logs = String::from_utf8(capture.0.lock().unwrap().clone()).unwrap();
        assert!(logs.contains("url=https://www.example.com"), "{logs}");
        assert!(!logs.contains("input="), "{logs}");
    }

    #[test]
    fn liveness_weight_requires_a_probe() {
        let err = Engine::offline(ScoringConfig::default()).unwrap_err();
        assert!(matches!(err, ScoreError::ConfigurationInvalid(_)));

        assert!(Engine::offline(ScoringConfig::for_preset(Preset::Offline)).is_ok());
    }

    #[test]
    fn invalid_config_is_rejected_before_use() {
        let mut config = ScoringConfig::for_preset(Preset::Offline);
        config.weights.scheme = 0.9;
        assert!(Engine::offline(config).is_err());
    }
}
