//! Heuristic URL trust scoring: phishing indicators from the URL string alone.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use cyberscore::{Engine, HttpProbe, ScoringConfig};
//!
//! #[tokio::main]
//! async fn main() -> cyberscore::Result<()> {
//!     let engine = Engine::builder(ScoringConfig::default())
//!         .probe(HttpProbe::new()?)
//!         .build()?;
//!
//!     let result = engine.evaluate("https://www.example.com").await;
//!     println!("{}/100 ({})", result.score(), result.tier());
//!     for line in result.details() {
//!         println!("  - {line}");
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! Without network access, use the `offline` preset and no probe:
//!
//! ```rust,ignore
//! use cyberscore::{score_url, Preset, ScoringConfig};
//!
//! let result = score_url("paypa1-login.tk", &ScoringConfig::for_preset(Preset::Offline), None);
//! assert_eq!(result.tier(), cyberscore::Tier::Risky);
//! ```
//!
//! # Features
//!
//! - `default` - HTTP probe over rustls
//! - `http-probe` - Include [`HttpProbe`]
//! - `rustls` - Use rustls for the probe's TLS (recommended)
//! - `native-tls` - Use system native TLS

#![doc(html_root_url = "https://docs.rs/cyberscore/0.3.0")]

// Re-export core types
pub use cyberscore_core::*;

// Re-export the engine
pub use cyberscore_engine::{
    aggregate, checks, config, invalid_result, messages, presets, run_checks, score_parsed,
    score_url, tier_for, tier_label, CheckWeights, Engine, EngineBuilder, Locale, Preset,
    ScoringConfig, StructureRules, TierThresholds, TldScores,
};

// Re-export the probe if enabled
#[cfg(feature = "http-probe")]
pub use cyberscore_probe::{HttpProbe, HttpProbeBuilder};

// Re-export runtime for convenience
pub use serde;
pub use serde_json;
pub use tokio;
