//! Core types and traits for the cyberscore URL trust-scoring engine.
//!
//! This crate provides the foundational types shared by the engine, the
//! liveness probe and the presentation layers:
//!
//! - **Types**: [`ParsedUrl`], [`CheckOutcome`], [`ScoreResult`], [`History`]
//! - **Probe capability**: the [`LivenessProbe`] trait injected into the engine
//! - **Errors**: the [`ScoreError`] taxonomy
//!
//! # Example
//!
//! ```rust,ignore
//! use cyberscore_core::{ParsedUrl, Result};
//!
//! fn show(input: &str) -> Result<()> {
//!     let parsed = ParsedUrl::parse(input)?;
//!     println!("host: {} (tld .{})", parsed.hostname, parsed.tld);
//!     Ok(())
//! }
//! ```

#![doc(html_root_url = "https://docs.rs/cyberscore-core/0.3.0")]

mod error;
mod probe;
pub mod types;

pub use error::{Result, ScoreError};
pub use probe::{LivenessProbe, ProbeOutcome};
pub use types::*;
