//! HTTP liveness probe for the cyberscore engine.
//!
//! This crate provides [`HttpProbe`], a [`LivenessProbe`] that asks the target
//! host for its headers and reports whether it answered.
//!
//! [`LivenessProbe`]: cyberscore_core::LivenessProbe

#![doc(html_root_url = "https://docs.rs/cyberscore-probe/0.3.0")]

mod http;

pub use cyberscore_core::{LivenessProbe, ProbeOutcome, Result, ScoreError};
pub use http::{HttpProbe, HttpProbeBuilder};
