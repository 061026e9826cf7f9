//! # cyberscore-cli
//!
//! Command-line front end for the cyberscore engine.
//!
//! ## Features
//!
//! - **Scoring**: `cyberscore check <URL>...` with an optional liveness probe
//! - **Leaderboard**: `top` ranks every URL checked so far
//! - **Educational mode**: `--explain` describes each heuristic
//! - **Multiple output formats**: Pretty, JSON, CSV, YAML

pub mod cli;
pub mod config;
pub mod education;
pub mod history;
pub mod output;

pub use cli::run;
