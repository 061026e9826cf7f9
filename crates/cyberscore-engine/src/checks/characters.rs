//! Character legitimacy check.
//!
//! Non-ASCII look-alikes and their `xn--` encodings are the usual homograph
//! vectors, so both fail this one check.

use crate::config::ScoringConfig;
use crate::messages::Message;
use cyberscore_core::{CheckId, CheckOutcome, CheckStatus, ParsedUrl};

/// ASCII-compatible encoding prefix of internationalized labels.
pub const ACE_PREFIX: &str = "xn--";

/// Returns true if a label starts with, or embeds, the ACE prefix.
pub fn has_ace_label(hostname: &str) -> bool {
    hostname.to_lowercase().contains(ACE_PREFIX)
}

/// Returns true if the hostname has characters outside `[a-z0-9.-]`.
pub fn has_nonstandard_chars(hostname: &str) -> bool {
    hostname
        .to_lowercase()
        .chars()
        .any(|c| !(c.is_ascii_lowercase() || c.is_ascii_digit() || c == '.' || c == '-'))
}

/// Fails on unusual characters or on any internationalized label.
pub fn check(parsed: &ParsedUrl, config: &ScoringConfig) -> CheckOutcome {
    let weight = config.weights.characters;
    let host = parsed.hostname.as_str();

    let failure = if has_ace_label(host) {
        Some(Message::IdnEncoded)
    } else if has_nonstandard_chars(host) {
        Some(Message::NonStandardCharacters)
    } else {
        None
    };

    match failure {
        Some(message) => CheckOutcome::new(
            CheckId::Characters,
            0,
            weight,
            false,
            CheckStatus::Error,
            message.render(config.locale),
        ),
        None => CheckOutcome::new(
            CheckId::Characters,
            100,
            weight,
            true,
            CheckStatus::Success,
            Message::StandardCharacters.render(config.locale),
        ),
    }
}
