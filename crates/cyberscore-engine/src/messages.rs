//! Localized report lines.

use cyberscore_core::Tier;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Language of report messages.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    /// English
    #[default]
    En,
    /// French
    Fr,
}

impl FromStr for Locale {
    type Err = cyberscore_core::ScoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "en" | "english" => Ok(Self::En),
            "fr" | "french" | "francais" | "français" => Ok(Self::Fr),
            other => Err(cyberscore_core::ScoreError::ConfigurationInvalid(format!(
                "unknown locale: {other} (expected en or fr)"
            ))),
        }
    }
}

impl std::fmt::Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::En => write!(f, "en"),
            Self::Fr => write!(f, "fr"),
        }
    }
}

/// Every message the engine can emit.
#[derive(Debug, Clone, Copy)]
pub enum Message<'a> {
    /// Scheme is https
    HttpsUsed,
    /// Scheme is not https
    HttpsMissing,
    /// No configured keyword in the hostname
    NoSuspiciousKeyword,
    /// Keywords found, in configuration order
    SuspiciousKeywords(&'a [&'a str]),
    /// TLD in the trusted set
    TrustedTld(&'a str),
    /// TLD in the exotic set
    ExoticTld(&'a str),
    /// TLD in neither set
    UnclassifiedTld(&'a str),
    /// Hostname is plain ASCII
    StandardCharacters,
    /// Hostname carries an `xn--` label
    IdnEncoded,
    /// Hostname has characters outside `[a-z0-9.-]`
    NonStandardCharacters,
    /// Structure within limits
    StandardStructure,
    /// Too many sub-domains and/or too many hyphens
    StructureIssues {
        /// More sub-domains than allowed
        subdomains: bool,
        /// More hyphens than allowed
        hyphens: bool,
    },
    /// Host answered
    Reachable,
    /// Host did not answer
    Unreachable,
    /// No probe result was available
    NotProbed,
    /// Input is not a URL
    InvalidUrl,
}

impl Message<'_> {
    /// Render the message in `locale`
    #[must_use]
    pub fn render(&self, locale: Locale) -> String {
        match locale {
            Locale::En => self.english(),
            Locale::Fr => self.french(),
        }
    }

    fn english(&self) -> String {
        match *self {
            Self::HttpsUsed => "The site uses HTTPS, which encrypts the connection.".into(),
            Self::HttpsMissing => "The site does not use HTTPS; data is sent unencrypted.".into(),
            Self::NoSuspiciousKeyword => "No suspicious keyword in the domain name.".into(),
            Self::SuspiciousKeywords(words) => format!(
                "The domain name contains suspicious keywords: {}.",
                words.join(", ")
            ),
            Self::TrustedTld(tld) => format!("The extension (.{tld}) is common and generally reliable."),
            Self::ExoticTld(tld) => format!(
                "The extension (.{tld}) is often used by unreliable sites. Be careful."
            ),
            Self::UnclassifiedTld(tld) => format!("The extension (.{tld}) is less common."),
            Self::StandardCharacters => "The domain name uses standard characters.".into(),
            Self::IdnEncoded => "The domain name contains internationalized (punycode) labels, \
                                 often used for phishing."
                .into(),
            Self::NonStandardCharacters => "The domain name contains unusual characters.".into(),
            Self::StandardStructure => "The domain name structure looks standard.".into(),
            Self::StructureIssues { subdomains, hyphens } => {
                let mut parts = Vec::new();
                if subdomains {
                    parts.push("Multiple sub-domains can be misleading (e.g. paypal.login.secure.com).");
                }
                if hyphens {
                    parts.push("Many hyphens in the domain name can signal a suspicious site.");
                }
                parts.join(" ")
            }
            Self::Reachable => "The site responds.".into(),
            Self::Unreachable => "The site could not be reached.".into(),
            Self::NotProbed => "The site's availability was not checked.".into(),
            Self::InvalidUrl => "The URL is invalid. Check the format (e.g. www.example.com).".into(),
        }
    }

    fn french(&self) -> String {
        match *self {
            Self::HttpsUsed => {
                "Le site utilise le protocole HTTPS, qui chiffre la communication.".into()
            }
            Self::HttpsMissing => {
                "Le site n'utilise pas le protocole HTTPS. Les données ne sont pas chiffrées."
                    .into()
            }
            Self::NoSuspiciousKeyword => "Aucun mot suspect dans le nom de domaine.".into(),
            Self::SuspiciousKeywords(words) => format!(
                "Le nom de domaine contient des mots suspects : {}.",
                words.join(", ")
            ),
            Self::TrustedTld(tld) => {
                format!("L'extension (.{tld}) est courante et généralement fiable.")
            }
            Self::ExoticTld(tld) => format!(
                "L'extension (.{tld}) est parfois utilisée pour des sites peu fiables. Soyez prudent."
            ),
            Self::UnclassifiedTld(tld) => format!("L'extension (.{tld}) est moins courante."),
            Self::StandardCharacters => "Le nom de domaine utilise des caractères standards.".into(),
            Self::IdnEncoded => "Le nom de domaine contient des caractères internationaux \
                                 (Punycode), souvent utilisés pour le phishing."
                .into(),
            Self::NonStandardCharacters => {
                "Le nom de domaine contient des caractères suspects.".into()
            }
            Self::StandardStructure => "La structure du nom de domaine semble standard.".into(),
            Self::StructureIssues { subdomains, hyphens } => {
                let mut parts = Vec::new();
                if subdomains {
                    parts.push(
                        "Attention aux sous-domaines multiples, qui peuvent être trompeurs \
                         (ex : paypal.connexion.securisee.com).",
                    );
                }
                if hyphens {
                    parts.push(
                        "L'utilisation de nombreux tirets dans le nom de domaine peut être un \
                         signe de site suspect.",
                    );
                }
                parts.join(" ")
            }
            Self::Reachable => "Le site répond.".into(),
            Self::Unreachable => "Impossible d'accéder au site.".into(),
            Self::NotProbed => "La disponibilité du site n'a pas été vérifiée.".into(),
            Self::InvalidUrl => "L'URL saisie est invalide. Veuillez vérifier le format \
                                 (ex : www.exemple.com)."
                .into(),
        }
    }
}

/// Human label for a tier
#[must_use]
pub const fn tier_label(tier: Tier, locale: Locale) -> &'static str {
    match (locale, tier) {
        (Locale::En, Tier::Secure) => "Secure",
        (Locale::En, Tier::Moderate) => "Moderately safe",
        (Locale::En, Tier::Risky) => "High risk",
        (Locale::En, Tier::Invalid) => "Invalid URL",
        (Locale::Fr, Tier::Secure) => "Sécurisé",
        (Locale::Fr, Tier::Moderate) => "Moyennement sûr",
        (Locale::Fr, Tier::Risky) => "Risque élevé",
        (Locale::Fr, Tier::Invalid) => "Erreur",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keyword_list_is_rendered_in_order() {
        let words = ["login", "secure"];
        let msg = Message::SuspiciousKeywords(&words).render(Locale::En);
        assert!(msg.ends_with("login, secure."));
    }

    #[test]
    fn structure_message_mentions_each_issue() {
        let both = Message::StructureIssues {
            subdomains: true,
            hyphens: true,
        }
        .render(Locale::En);
        assert!(both.contains("sub-domains"));
        assert!(both.contains("hyphens"));

        let one = Message::StructureIssues {
            subdomains: false,
            hyphens: true,
        }
        .render(Locale::Fr);
        assert!(one.contains("tirets"));
        assert!(!one.contains("sous-domaines"));
    }

    #[test]
    fn french_labels() {
        assert_eq!(tier_label(Tier::Risky, Locale::Fr), "Risque élevé");
        assert_eq!(Message::Reachable.render(Locale::Fr), "Le site répond.");
    }

    #[test]
    fn locale_parses() {
        assert_eq!("FR".parse::<Locale>().unwrap(), Locale::Fr);
        assert!("de".parse::<Locale>().is_err());
    }
}
