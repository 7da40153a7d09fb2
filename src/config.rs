// File: src/config.rs
use crate::core::content::REPLY_DELAY;
use crate::core::types::{is_supported_language, LanguageCode, DEFAULT_LANGUAGE};
use std::env;
use std::path::PathBuf;
use std::time::Duration;
use tracing::warn;

pub const RULES_VAR: &str = "MENTOR_RULES";
pub const LANG_VAR: &str = "MENTOR_LANG";
pub const REPLY_DELAY_VAR: &str = "MENTOR_REPLY_DELAY_MS";

/// Settings for the chat and pipe binaries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MentorConfig {
    /// Rule pack to load instead of the built-in rules.
    pub rules_path: Option<PathBuf>,
    /// Language the session starts in.
    pub language: LanguageCode,
    pub reply_delay: Duration,
}

impl Default for MentorConfig {
    fn default() -> Self {
        Self {
            rules_path: None,
            language: DEFAULT_LANGUAGE.to_string(),
            reply_delay: REPLY_DELAY,
        }
    }
}

impl MentorConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Bad values are reported and replaced by their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(path) = lookup(RULES_VAR).filter(|p| !p.trim().is_empty()) {
            config.rules_path = Some(PathBuf::from(path));
        }

        if let Some(lang) = lookup(LANG_VAR) {
            if is_supported_language(&lang) {
                config.language = lang;
            } else {
                warn!(var = LANG_VAR, value = %lang, "unsupported language, using default");
            }
        }

        if let Some(raw) = lookup(REPLY_DELAY_VAR) {
            match raw.parse::<u64>() {
                Ok(ms) => config.reply_delay = Duration::from_millis(ms),
                Err(_) => warn!(var = REPLY_DELAY_VAR, value = %raw, "not a number of milliseconds"),
            }
        }

        config
    }
}

pub(crate) fn env_bool(name: &str, default: bool) -> bool {
    env::var(name)
        .ok()
        .and_then(|v| match v.as_str() {
            "1" | "true" | "TRUE" | "yes" | "YES" => Some(true),
            "0" | "false" | "FALSE" | "no" | "NO" => Some(false),
            _ => None,
        })
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> MentorConfig {
        let vars: HashMap<String, String> =
            vars.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        MentorConfig::from_lookup(|name| vars.get(name).cloned())
    }

    #[test]
    fn defaults_without_variables() {
        let config = config_from(&[]);
        assert_eq!(config, MentorConfig::default());
        assert_eq!(config.reply_delay, Duration::from_millis(1000));
    }

    #[test]
    fn reads_all_variables() {
        let config = config_from(&[
            (RULES_VAR, "/etc/mentor/pack.json"),
            (LANG_VAR, "hi"),
            (REPLY_DELAY_VAR, "0"),
        ]);
        assert_eq!(config.rules_path, Some(PathBuf::from("/etc/mentor/pack.json")));
        assert_eq!(config.language, "hi");
        assert_eq!(config.reply_delay, Duration::ZERO);
    }

    #[test]
    fn invalid_values_keep_defaults() {
        let config = config_from(&[(RULES_VAR, " "), (LANG_VAR, "fr"), (REPLY_DELAY_VAR, "soon")]);
        assert_eq!(config, MentorConfig::default());
    }
}
