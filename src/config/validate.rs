// src/config/validate.rs

use crate::config::model::{Config, RawConfig};

impl TryFrom<RawConfig> for Config {
    /// Human-readable reason; the loader attaches the file path.
    type Error = String;

    fn try_from(raw: RawConfig) -> std::result::Result<Self, Self::Error> {
        match raw {
            RawConfig {
                messages_path: Some(messages_path),
                default_lang: Some(default_lang),
                max_accepted_language_search: Some(max_search),
                allow_language_code: Some(allow_code),
            } => {
                let max_search = search_limit(&max_search)?;
                Ok(Config::new_unchecked(
                    messages_path,
                    default_lang,
                    max_search,
                    allow_code,
                ))
            }
            incomplete => Err(missing_properties(&incomplete)),
        }
    }
}

/// Describe which of the four required properties are absent or null.
fn missing_properties(raw: &RawConfig) -> String {
    let mut missing = Vec::new();
    if raw.messages_path.is_none() {
        missing.push("messagesPath");
    }
    if raw.default_lang.is_none() {
        missing.push("defaultLang");
    }
    if raw.max_accepted_language_search.is_none() {
        missing.push("maxAcceptedLanguageSearch");
    }
    if raw.allow_language_code.is_none() {
        missing.push("allowLanguageCode");
    }
    format!("missing some property: {}", missing.join(", "))
}

/// Accept any JSON number with a positive integral value, `3` or `3.0`.
fn search_limit(n: &serde_json::Number) -> Result<usize, String> {
    let value = match (n.as_u64(), n.as_f64()) {
        (Some(int), _) => usize::try_from(int).ok(),
        (None, Some(float))
            if float.fract() == 0.0 && float >= 0.0 && float <= usize::MAX as f64 =>
        {
            Some(float as usize)
        }
        _ => None,
    };

    match value {
        Some(0) => Err("maxAcceptedLanguageSearch must be >= 1 (got 0)".to_string()),
        Some(max) => Ok(max),
        None => Err(format!(
            "maxAcceptedLanguageSearch must be a positive integer (got {n})"
        )),
    }
}
