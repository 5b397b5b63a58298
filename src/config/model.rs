// src/config/model.rs

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Name of the config file probed in the project root.
pub const CONFIG_FILE_NAME: &str = "unprefixed-intl.config.json";

/// Language used when none of the preferred languages has a messages file.
pub const DEFAULT_LANG: &str = "en";

pub const DEFAULT_MAX_ACCEPTED_LANGUAGE_SEARCH: usize = 3;

pub const DEFAULT_ALLOW_LANGUAGE_CODE: bool = true;

/// Configuration as read from `unprefixed-intl.config.json`.
///
/// ```json
/// {
///   "messagesPath": "/srv/app/src/messages",
///   "defaultLang": "en",
///   "maxAcceptedLanguageSearch": 3,
///   "allowLanguageCode": true
/// }
/// ```
///
/// Every field is optional here so that an absent key and an explicit
/// `null` are both caught by validation rather than by serde. Unknown keys
/// are ignored. `maxAcceptedLanguageSearch` is kept as a raw JSON number so
/// that `3.0` is accepted the same as `3`. Convert into [`Config`] with
/// `Config::try_from`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawConfig {
    pub messages_path: Option<PathBuf>,

    pub default_lang: Option<String>,

    pub max_accepted_language_search: Option<serde_json::Number>,

    pub allow_language_code: Option<bool>,
}

/// Validated i18n configuration.
///
/// All four fields are always populated. The value is immutable once built:
/// fields are private and only readable through accessors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    messages_path: PathBuf,
    default_lang: String,
    max_accepted_language_search: usize,
    allow_language_code: bool,
}

impl Config {
    /// Build a config without running validation.
    ///
    /// Callers are expected to have checked `max_accepted_language_search >= 1`;
    /// [`Config::try_from`] is the checked path.
    pub(crate) fn new_unchecked(
        messages_path: PathBuf,
        default_lang: String,
        max_accepted_language_search: usize,
        allow_language_code: bool,
    ) -> Self {
        Self {
            messages_path,
            default_lang,
            max_accepted_language_search,
            allow_language_code,
        }
    }

    /// Default configuration pointing at the given messages directory.
    pub fn with_messages_path(messages_path: impl Into<PathBuf>) -> Self {
        Self::new_unchecked(
            messages_path.into(),
            DEFAULT_LANG.to_string(),
            DEFAULT_MAX_ACCEPTED_LANGUAGE_SEARCH,
            DEFAULT_ALLOW_LANGUAGE_CODE,
        )
    }

    /// Directory holding one `<lang>.json` file per language.
    pub fn messages_path(&self) -> &Path {
        &self.messages_path
    }

    /// Language used when no preferred language matches.
    pub fn default_lang(&self) -> &str {
        &self.default_lang
    }

    /// Upper bound on how many of a user's preferred languages are tried.
    pub fn max_accepted_language_search(&self) -> usize {
        self.max_accepted_language_search
    }

    /// Whether `en.json` may answer a request for `en-US` when
    /// `en-US.json` does not exist.
    pub fn allow_language_code(&self) -> bool {
        self.allow_language_code
    }

    /// Path of the messages file for `lang`, e.g. `<messagesPath>/en-US.json`.
    pub fn message_file(&self, lang: &str) -> PathBuf {
        self.messages_path.join(format!("{lang}.json"))
    }
}
