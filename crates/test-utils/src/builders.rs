#![allow(dead_code)]

use serde_json::{Map, Value, json};

/// The four required keys, in file order.
pub const REQUIRED_KEYS: [&str; 4] = [
    "messagesPath",
    "defaultLang",
    "maxAcceptedLanguageSearch",
    "allowLanguageCode",
];

/// Builder for `unprefixed-intl.config.json` documents.
///
/// Starts from a complete, valid document; individual keys can then be
/// overridden, nulled, removed or supplemented with unknown keys.
pub struct ConfigJsonBuilder {
    doc: Map<String, Value>,
}

impl ConfigJsonBuilder {
    pub fn new() -> Self {
        let mut doc = Map::new();
        doc.insert("messagesPath".into(), json!("/srv/app/i18n"));
        doc.insert("defaultLang".into(), json!("pt-BR"));
        doc.insert("maxAcceptedLanguageSearch".into(), json!(5));
        doc.insert("allowLanguageCode".into(), json!(false));
        Self { doc }
    }

    pub fn messages_path(mut self, path: &str) -> Self {
        self.doc.insert("messagesPath".into(), json!(path));
        self
    }

    pub fn default_lang(mut self, lang: &str) -> Self {
        self.doc.insert("defaultLang".into(), json!(lang));
        self
    }

    pub fn max_accepted_language_search(mut self, max: u64) -> Self {
        self.doc.insert("maxAcceptedLanguageSearch".into(), json!(max));
        self
    }

    pub fn allow_language_code(mut self, allow: bool) -> Self {
        self.doc.insert("allowLanguageCode".into(), json!(allow));
        self
    }

    pub fn set(mut self, key: &str, value: Value) -> Self {
        self.doc.insert(key.to_string(), value);
        self
    }

    pub fn null(self, key: &str) -> Self {
        self.set(key, Value::Null)
    }

    pub fn without(mut self, key: &str) -> Self {
        self.doc.remove(key);
        self
    }

    pub fn build(self) -> Value {
        Value::Object(self.doc)
    }

    pub fn to_json_string(self) -> String {
        self.build().to_string()
    }
}

impl Default for ConfigJsonBuilder {
    fn default() -> Self {
        Self::new()
    }
}
