use serde::{Deserialize, Serialize};

fn default_base_url() -> String {
    "https://kanjiapi.dev/v1".to_string()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KanjiApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

impl KanjiApiConfig {
    pub fn from_lookup(lookup: &impl Fn(&str) -> Option<String>) -> Self {
        Self {
            base_url: lookup("KANJI_API_BASE_URL").unwrap_or_else(default_base_url),
        }
    }
}

impl Default for KanjiApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}
