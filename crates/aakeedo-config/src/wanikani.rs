use serde::{Deserialize, Serialize};

fn default_base_url() -> String {
    "https://api.wanikani.com/v2/".to_string()
}

fn default_revision() -> String {
    "20170710".to_string()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WaniKaniConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Sent as the `Wanikani-Revision` header on every request
    #[serde(default = "default_revision")]
    pub revision: String,
}

impl WaniKaniConfig {
    pub fn from_lookup(lookup: &impl Fn(&str) -> Option<String>) -> Self {
        Self {
            base_url: lookup("WANIKANI_API_BASE_URL").unwrap_or_else(default_base_url),
            revision: lookup("WANIKANI_API_REVISION").unwrap_or_else(default_revision),
        }
    }
}

impl Default for WaniKaniConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            revision: default_revision(),
        }
    }
}
