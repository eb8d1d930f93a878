use std::collections::HashMap;

/// Secret id under which the host supplies the WaniKani personal access token
pub const WANIKANI_API_TOKEN: &str = "WANIKANI_API_TOKEN";

/// Per-invocation data handed over by the host framework
#[derive(Debug, Clone, Default)]
pub struct ToolContext {
    secrets: HashMap<String, String>,
}

impl ToolContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_secret(mut self, id: impl Into<String>, value: impl Into<String>) -> Self {
        self.secrets.insert(id.into(), value.into());
        self
    }

    /// Secret value, or `None` when it is missing or blank
    pub fn get_secret(&self, id: &str) -> Option<&str> {
        self.secrets
            .get(id)
            .map(String::as_str)
            .filter(|v| !v.is_empty())
    }
}
