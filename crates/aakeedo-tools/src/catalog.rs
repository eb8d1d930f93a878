//! Name-based discovery and dispatch for hosts that route tool calls as JSON.

use aakeedo_client::{KanjiSource, ProfileSource};
use serde::Serialize;
use serde_json::{Value, json};

use crate::context::{ToolContext, WANIKANI_API_TOKEN};
use crate::error::ToolError;
use crate::kanji::KanjiTools;
use crate::wanikani::ProfileTools;

#[derive(Debug, Clone, Serialize)]
pub struct ToolDefinition {
    pub name: &'static str,
    pub description: &'static str,
    pub input_schema: Value,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub requires_secrets: Vec<&'static str>,
}

/// Every tool this crate exposes, in a host-neutral form
pub fn definitions() -> Vec<ToolDefinition> {
    vec![
        ToolDefinition {
            name: "get_kanji_details",
            description: "Fetches detailed information (meanings, readings, stroke count, grade, JLPT level) for a single Japanese kanji character.",
            input_schema: string_arg(
                "kanji_char",
                "A single Japanese kanji character (e.g., '桜', '字').",
            ),
            requires_secrets: vec![],
        },
        ToolDefinition {
            name: "list_joyo_kanji",
            description: "Fetches the complete list of Jōyō (commonly used) kanji characters.",
            input_schema: json!({ "type": "object", "properties": {} }),
            requires_secrets: vec![],
        },
        ToolDefinition {
            name: "get_kanji_list_by_category",
            description: "Fetches the kanji in a named list: 'joyo', 'jinmeiyo', 'heisig', 'kyouiku', 'grade-1' to 'grade-6', 'grade-8', 'jlpt-1' to 'jlpt-5', 'all'.",
            input_schema: string_arg(
                "list_name",
                "Category name (e.g., 'joyo', 'jinmeiyo', 'grade-1', 'jlpt-3', 'all').",
            ),
            requires_secrets: vec![],
        },
        ToolDefinition {
            name: "get_kanji_by_reading",
            description: "Fetches the kanji associated with a Japanese reading, split into main and name-only kanji.",
            input_schema: string_arg(
                "reading_value",
                "Japanese reading in hiragana or katakana (e.g., 'みつ', 'ニチ').",
            ),
            requires_secrets: vec![],
        },
        ToolDefinition {
            name: "get_words_for_kanji",
            description: "Fetches dictionary word entries (meanings and written/pronounced variants) that use a kanji.",
            input_schema: string_arg(
                "kanji_char",
                "A single Japanese kanji character (e.g., '蜜', '食').",
            ),
            requires_secrets: vec![],
        },
        ToolDefinition {
            name: "get_user_information",
            description: "Gets the WaniKani user's username and current level (1-60), an indication of their kanji progress.",
            input_schema: json!({ "type": "object", "properties": {} }),
            requires_secrets: vec![WANIKANI_API_TOKEN],
        },
    ]
}

pub struct ToolCatalog<K, P> {
    kanji: KanjiTools<K>,
    profile: ProfileTools<P>,
}

impl<K: KanjiSource, P: ProfileSource> ToolCatalog<K, P> {
    pub fn new(kanji: K, profile: P) -> Self {
        Self {
            kanji: KanjiTools::new(kanji),
            profile: ProfileTools::new(profile),
        }
    }

    /// Run the named tool. Missing or non-string arguments count as empty.
    pub async fn invoke(
        &self,
        name: &str,
        args: &Value,
        context: &ToolContext,
    ) -> Result<String, ToolError> {
        let arg = |key: &str| args.get(key).and_then(Value::as_str).unwrap_or("");
        tracing::info!("Invoking tool {name}");

        match name {
            "get_kanji_details" => self.kanji.get_kanji_details(arg("kanji_char")).await,
            "list_joyo_kanji" => self.kanji.list_joyo_kanji().await,
            "get_kanji_list_by_category" => {
                self.kanji
                    .get_kanji_list_by_category(arg("list_name"))
                    .await
            }
            "get_kanji_by_reading" => self.kanji.get_kanji_by_reading(arg("reading_value")).await,
            "get_words_for_kanji" => self.kanji.get_words_for_kanji(arg("kanji_char")).await,
            "get_user_information" => Ok(self.profile.get_user_information(context).await),
            other => Err(ToolError::execution(format!("Unknown tool '{other}'."))),
        }
    }
}

fn string_arg(name: &str, description: &str) -> Value {
    json!({
        "type": "object",
        "properties": {
            name: { "type": "string", "description": description }
        },
        "required": [name]
    })
}
