use aakeedo_client::KanjiSource;
use serde::Serialize;

use crate::error::ToolError;
use crate::input;

/// The five kanji lookup tools over one source
pub struct KanjiTools<S> {
    source: S,
}

impl<S: KanjiSource> KanjiTools<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// `get_kanji_details`: JSON object describing one kanji
    pub async fn get_kanji_details(&self, kanji_char: &str) -> Result<String, ToolError> {
        let Some(kanji) = input::single_char(kanji_char) else {
            return Err(ToolError::retryable(
                format!(
                    "Please provide a single, valid Japanese kanji character. The input '{kanji_char}' is not suitable."
                ),
                format!(
                    "Invalid input for get_kanji_details: kanji_char must be a single non-whitespace character. Received: '{kanji_char}', Cleaned: '{}'",
                    kanji_char.trim()
                ),
                "The provided input for the kanji character was invalid. Please ask the user for a single, specific kanji character.",
            ));
        };

        match self.source.kanji_details(&kanji).await {
            Some(detail) => to_payload(&detail),
            None => Err(ToolError::execution(format!(
                "I couldn't find detailed information for the kanji '{kanji}'. Please ensure it's a recognized Japanese kanji character."
            ))),
        }
    }

    /// `list_joyo_kanji`: JSON array of every Jōyō kanji
    pub async fn list_joyo_kanji(&self) -> Result<String, ToolError> {
        match self.source.joyo_kanji_list().await {
            Some(list) => to_payload(&list),
            None => Err(ToolError::execution(
                "Sorry, I was unable to retrieve the list of Jōyō kanji at this time. There might have been an issue communicating with the Kanji API.",
            )),
        }
    }

    /// `get_kanji_list_by_category`: JSON array of the kanji in a named list
    pub async fn get_kanji_list_by_category(&self, list_name: &str) -> Result<String, ToolError> {
        let Some(category) = input::category_name(list_name) else {
            return Err(ToolError::retryable(
                format!(
                    "Please provide a valid category name for the kanji list. The input '{list_name}' is empty or invalid."
                ),
                format!(
                    "Invalid input for get_kanji_list_by_category: list_name cannot be empty. Received: '{list_name}'"
                ),
                "A category name for the kanji list was not provided or was invalid. Please ask the user for a specific category (e.g., 'joyo', 'grade-1', 'jlpt-3').",
            ));
        };

        match self.source.kanji_list(&category).await {
            Some(list) => to_payload(&list),
            None => Err(ToolError::execution(format!(
                "I couldn't retrieve the kanji list for the category '{category}'. Please ensure it's a recognized category name (like 'joyo', 'grade-1', 'jlpt-3')."
            ))),
        }
    }

    /// `get_kanji_by_reading`: JSON object with the kanji sharing a kana reading
    pub async fn get_kanji_by_reading(&self, reading_value: &str) -> Result<String, ToolError> {
        let Some(reading) = input::free_text(reading_value) else {
            return Err(ToolError::retryable(
                format!(
                    "Please provide a Japanese reading (in hiragana or katakana) to search for. The input '{reading_value}' is empty or invalid."
                ),
                format!(
                    "Invalid input for get_kanji_by_reading: reading_value cannot be empty. Received: '{reading_value}'"
                ),
                "A Japanese reading was not provided or was invalid. Please ask the user for a specific reading in kana.",
            ));
        };

        match self.source.kanji_by_reading(&reading).await {
            Some(found) => to_payload(&found),
            None => Err(ToolError::execution(format!(
                "I couldn't find any kanji associated with the reading '{reading}'. Please check the reading or try a different one."
            ))),
        }
    }

    /// `get_words_for_kanji`: JSON array of dictionary words using a kanji
    pub async fn get_words_for_kanji(&self, kanji_char: &str) -> Result<String, ToolError> {
        let Some(kanji) = input::single_char(kanji_char) else {
            return Err(ToolError::retryable(
                format!(
                    "Please provide a single, valid Japanese kanji character to find words for. Input '{kanji_char}' is not suitable."
                ),
                format!(
                    "Invalid input for get_words_for_kanji: kanji_char must be a single non-whitespace character. Received: '{kanji_char}', Cleaned: '{}'",
                    kanji_char.trim()
                ),
                "The provided input for the kanji character was invalid. Please ask the user for a single, specific kanji character to search words for.",
            ));
        };

        match self.source.words_for_kanji(&kanji).await {
            Some(words) => to_payload(&words),
            None => Err(ToolError::execution(format!(
                "I couldn't retrieve words for the kanji '{kanji}'. This might mean no words are listed for this kanji, or there was an issue fetching the data."
            ))),
        }
    }
}

fn to_payload<T: Serialize + ?Sized>(value: &T) -> Result<String, ToolError> {
    serde_json::to_string(value).map_err(|e| {
        tracing::error!("Failed to serialize tool payload: {e}");
        ToolError::execution("The result could not be encoded. Please try again.")
    })
}
