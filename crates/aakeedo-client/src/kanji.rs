use aakeedo_config::Config;
use aakeedo_config::http::HttpConfig;
use aakeedo_config::kanji_api::KanjiApiConfig;
use aakeedo_types::{KanjiDetail, KanjiReading, WordEntry};
use anyhow::{Context, Result};
use reqwest::Url;
use serde_json::Value;

use crate::error::FetchError;
use crate::http::{endpoint, get_json, json_kind, parse, settle};

/// Client for the public kanjiapi.dev API. No authentication.
#[derive(Clone)]
pub struct KanjiApiClient {
    base_url: Url,
    client: reqwest::Client,
}

impl KanjiApiClient {
    pub fn new(api: &KanjiApiConfig, http: &HttpConfig) -> Result<Self> {
        let base_url = Url::parse(&api.base_url)
            .with_context(|| format!("Invalid kanji API base URL: {}", api.base_url))?;

        let client = reqwest::Client::builder()
            .timeout(http.timeout())
            .build()
            .context("Failed to build kanji API HTTP client")?;

        Ok(Self { base_url, client })
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(&config.kanji_api, &config.http)
    }

    /// Details for a single kanji character
    pub async fn kanji_details(&self, kanji: &str) -> Option<KanjiDetail> {
        settle("kanji_details", kanji, self.try_kanji_details(kanji).await)
    }

    /// Every Jōyō kanji
    pub async fn joyo_kanji_list(&self) -> Option<Vec<String>> {
        settle("joyo_kanji_list", "joyo", self.try_kanji_list("joyo").await)
    }

    /// Kanji in a named list such as `jinmeiyo`, `grade-1` or `jlpt-3`
    pub async fn kanji_list(&self, list_name: &str) -> Option<Vec<String>> {
        settle("kanji_list", list_name, self.try_kanji_list(list_name).await)
    }

    /// Kanji that use the given kana reading
    pub async fn kanji_by_reading(&self, reading: &str) -> Option<KanjiReading> {
        settle(
            "kanji_by_reading",
            reading,
            self.try_kanji_by_reading(reading).await,
        )
    }

    /// Dictionary words written with the given kanji
    pub async fn words_for_kanji(&self, kanji: &str) -> Option<Vec<WordEntry>> {
        settle(
            "words_for_kanji",
            kanji,
            self.try_words_for_kanji(kanji).await,
        )
    }

    pub(crate) async fn try_kanji_details(&self, kanji: &str) -> Result<KanjiDetail, FetchError> {
        check_single_char("kanji", kanji)?;
        let value = self.get(&["kanji", kanji]).await?;
        parse(value)
    }

    pub(crate) async fn try_kanji_list(&self, list_name: &str) -> Result<Vec<String>, FetchError> {
        if list_name.is_empty() {
            return Err(FetchError::invalid_input("list name", list_name));
        }

        let value = self.get(&["kanji", list_name]).await?;
        if !value.is_array() {
            return Err(FetchError::Shape(format!(
                "expected a list of strings, got {}",
                json_kind(&value)
            )));
        }

        serde_json::from_value(value)
            .map_err(|e| FetchError::Shape(format!("expected a list of strings: {e}")))
    }

    pub(crate) async fn try_kanji_by_reading(
        &self,
        reading: &str,
    ) -> Result<KanjiReading, FetchError> {
        if reading.is_empty() {
            return Err(FetchError::invalid_input("reading", reading));
        }

        let value = self.get(&["reading", reading]).await?;
        parse(value)
    }

    pub(crate) async fn try_words_for_kanji(
        &self,
        kanji: &str,
    ) -> Result<Vec<WordEntry>, FetchError> {
        check_single_char("kanji", kanji)?;

        match self.get(&["words", kanji]).await? {
            // One malformed entry fails the whole lookup
            Value::Array(items) => items.into_iter().map(parse::<WordEntry>).collect(),
            other => Err(FetchError::Shape(format!(
                "expected a list of word entries, got {}",
                json_kind(&other)
            ))),
        }
    }

    async fn get(&self, segments: &[&str]) -> Result<Value, FetchError> {
        let url = endpoint(&self.base_url, segments)?;
        tracing::debug!("GET {url}");
        get_json(self.client.get(url)).await
    }
}

fn check_single_char(argument: &'static str, value: &str) -> Result<(), FetchError> {
    if value.chars().count() != 1 {
        return Err(FetchError::invalid_input(argument, value));
    }
    Ok(())
}
