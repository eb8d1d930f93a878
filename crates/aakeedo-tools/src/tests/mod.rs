//! In-memory sources that record what the tools asked for.

use std::sync::Mutex;

use aakeedo_client::{KanjiSource, ProfileSource};
use aakeedo_types::{KanjiDetail, KanjiReading, UserData, WordEntry};
use async_trait::async_trait;

mod profile_tool_tests;

#[derive(Default)]
pub(crate) struct FakeKanjiSource {
    pub detail: Option<KanjiDetail>,
    pub list: Option<Vec<String>>,
    pub reading: Option<KanjiReading>,
    pub words: Option<Vec<WordEntry>>,
    calls: Mutex<Vec<(&'static str, String)>>,
}

impl FakeKanjiSource {
    pub fn calls(&self) -> Vec<(&'static str, String)> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, operation: &'static str, arg: &str) {
        self.calls.lock().unwrap().push((operation, arg.to_string()));
    }
}

#[async_trait]
impl KanjiSource for FakeKanjiSource {
    async fn kanji_details(&self, kanji: &str) -> Option<KanjiDetail> {
        self.record("kanji_details", kanji);
        self.detail.clone()
    }

    async fn joyo_kanji_list(&self) -> Option<Vec<String>> {
        self.record("joyo_kanji_list", "");
        self.list.clone()
    }

    async fn kanji_list(&self, list_name: &str) -> Option<Vec<String>> {
        self.record("kanji_list", list_name);
        self.list.clone()
    }

    async fn kanji_by_reading(&self, reading: &str) -> Option<KanjiReading> {
        self.record("kanji_by_reading", reading);
        self.reading.clone()
    }

    async fn words_for_kanji(&self, kanji: &str) -> Option<Vec<WordEntry>> {
        self.record("words_for_kanji", kanji);
        self.words.clone()
    }
}

#[derive(Default)]
pub(crate) struct FakeProfileSource {
    pub user: Option<UserData>,
    tokens: Mutex<Vec<String>>,
}

impl FakeProfileSource {
    pub fn tokens(&self) -> Vec<String> {
        self.tokens.lock().unwrap().clone()
    }
}

#[async_trait]
impl ProfileSource for FakeProfileSource {
    async fn user_info(&self, api_token: &str) -> Option<UserData> {
        self.tokens.lock().unwrap().push(api_token.to_string());
        self.user.clone()
    }
}

pub(crate) fn water() -> KanjiDetail {
    KanjiDetail {
        kanji: "水".to_string(),
        grade: None,
        stroke_count: 4,
        meanings: vec!["water".to_string()],
        kun_readings: vec![],
        on_readings: vec![],
        name_readings: vec![],
        jlpt: None,
        unicode: "6c34".to_string(),
        heisig_en: None,
        freq_mainichi_shinbun: None,
        unihan_cjk_compatibility_variant: None,
        notes: vec![],
    }
}
