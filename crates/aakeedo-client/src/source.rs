use std::sync::Arc;

use aakeedo_types::{KanjiDetail, KanjiReading, UserData, WordEntry};
use async_trait::async_trait;

use crate::kanji::KanjiApiClient;
use crate::wanikani::WaniKaniClient;

/// Kanji lookup backend
#[async_trait]
pub trait KanjiSource: Send + Sync {
    async fn kanji_details(&self, kanji: &str) -> Option<KanjiDetail>;

    async fn joyo_kanji_list(&self) -> Option<Vec<String>>;

    async fn kanji_list(&self, list_name: &str) -> Option<Vec<String>>;

    async fn kanji_by_reading(&self, reading: &str) -> Option<KanjiReading>;

    async fn words_for_kanji(&self, kanji: &str) -> Option<Vec<WordEntry>>;
}

/// Learner progress backend
#[async_trait]
pub trait ProfileSource: Send + Sync {
    async fn user_info(&self, api_token: &str) -> Option<UserData>;
}

#[async_trait]
impl KanjiSource for KanjiApiClient {
    async fn kanji_details(&self, kanji: &str) -> Option<KanjiDetail> {
        KanjiApiClient::kanji_details(self, kanji).await
    }

    async fn joyo_kanji_list(&self) -> Option<Vec<String>> {
        KanjiApiClient::joyo_kanji_list(self).await
    }

    async fn kanji_list(&self, list_name: &str) -> Option<Vec<String>> {
        KanjiApiClient::kanji_list(self, list_name).await
    }

    async fn kanji_by_reading(&self, reading: &str) -> Option<KanjiReading> {
        KanjiApiClient::kanji_by_reading(self, reading).await
    }

    async fn words_for_kanji(&self, kanji: &str) -> Option<Vec<WordEntry>> {
        KanjiApiClient::words_for_kanji(self, kanji).await
    }
}

#[async_trait]
impl ProfileSource for WaniKaniClient {
    async fn user_info(&self, api_token: &str) -> Option<UserData> {
        WaniKaniClient::user_info(self, api_token).await
    }
}

#[async_trait]
impl<T: KanjiSource + ?Sized> KanjiSource for Arc<T> {
    async fn kanji_details(&self, kanji: &str) -> Option<KanjiDetail> {
        (**self).kanji_details(kanji).await
    }

    async fn joyo_kanji_list(&self) -> Option<Vec<String>> {
        (**self).joyo_kanji_list().await
    }

    async fn kanji_list(&self, list_name: &str) -> Option<Vec<String>> {
        (**self).kanji_list(list_name).await
    }

    async fn kanji_by_reading(&self, reading: &str) -> Option<KanjiReading> {
        (**self).kanji_by_reading(reading).await
    }

    async fn words_for_kanji(&self, kanji: &str) -> Option<Vec<WordEntry>> {
        (**self).words_for_kanji(kanji).await
    }
}

#[async_trait]
impl<T: ProfileSource + ?Sized> ProfileSource for Arc<T> {
    async fn user_info(&self, api_token: &str) -> Option<UserData> {
        (**self).user_info(api_token).await
    }
}
