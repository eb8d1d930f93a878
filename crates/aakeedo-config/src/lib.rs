//! Configuration for the kanji and WaniKani API clients.
//!
//! Values come from the process environment, optionally seeded from a `.env`
//! file in the working directory. Real environment variables win over the
//! file, and keys this crate does not know are ignored.
//!
//! - `KANJI_API_BASE_URL` (default `https://kanjiapi.dev/v1`)
//! - `WANIKANI_API_BASE_URL` (default `https://api.wanikani.com/v2/`)
//! - `WANIKANI_API_REVISION` (default `20170710`)
//! - `HTTP_TIMEOUT_MS` (default `10000`)

use std::env;

use serde::{Deserialize, Serialize};

use self::http::HttpConfig;
use self::kanji_api::KanjiApiConfig;
use self::wanikani::WaniKaniConfig;

pub mod http;
pub mod kanji_api;
pub mod wanikani;

/// Read-only snapshot, built once at startup and handed to the clients
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub kanji_api: KanjiApiConfig,
    pub wanikani: WaniKaniConfig,
    pub http: HttpConfig,
}

impl Config {
    /// Load `.env` (if present) into the environment, then read the environment
    pub fn load() -> Self {
        match dotenvy::dotenv() {
            Ok(path) => tracing::debug!("Loaded overrides from {}", path.display()),
            Err(e) if e.not_found() => {}
            Err(e) => tracing::warn!("Ignoring unreadable .env file: {e}"),
        }

        Self::from_env()
    }

    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from any key lookup. Blank or missing keys fall back to defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_blank = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        Config {
            kanji_api: KanjiApiConfig::from_lookup(&non_blank),
            wanikani: WaniKaniConfig::from_lookup(&non_blank),
            http: HttpConfig::from_lookup(&non_blank),
        }
    }
}
