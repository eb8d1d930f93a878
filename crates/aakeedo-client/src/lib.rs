//! HTTP clients for kanjiapi.dev and the WaniKani v2 API.
//!
//! Every public fetch returns `Option`: any failure, from a rejected argument
//! to a malformed payload, is logged here and surfaces as `None`.

mod error;
mod http;
mod kanji;
mod source;
mod wanikani;

pub use error::FetchError;
pub use kanji::KanjiApiClient;
pub use source::{KanjiSource, ProfileSource};
pub use wanikani::WaniKaniClient;

#[cfg(test)]
mod tests;
