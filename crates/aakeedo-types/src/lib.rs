pub mod kanji;
pub mod validate;
pub mod wanikani;

pub use kanji::{KanjiDetail, KanjiReading, Meaning, Variant, WordEntry};
pub use validate::{ShapeError, Validate};
pub use wanikani::{UserData, UserResponse};
