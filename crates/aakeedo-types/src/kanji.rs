//! Records returned by the kanji lookup API.
//!
//! Optional scalars and defaulted lists are left out when serialized, so a
//! payload only carries the fields the API actually filled in.

use serde::{Deserialize, Serialize};

use crate::validate::{ShapeError, Validate, non_empty_list, non_empty_str};

/// Grades assigned by the API: 1-6 for Kyōiku, 8 for remaining Jōyō, 9 for Jinmeiyō
const VALID_GRADES: [u8; 8] = [1, 2, 3, 4, 5, 6, 8, 9];

/// Full detail record for one kanji (`GET /kanji/{char}`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KanjiDetail {
    pub kanji: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grade: Option<u8>,
    pub stroke_count: u32,
    pub meanings: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub kun_readings: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub on_readings: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub name_readings: Vec<String>,
    /// Former JLPT level (1-4)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub jlpt: Option<u8>,
    /// Codepoint in hex, e.g. `6c34`
    pub unicode: String,
    /// Keyword from Heisig's "Remembering the Kanji"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub heisig_en: Option<String>,
    /// Rank among the 2,501 most used characters in Mainichi Shinbun articles
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub freq_mainichi_shinbun: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unihan_cjk_compatibility_variant: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub notes: Vec<String>,
}

impl Validate for KanjiDetail {
    fn validate(&self) -> Result<(), ShapeError> {
        if self.kanji.chars().count() != 1 {
            return Err(ShapeError::new(
                "kanji",
                format!("expected exactly one character, got {:?}", self.kanji),
            ));
        }

        if let Some(grade) = self.grade {
            if !VALID_GRADES.contains(&grade) {
                return Err(ShapeError::new("grade", format!("{grade} is not a known grade")));
            }
        }

        if self.stroke_count == 0 {
            return Err(ShapeError::new("stroke_count", "must be positive"));
        }

        non_empty_list("meanings", &self.meanings)?;

        if let Some(jlpt) = self.jlpt {
            if !(1..=4).contains(&jlpt) {
                return Err(ShapeError::new("jlpt", format!("{jlpt} is outside 1-4")));
            }
        }

        non_empty_str("unicode", &self.unicode)
    }
}

/// Kanji sharing one reading (`GET /reading/{reading}`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KanjiReading {
    pub reading: String,
    pub main_kanji: Vec<String>,
    /// Kanji that take this reading only in names
    pub name_kanji: Vec<String>,
}

impl Validate for KanjiReading {
    fn validate(&self) -> Result<(), ShapeError> {
        non_empty_str("reading", &self.reading)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Meaning {
    pub glosses: Vec<String>,
}

impl Validate for Meaning {
    fn validate(&self) -> Result<(), ShapeError> {
        non_empty_list("glosses", &self.glosses)
    }
}

/// One written/pronounced form of a word
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Variant {
    pub written: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pronounced: Option<String>,
    /// Frequency list markers such as `ichi1` or `news1`
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub priorities: Vec<String>,
}

impl Validate for Variant {
    fn validate(&self) -> Result<(), ShapeError> {
        Ok(())
    }
}

/// Dictionary word containing a kanji (element of `GET /words/{char}`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordEntry {
    pub meanings: Vec<Meaning>,
    pub variants: Vec<Variant>,
}

impl Validate for WordEntry {
    fn validate(&self) -> Result<(), ShapeError> {
        non_empty_list("meanings", &self.meanings)?;
        non_empty_list("variants", &self.variants)?;
        self.meanings.validate()?;
        self.variants.validate()
    }
}
