//! Integers that arrive either as JSON numbers or as numeric strings
//!
//! The frontend builds its category list from the keys of the
//! `categories` object, so category ids come back as `"3"` rather than `3`.

use serde::Deserialize;

use super::ValidationError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "IntOrString")]
pub struct LooseInt(pub i64);

#[derive(Deserialize)]
#[serde(untagged)]
enum IntOrString {
    Int(i64),
    Str(String),
}

impl TryFrom<IntOrString> for LooseInt {
    type Error = ValidationError;

    fn try_from(value: IntOrString) -> Result<Self, Self::Error> {
        match value {
            IntOrString::Int(v) => Ok(LooseInt(v)),
            IntOrString::Str(s) => s
                .trim()
                .parse::<i64>()
                .map(LooseInt)
                .map_err(|_| ValidationError::NotAnInteger { value: s }),
        }
    }
}

impl LooseInt {
    pub fn get(self) -> i64 {
        self.0
    }
}
