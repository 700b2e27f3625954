use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// Customer segment a price is quoted for.
///
/// Parsing is case-insensitive (`"gold"`, `"Gold"` and `"GOLD"` are all
/// accepted); the canonical rendering is upper case.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE", try_from = "String")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE", ascii_case_insensitive)]
pub enum UserSegment {
    #[default]
    Guest,
    Member,
    Silver,
    Gold,
    Platinum,
    Corporate,
    Loyal,
}

impl TryFrom<String> for UserSegment {
    type Error = strum::ParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
