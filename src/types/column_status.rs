use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

/// Coarse classification of a column comparison, used for counting and display.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum ColumnStatus {
    Match,
    TypeMismatch,
    MissingInLeft,
    MissingInRight,
}

impl ColumnStatus {
    pub fn is_match(&self) -> bool {
        matches!(self, ColumnStatus::Match)
    }
}
