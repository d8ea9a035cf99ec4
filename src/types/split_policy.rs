use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

/// How a column-list body is cut into column definitions.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, Display, EnumString, Default,
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
#[serde(rename_all = "snake_case")]
pub enum SplitPolicy {
    /// Every comma ends a definition, so `DECIMAL(10,2)` yields two fragments.
    #[default]
    Naive,

    /// Commas nested in parentheses or quotes stay inside the current definition.
    ParenAware,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_default_is_naive() {
        assert_eq!(SplitPolicy::default(), SplitPolicy::Naive);
    }

    #[test]
    fn test_parse_from_str() {
        assert_eq!(SplitPolicy::from_str("naive").unwrap(), SplitPolicy::Naive);
        assert_eq!(
            SplitPolicy::from_str("PAREN_AWARE").unwrap(),
            SplitPolicy::ParenAware
        );
        assert!(SplitPolicy::from_str("recursive").is_err());
    }

    #[test]
    fn test_serde_snake_case() {
        let json = serde_json::to_string(&SplitPolicy::ParenAware).unwrap();
        assert_eq!(json, "\"paren_aware\"");
        let policy: SplitPolicy = serde_json::from_str("\"naive\"").unwrap();
        assert_eq!(policy, SplitPolicy::Naive);
    }
}
