//! Classification tags for line items
//!
//! Priority decides which cut bucket an item falls into; flexibility decides
//! whether the auto-adjuster may touch an essential item.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How important a line item is to the household
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Priority {
    Critical,
    Essential,
    Discretionary,
    #[serde(rename = "Nice-to-have", alias = "NiceToHave")]
    NiceToHave,
    Investment,
}

impl Priority {
    /// All priorities, most important first
    pub fn all() -> &'static [Self] {
        &[
            Self::Critical,
            Self::Essential,
            Self::Discretionary,
            Self::NiceToHave,
            Self::Investment,
        ]
    }

    /// Display name
    pub fn name(&self) -> &'static str {
        match self {
            Self::Critical => "Critical",
            Self::Essential => "Essential",
            Self::Discretionary => "Discretionary",
            Self::NiceToHave => "Nice-to-have",
            Self::Investment => "Investment",
        }
    }

    /// Items cut by the essential percentage
    pub fn is_essential_bucket(&self) -> bool {
        matches!(self, Self::Critical | Self::Essential)
    }

    /// Items cut by the discretionary percentage
    pub fn is_discretionary_bucket(&self) -> bool {
        matches!(
            self,
            Self::Discretionary | Self::NiceToHave | Self::Investment
        )
    }

    /// Items the auto-adjuster shrinks first
    pub fn is_optional_spending(&self) -> bool {
        matches!(self, Self::Discretionary | Self::NiceToHave)
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

impl FromStr for Priority {
    type Err = ParseTagError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "critical" => Ok(Self::Critical),
            "essential" => Ok(Self::Essential),
            "discretionary" => Ok(Self::Discretionary),
            "nicetohave" => Ok(Self::NiceToHave),
            "investment" => Ok(Self::Investment),
            _ => Err(ParseTagError::new("priority", s)),
        }
    }
}

/// How easily an item's amount can be reduced without hardship
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
pub enum Flexibility {
    #[default]
    None,
    Low,
    Medium,
    High,
}

impl Flexibility {
    /// All flexibility levels, least flexible first
    pub fn all() -> &'static [Self] {
        &[Self::None, Self::Low, Self::Medium, Self::High]
    }

    /// Display name
    pub fn name(&self) -> &'static str {
        match self {
            Self::None => "None",
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }

    /// Medium and High items can absorb an automatic essential cut
    pub fn is_adjustable(&self) -> bool {
        matches!(self, Self::Medium | Self::High)
    }
}

impl fmt::Display for Flexibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

impl FromStr for Flexibility {
    type Err = ParseTagError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "none" => Ok(Self::None),
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            _ => Err(ParseTagError::new("flexibility", s)),
        }
    }
}

/// Which half of the catalog an item belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    Grocery,
    Bill,
}

impl ItemKind {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Grocery => "Grocery",
            Self::Bill => "Bill",
        }
    }
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

impl FromStr for ItemKind {
    type Err = ParseTagError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "grocery" | "groceries" => Ok(Self::Grocery),
            "bill" | "bills" => Ok(Self::Bill),
            _ => Err(ParseTagError::new("kind", s)),
        }
    }
}

/// Lowercase and drop separators so "Nice-to-have", "nice_to_have" and
/// "NiceToHave" all compare equal
fn normalize(s: &str) -> String {
    s.trim()
        .chars()
        .filter(|c| !matches!(c, '-' | '_' | ' '))
        .flat_map(char::to_lowercase)
        .collect()
}

/// Error for an unrecognised tag value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseTagError {
    tag: &'static str,
    value: String,
}

impl ParseTagError {
    pub(crate) fn new(tag: &'static str, value: &str) -> Self {
        Self {
            tag,
            value: value.to_string(),
        }
    }
}

impl fmt::Display for ParseTagError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unknown {}: '{}'", self.tag, self.value)
    }
}

impl std::error::Error for ParseTagError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_priority_buckets() {
        assert!(Priority::Critical.is_essential_bucket());
        assert!(Priority::Essential.is_essential_bucket());
        assert!(Priority::Investment.is_discretionary_bucket());
        assert!(Priority::NiceToHave.is_optional_spending());
        assert!(!Priority::Investment.is_optional_spending());
    }

    #[test]
    fn test_priority_parse() {
        assert_eq!("Nice-to-have".parse::<Priority>(), Ok(Priority::NiceToHave));
        assert_eq!("nice_to_have".parse::<Priority>(), Ok(Priority::NiceToHave));
        assert_eq!("CRITICAL".parse::<Priority>(), Ok(Priority::Critical));
        let err = "urgent".parse::<Priority>().unwrap_err();
        assert_eq!(err.to_string(), "Unknown priority: 'urgent'");
    }

    #[test]
    fn test_priority_serde_name() {
        let json = serde_json::to_string(&Priority::NiceToHave).unwrap();
        assert_eq!(json, "\"Nice-to-have\"");
        let back: Priority = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Priority::NiceToHave);
    }

    #[test]
    fn test_flexibility() {
        assert!(Flexibility::Medium.is_adjustable());
        assert!(Flexibility::High.is_adjustable());
        assert!(!Flexibility::Low.is_adjustable());
        assert_eq!("high".parse::<Flexibility>(), Ok(Flexibility::High));
    }

    #[test]
    fn test_item_kind_parse() {
        assert_eq!("Groceries".parse::<ItemKind>(), Ok(ItemKind::Grocery));
        assert_eq!("bill".parse::<ItemKind>(), Ok(ItemKind::Bill));
        assert!("rent".parse::<ItemKind>().is_err());
    }
}
