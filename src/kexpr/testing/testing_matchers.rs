//! Text matching for kexpr values
//!
//! A [`TextMatch`] checks the textual part of a value: the name of a key expression, the
//! content of a quoted string, or the text of a bare identifier. Numbers never match.

use crate::kexpr::ast::{ListItem, PropertyValue};

#[derive(Debug, Clone)]
pub enum TextMatch {
    Exact(String),
    StartsWith(String),
    Contains(String),
}

impl TextMatch {
    pub fn matches(&self, actual: &str) -> bool {
        match self {
            TextMatch::Exact(expected) => actual == expected,
            TextMatch::StartsWith(prefix) => actual.starts_with(prefix.as_str()),
            TextMatch::Contains(needle) => actual.contains(needle.as_str()),
        }
    }

    /// True if `item` is a string or identifier whose text matches
    pub fn matches_item(&self, item: &ListItem) -> bool {
        match item {
            ListItem::Text(text) | ListItem::Atom(text) => self.matches(text),
            ListItem::Number(_) => false,
        }
    }

    /// True if `value` is a scalar string or identifier whose text matches, or a list
    /// holding at least one matching item
    pub fn matches_value(&self, value: &PropertyValue) -> bool {
        match value {
            PropertyValue::Text(text) | PropertyValue::Atom(text) => self.matches(text),
            PropertyValue::List(items) => items.iter().any(|item| self.matches_item(item)),
            PropertyValue::Number(_) => false,
        }
    }

    /// Panic with `context` unless `actual` matches
    pub fn assert(&self, actual: &str, context: &str) {
        assert!(
            self.matches(actual),
            "{}: expected text {}, got {:?}",
            context,
            self,
            actual
        );
    }
}

impl std::fmt::Display for TextMatch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TextMatch::Exact(expected) => write!(f, "equal to {:?}", expected),
            TextMatch::StartsWith(prefix) => write!(f, "starting with {:?}", prefix),
            TextMatch::Contains(needle) => write!(f, "containing {:?}", needle),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scalar_values() {
        let contains = TextMatch::Contains("balance".to_string());
        assert!(contains.matches_value(&PropertyValue::text("load balancer")));
        assert!(!contains.matches_value(&PropertyValue::atom("edge")));
        assert!(!TextMatch::Exact("5".to_string()).matches_value(&PropertyValue::Number(5)));
    }

    #[test]
    fn test_list_values_match_any_item() {
        let list = PropertyValue::list([ListItem::Number(80), ListItem::atom("edge")]);
        assert!(TextMatch::StartsWith("ed".to_string()).matches_value(&list));
        assert!(!TextMatch::Exact("80".to_string()).matches_value(&list));
    }

    #[test]
    #[should_panic(expected = "expected text equal to \"b\"")]
    fn test_assert_reports_pattern() {
        TextMatch::Exact("b".to_string()).assert("a", "name");
    }
}
