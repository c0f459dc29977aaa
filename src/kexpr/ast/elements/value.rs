//! Property values
//!
//! A property value is one of four closed kinds. List elements get their own enum so a
//! nested list cannot be represented at all.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The value on the right-hand side of `name=value`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PropertyValue {
    /// Signed integer, `a=-3`
    Number(i64),
    /// Bare identifier, `a=foo`
    Atom(String),
    /// Quoted string, `a="foo bar"`
    Text(String),
    /// Flat list, `a=[1 foo "bar"]`
    List(Vec<ListItem>),
}

/// A single element of a list value
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ListItem {
    Number(i64),
    Atom(String),
    Text(String),
}

impl PropertyValue {
    pub fn atom(value: impl Into<String>) -> Self {
        PropertyValue::Atom(value.into())
    }

    pub fn text(value: impl Into<String>) -> Self {
        PropertyValue::Text(value.into())
    }

    pub fn list<I>(items: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<ListItem>,
    {
        PropertyValue::List(items.into_iter().map(Into::into).collect())
    }

    pub fn as_number(&self) -> Option<i64> {
        match self {
            PropertyValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_atom(&self) -> Option<&str> {
        match self {
            PropertyValue::Atom(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            PropertyValue::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[ListItem]> {
        match self {
            PropertyValue::List(items) => Some(items),
            _ => None,
        }
    }

    /// Name of the value kind, for diagnostics and debug output
    pub fn kind(&self) -> &'static str {
        match self {
            PropertyValue::Number(_) => "number",
            PropertyValue::Atom(_) => "atom",
            PropertyValue::Text(_) => "text",
            PropertyValue::List(_) => "list",
        }
    }
}

impl ListItem {
    pub fn atom(value: impl Into<String>) -> Self {
        ListItem::Atom(value.into())
    }

    pub fn text(value: impl Into<String>) -> Self {
        ListItem::Text(value.into())
    }
}

impl From<i64> for PropertyValue {
    fn from(value: i64) -> Self {
        PropertyValue::Number(value)
    }
}

impl From<ListItem> for PropertyValue {
    fn from(item: ListItem) -> Self {
        match item {
            ListItem::Number(n) => PropertyValue::Number(n),
            ListItem::Atom(s) => PropertyValue::Atom(s),
            ListItem::Text(s) => PropertyValue::Text(s),
        }
    }
}

impl From<Vec<ListItem>> for PropertyValue {
    fn from(items: Vec<ListItem>) -> Self {
        PropertyValue::List(items)
    }
}

impl From<i64> for ListItem {
    fn from(value: i64) -> Self {
        ListItem::Number(value)
    }
}

impl fmt::Display for ListItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ListItem::Number(n) => write!(f, "{}", n),
            ListItem::Atom(s) => write!(f, "{}", s),
            ListItem::Text(s) => write!(f, "\"{}\"", s),
        }
    }
}

impl fmt::Display for PropertyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropertyValue::Number(n) => write!(f, "{}", n),
            PropertyValue::Atom(s) => write!(f, "{}", s),
            PropertyValue::Text(s) => write!(f, "\"{}\"", s),
            PropertyValue::List(items) => {
                write!(f, "[")?;
                for item in items {
                    write!(f, "{} ", item)?;
                }
                write!(f, "]")
            }
        }
    }
}
