//! Key expression element definition
//!
//! A key expression is a named entity with an ordered property list:
//!
//! ```text
//! server --> port=80 host="example.org" ;
//! ```
//!
//! Property names are not unique. Every accessor and mutator acts on the *first* property
//! with the requested name, in list order.

use super::property::Property;
use super::value::PropertyValue;
use crate::kexpr::ast::error::AstError;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;

static IDENTIFIER_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-zA-Z_][a-zA-Z_0-9]*$").unwrap());

/// Check whether `name` is a valid key expression or property name
pub fn is_identifier(name: &str) -> bool {
    IDENTIFIER_REGEX.is_match(name)
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct KeyExpression {
    pub name: String,
    pub properties: Vec<Property>,
}

impl KeyExpression {
    /// Build a key expression without validating its name
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            properties: Vec::new(),
        }
    }

    /// Create an empty key expression for programmatic construction.
    ///
    /// Fails if `name` is not an identifier, since the result could not be serialized
    /// back into parseable text.
    pub fn create(name: impl Into<String>) -> Result<Self, AstError> {
        let name = name.into();
        if !is_identifier(&name) {
            return Err(AstError::InvalidName(name));
        }
        Ok(Self::new(name))
    }

    pub fn with_properties(name: impl Into<String>, properties: Vec<Property>) -> Self {
        Self {
            name: name.into(),
            properties,
        }
    }

    /// Builder form of appending a property (duplicates are kept)
    pub fn with_property(mut self, name: impl Into<String>, value: impl Into<PropertyValue>) -> Self {
        self.properties.push(Property::new(name, value));
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn properties(&self) -> &[Property] {
        &self.properties
    }

    fn position_of(&self, name: &str) -> Option<usize> {
        self.properties.iter().position(|p| p.name == name)
    }

    pub fn has_property(&self, name: &str) -> bool {
        self.position_of(name).is_some()
    }

    /// Value of the first property called `name`
    pub fn get_property(&self, name: &str) -> Option<&PropertyValue> {
        self.properties
            .iter()
            .find(|p| p.name == name)
            .map(|p| &p.value)
    }

    pub fn get_property_mut(&mut self, name: &str) -> Option<&mut PropertyValue> {
        self.properties
            .iter_mut()
            .find(|p| p.name == name)
            .map(|p| &mut p.value)
    }

    /// Replace the value of the first property called `name`, keeping its position.
    /// Appends a new property if there is none.
    pub fn set_property(&mut self, name: &str, value: impl Into<PropertyValue>) {
        let value = value.into();
        match self.get_property_mut(name) {
            Some(existing) => *existing = value,
            None => self.properties.push(Property::new(name, value)),
        }
    }

    /// Remove the first property called `name` and return its value.
    ///
    /// Later duplicates are left in place; call again to remove them.
    pub fn delete_property(&mut self, name: &str) -> Option<PropertyValue> {
        let index = self.position_of(name)?;
        Some(self.properties.remove(index).value)
    }
}

impl fmt::Display for KeyExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "KeyExpression({}, {} properties)",
            self.name,
            self.properties.len()
        )
    }
}
