//! Named option store with a fixed set of accepted names.

use std::collections::BTreeMap;

use serde_json::Value;

use crate::error::{Error, Result};

/// Option names accepted by [`ClientOptions`].
pub const DECLARED_OPTIONS: [&str; 4] = ["language", "region", "include_adult", "timezone"];

/// Client options restricted to [`DECLARED_OPTIONS`].
///
/// Every declared option starts as `null`. Reading or writing any other
/// name fails with [`Error::UndefinedOption`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientOptions {
    values: BTreeMap<&'static str, Value>,
}

impl Default for ClientOptions {
    fn default() -> Self {
        let values = DECLARED_OPTIONS
            .iter()
            .map(|name| (*name, Value::Null))
            .collect();
        Self { values }
    }
}

impl ClientOptions {
    /// Returns the value of a declared option.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UndefinedOption`] if `name` is not declared.
    pub fn get(&self, name: &str) -> Result<&Value> {
        self.values.get(name).ok_or_else(|| Error::UndefinedOption {
            name: String::from(name),
        })
    }

    /// Sets the value of a declared option.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UndefinedOption`] if `name` is not declared.
    pub fn set(&mut self, name: &str, value: impl Into<Value>) -> Result<()> {
        let slot = self
            .values
            .get_mut(name)
            .ok_or_else(|| Error::UndefinedOption {
                name: String::from(name),
            })?;
        *slot = value.into();
        Ok(())
    }

    /// Iterates over declared option names and their current values.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &Value)> {
        self.values.iter().map(|(name, value)| (*name, value))
    }
}
