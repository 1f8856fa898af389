//! Persisted generator preferences
//!
//! The host stores the serialized form between sessions without looking
//! inside it. Loaded once at session start, mutated whenever the user changes
//! a setting, exported once at session end.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::GeneratorResult;

/// Preference key holding the selected density index
pub const DENSITY_KEY: &str = "Density";

/// String-keyed settings
///
/// Values of any JSON type are kept as-is, so keys written by the host or by
/// other versions survive a round trip. Only integer reads are interpreted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Preferences {
    values: BTreeMap<String, Value>,
}

impl Preferences {
    pub fn new() -> Self {
        Self::default()
    }

    /// Integer value for `key`, or `default` when absent, not an integer, or
    /// outside the `i32` range
    ///
    /// # Example
    /// ```
    /// use galaxy_generator::Preferences;
    ///
    /// let mut prefs = Preferences::new();
    /// assert_eq!(prefs.get_int("Density", 2), 2);
    ///
    /// prefs.set("Density", 4);
    /// assert_eq!(prefs.get_int("Density", 2), 4);
    /// ```
    pub fn get_int(&self, key: &str, default: i32) -> i32 {
        self.values
            .get(key)
            .and_then(Value::as_i64)
            .and_then(|v| i32::try_from(v).ok())
            .unwrap_or(default)
    }

    pub fn set(&mut self, key: impl Into<String>, value: i32) {
        self.values.insert(key.into(), Value::from(value));
    }

    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Serialize to the opaque blob the host persists
    pub fn to_json(&self) -> GeneratorResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Restore from a blob produced by [`Preferences::to_json`]
    pub fn from_json(json: &str) -> GeneratorResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
