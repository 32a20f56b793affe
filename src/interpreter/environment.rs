use std::collections::{BTreeMap, HashMap};

use crate::interpreter::value::Value;

/// The variable environment of a session.
///
/// Numeric and textual variables share one namespace: each name maps to a
/// single tagged [`Value`]. Writing a name therefore replaces whatever it held
/// before, whatever its type, and a name can never be visible as both a
/// number and a text at the same time.
///
/// The two-map view used by the state file is available through
/// [`from_maps`](Self::from_maps), [`numbers`](Self::numbers) and
/// [`strings`](Self::strings).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Environment {
    variables: HashMap<String, Value>,
}

impl Environment {
    /// Creates an empty environment.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds an environment from separate numeric and textual maps.
    ///
    /// Lookups consult numbers before text, so if a name appears in both maps
    /// the number is kept and the stale text is dropped.
    ///
    /// # Example
    /// ```
    /// use std::collections::HashMap;
    ///
    /// use tally::interpreter::{environment::Environment, value::Value};
    ///
    /// let numbers = HashMap::from([("x".to_string(), 1.0)]);
    /// let strings = HashMap::from([("x".to_string(), "old".to_string()),
    ///                              ("s".to_string(), "hi".to_string())]);
    /// let env = Environment::from_maps(numbers, strings);
    ///
    /// assert_eq!(env.get("x"), Some(&Value::Number(1.0)));
    /// assert!(env.strings().get("x").is_none());
    /// assert_eq!(env.len(), 2);
    /// ```
    #[must_use]
    pub fn from_maps<N, S>(numbers: N, strings: S) -> Self
        where N: IntoIterator<Item = (String, f64)>,
              S: IntoIterator<Item = (String, String)>
    {
        let mut variables: HashMap<String, Value> =
            strings.into_iter()
                   .map(|(name, text)| (name, Value::Text(text)))
                   .collect();
        variables.extend(numbers.into_iter()
                                .map(|(name, number)| (name, Value::Number(number))));
        Self { variables }
    }

    /// Looks up a variable.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.variables.get(name)
    }

    /// Stores `value` under `name`, returning the previous value of any type.
    pub fn assign(&mut self, name: impl Into<String>, value: Value) -> Option<Value> {
        self.variables.insert(name.into(), value)
    }

    /// The numeric variables, sorted by name.
    #[must_use]
    pub fn numbers(&self) -> BTreeMap<String, f64> {
        self.variables
            .iter()
            .filter_map(|(name, value)| match value {
                Value::Number(n) => Some((name.clone(), *n)),
                Value::Text(_) => None,
            })
            .collect()
    }

    /// The textual variables, sorted by name.
    #[must_use]
    pub fn strings(&self) -> BTreeMap<String, String> {
        self.variables
            .iter()
            .filter_map(|(name, value)| value.as_text().map(|s| (name.clone(), s.to_string())))
            .collect()
    }

    /// Number of defined variables.
    #[must_use]
    pub fn len(&self) -> usize {
        self.variables.len()
    }

    /// Returns `true` if no variable is defined.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }
}
