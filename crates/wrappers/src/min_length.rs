use crate::wrapper::Wrapper;
use serde::{Serialize, Serializer};
use std::fmt;
use tracing::debug;

/// A string that only accepts writes of at least `min_length` characters.
///
/// Shorter writes are ignored and the previous value is kept. The initial value is the
/// designated default and is stored as given.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MinLength {
    value: String,
    min_length: usize,
}

impl MinLength {
    pub fn new(initial: impl Into<String>, min_length: usize) -> Self {
        Self { value: initial.into(), min_length }
    }

    /// Stores `value` if it is long enough.
    ///
    /// # Results
    /// `true` if the value was stored, `false` if it was discarded.
    pub fn set(&mut self, value: impl Into<String>) -> bool {
        let value = value.into();
        let len = value.chars().count();
        if len < self.min_length {
            debug!(len, min_length = self.min_length, "discarding value shorter than minimum length");
            return false;
        }
        self.value = value;
        true
    }

    #[must_use]
    pub fn get(&self) -> &str {
        &self.value
    }

    #[must_use]
    pub const fn min_length(&self) -> usize {
        self.min_length
    }

    #[must_use]
    pub fn into_inner(self) -> String {
        self.value
    }
}

impl Wrapper for MinLength {
    type Value = String;

    fn value(&self) -> String {
        self.value.clone()
    }

    fn assign(&mut self, value: String) {
        self.set(value);
    }
}

impl AsRef<str> for MinLength {
    fn as_ref(&self) -> &str {
        &self.value
    }
}

impl fmt::Display for MinLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

impl Serialize for MinLength {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.value)
    }
}
