use crate::wrapper::Wrapper;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::ops::{Deref, DerefMut};
use std::str::FromStr;

/// A value that decodes either from its native representation or from a string.
///
/// Useful for payloads that sometimes quote numbers: both `123` and `"123"` decode into a
/// `Lenient<i64>` holding `123`. Encoding always emits the native representation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Lenient<T>(T);

impl<T> Lenient<T> {
    pub const fn new(value: T) -> Self {
        Self(value)
    }

    pub fn into_inner(self) -> T {
        self.0
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Repr<T> {
    Native(T),
    Text(String),
}

impl<'de, T> Deserialize<'de> for Lenient<T>
where
    T: Deserialize<'de> + FromStr,
    T::Err: fmt::Display,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Repr::<T>::deserialize(deserializer)? {
            Repr::Native(value) => Ok(Self(value)),
            Repr::Text(text) => text
                .parse::<T>()
                .map(Self)
                .map_err(|e| D::Error::custom(format!("cannot convert {text:?}: {e}"))),
        }
    }
}

impl<T: Clone> Wrapper for Lenient<T> {
    type Value = T;

    fn value(&self) -> T {
        self.0.clone()
    }

    fn assign(&mut self, value: T) {
        self.0 = value;
    }
}

impl<T> From<T> for Lenient<T> {
    fn from(value: T) -> Self {
        Self(value)
    }
}

impl<T> Deref for Lenient<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.0
    }
}

impl<T> DerefMut for Lenient<T> {
    fn deref_mut(&mut self) -> &mut T {
        &mut self.0
    }
}

impl<T: fmt::Display> fmt::Display for Lenient<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
