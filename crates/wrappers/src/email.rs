use crate::wrapper::Wrapper;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use tracing::debug;

static EMAIL: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^[A-Z0-9a-z._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,64}$").ok());

/// An optional e-mail address that is only kept when it is syntactically valid.
///
/// Writing an invalid address clears the wrapper. Two wrappers compare equal when their
/// addresses match ignoring ASCII case.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(from = "Option<String>", into = "Option<String>")]
pub struct Email {
    value: Option<String>,
}

impl Email {
    #[must_use]
    pub fn new(value: Option<String>) -> Self {
        let mut email = Self::default();
        email.set(value);
        email
    }

    /// Returns `true` if `candidate` looks like an e-mail address.
    #[must_use]
    pub fn is_valid(candidate: &str) -> bool {
        EMAIL.as_ref().is_some_and(|re| re.is_match(candidate))
    }

    pub fn set(&mut self, value: Option<String>) {
        self.value = value.filter(|v| {
            let valid = Self::is_valid(v);
            if !valid {
                debug!("clearing invalid e-mail address");
            }
            valid
        });
    }

    #[must_use]
    pub fn get(&self) -> Option<&str> {
        self.value.as_deref()
    }
}

impl Wrapper for Email {
    type Value = Option<String>;

    fn value(&self) -> Option<String> {
        self.value.clone()
    }

    fn assign(&mut self, value: Option<String>) {
        self.set(value);
    }
}

impl PartialEq for Email {
    fn eq(&self, other: &Self) -> bool {
        match (&self.value, &other.value) {
            (Some(a), Some(b)) => a.eq_ignore_ascii_case(b),
            (None, None) => true,
            _ => false,
        }
    }
}

impl Eq for Email {}

impl From<Option<String>> for Email {
    fn from(value: Option<String>) -> Self {
        Self::new(value)
    }
}

impl From<Email> for Option<String> {
    fn from(email: Email) -> Self {
        email.value
    }
}
