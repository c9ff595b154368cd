use std::collections::HashMap;
use tether_keyed::IntoStaticStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, IntoStaticStr)]
pub enum JsonKey {
    #[strum(serialize = "id")]
    Identifier,
    #[strum(serialize = "token")]
    Token,
    #[strum(serialize = "first_name")]
    FirstName,
    #[strum(serialize = "last_name")]
    LastName,
}

pub const ALL_KEYS: [JsonKey; 4] =
    [JsonKey::Identifier, JsonKey::Token, JsonKey::FirstName, JsonKey::LastName];

/// Builds the user record used across the keyed tests.
#[must_use]
pub fn user_record() -> HashMap<String, String> {
    HashMap::from([
        ("first_name".to_owned(), "Cong".to_owned()),
        ("last_name".to_owned(), "Le".to_owned()),
        ("token".to_owned(), "sdadawfvsasd34123daaee".to_owned()),
        ("id".to_owned(), "24243123123232123".to_owned()),
    ])
}
