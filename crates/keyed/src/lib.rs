//! Enum-keyed access for associative containers.
//!
//! String-keyed maps are usually addressed with string literals scattered through the code.
//! This crate lets a closed enumeration stand in for those literals: every variant carries a
//! canonical label and the [`EnumKeyedExt`] extension trait reads and writes through it.
//!
//! ## Key-type gating
//!
//! The accessor is generic over every [`Associative`] container, but it only resolves keys for
//! containers whose key type is string-valued (`String` or `&'static str`). On any other key
//! type reads return `None` and writes are silently ignored, even if a numeric key with the
//! same text exists. Generic code that does not statically know the key type can therefore call
//! it without guards.
//!
//! ## Example
//!
//! ```rust
//! use std::collections::HashMap;
//! use tether_keyed::prelude::*;
//!
//! #[derive(Clone, Copy, IntoStaticStr)]
//! enum JsonKey {
//!     #[strum(serialize = "id")]
//!     Identifier,
//!     #[strum(serialize = "token")]
//!     Token,
//! }
//!
//! let mut user = HashMap::from([
//!     ("id".to_owned(), "1".to_owned()),
//!     ("token".to_owned(), "tok".to_owned()),
//! ]);
//!
//! assert_eq!(user.get_by(JsonKey::Token).map(String::as_str), Some("tok"));
//!
//! user.set_by(JsonKey::Identifier, "99".to_owned());
//! assert_eq!(user["id"], "99");
//!
//! let mut by_id: HashMap<u32, String> = HashMap::new();
//! by_id.set_by(JsonKey::Identifier, "ignored".to_owned());
//! assert!(by_id.is_empty());
//! ```

mod container;
mod extensions;
mod key;
mod view;

pub use container::Associative;
pub use extensions::EnumKeyedExt;
pub use key::EnumKey;
pub use strum_macros::IntoStaticStr;
pub use view::{EnumKeyedMap, EnumKeyedRef};

pub mod prelude {
    pub use crate::container::Associative;
    pub use crate::extensions::EnumKeyedExt;
    pub use crate::key::EnumKey;
    pub use crate::view::{EnumKeyedMap, EnumKeyedRef};
    pub use strum_macros::IntoStaticStr;
}
