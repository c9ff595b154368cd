//! Facade crate for the tether utilities.
//! Re-exports the enum-keyed accessor and the value wrappers, and adds configuration loading
//! for named constraint profiles. Keep this crate thin: it composes the other crates.
//!
//! ## Usage
//!
//! ```rust
//! use std::collections::HashMap;
//! use tether::prelude::*;
//!
//! #[derive(Clone, Copy, IntoStaticStr)]
//! #[strum(serialize_all = "snake_case")]
//! enum Field {
//!     Score,
//!     Cvv,
//! }
//!
//! # fn main() -> Result<(), WrapperError> {
//! let mut record: HashMap<String, i64> = HashMap::new();
//! let score = Constrained::new(150, 0, 100)?;
//!
//! record.set_by(Field::Score, *score.get());
//! assert_eq!(record.get_by(Field::Score), Some(&100));
//! assert!(!record.contains_by(Field::Cvv));
//! # Ok(())
//! # }
//! ```

pub mod config;

pub use tether_keyed as keyed;
pub use tether_wrappers as wrappers;

pub mod prelude {
    pub use crate::config::{BoundsConfig, ConfigError, WrappersConfig, load_config};
    pub use tether_keyed::prelude::*;
    pub use tether_wrappers::prelude::*;
}
