//! Value wrappers that keep their contents valid.
//!
//! Each wrapper owns a single value and decides, on every write, what actually gets stored:
//!
//! * [`Constrained`] clamps ordered values into an inclusive range.
//! * [`MinLength`] ignores strings shorter than a minimum length.
//! * [`Email`] only keeps syntactically valid e-mail addresses.
//! * [`Lenient`] decodes a value either natively or from its string form.
//!
//! Validation happens on write, so the stored value is always the effective value. All of them
//! implement the [`Wrapper`] capability, which lets an owning structure treat them uniformly.
//!
//! ## Example
//!
//! ```rust
//! use tether_wrappers::prelude::*;
//!
//! struct BankCard {
//!     cvv: MinLength,
//!     score: Constrained<i32>,
//! }
//!
//! # fn main() -> Result<(), WrapperError> {
//! let mut card = BankCard {
//!     cvv: MinLength::new("000", 3),
//!     score: Constrained::new(150, 0, 100)?,
//! };
//!
//! assert_eq!(*card.score.get(), 100);
//!
//! card.cvv.set("12");
//! assert_eq!(card.cvv.get(), "000");
//!
//! card.cvv.set("1234");
//! assert_eq!(card.cvv.get(), "1234");
//! # Ok(())
//! # }
//! ```

mod constrained;
mod email;
mod error;
mod lenient;
mod min_length;
mod wrapper;

pub use constrained::Constrained;
pub use email::Email;
pub use error::{WrapperError, WrapperErrorExt};
pub use lenient::Lenient;
pub use min_length::MinLength;
pub use wrapper::Wrapper;

pub mod prelude {
    pub use crate::constrained::Constrained;
    pub use crate::email::Email;
    pub use crate::error::{WrapperError, WrapperErrorExt};
    pub use crate::lenient::Lenient;
    pub use crate::min_length::MinLength;
    pub use crate::wrapper::Wrapper;
}
