//! # Wrapper Errors
//!
//! This module defines the [`WrapperError`] enum reported when a wrapper cannot be constructed.
//! Once constructed, every wrapper operation is total.

use std::borrow::Cow;

/// A specialized [`WrapperError`] enum for wrapper construction failures.
#[tether_derive::tether_error]
pub enum WrapperError {
    /// The lower bound is greater than the upper bound, or the bounds cannot be ordered.
    #[error("Invalid range{}: {message}", format_context(.context))]
    InvalidRange { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}
