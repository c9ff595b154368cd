#![allow(unreachable_pub)]

//! # Macros
//!
//! Procedural macros shared by the tether crates.
//!
//! ## Usage
//! Depend on the crate from another workspace member:
//! ```toml
//! [dependencies]
//! tether-derive.workspace = true
//! thiserror.workspace = true
//! ```
//!
//! The generated code refers to `::thiserror`, so consumers must depend on it directly.

mod error;

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

/// Turns a plain enum into a context-aware error type.
///
/// # Generated Items
///
/// * `#[derive(Debug, thiserror::Error)]` unless already derived.
/// * `<Name>Ext<T>` trait adding `.context(...)` to `Result<T, Name>` and, for every variant
///   with a `source` field, to `Result<T, Source>`.
/// * `From<Source>` for each variant with a `source` field (or a field marked `#[source]` /
///   `#[from]`).
/// * `From<&'static str>` and `From<String>` when an `Internal { message, context }` variant
///   exists.
/// * A private `format_context` helper used inside `#[error(...)]` strings.
///
/// # Requirements
///
/// Variants must use named fields. A variant wrapping a source error must also carry
/// `context: Option<Cow<'static, str>>`.
///
/// # Example
///
/// ```rust,ignore
/// use std::borrow::Cow;
/// use tether_derive::tether_error;
///
/// #[tether_error]
/// pub enum ConfigError {
///     #[error("Config error{}: {source}", format_context(.context))]
///     Config { source: config::ConfigError, context: Option<Cow<'static, str>> },
/// }
///
/// fn load() -> Result<Settings, ConfigError> {
///     builder.build().context("Failed to build config")?.try_deserialize().context("Bad shape")
/// }
/// ```
#[proc_macro_attribute]
pub fn tether_error(_args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);
    error::expand(input).unwrap_or_else(syn::Error::into_compile_error).into()
}
