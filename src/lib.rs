//! Additional, more convenient, functionality layered on top of
//! [`parco_core`].
//!
//! This crate:
//!
//! * Re-exports all of [`parco_core`], the combinator algebra.
//!
//! * Provides an [`Error`] type and the [`parse_all`](common::parse_all)
//! driver, for when a parser must match a whole input and a failure should be
//! reported as an error instead of a bare no-match.
//!
//! * Provides [ready-made grammars](common/index.html) built with the algebra:
//! a JSON decoder producing [`serde_json::Value`]s, a balanced-parenthesis
//! matcher, and a `{{ key }}` template interpolator.
//!
//! [`parco_core`]: ../parco_core/index.html
//! [`serde_json::Value`]: https://docs.rs/serde_json/1/serde_json/enum.Value.html

#![forbid(unsafe_code)]


// Re-export everything from the core crate.
#[doc(no_inline)]
pub use parco_core::*;

mod error;
pub use error::{Error, Result};

/// Grammars and drivers, built from the core algebra, provided for ready use.
pub mod common {
    mod driver;
    pub use driver::parse_all;

    pub mod json;
    pub mod parens;
    pub mod interpolate;
}
