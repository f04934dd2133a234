//! Identifier traits
//!
//! [`Identifier`] is the object-safe view every identifier offers (used by
//! the registry and diagnostics). [`ParseId`] and [`ParseIdInsensitively`]
//! are the parsing entry points; only kinds declared `insensitive` implement
//! the latter. [`ResourceId`] ties a struct to its [`IdLayout`].

use std::fmt;

use crate::error::IdResult;
use crate::layout::IdLayout;

/// Object-safe view of a parsed identifier
pub trait Identifier: fmt::Debug + Send + Sync {
    /// Registry name of the identifier kind
    fn kind(&self) -> &'static str;

    /// Canonical path form
    fn id(&self) -> String;

    /// Human-readable multi-line description
    fn describe(&self) -> String;

    /// Field labels and values in declared order
    fn fields(&self) -> Vec<(&'static str, String)>;
}

/// Strict parsing from the canonical string form
pub trait ParseId: Identifier + Sized {
    /// Registry name of the identifier kind
    const KIND: &'static str;

    /// Human-readable name used in error messages
    const LABEL: &'static str;

    fn parse_id(input: &str) -> IdResult<Self>;
}

/// Case-insensitive parsing, for normalizing identifiers returned by the API
pub trait ParseIdInsensitively: ParseId {
    fn parse_id_insensitively(input: &str) -> IdResult<Self>;
}

/// An identifier backed by a declarative layout
pub trait ResourceId: ParseId {
    const LAYOUT: &'static IdLayout;

    /// Build from variable values in declared order.
    ///
    /// The values must come from [`IdLayout::parse`] or have passed
    /// [`IdLayout::check_values`]; nothing is checked here. Use
    /// [`ResourceId::try_from_values`] for caller-supplied values.
    fn from_values(values: Vec<String>) -> Self;

    /// Check caller-supplied values against the layout, then build
    fn try_from_values<S: AsRef<str>>(values: &[S]) -> IdResult<Self> {
        Self::LAYOUT.check_values(values)?;
        Ok(Self::from_values(
            values.iter().map(|v| v.as_ref().to_string()).collect(),
        ))
    }

    /// Variable values in declared order
    fn values(&self) -> Vec<&str>;
}
