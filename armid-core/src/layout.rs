//! Declarative identifier layouts
//!
//! Every identifier kind is described by an [`IdLayout`]: an ordered list of
//! key/value elements. Keys are always fixed literals (`resourceGroups`,
//! `providers`, `applicationGateways`); values are either fixed literals
//! (`Microsoft.Network`) or variable segments bound to a struct field.
//!
//! The same engine parses, formats and describes every kind, so typed
//! identifiers only carry their layout and their field values.

use std::fmt::Write as _;

use crate::error::{IdError, IdResult};
use crate::resolver::{self, ParseMode};
use crate::tokenizer::Segments;

/// Keys an identifier may start with
pub const SCOPE_PREFIXES: &[&str] = &["subscriptions", "providers"];

/// The value half of a layout element
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment {
    /// A fixed literal, e.g. a provider namespace
    Static(&'static str),
    /// A caller-supplied value bound to a named field
    Variable {
        /// Field name (e.g. "resource_group_name")
        name: &'static str,
        /// Human-readable label (e.g. "Resource Group Name")
        label: &'static str,
    },
}

/// One key/value element of a layout
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Element {
    pub key: &'static str,
    pub value: Segment,
}

impl Element {
    pub const fn fixed(key: &'static str, value: &'static str) -> Self {
        Self {
            key,
            value: Segment::Static(value),
        }
    }

    pub const fn variable(key: &'static str, name: &'static str, label: &'static str) -> Self {
        Self {
            key,
            value: Segment::Variable { name, label },
        }
    }

    /// `subscriptions/{subscription_id}`
    pub const fn subscription() -> Self {
        Self::variable("subscriptions", "subscription_id", "Subscription")
    }

    /// `resourceGroups/{resource_group_name}`
    pub const fn resource_group() -> Self {
        Self::variable("resourceGroups", "resource_group_name", "Resource Group Name")
    }

    /// `providers/{namespace}`
    pub const fn provider(namespace: &'static str) -> Self {
        Self::fixed("providers", namespace)
    }
}

/// Ordered description of an identifier kind
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IdLayout {
    /// Registry name, e.g. "backend_settings_collection"
    pub kind: &'static str,
    /// Human-readable name, e.g. "Backend Settings Collection"
    pub label: &'static str,
    pub elements: &'static [Element],
    /// Whether this kind may be parsed case-insensitively
    pub insensitive: bool,
}

impl IdLayout {
    /// Variable segments in declared order as `(name, label)`
    pub fn variables(&self) -> impl Iterator<Item = (&'static str, &'static str)> + '_ {
        self.elements.iter().filter_map(|e| match e.value {
            Segment::Variable { name, label } => Some((name, label)),
            Segment::Static(_) => None,
        })
    }

    pub fn field_count(&self) -> usize {
        self.variables().count()
    }

    /// Parse `input`, returning variable values in declared order
    pub fn parse(&self, input: &str, mode: ParseMode) -> IdResult<Vec<String>> {
        if mode == ParseMode::Insensitive && !self.insensitive {
            return Err(IdError::InsensitiveUnsupported {
                kind: self.kind.to_string(),
            });
        }

        let mut segments = Segments::tokenize(input)?;
        check_scope(input, &segments, mode)?;

        let mut values = Vec::with_capacity(self.field_count());
        for element in self.elements {
            let resolved = resolver::resolve(&mut segments, element.key, mode)?;
            match element.value {
                Segment::Static(expected) => {
                    if !mode.matches(expected, resolved.value) {
                        return Err(IdError::UnexpectedValue {
                            segment: element.key.to_string(),
                            expected: expected.to_string(),
                            actual: resolved.value.to_string(),
                        });
                    }
                }
                Segment::Variable { .. } => values.push(resolved.value.to_string()),
            }
        }

        if !segments.is_fully_consumed() {
            return Err(IdError::UnexpectedSegments {
                input: input.to_string(),
                remaining: segments.leftover(),
            });
        }

        log::trace!("parsed {} ID {:?} ({:?})", self.kind, input, mode);
        Ok(values)
    }

    /// Build the canonical path from variable values in declared order
    pub fn format<S: AsRef<str>>(&self, values: &[S]) -> String {
        let mut values = values.iter().map(AsRef::as_ref);
        let mut out = String::new();
        for element in self.elements {
            let value = match element.value {
                Segment::Static(literal) => literal,
                Segment::Variable { .. } => values.next().unwrap_or_default(),
            };
            out.push('/');
            out.push_str(element.key);
            out.push('/');
            out.push_str(value);
        }
        out
    }

    /// Multi-line description for diagnostics
    pub fn describe<S: AsRef<str>>(&self, values: &[S]) -> String {
        let mut out = format!("{}:", self.label);
        for ((_, label), value) in self.variables().zip(values) {
            let _ = write!(out, "\n  {}: {:?}", label, value.as_ref());
        }
        out
    }

    /// Path template with placeholders, e.g. `/subscriptions/{subscription_id}/...`
    pub fn template(&self) -> String {
        let mut out = String::new();
        for element in self.elements {
            let _ = match element.value {
                Segment::Static(literal) => write!(out, "/{}/{}", element.key, literal),
                Segment::Variable { name, .. } => write!(out, "/{}/{{{}}}", element.key, name),
            };
        }
        out
    }

    /// Check a set of caller-supplied values before formatting them
    pub fn check_values<S: AsRef<str>>(&self, values: &[S]) -> IdResult<()> {
        let expected = self.field_count();
        if values.len() != expected {
            return Err(IdError::FieldCount {
                kind: self.kind.to_string(),
                expected,
                found: values.len(),
            });
        }
        for ((_, label), value) in self.variables().zip(values) {
            let value = value.as_ref();
            if value.is_empty() || value.contains(['/', '|']) {
                return Err(IdError::malformed(
                    value,
                    format!("{} must be a single non-empty path segment without `|`", label),
                ));
            }
        }
        Ok(())
    }
}

/// True when the layout's variable segments are exactly `fields`, in order.
///
/// Evaluated at compile time by `define_resource_id!`.
pub const fn fields_match(layout: &IdLayout, fields: &[&str]) -> bool {
    let mut e = 0;
    let mut f = 0;
    while e < layout.elements.len() {
        if let Segment::Variable { name, .. } = layout.elements[e].value {
            if f >= fields.len() || !str_eq(name, fields[f]) {
                return false;
            }
            f += 1;
        }
        e += 1;
    }
    f == fields.len()
}

const fn str_eq(a: &str, b: &str) -> bool {
    let (a, b) = (a.as_bytes(), b.as_bytes());
    if a.len() != b.len() {
        return false;
    }
    let mut i = 0;
    while i < a.len() {
        if a[i] != b[i] {
            return false;
        }
        i += 1;
    }
    true
}

/// Reject paths that do not start with a known scope key. Which scope a
/// kind lives under is enforced by resolving its first element.
fn check_scope(input: &str, segments: &Segments<'_>, mode: ParseMode) -> IdResult<()> {
    let first = segments.peek().map(|p| p.key).unwrap_or_default();
    if SCOPE_PREFIXES.iter().any(|prefix| mode.matches(prefix, first)) {
        Ok(())
    } else {
        Err(IdError::malformed(
            input,
            "ID must begin with /subscriptions/ or /providers/",
        ))
    }
}
