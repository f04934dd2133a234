//! Compound identifiers
//!
//! Some relationships have no addressable path of their own (e.g. a NAT
//! gateway associated with a public IP). They are keyed by joining the two
//! sides with `|`, which never appears in a native path.

use crate::error::{IdError, IdResult};
use crate::id::{Identifier, ParseId, ParseIdInsensitively};

pub const DELIMITER: char = '|';

/// Split a compound identifier into exactly two parts
pub fn split<'a>(input: &'a str, first: &str, second: &str) -> IdResult<(&'a str, &'a str)> {
    let parts: Vec<&str> = input.split(DELIMITER).collect();
    match parts.as_slice() {
        [a, b] => Ok((*a, *b)),
        _ => Err(IdError::AssociationShape {
            input: input.to_string(),
            expected: format!("{{{} ID}}{}{{{} ID}}", first, DELIMITER, second),
            found: parts.len(),
        }),
    }
}

/// Strictly parse both sides of a compound identifier
pub fn parse_pair<A: ParseId, B: ParseId>(input: &str) -> IdResult<(A, B)> {
    parse_pair_with(input, A::parse_id, B::parse_id)
}

/// Parse both sides of a compound identifier ignoring fixed-segment casing
pub fn parse_pair_insensitively<A, B>(input: &str) -> IdResult<(A, B)>
where
    A: ParseIdInsensitively,
    B: ParseIdInsensitively,
{
    parse_pair_with(input, A::parse_id_insensitively, B::parse_id_insensitively)
}

fn parse_pair_with<A: ParseId, B: ParseId>(
    input: &str,
    parse_a: fn(&str) -> IdResult<A>,
    parse_b: fn(&str) -> IdResult<B>,
) -> IdResult<(A, B)> {
    let (a, b) = split(input, A::LABEL, B::LABEL)?;
    let a = parse_a(a).map_err(|e| IdError::association_part(A::LABEL, e))?;
    let b = parse_b(b).map_err(|e| IdError::association_part(B::LABEL, e))?;
    Ok((a, b))
}

/// Join two identifiers into a compound identifier
pub fn format_pair(a: &dyn Identifier, b: &dyn Identifier) -> String {
    format!("{}{}{}", a.id(), DELIMITER, b.id())
}

/// Describe both sides under a common heading
pub fn describe_pair(label: &str, a: &dyn Identifier, b: &dyn Identifier) -> String {
    let mut out = format!("{}:", label);
    for side in [a, b] {
        for line in side.describe().lines() {
            out.push_str("\n  ");
            out.push_str(line);
        }
    }
    out
}

/// Declare a compound identifier joining two typed identifiers with `|`.
///
/// `case: insensitive` additionally generates `parse_insensitively`, which
/// requires both sides to support insensitive parsing.
#[macro_export]
macro_rules! define_association_id {
    (@case insensitive $name:ident) => {
        impl $name {
            /// Parses an API-returned compound identifier, ignoring the
            /// casing of fixed segments on both sides.
            pub fn parse_insensitively(input: &str) -> $crate::IdResult<Self> {
                let (first, second) = $crate::association::parse_pair_insensitively(input)?;
                Ok(Self::new(first, second))
            }
        }

        impl $crate::ParseIdInsensitively for $name {
            fn parse_id_insensitively(input: &str) -> $crate::IdResult<Self> {
                Self::parse_insensitively(input)
            }
        }
    };
    (@case strict $name:ident) => {};

    (
        $(#[$meta:meta])*
        pub struct $name:ident {
            kind: $kind:literal,
            label: $label:literal,
            case: $case:ident,
            first: $first:ident: $first_ty:ty,
            second: $second:ident: $second_ty:ty $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name {
            pub $first: $first_ty,
            pub $second: $second_ty,
        }

        impl $name {
            /// Registry name of this compound identifier.
            pub const KIND: &'static str = $kind;

            /// Whether `parse_insensitively` is available.
            pub const INSENSITIVE: bool = $crate::define_resource_id!(@insensitive $case);

            pub fn new($first: $first_ty, $second: $second_ty) -> Self {
                Self { $first, $second }
            }

            /// Splits on `|` and strictly parses both sides.
            pub fn parse(input: &str) -> $crate::IdResult<Self> {
                let (first, second) = $crate::association::parse_pair(input)?;
                Ok(Self::new(first, second))
            }

            /// Formats both sides joined with `|`.
            pub fn id(&self) -> String {
                $crate::association::format_pair(&self.$first, &self.$second)
            }

            pub fn describe(&self) -> String {
                $crate::association::describe_pair($label, &self.$first, &self.$second)
            }
        }

        $crate::define_association_id!(@case $case $name);

        impl $crate::Identifier for $name {
            fn kind(&self) -> &'static str {
                $kind
            }

            fn id(&self) -> String {
                $name::id(self)
            }

            fn describe(&self) -> String {
                $name::describe(self)
            }

            fn fields(&self) -> Vec<(&'static str, String)> {
                let mut fields = $crate::Identifier::fields(&self.$first);
                fields.extend($crate::Identifier::fields(&self.$second));
                fields
            }
        }

        impl $crate::ParseId for $name {
            const KIND: &'static str = $kind;
            const LABEL: &'static str = $label;

            fn parse_id(input: &str) -> $crate::IdResult<Self> {
                Self::parse(input)
            }
        }

        $crate::impl_id_conversions!($name);
    };
}
