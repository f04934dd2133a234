//! Macros for declaring typed identifiers.

/// Declare a typed resource identifier from its layout.
///
/// Generates a struct with one `String` field per variable segment plus:
/// - a `LAYOUT` constant (checked against the fields at compile time)
/// - `new()`, `parse()`, `id()` and `describe()`
/// - `parse_insensitively()` when declared with `case: insensitive`
/// - `Display`, `FromStr`, `Serialize` and `Deserialize`
/// - the [`Identifier`](crate::Identifier), [`ParseId`](crate::ParseId) and
///   [`ResourceId`](crate::ResourceId) traits
///
/// # Example
///
/// ```
/// use armid_core::{define_resource_id, Element};
///
/// define_resource_id! {
///     /// A virtual network
///     pub struct VirtualNetworkId {
///         kind: "virtual_network",
///         label: "Virtual Network",
///         case: insensitive,
///         fields: { subscription_id, resource_group_name, virtual_network_name },
///         path: [
///             Element::subscription(),
///             Element::resource_group(),
///             Element::provider("Microsoft.Network"),
///             Element::variable("virtualNetworks", "virtual_network_name", "Virtual Network Name"),
///         ],
///     }
/// }
///
/// let id = VirtualNetworkId::new("sub", "rg", "vnet1");
/// assert_eq!(
///     id.id(),
///     "/subscriptions/sub/resourceGroups/rg/providers/Microsoft.Network/virtualNetworks/vnet1"
/// );
/// assert_eq!(VirtualNetworkId::parse(&id.id()).unwrap(), id);
/// ```
#[macro_export]
macro_rules! define_resource_id {
    (@insensitive insensitive) => { true };
    (@insensitive strict) => { false };

    (@case insensitive $name:ident) => {
        impl $name {
            /// Parses an identifier returned by the API, ignoring the casing
            /// of fixed segments. Not for user-supplied input.
            pub fn parse_insensitively(input: &str) -> $crate::IdResult<Self> {
                Self::LAYOUT
                    .parse(input, $crate::ParseMode::Insensitive)
                    .map(<Self as $crate::ResourceId>::from_values)
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
            fields: { $($field:ident),+ $(,)? },
            path: [ $($element:expr),+ $(,)? ] $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name {
            $(pub $field: String,)+
        }

        const _: () = assert!(
            $crate::layout::fields_match($name::LAYOUT, &[$(stringify!($field)),+]),
            concat!("layout of ", stringify!($name), " does not match its fields")
        );

        impl $name {
            /// Layout describing this identifier's path.
            pub const LAYOUT: &'static $crate::IdLayout = &$crate::IdLayout {
                kind: $kind,
                label: $label,
                elements: &[$($element),+],
                insensitive: $crate::define_resource_id!(@insensitive $case),
            };

            /// Creates an identifier from already-validated values.
            #[allow(clippy::too_many_arguments)]
            pub fn new($($field: impl Into<String>),+) -> Self {
                Self {
                    $($field: $field.into(),)+
                }
            }

            /// Parses an identifier, requiring exact casing of fixed segments.
            pub fn parse(input: &str) -> $crate::IdResult<Self> {
                Self::LAYOUT
                    .parse(input, $crate::ParseMode::Strict)
                    .map(<Self as $crate::ResourceId>::from_values)
            }

            /// Formats the identifier as its canonical path.
            pub fn id(&self) -> String {
                Self::LAYOUT.format(&[$(self.$field.as_str()),+])
            }

            /// Human-readable description for diagnostics.
            pub fn describe(&self) -> String {
                Self::LAYOUT.describe(&[$(self.$field.as_str()),+])
            }
        }

        $crate::define_resource_id!(@case $case $name);

        impl $crate::Identifier for $name {
            fn kind(&self) -> &'static str {
                Self::LAYOUT.kind
            }

            fn id(&self) -> String {
                $name::id(self)
            }

            fn describe(&self) -> String {
                $name::describe(self)
            }

            fn fields(&self) -> Vec<(&'static str, String)> {
                Self::LAYOUT
                    .variables()
                    .map(|(_, label)| label)
                    .zip([$(self.$field.clone()),+])
                    .collect()
            }
        }

        impl $crate::ParseId for $name {
            const KIND: &'static str = $kind;
            const LABEL: &'static str = $label;

            fn parse_id(input: &str) -> $crate::IdResult<Self> {
                Self::parse(input)
            }
        }

        impl $crate::ResourceId for $name {
            const LAYOUT: &'static $crate::IdLayout = $name::LAYOUT;

            fn from_values(values: Vec<String>) -> Self {
                let mut values = values.into_iter();
                Self {
                    $($field: values.next().unwrap_or_default(),)+
                }
            }

            fn values(&self) -> Vec<&str> {
                vec![$(self.$field.as_str()),+]
            }
        }

        $crate::impl_id_conversions!($name);
    };
}

/// `Display`, `FromStr` and serde impls for an identifier with inherent
/// `parse` and `id` functions.
#[doc(hidden)]
#[macro_export]
macro_rules! impl_id_conversions {
    ($name:ident) => {
        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(&self.id())
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = $crate::IdError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::parse(s)
            }
        }

        impl $crate::__serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: $crate::__serde::Serializer,
            {
                serializer.serialize_str(&self.id())
            }
        }

        impl<'de> $crate::__serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: $crate::__serde::Deserializer<'de>,
            {
                let s = <String as $crate::__serde::Deserialize>::deserialize(deserializer)?;
                Self::parse(&s).map_err($crate::__serde::de::Error::custom)
            }
        }
    };
}
