//! Registry of identifier kinds
//!
//! Maps kind names (e.g. "nat_gateway") to type-erased parse and build
//! functions, for callers that only learn the kind at runtime such as state
//! checks and the CLI.

use std::collections::BTreeMap;

use crate::error::{IdError, IdResult};
use crate::id::{Identifier, ParseId, ParseIdInsensitively, ResourceId};
use crate::layout::IdLayout;
use crate::resolver::ParseMode;

/// Type-erased parse function
pub type ParseFn = fn(&str, ParseMode) -> IdResult<Box<dyn Identifier>>;

/// Type-erased constructor from variable values
pub type BuildFn = fn(&[String]) -> IdResult<Box<dyn Identifier>>;

/// A registered identifier kind
#[derive(Debug, Clone, Copy)]
pub struct IdKind {
    pub name: &'static str,
    pub label: &'static str,
    pub insensitive: bool,
    /// Present for layout-backed kinds
    pub layout: Option<&'static IdLayout>,
    parse: ParseFn,
    build: Option<BuildFn>,
}

impl IdKind {
    /// A layout-backed kind
    pub fn resource<T: ResourceId + 'static>() -> Self {
        Self {
            name: T::KIND,
            label: T::LABEL,
            insensitive: T::LAYOUT.insensitive,
            layout: Some(T::LAYOUT),
            parse: parse_resource::<T>,
            build: Some(build_resource::<T>),
        }
    }

    /// A kind with strict parsing only
    pub fn strict<T: ParseId + 'static>() -> Self {
        Self {
            name: T::KIND,
            label: T::LABEL,
            insensitive: false,
            layout: None,
            parse: parse_strict::<T>,
            build: None,
        }
    }

    /// A kind supporting both strict and insensitive parsing
    pub fn insensitive<T: ParseIdInsensitively + 'static>() -> Self {
        Self {
            name: T::KIND,
            label: T::LABEL,
            insensitive: true,
            layout: None,
            parse: parse_either::<T>,
            build: None,
        }
    }

    pub fn parse(&self, input: &str, mode: ParseMode) -> IdResult<Box<dyn Identifier>> {
        (self.parse)(input, mode)
    }

    /// Build an identifier from variable values in declared order
    pub fn build(&self, values: &[String]) -> Option<IdResult<Box<dyn Identifier>>> {
        self.build.map(|build| build(values))
    }

    /// Path template for layout-backed kinds
    pub fn template(&self) -> Option<String> {
        self.layout.map(IdLayout::template)
    }
}

fn parse_resource<T: ResourceId + 'static>(
    input: &str,
    mode: ParseMode,
) -> IdResult<Box<dyn Identifier>> {
    let values = T::LAYOUT.parse(input, mode)?;
    Ok(Box::new(T::from_values(values)))
}

fn build_resource<T: ResourceId + 'static>(values: &[String]) -> IdResult<Box<dyn Identifier>> {
    Ok(Box::new(T::try_from_values(values)?))
}

fn parse_strict<T: ParseId + 'static>(
    input: &str,
    mode: ParseMode,
) -> IdResult<Box<dyn Identifier>> {
    match mode {
        ParseMode::Strict => Ok(Box::new(T::parse_id(input)?)),
        ParseMode::Insensitive => Err(IdError::InsensitiveUnsupported {
            kind: T::KIND.to_string(),
        }),
    }
}

fn parse_either<T: ParseIdInsensitively + 'static>(
    input: &str,
    mode: ParseMode,
) -> IdResult<Box<dyn Identifier>> {
    match mode {
        ParseMode::Strict => Ok(Box::new(T::parse_id(input)?)),
        ParseMode::Insensitive => Ok(Box::new(T::parse_id_insensitively(input)?)),
    }
}

/// Identifier kinds by name
#[derive(Debug, Clone, Default)]
pub struct Registry {
    kinds: BTreeMap<&'static str, IdKind>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a kind, replacing any previous kind of the same name
    pub fn register(&mut self, kind: IdKind) {
        if self.kinds.insert(kind.name, kind).is_some() {
            log::warn!("identifier kind '{}' registered twice", kind.name);
        }
    }

    pub fn with(mut self, kind: IdKind) -> Self {
        self.register(kind);
        self
    }

    pub fn extend(&mut self, kinds: impl IntoIterator<Item = IdKind>) {
        for kind in kinds {
            self.register(kind);
        }
    }

    pub fn get(&self, name: &str) -> IdResult<&IdKind> {
        self.kinds.get(name).ok_or_else(|| IdError::UnknownKind {
            kind: name.to_string(),
        })
    }

    /// Kinds in name order
    pub fn iter(&self) -> impl Iterator<Item = &IdKind> {
        self.kinds.values()
    }

    pub fn len(&self) -> usize {
        self.kinds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.kinds.is_empty()
    }

    pub fn parse(&self, kind: &str, input: &str, mode: ParseMode) -> IdResult<Box<dyn Identifier>> {
        self.get(kind)?.parse(input, mode)
    }

    /// Every kind that parses `input` under `mode`
    pub fn detect(&self, input: &str, mode: ParseMode) -> Vec<Box<dyn Identifier>> {
        self.iter()
            .filter(|kind| mode == ParseMode::Strict || kind.insensitive)
            .filter_map(|kind| kind.parse(input, mode).ok())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::{ManagementGroupId, ResourceGroupId, SubscriptionId};

    fn registry() -> Registry {
        Registry::new()
            .with(IdKind::resource::<SubscriptionId>())
            .with(IdKind::resource::<ResourceGroupId>())
            .with(IdKind::strict::<ManagementGroupId>())
    }

    #[test]
    fn parses_by_kind_name() {
        let id = registry()
            .parse("resource_group", "/subscriptions/s/resourceGroups/rg", ParseMode::Strict)
            .unwrap();
        assert_eq!(id.kind(), "resource_group");
        assert_eq!(id.id(), "/subscriptions/s/resourceGroups/rg");
    }

    #[test]
    fn unknown_kind() {
        let err = registry().parse("nope", "/subscriptions/s", ParseMode::Strict).unwrap_err();
        assert_eq!(err, IdError::UnknownKind { kind: "nope".to_string() });
    }

    #[test]
    fn strict_only_kind_refuses_insensitive_mode() {
        let err = registry()
            .parse(
                "management_group",
                "/providers/Microsoft.Management/managementGroups/root",
                ParseMode::Insensitive,
            )
            .unwrap_err();
        assert!(matches!(err, IdError::InsensitiveUnsupported { .. }));
    }

    #[test]
    fn detect_finds_matching_kinds() {
        let found = registry().detect("/subscriptions/s/resourceGroups/rg", ParseMode::Strict);
        let kinds: Vec<&str> = found.iter().map(|id| id.kind()).collect();
        assert_eq!(kinds, vec!["resource_group"]);

        let found = registry().detect("/SUBSCRIPTIONS/s", ParseMode::Insensitive);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].kind(), "subscription");
    }

    #[test]
    fn builds_from_values() {
        let registry = registry();
        let kind = registry.get("resource_group").unwrap();
        let id = kind
            .build(&["s".to_string(), "rg".to_string()])
            .unwrap()
            .unwrap();
        assert_eq!(id.id(), "/subscriptions/s/resourceGroups/rg");
        assert!(kind.build(&["s".to_string()]).unwrap().is_err());
        assert!(registry.get("management_group").unwrap().build(&[]).is_none());
        assert_eq!(
            kind.template().as_deref(),
            Some("/subscriptions/{subscription_id}/resourceGroups/{resource_group_name}")
        );
    }
}
