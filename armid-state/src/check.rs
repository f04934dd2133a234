//! Identifier checks over a state file
//!
//! Every resource in state is keyed by the identifier the API returned for
//! it. [`Checker::check`] verifies each identifier parses as the kind its
//! schema declares and validates the stored attributes.
//! [`Checker::normalize`] rewrites API-cased identifiers to canonical casing
//! for kinds that allow insensitive parsing.

use std::collections::HashMap;
use std::fmt;

use armid_core::schema::{ResourceSchema, TypeError};
use armid_core::{IdError, ParseMode, Registry, Value};
use serde::Serialize;

use crate::state::{ResourceState, StateFile};

/// Controls checking and normalization
#[derive(Debug, Clone, Copy, Default)]
pub struct CheckConfig {
    /// Mode used to parse stored identifiers during `check`
    pub mode: ParseMode,
    /// Whether `normalize` modifies the state or only reports rewrites
    pub rewrite: bool,
}

/// A problem found in state
#[derive(Debug, Clone, PartialEq)]
pub enum Finding {
    /// No schema is registered for the resource type
    UnknownResourceType { address: String },
    /// The stored identifier does not parse as the declared kind
    InvalidId {
        address: String,
        kind: &'static str,
        id: String,
        error: IdError,
    },
    /// An attribute failed schema validation
    InvalidAttribute { address: String, error: TypeError },
}

impl Finding {
    /// Unknown types are reported but don't fail a check
    pub fn is_error(&self) -> bool {
        !matches!(self, Finding::UnknownResourceType { .. })
    }
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Finding::UnknownResourceType { address } => {
                write!(f, "{}: no schema for this resource type", address)
            }
            Finding::InvalidId {
                address,
                kind,
                id,
                error,
            } => write!(f, "{}: {:?} is not a valid {} ID: {}", address, id, kind, error),
            Finding::InvalidAttribute { address, error } => write!(f, "{}: {}", address, error),
        }
    }
}

/// Result of checking a state file
#[derive(Debug, Clone, Default)]
pub struct CheckReport {
    /// Number of resources checked
    pub checked: usize,
    pub findings: Vec<Finding>,
}

impl CheckReport {
    pub fn has_errors(&self) -> bool {
        self.findings.iter().any(Finding::is_error)
    }

    pub fn error_count(&self) -> usize {
        self.findings.iter().filter(|f| f.is_error()).count()
    }
}

/// An identifier rewritten to canonical casing
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Rewrite {
    pub address: String,
    pub from: String,
    pub to: String,
}

/// Checks state against resource schemas and identifier kinds
pub struct Checker {
    registry: Registry,
    schemas: HashMap<String, ResourceSchema>,
    config: CheckConfig,
}

impl Checker {
    pub fn new(registry: Registry, schemas: impl IntoIterator<Item = ResourceSchema>) -> Self {
        Self {
            registry,
            schemas: schemas
                .into_iter()
                .map(|s| (s.resource_type.clone(), s))
                .collect(),
            config: CheckConfig::default(),
        }
    }

    pub fn with_config(mut self, config: CheckConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> CheckConfig {
        self.config
    }

    /// Check every resource in `state`
    pub fn check(&self, state: &StateFile) -> CheckReport {
        let mut report = CheckReport::default();
        for resource in &state.resources {
            report.checked += 1;
            report.findings.extend(self.check_resource(resource));
        }
        log::debug!(
            "checked {} resources, {} findings",
            report.checked,
            report.findings.len()
        );
        report
    }

    fn check_resource(&self, resource: &ResourceState) -> Vec<Finding> {
        let address = resource.address();
        let Some(schema) = self.schemas.get(&resource.resource_type) else {
            return vec![Finding::UnknownResourceType { address }];
        };

        let mut findings = Vec::new();
        if let Err(error) = self
            .registry
            .parse(schema.id_kind, &resource.id, self.config.mode)
        {
            findings.push(Finding::InvalidId {
                address: address.clone(),
                kind: schema.id_kind,
                id: resource.id.clone(),
                error,
            });
        }

        let attributes: HashMap<String, Value> = resource
            .attributes
            .iter()
            .map(|(k, v)| (k.clone(), Value::from_json(v)))
            .collect();
        if let Err(errors) = schema.validate(&attributes) {
            findings.extend(errors.into_iter().map(|error| Finding::InvalidAttribute {
                address: address.clone(),
                error,
            }));
        }

        findings
    }

    /// Rewrite stored identifiers to canonical casing.
    ///
    /// Identifiers that already parse strictly are left alone, as are those
    /// whose kind is strict-only or which don't parse at all. With
    /// `rewrite` disabled the state is not modified.
    pub fn normalize(&self, state: &mut StateFile) -> Vec<Rewrite> {
        let mut rewrites = Vec::new();
        for resource in &mut state.resources {
            let Some(schema) = self.schemas.get(&resource.resource_type) else {
                continue;
            };
            let Some(canonical) = self.canonical_id(schema.id_kind, &resource.id) else {
                continue;
            };
            if canonical == resource.id {
                continue;
            }

            log::debug!(
                "{}: normalizing {:?} to {:?}",
                resource.address(),
                resource.id,
                canonical
            );
            rewrites.push(Rewrite {
                address: resource.address(),
                from: resource.id.clone(),
                to: canonical.clone(),
            });
            if self.config.rewrite {
                resource.id = canonical;
            }
        }

        if self.config.rewrite && !rewrites.is_empty() {
            state.increment_serial();
        }
        rewrites
    }

    fn canonical_id(&self, kind: &str, id: &str) -> Option<String> {
        if self.registry.parse(kind, id, ParseMode::Strict).is_ok() {
            return None;
        }
        match self.registry.parse(kind, id, ParseMode::Insensitive) {
            Ok(parsed) => Some(parsed.id()),
            Err(e) => {
                log::debug!("not normalizing {:?} as {}: {}", id, kind, e);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use armid_network::schemas::all_schemas;

    const GATEWAY: &str =
        "/subscriptions/sub1/resourceGroups/rg1/providers/Microsoft.Network/natGateways/gw1";
    const PUBLIC_IP: &str =
        "/subscriptions/sub1/resourceGroups/rg1/providers/Microsoft.Network/publicIPAddresses/ip1";
    const PREFIX: &str =
        "/subscriptions/sub1/resourceGroups/rg1/providers/Microsoft.Network/publicIPPrefixes/prefix1";

    fn checker() -> Checker {
        Checker::new(armid_network::registry(), all_schemas())
    }

    fn association(id: String) -> ResourceState {
        ResourceState::new("nat_gateway_public_ip_association", "main", id)
            .with_attribute("nat_gateway_id", serde_json::json!(GATEWAY))
            .with_attribute("public_ip_address_id", serde_json::json!(PUBLIC_IP))
    }

    fn state_with(resources: Vec<ResourceState>) -> StateFile {
        let mut state = StateFile::new();
        state.resources = resources;
        state
    }

    #[test]
    fn clean_state_has_no_findings() {
        let state = state_with(vec![association(format!("{}|{}", GATEWAY, PUBLIC_IP))]);
        let report = checker().check(&state);
        assert_eq!(report.checked, 1);
        assert!(report.findings.is_empty());
    }

    #[test]
    fn reports_id_of_wrong_kind() {
        let state = state_with(vec![association(format!("{}|{}", GATEWAY, PREFIX))]);
        let report = checker().check(&state);
        assert!(report.has_errors());
        match &report.findings[..] {
            [Finding::InvalidId { kind, error, .. }] => {
                assert_eq!(*kind, "nat_gateway_public_ip_address_association");
                assert!(matches!(error, IdError::AssociationPart { .. }));
            }
            other => panic!("unexpected findings: {:?}", other),
        }
    }

    #[test]
    fn reports_reordered_stored_id() {
        let reordered =
            "/subscriptions/sub1/providers/Microsoft.Network/natGateways/gw1/resourceGroups/rg1";
        let state = state_with(vec![association(format!("{}|{}", reordered, PUBLIC_IP))]);
        let report = checker().check(&state);
        match &report.findings[..] {
            [Finding::InvalidId { error, .. }] => match error {
                IdError::AssociationPart { part, source } => {
                    assert_eq!(*part, "NAT Gateway");
                    assert!(source.is_missing_segment());
                }
                other => panic!("unexpected error: {other}"),
            },
            other => panic!("unexpected findings: {:?}", other),
        }
    }

    #[test]
    fn reports_attribute_errors_and_unknown_types() {
        let state = state_with(vec![
            association(format!("{}|{}", GATEWAY, PUBLIC_IP))
                .with_attribute("public_ip_address_id", serde_json::json!(42)),
            ResourceState::new("load_balancer", "lb", "/subscriptions/s"),
        ]);
        let report = checker().check(&state);
        assert_eq!(report.error_count(), 1);
        assert_eq!(report.findings.len(), 2);
        assert!(
            report
                .findings
                .iter()
                .any(|f| matches!(f, Finding::UnknownResourceType { address } if address == "load_balancer.lb"))
        );
    }

    #[test]
    fn api_casing_fails_strict_check_but_passes_insensitive() {
        let id = format!("{}|{}", GATEWAY.to_lowercase(), PUBLIC_IP.to_lowercase());
        let state = state_with(vec![association(id)]);
        assert!(checker().check(&state).has_errors());

        let config = CheckConfig {
            mode: ParseMode::Insensitive,
            rewrite: false,
        };
        assert!(!checker().with_config(config).check(&state).has_errors());
    }

    #[test]
    fn normalize_rewrites_api_casing() {
        let lowered = format!("{}|{}", GATEWAY.to_lowercase(), PUBLIC_IP.to_lowercase());
        let mut state = state_with(vec![association(lowered.clone())]);

        let dry_run = checker().normalize(&mut state);
        assert_eq!(dry_run.len(), 1);
        assert_eq!(state.resources[0].id, lowered);
        assert_eq!(state.serial, 0);

        let config = CheckConfig {
            mode: ParseMode::Strict,
            rewrite: true,
        };
        let rewrites = checker().with_config(config).normalize(&mut state);
        assert_eq!(rewrites, dry_run);
        assert_eq!(
            state.resources[0].id,
            "/subscriptions/sub1/resourceGroups/rg1/providers/Microsoft.Network/natGateways/gw1|/subscriptions/sub1/resourceGroups/rg1/providers/Microsoft.Network/publicIPAddresses/ip1"
        );
        assert_eq!(state.serial, 1);
        assert!(checker().check(&state).findings.is_empty());
    }

    #[test]
    fn normalize_skips_strict_only_kinds() {
        let lowered = format!("{}|{}", GATEWAY.to_lowercase(), PREFIX.to_lowercase());
        let mut state = state_with(vec![ResourceState::new(
            "nat_gateway_public_ip_prefix_association",
            "main",
            lowered,
        )]);
        let config = CheckConfig {
            mode: ParseMode::Strict,
            rewrite: true,
        };
        assert!(checker().with_config(config).normalize(&mut state).is_empty());
    }
}
