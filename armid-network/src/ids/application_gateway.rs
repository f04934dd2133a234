//! Application gateway identifiers
//!
//! The gateway itself plus every child collection the API returns nested
//! inside a gateway payload. Child IDs come back from the API with
//! inconsistent casing, so they all support insensitive parsing.

use armid_core::{Element, define_resource_id};

use super::NAMESPACE;

const APPLICATION_GATEWAY: Element = Element::variable(
    "applicationGateways",
    "application_gateway_name",
    "Application Gateway Name",
);

define_resource_id! {
    /// An application gateway
    pub struct ApplicationGatewayId {
        kind: "application_gateway",
        label: "Application Gateway",
        case: insensitive,
        fields: { subscription_id, resource_group_name, application_gateway_name },
        path: [
            Element::subscription(),
            Element::resource_group(),
            Element::provider(NAMESPACE),
            APPLICATION_GATEWAY,
        ],
    }
}

/// Declares a child of an application gateway: `.../applicationGateways/{gw}/{key}/{name}`
macro_rules! application_gateway_child_id {
    (
        $(#[$meta:meta])*
        $name:ident, $kind:literal, $label:literal, $key:literal => $field:ident: $field_label:literal
    ) => {
        define_resource_id! {
            $(#[$meta])*
            pub struct $name {
                kind: $kind,
                label: $label,
                case: insensitive,
                fields: { subscription_id, resource_group_name, application_gateway_name, $field },
                path: [
                    Element::subscription(),
                    Element::resource_group(),
                    Element::provider(NAMESPACE),
                    APPLICATION_GATEWAY,
                    Element::variable($key, stringify!($field), $field_label),
                ],
            }
        }

        impl $name {
            /// The application gateway this element belongs to
            pub fn application_gateway(&self) -> ApplicationGatewayId {
                ApplicationGatewayId::new(
                    &self.subscription_id,
                    &self.resource_group_name,
                    &self.application_gateway_name,
                )
            }
        }
    };
}

application_gateway_child_id!(
    AuthenticationCertificateId,
    "application_gateway_authentication_certificate",
    "Authentication Certificate",
    "authenticationCertificates" => authentication_certificate_name: "Authentication Certificate Name"
);

application_gateway_child_id!(
    BackendAddressPoolId,
    "application_gateway_backend_address_pool",
    "Backend Address Pool",
    "backendAddressPools" => backend_address_pool_name: "Backend Address Pool Name"
);

application_gateway_child_id!(
    /// HTTP settings used by request routing rules
    BackendHttpSettingsCollectionId,
    "application_gateway_backend_http_settings_collection",
    "Backend Http Settings Collection",
    "backendHttpSettingsCollection" => backend_http_settings_collection_name: "Backend Http Settings Collection Name"
);

application_gateway_child_id!(
    /// Backend settings used by TCP/TLS routing rules
    BackendSettingsCollectionId,
    "application_gateway_backend_settings_collection",
    "Backend Settings Collection",
    "backendSettingsCollection" => backend_settings_collection_name: "Backend Settings Collection Name"
);

application_gateway_child_id!(
    FrontendIpConfigurationId,
    "application_gateway_frontend_ip_configuration",
    "Frontend IP Configuration",
    "frontendIPConfigurations" => frontend_ip_configuration_name: "Frontend IP Configuration Name"
);

application_gateway_child_id!(
    FrontendPortId,
    "application_gateway_frontend_port",
    "Frontend Port",
    "frontendPorts" => frontend_port_name: "Frontend Port Name"
);

application_gateway_child_id!(
    HttpListenerId,
    "application_gateway_http_listener",
    "Http Listener",
    "httpListeners" => http_listener_name: "Http Listener Name"
);

application_gateway_child_id!(
    PrivateLinkConfigurationId,
    "application_gateway_private_link_configuration",
    "Private Link Configuration",
    "privateLinkConfigurations" => private_link_configuration_name: "Private Link Configuration Name"
);

application_gateway_child_id!(
    ProbeId,
    "application_gateway_probe",
    "Probe",
    "probes" => probe_name: "Probe Name"
);

application_gateway_child_id!(
    RedirectConfigurationsId,
    "application_gateway_redirect_configuration",
    "Redirect Configurations",
    "redirectConfigurations" => redirect_configuration_name: "Redirect Configuration Name"
);

application_gateway_child_id!(
    RequestRoutingRuleId,
    "application_gateway_request_routing_rule",
    "Request Routing Rule",
    "requestRoutingRules" => request_routing_rule_name: "Request Routing Rule Name"
);

application_gateway_child_id!(
    RewriteRuleSetId,
    "application_gateway_rewrite_rule_set",
    "Rewrite Rule Set",
    "rewriteRuleSets" => rewrite_rule_set_name: "Rewrite Rule Set Name"
);

application_gateway_child_id!(
    SslCertificateId,
    "application_gateway_ssl_certificate",
    "Ssl Certificate",
    "sslCertificates" => ssl_certificate_name: "Ssl Certificate Name"
);

application_gateway_child_id!(
    SslProfileId,
    "application_gateway_ssl_profile",
    "Ssl Profile",
    "sslProfiles" => ssl_profile_name: "Ssl Profile Name"
);

application_gateway_child_id!(
    TrustedClientCertificateId,
    "application_gateway_trusted_client_certificate",
    "Trusted Client Certificate",
    "trustedClientCertificates" => trusted_client_certificate_name: "Trusted Client Certificate Name"
);

application_gateway_child_id!(
    TrustedRootCertificateId,
    "application_gateway_trusted_root_certificate",
    "Trusted Root Certificate",
    "trustedRootCertificates" => trusted_root_certificate_name: "Trusted Root Certificate Name"
);

application_gateway_child_id!(
    UrlPathMapId,
    "application_gateway_url_path_map",
    "Url Path Map",
    "urlPathMaps" => url_path_map_name: "Url Path Map Name"
);

define_resource_id! {
    /// A web application firewall policy attachable to application gateways
    pub struct WebApplicationFirewallPolicyId {
        kind: "web_application_firewall_policy",
        label: "Web Application Firewall Policy",
        case: insensitive,
        fields: { subscription_id, resource_group_name, policy_name },
        path: [
            Element::subscription(),
            Element::resource_group(),
            Element::provider(NAMESPACE),
            Element::variable(
                "ApplicationGatewayWebApplicationFirewallPolicies",
                "policy_name",
                "Policy Name"
            ),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use armid_core::IdError;

    const SUBSCRIPTION: &str = "12345678-1234-9876-4563-123456789012";
    const BACKEND_SETTINGS: &str = "/subscriptions/12345678-1234-9876-4563-123456789012/resourceGroups/group1/providers/Microsoft.Network/applicationGateways/applicationGateway1/backendSettingsCollection/backendSettings1";

    #[test]
    fn backend_settings_collection_formats_canonical_path() {
        let id = BackendSettingsCollectionId::new(
            SUBSCRIPTION,
            "group1",
            "applicationGateway1",
            "backendSettings1",
        );
        assert_eq!(id.id(), BACKEND_SETTINGS);
        assert_eq!(id.id(), id.id());
    }

    #[test]
    fn backend_settings_collection_parses_fields() {
        let id = BackendSettingsCollectionId::parse(BACKEND_SETTINGS).unwrap();
        assert_eq!(id.subscription_id, SUBSCRIPTION);
        assert_eq!(id.resource_group_name, "group1");
        assert_eq!(id.application_gateway_name, "applicationGateway1");
        assert_eq!(id.backend_settings_collection_name, "backendSettings1");
    }

    #[test]
    fn backend_settings_collection_uppercased() {
        let upper = BACKEND_SETTINGS.to_uppercase();
        assert!(BackendSettingsCollectionId::parse(&upper).is_err());

        let id = BackendSettingsCollectionId::parse_insensitively(&upper).unwrap();
        assert_eq!(id.resource_group_name, "GROUP1");
        assert_eq!(id.application_gateway_name, "APPLICATIONGATEWAY1");
        assert_eq!(id.backend_settings_collection_name, "BACKENDSETTINGS1");
        assert_eq!(
            id.id(),
            "/subscriptions/12345678-1234-9876-4563-123456789012/resourceGroups/GROUP1/providers/Microsoft.Network/applicationGateways/APPLICATIONGATEWAY1/backendSettingsCollection/BACKENDSETTINGS1"
        );
    }

    #[test]
    fn insensitive_parse_keeps_value_casing() {
        let input = BACKEND_SETTINGS
            .replace("resourceGroups", "resourcegroups")
            .replace("backendSettingsCollection", "BackendSettingsCollection");
        assert!(BackendSettingsCollectionId::parse(&input).is_err());
        let id = BackendSettingsCollectionId::parse_insensitively(&input).unwrap();
        assert_eq!(id.id(), BACKEND_SETTINGS);
    }

    #[test]
    fn truncated_path_reports_missing_segment() {
        let truncated = BACKEND_SETTINGS
            .strip_suffix("/backendSettingsCollection/backendSettings1")
            .unwrap();
        assert_eq!(
            BackendSettingsCollectionId::parse(truncated).unwrap_err(),
            IdError::segment_not_found("backendSettingsCollection")
        );
    }

    #[test]
    fn extra_trailing_segment_is_rejected() {
        let input = format!("{}/probes/probe1", BACKEND_SETTINGS);
        assert!(matches!(
            BackendSettingsCollectionId::parse(&input).unwrap_err(),
            IdError::UnexpectedSegments { .. }
        ));
    }

    #[test]
    fn sibling_collection_is_not_accepted() {
        let input = BACKEND_SETTINGS.replace("backendSettingsCollection", "backendHttpSettingsCollection");
        assert!(BackendSettingsCollectionId::parse(&input).is_err());
        let id = BackendHttpSettingsCollectionId::parse(&input).unwrap();
        assert_eq!(id.backend_http_settings_collection_name, "backendSettings1");
    }

    #[test]
    fn child_exposes_parent_gateway() {
        let id = ProbeId::new(SUBSCRIPTION, "group1", "gw1", "probe1");
        assert_eq!(
            id.application_gateway().id(),
            "/subscriptions/12345678-1234-9876-4563-123456789012/resourceGroups/group1/providers/Microsoft.Network/applicationGateways/gw1"
        );
    }

    #[test]
    fn describe_lists_fields() {
        let id = FrontendPortId::new(SUBSCRIPTION, "group1", "gw1", "port80");
        let description = id.describe();
        assert!(description.starts_with("Frontend Port:"));
        assert!(description.contains("Application Gateway Name: \"gw1\""));
        assert!(description.contains("Frontend Port Name: \"port80\""));
    }

    #[test]
    fn firewall_policy_roundtrip() {
        let id = WebApplicationFirewallPolicyId::new(SUBSCRIPTION, "group1", "policy1");
        assert!(id.id().ends_with("/ApplicationGatewayWebApplicationFirewallPolicies/policy1"));
        assert_eq!(WebApplicationFirewallPolicyId::parse(&id.id()).unwrap(), id);
        let lowered = id.id().replace("ApplicationGateway", "applicationGateway");
        assert_eq!(
            WebApplicationFirewallPolicyId::parse_insensitively(&lowered).unwrap(),
            id
        );
    }
}
