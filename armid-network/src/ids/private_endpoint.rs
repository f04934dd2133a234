//! Private endpoints and their DNS zone groups

use armid_core::{Element, define_resource_id};

use super::NAMESPACE;

const PRIVATE_ENDPOINT: Element =
    Element::variable("privateEndpoints", "private_endpoint_name", "Private Endpoint Name");

const PRIVATE_DNS_ZONE_GROUP: Element = Element::variable(
    "privateDnsZoneGroups",
    "private_dns_zone_group_name",
    "Private Dns Zone Group Name",
);

define_resource_id! {
    pub struct PrivateEndpointId {
        kind: "private_endpoint",
        label: "Private Endpoint",
        case: strict,
        fields: { subscription_id, resource_group_name, private_endpoint_name },
        path: [
            Element::subscription(),
            Element::resource_group(),
            Element::provider(NAMESPACE),
            PRIVATE_ENDPOINT,
        ],
    }
}

define_resource_id! {
    pub struct PrivateDnsZoneGroupId {
        kind: "private_dns_zone_group",
        label: "Private Dns Zone Group",
        case: strict,
        fields: {
            subscription_id,
            resource_group_name,
            private_endpoint_name,
            private_dns_zone_group_name,
        },
        path: [
            Element::subscription(),
            Element::resource_group(),
            Element::provider(NAMESPACE),
            PRIVATE_ENDPOINT,
            PRIVATE_DNS_ZONE_GROUP,
        ],
    }
}

define_resource_id! {
    pub struct PrivateDnsZoneConfigId {
        kind: "private_dns_zone_config",
        label: "Private Dns Zone Config",
        case: strict,
        fields: {
            subscription_id,
            resource_group_name,
            private_endpoint_name,
            private_dns_zone_group_name,
            private_dns_zone_config_name,
        },
        path: [
            Element::subscription(),
            Element::resource_group(),
            Element::provider(NAMESPACE),
            PRIVATE_ENDPOINT,
            PRIVATE_DNS_ZONE_GROUP,
            Element::variable(
                "privateDnsZoneConfigs",
                "private_dns_zone_config_name",
                "Private Dns Zone Config Name"
            ),
        ],
    }
}

impl PrivateDnsZoneGroupId {
    pub fn private_endpoint(&self) -> PrivateEndpointId {
        PrivateEndpointId::new(
            &self.subscription_id,
            &self.resource_group_name,
            &self.private_endpoint_name,
        )
    }
}

impl PrivateDnsZoneConfigId {
    pub fn private_dns_zone_group(&self) -> PrivateDnsZoneGroupId {
        PrivateDnsZoneGroupId::new(
            &self.subscription_id,
            &self.resource_group_name,
            &self.private_endpoint_name,
            &self.private_dns_zone_group_name,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use armid_core::IdError;

    const CONFIG: &str = "/subscriptions/sub1/resourceGroups/rg1/providers/Microsoft.Network/privateEndpoints/pe1/privateDnsZoneGroups/group1/privateDnsZoneConfigs/config1";

    #[test]
    fn deep_chain_roundtrip() {
        let id = PrivateDnsZoneConfigId::parse(CONFIG).unwrap();
        assert_eq!(id.private_endpoint_name, "pe1");
        assert_eq!(id.private_dns_zone_group_name, "group1");
        assert_eq!(id.private_dns_zone_config_name, "config1");
        assert_eq!(id.id(), CONFIG);

        let group = id.private_dns_zone_group();
        assert!(CONFIG.starts_with(&group.id()));
        assert_eq!(group.private_endpoint().private_endpoint_name, "pe1");
    }

    #[test]
    fn missing_middle_segment() {
        let input = CONFIG.replace("/privateDnsZoneGroups/group1", "");
        assert_eq!(
            PrivateDnsZoneConfigId::parse(&input).unwrap_err(),
            IdError::segment_not_found("privateDnsZoneGroups")
        );
    }

    #[test]
    fn parent_does_not_accept_child() {
        assert!(matches!(
            PrivateDnsZoneGroupId::parse(CONFIG).unwrap_err(),
            IdError::UnexpectedSegments { .. }
        ));
    }
}
