//! Virtual network gateways

use armid_core::{Element, define_resource_id};

use super::NAMESPACE;

const VIRTUAL_NETWORK_GATEWAY: Element = Element::variable(
    "virtualNetworkGateways",
    "virtual_network_gateway_name",
    "Virtual Network Gateway Name",
);

define_resource_id! {
    pub struct VirtualNetworkGatewayId {
        kind: "virtual_network_gateway",
        label: "Virtual Network Gateway",
        case: strict,
        fields: { subscription_id, resource_group_name, virtual_network_gateway_name },
        path: [
            Element::subscription(),
            Element::resource_group(),
            Element::provider(NAMESPACE),
            VIRTUAL_NETWORK_GATEWAY,
        ],
    }
}

define_resource_id! {
    pub struct VirtualNetworkGatewayIpConfigurationId {
        kind: "virtual_network_gateway_ip_configuration",
        label: "Virtual Network Gateway IP Configuration",
        case: strict,
        fields: {
            subscription_id,
            resource_group_name,
            virtual_network_gateway_name,
            ip_configuration_name,
        },
        path: [
            Element::subscription(),
            Element::resource_group(),
            Element::provider(NAMESPACE),
            VIRTUAL_NETWORK_GATEWAY,
            Element::variable("ipConfigurations", "ip_configuration_name", "IP Configuration Name"),
        ],
    }
}

define_resource_id! {
    pub struct VirtualNetworkGatewayPolicyGroupId {
        kind: "virtual_network_gateway_policy_group",
        label: "Virtual Network Gateway Policy Group",
        case: strict,
        fields: {
            subscription_id,
            resource_group_name,
            virtual_network_gateway_name,
            policy_group_name,
        },
        path: [
            Element::subscription(),
            Element::resource_group(),
            Element::provider(NAMESPACE),
            VIRTUAL_NETWORK_GATEWAY,
            Element::variable(
                "virtualNetworkGatewayPolicyGroups",
                "policy_group_name",
                "Policy Group Name"
            ),
        ],
    }
}

impl VirtualNetworkGatewayIpConfigurationId {
    pub fn virtual_network_gateway(&self) -> VirtualNetworkGatewayId {
        VirtualNetworkGatewayId::new(
            &self.subscription_id,
            &self.resource_group_name,
            &self.virtual_network_gateway_name,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use armid_core::{Identifier, IdError};

    #[test]
    fn ip_configuration_roundtrip() {
        let gateway = VirtualNetworkGatewayId::new("sub1", "rg1", "gw1");
        let id = VirtualNetworkGatewayIpConfigurationId::new("sub1", "rg1", "gw1", "default");
        assert_eq!(id.id(), format!("{}/ipConfigurations/default", gateway.id()));
        assert_eq!(
            VirtualNetworkGatewayIpConfigurationId::parse(&id.id()).unwrap(),
            id
        );
        assert_eq!(id.virtual_network_gateway(), gateway);
    }

    #[test]
    fn strict_kinds_reject_lowercased_keys() {
        let id = VirtualNetworkGatewayPolicyGroupId::new("sub1", "rg1", "gw1", "group1");
        let lowered = id.id().replace("virtualNetworkGatewayPolicyGroups", "virtualnetworkgatewaypolicygroups");
        assert_eq!(
            VirtualNetworkGatewayPolicyGroupId::parse(&lowered).unwrap_err(),
            IdError::segment_not_found("virtualNetworkGatewayPolicyGroups")
        );
        assert!(!VirtualNetworkGatewayPolicyGroupId::LAYOUT.insensitive);
        assert_eq!(id.kind(), "virtual_network_gateway_policy_group");
    }
}
