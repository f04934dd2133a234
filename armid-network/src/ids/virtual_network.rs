//! Virtual networks, subnets, network interfaces and security groups

use armid_core::{Element, define_association_id, define_resource_id};

use super::NAMESPACE;

define_resource_id! {
    pub struct VirtualNetworkId {
        kind: "virtual_network",
        label: "Virtual Network",
        case: insensitive,
        fields: { subscription_id, resource_group_name, virtual_network_name },
        path: [
            Element::subscription(),
            Element::resource_group(),
            Element::provider(NAMESPACE),
            Element::variable("virtualNetworks", "virtual_network_name", "Virtual Network Name"),
        ],
    }
}

define_resource_id! {
    pub struct SubnetId {
        kind: "subnet",
        label: "Subnet",
        case: insensitive,
        fields: { subscription_id, resource_group_name, virtual_network_name, subnet_name },
        path: [
            Element::subscription(),
            Element::resource_group(),
            Element::provider(NAMESPACE),
            Element::variable("virtualNetworks", "virtual_network_name", "Virtual Network Name"),
            Element::variable("subnets", "subnet_name", "Subnet Name"),
        ],
    }
}

impl SubnetId {
    pub fn virtual_network(&self) -> VirtualNetworkId {
        VirtualNetworkId::new(
            &self.subscription_id,
            &self.resource_group_name,
            &self.virtual_network_name,
        )
    }
}

define_resource_id! {
    pub struct NetworkInterfaceId {
        kind: "network_interface",
        label: "Network Interface",
        case: insensitive,
        fields: { subscription_id, resource_group_name, network_interface_name },
        path: [
            Element::subscription(),
            Element::resource_group(),
            Element::provider(NAMESPACE),
            Element::variable("networkInterfaces", "network_interface_name", "Network Interface Name"),
        ],
    }
}

define_resource_id! {
    pub struct NetworkSecurityGroupId {
        kind: "network_security_group",
        label: "Network Security Group",
        case: insensitive,
        fields: { subscription_id, resource_group_name, network_security_group_name },
        path: [
            Element::subscription(),
            Element::resource_group(),
            Element::provider(NAMESPACE),
            Element::variable(
                "networkSecurityGroups",
                "network_security_group_name",
                "Network Security Group Name"
            ),
        ],
    }
}

define_association_id! {
    /// `{networkInterfaceId}|{networkSecurityGroupId}`
    pub struct NetworkInterfaceSecurityGroupAssociationId {
        kind: "network_interface_security_group_association",
        label: "Network Interface Security Group Association",
        case: insensitive,
        first: network_interface: NetworkInterfaceId,
        second: network_security_group: NetworkSecurityGroupId,
    }
}
