//! Network manager connections
//!
//! Connections live either under a subscription or under a management
//! group, so these kinds use both scope prefixes.

use armid_core::{Element, define_resource_id};

use super::NAMESPACE;

const CONNECTION: Element = Element::variable(
    "networkManagerConnections",
    "network_manager_connection_name",
    "Network Manager Connection Name",
);

define_resource_id! {
    /// A network manager connection scoped to a subscription
    pub struct NetworkManagerConnectionId {
        kind: "network_manager_connection",
        label: "Network Manager Connection",
        case: insensitive,
        fields: { subscription_id, network_manager_connection_name },
        path: [
            Element::subscription(),
            Element::provider(NAMESPACE),
            CONNECTION,
        ],
    }
}

define_resource_id! {
    /// A network manager connection scoped to a management group
    pub struct ManagementGroupNetworkManagerConnectionId {
        kind: "management_group_network_manager_connection",
        label: "Management Group Network Manager Connection",
        case: insensitive,
        fields: { management_group_name, network_manager_connection_name },
        path: [
            Element::provider("Microsoft.Management"),
            Element::variable("managementGroups", "management_group_name", "Management Group Name"),
            Element::provider(NAMESPACE),
            CONNECTION,
        ],
    }
}
