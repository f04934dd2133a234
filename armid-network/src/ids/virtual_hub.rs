//! Virtual WAN hubs and hub routing

use armid_core::{Element, define_resource_id};

use super::NAMESPACE;

const VIRTUAL_HUB: Element =
    Element::variable("virtualHubs", "virtual_hub_name", "Virtual Hub Name");

const HUB_ROUTE_TABLE: Element =
    Element::variable("hubRouteTables", "hub_route_table_name", "Hub Route Table Name");

define_resource_id! {
    pub struct VirtualHubId {
        kind: "virtual_hub",
        label: "Virtual Hub",
        case: insensitive,
        fields: { subscription_id, resource_group_name, virtual_hub_name },
        path: [
            Element::subscription(),
            Element::resource_group(),
            Element::provider(NAMESPACE),
            VIRTUAL_HUB,
        ],
    }
}

define_resource_id! {
    pub struct HubRouteTableId {
        kind: "hub_route_table",
        label: "Hub Route Table",
        case: insensitive,
        fields: { subscription_id, resource_group_name, virtual_hub_name, hub_route_table_name },
        path: [
            Element::subscription(),
            Element::resource_group(),
            Element::provider(NAMESPACE),
            VIRTUAL_HUB,
            HUB_ROUTE_TABLE,
        ],
    }
}

define_resource_id! {
    /// A single route inside a hub route table
    pub struct HubRouteTableRouteId {
        kind: "hub_route_table_route",
        label: "Hub Route Table Route",
        case: strict,
        fields: {
            subscription_id,
            resource_group_name,
            virtual_hub_name,
            hub_route_table_name,
            route_name,
        },
        path: [
            Element::subscription(),
            Element::resource_group(),
            Element::provider(NAMESPACE),
            VIRTUAL_HUB,
            HUB_ROUTE_TABLE,
            Element::variable("routes", "route_name", "Route Name"),
        ],
    }
}

impl HubRouteTableId {
    pub fn virtual_hub(&self) -> VirtualHubId {
        VirtualHubId::new(
            &self.subscription_id,
            &self.resource_group_name,
            &self.virtual_hub_name,
        )
    }
}

impl HubRouteTableRouteId {
    pub fn hub_route_table(&self) -> HubRouteTableId {
        HubRouteTableId::new(
            &self.subscription_id,
            &self.resource_group_name,
            &self.virtual_hub_name,
            &self.hub_route_table_name,
        )
    }
}
