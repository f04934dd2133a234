//! Microsoft.Network resource schema definitions
//!
//! Only identifier-bearing attributes are declared; other attributes are
//! accepted as-is.

use armid_core::schema::{AttributeSchema, AttributeType, ResourceSchema, types};

use crate::ids::*;

/// Returns all Microsoft.Network schemas
pub fn all_schemas() -> Vec<ResourceSchema> {
    vec![
        nat_gateway_schema(),
        nat_gateway_public_ip_association_schema(),
        nat_gateway_public_ip_prefix_association_schema(),
        network_interface_security_group_association_schema(),
        subnet_schema(),
        application_gateway_schema(),
        hub_route_table_route_schema(),
        network_watcher_flow_log_schema(),
    ]
}

fn name() -> AttributeSchema {
    AttributeSchema::new("name", AttributeType::String).required()
}

pub fn nat_gateway_schema() -> ResourceSchema {
    ResourceSchema::new("nat_gateway", NatGatewayId::LAYOUT.kind)
        .with_description("A NAT gateway providing outbound connectivity for subnets")
        .attribute(name())
        .attribute(
            AttributeSchema::new(
                "sku_name",
                AttributeType::Enum(vec!["Standard".to_string()]),
            )
            .with_description("SKU of the NAT gateway"),
        )
        .attribute(
            AttributeSchema::new("idle_timeout_in_minutes", AttributeType::Int)
                .with_description("Idle timeout for outbound flows"),
        )
}

pub fn nat_gateway_public_ip_association_schema() -> ResourceSchema {
    ResourceSchema::new(
        "nat_gateway_public_ip_association",
        NatGatewayPublicIpAddressAssociationId::KIND,
    )
    .with_description("Associates a public IP address with a NAT gateway")
    .attribute(
        AttributeSchema::new("nat_gateway_id", types::resource_id::<NatGatewayId>())
            .required()
            .with_description("NAT gateway to associate"),
    )
    .attribute(
        AttributeSchema::new(
            "public_ip_address_id",
            types::resource_id::<PublicIpAddressId>(),
        )
        .required()
        .with_description("Public IP address to associate"),
    )
}

pub fn nat_gateway_public_ip_prefix_association_schema() -> ResourceSchema {
    ResourceSchema::new(
        "nat_gateway_public_ip_prefix_association",
        NatGatewayPublicIpPrefixAssociationId::KIND,
    )
    .with_description("Associates a public IP prefix with a NAT gateway")
    .attribute(
        AttributeSchema::new("nat_gateway_id", types::resource_id::<NatGatewayId>()).required(),
    )
    .attribute(
        AttributeSchema::new("public_ip_prefix_id", types::resource_id::<PublicIpPrefixId>())
            .required(),
    )
}

pub fn network_interface_security_group_association_schema() -> ResourceSchema {
    ResourceSchema::new(
        "network_interface_security_group_association",
        NetworkInterfaceSecurityGroupAssociationId::KIND,
    )
    .with_description("Attaches a network security group to a network interface")
    .attribute(
        AttributeSchema::new(
            "network_interface_id",
            types::resource_id::<NetworkInterfaceId>(),
        )
        .required(),
    )
    .attribute(
        AttributeSchema::new(
            "network_security_group_id",
            types::resource_id::<NetworkSecurityGroupId>(),
        )
        .required(),
    )
}

pub fn subnet_schema() -> ResourceSchema {
    ResourceSchema::new("subnet", SubnetId::LAYOUT.kind)
        .with_description("A subnet within a virtual network")
        .attribute(name())
        .attribute(
            AttributeSchema::new("virtual_network_id", types::resource_id::<VirtualNetworkId>())
                .required(),
        )
        .attribute(AttributeSchema::new(
            "address_prefixes",
            AttributeType::List(Box::new(AttributeType::String)),
        ))
        .attribute(
            AttributeSchema::new(
                "network_security_group_id",
                types::resource_id::<NetworkSecurityGroupId>(),
            )
            .with_description("Security group applied to the subnet"),
        )
}

pub fn application_gateway_schema() -> ResourceSchema {
    ResourceSchema::new("application_gateway", ApplicationGatewayId::LAYOUT.kind)
        .with_description("An application gateway")
        .attribute(name())
        .attribute(
            AttributeSchema::new("subnet_id", types::resource_id::<SubnetId>())
                .required()
                .with_description("Subnet hosting the gateway's IP configuration"),
        )
        .attribute(AttributeSchema::new(
            "firewall_policy_id",
            types::resource_id::<WebApplicationFirewallPolicyId>(),
        ))
        .attribute(AttributeSchema::new(
            "public_ip_address_ids",
            types::resource_id_list::<PublicIpAddressId>(),
        ))
        .attribute(AttributeSchema::new(
            "backend_address_pool_ids",
            types::resource_id_list::<BackendAddressPoolId>(),
        ))
        .attribute(AttributeSchema::new(
            "ssl_certificate_ids",
            types::resource_id_list::<SslCertificateId>(),
        ))
}

pub fn hub_route_table_route_schema() -> ResourceSchema {
    ResourceSchema::new("hub_route_table_route", HubRouteTableRouteId::LAYOUT.kind)
        .with_description("A route inside a virtual hub route table")
        .attribute(name())
        .attribute(
            AttributeSchema::new("route_table_id", types::resource_id::<HubRouteTableId>())
                .required(),
        )
        .attribute(
            AttributeSchema::new(
                "destinations_type",
                AttributeType::Enum(vec![
                    "CIDR".to_string(),
                    "ResourceId".to_string(),
                    "Service".to_string(),
                ]),
            )
            .required(),
        )
        .attribute(
            AttributeSchema::new(
                "destinations",
                AttributeType::List(Box::new(AttributeType::String)),
            )
            .required(),
        )
}

pub fn network_watcher_flow_log_schema() -> ResourceSchema {
    ResourceSchema::new("network_watcher_flow_log", FlowLogId::KIND)
        .with_description("A flow log capturing traffic for a network security group")
        .attribute(
            AttributeSchema::new("network_watcher_id", types::resource_id::<NetworkWatcherId>())
                .required(),
        )
        .attribute(
            AttributeSchema::new(
                "network_security_group_id",
                types::resource_id::<NetworkSecurityGroupId>(),
            )
            .required(),
        )
        .attribute(AttributeSchema::new("enabled", AttributeType::Bool).required())
}
