//! NAT gateways, public IPs and their associations

use armid_core::{Element, define_association_id, define_resource_id};

use super::NAMESPACE;

define_resource_id! {
    pub struct NatGatewayId {
        kind: "nat_gateway",
        label: "NAT Gateway",
        case: insensitive,
        fields: { subscription_id, resource_group_name, nat_gateway_name },
        path: [
            Element::subscription(),
            Element::resource_group(),
            Element::provider(NAMESPACE),
            Element::variable("natGateways", "nat_gateway_name", "NAT Gateway Name"),
        ],
    }
}

define_resource_id! {
    pub struct PublicIpAddressId {
        kind: "public_ip_address",
        label: "Public IP Address",
        case: insensitive,
        fields: { subscription_id, resource_group_name, public_ip_address_name },
        path: [
            Element::subscription(),
            Element::resource_group(),
            Element::provider(NAMESPACE),
            Element::variable("publicIPAddresses", "public_ip_address_name", "Public IP Address Name"),
        ],
    }
}

define_resource_id! {
    pub struct PublicIpPrefixId {
        kind: "public_ip_prefix",
        label: "Public IP Prefix",
        case: strict,
        fields: { subscription_id, resource_group_name, public_ip_prefix_name },
        path: [
            Element::subscription(),
            Element::resource_group(),
            Element::provider(NAMESPACE),
            Element::variable("publicIPPrefixes", "public_ip_prefix_name", "Public IP Prefix Name"),
        ],
    }
}

define_association_id! {
    /// `{natGatewayId}|{publicIpAddressId}`
    pub struct NatGatewayPublicIpAddressAssociationId {
        kind: "nat_gateway_public_ip_address_association",
        label: "NAT Gateway Public IP Address Association",
        case: insensitive,
        first: nat_gateway: NatGatewayId,
        second: public_ip_address: PublicIpAddressId,
    }
}

define_association_id! {
    /// `{natGatewayId}|{publicIpPrefixId}`
    pub struct NatGatewayPublicIpPrefixAssociationId {
        kind: "nat_gateway_public_ip_prefix_association",
        label: "NAT Gateway Public IP Prefix Association",
        case: strict,
        first: nat_gateway: NatGatewayId,
        second: public_ip_prefix: PublicIpPrefixId,
    }
}
