//! Registry of every identifier kind this crate knows about

use armid_core::common::{ManagementGroupId, ResourceGroupId, SubscriptionId};
use armid_core::{IdKind, Registry};

use crate::ids::*;

/// Common kinds plus the full Microsoft.Network catalogue
pub fn registry() -> Registry {
    let mut registry = Registry::new();
    registry.extend([
        IdKind::resource::<SubscriptionId>(),
        IdKind::resource::<ResourceGroupId>(),
        IdKind::resource::<ManagementGroupId>(),
        // application gateways
        IdKind::resource::<ApplicationGatewayId>(),
        IdKind::resource::<AuthenticationCertificateId>(),
        IdKind::resource::<BackendAddressPoolId>(),
        IdKind::resource::<BackendHttpSettingsCollectionId>(),
        IdKind::resource::<BackendSettingsCollectionId>(),
        IdKind::resource::<FrontendIpConfigurationId>(),
        IdKind::resource::<FrontendPortId>(),
        IdKind::resource::<HttpListenerId>(),
        IdKind::resource::<PrivateLinkConfigurationId>(),
        IdKind::resource::<ProbeId>(),
        IdKind::resource::<RedirectConfigurationsId>(),
        IdKind::resource::<RequestRoutingRuleId>(),
        IdKind::resource::<RewriteRuleSetId>(),
        IdKind::resource::<SslCertificateId>(),
        IdKind::resource::<SslProfileId>(),
        IdKind::resource::<TrustedClientCertificateId>(),
        IdKind::resource::<TrustedRootCertificateId>(),
        IdKind::resource::<UrlPathMapId>(),
        IdKind::resource::<WebApplicationFirewallPolicyId>(),
        // NAT gateways and public IPs
        IdKind::resource::<NatGatewayId>(),
        IdKind::resource::<PublicIpAddressId>(),
        IdKind::resource::<PublicIpPrefixId>(),
        IdKind::insensitive::<NatGatewayPublicIpAddressAssociationId>(),
        IdKind::strict::<NatGatewayPublicIpPrefixAssociationId>(),
        // virtual networks
        IdKind::resource::<VirtualNetworkId>(),
        IdKind::resource::<SubnetId>(),
        IdKind::resource::<NetworkInterfaceId>(),
        IdKind::resource::<NetworkSecurityGroupId>(),
        IdKind::insensitive::<NetworkInterfaceSecurityGroupAssociationId>(),
        IdKind::resource::<VirtualNetworkGatewayId>(),
        IdKind::resource::<VirtualNetworkGatewayIpConfigurationId>(),
        IdKind::resource::<VirtualNetworkGatewayPolicyGroupId>(),
        // private endpoints
        IdKind::resource::<PrivateEndpointId>(),
        IdKind::resource::<PrivateDnsZoneGroupId>(),
        IdKind::resource::<PrivateDnsZoneConfigId>(),
        // virtual WAN
        IdKind::resource::<VirtualHubId>(),
        IdKind::resource::<HubRouteTableId>(),
        IdKind::resource::<HubRouteTableRouteId>(),
        // network watchers
        IdKind::resource::<NetworkWatcherId>(),
        IdKind::resource::<ConnectionMonitorId>(),
        IdKind::resource::<NetworkWatcherFlowLogId>(),
        IdKind::insensitive::<LegacyFlowLogId>(),
        IdKind::insensitive::<FlowLogId>(),
        // network manager
        IdKind::resource::<NetworkManagerConnectionId>(),
        IdKind::resource::<ManagementGroupNetworkManagerConnectionId>(),
    ]);
    registry
}

#[cfg(test)]
mod tests {
    use super::*;
    use armid_core::ParseMode;

    #[test]
    fn every_layout_kind_parses_its_own_output() {
        let registry = registry();
        for kind in registry.iter() {
            let Some(layout) = kind.layout else {
                continue;
            };
            let values: Vec<String> = (0..layout.field_count())
                .map(|i| format!("value{}", i))
                .collect();
            let built = kind.build(&values).unwrap().unwrap();
            let parsed = kind.parse(&built.id(), ParseMode::Strict).unwrap();
            assert_eq!(parsed.id(), built.id(), "kind {}", kind.name);
            assert_eq!(parsed.kind(), kind.name);

            if kind.insensitive {
                let lowered = built.id().to_lowercase();
                let parsed = kind.parse(&lowered, ParseMode::Insensitive).unwrap();
                assert_eq!(parsed.id(), built.id(), "kind {}", kind.name);
            } else {
                assert!(kind.parse(&built.id(), ParseMode::Insensitive).is_err());
            }
        }
    }

    #[test]
    fn detect_finds_the_matching_kind() {
        let input = "/subscriptions/sub1/resourceGroups/rg1/providers/Microsoft.Network/natGateways/gw1";
        let found: Vec<_> = registry()
            .detect(input, ParseMode::Strict)
            .iter()
            .map(|id| id.kind())
            .collect();
        assert_eq!(found, vec!["nat_gateway"]);
    }

    #[test]
    fn flow_logs_are_detected_in_both_forms() {
        let current = "/subscriptions/s/resourceGroups/rg/providers/Microsoft.Network/networkWatchers/nw/flowLogs/log1";
        let found: Vec<_> = registry()
            .detect(current, ParseMode::Strict)
            .iter()
            .map(|id| id.kind())
            .collect();
        assert_eq!(found, vec!["flow_log", "network_watcher_flow_log"]);
    }

    #[test]
    fn unknown_kind() {
        assert!(registry().get("load_balancer").is_err());
        assert!(registry().len() > 40);
    }
}
