//! Network watchers, connection monitors and flow logs
//!
//! Flow logs have two string forms. Current flow logs are child resources of
//! a network watcher. Older state stores a legacy form that embeds the
//! watcher ID and the network security group ID:
//!
//! ```text
//! {networkWatcherId}/networkSecurityGroupId{networkSecurityGroupId}
//! ```
//!
//! [`FlowLogId`] accepts either and keeps track of which one it holds.

use armid_core::{
    Element, IdError, IdResult, Identifier, ParseId, ParseIdInsensitively, ParseMode,
    define_resource_id, impl_id_conversions,
};

use super::NAMESPACE;
use super::virtual_network::NetworkSecurityGroupId;

const NETWORK_WATCHER: Element =
    Element::variable("networkWatchers", "network_watcher_name", "Network Watcher Name");

/// Joins the two halves of a legacy flow log ID
const LEGACY_MARKER: &str = "/networkSecurityGroupId";

define_resource_id! {
    pub struct NetworkWatcherId {
        kind: "network_watcher",
        label: "Network Watcher",
        case: insensitive,
        fields: { subscription_id, resource_group_name, network_watcher_name },
        path: [
            Element::subscription(),
            Element::resource_group(),
            Element::provider(NAMESPACE),
            NETWORK_WATCHER,
        ],
    }
}

define_resource_id! {
    pub struct ConnectionMonitorId {
        kind: "connection_monitor",
        label: "Connection Monitor",
        case: strict,
        fields: { subscription_id, resource_group_name, network_watcher_name, connection_monitor_name },
        path: [
            Element::subscription(),
            Element::resource_group(),
            Element::provider(NAMESPACE),
            NETWORK_WATCHER,
            Element::variable("connectionMonitors", "connection_monitor_name", "Connection Monitor Name"),
        ],
    }
}

define_resource_id! {
    /// A flow log in its current, path-based form
    pub struct NetworkWatcherFlowLogId {
        kind: "network_watcher_flow_log",
        label: "Network Watcher Flow Log",
        case: insensitive,
        fields: { subscription_id, resource_group_name, network_watcher_name, flow_log_name },
        path: [
            Element::subscription(),
            Element::resource_group(),
            Element::provider(NAMESPACE),
            NETWORK_WATCHER,
            Element::variable("flowLogs", "flow_log_name", "Flow Log Name"),
        ],
    }
}

impl ConnectionMonitorId {
    pub fn network_watcher(&self) -> NetworkWatcherId {
        NetworkWatcherId::new(
            &self.subscription_id,
            &self.resource_group_name,
            &self.network_watcher_name,
        )
    }
}

impl NetworkWatcherFlowLogId {
    pub fn network_watcher(&self) -> NetworkWatcherId {
        NetworkWatcherId::new(
            &self.subscription_id,
            &self.resource_group_name,
            &self.network_watcher_name,
        )
    }
}

/// A flow log in the legacy form, keyed by watcher and security group
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LegacyFlowLogId {
    pub network_watcher: NetworkWatcherId,
    pub network_security_group: NetworkSecurityGroupId,
}

impl LegacyFlowLogId {
    pub const KIND: &'static str = "legacy_flow_log";
    pub const LABEL: &'static str = "Legacy Flow Log";

    pub fn new(
        network_watcher: NetworkWatcherId,
        network_security_group: NetworkSecurityGroupId,
    ) -> Self {
        Self {
            network_watcher,
            network_security_group,
        }
    }

    pub fn parse(input: &str) -> IdResult<Self> {
        Self::parse_with(input, ParseMode::Strict)
    }

    pub fn parse_insensitively(input: &str) -> IdResult<Self> {
        Self::parse_with(input, ParseMode::Insensitive)
    }

    fn parse_with(input: &str, mode: ParseMode) -> IdResult<Self> {
        let index = find_marker(input, mode).ok_or_else(|| {
            IdError::malformed(input, "expected `{networkWatcherId}/networkSecurityGroupId{networkSecurityGroupId}`")
        })?;
        let (watcher, nsg) = (&input[..index], &input[index + LEGACY_MARKER.len()..]);

        let network_watcher = match mode {
            ParseMode::Strict => NetworkWatcherId::parse(watcher),
            ParseMode::Insensitive => NetworkWatcherId::parse_insensitively(watcher),
        }
        .map_err(|e| IdError::association_part(NetworkWatcherId::LAYOUT.label, e))?;
        let network_security_group = match mode {
            ParseMode::Strict => NetworkSecurityGroupId::parse(nsg),
            ParseMode::Insensitive => NetworkSecurityGroupId::parse_insensitively(nsg),
        }
        .map_err(|e| IdError::association_part(NetworkSecurityGroupId::LAYOUT.label, e))?;

        Ok(Self::new(network_watcher, network_security_group))
    }

    pub fn id(&self) -> String {
        format!(
            "{}{}{}",
            self.network_watcher.id(),
            LEGACY_MARKER,
            self.network_security_group.id()
        )
    }

    pub fn describe(&self) -> String {
        let mut out = format!("{}:", Self::LABEL);
        for (label, value) in self.fields() {
            out.push_str(&format!("\n  {}: {:?}", label, value));
        }
        out
    }

    /// The current-form ID the legacy flow log was migrated to.
    ///
    /// The flow log lives in the watcher's resource group and is named after
    /// the security group it captures.
    pub fn to_current(&self) -> NetworkWatcherFlowLogId {
        let nsg = &self.network_security_group;
        NetworkWatcherFlowLogId::new(
            &self.network_watcher.subscription_id,
            &self.network_watcher.resource_group_name,
            &self.network_watcher.network_watcher_name,
            format!("{}{}{}", NAMESPACE, nsg.resource_group_name, nsg.network_security_group_name),
        )
    }
}

impl Identifier for LegacyFlowLogId {
    fn kind(&self) -> &'static str {
        Self::KIND
    }

    fn id(&self) -> String {
        LegacyFlowLogId::id(self)
    }

    fn describe(&self) -> String {
        LegacyFlowLogId::describe(self)
    }

    fn fields(&self) -> Vec<(&'static str, String)> {
        let mut fields = self.network_watcher.fields();
        fields.extend(self.network_security_group.fields());
        fields
    }
}

impl ParseId for LegacyFlowLogId {
    const KIND: &'static str = LegacyFlowLogId::KIND;
    const LABEL: &'static str = LegacyFlowLogId::LABEL;

    fn parse_id(input: &str) -> IdResult<Self> {
        Self::parse(input)
    }
}

impl ParseIdInsensitively for LegacyFlowLogId {
    fn parse_id_insensitively(input: &str) -> IdResult<Self> {
        Self::parse_insensitively(input)
    }
}

impl_id_conversions!(LegacyFlowLogId);

/// A flow log in either form
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FlowLogId {
    Current(NetworkWatcherFlowLogId),
    Legacy(LegacyFlowLogId),
}

impl FlowLogId {
    pub const KIND: &'static str = "flow_log";
    pub const LABEL: &'static str = "Flow Log";

    pub fn parse(input: &str) -> IdResult<Self> {
        Self::parse_with(input, ParseMode::Strict)
    }

    pub fn parse_insensitively(input: &str) -> IdResult<Self> {
        Self::parse_with(input, ParseMode::Insensitive)
    }

    fn parse_with(input: &str, mode: ParseMode) -> IdResult<Self> {
        if find_marker(input, mode).is_some() {
            return LegacyFlowLogId::parse_with(input, mode).map(FlowLogId::Legacy);
        }
        match mode {
            ParseMode::Strict => NetworkWatcherFlowLogId::parse(input),
            ParseMode::Insensitive => NetworkWatcherFlowLogId::parse_insensitively(input),
        }
        .map(FlowLogId::Current)
    }

    pub fn id(&self) -> String {
        match self {
            FlowLogId::Current(id) => id.id(),
            FlowLogId::Legacy(id) => id.id(),
        }
    }

    pub fn describe(&self) -> String {
        match self {
            FlowLogId::Current(id) => id.describe(),
            FlowLogId::Legacy(id) => id.describe(),
        }
    }

    pub fn is_legacy(&self) -> bool {
        matches!(self, FlowLogId::Legacy(_))
    }

    /// The current-form ID, migrating legacy IDs
    pub fn to_current(&self) -> NetworkWatcherFlowLogId {
        match self {
            FlowLogId::Current(id) => id.clone(),
            FlowLogId::Legacy(id) => id.to_current(),
        }
    }

    pub fn network_watcher(&self) -> NetworkWatcherId {
        match self {
            FlowLogId::Current(id) => id.network_watcher(),
            FlowLogId::Legacy(id) => id.network_watcher.clone(),
        }
    }
}

impl Identifier for FlowLogId {
    fn kind(&self) -> &'static str {
        Self::KIND
    }

    fn id(&self) -> String {
        FlowLogId::id(self)
    }

    fn describe(&self) -> String {
        FlowLogId::describe(self)
    }

    fn fields(&self) -> Vec<(&'static str, String)> {
        match self {
            FlowLogId::Current(id) => id.fields(),
            FlowLogId::Legacy(id) => id.fields(),
        }
    }
}

impl ParseId for FlowLogId {
    const KIND: &'static str = FlowLogId::KIND;
    const LABEL: &'static str = FlowLogId::LABEL;

    fn parse_id(input: &str) -> IdResult<Self> {
        Self::parse(input)
    }
}

impl ParseIdInsensitively for FlowLogId {
    fn parse_id_insensitively(input: &str) -> IdResult<Self> {
        Self::parse_insensitively(input)
    }
}

impl_id_conversions!(FlowLogId);

impl From<NetworkWatcherFlowLogId> for FlowLogId {
    fn from(id: NetworkWatcherFlowLogId) -> Self {
        FlowLogId::Current(id)
    }
}

impl From<LegacyFlowLogId> for FlowLogId {
    fn from(id: LegacyFlowLogId) -> Self {
        FlowLogId::Legacy(id)
    }
}

/// Offset of the legacy marker, only where a subscription-scoped NSG ID follows it
fn find_marker(input: &str, mode: ParseMode) -> Option<usize> {
    let needle = format!("{}/subscriptions/", LEGACY_MARKER);
    match mode {
        ParseMode::Strict => input.find(&needle),
        ParseMode::Insensitive => input
            .to_ascii_lowercase()
            .find(&needle.to_ascii_lowercase()),
    }
}
