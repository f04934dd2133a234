//! Identifiers shared by every provider namespace

use crate::define_resource_id;
use crate::layout::Element;

define_resource_id! {
    /// A subscription, the root of every subscription-scoped identifier
    pub struct SubscriptionId {
        kind: "subscription",
        label: "Subscription",
        case: insensitive,
        fields: { subscription_id },
        path: [Element::subscription()],
    }
}

define_resource_id! {
    /// A resource group within a subscription
    pub struct ResourceGroupId {
        kind: "resource_group",
        label: "Resource Group",
        case: insensitive,
        fields: { subscription_id, resource_group_name },
        path: [Element::subscription(), Element::resource_group()],
    }
}

define_resource_id! {
    /// A management group (tenant scope)
    pub struct ManagementGroupId {
        kind: "management_group",
        label: "Management Group",
        case: insensitive,
        fields: { management_group_name },
        path: [
            Element::provider("Microsoft.Management"),
            Element::variable("managementGroups", "management_group_name", "Management Group Name"),
        ],
    }
}

impl ResourceGroupId {
    /// The subscription this resource group belongs to
    pub fn subscription(&self) -> SubscriptionId {
        SubscriptionId::new(&self.subscription_id)
    }
}
