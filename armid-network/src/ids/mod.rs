//! Microsoft.Network identifiers

pub mod application_gateway;
pub mod nat_gateway;
pub mod network_manager;
pub mod network_watcher;
pub mod private_endpoint;
pub mod virtual_hub;
pub mod virtual_network;
pub mod virtual_network_gateway;

/// Provider namespace shared by every identifier in this crate
pub const NAMESPACE: &str = "Microsoft.Network";

pub use application_gateway::*;
pub use nat_gateway::*;
pub use network_manager::*;
pub use network_watcher::*;
pub use private_endpoint::*;
pub use virtual_hub::*;
pub use virtual_network::*;
pub use virtual_network_gateway::*;
