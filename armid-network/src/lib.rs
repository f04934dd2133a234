//! Microsoft.Network identifiers, schemas and kind registry for armid

pub mod ids;
mod registry;
pub mod schemas;

pub use ids::NAMESPACE;
pub use registry::registry;
