//! armid core
//!
//! Typed identifiers for hierarchical resource-manager paths such as
//! `/subscriptions/{id}/resourceGroups/{rg}/providers/Microsoft.Network/natGateways/{name}`.
//!
//! Each identifier kind is declared once as an [`IdLayout`] (an ordered list
//! of fixed and variable segments); a single engine parses, formats and
//! describes every kind. Identifiers are only ever persisted in their
//! string form.

pub mod association;
pub mod common;
mod error;
mod id;
pub mod layout;
mod macros;
pub mod registry;
pub mod resolver;
pub mod schema;
pub mod tokenizer;
pub mod validation;
pub mod value;

pub use error::{IdError, IdResult};
pub use id::{Identifier, ParseId, ParseIdInsensitively, ResourceId};
pub use layout::{Element, IdLayout, Segment};
pub use registry::{IdKind, Registry};
pub use resolver::ParseMode;
pub use validation::{ValidationError, validate_id, validate_id_str};
pub use value::Value;

#[doc(hidden)]
pub use serde as __serde;
