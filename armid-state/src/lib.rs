//! armid state checks
//!
//! Reads a JSON state file of managed resources, each keyed by its resource
//! identifier, and checks those identifiers against the kinds declared by
//! the resource schemas. Identifiers stored with API casing can be rewritten
//! to their canonical form.
//!
//! # Example
//!
//! ```ignore
//! use armid_state::{create_backend, BackendConfig, CheckConfig, Checker};
//!
//! let backend = create_backend(&BackendConfig::local("armid.state.json"))?;
//! let state = backend.read_state().await?.unwrap_or_default();
//!
//! let checker = Checker::new(armid_network::registry(), armid_network::schemas::all_schemas());
//! let report = checker.check(&state);
//! ```

pub mod backend;
pub mod backends;
pub mod check;
pub mod state;

pub use backend::{BackendConfig, BackendError, BackendResult, StateBackend};
pub use backends::{LocalBackend, create_backend};
pub use check::{CheckConfig, CheckReport, Checker, Finding, Rewrite};
pub use state::{ResourceState, StateFile};
