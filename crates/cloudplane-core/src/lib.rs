// cloudplane-core: resource lifecycle, state mapping and list reconciliation
// on top of cloudplane-api.

pub mod config;
pub mod context;
pub mod convert;
pub mod data_source;
pub mod error;
pub mod framework;
pub mod identifier;
pub mod model;
pub mod payload;
pub mod provider;
pub mod reconcile;
pub mod resource;

// ── Primary re-exports ──────────────────────────────────────────────
pub use config::{Endpoints, Experiment, ProviderConfig, TlsVerification, WaitSettings};
pub use context::OperationContext;
pub use data_source::DataSource;
pub use error::{CoreError, ErrorKind, Phase};
pub use framework::{ResourceState, Schema};
pub use identifier::{build_internal_id, parse_import_id};
pub use provider::{Provider, ProviderData};
pub use reconcile::{reconcile, reconcile_by_key, reconcile_nullable};
pub use resource::Resource;
