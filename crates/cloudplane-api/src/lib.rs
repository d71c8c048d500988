// cloudplane-api: Async Rust client for the cloudplane control-plane APIs
// (DNS, IaaS v1, IaaS v2alpha) plus the polling wait handler.

pub mod dns;
pub mod error;
pub mod iaas;
pub mod iaas_alpha;
pub mod rest;
pub mod transport;
pub mod wait;

pub use dns::DnsClient;
pub use error::Error;
pub use iaas::IaasClient;
pub use iaas_alpha::IaasAlphaClient;
pub use rest::RestClient;
pub use transport::{TlsMode, TransportConfig};
pub use wait::{WaitHandler, WaitState};
