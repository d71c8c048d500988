// IaaS API (v1) client: networks, network areas, public IPs, servers.

pub mod client;
pub mod types;
pub mod wait;

pub use client::IaasClient;
