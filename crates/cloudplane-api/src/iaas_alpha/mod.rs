// IaaS API (v2alpha) client: region-scoped networks.

pub mod client;
pub mod types;
pub mod wait;

pub use client::IaasAlphaClient;
