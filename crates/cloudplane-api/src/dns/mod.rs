// DNS API client: zones and record sets.

pub mod client;
pub mod types;
pub mod wait;

pub use client::DnsClient;
