// ── Typed resource models ──
//
// One struct per resource / data source attribute set. Field names are the
// attribute names; every nullable attribute is an `Option` and serialises
// to an explicit `null`. Lists keep null and empty apart.

pub mod dns;
pub mod network;
pub mod network_area;
pub mod public_ip;
pub mod server;

pub use cloudplane_api::iaas::types::Labels;

pub use dns::{RecordSetModel, ZoneModel};
pub use network::NetworkModel;
pub use network_area::{NetworkAreaModel, NetworkAreaRouteModel, NetworkRangeModel};
pub use public_ip::PublicIpModel;
pub use server::ServiceAccountAttachModel;
