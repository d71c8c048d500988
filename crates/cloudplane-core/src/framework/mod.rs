// Boundary between the provider host and the typed resource code:
// state slot, one-shot typed decoding, and attribute schemas.

pub mod decode;
pub mod schema;
pub mod state;

pub use decode::{decode, encode};
pub use schema::{Attribute, AttributeKind, Schema, Validator};
pub use state::ResourceState;
