// ── Domain model ──
//
// Canonical IBC topology types shared by the store and the remote side.
// Both halves of a comparison use the same types so their textual
// renderings line up in the report.

pub mod chain_id;
pub mod endpoint;
pub mod topology;

pub use chain_id::ChainId;
pub use endpoint::{Endpoint, select_best_endpoint};
pub use topology::{Channel, Client, Connection, EntityKind, IbcEntity, RemoteSnapshot, Topology};
