// ── Topology stores ──
//
// Concrete `ZoneSource` + `TopologyStore` implementations: a JSON export of
// the zones database, and an in-memory store for embedding and tests.

mod memory;
mod snapshot;

pub use memory::MemoryStore;
pub use snapshot::{LcdAddress, SnapshotDocument, SnapshotStore, ZoneRecord};
