//! IBC topology reconciliation between a stored snapshot and live nodes.
//!
//! This crate owns the domain model and the drift-detection logic of the
//! zonewatch workspace:
//!
//! - **[`IbcDataChecker`]** — Runs one health-check pass: lists zones,
//!   loads each zone's stored topology, fetches the live topology from the
//!   zone's most advanced LCD endpoint and folds every [`ZoneDiff`] into a
//!   [`CheckStatus`]. Zones that cannot be verified are logged and skipped,
//!   never reported as drift.
//!
//! - **Reconciler** ([`reconcile`]) — Pure set comparison of stored vs.
//!   remote clients, connections and channels, producing a [`DiffResult`]
//!   per entity kind.
//!
//! - **Report builder** ([`report`]) — Deterministic text rendering of the
//!   diffs, suitable for chat alerts.
//!
//! - **Collaborators** ([`source`]) — [`ZoneSource`], [`TopologyStore`] and
//!   [`RemoteFetcher`] traits, with a JSON [`SnapshotStore`], an in-memory
//!   [`MemoryStore`] and the LCD-backed [`LcdFetcher`].

pub mod checker;
pub mod config;
pub mod convert;
pub mod error;
pub mod fetch;
pub mod model;
pub mod reconcile;
pub mod report;
pub mod source;
pub mod store;

// ── Primary re-exports ──────────────────────────────────────────────
pub use checker::{CheckStatus, IbcDataChecker, SkippedZone};
pub use config::{CheckerConfig, TlsVerification};
pub use error::CoreError;
pub use fetch::LcdFetcher;
pub use reconcile::{DiffResult, Mismatch, ZoneDiff};
pub use source::{RemoteFetcher, TopologyStore, ZoneSource};
pub use store::{MemoryStore, SnapshotStore};

// Re-export model types at the crate root for ergonomics.
pub use model::{
    ChainId, Channel, Client, Connection, Endpoint, EntityKind, IbcEntity, RemoteSnapshot,
    Topology,
};
