// zonewatch-api: Async Rust client for the IBC query endpoints of a Cosmos LCD node

pub mod error;
pub mod lcd;
pub mod transport;

pub use error::Error;
pub use lcd::LcdClient;
pub use transport::{TlsMode, TransportConfig};
