// LCD API client modules
//
// Hand-written client for the Cosmos SDK REST gateway (LCD). Only the IBC
// core query endpoints are covered: client states, connections and
// channels, all paginated through the standard `pagination` block.

pub mod client;
pub mod ibc;
pub mod models;

pub use client::LcdClient;
