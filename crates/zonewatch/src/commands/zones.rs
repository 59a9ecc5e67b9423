//! `zonewatch zones`: what the snapshot knows about each zone.

use serde::Serialize;
use tabled::Tabled;

use zonewatch_core::{ChainId, SnapshotStore, TopologyStore, ZoneSource};

use crate::cli::GlobalOpts;
use crate::config::{self, Config};
use crate::error::CliError;
use crate::output;

#[derive(Debug, Serialize)]
struct ZoneSummary {
    chain_id: ChainId,
    clients: usize,
    connections: usize,
    channels: usize,
    endpoint: Option<String>,
    block_height: Option<u64>,
}

#[derive(Tabled)]
struct ZoneRow {
    #[tabled(rename = "Zone")]
    chain_id: String,
    #[tabled(rename = "Clients")]
    clients: usize,
    #[tabled(rename = "Connections")]
    connections: usize,
    #[tabled(rename = "Channels")]
    channels: usize,
    #[tabled(rename = "Endpoint")]
    endpoint: String,
    #[tabled(rename = "Height")]
    height: String,
}

impl From<&ZoneSummary> for ZoneRow {
    fn from(z: &ZoneSummary) -> Self {
        Self {
            chain_id: z.chain_id.to_string(),
            clients: z.clients,
            connections: z.connections,
            channels: z.channels,
            endpoint: z.endpoint.clone().unwrap_or_else(|| "-".into()),
            height: z.block_height.map_or_else(|| "-".into(), |h| h.to_string()),
        }
    }
}

fn summarize<S: ZoneSource + TopologyStore>(store: &S) -> Result<Vec<ZoneSummary>, CliError> {
    store
        .list_zones()?
        .into_iter()
        .map(|chain_id| {
            let topology = store.topology_of(&chain_id)?;
            let endpoint = store.best_remote_endpoint(&chain_id)?;
            Ok(ZoneSummary {
                clients: topology.clients.len(),
                connections: topology.connections.len(),
                channels: topology.channels.len(),
                endpoint: endpoint.as_ref().map(|e| e.url.to_string()),
                block_height: endpoint.map(|e| e.block_height),
                chain_id,
            })
        })
        .collect()
}

pub fn handle(cfg: &Config, global: &GlobalOpts) -> Result<(), CliError> {
    let checker_config = config::resolve_checker_config(global, cfg)?;
    let store = SnapshotStore::open(&checker_config.snapshot_path)?
        .with_zone_filter(checker_config.zones.iter().cloned());

    let zones = summarize(&store)?;
    let out = output::render_list(
        config::resolve_output(global, cfg),
        &zones,
        |z| ZoneRow::from(z),
        |z| z.chain_id.to_string(),
    )?;
    output::print_output(&out, global.quiet);
    Ok(())
}
