// ── IBC data checker ──
//
// One pass over every zone, strictly sequential: load, fetch, compare,
// fold. A zone that cannot be verified is logged and skipped so the rest
// of the run still happens.

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::error::CoreError;
use crate::model::ChainId;
use crate::reconcile::ZoneDiff;
use crate::report;
use crate::source::{RemoteFetcher, TopologyStore, ZoneSource};

/// A zone left out of the comparison, and why.
#[derive(Debug, Clone, Serialize)]
pub struct SkippedZone {
    pub chain_id: ChainId,
    pub reason: String,
}

/// Outcome of one checker run.
#[derive(Debug, Clone, Serialize)]
pub struct CheckStatus {
    /// The rendered discrepancy report (banner only when clean).
    pub report: String,
    /// One diff per listed zone, in check order. Skipped zones appear
    /// with an empty diff.
    pub zones: Vec<ZoneDiff>,
    /// Zones that had stored entities but could not be verified.
    pub skipped: Vec<SkippedZone>,
    /// Zones whose stored topology was actually compared with a node.
    pub compared: usize,
    pub checked_at: DateTime<Utc>,
}

impl CheckStatus {
    pub fn has_discrepancies(&self) -> bool {
        self.zones.iter().any(|z| !z.is_empty())
    }

    /// Zones with at least one discrepancy.
    pub fn drifted(&self) -> impl Iterator<Item = &ZoneDiff> {
        self.zones.iter().filter(|z| !z.is_empty())
    }
}

/// Compares every zone's stored IBC topology with its live node.
pub struct IbcDataChecker<S, F> {
    store: S,
    fetcher: F,
}

impl<S, F> IbcDataChecker<S, F>
where
    S: ZoneSource + TopologyStore + Sync,
    F: RemoteFetcher + Sync,
{
    pub fn new(store: S, fetcher: F) -> Self {
        Self { store, fetcher }
    }

    /// Check every zone and build the report.
    ///
    /// Fails only if the zone list itself cannot be obtained.
    pub async fn check(&self) -> Result<CheckStatus, CoreError> {
        info!("checking IBC data of zones");
        let zones = self.store.list_zones()?;
        debug!(count = zones.len(), "zones to check");

        let mut diffs = Vec::with_capacity(zones.len());
        let mut skipped = Vec::new();
        let mut compared = 0;

        for zone in zones {
            match self.compare_zone(&zone).await {
                Ok(None) => diffs.push(ZoneDiff::empty(zone)),
                Ok(Some(diff)) => {
                    compared += 1;
                    if let Some(section) = report::zone_section(&diff) {
                        info!(zone = %zone, count = diff.discrepancy_count(), "discrepancies found");
                        debug!("\n{section}");
                    }
                    diffs.push(diff);
                }
                Err(err) => {
                    if err.is_unverifiable() {
                        warn!(zone = %zone, error = %err, "zone skipped, cannot verify");
                    } else {
                        warn!(zone = %zone, error = %err, "zone skipped, stored data unreadable");
                    }
                    skipped.push(SkippedZone {
                        chain_id: zone.clone(),
                        reason: err.to_string(),
                    });
                    diffs.push(ZoneDiff::empty(zone));
                }
            }
        }

        let report = report::build_report(&diffs);
        let status = CheckStatus {
            report,
            zones: diffs,
            skipped,
            compared,
            checked_at: Utc::now(),
        };

        info!(
            zones = status.zones.len(),
            compared,
            drifted = status.drifted().count(),
            skipped = status.skipped.len(),
            "check finished"
        );
        Ok(status)
    }

    /// Check a single zone.
    ///
    /// A zone with nothing stored is never fetched and yields an empty
    /// diff. A zone with stored entities but no live endpoint, or whose
    /// fetch fails, yields an error for the caller to skip.
    pub async fn check_zone(&self, zone: &ChainId) -> Result<ZoneDiff, CoreError> {
        Ok(self
            .compare_zone(zone)
            .await?
            .unwrap_or_else(|| ZoneDiff::empty(zone.clone())))
    }

    /// `None` when the zone has nothing stored and was not compared.
    async fn compare_zone(&self, zone: &ChainId) -> Result<Option<ZoneDiff>, CoreError> {
        let stored = self.store.topology_of(zone)?;
        if stored.is_empty() {
            debug!(zone = %zone, "nothing stored, skipping remote fetch");
            return Ok(None);
        }

        let endpoint = self
            .store
            .best_remote_endpoint(zone)?
            .ok_or_else(|| CoreError::NoEndpointAvailable { zone: zone.clone() })?;
        debug!(zone = %zone, endpoint = %endpoint.url, height = endpoint.block_height, "selected endpoint");

        let remote = self.fetcher.fetch_snapshot(zone, &endpoint).await?;
        Ok(Some(ZoneDiff::compute(zone.clone(), &stored, &remote)))
    }
}
