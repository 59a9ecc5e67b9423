// ── Discrepancy report rendering ──
//
// The report is a fold over the ordered zone diffs: banner first, then one
// section per zone that has anything to say. Zones, kinds and sub-groups
// with no entries are left out entirely.

use std::iter;

use crate::model::IbcEntity;
use crate::reconcile::{DiffResult, ZoneDiff};

/// First line(s) of every report. Formatted for HTML-capable chat sinks.
pub const BANNER: &str =
    "❗ATTENTION❗<b>Discrepancies found:</b>\n\n<code>Database</code> | <code>IBC</code>\n";

const INDENT: &str = " ";
const DELIMITER: &str = " -> ";

/// Render the full report for an ordered sequence of zone diffs.
///
/// With no discrepancies anywhere the result is exactly [`BANNER`].
pub fn build_report<'a>(diffs: impl IntoIterator<Item = &'a ZoneDiff>) -> String {
    diffs
        .into_iter()
        .filter_map(zone_section)
        .fold(BANNER.to_owned(), |report, section| report + &section)
}

/// Whether a rendered report carries anything beyond the banner.
pub fn is_banner_only(report: &str) -> bool {
    report == BANNER
}

/// Render one zone's section, or `None` if the zone has no discrepancies.
pub fn zone_section(diff: &ZoneDiff) -> Option<String> {
    if diff.is_empty() {
        return None;
    }

    let lines = iter::once(format!("Zone: {}", diff.chain_id))
        .chain(kind_lines(&diff.clients))
        .chain(kind_lines(&diff.connections))
        .chain(kind_lines(&diff.channels));

    Some(lines.map(|line| line + "\n").collect())
}

fn kind_lines<T: IbcEntity>(diff: &DiffResult<T>) -> Vec<String> {
    if diff.is_empty() {
        return Vec::new();
    }

    let mismatched = group(
        "Doesn't match",
        diff.mismatched
            .iter()
            .map(|m| format!("DB:{}{DELIMITER}IBC:{}", m.stored, m.remote)),
    );
    let not_in_db = group("Not in DB", diff.missing_in_store.iter().map(ToString::to_string));
    let not_in_ibc = group(
        "Not in IBC",
        diff.missing_in_remote.iter().map(ToString::to_string),
    );

    iter::once(format!("{INDENT}{}:", T::KIND))
        .chain(mismatched)
        .chain(not_in_db)
        .chain(not_in_ibc)
        .collect()
}

/// A titled sub-group, or nothing when there are no entries.
fn group(title: &str, entries: impl Iterator<Item = String>) -> Vec<String> {
    let entries: Vec<String> = entries
        .map(|entry| format!("{INDENT}{INDENT}{INDENT}{entry}"))
        .collect();
    if entries.is_empty() {
        return entries;
    }

    iter::once(format!("{INDENT}{INDENT}{title}:"))
        .chain(entries)
        .collect()
}
