//! `zonewatch check`: run the checker over every zone and print the report.

use tracing::debug;

use zonewatch_core::{CheckStatus, IbcDataChecker, LcdFetcher, SnapshotStore};

use crate::cli::{CheckArgs, GlobalOpts, OutputFormat};
use crate::config::{self, Config};
use crate::error::CliError;
use crate::output;
use crate::progress::Spinner;

pub async fn handle(args: &CheckArgs, cfg: &Config, global: &GlobalOpts) -> Result<(), CliError> {
    let checker_config = config::resolve_checker_config(global, cfg)?;
    debug!(snapshot = %checker_config.snapshot_path.display(), "opening snapshot");

    let store = SnapshotStore::open(&checker_config.snapshot_path)?
        .with_zone_filter(checker_config.zones.iter().cloned());
    let fetcher = LcdFetcher::new(&checker_config)?;
    let checker = IbcDataChecker::new(store, fetcher);

    let spinner = Spinner::start("Checking IBC data of zones…", global.quiet);
    let result = checker.check().await;
    spinner.finish_clear();
    let status = result?;

    let format = config::resolve_output(global, cfg);
    let rendered = render(format, &status, args.always_report)?;
    output::print_output(&rendered, global.quiet);

    if !global.quiet {
        eprintln!(
            "{}",
            output::status_line(
                &summary(&status),
                !status.has_discrepancies() && status.skipped.is_empty(),
                output::should_color(global.color),
            )
        );
    }

    outcome(args, &status)
}

/// Render the run in the requested format. In text mode a clean report is
/// suppressed unless `always_report` is set.
fn render(format: OutputFormat, status: &CheckStatus, always_report: bool) -> Result<String, CliError> {
    output::render_single(
        format,
        status,
        |s| {
            if s.has_discrepancies() || always_report {
                s.report.trim_end_matches('\n').to_owned()
            } else {
                String::new()
            }
        },
        |s| {
            s.drifted()
                .map(|z| z.chain_id.to_string())
                .collect::<Vec<_>>()
                .join("\n")
        },
    )
}

/// Zones with nothing stored are listed but never compared.
fn summary(status: &CheckStatus) -> String {
    let drifted = status.drifted().count();
    let mut line = format!(
        "{} of {} zone(s) compared, {drifted} with discrepancies",
        status.compared,
        status.zones.len()
    );
    if !status.skipped.is_empty() {
        line.push_str(&format!(", {} could not be verified", status.skipped.len()));
    }
    line
}

/// Exit status requested by `--fail-on-drift` / `--fail-on-skip`.
fn outcome(args: &CheckArgs, status: &CheckStatus) -> Result<(), CliError> {
    if args.fail_on_drift && status.has_discrepancies() {
        return Err(CliError::DriftDetected {
            zones: status.drifted().count(),
        });
    }
    if args.fail_on_skip && !status.skipped.is_empty() {
        return Err(CliError::ZonesUnverified {
            count: status.skipped.len(),
            zones: status
                .skipped
                .iter()
                .map(|s| s.chain_id.to_string())
                .collect::<Vec<_>>()
                .join(", "),
        });
    }
    Ok(())
}
