//! Config subcommand handlers.

use std::fmt::Write as _;
use std::path::PathBuf;

use dialoguer::{Input, Select};

use crate::cli::{ConfigArgs, ConfigCommand, GlobalOpts};
use crate::config::{self, Config, Profile};
use crate::error::CliError;
use crate::output;

// ── Helpers ─────────────────────────────────────────────────────────

/// Format config as TOML-like text, profiles sorted by name.
fn format_config(cfg: &Config) -> String {
    let mut out = String::new();

    if let Some(ref default) = cfg.default_profile {
        let _ = writeln!(out, "default_profile = \"{default}\"");
    }
    let _ = writeln!(out);
    let _ = writeln!(out, "[defaults]");
    let _ = writeln!(out, "output = \"{}\"", cfg.defaults.output);
    let _ = writeln!(out, "insecure = {}", cfg.defaults.insecure);
    let _ = writeln!(out, "timeout = {}", cfg.defaults.timeout);
    let _ = writeln!(out, "page_limit = {}", cfg.defaults.page_limit);

    for name in cfg.profile_names() {
        let p = &cfg.profiles[name];
        let _ = writeln!(out);
        let _ = writeln!(out, "[profiles.{name}]");
        let _ = writeln!(out, "snapshot = \"{}\"", p.snapshot.display());
        if !p.zones.is_empty() {
            let zones: Vec<String> = p.zones.iter().map(|z| format!("\"{z}\"")).collect();
            let _ = writeln!(out, "zones = [{}]", zones.join(", "));
        }
        if let Some(timeout) = p.timeout {
            let _ = writeln!(out, "timeout = {timeout}");
        }
        if let Some(insecure) = p.insecure {
            let _ = writeln!(out, "insecure = {insecure}");
        }
        if let Some(ref ca) = p.ca_cert {
            let _ = writeln!(out, "ca_cert = \"{}\"", ca.display());
        }
    }

    out.trim_end().to_owned()
}

/// Map a dialoguer / interactive I/O failure into CliError.
fn prompt_err(e: impl std::fmt::Display) -> CliError {
    CliError::Validation {
        field: "interactive".into(),
        reason: format!("prompt failed: {e}"),
    }
}

fn save_config(cfg: &Config) -> Result<PathBuf, CliError> {
    Ok(config::save_config(cfg)?)
}

/// Interactive wizard: build one profile.
fn prompt_profile() -> Result<(String, Profile), CliError> {
    let profile_name: String = Input::new()
        .with_prompt("Profile name")
        .default("default".into())
        .interact_text()
        .map_err(prompt_err)?;

    let snapshot: String = Input::new()
        .with_prompt("Snapshot file (JSON export of the zones database)")
        .default("snapshot.json".into())
        .interact_text()
        .map_err(prompt_err)?;

    let zones: String = Input::new()
        .with_prompt("Zones to check (comma-separated, empty for all)")
        .allow_empty(true)
        .interact_text()
        .map_err(prompt_err)?;
    let zones: Vec<String> = zones
        .split(',')
        .map(str::trim)
        .filter(|z| !z.is_empty())
        .map(String::from)
        .collect();

    let tls_choices = &[
        "System CA store (recommended)",
        "Custom CA certificate",
        "Accept invalid certificates",
    ];
    let tls_selection = Select::new()
        .with_prompt("TLS verification for LCD nodes")
        .items(tls_choices)
        .default(0)
        .interact()
        .map_err(prompt_err)?;

    let (insecure, ca_cert) = match tls_selection {
        0 => (None, None),
        1 => {
            let path: String = Input::new()
                .with_prompt("CA certificate path")
                .interact_text()
                .map_err(prompt_err)?;
            (None, Some(PathBuf::from(path)))
        }
        _ => (Some(true), None),
    };

    let profile = Profile {
        snapshot: snapshot.into(),
        zones,
        timeout: None,
        insecure,
        ca_cert,
    };
    Ok((profile_name, profile))
}

// ── Handler ─────────────────────────────────────────────────────────

pub fn handle(args: ConfigArgs, global: &GlobalOpts) -> Result<(), CliError> {
    match args.command {
        // ── Init: interactive wizard ────────────────────────────────
        ConfigCommand::Init => {
            eprintln!("✨ zonewatch configuration wizard");
            eprintln!("   Config path: {}\n", config::config_path().display());

            let (profile_name, profile) = prompt_profile()?;

            let mut cfg = config::load_config()?;
            cfg.profiles.insert(profile_name.clone(), profile);
            cfg.default_profile = Some(profile_name.clone());

            let path = save_config(&cfg)?;

            eprintln!("\n✓ Configuration written to {}", path.display());
            eprintln!("  Active profile: {profile_name}");
            eprintln!("\n  Test it: zonewatch zones");
            Ok(())
        }

        // ── Show ────────────────────────────────────────────────────
        ConfigCommand::Show => {
            let cfg = config::load_config()?;
            let out = output::render_single(
                config::resolve_output(global, &cfg),
                &cfg,
                format_config,
                |c| c.profile_names().join("\n"),
            )?;
            output::print_output(&out, global.quiet);
            Ok(())
        }

        // ── Path ────────────────────────────────────────────────────
        ConfigCommand::Path => {
            println!("{}", config::config_path().display());
            Ok(())
        }

        // ── Profiles ────────────────────────────────────────────────
        ConfigCommand::Profiles => {
            let cfg = config::load_config()?;
            let default = cfg.default_profile.as_deref().unwrap_or("default");
            if cfg.profiles.is_empty() {
                eprintln!("No profiles configured. Run: zonewatch config init");
            } else {
                for name in cfg.profile_names() {
                    let marker = if name == default { " *" } else { "" };
                    println!("{name}{marker}");
                }
            }
            Ok(())
        }

        // ── SetDefault <name> ───────────────────────────────────────
        ConfigCommand::SetDefault { name } => {
            let mut cfg = config::load_config()?;

            if !cfg.profiles.contains_key(&name) {
                let available = cfg.profile_names();
                return Err(CliError::ProfileNotFound {
                    available: if available.is_empty() {
                        "(none)".into()
                    } else {
                        available.join(", ")
                    },
                    name,
                });
            }

            cfg.default_profile = Some(name.clone());
            save_config(&cfg)?;
            eprintln!("✓ Default profile set to '{name}'");
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_config_sorts_profiles() {
        let mut cfg = Config::default();
        cfg.profiles.insert(
            "testnet".into(),
            Profile {
                snapshot: "testnet.json".into(),
                ..Profile::default()
            },
        );
        cfg.profiles.insert(
            "mainnet".into(),
            Profile {
                snapshot: "mainnet.json".into(),
                zones: vec!["cosmoshub-4".into(), "osmosis-1".into()],
                insecure: Some(true),
                ..Profile::default()
            },
        );

        let text = format_config(&cfg);

        let mainnet = text.find("[profiles.mainnet]").unwrap_or(usize::MAX);
        let testnet = text.find("[profiles.testnet]").unwrap_or(0);
        assert!(mainnet < testnet);
        assert!(text.contains("zones = [\"cosmoshub-4\", \"osmosis-1\"]"));
        assert!(text.contains("page_limit = 100"));
        assert!(!text.ends_with('\n'));
    }
}
