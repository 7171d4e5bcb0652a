use std::thread;
use std::time::Duration;

use clap::ArgMatches;
use serde::Serialize;
use tracing::{error, info, warn};

use veil_core::cursor::{BackendInfo, list_backends};
use veil_core::errors::VeilError;
use veil_core::{VeilConfig, cursor_ops, events};

use crate::table;

pub fn run_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    events::log_app_startup();

    let config = load_config(matches);

    match matches.subcommand() {
        Some(("hide", _)) => handle_hide_command(&config),
        Some(("show", _)) => handle_show_command(&config),
        Some(("hold", sub_matches)) => handle_hold_command(sub_matches, &config),
        Some(("patch", _)) => handle_patch_command(&config),
        Some(("backends", sub_matches)) => handle_backends_command(sub_matches, &config),
        _ => {
            error!(event = "cli.command_unknown");
            Err("Unknown command".into())
        }
    }
}

/// Load config with a warning on errors, then apply CLI overrides.
fn load_config(matches: &ArgMatches) -> VeilConfig {
    let mut config = load_config_with_warning();

    if let Some(backend) = matches.get_one::<String>("backend") {
        config.cursor.backend = Some(backend.clone());
    }

    config
}

fn load_config_with_warning() -> VeilConfig {
    match VeilConfig::load_hierarchy() {
        Ok(config) => config,
        Err(e) => {
            eprintln!(
                "Warning: Could not load config: {}. Using defaults.\n\
                 Tip: Check ~/.veil/config.toml and ./.veil/config.toml for syntax errors.",
                e
            );
            warn!(
                event = "cli.config.load_failed",
                error = %e,
                "Config load failed, using defaults"
            );
            VeilConfig::default()
        }
    }
}

/// Install the process-wide cursor controller for the selected backend.
fn configure_cursor(config: &VeilConfig) -> Result<(), Box<dyn std::error::Error>> {
    match cursor_ops::configure(config) {
        Ok(kind) => {
            info!(event = "cli.cursor.configured", backend = kind.as_str());
            Ok(())
        }
        Err(e) => {
            eprintln!("Failed to select cursor backend: {}", e);
            error!(
                event = "cli.cursor.configure_failed",
                error = %e,
                error_code = e.error_code()
            );
            events::log_app_error(&e);
            Err(e.into())
        }
    }
}

fn handle_hide_command(config: &VeilConfig) -> Result<(), Box<dyn std::error::Error>> {
    configure_cursor(config)?;

    info!(event = "cli.hide_started");
    cursor_ops::hide_cursor();
    println!("Cursor hidden (backend: {})", cursor_ops::active_backend());
    println!("Note: the cursor reappears when veil exits. Use `veil hold` to keep it hidden.");
    info!(event = "cli.hide_completed");
    Ok(())
}

fn handle_show_command(config: &VeilConfig) -> Result<(), Box<dyn std::error::Error>> {
    configure_cursor(config)?;

    info!(event = "cli.show_started");
    cursor_ops::show_cursor();
    println!("Cursor shown (backend: {})", cursor_ops::active_backend());
    info!(event = "cli.show_completed");
    Ok(())
}

fn handle_hold_command(
    matches: &ArgMatches,
    config: &VeilConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    let hold_ms = matches
        .get_one::<u64>("ms")
        .copied()
        .unwrap_or_else(|| config.cursor.hold_ms());

    configure_cursor(config)?;

    info!(event = "cli.hold_started", hold_ms = hold_ms);
    {
        let _hidden = cursor_ops::hide_cursor_scoped();
        thread::sleep(Duration::from_millis(hold_ms));
    }

    println!(
        "Cursor hidden for {}ms (backend: {})",
        hold_ms,
        cursor_ops::active_backend()
    );
    info!(event = "cli.hold_completed", hold_ms = hold_ms);
    Ok(())
}

fn handle_patch_command(config: &VeilConfig) -> Result<(), Box<dyn std::error::Error>> {
    configure_cursor(config)?;

    info!(event = "cli.patch_started");
    match cursor_ops::enable_background_hide() {
        Ok(()) => {
            println!(
                "Background cursor hiding enabled (backend: {})",
                cursor_ops::active_backend()
            );
            info!(event = "cli.patch_completed");
            Ok(())
        }
        Err(e) => {
            eprintln!("Failed to enable background cursor hiding: {}", e);
            error!(
                event = "cli.patch_failed",
                error = %e,
                error_code = e.error_code(),
                status = ?e.status()
            );
            events::log_app_error(&e);
            Err(e.into())
        }
    }
}

#[derive(Serialize)]
struct BackendsOutput {
    active: Option<String>,
    backends: Vec<BackendInfo>,
}

fn handle_backends_command(
    matches: &ArgMatches,
    config: &VeilConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    let json_output = matches.get_flag("json");

    info!(event = "cli.backends_started", json_output = json_output);

    let backends = list_backends();
    let active = match cursor_ops::resolve_backend(config.cursor.backend.as_deref()) {
        Ok((kind, _)) => Some(kind.as_str().to_string()),
        Err(e) => {
            warn!(event = "cli.backends_active_unresolved", error = %e);
            None
        }
    };

    if json_output {
        let output = BackendsOutput {
            active: active.clone(),
            backends,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!("Cursor backends:");
        table::print_backends_table(&backends, active.as_deref().unwrap_or(""));
    }

    info!(
        event = "cli.backends_completed",
        active = ?active
    );
    Ok(())
}
