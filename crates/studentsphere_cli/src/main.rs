//! CLI smoke probe.
//!
//! # Responsibility
//! - Verify `studentsphere_core` linkage and the configured store.
//! - Print one `name=value` line per fact so output diffs cleanly.

use log::error;
use std::process::ExitCode;
use studentsphere_core::{init_logging, Portal, PortalConfig, StoreResult};

fn main() -> ExitCode {
    println!("studentsphere_core ping={}", studentsphere_core::ping());
    println!(
        "studentsphere_core version={}",
        studentsphere_core::core_version()
    );

    let config = match PortalConfig::from_env() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("config error: {err}");
            return ExitCode::FAILURE;
        }
    };

    if let Some(dir) = &config.log_dir {
        if let Err(err) = init_logging(&config.log_level, dir) {
            eprintln!("logging disabled: {err}");
        }
    }

    match probe(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("event=cli_probe module=cli status=error error={err}");
            eprintln!("store error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn probe(config: &PortalConfig) -> StoreResult<()> {
    let portal = Portal::open(config)?;
    let seeded = portal.ensure_initialized()?;
    let location = config
        .db_path
        .as_ref()
        .map(|path| path.display().to_string())
        .unwrap_or_else(|| ":memory:".to_string());

    println!("store={location} seeded={seeded}");
    println!("students={}", portal.students().list()?.len());
    println!("notes={}", portal.notes().list()?.len());
    println!(
        "assignments={} pending={}",
        portal.assignments().list()?.len(),
        portal.assignments().pending_count()?
    );
    println!("marks={}", portal.marks().list()?.len());
    println!("faculty={}", portal.faculty().list()?.len());
    println!("labs={}", portal.labs().list()?.len());
    println!("achievements={}", portal.achievements().list()?.len());
    println!(
        "attendance={} overall={}%",
        portal.attendance().list()?.len(),
        portal.attendance().overall_percentage()?
    );
    Ok(())
}
