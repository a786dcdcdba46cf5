use std::fs::{self, File};
use std::io;
use std::process::ExitCode;

use clap::Parser;
use log::{LevelFilter, info, warn};
use simplelog::{ConfigBuilder, WriteLogger};

use tasklist::cli::{Args, Command, run_command};
use tasklist::core::config::{self, ResolvedConfig};
use tasklist::core::storage::JsonSlotStore;
use tasklist::tui;

fn main() -> ExitCode {
    let args = Args::parse();
    dotenv::dotenv().ok();

    let file_config = config::load_config().unwrap_or_else(|e| {
        eprintln!("tasklist: {e}; using defaults");
        Default::default()
    });
    let resolved = config::resolve(&file_config, &args.overrides());

    init_logging(resolved.log_level);
    info!(
        "tasklist starting (slot: {}, data dir: {})",
        resolved.slot,
        resolved.data_dir.display()
    );

    let outcome = match args.command.unwrap_or(Command::Tui) {
        Command::Tui => tui::run(resolved).map_err(|e| e.to_string()),
        command => run_cli(&command, &resolved),
    };

    match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            warn!("Exiting with error: {}", message);
            eprintln!("tasklist: {message}");
            ExitCode::FAILURE
        }
    }
}

fn run_cli(command: &Command, resolved: &ResolvedConfig) -> Result<(), String> {
    let mut store =
        JsonSlotStore::new(&resolved.data_dir, &resolved.slot).map_err(|e| e.to_string())?;
    let stdout = io::stdout();
    let mut out = stdout.lock();
    run_command(command, &mut store, &mut out).map_err(|e| e.to_string())
}

/// Initialize file logger. The TUI owns the terminal, so logs go to
/// `~/.tasklist/tasklist.log` only.
fn init_logging(level: LevelFilter) {
    let Some(path) = config::log_path() else {
        return;
    };
    if let Some(parent) = path.parent()
        && fs::create_dir_all(parent).is_err()
    {
        return;
    }

    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();

    if let Ok(log_file) = File::options().create(true).append(true).open(&path) {
        let _ = WriteLogger::init(level, log_config, log_file);
    }
}
