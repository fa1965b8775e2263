use std::fs;
use std::path::PathBuf;

use clap::Parser;
use color_eyre::eyre::WrapErr;
use inkloop::{App, AppState, DirectorySaveTarget, Settings, init_logging, resolve_snapshot};
use inkloop_core::validate;

#[derive(Parser, Debug)]
#[command(name = "inkloop")]
#[command(about = "Terminal dashboard for creative agency metrics")]
struct Args {
    /// Snapshot file (YAML or JSON); the built-in sample is used when absent
    #[arg(short, long)]
    snapshot: Option<PathBuf>,

    /// Path to the data directory (default: ~/.inkloop/)
    #[arg(short, long)]
    data_dir: Option<PathBuf>,

    /// Directory exports are written to (default: {data_dir}/exports)
    #[arg(short, long)]
    export_dir: Option<PathBuf>,

    /// Log level (debug, info, warn, error)
    #[arg(short, long, default_value = "info")]
    log_level: String,

    /// Print data-quality issues in the snapshot and exit
    #[arg(long)]
    validate: bool,
}

fn default_data_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".inkloop")
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = Args::parse();
    let data_dir = args.data_dir.unwrap_or_else(default_data_dir);

    init_logging(&data_dir, &args.log_level)?;

    let mut settings = Settings::load_or_default(&data_dir);
    if let Some(snapshot) = args.snapshot {
        settings.snapshot_path = Some(snapshot);
    }
    if let Some(export_dir) = args.export_dir {
        settings.export_dir = Some(export_dir);
    }

    let snapshot = resolve_snapshot(settings.snapshot_path.as_deref())
        .wrap_err("Failed to load dashboard snapshot")?;

    if args.validate {
        let issues = validate(&snapshot);
        if issues.is_empty() {
            println!("No data-quality issues found.");
        } else {
            for issue in &issues {
                println!("- {issue}");
            }
        }
        return Ok(());
    }

    let export_dir = settings
        .export_dir
        .clone()
        .unwrap_or_else(|| data_dir.join("exports"));
    fs::create_dir_all(&export_dir)
        .wrap_err_with(|| format!("Failed to create export directory {}", export_dir.display()))?;

    let state = AppState::new(snapshot, settings);
    let mut app = App::new(state, Box::new(DirectorySaveTarget::new(export_dir)));

    ratatui::run(|terminal| app.run(terminal))?;

    tracing::info!("Application shutting down");

    Ok(())
}
