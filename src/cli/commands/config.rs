//! Show or initialize the configuration file

use std::path::Path;

use docval::config::GlobalConfig;
use docval::output::{OperationResult, OutputMode};

use crate::cli::app::ConfigAction;

/// Run a `config` subcommand
pub fn config(
    action: ConfigAction,
    path: &Path,
    current: GlobalConfig,
    mode: OutputMode,
) -> anyhow::Result<()> {
    match action {
        ConfigAction::Show => {
            show(path, current, mode);
            Ok(())
        },
        ConfigAction::Init { force } => init(path, force, mode),
    }
}

fn show(path: &Path, current: GlobalConfig, mode: OutputMode) {
    if mode == OutputMode::Json {
        println!(
            "{}",
            serde_json::json!({
                "path": path.display().to_string(),
                "exists": path.exists(),
                "config": current,
            })
        );
        return;
    }

    println!("Config file: {}", path.display());
    if !path.exists() {
        println!("  (not found, using defaults)");
    }
    println!();
    match current.default_type {
        Some(t) => println!("  default_type = {t}"),
        None => println!("  default_type = (none)"),
    }
    println!("  output.json  = {}", current.output.json);
    println!("  output.color = {}", current.output.color);
}

fn init(path: &Path, force: bool, mode: OutputMode) -> anyhow::Result<()> {
    if path.exists() && !force {
        OperationResult {
            success: false,
            message: format!("Config already exists at {}. Use --force to overwrite.", path.display()),
        }
        .render(mode);
        return Ok(());
    }

    GlobalConfig::default().save_to(path)?;
    log::debug!("wrote default config to {}", path.display());

    OperationResult {
        success: true,
        message: format!("Created {}", path.display()),
    }
    .render(mode);
    Ok(())
}
