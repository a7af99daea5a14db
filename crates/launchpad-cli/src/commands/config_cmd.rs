//! Implementation of the `launchpad config` command group.
//!
//! Dotted-key access to the settings document. Key spellings match the
//! JSON field names (`template.useCustomPath`, `folderStructure.<entry>.enabled`)
//! so what `config list` prints is what lives in the file.

use std::path::PathBuf;

use tracing::{info, instrument};

use launchpad_core::application::StateStore;
use launchpad_core::domain::EntryToggle;

use crate::{
    cli::ConfigCommands,
    commands::AppContext,
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

#[instrument(skip_all)]
pub fn execute(cmd: ConfigCommands, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let mut ctx = AppContext::open(&config)?;

    match cmd {
        ConfigCommands::Get { key } => {
            let value = get_key(&ctx, &key)?;
            println!("{value}");
            Ok(())
        }

        ConfigCommands::Set { key, value } => {
            set_key(&mut ctx, &key, &value)?;
            ctx.store.save_settings(&ctx.settings)?;
            info!(%key, "setting updated");
            output.success(&format!("Set {key} = {value}"))?;
            Ok(())
        }

        ConfigCommands::List => {
            output.header("Settings:")?;
            output.print(&format!("  template.name            = {}", ctx.settings.template.name))?;
            output.print(&format!(
                "  template.useCustomPath   = {}",
                ctx.settings.template.use_custom_path
            ))?;
            output.print(&format!(
                "  template.customPath      = {}",
                display_opt_path(&ctx.settings.template.custom_path)
            ))?;
            output.print(&format!(
                "  template.placeholderName = {}",
                ctx.settings.template.placeholder_name
            ))?;
            for (key, path) in &ctx.settings.applications {
                output.print(&format!("  applications.{key} = {}", path.display()))?;
            }
            for (entry, toggle) in &ctx.settings.folder_structure {
                output.print(&format!(
                    "  folderStructure.{entry}.enabled = {}",
                    toggle.enabled
                ))?;
            }
            Ok(())
        }

        ConfigCommands::Path => {
            println!("{}", ctx.store.settings_path().display());
            Ok(())
        }
    }
}

fn get_key(ctx: &AppContext, key: &str) -> CliResult<String> {
    let settings = &ctx.settings;

    if let Some(app_key) = key.strip_prefix("applications.") {
        return settings
            .applications
            .get(app_key)
            .map(|p| p.display().to_string())
            .ok_or_else(|| CliError::UnknownConfigKey { key: key.into() });
    }

    if let Some(rest) = key.strip_prefix("folderStructure.") {
        if let Some(entry) = rest.strip_suffix(".enabled") {
            return settings
                .folder_structure
                .get(entry)
                .map(|t| t.enabled.to_string())
                .ok_or_else(|| CliError::UnknownConfigKey { key: key.into() });
        }
    }

    match key {
        "template.name" => Ok(settings.template.name.clone()),
        "template.useCustomPath" => Ok(settings.template.use_custom_path.to_string()),
        "template.customPath" => Ok(display_opt_path(&settings.template.custom_path)),
        "template.placeholderName" => Ok(settings.template.placeholder_name.clone()),
        _ => Err(CliError::UnknownConfigKey { key: key.into() }),
    }
}

fn set_key(ctx: &mut AppContext, key: &str, value: &str) -> CliResult<()> {
    if let Some(app_key) = key.strip_prefix("applications.") {
        if app_key.is_empty() {
            return Err(CliError::UnknownConfigKey { key: key.into() });
        }
        ctx.settings
            .applications
            .insert(app_key.to_string(), PathBuf::from(value));
        return Ok(());
    }

    if let Some(rest) = key.strip_prefix("folderStructure.") {
        if let Some(entry) = rest.strip_suffix(".enabled") {
            let enabled = parse_bool(key, value)?;
            let description = entry_description(ctx, entry);
            ctx.settings
                .folder_structure
                .insert(entry.to_string(), EntryToggle { enabled, description });
            return Ok(());
        }
    }

    match key {
        "template.name" => {
            // Validate against the catalog so a typo surfaces now, not at
            // the next scaffold (where it would silently fall back).
            ctx.catalog
                .get(value)
                .map_err(launchpad_core::error::LaunchpadError::from)?;
            ctx.settings.template.name = value.to_string();
            Ok(())
        }
        "template.useCustomPath" => {
            ctx.settings.template.use_custom_path = parse_bool(key, value)?;
            Ok(())
        }
        "template.customPath" => {
            ctx.settings.template.custom_path = if value.is_empty() {
                None
            } else {
                Some(PathBuf::from(value))
            };
            Ok(())
        }
        "template.placeholderName" => {
            ctx.settings.template.placeholder_name = value.to_string();
            Ok(())
        }
        _ => Err(CliError::UnknownConfigKey { key: key.into() }),
    }
}

fn parse_bool(key: &str, value: &str) -> CliResult<bool> {
    match value.to_ascii_lowercase().as_str() {
        "true" | "on" | "yes" | "1" => Ok(true),
        "false" | "off" | "no" | "0" => Ok(false),
        _ => Err(CliError::InvalidConfigValue {
            key: key.into(),
            reason: format!("expected true/false, got '{value}'"),
        }),
    }
}

/// Keep an existing toggle's description; derive one from the catalog for
/// entries toggled for the first time.
fn entry_description(ctx: &AppContext, entry: &str) -> String {
    if let Some(existing) = ctx.settings.folder_structure.get(entry) {
        return existing.description.clone();
    }
    ctx.catalog
        .list()
        .iter()
        .find(|t| t.entries.iter().any(|e| e.name == entry))
        .map(|t| format!("{} entry", t.name))
        .unwrap_or_default()
}

fn display_opt_path(path: &Option<PathBuf>) -> String {
    path.as_ref()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "(unset)".into())
}
