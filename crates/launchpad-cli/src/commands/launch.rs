//! Implementation of the `launchpad launch` command.

use std::path::PathBuf;

use tracing::{debug, instrument};

use launchpad_adapters::ShellLauncher;
use launchpad_core::application::AppLauncher;

use crate::{
    cli::LaunchArgs,
    commands::AppContext,
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

/// Launch a configured application key or a project file path.
///
/// Keys are looked up in `settings.applications` first, so a target like
/// `afterEffects` resolves to the registered bundle path; anything else
/// is treated as a path and handed to the OS opener.
#[instrument(skip_all, fields(target = %args.target))]
pub fn execute(args: LaunchArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let ctx = AppContext::open(&config)?;

    let path: PathBuf = match ctx.settings.applications.get(&args.target) {
        Some(registered) => {
            debug!(key = %args.target, path = %registered.display(), "application key resolved");
            registered.clone()
        }
        None => PathBuf::from(&args.target),
    };

    ShellLauncher::new().launch(&path)?;
    output.success(&format!("Launched {}", path.display()))?;
    Ok(())
}
