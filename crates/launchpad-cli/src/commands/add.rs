//! Implementation of the `launchpad add` command.

use tracing::{info, instrument};

use launchpad_core::domain::{self, FolderRecord};

use crate::{
    cli::AddArgs,
    commands::AppContext,
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Register an existing folder. Re-adding a known path refreshes its
/// label instead of duplicating it — the output says which happened.
#[instrument(skip_all, fields(path = %args.path.display()))]
pub fn execute(args: AddArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    domain::validate_folder_path(&args.path)
        .map_err(launchpad_core::error::LaunchpadError::from)?;

    if !args.path.is_dir() {
        return Err(CliError::FolderMissing {
            path: args.path.clone(),
        });
    }

    // Normalize so the same folder given as `./x` and `x` dedupes.
    let path = args.path.canonicalize()?;

    let name = match &args.name {
        Some(label) => {
            domain::validate_display_name(label)
                .map_err(launchpad_core::error::LaunchpadError::from)?;
            label.clone()
        }
        None => FolderRecord::name_from_path(&path),
    };

    let mut ctx = AppContext::open(&config)?;
    let (record, inserted) = ctx.registry.add(&path, &name)?;

    info!(id = %record.id, inserted, "folder registered");

    if inserted {
        output.success(&format!("Added folder: {name}"))?;
    } else {
        output.success(&format!("Updated folder: {name}"))?;
    }
    output.print(&format!("  id:   {}", record.id))?;
    output.print(&format!("  path: {}", record.path.display()))?;

    Ok(())
}
