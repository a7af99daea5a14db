//! Implementation of the `launchpad remove` command.
//!
//! Removes the registry record only — the folder on disk is untouched.

use tracing::{info, instrument};

use launchpad_core::domain::{DomainError, RecordId};

use crate::{
    cli::{GlobalArgs, RemoveArgs},
    commands::{AppContext, confirm},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

#[instrument(skip_all, fields(id = %args.id))]
pub fn execute(
    args: RemoveArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let id = RecordId::parse(&args.id).ok_or_else(|| CliError::InvalidRecordId {
        id: args.id.clone(),
    })?;

    let mut ctx = AppContext::open(&config)?;

    let Some(record) = ctx.registry.get(id).cloned() else {
        return Err(CliError::Core(
            DomainError::RecordNotFound { id: args.id }.into(),
        ));
    };

    if !global.quiet && !args.yes {
        output.print(&format!(
            "Remove '{}' ({})? The folder on disk is kept.",
            record.name,
            record.path.display()
        ))?;
        if !confirm("Continue?")? {
            return Err(CliError::Cancelled);
        }
    }

    // `get` above guarantees the id exists.
    ctx.registry.remove(id)?;

    info!(id = %id, "record removed");
    output.success(&format!("Removed folder: {}", record.name))?;
    Ok(())
}
