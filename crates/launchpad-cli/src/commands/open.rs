//! Implementation of the `launchpad open` command.

use tracing::instrument;

use launchpad_adapters::ShellLauncher;
use launchpad_core::application::AppLauncher;
use launchpad_core::domain::{DomainError, RecordId};

use crate::{
    cli::OpenArgs,
    commands::AppContext,
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

#[instrument(skip_all, fields(id = %args.id))]
pub fn execute(args: OpenArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let id = RecordId::parse(&args.id).ok_or_else(|| CliError::InvalidRecordId {
        id: args.id.clone(),
    })?;

    let ctx = AppContext::open(&config)?;
    let record = ctx.registry.get(id).ok_or_else(|| {
        CliError::Core(DomainError::RecordNotFound { id: args.id.clone() }.into())
    })?;

    ShellLauncher::new().reveal(&record.path)?;
    output.success(&format!("Opened {}", record.path.display()))?;
    Ok(())
}
