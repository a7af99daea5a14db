//! Implementation of the `launchpad create` command.
//!
//! Responsibility: resolve the template and target path, scaffold via the
//! core, record the result in the registry, display the outcome.

use std::path::PathBuf;

use tracing::{debug, info, instrument};

use launchpad_adapters::LocalFilesystem;
use launchpad_core::application::{Filesystem, Scaffolder, template_from_listing};
use launchpad_core::domain::{self, EntryKind, Template};

use crate::{
    cli::{CreateArgs, GlobalArgs},
    commands::{AppContext, confirm},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Execute the `launchpad create` command.
///
/// Dispatch sequence:
/// 1. Validate the project name
/// 2. Resolve the template (flag → custom folder override → settings → default)
/// 3. Confirm with the user unless `--yes` or `--quiet`
/// 4. Early-exit if `--dry-run`
/// 5. Scaffold via the core `Scaffolder`
/// 6. Record the project in the registry (prepended) and print next steps
#[instrument(skip_all, fields(project = %args.name))]
pub fn execute(
    args: CreateArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    // 1. Validate name
    domain::validate_display_name(&args.name).map_err(|e| CliError::InvalidProjectName {
        name: args.name.clone(),
        reason: e.to_string(),
    })?;

    let mut ctx = AppContext::open(&config)?;
    let filesystem = LocalFilesystem::new();

    // 2. Resolve template
    let template = resolve_template(&args, &ctx, &filesystem)?;
    let target: PathBuf = args.at.join(&args.name);

    debug!(
        template = %template.id,
        target = %target.display(),
        "create resolved"
    );

    // 3. Show configuration and confirm
    if !global.quiet && !args.yes && !args.dry_run {
        show_configuration(&template, &target, &output)?;
        if !confirm("Create project?")? {
            return Err(CliError::Cancelled);
        }
    }

    let disabled = ctx.settings.disabled_entries();

    // 4. Dry run: describe but do not write.
    if args.dry_run {
        output.info(&format!(
            "Dry run: would create '{}' at {}",
            args.name,
            target.display(),
        ))?;
        for entry in template.enabled_entries(&disabled) {
            let marker = match entry.kind {
                EntryKind::Directory => "/",
                EntryKind::File => "",
            };
            output.print(&format!("  {}{marker}", entry.name))?;
        }
        return Ok(());
    }

    // 5. Scaffold
    output.header(&format!("Creating '{}'...", args.name))?;
    info!(target = %target.display(), template = %template.id, "scaffold started");

    let scaffolder = Scaffolder::new(Box::new(filesystem));
    let report = scaffolder.scaffold(&target, &template, &disabled)?;

    // 6. Record the project. A persist failure is surfaced, but the
    //    scaffolded tree stays on disk either way.
    ctx.registry
        .add_project(&report.root, &args.name, Some(template.id.clone()))?;

    info!(
        created = report.created.len(),
        skipped = report.skipped.len(),
        "scaffold completed"
    );

    output.success(&format!(
        "Project '{}' created at {}",
        args.name,
        report.root.display()
    ))?;

    if !report.skipped.is_empty() {
        output.warning(&format!(
            "{} existing entr{} left untouched",
            report.skipped.len(),
            if report.skipped.len() == 1 { "y" } else { "ies" },
        ))?;
    }

    if !global.quiet {
        output.print("")?;
        output.print("Next steps:")?;
        output.print(&format!("  launchpad open {}", registered_id(&ctx, &report.root)))?;
        output.print("  launchpad scan")?;
    }

    Ok(())
}

/// Template resolution order: `--template` flag beats the settings
/// custom-folder override beats the configured active template, which
/// falls back to the catalog default when stale.
fn resolve_template(
    args: &CreateArgs,
    ctx: &AppContext,
    filesystem: &LocalFilesystem,
) -> CliResult<Template> {
    if let Some(id) = &args.template {
        return Ok(ctx.catalog.get(id).map_err(launchpad_core::error::LaunchpadError::from)?.clone());
    }

    let selection = &ctx.settings.template;
    if selection.use_custom_path {
        if let Some(custom) = &selection.custom_path {
            debug!(path = %custom.display(), "using custom template folder");
            let names = filesystem
                .list_dir(custom)?
                .into_iter()
                .map(|e| e.file_name)
                .collect::<Vec<_>>();
            let template = template_from_listing("custom", "Custom folder", names)
                .map_err(launchpad_core::error::LaunchpadError::from)?;
            return Ok(template);
        }
    }

    Ok(ctx.catalog.get_or_default(&selection.name).clone())
}

fn show_configuration(
    template: &Template,
    target: &std::path::Path,
    out: &OutputManager,
) -> CliResult<()> {
    out.header("Configuration")?;
    out.print(&format!("  Template:  {} ({})", template.name, template.id))?;
    out.print(&format!("  Entries:   {}", template.entries.len()))?;
    out.print(&format!("  Location:  {}", target.display()))?;
    out.print("")?;
    Ok(())
}

/// Short id of the record that now tracks `root`, for the next-steps hint.
fn registered_id(ctx: &AppContext, root: &std::path::Path) -> String {
    ctx.registry
        .find_by_path(root)
        .map(|r| r.id.to_string())
        .unwrap_or_else(|| "<id>".to_string())
}
