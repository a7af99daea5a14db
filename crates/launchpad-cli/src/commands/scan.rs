//! Implementation of the `launchpad scan` command.

use std::collections::HashSet;

use tracing::instrument;

use launchpad_adapters::LocalFilesystem;
use launchpad_core::application::{ProjectScanner, default_extensions};
use launchpad_core::domain::{DomainError, RecordId};

use crate::{
    cli::{ListFormat, ScanArgs},
    commands::AppContext,
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

#[instrument(skip_all)]
pub fn execute(args: ScanArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let ctx = AppContext::open(&config)?;

    if ctx.registry.is_empty() {
        output.info("No folders registered yet. Add one with: launchpad add <path>")?;
        return Ok(());
    }

    // Scan one folder or all of them, in registry order.
    let folders: Vec<_> = match &args.folder {
        Some(raw) => {
            let id = RecordId::parse(raw).ok_or_else(|| CliError::InvalidRecordId {
                id: raw.clone(),
            })?;
            let record = ctx.registry.get(id).ok_or_else(|| {
                CliError::Core(DomainError::RecordNotFound { id: raw.clone() }.into())
            })?;
            vec![record.clone()]
        }
        None => ctx.registry.list().to_vec(),
    };

    let extensions: HashSet<String> = if args.extensions.is_empty() {
        default_extensions()
    } else {
        // Accept both `aep` and `.aep` spellings.
        args.extensions
            .iter()
            .map(|e| {
                if e.starts_with('.') {
                    e.clone()
                } else {
                    format!(".{e}")
                }
            })
            .collect()
    };

    let scanner = ProjectScanner::new(Box::new(LocalFilesystem::new()));
    let projects = scanner.scan(&folders, &extensions);

    if projects.is_empty() {
        let mut exts: Vec<&str> = extensions.iter().map(|s| s.as_str()).collect();
        exts.sort();
        output.info(&format!(
            "No project files found. Looked for: {}",
            exts.join(", ")
        ))?;
        return Ok(());
    }

    match args.format {
        ListFormat::Table => {
            output.header(&format!("{} project(s) found:", projects.len()))?;
            for project in &projects {
                let badge = match project.extension.to_ascii_lowercase().as_str() {
                    ".aep" => "AE",
                    ".prproj" => "PR",
                    _ => "--",
                };
                let created = project
                    .created
                    .map(|t| t.format("%Y-%m-%d").to_string())
                    .unwrap_or_else(|| "-".into());
                output.print(&format!(
                    "  [{badge}] {}  ({} \u{2022} {created})",
                    project.name, project.folder
                ))?;
                output.print(&format!("       {}", project.path.display()))?;
            }
        }

        ListFormat::List => {
            for project in &projects {
                println!("{}", project.path.display());
            }
        }

        ListFormat::Json => {
            let json = serde_json::to_string_pretty(&projects).unwrap_or_else(|_| "[]".into());
            println!("{json}");
        }

        ListFormat::Csv => {
            println!("name,extension,folder,path");
            for project in &projects {
                println!(
                    "{},{},{},{}",
                    project.name,
                    project.extension,
                    project.folder,
                    project.path.display()
                );
            }
        }
    }

    Ok(())
}
