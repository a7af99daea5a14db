//! Implementation of the `launchpad list` command.

use crate::{
    cli::{ListArgs, ListFormat},
    commands::AppContext,
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

pub fn execute(args: ListArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let ctx = AppContext::open(&config)?;
    let records = ctx.registry.list();

    match args.format {
        ListFormat::Table => {
            if records.is_empty() {
                output.info("No folders registered yet. Add one with: launchpad add <path>")?;
                return Ok(());
            }

            output.header(&format!("Registered folders ({}):", records.len()))?;
            for record in records {
                let kind = match &record.template {
                    Some(template) => format!(" [{template}]"),
                    None => String::new(),
                };
                output.print(&format!(
                    "  {}  {}{}  {}",
                    record.id,
                    record.name,
                    kind,
                    record.path.display()
                ))?;
            }
        }

        ListFormat::List => {
            for record in records {
                println!("{}", record.name);
            }
        }

        ListFormat::Json => {
            // JSON goes straight to stdout (bypasses OutputManager because
            // it must stay parseable even in non-TTY pipes and quiet mode).
            let json = serde_json::to_string_pretty(records).unwrap_or_else(|_| "[]".into());
            println!("{json}");
        }

        ListFormat::Csv => {
            println!("id,name,path,template");
            for record in records {
                println!(
                    "{},{},{},{}",
                    record.id,
                    record.name,
                    record.path.display(),
                    record.template.as_deref().unwrap_or("")
                );
            }
        }
    }

    Ok(())
}
