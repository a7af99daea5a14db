//! Implementation of the `launchpad templates` command.

use crate::{
    cli::{ListFormat, TemplatesArgs},
    commands::AppContext,
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

pub fn execute(args: TemplatesArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let ctx = AppContext::open(&config)?;
    let templates = ctx.catalog.list();
    let active = &ctx.settings.template.name;

    match args.format {
        ListFormat::Table => {
            output.header("Available templates:")?;
            for template in templates {
                let marker = if template.id == *active { "*" } else { " " };
                output.print(&format!(
                    " {marker} {} {:<18} {:<14} {} entries",
                    template.icon,
                    template.id,
                    template.profession,
                    template.entries.len(),
                ))?;
                if !template.description.is_empty() {
                    output.print(&format!("      {}", template.description))?;
                }
            }
            output.print("")?;
            output.print("* = active template (change with: launchpad config set template.name <id>)")?;
        }

        ListFormat::List => {
            for template in templates {
                println!("{}", template.id);
            }
        }

        ListFormat::Json => {
            let json = serde_json::to_string_pretty(templates).unwrap_or_else(|_| "[]".into());
            println!("{json}");
        }

        ListFormat::Csv => {
            println!("id,name,profession,entries");
            for template in templates {
                println!(
                    "{},{},{},{}",
                    template.id,
                    template.name,
                    template.profession,
                    template.entries.len()
                );
            }
        }
    }

    Ok(())
}
