//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names,
//! aliases, help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "launchpad",
    bin_name = "launchpad",
    version  = env!("CARGO_PKG_VERSION"),
    author   = "Launchpad contributors",
    about    = "\u{1f680} Quick folder launcher for creative projects",
    long_about = "Launchpad registers folder shortcuts, scaffolds new project \
                  directories from profession templates, and finds and launches \
                  project files (.aep, .prproj) inside them.",
    after_help = "EXAMPLES:\n\
        \x20 launchpad create \"Client Reel\" --template video-editor --at ~/Projects\n\
        \x20 launchpad add ~/Projects/archive\n\
        \x20 launchpad scan\n\
        \x20 launchpad launch ~/Projects/Client\\ Reel/Premiere_Projects/cut.prproj",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Create a new project directory from a template.
    #[command(
        visible_alias = "c",
        about = "Create a new project from a template",
        after_help = "EXAMPLES:\n\
            \x20 launchpad create Alpha\n\
            \x20 launchpad create Alpha --template developer --at ~/Code\n\
            \x20 launchpad create Alpha --dry-run"
    )]
    Create(CreateArgs),

    /// Register an existing folder as a shortcut.
    #[command(
        about = "Register an existing folder",
        after_help = "EXAMPLES:\n\
            \x20 launchpad add ~/Projects/archive\n\
            \x20 launchpad add ~/Projects/archive --name \"Archive 2025\""
    )]
    Add(AddArgs),

    /// Remove a registered folder (the folder itself is untouched).
    #[command(
        visible_alias = "rm",
        about = "Remove a registered folder",
        after_help = "EXAMPLES:\n\
            \x20 launchpad remove 9c3b...  # id from `launchpad list`\n\
            \x20 launchpad remove 9c3b... --yes"
    )]
    Remove(RemoveArgs),

    /// List registered folders and projects.
    #[command(
        visible_alias = "ls",
        about = "List registered folders",
        after_help = "EXAMPLES:\n\
            \x20 launchpad list\n\
            \x20 launchpad list --format json"
    )]
    List(ListArgs),

    /// Scan registered folders for project files.
    #[command(
        about = "Scan for project files (.aep, .prproj)",
        after_help = "EXAMPLES:\n\
            \x20 launchpad scan\n\
            \x20 launchpad scan --folder 9c3b...\n\
            \x20 launchpad scan --ext .aep --ext .drp"
    )]
    Scan(ScanArgs),

    /// Open a registered folder in the OS file browser.
    #[command(
        about = "Open a registered folder in the file browser",
        after_help = "EXAMPLES:\n\
            \x20 launchpad open 9c3b...  # id from `launchpad list`"
    )]
    Open(OpenArgs),

    /// Launch a project file or a configured application.
    #[command(
        about = "Launch a project file or application",
        after_help = "EXAMPLES:\n\
            \x20 launchpad launch ~/Projects/Alpha/AEP/intro.aep\n\
            \x20 launchpad launch afterEffects   # key from `launchpad config list`"
    )]
    Launch(LaunchArgs),

    /// List available project templates.
    #[command(
        about = "List available templates",
        after_help = "EXAMPLES:\n\
            \x20 launchpad templates\n\
            \x20 launchpad templates --format json"
    )]
    Templates(TemplatesArgs),

    /// Manage settings (applications, entry toggles, active template).
    #[command(
        about = "Settings management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 launchpad config get template.name\n\
            \x20 launchpad config set template.name video-editor\n\
            \x20 launchpad config set applications.afterEffects \"/Applications/Adobe After Effects.app\"\n\
            \x20 launchpad config set folderStructure.build.enabled false\n\
            \x20 launchpad config list"
    )]
    Config(ConfigCommands),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 launchpad completions bash > ~/.local/share/bash-completion/completions/launchpad\n\
            \x20 launchpad completions zsh  > ~/.zfunc/_launchpad"
    )]
    Completions(CompletionsArgs),
}

// ── create ────────────────────────────────────────────────────────────────────

/// Arguments for `launchpad create`.
#[derive(Debug, Args)]
pub struct CreateArgs {
    /// Project name. Becomes the directory name under the chosen location
    /// and the display label in the folder list.
    #[arg(value_name = "NAME", help = "Project name")]
    pub name: String,

    /// Location to create the project under.
    #[arg(
        long = "at",
        value_name = "DIR",
        default_value = ".",
        help = "Parent directory for the new project"
    )]
    pub at: PathBuf,

    /// Template to scaffold from, bypassing the configured selection.
    #[arg(
        short = 't',
        long = "template",
        value_name = "ID",
        help = "Template id (see `launchpad templates`)"
    )]
    pub template: Option<String>,

    /// Skip the confirmation prompt.
    #[arg(
        short = 'y',
        long = "yes",
        help = "Skip confirmation and create immediately"
    )]
    pub yes: bool,

    /// Preview what would be created without writing any files.
    #[arg(long = "dry-run", help = "Show what would be created without creating")]
    pub dry_run: bool,
}

// ── add ───────────────────────────────────────────────────────────────────────

/// Arguments for `launchpad add`.
#[derive(Debug, Args)]
pub struct AddArgs {
    /// Folder to register. Must exist; use `create` to scaffold new ones.
    #[arg(value_name = "PATH", help = "Folder path to register")]
    pub path: PathBuf,

    /// Display label. Defaults to the last path segment.
    #[arg(short = 'n', long = "name", value_name = "LABEL", help = "Display label")]
    pub name: Option<String>,
}

// ── remove ────────────────────────────────────────────────────────────────────

/// Arguments for `launchpad remove`.
#[derive(Debug, Args)]
pub struct RemoveArgs {
    /// Record id, as shown by `launchpad list`.
    #[arg(value_name = "ID", help = "Record id to remove")]
    pub id: String,

    /// Skip the confirmation prompt.
    #[arg(short = 'y', long = "yes", help = "Skip confirmation")]
    pub yes: bool,
}

// ── list / templates ──────────────────────────────────────────────────────────

/// Arguments for `launchpad list`.
#[derive(Debug, Args)]
pub struct ListArgs {
    /// Output format.
    #[arg(
        long = "format",
        value_enum,
        default_value = "table",
        help = "Output format"
    )]
    pub format: ListFormat,
}

/// Arguments for `launchpad templates`.
#[derive(Debug, Args)]
pub struct TemplatesArgs {
    /// Output format.
    #[arg(
        long = "format",
        value_enum,
        default_value = "table",
        help = "Output format"
    )]
    pub format: ListFormat,
}

/// Output format for listing commands.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ListFormat {
    /// Human-readable table.
    Table,
    /// One name per line.
    List,
    /// JSON array.
    Json,
    /// CSV rows.
    Csv,
}

// ── scan ──────────────────────────────────────────────────────────────────────

/// Arguments for `launchpad scan`.
#[derive(Debug, Args)]
pub struct ScanArgs {
    /// Restrict the scan to one registered folder.
    #[arg(long = "folder", value_name = "ID", help = "Scan a single folder by id")]
    pub folder: Option<String>,

    /// Extensions to match (repeatable). Defaults to .aep and .prproj.
    #[arg(
        long = "ext",
        value_name = "EXT",
        help = "Project file extension to match (repeatable)"
    )]
    pub extensions: Vec<String>,

    /// Output format.
    #[arg(
        long = "format",
        value_enum,
        default_value = "table",
        help = "Output format"
    )]
    pub format: ListFormat,
}

// ── open / launch ─────────────────────────────────────────────────────────────

/// Arguments for `launchpad open`.
#[derive(Debug, Args)]
pub struct OpenArgs {
    /// Record id, as shown by `launchpad list`.
    #[arg(value_name = "ID", help = "Record id to open")]
    pub id: String,
}

/// Arguments for `launchpad launch`.
#[derive(Debug, Args)]
pub struct LaunchArgs {
    /// A configured application key (see `launchpad config list`) or a
    /// path to a project file.
    #[arg(value_name = "TARGET", help = "Application key or file path")]
    pub target: String,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `launchpad config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a settings key.
    Get {
        /// Dotted key path, e.g. `template.name` or `applications.afterEffects`.
        key: String,
    },
    /// Set a settings key to a value.
    Set {
        /// Dotted key path.
        key: String,
        /// New value.
        value: String,
    },
    /// Print all settings values.
    List,
    /// Print the path to the settings file.
    Path,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `launchpad completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn parse_create_command() {
        let cli = Cli::parse_from([
            "launchpad",
            "create",
            "Alpha",
            "--template",
            "developer",
            "--at",
            "/tmp",
            "--yes",
        ]);
        match cli.command {
            Commands::Create(args) => {
                assert_eq!(args.name, "Alpha");
                assert_eq!(args.template.as_deref(), Some("developer"));
                assert!(args.yes);
            }
            other => panic!("expected Create, got {other:?}"),
        }
    }

    #[test]
    fn scan_ext_is_repeatable() {
        let cli = Cli::parse_from(["launchpad", "scan", "--ext", ".aep", "--ext", ".drp"]);
        if let Commands::Scan(args) = cli.command {
            assert_eq!(args.extensions, [".aep", ".drp"]);
        } else {
            panic!("expected Scan command");
        }
    }

    #[test]
    fn quiet_and_verbose_conflict() {
        // clap should reject --quiet --verbose together
        let result = Cli::try_parse_from(["launchpad", "--quiet", "--verbose", "list"]);
        assert!(result.is_err());
    }

    #[test]
    fn config_set_takes_key_and_value() {
        let cli = Cli::parse_from(["launchpad", "config", "set", "template.name", "developer"]);
        match cli.command {
            Commands::Config(ConfigCommands::Set { key, value }) => {
                assert_eq!(key, "template.name");
                assert_eq!(value, "developer");
            }
            other => panic!("expected Config Set, got {other:?}"),
        }
    }
}
