//! Command handlers.
//!
//! Each handler is thin wiring: build adapters, call core services,
//! print. No business logic lives here.

pub mod add;
pub mod completions;
pub mod config_cmd;
pub mod create;
pub mod launch;
pub mod list;
pub mod open;
pub mod remove;
pub mod scan;
pub mod templates;

use std::io::{self, Write};

use launchpad_adapters::{JsonStateStore, builtin_templates};
use launchpad_core::application::{FolderRegistry, StateStore, TemplateCatalog};
use launchpad_core::domain::Settings;

use crate::config::AppConfig;
use crate::error::CliResult;

/// Everything a command needs: the store, the loaded settings, the
/// catalog (built-ins merged with settings-defined templates), and the
/// registry loaded from disk.
///
/// Owned by exactly one handler per invocation; mutations go through
/// `&mut self`, which is what makes overlapping "load → mutate → persist"
/// sequences impossible within a process.
pub struct AppContext {
    pub store: JsonStateStore,
    pub settings: Settings,
    pub catalog: TemplateCatalog,
    pub registry: FolderRegistry,
}

impl AppContext {
    /// Open (and on first run, seed) the data directory and load
    /// everything.
    pub fn open(config: &AppConfig) -> CliResult<Self> {
        let store = JsonStateStore::new(&config.data_dir)?;
        store.initialize(&builtin_templates::all())?;

        let settings = store.load_settings()?;
        let catalog = TemplateCatalog::with_overrides(builtin_templates::all(), &settings.templates)?;
        let registry = FolderRegistry::load(Box::new(store.clone()))?;

        Ok(Self {
            store,
            settings,
            catalog,
            registry,
        })
    }
}

/// Interactive Y/n confirmation on stdin. Empty input means yes.
pub fn confirm(prompt: &str) -> CliResult<bool> {
    print!("{prompt} [Y/n] ");
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;

    let input = input.trim().to_ascii_lowercase();
    Ok(input.is_empty() || input == "y" || input == "yes")
}
