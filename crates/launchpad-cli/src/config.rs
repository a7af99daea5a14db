//! Application configuration: where the persisted state lives.
//!
//! Resolution order (highest priority first):
//!
//! 1. `--data-dir` CLI flag
//! 2. `LAUNCHPAD_DATA_DIR` environment variable (picked up by clap's
//!    `env` attribute on the same flag)
//! 3. The platform data directory via `directories::ProjectDirs`
//! 4. `.launchpad` in the current directory (last-resort fallback for
//!    environments without a resolvable home)

use std::path::PathBuf;

use crate::cli::GlobalArgs;

/// Resolved configuration for one invocation.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Directory holding `folders.json` and `settings.json`.
    pub data_dir: PathBuf,
}

impl AppConfig {
    /// Resolve the configuration from global flags.
    pub fn load(global: &GlobalArgs) -> Self {
        let data_dir = global
            .data_dir
            .clone()
            .unwrap_or_else(Self::default_data_dir);
        Self { data_dir }
    }

    /// Platform data directory for the launcher.
    pub fn default_data_dir() -> PathBuf {
        directories::ProjectDirs::from("com", "launchpad", "launchpad")
            .map(|d| d.data_dir().to_path_buf())
            .unwrap_or_else(|| PathBuf::from(".launchpad"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::global::OutputFormat;

    fn global_with(data_dir: Option<PathBuf>) -> GlobalArgs {
        GlobalArgs {
            verbose: 0,
            quiet: false,
            no_color: true,
            data_dir,
            output_format: OutputFormat::Plain,
        }
    }

    #[test]
    fn explicit_data_dir_wins() {
        let cfg = AppConfig::load(&global_with(Some(PathBuf::from("/tmp/lp"))));
        assert_eq!(cfg.data_dir, PathBuf::from("/tmp/lp"));
    }

    #[test]
    fn default_data_dir_is_non_empty() {
        let cfg = AppConfig::load(&global_with(None));
        assert!(!cfg.data_dir.as_os_str().is_empty());
    }
}
