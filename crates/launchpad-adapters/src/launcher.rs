//! OS shell integration: revealing folders and launching detached
//! processes.

use std::path::Path;
use std::process::{Command, Stdio};

use tracing::{debug, info};

use launchpad_core::{
    application::{AppLauncher, ApplicationError},
    error::LaunchpadResult,
};

/// Production launcher shelling out to the platform opener.
///
/// The spawned process is fully detached: stdio is nulled and the child
/// handle is dropped without waiting, so closing the launcher never takes
/// the opened application down with it.
#[derive(Debug, Clone, Copy, Default)]
pub struct ShellLauncher;

impl ShellLauncher {
    pub fn new() -> Self {
        Self
    }

    fn spawn_detached(&self, program: &str, args: &[&str], target: &Path) -> LaunchpadResult<()> {
        debug!(program, target = %target.display(), "spawning");
        Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map(|_child| ()) // child handle dropped, never awaited
            .map_err(|e| {
                ApplicationError::Launch {
                    path: target.to_path_buf(),
                    reason: e.to_string(),
                }
                .into()
            })
    }
}

impl AppLauncher for ShellLauncher {
    fn reveal(&self, path: &Path) -> LaunchpadResult<()> {
        if !path.exists() {
            return Err(ApplicationError::Launch {
                path: path.to_path_buf(),
                reason: "path does not exist".into(),
            }
            .into());
        }

        let path_str = path.to_string_lossy();
        info!(path = %path.display(), "opening in file browser");

        #[cfg(target_os = "macos")]
        return self.spawn_detached("open", &[&path_str], path);

        #[cfg(target_os = "windows")]
        return self.spawn_detached("explorer", &[&path_str], path);

        #[cfg(not(any(target_os = "macos", target_os = "windows")))]
        self.spawn_detached("xdg-open", &[&path_str], path)
    }

    fn launch(&self, path: &Path) -> LaunchpadResult<()> {
        if !path.exists() {
            // Stale application paths and deleted project files both end
            // up here; the message carries the attempted path so the user
            // can fix the registered entry.
            return Err(ApplicationError::Launch {
                path: path.to_path_buf(),
                reason: "file does not exist".into(),
            }
            .into());
        }

        let path_str = path.to_string_lossy();
        info!(path = %path.display(), "launching");

        #[cfg(target_os = "macos")]
        {
            // .app bundles are directories; they go through `open -a`.
            // Plain documents open with their associated application.
            if path_str.ends_with(".app") {
                return self.spawn_detached("open", &["-a", &path_str], path);
            }
            return self.spawn_detached("open", &[&path_str], path);
        }

        #[cfg(target_os = "windows")]
        return self.spawn_detached("cmd", &["/C", "start", "", &path_str], path);

        #[cfg(not(any(target_os = "macos", target_os = "windows")))]
        self.spawn_detached("xdg-open", &[&path_str], path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn launch_of_missing_path_carries_the_path() {
        let launcher = ShellLauncher::new();
        let err = launcher
            .launch(Path::new("/no/such/project.aep"))
            .unwrap_err();
        assert!(err.to_string().contains("/no/such/project.aep"));
    }

    #[test]
    fn reveal_of_missing_path_fails() {
        let launcher = ShellLauncher::new();
        assert!(launcher.reveal(Path::new("/no/such/folder")).is_err());
    }
}
