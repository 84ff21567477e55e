use directories::ProjectDirs;
use std::path::PathBuf;

/// Centralized application directory resolution
pub struct AppDirs;

impl AppDirs {
    /// Default log file under `$HOME/.local/state/clickshot`
    pub fn log_path() -> Option<PathBuf> {
        if let Ok(home) = std::env::var("HOME") {
            let state_dir = PathBuf::from(home)
                .join(".local")
                .join("state")
                .join("clickshot");
            Some(state_dir.join("clickshot.log"))
        } else {
            ProjectDirs::from("", "", "clickshot")
                .map(|proj_dirs| proj_dirs.data_local_dir().join("clickshot.log"))
        }
    }
}
