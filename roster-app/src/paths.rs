//! Where the binary keeps its files.

use std::path::Path;
use std::path::PathBuf;

use directories::ProjectDirs;

const DATABASE_FILE: &str = "roster.db";

/// Per-user directories of the application.
#[derive(Debug, Clone)]
pub struct AppDirs {
    data: PathBuf,
    cache: PathBuf,
}

impl AppDirs {
    /// Resolves the platform directories. `None` without a home directory.
    pub fn resolve() -> Option<Self> {
        let dirs = ProjectDirs::from("dev", "roster", "roster")?;
        Some(Self {
            data: dirs.data_dir().to_path_buf(),
            cache: dirs.cache_dir().to_path_buf(),
        })
    }

    /// The local users database.
    pub fn database(&self) -> PathBuf {
        self.data.join(DATABASE_FILE)
    }

    /// Logs live in the cache directory.
    pub fn log_dir(&self) -> &Path {
        &self.cache
    }
}
