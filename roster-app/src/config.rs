//! Application configuration.

use std::path::PathBuf;
use std::time::Duration;

use roster_lib::api::DEFAULT_BASE_URL;
use roster_lib::table::PaginationConfig;
use simplelog::LevelFilter;

use crate::paths::AppDirs;

/// Settings the binary runs with.
///
/// Everything is fixed at build time; the remote base URL comes from
/// `ROSTER_API_BASE_URL` when the crate is compiled.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Base URL of the users listing.
    pub base_url: String,

    /// Per-request timeout for the listing.
    ///
    /// Default: 10 seconds
    pub request_timeout: Duration,

    /// Page sizes and initial page size of both tables.
    pub pagination: PaginationConfig,

    /// Location of the local users database, if the platform has a data dir.
    pub database: Option<PathBuf>,

    /// Directory of `latest.log` and its archives.
    pub log_dir: Option<PathBuf>,

    /// Log verbosity.
    ///
    /// Default: debug in debug builds, info otherwise
    pub log_level: LevelFilter,
}

impl Default for AppConfig {
    fn default() -> Self {
        let dirs = AppDirs::resolve();
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            request_timeout: Duration::from_secs(10),
            pagination: PaginationConfig::default(),
            database: dirs.as_ref().map(AppDirs::database),
            log_dir: dirs.as_ref().map(|d| d.log_dir().to_path_buf()),
            log_level: if cfg!(debug_assertions) {
                LevelFilter::Debug
            } else {
                LevelFilter::Info
            },
        }
    }
}
