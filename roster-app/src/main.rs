mod config;
mod logging;
mod paths;
mod render;

use std::fs;
use std::io;
use std::path::PathBuf;

use log::error;
use log::info;
use roster_lib::UsersClient;
use roster_lib::store::LocalUserStore;
use roster_lib::store::MemoryBackend;
use roster_lib::store::SqliteBackend;
use roster_lib::view::LocalUsersView;
use roster_lib::view::RemoteUsersView;

use crate::config::AppConfig;

#[derive(Debug, thiserror::Error)]
enum AppError {
    #[error("cannot create {}: {source}", .path.display())]
    DataDir { path: PathBuf, source: io::Error },

    #[error(transparent)]
    Roster(#[from] roster_lib::Error),
}

impl From<roster_lib::error::StoreError> for AppError {
    fn from(e: roster_lib::error::StoreError) -> Self {
        Self::Roster(e.into())
    }
}

impl From<roster_lib::error::FetchError> for AppError {
    fn from(e: roster_lib::error::FetchError) -> Self {
        Self::Roster(e.into())
    }
}

#[tokio::main]
async fn main() {
    let config = AppConfig::default();
    logging::init(config.log_dir.as_deref(), config.log_level);

    if let Err(e) = run(config).await {
        error!("{}", e);
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run(config: AppConfig) -> Result<(), AppError> {
    info!("starting roster against {}", config.base_url);

    let store = open_store(&config).await?;
    let local = LocalUsersView::with_config(store, &config.pagination);

    let client = UsersClient::builder()
        .base_url(&config.base_url)
        .timeout(config.request_timeout)
        .build()?;
    let mut remote = RemoteUsersView::with_config(client, &config.pagination);
    remote.refresh().await;

    print!(
        "{}",
        render::table(
            "User Table",
            remote.rows(),
            remote.pagination(),
            remote.selection_summary(),
            remote.page_info(),
            "No data available",
        )
    );
    println!();
    print!(
        "{}",
        render::table(
            "Local Users",
            local.rows(),
            local.pagination(),
            local.selection_summary(),
            local.page_info(),
            "No local users.",
        )
    );

    Ok(())
}

/// Opens the persisted store, or an in-memory one when the platform has no
/// data directory.
async fn open_store(config: &AppConfig) -> Result<LocalUserStore, AppError> {
    let Some(path) = &config.database else {
        info!("no data directory, local users will not persist");
        return Ok(LocalUserStore::open(MemoryBackend::new()).await?);
    };

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|source| AppError::DataDir {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    info!("opening local users at {}", path.display());
    let backend = SqliteBackend::open(path).await?;
    Ok(LocalUserStore::open(backend).await?)
}
