use crate::domain::Waypoint;
use futures::stream::FuturesUnordered;
use std::io;
use std::path::PathBuf;
use thiserror::Error;
use tokio::fs;
use tokio_stream::StreamExt;
use tokio_stream::wrappers::ReadDirStream;
use tracing::{info, instrument, warn};

/// Loads the waypoint catalogue the daemon can impersonate. Files that do
/// not parse are logged and skipped so one bad file cannot take the
/// catalogue down.
#[instrument]
pub async fn load_waypoints_from(directory: &str, extension: &str) -> Result<Vec<Waypoint>, LoaderError> {
    info!("📁 Loading waypoints...");
    let files = list_files(directory, extension)
        .await
        .map_err(|e| LoaderError::Io { source: e, path: None })?;

    let results = load_files(files).await;
    let (waypoints, errors): (Vec<_>, Vec<_>) = results.into_iter().partition(Result::is_ok);

    for error in errors.iter().filter_map(|res| res.as_ref().err()) {
        log_error(error);
    }

    info!("📁 Loading waypoints... OK, {} loaded, {} failed", waypoints.len(), errors.len());
    Ok(waypoints.into_iter().filter_map(Result::ok).collect())
}

#[instrument]
async fn list_files(directory: &str, extension: &str) -> io::Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    let dir = fs::read_dir(directory).await?;
    let mut entries = ReadDirStream::new(dir);

    while let Some(entry) = entries.next().await {
        match entry {
            Ok(entry) => {
                let path = entry.path();
                if path.is_file() && path.extension().and_then(|e| e.to_str()) == Some(extension) {
                    files.push(path);
                }
            }
            Err(err) => warn!("⚠️ Unable to read directory entry: {}", err),
        }
    }

    Ok(files)
}

#[instrument(skip_all)]
async fn load_files(paths: Vec<PathBuf>) -> Vec<Result<Waypoint, LoaderError>> {
    FuturesUnordered::from_iter(paths.into_iter().map(|path| async move {
        match fs::read_to_string(&path).await {
            Ok(content) => serde_json::from_str::<Waypoint>(&content).map_err(|e| LoaderError::Waypoint { source: e, path }),
            Err(err) => Err(LoaderError::Io {
                source: err,
                path: Some(path),
            }),
        }
    }))
    .collect()
    .await
}

fn log_error(error: &LoaderError) {
    match error {
        LoaderError::Waypoint { source, path } => warn!("⚠️ Failed to load '{}': {}", path.display(), source),
        LoaderError::Io { source, path } => match path {
            Some(path) => warn!("⚠️ Failed to load '{}': {}", path.display(), source),
            None => warn!("⚠️ {}", source),
        },
    }
}

#[derive(Error, Debug)]
pub enum LoaderError {
    #[error("{}", source)]
    Waypoint { source: serde_json::Error, path: PathBuf },
    #[error("{}", source)]
    Io { source: io::Error, path: Option<PathBuf> },
}
