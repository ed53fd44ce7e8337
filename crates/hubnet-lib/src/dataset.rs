use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use tracing::debug;

use crate::db::{load_snapshot_sqlite, SqliteFeed};
use crate::error::{Error, Result};
use crate::snapshot::{Hub, NetworkFeed, Route, Snapshot};

/// Environment variable that overrides the dataset location.
pub const DATASET_ENV_VAR: &str = "HUBNET_DATASET";

/// Default filename for the dataset inside the platform data directory.
const DATASET_FILENAME: &str = "network.db";

/// On-disk dataset flavours.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatasetFormat {
    /// `{ "hubs": [...], "routes": [...] }` snapshot file.
    Json,
    /// SQLite database with `Hubs`, `Routes` and `RouteHubs` tables.
    Sqlite,
}

impl DatasetFormat {
    /// Pick the format from the file extension; anything but `.json` is
    /// treated as SQLite.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => DatasetFormat::Json,
            _ => DatasetFormat::Sqlite,
        }
    }
}

/// Resolve the default dataset location using platform-specific project directories.
pub fn default_dataset_path() -> Result<PathBuf> {
    let dirs = ProjectDirs::from("com", "hubnet", "hubnet").ok_or(Error::ProjectDirsUnavailable)?;
    Ok(dirs.data_dir().join(DATASET_FILENAME))
}

/// Resolve which dataset file to read.
///
/// The resolution order is:
/// 1. Explicit `target` argument when provided.
/// 2. `HUBNET_DATASET` environment variable.
/// 3. Platform-specific project data directory.
///
/// The resolved file must exist.
pub fn resolve_dataset_path(target: Option<&Path>) -> Result<PathBuf> {
    let resolved = match target {
        Some(explicit) => explicit.to_path_buf(),
        None => match env::var_os(DATASET_ENV_VAR) {
            Some(env_path) => PathBuf::from(env_path),
            None => default_dataset_path()?,
        },
    };

    if !resolved.exists() {
        return Err(Error::DatasetNotFound { path: resolved });
    }

    debug!(path = %resolved.display(), "resolved dataset path");
    Ok(resolved)
}

/// Hub and route feed backed by a JSON snapshot file.
#[derive(Debug, Clone)]
pub struct JsonFeed {
    path: PathBuf,
}

impl JsonFeed {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn read(&self) -> Result<Snapshot> {
        if !self.path.exists() {
            return Err(Error::DatasetNotFound {
                path: self.path.clone(),
            });
        }
        let contents = fs::read_to_string(&self.path)?;
        parse_snapshot_json(&contents)
    }
}

impl NetworkFeed for JsonFeed {
    fn hubs(&self) -> Result<Vec<Hub>> {
        Ok(self.read()?.hubs)
    }

    fn routes(&self) -> Result<Vec<Route>> {
        Ok(self.read()?.routes)
    }

    fn snapshot(&self) -> Result<Snapshot> {
        let snapshot = self.read()?;
        snapshot.validate()?;
        Ok(snapshot)
    }
}

/// Parse a JSON snapshot, defaulting missing hub ids to the hub name.
pub fn parse_snapshot_json(contents: &str) -> Result<Snapshot> {
    let mut snapshot: Snapshot = serde_json::from_str(contents)?;
    for hub in &mut snapshot.hubs {
        if hub.id.is_empty() {
            hub.id = hub.name.clone();
        }
    }
    Ok(snapshot)
}

/// Open the feed matching the dataset's format.
pub fn open_feed(path: &Path) -> Box<dyn NetworkFeed> {
    match DatasetFormat::from_path(path) {
        DatasetFormat::Json => Box::new(JsonFeed::new(path)),
        DatasetFormat::Sqlite => Box::new(SqliteFeed::new(path)),
    }
}

/// Load and validate a snapshot from a JSON or SQLite dataset.
pub fn load_snapshot(path: &Path) -> Result<Snapshot> {
    match DatasetFormat::from_path(path) {
        DatasetFormat::Json => JsonFeed::new(path).snapshot(),
        DatasetFormat::Sqlite => load_snapshot_sqlite(path),
    }
}
