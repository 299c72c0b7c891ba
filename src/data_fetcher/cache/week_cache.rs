use crate::config::Config;
use crate::constants::{CACHE_FILE_SUFFIX, PARTIAL_FILE_EXTENSION};
use crate::error::AppError;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{debug, instrument, warn};

/// Builds the cache file name for a week: `<prefix><index>.json`.
pub fn cache_file_name(prefix: &str, index: u32) -> String {
    format!("{prefix}{index}{CACHE_FILE_SUFFIX}")
}

/// Recovers the week index from a cache file name.
///
/// Only `<prefix><digits>.json` matches; anything else in the directory
/// (partial writes, backups, stray files) yields `None`.
///
/// # Example
/// ```
/// use mls_schedule::data_fetcher::cache::parse_week_index;
///
/// assert_eq!(parse_week_index("week", "week10.json"), Some(10));
/// assert_eq!(parse_week_index("week", "week10.json.part"), None);
/// assert_eq!(parse_week_index("week", "week_backup.json"), None);
/// ```
pub fn parse_week_index(prefix: &str, file_name: &str) -> Option<u32> {
    let digits = file_name
        .strip_prefix(prefix)?
        .strip_suffix(CACHE_FILE_SUFFIX)?;

    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    digits.parse().ok()
}

/// A cache file found on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CachedWeek {
    pub index: u32,
    pub path: PathBuf,
}

/// Directory of per-week raw API responses.
///
/// The presence of a week's file is the only cache-hit signal. Files are
/// written whole through a temporary sibling and a rename, so a week is
/// either absent or complete.
#[derive(Debug, Clone)]
pub struct WeekCache {
    dir: PathBuf,
    prefix: String,
}

impl WeekCache {
    pub fn new(dir: impl Into<PathBuf>, prefix: impl Into<String>) -> Self {
        WeekCache {
            dir: dir.into(),
            prefix: prefix.into(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(&config.data_dir, &config.cache_file_prefix)
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn path_for(&self, index: u32) -> PathBuf {
        self.dir.join(cache_file_name(&self.prefix, index))
    }

    /// Returns true if the week has already been cached.
    pub async fn contains(&self, index: u32) -> bool {
        fs::try_exists(self.path_for(index)).await.unwrap_or(false)
    }

    /// Creates the cache directory if it doesn't exist.
    pub async fn ensure_dir(&self) -> Result<(), AppError> {
        fs::create_dir_all(&self.dir).await?;
        Ok(())
    }

    /// Writes a week's raw response body verbatim.
    #[instrument(skip(self, body), fields(dir = %self.dir.display()))]
    pub async fn store(&self, index: u32, body: &str) -> Result<PathBuf, AppError> {
        let path = self.path_for(index);
        let partial = self.dir.join(format!(
            "{}.{PARTIAL_FILE_EXTENSION}",
            cache_file_name(&self.prefix, index)
        ));

        if let Err(e) = fs::write(&partial, body).await {
            let _ = fs::remove_file(&partial).await;
            return Err(e.into());
        }

        if let Err(e) = fs::rename(&partial, &path).await {
            warn!("Failed to move {} into place: {e}", partial.display());
            let _ = fs::remove_file(&partial).await;
            return Err(e.into());
        }

        debug!("Stored {} bytes at {}", body.len(), path.display());
        Ok(path)
    }

    /// Lists cached weeks sorted by numeric week index, so `week2.json`
    /// comes before `week10.json`. A missing directory is an empty cache.
    pub async fn discover(&self) -> Result<Vec<CachedWeek>, AppError> {
        let mut entries = match fs::read_dir(&self.dir).await {
            Ok(entries) => entries,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!("Cache directory {} does not exist", self.dir.display());
                return Ok(Vec::new());
            }
            Err(e) => return Err(e.into()),
        };

        let mut weeks = Vec::new();
        while let Some(entry) = entries.next_entry().await? {
            if !entry.file_type().await?.is_file() {
                continue;
            }

            let file_name = entry.file_name();
            let Some(name) = file_name.to_str() else {
                continue;
            };

            match parse_week_index(&self.prefix, name) {
                Some(index) => weeks.push(CachedWeek {
                    index,
                    path: entry.path(),
                }),
                None => debug!("Ignoring non-cache file {name}"),
            }
        }

        weeks.sort_by(|a, b| a.index.cmp(&b.index).then_with(|| a.path.cmp(&b.path)));
        Ok(weeks)
    }
}
