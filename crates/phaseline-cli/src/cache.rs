use anyhow::{Context, Result};
use phaseline_engine::RawRecord;
use sha2::{Digest, Sha256};
use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime};

/// File-backed snapshot cache with a time-to-live: the explicit collaborator
/// standing in for the source dashboard's hourly fetch window. Each entry is
/// one JSON file; freshness is judged by the file's modification time.
pub struct SnapshotCache {
    dir: PathBuf,
}

impl SnapshotCache {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Cached snapshot for `key`, if present and younger than `ttl`.
    pub fn get(&self, key: &str, ttl: Duration) -> Result<Option<Vec<RawRecord>>> {
        let path = self.entry_path(key);
        if !path.exists() {
            return Ok(None);
        }

        let modified = std::fs::metadata(&path)?.modified()?;
        let age = SystemTime::now()
            .duration_since(modified)
            .unwrap_or(Duration::ZERO);
        if age > ttl {
            return Ok(None);
        }

        let content = std::fs::read_to_string(&path)?;
        match serde_json::from_str(&content) {
            Ok(rows) => Ok(Some(rows)),
            // a corrupt entry is a miss; the next put overwrites it
            Err(_) => Ok(None),
        }
    }

    /// Store a snapshot under `key`, replacing any previous entry.
    pub fn put(&self, key: &str, rows: &[RawRecord]) -> Result<()> {
        std::fs::create_dir_all(&self.dir)
            .with_context(|| format!("failed to create cache dir: {}", self.dir.display()))?;

        let path = self.entry_path(key);
        let content = serde_json::to_string(rows)?;
        std::fs::write(&path, content)
            .with_context(|| format!("failed to write cache entry: {}", path.display()))?;
        Ok(())
    }

    fn entry_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}

/// Cache key for a source file: SHA-256 of its canonical path, so the same
/// sheet reached through different paths shares one entry.
pub fn snapshot_key(source: &Path) -> String {
    let canonical = source
        .canonicalize()
        .unwrap_or_else(|_| source.to_path_buf());

    let mut hasher = Sha256::new();
    hasher.update(canonical.to_string_lossy().as_bytes());
    format!("{:x}", hasher.finalize())
}
