//! Raw response persistence.
//!
//! Every response lands in `{output_dir}/{name}_{YYYYMMDD}.json`, stamped with
//! the store's clock. Files are never read back; a rerun on the same day
//! overwrites the earlier file of the same name.

use serde_json::Value;
use std::{
    fs,
    io::Write,
    path::{Path, PathBuf},
    sync::Arc,
};

use crate::core::clock::Clock;
use crate::Result;

/// Date stamp appended to every file name.
pub const FILE_DATE_FORMAT: &str = "%Y%m%d";

pub struct RawStore {
    dir: PathBuf,
    clock: Arc<dyn Clock>,
}

impl RawStore {
    pub fn new(dir: impl Into<PathBuf>, clock: Arc<dyn Clock>) -> Self {
        Self {
            dir: dir.into(),
            clock,
        }
    }

    /// Path a payload named `logical_name` would be written to today.
    pub fn path_for(&self, logical_name: &str) -> PathBuf {
        let stamp = self.clock.today().format(FILE_DATE_FORMAT);
        self.dir.join(format!("{}_{}.json", logical_name, stamp))
    }

    /// Write `data` as pretty JSON and return the file path.
    ///
    /// Filesystem errors are returned as-is.
    pub fn persist(&self, data: &Value, logical_name: &str) -> Result<PathBuf> {
        let path = self.path_for(logical_name);
        let contents = serde_json::to_string_pretty(data)?;
        write_string(&path, &contents)?;

        tracing::info!(path = %path.display(), bytes = contents.len(), "Saved raw response");
        Ok(path)
    }
}

/// Write a string to file, creating parent directories as needed.
pub fn write_string(path: &Path, contents: &str) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let mut f = fs::File::create(path)?;
    f.write_all(contents.as_bytes())
}
