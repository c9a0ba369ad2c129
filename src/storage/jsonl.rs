//! JSONL-based record store, one file per collection.

use std::fs::{self, File};
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use serde::{Serialize, de::DeserializeOwned};

use super::traits::{Collection, RecordStore};
use crate::error::{Result, StampcardError};

fn unavailable(action: &str, path: &Path, err: io::Error) -> StampcardError {
    StampcardError::StorageUnavailable(format!("failed to {} {}: {}", action, path.display(), err))
}

/// JSONL-based record store rooted at a data directory.
#[derive(Debug)]
pub struct JsonlStore {
    base_path: PathBuf,
}

impl JsonlStore {
    /// Open a store at the given path, creating the directory if needed.
    pub fn new(base_path: impl AsRef<Path>) -> Result<Self> {
        let base_path = base_path.as_ref().to_path_buf();
        fs::create_dir_all(&base_path).map_err(|e| unavailable("create", &base_path, e))?;
        log::debug!("Opened record store at {}", base_path.display());
        Ok(Self { base_path })
    }

    /// Directory holding the collection files.
    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    /// Get the file path for a collection.
    fn collection_path(&self, collection: Collection) -> PathBuf {
        self.base_path.join(format!("{}.jsonl", collection.key()))
    }

    fn temp_path(&self, collection: Collection) -> PathBuf {
        self.base_path.join(format!("{}.jsonl.tmp", collection.key()))
    }
}

impl RecordStore for JsonlStore {
    fn load<T: DeserializeOwned>(&self, collection: Collection) -> Result<Vec<T>> {
        let path = self.collection_path(collection);
        let file = match File::open(&path) {
            Ok(file) => file,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                log::debug!("No {} file yet, treating as empty", collection);
                return Ok(Vec::new());
            }
            Err(e) => return Err(unavailable("open", &path, e)),
        };

        let reader = BufReader::new(file);
        let mut records = Vec::new();
        for (index, line) in reader.lines().enumerate() {
            let line = line.map_err(|e| unavailable("read", &path, e))?;
            if line.trim().is_empty() {
                continue;
            }
            let record: T = serde_json::from_str(&line).map_err(|e| StampcardError::Corrupt {
                collection: collection.key().to_string(),
                line: index + 1,
                message: e.to_string(),
            })?;
            records.push(record);
        }

        log::debug!("Loaded {} records from {}", records.len(), collection);
        Ok(records)
    }

    fn save<T: Serialize>(&self, collection: Collection, records: &[T]) -> Result<()> {
        let path = self.collection_path(collection);
        let temp = self.temp_path(collection);

        // Write everything to a sibling file, then swap it in
        {
            let file = File::create(&temp).map_err(|e| unavailable("create", &temp, e))?;
            let mut writer = BufWriter::new(file);
            for record in records {
                let line = serde_json::to_string(record)?;
                writeln!(writer, "{}", line).map_err(|e| unavailable("write", &temp, e))?;
            }
            writer.flush().map_err(|e| unavailable("flush", &temp, e))?;
            writer
                .get_ref()
                .sync_all()
                .map_err(|e| unavailable("sync", &temp, e))?;
        }

        fs::rename(&temp, &path).map_err(|e| unavailable("replace", &path, e))?;
        log::debug!("Saved {} records to {}", records.len(), collection);
        Ok(())
    }
}
