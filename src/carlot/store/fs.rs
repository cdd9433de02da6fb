use super::{format, CarStore};
use crate::error::{CarlotError, Result};
use crate::model::Car;
use std::fs;
use std::path::{Path, PathBuf};
use uuid::Uuid;

pub const DEFAULT_DATA_FILE: &str = "cars.txt";

pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn persistence_error(&self, source: std::io::Error) -> CarlotError {
        CarlotError::Persistence {
            path: self.path.clone(),
            source,
        }
    }

    fn tmp_path(&self) -> PathBuf {
        let name = self
            .path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| DEFAULT_DATA_FILE.to_string());
        self.path
            .with_file_name(format!(".{}-{}.tmp", name, Uuid::new_v4()))
    }
}

impl Default for FileStore {
    fn default() -> Self {
        Self::new(DEFAULT_DATA_FILE)
    }
}

impl CarStore for FileStore {
    fn load(&self) -> Result<Vec<Car>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let content = fs::read_to_string(&self.path).map_err(CarlotError::Io)?;
        format::decode(&content)
    }

    fn save(&mut self, cars: &[Car]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(|e| self.persistence_error(e))?;
            }
        }

        // Write beside the target then rename, so readers never see a half-written file
        let tmp_file = self.tmp_path();
        if let Err(e) = fs::write(&tmp_file, format::encode(cars)) {
            let _ = fs::remove_file(&tmp_file);
            return Err(self.persistence_error(e));
        }
        if let Err(e) = fs::rename(&tmp_file, &self.path) {
            let _ = fs::remove_file(&tmp_file);
            return Err(self.persistence_error(e));
        }

        tracing::info!(path = %self.path.display(), cars = cars.len(), "saved car file");
        Ok(())
    }
}
