use super::{format, CarStore};
use crate::error::{CarlotError, Result};
use crate::model::Car;
use std::path::PathBuf;

/// In-memory storage for testing.
///
/// Holds the same text a [`super::fs::FileStore`] would write, so tests see the
/// real codec at work. `None` means nothing was ever saved.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    text: Option<String>,
    fail_writes: bool,
    saves: usize,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store whose "file" already contains `text`.
    pub fn with_text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            ..Self::default()
        }
    }

    /// Make every subsequent save fail with a persistence error.
    pub fn failing_writes(mut self) -> Self {
        self.fail_writes = true;
        self
    }

    pub fn set_fail_writes(&mut self, fail: bool) {
        self.fail_writes = fail;
    }

    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    /// Number of successful saves.
    pub fn saves(&self) -> usize {
        self.saves
    }
}

impl CarStore for InMemoryStore {
    fn load(&self) -> Result<Vec<Car>> {
        match &self.text {
            Some(text) => format::decode(text),
            None => Ok(Vec::new()),
        }
    }

    fn save(&mut self, cars: &[Car]) -> Result<()> {
        if self.fail_writes {
            return Err(CarlotError::Persistence {
                path: PathBuf::from("<memory>"),
                source: std::io::Error::other("writes disabled"),
            });
        }
        self.text = Some(format::encode(cars));
        self.saves += 1;
        Ok(())
    }
}
