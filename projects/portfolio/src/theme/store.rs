use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Single-key storage for the theme, holding the literal `light` or `dark`.
pub trait ThemeStore {
    fn load(&self) -> Result<Option<String>, ThemeStoreError>;

    fn save(&mut self, value: &str) -> Result<(), ThemeStoreError>;
}

#[derive(Debug, Error)]
pub enum ThemeStoreError {
    #[error("Read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

#[derive(Debug, Clone)]
pub struct FileThemeStore {
    path: PathBuf,
}

impl FileThemeStore {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self { path: path.as_ref().to_path_buf() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ThemeStore for FileThemeStore {
    fn load(&self) -> Result<Option<String>, ThemeStoreError> {
        match fs::read_to_string(&self.path) {
            Ok(value) => Ok(Some(value)),
            Err(source) if source.kind() == ErrorKind::NotFound => Ok(None),
            Err(source) => Err(ThemeStoreError::Read { path: self.path.clone(), source }),
        }
    }

    fn save(&mut self, value: &str) -> Result<(), ThemeStoreError> {
        fs::write(&self.path, value)
            .map_err(|source| ThemeStoreError::Write { path: self.path.clone(), source })
    }
}

#[derive(Debug, Clone, Default)]
pub struct MemoryThemeStore {
    value: Option<String>,
    writes: usize,
}

impl MemoryThemeStore {
    pub fn with_value(value: &str) -> Self {
        Self { value: Some(value.to_string()), writes: 0 }
    }

    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    pub fn writes(&self) -> usize {
        self.writes
    }
}

impl ThemeStore for MemoryThemeStore {
    fn load(&self) -> Result<Option<String>, ThemeStoreError> {
        Ok(self.value.clone())
    }

    fn save(&mut self, value: &str) -> Result<(), ThemeStoreError> {
        self.value = Some(value.to_string());
        self.writes += 1;
        Ok(())
    }
}
