//! Persistent storage
//!
//! This module handles all data persistence: application settings and the
//! generation history, both as JSON files in the platform data directory.

pub mod history;
pub mod settings;

use directories::ProjectDirs;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during storage operations
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("could not determine an application data directory")]
    DataDir,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Get the application data directory, creating it if necessary
pub fn get_data_dir() -> Result<PathBuf, StorageError> {
    let dirs = ProjectDirs::from("store", "renovafacil", "renova-studio")
        .ok_or(StorageError::DataDir)?;
    let dir = dirs.data_dir().to_path_buf();
    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}
