//! Durable visited-progress storage.
//!
//! Progress lives in a single JSON file (an array of slugs) in the per-user
//! data directory and is overwritten whole on every change. Helpers here
//! return errors; the store decides the fallback (empty set on read failure,
//! dropped write on write failure).

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// File holding the visited slug array.
pub const STORAGE_FILE: &str = "coworking-visited-spaces.json";
/// Prompt history file kept alongside the progress file.
pub const HISTORY_FILE: &str = "history.txt";

const APP_DIR: &str = "deskhop";

/// Default progress file location in the per-user data directory.
pub fn default_storage_path() -> PathBuf {
    app_data_dir().join(STORAGE_FILE)
}

/// Default prompt-history location in the per-user data directory.
pub fn default_history_path() -> PathBuf {
    app_data_dir().join(HISTORY_FILE)
}

fn app_data_dir() -> PathBuf {
    dirs::data_dir().unwrap_or_else(|| PathBuf::from(".")).join(APP_DIR)
}

/// Read the stored slug list. A missing file is an empty list, not an error.
///
/// # Errors
/// Returns an error if the file exists but cannot be read or parsed.
pub fn read_visited(path: &Path) -> Result<Vec<String>> {
    if !path.exists() {
        return Ok(Vec::new());
    }
    let raw = fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("parsing {}", path.display()))
}

/// Overwrite the stored slug list.
///
/// # Errors
/// Returns an error if the parent directory cannot be created or the file
/// cannot be written.
pub fn write_visited(path: &Path, slugs: &[String]) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).with_context(|| format!("creating {}", parent.display()))?;
    }
    let json = serde_json::to_string(slugs).context("serializing visited slugs")?;
    fs::write(path, json).with_context(|| format!("writing {}", path.display()))
}
