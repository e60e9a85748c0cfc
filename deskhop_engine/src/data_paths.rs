//! Resolution of the bundled data directory.

use std::env;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

/// Layouts probed under each anchor: workspace checkout and flattened install.
const DATA_LAYOUTS: &[&str] = &["deskhop_engine/data", "data"];

/// Cached path to the directory holding the catalog files.
static DATA_ROOT: LazyLock<PathBuf> = LazyLock::new(detect_data_root);

/// Construct a path to a bundled data file.
pub fn data_path(relative: impl AsRef<Path>) -> PathBuf {
    DATA_ROOT.join(relative)
}

/// Probe the working directory, then the executable's directory and its
/// parent, for a known data layout.
fn detect_data_root() -> PathBuf {
    let mut anchors = vec![PathBuf::new()];
    if let Ok(exe) = env::current_exe()
        && let Some(dir) = exe.parent()
    {
        anchors.push(dir.to_path_buf());
        if let Some(parent) = dir.parent() {
            anchors.push(parent.to_path_buf());
        }
    }

    for anchor in &anchors {
        for layout in DATA_LAYOUTS {
            let candidate = anchor.join(layout);
            if candidate.is_dir() {
                return candidate;
            }
        }
    }
    PathBuf::from(DATA_LAYOUTS[0])
}
