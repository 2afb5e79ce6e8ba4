use anyhow::Result;
use log::info;
use std::path::{Path, PathBuf};

use crate::updater::VersionUpdater;

/// Files carrying the release version, relative to the project root, in the
/// order they are updated.
pub const TARGET_FILES: [&str; 4] = [
    "package.json",
    "src-tauri/Cargo.toml",
    "src-tauri/tauri.conf.json",
    "src/pages/About.vue",
];

/// Resolves [`TARGET_FILES`] against `root`.
pub fn target_paths(root: impl AsRef<Path>) -> Vec<PathBuf> {
    let root = root.as_ref();
    TARGET_FILES.iter().map(|file| root.join(file)).collect()
}

/// Updates every target file under `root` to `version`, in order.
///
/// The first failure is returned and the remaining files are left alone.
pub fn update_all(root: impl AsRef<Path>, version: &str) -> Result<Vec<PathBuf>> {
    info!("Updating version to {}", version);
    let files = target_paths(root);
    for file in &files {
        VersionUpdater::update_file(file, version)?;
    }
    Ok(files)
}
