use anyhow::{Context, Result, bail};
use log::{debug, info};
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

use crate::patterns::{AssignmentPattern, JsonPattern, Pattern};

/// Rewrites the version declarations of a single file.
pub struct VersionUpdater;

impl VersionUpdater {
    /// Applies [`JsonPattern`] then [`AssignmentPattern`] to the text of
    /// `contents`, returning the new text and the total number of replacements.
    pub fn rewrite(contents: &str, version: &str) -> Result<(String, usize)> {
        let (contents, json_matches) = JsonPattern::replace_all(contents, version)?;
        let (contents, assignment_matches) = AssignmentPattern::replace_all(&contents, version)?;
        Ok((contents, json_matches + assignment_matches))
    }

    /// Updates every version declaration in `file` to `version`.
    ///
    /// The file is always rewritten, even when nothing matched. The new
    /// content goes through a temporary sibling that is renamed over `file`
    /// (or over the file it links to), so a failed write leaves the original
    /// in place. Read-only files are rejected before anything is written.
    pub fn update_file(file: impl AsRef<Path>, version: &str) -> Result<usize> {
        let file = file.as_ref();
        debug!("Checking file: '{}'", file.display());
        let contents = fs::read_to_string(file)
            .with_context(|| format!("Failed to read {}", file.display()))?;

        let (new_contents, replaced) = Self::rewrite(&contents, version)?;
        if replaced == 0 {
            debug!("No version declarations found in '{}'", file.display());
        } else {
            debug!("Replacing {} version declaration(s) in '{}'", replaced, file.display());
        }

        Self::write_atomic(file, new_contents.as_bytes())?;
        info!("{} version updated to: {}", file.display(), version);
        Ok(replaced)
    }

    fn write_atomic(file: &Path, data: &[u8]) -> Result<()> {
        // Symlinked targets are written through, not replaced by a regular file.
        let target = fs::canonicalize(file)
            .with_context(|| format!("Failed to resolve {}", file.display()))?;
        let parent = target.parent().unwrap_or_else(|| Path::new("."));
        let permissions = fs::metadata(&target)
            .with_context(|| format!("Failed to stat {}", target.display()))?
            .permissions();
        if permissions.readonly() {
            bail!("Failed to write {}: file is read-only", file.display());
        }
        OpenOptions::new()
            .write(true)
            .open(&target)
            .with_context(|| format!("Failed to open {} for writing", file.display()))?;

        // Dropping `temp` on an early return removes it.
        let mut temp = NamedTempFile::new_in(parent)
            .with_context(|| format!("Failed to create temporary file in {}", parent.display()))?;
        let temp_path = temp.path().to_path_buf();
        temp.write_all(data)
            .with_context(|| format!("Failed to write {}", temp_path.display()))?;
        temp.flush()
            .with_context(|| format!("Failed to flush {}", temp_path.display()))?;
        temp.as_file()
            .set_permissions(permissions)
            .with_context(|| format!("Failed to set permissions on {}", temp.path().display()))?;
        temp.persist(&target)
            .with_context(|| format!("Failed to replace {}", target.display()))?;
        Ok(())
    }
}
