use anyhow::Result;
use regex::{NoExpand, Regex};

pub mod assignment_pattern;
pub mod json_pattern;

pub use assignment_pattern::AssignmentPattern;
pub use json_pattern::JsonPattern;

/// A textual shape that declares a version, and how to rewrite it.
pub trait Pattern {
    /// Replaces every non-overlapping match in `contents` with the formatted
    /// version line, returning the new text and the number of matches.
    ///
    /// `version` is inserted literally, `$` is never expanded.
    fn replace_all(contents: &str, version: &str) -> Result<(String, usize)> {
        let version_regex = Self::version_match_regex()?;
        let matches = version_regex.find_iter(contents).count();
        if matches == 0 {
            return Ok((contents.to_string(), 0));
        }
        let line = Self::version_line_format(version);
        let new_contents = version_regex
            .replace_all(contents, NoExpand(&line))
            .into_owned();
        Ok((new_contents, matches))
    }

    fn version_match_regex() -> Result<Regex>;
    fn version_line_format(version: &str) -> String;
}
