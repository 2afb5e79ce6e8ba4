use crate::patterns::Pattern;
use regex::Regex;

/// `"version": "X.Y.Z"`, as found in package.json and tauri.conf.json.
pub struct JsonPattern;

impl Pattern for JsonPattern {
    fn version_match_regex() -> anyhow::Result<Regex> {
        Ok(Regex::new(r#""version"\s*:\s*"\d+\.\d+\.\d+""#)?)
    }

    fn version_line_format(version: &str) -> String {
        format!(r#""version": "{version}""#)
    }
}
