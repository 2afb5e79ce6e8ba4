use anyhow::Result;
use log::warn;
use regex::Regex;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum VersionError {
    #[error("Malformed version '{0}': expected MAJOR.MINOR.PATCH")]
    Malformed(String),
}

/// Whether `version` is exactly three dot-separated non-negative integers,
/// the only shape the version patterns will match again on a later run.
pub fn is_release_triple(version: &str) -> Result<bool> {
    Ok(Regex::new(r"^\d+\.\d+\.\d+$")?.is_match(version))
}

/// Fails fast on anything [`is_release_triple`] rejects.
pub fn validate(version: &str) -> Result<()> {
    if is_release_triple(version)? {
        Ok(())
    } else {
        Err(VersionError::Malformed(version.to_string()).into())
    }
}

/// Validates `version` when `strict`, otherwise only warns about a shape
/// mismatch and lets the value through.
pub fn check(version: &str, strict: bool) -> Result<()> {
    if strict {
        return validate(version);
    }
    if !is_release_triple(version)? {
        warn!(
            "'{}' is not MAJOR.MINOR.PATCH, writing it anyway; later runs will not match it",
            version
        );
    }
    Ok(())
}
