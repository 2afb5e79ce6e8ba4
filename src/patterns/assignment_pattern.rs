use crate::patterns::Pattern;
use regex::Regex;

/// `version = "X.Y.Z"`, as found in Cargo.toml.
///
/// There is no leading word boundary, so `rust-version = "1.82.0"` and inline
/// dependency tables like `{ version = "1.0.217" }` match as well.
pub struct AssignmentPattern;

impl Pattern for AssignmentPattern {
    fn version_match_regex() -> anyhow::Result<Regex> {
        Ok(Regex::new(r#"version\s*=\s*"\d+\.\d+\.\d+""#)?)
    }

    fn version_line_format(version: &str) -> String {
        format!(r#"version = "{version}""#)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_regex_matches_simple() {
        let regex = AssignmentPattern::version_match_regex().unwrap();
        assert!(regex.is_match(r#"version = "1.2.3""#));
    }

    #[test]
    fn test_version_regex_matches_no_spaces() {
        let regex = AssignmentPattern::version_match_regex().unwrap();
        assert!(regex.is_match(r#"version="0.1.0""#));
    }

    #[test]
    fn test_version_regex_ignores_json_shape() {
        let regex = AssignmentPattern::version_match_regex().unwrap();
        assert!(!regex.is_match(r#""version": "1.2.3""#));
    }

    #[test]
    fn test_version_regex_ignores_partial_versions() {
        let regex = AssignmentPattern::version_match_regex().unwrap();
        assert!(!regex.is_match(r#"version = "2""#));
        assert!(!regex.is_match(r#"version = "1.5.0-alpha""#));
    }

    #[test]
    fn test_replace_scenario() {
        let content = "version = \"0.1.0\"\nname = \"pkg\"\n";
        let (out, count) = AssignmentPattern::replace_all(content, "0.2.0").unwrap();
        assert_eq!(out, "version = \"0.2.0\"\nname = \"pkg\"\n");
        assert_eq!(count, 1);
    }

    #[test]
    fn test_replace_matches_suffixed_keys() {
        let (out, count) =
            AssignmentPattern::replace_all(r#"rust-version = "1.82.0""#, "3.0.0").unwrap();
        assert_eq!(out, r#"rust-version = "3.0.0""#);
        assert_eq!(count, 1);
    }

    #[test]
    fn test_replace_without_match_is_identity() {
        let content = "[package]\nname = \"pkg\"\n";
        let (out, count) = AssignmentPattern::replace_all(content, "9.9.9").unwrap();
        assert_eq!(out, content);
        assert_eq!(count, 0);
    }

    #[test]
    fn test_version_line_format() {
        assert_eq!(
            AssignmentPattern::version_line_format("2.0.0"),
            r#"version = "2.0.0""#
        );
    }
}
