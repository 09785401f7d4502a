//! Badge snippet generators: pure functions from record fields to Markdown.

use crate::record::License;

/// Markdown image-link badge for a license.
///
/// The shields.io label escapes spaces as `_`, hyphens as `__` and drops
/// periods; the link points at the license's choosealicense.com page, keyed
/// by the first word of the name. Note "Unlicensed" yields a dead link,
/// preserved for output compatibility.
pub fn license_badge(license: License) -> String {
    let name = license.as_str();
    let label = name.replace(' ', "_").replace('-', "__").replace('.', "");
    let first_word = name
        .split_whitespace()
        .next()
        .unwrap_or(name)
        .to_lowercase();
    format!(
        "[![License: {name}](https://img.shields.io/badge/License-{label}-blue.svg)](https://choosealicense.com/licenses/{first_word}/)"
    )
}

/// Skillicons badge from free-form tech-stack text.
///
/// Newlines and spaces are treated as commas, tokens are trimmed and
/// lower-cased, empties dropped. Returns an empty string when nothing
/// usable remains, so the caller can omit the section entirely.
pub fn tech_stack_badge(input: &str) -> String {
    let normalized = input.trim().replace('\n', ",").replace(' ', ",");
    let keywords: Vec<String> = normalized
        .split(',')
        .map(|word| word.trim().to_lowercase())
        .filter(|word| !word.is_empty())
        .collect();

    if keywords.is_empty() {
        return String::new();
    }
    format!(
        "![My Skills](https://skillicons.dev/icons?i={})",
        keywords.join(",")
    )
}

/// Join user-supplied badge snippets into a single header line.
///
/// Each entry is assumed to already be valid Markdown; blank entries are
/// dropped and the rest joined with single spaces.
pub fn badges_line(badges: &[String]) -> String {
    badges
        .iter()
        .map(|badge| badge.trim())
        .filter(|badge| !badge.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mit_license_badge_exact() {
        assert_eq!(
            license_badge(License::Mit),
            "[![License: MIT License](https://img.shields.io/badge/License-MIT_License-blue.svg)](https://choosealicense.com/licenses/mit/)"
        );
    }

    #[test]
    fn test_license_badge_link_uses_first_word() {
        let badge = license_badge(License::Apache2);
        assert!(badge.contains("https://choosealicense.com/licenses/apache/"));
        assert!(badge.contains("License-Apache_License_20-blue.svg"));

        let badge = license_badge(License::Gplv3);
        assert!(badge.contains("https://choosealicense.com/licenses/gnu/"));
    }

    #[test]
    fn test_unlicensed_badge_keeps_dead_link() {
        let badge = license_badge(License::Unlicensed);
        assert!(badge.contains("https://choosealicense.com/licenses/unlicensed/"));
    }

    #[test]
    fn test_tech_stack_normalization() {
        assert_eq!(
            tech_stack_badge("Python, React\nMongoDB"),
            "![My Skills](https://skillicons.dev/icons?i=python,react,mongodb)"
        );
    }

    #[test]
    fn test_tech_stack_blank_yields_empty() {
        assert_eq!(tech_stack_badge(""), "");
        assert_eq!(tech_stack_badge("  \n , ,  "), "");
    }

    #[test]
    fn test_tech_stack_space_separated() {
        assert_eq!(
            tech_stack_badge("Rust Go"),
            "![My Skills](https://skillicons.dev/icons?i=rust,go)"
        );
    }

    #[test]
    fn test_badges_line_skips_blanks() {
        let badges = vec![
            "![a](x)".to_string(),
            "   ".to_string(),
            "![b](y)".to_string(),
        ];
        assert_eq!(badges_line(&badges), "![a](x) ![b](y)");
        assert_eq!(badges_line(&[]), "");
    }
}
