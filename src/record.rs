//! The answer record driving README generation.
//!
//! An [`AnswerRecord`] is collected once per run (wizard answers, an answers
//! file, or the built-in defaults) and handed to the assembler as immutable
//! input. The assembler never mutates it.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// A user-defined README section appended between the fixed sections.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomSection {
    pub title: String,
    pub content: String,
}

/// Closed set of licenses offered by the wizard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum License {
    #[serde(rename = "MIT License")]
    Mit,
    #[serde(rename = "GNU GPLv3")]
    Gplv3,
    #[serde(rename = "Apache License 2.0")]
    Apache2,
    #[serde(rename = "ISC License")]
    Isc,
    /// No choosealicense.com page exists for this one; the badge link it
    /// produces is dead. Kept for output compatibility.
    #[serde(rename = "Unlicensed")]
    Unlicensed,
}

impl License {
    /// All licenses, in the order the wizard offers them.
    pub const ALL: [License; 5] = [
        License::Mit,
        License::Gplv3,
        License::Apache2,
        License::Isc,
        License::Unlicensed,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            License::Mit => "MIT License",
            License::Gplv3 => "GNU GPLv3",
            License::Apache2 => "Apache License 2.0",
            License::Isc => "ISC License",
            License::Unlicensed => "Unlicensed",
        }
    }
}

impl std::fmt::Display for License {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Rendering profile controlling structural extras.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum TemplateStyle {
    /// Full section set, no table of contents.
    Minimal,
    /// Full section set plus a table of contents and a footer rule.
    Classic,
    /// Reduced layout: description, tech stack, installation, author/contact.
    Compact,
}

impl Default for TemplateStyle {
    fn default() -> Self {
        TemplateStyle::Minimal
    }
}

impl std::fmt::Display for TemplateStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TemplateStyle::Minimal => f.write_str("Minimal"),
            TemplateStyle::Classic => f.write_str("Classic"),
            TemplateStyle::Compact => f.write_str("Compact"),
        }
    }
}

/// Every field the wizard collects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnswerRecord {
    pub project_name: String,
    pub emoji: String,
    pub description: String,
    pub install_command: String,
    pub usage_example: String,
    pub features: Vec<String>,
    pub contributing: String,
    pub author_name: String,
    pub github_username: String,
    pub website: String,
    /// Raw Markdown badge snippets, one per entry, joined on the header line.
    pub badges: Vec<String>,
    /// Free-form keywords for the skillicons badge (Compact profile).
    pub tech_stack: String,
    pub license: Option<License>,
    pub include_usage: bool,
    pub include_author: bool,
    pub custom_sections: Vec<CustomSection>,
}

impl Default for AnswerRecord {
    /// Fresh defaults for a new editing session. "Reset to defaults" assigns
    /// this wholesale, never patching fields one by one.
    fn default() -> Self {
        Self {
            project_name: "My Awesome Project".to_string(),
            emoji: "🚀".to_string(),
            description: "A short, one-line description of the project.".to_string(),
            install_command: "git clone <repo> && cd <repo>".to_string(),
            usage_example: String::new(),
            features: vec![
                "Easy to use".to_string(),
                "Fast deployment".to_string(),
                "Highly configurable".to_string(),
            ],
            contributing: "Open issues and PRs are welcome.".to_string(),
            author_name: "Your Name".to_string(),
            github_username: String::new(),
            website: String::new(),
            badges: Vec::new(),
            tech_stack: String::new(),
            license: None,
            include_usage: true,
            include_author: true,
            custom_sections: Vec::new(),
        }
    }
}
