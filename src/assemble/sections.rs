//! Section-list builder: decides which sections exist and in what order.
//!
//! Every template style shares one plan-driven code path. A plan is an
//! ordered list of [`SectionKind`]s; each kind expands to zero or more
//! concrete sections depending on the record's inclusion flags and fields.
//! Blank fields degrade to documented placeholder text, never errors.

use crate::assemble::badges::tech_stack_badge;
use crate::record::{AnswerRecord, TemplateStyle};

/// A titled Markdown block with an anchor id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub id: String,
    pub title: String,
    pub content: String,
}

/// One entry of a template style's section plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionKind {
    /// Fenced install command, or a placeholder when blank.
    Installation,
    /// Bulleted feature list, or a placeholder bullet when empty.
    Features,
    /// Fenced usage example, gated by `include_usage`.
    Usage,
    /// All custom sections with non-blank titles, in input order.
    CustomSections,
    /// Contributing notes, with a welcome-message fallback.
    Contributing,
    /// Author name plus optional GitHub/website links, gated by `include_author`.
    Author,
    /// Compact profile: plain description paragraph.
    Description,
    /// Compact profile: skillicons badge, omitted when no keywords remain.
    TechStack,
    /// Compact profile: guided install steps with the command fenced.
    GuidedInstallation,
    /// Compact profile: unconditional author/contact block.
    AuthorContact,
}

/// The ordered section plan for a template style.
pub fn plan_for(style: TemplateStyle) -> &'static [SectionKind] {
    match style {
        TemplateStyle::Minimal | TemplateStyle::Classic => &[
            SectionKind::Installation,
            SectionKind::Features,
            SectionKind::Usage,
            SectionKind::CustomSections,
            SectionKind::Contributing,
            SectionKind::Author,
        ],
        TemplateStyle::Compact => &[
            SectionKind::Description,
            SectionKind::TechStack,
            SectionKind::GuidedInstallation,
            SectionKind::AuthorContact,
        ],
    }
}

/// Anchor id for a custom section: trimmed title, lower-cased, spaces to
/// hyphens. Punctuation is kept as-is; this is deliberately not the same
/// function as the table-of-contents slug.
pub fn section_id(title: &str) -> String {
    title.trim().to_lowercase().replace(' ', "-")
}

/// Build the ordered section list plus a parallel list of titles for the
/// table of contents (used only by the Classic style).
pub fn build_sections(record: &AnswerRecord, style: TemplateStyle) -> (Vec<Section>, Vec<String>) {
    let mut sections = Vec::new();
    let mut toc = Vec::new();

    for kind in plan_for(style) {
        expand(*kind, record, &mut sections, &mut toc);
    }

    (sections, toc)
}

fn expand(kind: SectionKind, record: &AnswerRecord, sections: &mut Vec<Section>, toc: &mut Vec<String>) {
    let mut push = |id: &str, title: &str, content: String| {
        sections.push(Section {
            id: id.to_string(),
            title: title.to_string(),
            content,
        });
        toc.push(title.to_string());
    };

    match kind {
        SectionKind::Installation => {
            let content = if record.install_command.trim().is_empty() {
                "No installation instructions provided.".to_string()
            } else {
                format!("```bash\n{}\n```", record.install_command)
            };
            push("installation", "Installation", content);
        }
        SectionKind::Features => {
            let bullets: Vec<String> = record
                .features
                .iter()
                .map(|f| f.trim())
                .filter(|f| !f.is_empty())
                .map(|f| format!("- {}", f))
                .collect();
            let content = if bullets.is_empty() {
                "- No features listed yet.".to_string()
            } else {
                bullets.join("\n")
            };
            push("features", "Features", content);
        }
        SectionKind::Usage => {
            if record.include_usage {
                let content = if record.usage_example.trim().is_empty() {
                    "*No usage example provided yet.*".to_string()
                } else {
                    format!("```bash\n{}\n```", record.usage_example)
                };
                push("usage", "Usage", content);
            }
        }
        SectionKind::CustomSections => {
            for custom in &record.custom_sections {
                let title = custom.title.trim();
                if title.is_empty() {
                    continue;
                }
                let id = section_id(&custom.title);
                push(&id, title, custom.content.trim().to_string());
            }
        }
        SectionKind::Contributing => {
            let content = if record.contributing.trim().is_empty() {
                "Contributions welcome — open an issue or a PR.".to_string()
            } else {
                record.contributing.clone()
            };
            push("contributing", "Contributing", content);
        }
        SectionKind::Author => {
            if record.include_author {
                let mut content = format!("**{}**\n", record.author_name);
                if !record.github_username.trim().is_empty() {
                    content.push_str(&format!(
                        "- GitHub: [{0}](https://github.com/{0})\n",
                        record.github_username
                    ));
                }
                if !record.website.trim().is_empty() {
                    content.push_str(&format!(
                        "- Website: [{0}]({0})\n",
                        record.website
                    ));
                }
                push("author", "Author", content.trim().to_string());
            }
        }
        SectionKind::Description => {
            let content = if record.description.trim().is_empty() {
                "A brief description of the project.".to_string()
            } else {
                record.description.clone()
            };
            push("description", "Description", content);
        }
        SectionKind::TechStack => {
            let badge = tech_stack_badge(&record.tech_stack);
            if !badge.is_empty() {
                push("tech-stack", "Tech Stack", badge);
            }
        }
        SectionKind::GuidedInstallation => {
            let command = if record.install_command.trim().is_empty() {
                "No installation instructions provided."
            } else {
                record.install_command.as_str()
            };
            let content = format!(
                "To get this project running, follow these steps:\n\n```bash\n{}\n```",
                command
            );
            push("installation", "Installation", content);
        }
        SectionKind::AuthorContact => {
            let author = if record.author_name.trim().is_empty() {
                "Unknown"
            } else {
                record.author_name.as_str()
            };
            let mut content = format!("**Author:** {}", author);
            let contact = if !record.website.trim().is_empty() {
                record.website.clone()
            } else if !record.github_username.trim().is_empty() {
                format!("https://github.com/{}", record.github_username)
            } else {
                String::new()
            };
            if !contact.is_empty() {
                content.push_str(&format!("\n\n**Contact:** {}", contact));
            }
            push("author-and-contact", "Author and Contact", content);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::CustomSection;

    fn titles(sections: &[Section]) -> Vec<&str> {
        sections.iter().map(|s| s.title.as_str()).collect()
    }

    #[test]
    fn test_fixed_order_with_all_flags() {
        let record = AnswerRecord::default();
        let (sections, toc) = build_sections(&record, TemplateStyle::Minimal);
        assert_eq!(
            titles(&sections),
            vec!["Installation", "Features", "Usage", "Contributing", "Author"]
        );
        assert_eq!(toc, titles(&sections));
    }

    #[test]
    fn test_flags_off_drop_usage_and_author() {
        let record = AnswerRecord {
            include_usage: false,
            include_author: false,
            ..AnswerRecord::default()
        };
        let (sections, _) = build_sections(&record, TemplateStyle::Minimal);
        assert_eq!(titles(&sections), vec!["Installation", "Features", "Contributing"]);
    }

    #[test]
    fn test_custom_sections_keep_input_order() {
        let record = AnswerRecord {
            custom_sections: vec![
                CustomSection {
                    title: "Road Map".to_string(),
                    content: "v2 soon".to_string(),
                },
                CustomSection {
                    title: "   ".to_string(),
                    content: "dropped".to_string(),
                },
                CustomSection {
                    title: "FAQ".to_string(),
                    content: "none yet".to_string(),
                },
            ],
            ..AnswerRecord::default()
        };
        let (sections, toc) = build_sections(&record, TemplateStyle::Minimal);
        assert_eq!(
            titles(&sections),
            vec!["Installation", "Features", "Usage", "Road Map", "FAQ", "Contributing", "Author"]
        );
        assert!(toc.contains(&"Road Map".to_string()));
        assert!(!toc.iter().any(|t| t.trim().is_empty()));
    }

    #[test]
    fn test_custom_section_id_slug() {
        assert_eq!(section_id("Road Map"), "road-map");
        assert_eq!(section_id("  Q&A  "), "q&a");
        // Punctuation is not stripped.
        assert_eq!(section_id("v1.0 Notes"), "v1.0-notes");
    }

    #[test]
    fn test_installation_fallback_when_blank() {
        let record = AnswerRecord {
            install_command: "   ".to_string(),
            ..AnswerRecord::default()
        };
        let (sections, _) = build_sections(&record, TemplateStyle::Minimal);
        assert_eq!(sections[0].content, "No installation instructions provided.");
    }

    #[test]
    fn test_installation_fenced_when_present() {
        let record = AnswerRecord {
            install_command: "pip install foo".to_string(),
            ..AnswerRecord::default()
        };
        let (sections, _) = build_sections(&record, TemplateStyle::Minimal);
        assert_eq!(sections[0].content, "```bash\npip install foo\n```");
    }

    #[test]
    fn test_features_bullets_in_order() {
        let record = AnswerRecord {
            features: vec!["Fast".to_string(), "  ".to_string(), "Simple".to_string()],
            ..AnswerRecord::default()
        };
        let (sections, _) = build_sections(&record, TemplateStyle::Minimal);
        assert_eq!(sections[1].content, "- Fast\n- Simple");
    }

    #[test]
    fn test_features_fallback_when_all_blank() {
        let record = AnswerRecord {
            features: vec!["  ".to_string(), String::new()],
            ..AnswerRecord::default()
        };
        let (sections, _) = build_sections(&record, TemplateStyle::Minimal);
        assert_eq!(sections[1].content, "- No features listed yet.");
    }

    #[test]
    fn test_usage_placeholder_when_blank() {
        let record = AnswerRecord {
            usage_example: String::new(),
            ..AnswerRecord::default()
        };
        let (sections, _) = build_sections(&record, TemplateStyle::Minimal);
        let usage = sections.iter().find(|s| s.id == "usage").unwrap();
        assert_eq!(usage.content, "*No usage example provided yet.*");
    }

    #[test]
    fn test_contributing_fallback() {
        let record = AnswerRecord {
            contributing: String::new(),
            ..AnswerRecord::default()
        };
        let (sections, _) = build_sections(&record, TemplateStyle::Minimal);
        let contributing = sections.iter().find(|s| s.id == "contributing").unwrap();
        assert_eq!(
            contributing.content,
            "Contributions welcome — open an issue or a PR."
        );
    }

    #[test]
    fn test_author_links_only_when_present() {
        let record = AnswerRecord {
            author_name: "Ada".to_string(),
            github_username: "ada".to_string(),
            website: String::new(),
            ..AnswerRecord::default()
        };
        let (sections, _) = build_sections(&record, TemplateStyle::Minimal);
        let author = sections.iter().find(|s| s.id == "author").unwrap();
        assert_eq!(
            author.content,
            "**Ada**\n- GitHub: [ada](https://github.com/ada)"
        );
    }

    #[test]
    fn test_compact_plan() {
        let record = AnswerRecord {
            tech_stack: "Rust".to_string(),
            ..AnswerRecord::default()
        };
        let (sections, _) = build_sections(&record, TemplateStyle::Compact);
        assert_eq!(
            titles(&sections),
            vec!["Description", "Tech Stack", "Installation", "Author and Contact"]
        );
    }

    #[test]
    fn test_compact_omits_empty_tech_stack() {
        let record = AnswerRecord::default();
        let (sections, _) = build_sections(&record, TemplateStyle::Compact);
        assert_eq!(
            titles(&sections),
            vec!["Description", "Installation", "Author and Contact"]
        );
    }
}
