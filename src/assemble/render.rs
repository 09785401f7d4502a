//! Final document assembly: header, optional table of contents, section
//! blocks, and the generated-by footer.

use chrono::NaiveDate;

use crate::assemble::badges::{badges_line, license_badge};
use crate::assemble::sections::{build_sections, Section};
use crate::error::AssembleError;
use crate::record::{AnswerRecord, TemplateStyle};

/// Slug for a table-of-contents link target: lower-cased title with spaces
/// replaced by hyphens. Kept separate from the section-id rule on purpose;
/// the two rules happen to agree today but evolve independently.
pub fn toc_slug(title: &str) -> String {
    title.to_lowercase().replace(' ', "-")
}

/// Render the record with today's date stamped in the footer.
pub fn render(record: &AnswerRecord, style: TemplateStyle) -> Result<String, AssembleError> {
    render_with_date(record, style, chrono::Local::now().date_naive())
}

/// Deterministic core: build the section list and render it for a given
/// footer date. Output is byte-identical for identical inputs.
pub fn render_with_date(
    record: &AnswerRecord,
    style: TemplateStyle,
    date: NaiveDate,
) -> Result<String, AssembleError> {
    let (sections, toc) = build_sections(record, style);
    render_document(record, &sections, &toc, style, date)
}

/// Concatenate header, optional table of contents, pre-built section
/// blocks, and footer. Empty blocks (an empty badges line, for instance)
/// contribute nothing, and the final document is trimmed of leading and
/// trailing whitespace.
pub fn render_document(
    record: &AnswerRecord,
    sections: &[Section],
    toc: &[String],
    style: TemplateStyle,
    date: NaiveDate,
) -> Result<String, AssembleError> {
    let badges = match style {
        TemplateStyle::Compact => {
            let license = record.license.ok_or(AssembleError::MissingLicense)?;
            license_badge(license)
        }
        _ => badges_line(&record.badges),
    };

    let mut parts: Vec<String> = Vec::new();
    parts.push(format!("# {} {}", record.project_name, record.emoji));
    if style != TemplateStyle::Compact {
        parts.push(record.description.clone());
    }
    parts.push(badges);

    if style == TemplateStyle::Classic {
        let toc_md: Vec<String> = toc
            .iter()
            .map(|title| format!("- [{}](#{})", title, toc_slug(title)))
            .collect();
        parts.push(format!("## Table of contents\n{}", toc_md.join("\n")));
    }

    for section in sections {
        parts.push(format!("## {}\n\n{}\n", section.title, section.content));
    }

    let footer = format!(
        "_Generated with readmate on {}_",
        date.format("%Y-%m-%d")
    );
    if style == TemplateStyle::Classic {
        parts.push(format!("---\n{}", footer));
    } else {
        parts.push(footer);
    }

    let document = parts
        .into_iter()
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("\n\n");

    Ok(document.trim().to_string())
}
