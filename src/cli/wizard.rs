//! Sequential prompt flow collecting an [`AnswerRecord`].
//!
//! Cancellation is collection-level: Esc or Ctrl-C at ANY prompt discards
//! every answer collected so far and yields `Ok(None)`. There is no partial
//! record.

use anyhow::Result;
use inquire::{error::InquireError, Confirm, Select, Text};

use crate::record::{AnswerRecord, CustomSection, License, TemplateStyle};

/// Unwrap a prompt result, turning user cancellation into `None`.
fn ask<T>(result: Result<T, InquireError>) -> Result<Option<T>> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(InquireError::OperationCanceled) | Err(InquireError::OperationInterrupted) => Ok(None),
        Err(err) => Err(err.into()),
    }
}

/// Collect lines until the user submits an empty one.
fn ask_lines(prompt: &str, initial: &[String]) -> Result<Option<Vec<String>>> {
    let mut lines: Vec<String> = initial.to_vec();
    if !lines.is_empty() {
        let keep = match ask(
            Confirm::new(&format!("{} — keep the {} prefilled entries?", prompt, lines.len()))
                .with_default(true)
                .prompt(),
        )? {
            Some(keep) => keep,
            None => return Ok(None),
        };
        if !keep {
            lines.clear();
        }
    }
    loop {
        let line = match ask(
            Text::new(prompt)
                .with_help_message("empty line to finish")
                .prompt(),
        )? {
            Some(line) => line,
            None => return Ok(None),
        };
        if line.trim().is_empty() {
            break;
        }
        lines.push(line);
    }
    Ok(Some(lines))
}

/// Run the full wizard. `initial` seeds the prompts (defaults merged with
/// the user config); `style` skips the style prompt when already chosen on
/// the command line.
pub fn run_wizard(
    initial: AnswerRecord,
    style: Option<TemplateStyle>,
) -> Result<Option<(AnswerRecord, TemplateStyle)>> {
    let mut record = initial;

    let style = match style {
        Some(style) => style,
        None => {
            let options = vec![
                TemplateStyle::Minimal,
                TemplateStyle::Classic,
                TemplateStyle::Compact,
            ];
            match ask(Select::new("Template style", options).prompt())? {
                Some(style) => style,
                None => return Ok(None),
            }
        }
    };

    macro_rules! text {
        ($prompt:expr, $field:expr) => {
            match ask(Text::new($prompt).with_initial_value(&$field).prompt())? {
                Some(value) => $field = value,
                None => return Ok(None),
            }
        };
    }

    text!("Project name", record.project_name);
    text!("Emoji (optional)", record.emoji);
    text!("Short description", record.description);

    if style == TemplateStyle::Compact {
        return compact_flow(record, style);
    }

    match ask_lines("Badge (full Markdown)", &record.badges)? {
        Some(badges) => record.badges = badges,
        None => return Ok(None),
    }

    text!("Installation command", record.install_command);

    match ask_lines("Feature", &record.features)? {
        Some(features) => record.features = features,
        None => return Ok(None),
    }

    text!("Contributing notes", record.contributing);

    match ask(Confirm::new("Include a Usage section?").with_default(true).prompt())? {
        Some(include) => record.include_usage = include,
        None => return Ok(None),
    }
    if record.include_usage {
        text!("Usage example / snippet", record.usage_example);
    }

    match ask(Confirm::new("Include an Author section?").with_default(true).prompt())? {
        Some(include) => record.include_author = include,
        None => return Ok(None),
    }
    if record.include_author {
        text!("Author name", record.author_name);
        text!("GitHub username (optional)", record.github_username);
        text!("Website (optional)", record.website);
    }

    loop {
        let add = match ask(
            Confirm::new("Add a custom section?")
                .with_default(false)
                .prompt(),
        )? {
            Some(add) => add,
            None => return Ok(None),
        };
        if !add {
            break;
        }
        let title = match ask(Text::new("Section title").prompt())? {
            Some(title) => title,
            None => return Ok(None),
        };
        let content = match ask(Text::new("Section content (Markdown)").prompt())? {
            Some(content) => content,
            None => return Ok(None),
        };
        record.custom_sections.push(CustomSection { title, content });
    }

    Ok(Some((record, style)))
}

/// Reduced prompt set for the Compact profile, which renders a fixed
/// subset of sections and needs a license for its header badge.
fn compact_flow(
    mut record: AnswerRecord,
    style: TemplateStyle,
) -> Result<Option<(AnswerRecord, TemplateStyle)>> {
    let license = match ask(Select::new("License", License::ALL.to_vec()).prompt())? {
        Some(license) => license,
        None => return Ok(None),
    };
    record.license = Some(license);

    macro_rules! text {
        ($prompt:expr, $field:expr) => {
            match ask(Text::new($prompt).with_initial_value(&$field).prompt())? {
                Some(value) => $field = value,
                None => return Ok(None),
            }
        };
    }

    text!("Tech stack keywords (comma separated)", record.tech_stack);
    text!("Installation command", record.install_command);
    text!("Author name", record.author_name);
    text!("Website or contact URL (optional)", record.website);

    Ok(Some((record, style)))
}

/// Confirm overwriting an existing output file. Cancellation counts as "no".
pub fn confirm_overwrite(path: &std::path::Path) -> Result<bool> {
    let answer = ask(
        Confirm::new(&format!("{} exists — overwrite?", path.display()))
            .with_default(false)
            .prompt(),
    )?;
    Ok(answer.unwrap_or(false))
}
