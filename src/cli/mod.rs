mod args;
pub mod theme;
pub mod wizard;

pub use args::Args;

use anyhow::Result;

use crate::assemble::render;
use crate::config::UserConfig;
use crate::emit;
use crate::record::AnswerRecord;

/// Top-level dispatch: collect a record (answers file, defaults, or wizard),
/// render it, and deliver the document (stdout or file).
pub fn run(args: Args) -> Result<()> {
    let config = match UserConfig::load() {
        Ok(config) => config,
        Err(err) => {
            theme::print_error(&format!("{err:#} — ignoring user config"));
            UserConfig::default()
        }
    };

    let mut initial = AnswerRecord::default();
    config.apply(&mut initial);

    let preset_style = args.style.or(config.style);

    let (record, style, interactive) = if let Some(path) = &args.answers {
        (emit::load_answers(path)?, preset_style.unwrap_or_default(), false)
    } else if args.defaults {
        (initial, preset_style.unwrap_or_default(), false)
    } else {
        inquire::set_global_render_config(theme::readmate_theme());
        theme::print_banner();
        match wizard::run_wizard(initial, preset_style)? {
            Some((record, style)) => (record, style, true),
            None => {
                theme::print_cancelled();
                return Ok(());
            }
        }
    };

    let document = render(&record, style)?;

    if let Some(path) = &args.save_answers {
        emit::save_answers(path, &record)?;
        theme::print_success(&format!("Saved answers to {}", path.display()));
    }

    if args.stdout {
        println!("{document}");
        return Ok(());
    }

    if args.output.exists() && !args.force {
        if interactive {
            if !wizard::confirm_overwrite(&args.output)? {
                theme::print_cancelled();
                return Ok(());
            }
        } else {
            theme::print_error(&format!(
                "{} already exists (use --force to overwrite)",
                args.output.display()
            ));
            return Ok(());
        }
    }

    // Report write failures without aborting; there is nothing to retry.
    match emit::write_readme(&args.output, &document) {
        Ok(()) => {
            theme::print_success(&format!("Wrote {}", args.output.display()));
            if interactive {
                theme::print_summary(&args.output.display().to_string());
            }
        }
        Err(err) => theme::print_error(&format!("{err:#}")),
    }

    Ok(())
}
