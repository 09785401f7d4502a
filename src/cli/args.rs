use std::path::PathBuf;

use clap::Parser;

use crate::record::TemplateStyle;

#[derive(Parser, Debug)]
#[command(
    name = "readmate",
    version,
    about = "Generate a polished README.md through an interactive wizard",
    long_about = "Generate a polished README.md through an interactive wizard,\n\
                  a saved answers file, or the built-in defaults."
)]
pub struct Args {
    /// Output file
    #[arg(short, long, default_value = "README.md", value_name = "FILE")]
    pub output: PathBuf,

    /// Print the document to stdout instead of writing a file
    #[arg(long)]
    pub stdout: bool,

    /// Template style (skips the style prompt)
    #[arg(short, long, value_enum, value_name = "STYLE")]
    pub style: Option<TemplateStyle>,

    /// Load answers from a JSON file instead of running the wizard
    #[arg(long, value_name = "FILE", conflicts_with = "defaults")]
    pub answers: Option<PathBuf>,

    /// Render the defaults record without prompting
    #[arg(long)]
    pub defaults: bool,

    /// Overwrite an existing output file without asking
    #[arg(short, long)]
    pub force: bool,

    /// Save the collected answers as JSON for later --answers runs
    #[arg(long, value_name = "FILE")]
    pub save_answers: Option<PathBuf>,
}
