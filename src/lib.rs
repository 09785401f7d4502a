//! readmate — generate a README.md from a structured answer record.
//!
//! The library half is the pure template assembler: [`record::AnswerRecord`]
//! in, Markdown string out via [`assemble::render`]. The binary half wraps
//! it in an interactive wizard ([`cli`]); [`session`] carries live editing
//! state for form-style frontends.

pub mod assemble;
pub mod cli;
pub mod config;
pub mod emit;
pub mod error;
pub mod record;
pub mod session;

pub use assemble::{render, render_with_date};
pub use error::AssembleError;
pub use record::{AnswerRecord, CustomSection, License, TemplateStyle};
