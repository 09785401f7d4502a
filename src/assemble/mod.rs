pub mod badges;
pub mod render;
pub mod sections;

pub use badges::{badges_line, license_badge, tech_stack_badge};
pub use render::{render, render_document, render_with_date, toc_slug};
pub use sections::{build_sections, plan_for, section_id, Section, SectionKind};
