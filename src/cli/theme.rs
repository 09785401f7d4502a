use console::style;
use inquire::ui::{Attributes, Color, RenderConfig, StyleSheet, Styled};

pub fn readmate_theme() -> RenderConfig<'static> {
    RenderConfig {
        prompt_prefix: Styled::new("?").with_fg(Color::LightCyan),
        highlighted_option_prefix: Styled::new("❯").with_fg(Color::LightCyan),
        selected_checkbox: Styled::new("◉").with_fg(Color::LightGreen),
        unselected_checkbox: Styled::new("○").with_fg(Color::DarkGrey),
        answer: StyleSheet::new().with_fg(Color::LightCyan),
        help_message: StyleSheet::new()
            .with_fg(Color::DarkGrey)
            .with_attr(Attributes::ITALIC),
        ..Default::default()
    }
}

pub fn print_banner() {
    println!();
    println!(
        "  {}  {}",
        style("📝").cyan(),
        style("readmate").cyan().bold()
    );
    println!("  {}", style("README Wizard").dim());
    println!();
}

pub fn print_success(message: &str) {
    println!("  {} {}", style("✓").green(), message);
}

pub fn print_error(message: &str) {
    eprintln!("  {} {}", style("✗").red(), message);
}

pub fn print_cancelled() {
    println!();
    println!("  {}", style("Cancelled — no README generated.").dim());
}

pub fn print_summary(output: &str) {
    println!();
    println!("{}", style("─".repeat(50)).dim());
    println!();
    println!(
        "  {} {}",
        style("✅").green(),
        style("README generated!").green().bold()
    );
    println!();
    println!("  {}", style("Next steps:").bold());
    println!(
        "    {} Review {} and tweak the wording",
        style("1.").dim(),
        style(output).cyan()
    );
    println!(
        "    {} Commit it to your repository",
        style("2.").dim()
    );
    println!();
}
