//! Shared CLI output helpers.
//!
//! Color scheme (respects NO_COLOR):
//! - Red: errors
//! - Cyan: hints
//! - Bold: report section rules
//! - Dimmed: status lines

use colored::Colorize;
use console::Term;

use crate::core::search::Progress;

/// Delimiter of the errors section.
pub const ERRORS_TITLE: &str = "------------- ERRORS -------------------";

/// Delimiter of the matches section.
pub const FOUND_TITLE: &str = "------------- KEYS USING VALUE -------------------";

const BAR_WIDTH: usize = 40;

/// Check if color output is disabled via NO_COLOR env var.
fn colors_enabled() -> bool {
    std::env::var("NO_COLOR").is_err()
}

/// Print an error message to stderr (red).
///
/// Example: `✗ please insert a value with --value`
pub fn error(msg: &str) {
    if colors_enabled() {
        eprintln!("{} {}", "✗".red(), msg);
    } else {
        eprintln!("✗ {}", msg);
    }
}

/// Print a hint message to stderr (cyan).
///
/// Example: `→ check AWS credentials and --region`
pub fn hint(msg: &str) {
    if colors_enabled() {
        eprintln!("{} {}", "→".cyan(), msg.cyan());
    } else {
        eprintln!("→ {}", msg);
    }
}

/// Print a stage status line.
///
/// Example: `Reading parameters list...`
pub fn status(msg: &str) {
    if colors_enabled() {
        println!("{}", msg.dimmed());
    } else {
        println!("{}", msg);
    }
}

/// Print one delimited report section followed by a blank line.
///
/// ```text
/// ------------- ERRORS -------------------
/// Error getting parameter [db-pass]--->...
/// ------------- ERRORS -------------------
/// ```
pub fn report_section(title: &str, items: &[String]) {
    let rule = if colors_enabled() {
        title.bold().to_string()
    } else {
        title.to_string()
    };
    println!("{}", rule);
    for item in items {
        println!("{}", item);
    }
    println!("{}", rule);
    println!();
}

/// Render a bar line such as ` 3 / 10 [============>                 ]  30%`.
pub fn render_bar(current: usize, total: usize, width: usize) -> String {
    let ratio = if total == 0 {
        1.0
    } else {
        current.min(total) as f64 / total as f64
    };
    let filled = (ratio * width as f64).round() as usize;
    let head = if filled < width { ">" } else { "" };
    let empty = width.saturating_sub(filled + head.len());
    let digits = total.to_string().len();

    format!(
        "{:>digits$} / {} [{}{}{}] {:>3}%",
        current,
        total,
        "=".repeat(filled),
        head,
        " ".repeat(empty),
        (ratio * 100.0).round() as usize,
        digits = digits
    )
}

/// Progress bar redrawn in place on stdout.
///
/// Draws nothing when disabled or when stdout is not a terminal, so
/// piped output only carries the report.
pub struct ProgressBar {
    term: Term,
    enabled: bool,
    current: usize,
    total: usize,
}

impl ProgressBar {
    pub fn stdout(enabled: bool) -> Self {
        let term = Term::stdout();
        let enabled = enabled && term.is_term();
        Self {
            term,
            enabled,
            current: 0,
            total: 0,
        }
    }

    fn draw(&self) {
        if !self.enabled {
            return;
        }
        let cols = self.term.size().1 as usize;
        // leave room for the counters around the bar
        let width = BAR_WIDTH.min(cols.saturating_sub(24)).max(10);
        let _ = self.term.clear_line();
        let _ = self
            .term
            .write_str(&render_bar(self.current, self.total, width));
    }
}

impl Progress for ProgressBar {
    fn start(&mut self, total: usize) {
        self.total = total;
        self.current = 0;
        self.draw();
    }

    fn advance(&mut self) {
        self.current += 1;
        self.draw();
    }

    fn finish(&mut self) {
        if self.enabled {
            let _ = self.term.write_line("");
        }
    }
}
