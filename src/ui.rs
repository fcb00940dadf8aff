//! Console reporting helpers.
//!
//! Pure formatting, no decisions: callers pass in the values to print.

use crate::replace::ReplaceOutcome;
use console::style;

pub fn display_error(message: &str) {
    eprintln!("{} {}", style("ERROR:").red().bold(), message);
}

pub fn display_success(message: &str) {
    println!("{} {}", style("✓").green(), message);
}

pub fn display_status(message: &str) {
    println!("{} {}", style("→").yellow(), message);
}

/// Print the replace report for one file: a changed/unchanged summary line
/// and, when `show_lines` is set, every replaced line's before/after text.
pub fn display_outcome(outcome: &ReplaceOutcome, show_lines: bool) {
    println!(
        "File: {} changed: {}",
        style(outcome.file.display()).bold(),
        outcome.has_changes()
    );

    if show_lines {
        for diff in &outcome.diffs {
            println!("  line {}:", diff.line);
            println!("    {}", style(format!("- {}", diff.before)).red());
            println!("    {}", style(format!("+ {}", diff.after)).green());
        }
    }
}
