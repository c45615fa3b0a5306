//! Terminal output for mp4gif.
//!
//! Errors go to stderr and help goes to stdout. Styling is applied only when
//! the target stream is a color-capable terminal, so piped output stays plain.

use console::{Term, style};

/// Print an error message, with an optional suggestion on the following line
pub fn print_error(message: &str, suggestion: Option<&str>) {
    let term = Term::stderr();
    term.write_line(&style(message).for_stderr().red().bold().to_string())
        .ok();

    if let Some(suggestion_text) = suggestion {
        term.write_line(&style(suggestion_text).for_stderr().yellow().to_string())
            .ok();
    }
}

/// Print help text to stdout
pub fn print_usage(text: &str) {
    Term::stdout().write_line(text.trim_end()).ok();
}
