//! Formatting utilities used for CLI output.

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

pub fn italic(s: &str) -> String {
    format!("\x1b[3m{}\x1b[0m", s)
}

/// Millimeters with one decimal, e.g. `12.5 mm`.
pub fn mm(value: f64) -> String {
    format!("{:.1} mm", value)
}

/// Wrap long prose (AI analysis, notes) for the terminal.
pub fn wrap_text(text: &str, width: usize) -> String {
    text.lines()
        .map(|line| {
            if line.trim().is_empty() {
                String::new()
            } else {
                textwrap::fill(line, width)
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}
