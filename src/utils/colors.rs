/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";
pub const YELLOW: &str = "\x1b[33m";
pub const BLUE: &str = "\x1b[34m";
pub const CYAN: &str = "\x1b[36m";

/// Heavier rain gets a warmer color: ≥ 50 mm yellow, > 0 blue, dry grey.
pub fn color_for_amount(mm: f64) -> &'static str {
    if mm >= 50.0 {
        YELLOW
    } else if mm > 0.0 {
        BLUE
    } else {
        GREY
    }
}
