/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";

pub const YELLOW: &str = "\x1b[33m";
pub const CYAN: &str = "\x1b[36m";

/// Elapsed color:
/// positive → green
/// negative (reset in the future) → red
pub fn color_for_sign(negative: bool) -> &'static str {
    if negative { RED } else { GREEN }
}

/// Highlight the current item row; everything else stays grey.
pub fn colorize_row(value: &str, current: bool) -> String {
    if current {
        format!("{GREEN}{value}{RESET}")
    } else {
        format!("{GREY}{value}{RESET}")
    }
}
