use crate::utils::colors::{BLUE, BOLD, GREEN, RED, RESET, YELLOW};
use std::fmt;

/// Icons
const ICON_INFO: &str = "ℹ️";
const ICON_OK: &str = "✅";
const ICON_WARN: &str = "⚠️";
const ICON_ERR: &str = "❌";
const ICON_OPEN: &str = "🟢";
const ICON_CLOSED: &str = "🔴";

pub fn info<T: fmt::Display>(msg: T) {
    println!("{}{}{} {}{}", BLUE, BOLD, ICON_INFO, RESET, msg);
}

pub fn success<T: fmt::Display>(msg: T) {
    println!("{}{}{} {}{}", GREEN, BOLD, ICON_OK, RESET, msg);
}

pub fn warning<T: fmt::Display>(msg: T) {
    println!("{}{}{} {}{}", YELLOW, BOLD, ICON_WARN, RESET, msg);
}

pub fn error<T: fmt::Display>(msg: T) {
    eprintln!("{}{}{} {}{}", RED, BOLD, ICON_ERR, RESET, msg);
}

/// Open/closed indicator followed by the rendered status message.
pub fn status_line<T: fmt::Display>(is_open: bool, msg: T) {
    let (icon, color) = if is_open {
        (ICON_OPEN, GREEN)
    } else {
        (ICON_CLOSED, RED)
    };
    println!("{} {}{}{}{}", icon, color, BOLD, msg, RESET);
}
