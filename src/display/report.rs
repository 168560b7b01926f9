//! Report formatting utilities for terminal output
//!
//! Provides formatting helpers shared by the dashboard and history views.

use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, Local, Utc};

use crate::catalog::Currency;
use crate::models::Money;

const RED: &str = "\x1b[31m";
const GREEN: &str = "\x1b[32m";
const RESET: &str = "\x1b[0m";

/// Fallback used when the configured date format is not valid strftime
pub const DEFAULT_DATE_FORMAT: &str = "%-m/%-d/%Y";

pub fn red(s: &str) -> String {
    format!("{}{}{}", RED, s, RESET)
}

pub fn green(s: &str) -> String {
    format!("{}{}{}", GREEN, s, RESET)
}

/// Wrap `s` in a 24-bit foreground color given as "#RRGGBB"
///
/// Malformed colors leave the text unstyled.
pub fn hex_color(s: &str, hex: &str) -> String {
    match parse_hex_rgb(hex) {
        Some((r, g, b)) => format!("\x1b[38;2;{};{};{}m{}{}", r, g, b, s, RESET),
        None => s.to_string(),
    }
}

fn parse_hex_rgb(hex: &str) -> Option<(u8, u8, u8)> {
    let digits = hex.strip_prefix('#')?;
    if digits.len() != 6 || !digits.is_ascii() {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).ok();
    Some((channel(0)?, channel(2)?, channel(4)?))
}

/// Format an amount in `currency`, e.g. "€12.50"
pub fn format_money(amount: Money, currency: Currency) -> String {
    amount.format_with_symbol(currency.symbol())
}

/// Format an amount red when negative, green otherwise
pub fn format_money_signed_color(amount: Money, currency: Currency) -> String {
    let text = format_money(amount, currency);
    if amount.is_negative() {
        red(&text)
    } else {
        green(&text)
    }
}

/// Format a percentage with appropriate precision
pub fn format_percentage(pct: f64) -> String {
    if pct < 0.1 && pct > 0.0 {
        format!("{:.2}%", pct)
    } else if pct < 10.0 {
        format!("{:.1}%", pct)
    } else {
        format!("{:.0}%", pct)
    }
}

/// Create a simple bar chart representation
pub fn format_bar(value: f64, max_value: f64, width: usize) -> String {
    if max_value <= 0.0 || value <= 0.0 {
        return "░".repeat(width);
    }

    let filled = ((value / max_value) * width as f64).round() as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format a timestamp as a local date using a strftime pattern
///
/// Invalid patterns fall back to [`DEFAULT_DATE_FORMAT`] instead of failing.
pub fn format_local_date(date: DateTime<Utc>, pattern: &str) -> String {
    let valid = !StrftimeItems::new(pattern).any(|item| matches!(item, Item::Error));
    let pattern = if valid { pattern } else { DEFAULT_DATE_FORMAT };
    date.with_timezone(&Local).format(pattern).to_string()
}

pub fn separator(width: usize) -> String {
    "─".repeat(width)
}

pub fn double_separator(width: usize) -> String {
    "═".repeat(width)
}

/// Truncate a string to a maximum number of characters with ellipsis
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len <= 3 {
        ".".repeat(max_len)
    } else {
        let head: String = s.chars().take(max_len - 3).collect();
        format!("{}...", head)
    }
}
