//! Formatting utilities used for CLI and backup outputs.

use regex::Regex;
use std::sync::LazyLock;
use unicode_width::UnicodeWidthStr;

/// Render minutes as `"<H>h <M>m"`, e.g. `125` → `"2h 5m"`.
///
/// Negative values keep their sign in front of the magnitude:
/// `-90` → `"-1h 30m"`, `-30` → `"-0h 30m"`. The sign always leads;
/// `"0h -30m"` style output is not produced.
pub fn format_duration(minutes: i64) -> String {
    let sign = if minutes < 0 { "-" } else { "" };
    let abs_m = minutes.unsigned_abs();

    format!("{}{}h {}m", sign, abs_m / 60, abs_m % 60)
}

pub fn yes_no(flag: bool) -> &'static str {
    if flag { "true" } else { "false" }
}

static ANSI_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\x1B\[[0-9;]*[mK]").expect("valid ANSI pattern"));

/// Remove ANSI color sequences, leaving only the visible text.
pub fn strip_ansi(s: &str) -> String {
    ANSI_RE.replace_all(s, "").into_owned()
}

/// Terminal column width of `s`, ignoring ANSI sequences.
pub fn visible_width(s: &str) -> usize {
    UnicodeWidthStr::width(strip_ansi(s).as_str())
}
