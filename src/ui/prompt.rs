//! Interactive prompts. Input and output are injected so tests can drive them.

use crate::errors::AppResult;
use std::io::{BufRead, Write};

/// Print `prompt` without a newline and read one line (trailing newline removed).
pub fn ask<R: BufRead, W: Write>(input: &mut R, out: &mut W, prompt: &str) -> AppResult<String> {
    write!(out, "{}", prompt)?;
    out.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

/// Yes/no question; anything but `y`/`yes` counts as no.
pub fn confirm<R: BufRead, W: Write>(input: &mut R, out: &mut W, prompt: &str) -> AppResult<bool> {
    let answer = ask(input, out, &format!("{} [y/N]: ", prompt))?;
    Ok(matches!(
        answer.trim().to_lowercase().as_str(),
        "y" | "yes"
    ))
}
