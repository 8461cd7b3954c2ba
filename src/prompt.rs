// src/prompt.rs
use std::io::{self, BufRead, Write};

/// Asks a yes/no question on the terminal. Empty input takes `default`, any
/// other answer than `y`/`n` re-prompts.
pub fn confirm(prompt_str: &str, default: bool) -> io::Result<bool> {
    let stdin = io::stdin();
    confirm_with(&mut stdin.lock(), &mut io::stdout(), prompt_str, default)
}

fn confirm_with<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt_str: &str,
    default: bool,
) -> io::Result<bool> {
    let prompt = if default {
        format!("{} [y]|n: ", prompt_str)
    } else {
        format!("{} [n]|y: ", prompt_str)
    };

    loop {
        write!(output, "{}", prompt)?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            // EOF (e.g. stdin closed); behave as if the default was taken.
            return Ok(default);
        }

        match line.trim().to_lowercase().as_str() {
            "" => return Ok(default),
            "y" => return Ok(true),
            "n" => return Ok(false),
            _ => writeln!(output, "Please enter y or n.")?,
        }
    }
}
