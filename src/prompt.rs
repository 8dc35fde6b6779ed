use std::io::{self, BufRead, Write};

use anyhow::{bail, Result};

/// Ask the user to accept or correct a guessed field, or to supply it when
/// the engine came up empty. Enter accepts the guess; any other input
/// replaces it.
pub fn confirm_field(label: &str, guess: Option<&str>) -> Result<String> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        match guess {
            Some(g) => print!("{label} [{g}]: "),
            None => print!("{label}: "),
        }
        io::stdout().flush()?;

        let Some(line) = lines.next() else {
            bail!("stdin closed while waiting for {label}");
        };
        let line = line?;
        let answer = line.trim();
        if !answer.is_empty() {
            return Ok(answer.to_string());
        }
        if let Some(g) = guess {
            return Ok(g.to_string());
        }
        println!("A value is required.");
    }
}
