use anyhow::Result;
use std::io::{BufRead, Write};
use thiserror::Error;

pub const VERSION_PROMPT: &str = "Enter the new version number: ";

#[derive(Debug, Error)]
pub enum PromptError {
    #[error("No version entered: input closed before an answer was read")]
    NoInput,
}

/// Writes [`VERSION_PROMPT`] to `output` and reads one line from `input`.
///
/// Only the line terminator is stripped; the answer is otherwise returned
/// exactly as typed.
pub fn read_version(mut input: impl BufRead, mut output: impl Write) -> Result<String> {
    output.write_all(VERSION_PROMPT.as_bytes())?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(PromptError::NoInput.into());
    }
    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
    Ok(line)
}
