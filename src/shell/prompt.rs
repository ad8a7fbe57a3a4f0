use std::{
    fmt::Display,
    io::{BufRead, Write},
};

use anyhow::{Context, Result};

/// Reads one line without its line terminator. `None` once input is exhausted.
///
/// Bytes that are not valid UTF-8 are replaced, so such a line is just an unknown answer.
pub fn read_line<R>(input: &mut R) -> Result<Option<String>>
where
    R: BufRead,
{
    let mut buf = Vec::new();
    let read = input
        .read_until(b'\n', &mut buf)
        .context("Failed to read from input")?;
    if read == 0 {
        return Ok(None);
    }
    let line = String::from_utf8_lossy(&buf);
    Ok(Some(line.trim_end_matches(['\n', '\r']).to_owned()))
}

pub fn prompt<R, W>(input: &mut R, output: &mut W, message: &str) -> Result<Option<String>>
where
    R: BufRead,
    W: Write,
{
    write!(output, "{message}").context("Failed to write prompt")?;
    output.flush().context("Failed to flush output")?;
    read_line(input)
}

/// Asks again, printing the parse error, until `parse` accepts the answer.
pub fn prompt_until<R, W, T, E>(
    input: &mut R,
    output: &mut W,
    message: &str,
    mut parse: impl FnMut(&str) -> Result<T, E>,
) -> Result<Option<T>>
where
    R: BufRead,
    W: Write,
    E: Display,
{
    loop {
        let Some(line) = prompt(input, output, message)? else {
            return Ok(None);
        };
        match parse(&line) {
            Ok(value) => return Ok(Some(value)),
            Err(err) => writeln!(output, "{err}").context("Failed to write to output")?,
        }
    }
}
