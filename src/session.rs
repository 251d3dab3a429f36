// src/session.rs
//! Interactive prompt: read a keyword and a message, show both results
//!
//! Generic over reader/writer so the binary wires it to stdin/stdout and
//! tests drive it with in-memory buffers.

use std::io::{BufRead, Write};

use tracing::debug;

use crate::cipher::DualCipher;
use crate::error::Result;

pub const KEYWORD_PROMPT: &str = "Enter keyword (letters only): ";
pub const PLAINTEXT_PROMPT: &str = "Enter plaintext message: ";

/// What one session produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionTranscript {
    pub keyword: String,
    pub ciphertext: String,
    pub recovered: String,
}

/// Strip one trailing `\n` or `\r\n`
fn trim_line_end(line: &str) -> &str {
    line.strip_suffix('\n')
        .map(|l| l.strip_suffix('\r').unwrap_or(l))
        .unwrap_or(line)
}

/// Skip blank lines, then split the first whitespace-delimited token off
/// its line. When the token does not end the line, exactly one separator
/// is dropped and the rest of the line (possibly empty) comes back too.
fn read_keyword<R: BufRead>(input: &mut R) -> Result<(String, Option<String>)> {
    let mut line = String::new();
    loop {
        line.clear();
        if input.read_line(&mut line)? == 0 {
            return Ok((String::new(), None));
        }
        if !line.trim().is_empty() {
            break;
        }
    }

    let line = trim_line_end(&line);
    let start = line.len() - line.trim_start().len();
    let token = line[start..]
        .split(char::is_whitespace)
        .next()
        .unwrap_or_default();
    let rest = &line[start + token.len()..];

    let remainder = rest.chars().next().map(|sep| rest[sep.len_utf8()..].to_owned());
    Ok((token.to_owned(), remainder))
}

/// The keyword is the first whitespace-delimited token of the input. The
/// plaintext is whatever follows it on the same line after one separator,
/// or the whole next line when the token ends its line.
pub fn run_session<R: BufRead, W: Write>(mut input: R, mut output: W) -> Result<SessionTranscript> {
    write!(output, "{KEYWORD_PROMPT}")?;
    output.flush()?;
    let (keyword, same_line) = read_keyword(&mut input)?;

    let cipher = DualCipher::new(&keyword);
    debug!(keyword = %cipher.keyword(), grid = ?cipher.grid_rows(), "keyword set");

    write!(output, "{PLAINTEXT_PROMPT}")?;
    output.flush()?;
    let plaintext = match same_line {
        Some(rest) => rest,
        None => {
            let mut line = String::new();
            input.read_line(&mut line)?;
            trim_line_end(&line).to_owned()
        }
    };

    let ciphertext = cipher.encrypt(&plaintext)?;
    writeln!(output, "\nCiphertext: {ciphertext}")?;

    let recovered = cipher.decrypt(&ciphertext)?;
    writeln!(output, "Recovered/ Decrypted text: {recovered}")?;

    Ok(SessionTranscript {
        keyword,
        ciphertext,
        recovered,
    })
}
