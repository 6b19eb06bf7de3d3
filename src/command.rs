// src/command.rs
use std::str::FromStr;

use crate::counts;
use crate::error::{CcwcError, Result};

/// Fixed token that marks a line as a tool invocation.
pub const CMD_PREFIX: &str = "ccwc";

/// Metric selected by a single-letter flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Metric {
    Bytes,
    Lines,
    Words,
    Chars,
}

impl Metric {
    pub fn measure(self, content: &str) -> usize {
        match self {
            Self::Bytes => counts::bytes(content),
            Self::Lines => counts::lines(content),
            Self::Words => counts::words(content),
            Self::Chars => counts::chars(content),
        }
    }
}

impl FromStr for Metric {
    type Err = CcwcError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "-c" => Ok(Self::Bytes),
            "-l" => Ok(Self::Lines),
            "-w" => Ok(Self::Words),
            "-m" => Ok(Self::Chars),
            _ => Err(CcwcError::UnsupportedFlag),
        }
    }
}

/// Where the measured text comes from. Exactly one source per
/// invocation: a file name to resolve, or literal text piped in front
/// of the command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    File(String),
    Inline(String),
}

/// One parsed command line. `metric: None` means report-all
/// (lines, words, bytes).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub metric: Option<Metric>,
    pub source: Source,
}

/// Parse one raw input line into an [`Invocation`].
///
/// The line must have more than one space-separated token and contain
/// the `ccwc` sentinel somewhere. If the sentinel is the first token
/// the line is a file invocation; otherwise the line is split at its
/// last `|` into literal content and a sub-command.
pub fn parse(line: &str) -> Result<Invocation> {
    let mut tokens: Vec<&str> = line.split(' ').collect();
    while tokens.last().is_some_and(|t| t.is_empty()) {
        tokens.pop();
    }
    if tokens.len() <= 1 || !tokens.contains(&CMD_PREFIX) {
        return Err(CcwcError::InvalidCommand);
    }

    if tokens[0] == CMD_PREFIX {
        return match tokens.as_slice() {
            [_, file] => Ok(Invocation {
                metric: None,
                source: Source::File((*file).to_string()),
            }),
            [_, flag, file] => Ok(Invocation {
                metric: Some(flag.parse()?),
                source: Source::File((*file).to_string()),
            }),
            _ => Err(CcwcError::MalformedCommand),
        };
    }

    // Piped form: everything before the last pipe is the content,
    // everything after it is the sub-command.
    let Some(pipe) = line.rfind('|') else {
        return Err(CcwcError::InvalidCommand);
    };
    let content = line[..pipe].trim();
    let sub: Vec<&str> = line[pipe + 1..].trim().split(' ').collect();
    match sub.as_slice() {
        [_] => Ok(Invocation {
            metric: None,
            source: Source::Inline(content.to_string()),
        }),
        [_, flag] => Ok(Invocation {
            metric: Some(flag.parse()?),
            source: Source::Inline(content.to_string()),
        }),
        _ => Err(CcwcError::MalformedCommand),
    }
}
