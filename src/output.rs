// src/output.rs
//! Result-line formatting. Neither form carries a trailing newline;
//! the repl's re-prompt supplies the line break.

/// Render `n` with `,` grouping every three digits.
pub fn group_thousands(n: usize) -> String {
    let digits = n.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, d) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(d);
    }
    grouped
}

/// Default report: lines, words, bytes, file name. Character count is
/// deliberately absent, matching conventional `wc` defaults.
pub fn report_all_line(lines: usize, words: usize, bytes: usize, name: &str) -> String {
    format!(
        "{} {} {} {name}",
        group_thousands(lines),
        group_thousands(words),
        group_thousands(bytes)
    )
}

/// Single-metric report: ungrouped count, file name.
pub fn single_metric_line(count: usize, name: &str) -> String {
    format!("{count} {name}")
}
