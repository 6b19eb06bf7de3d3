// src/dispatch.rs
use std::io::Write;

use crate::command::{self, Source};
use crate::counts;
use crate::output;
use crate::resources::ResourceDir;

/// Runs one command line end to end: parse, resolve content, count,
/// format, write. Every rejection becomes a printed message on `out`;
/// only the write itself can fail.
pub struct Dispatcher {
    resources: ResourceDir,
}

impl Dispatcher {
    pub fn new(resources: ResourceDir) -> Self {
        Self { resources }
    }

    /// Process one raw input line, writing at most one result line or
    /// one failure message to `out`.
    ///
    /// Result lines carry no trailing newline; failure messages do.
    /// Empty resolved content produces no output at all.
    pub fn process(&self, line: &str, out: &mut impl Write) -> std::io::Result<()> {
        let invocation = match command::parse(line) {
            Ok(invocation) => invocation,
            Err(err) => return writeln!(out, "{err}"),
        };

        let (content, name) = match invocation.source {
            Source::Inline(text) => (text, String::new()),
            Source::File(name) => match self.resources.load(&name) {
                Ok(content) => (content, name),
                Err(err) => return writeln!(out, "{err}"),
            },
        };
        if content.is_empty() {
            return Ok(());
        }

        let rendered = match invocation.metric {
            Some(metric) => output::single_metric_line(metric.measure(&content), &name),
            None => output::report_all_line(
                counts::lines(&content),
                counts::words(&content),
                counts::bytes(&content),
                &name,
            ),
        };
        write!(out, "{rendered}")
    }
}
