// src/repl.rs
//! Read-eval loop. Takes any iterator of input lines so tests never
//! need a real console.

use std::io::{self, Write};

use crate::dispatch::Dispatcher;

pub const GREETING: &str = "Aloha! Please enter your command:";
pub const REPROMPT: &str = "\nPlease enter your command:";

const EXIT_COMMAND: &str = "exit";

/// Feed lines to the dispatcher until the exit sentinel or end of
/// input. The sentinel is matched case-insensitively and is never
/// forwarded.
pub fn run<I>(lines: I, dispatcher: &Dispatcher, out: &mut impl Write) -> io::Result<()>
where
    I: IntoIterator<Item = io::Result<String>>,
{
    writeln!(out, "{GREETING}")?;
    out.flush()?;
    for line in lines {
        let line = line?;
        if line.eq_ignore_ascii_case(EXIT_COMMAND) {
            break;
        }
        dispatcher.process(&line, out)?;
        writeln!(out, "{REPROMPT}")?;
        out.flush()?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resources::ResourceDir;
    use std::fs;

    fn run_session(dir: &tempfile::TempDir, lines: &[&str]) -> String {
        let dispatcher = Dispatcher::new(ResourceDir::new(dir.path()));
        let mut out = Vec::new();
        let lines = lines.iter().map(|l| Ok((*l).to_string()));
        run(lines, &dispatcher, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn greets_then_prompts_after_each_command() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("sample.txt"), "The quick brown fox").unwrap();

        let out = run_session(&dir, &["ccwc -w sample.txt", "exit"]);
        assert_eq!(
            out,
            "Aloha! Please enter your command:\n4 sample.txt\nPlease enter your command:\n"
        );
    }

    #[test]
    fn exit_is_case_insensitive() {
        let dir = tempfile::tempdir().unwrap();

        let out = run_session(&dir, &["EXIT", "ccwc -l nope.txt"]);
        // Nothing past the greeting: the second line is never reached.
        assert_eq!(out, "Aloha! Please enter your command:\n");
    }

    #[test]
    fn end_of_input_stops_the_loop() {
        let dir = tempfile::tempdir().unwrap();

        let out = run_session(&dir, &[]);
        assert_eq!(out, "Aloha! Please enter your command:\n");
    }

    #[test]
    fn failures_keep_the_loop_alive() {
        let dir = tempfile::tempdir().unwrap();

        let out = run_session(&dir, &["bogus input here", "hi | ccwc -w", "exit"]);
        assert_eq!(
            out,
            "Aloha! Please enter your command:\n\
             Could not find a valid ccwc command. Please try again.\n\
             \nPlease enter your command:\n\
             1 \
             \nPlease enter your command:\n"
        );
    }
}
