// src/main.rs
use anyhow::{Context, Result};
use clap::Parser;
use std::io::BufRead;
use std::path::PathBuf;

use ccwc::dispatch::Dispatcher;
use ccwc::repl;
use ccwc::resources::ResourceDir;

#[derive(Parser, Debug)]
#[command(
    name = "ccwc",
    version = ccwc::VERSION,
    about = "Interactive wc-style byte/line/word/character counting tool"
)]
struct Args {
    /// Directory that file names in commands are resolved against
    #[arg(long, default_value = ".")]
    root: PathBuf,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let root = args
        .root
        .canonicalize()
        .with_context(|| format!("resource root '{}' is not accessible", args.root.display()))?;
    anyhow::ensure!(
        root.is_dir(),
        "resource root '{}' is not a directory",
        root.display()
    );

    let dispatcher = Dispatcher::new(ResourceDir::new(root));
    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout().lock();
    repl::run(stdin.lock().lines(), &dispatcher, &mut stdout)?;
    Ok(())
}
