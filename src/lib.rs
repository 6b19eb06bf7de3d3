pub mod command;
pub mod counts;
pub mod dispatch;
pub mod error;
pub mod output;
pub mod repl;
pub mod resources;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
