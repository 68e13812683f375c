pub mod repl;

pub use repl::{ChatLoop, Command};
