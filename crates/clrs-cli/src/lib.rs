//! Front-end helpers for the `clrs` binary: terminal prompting, argument
//! resolution and one module per subcommand.
pub mod commands;
pub mod terminal;
pub mod util;
