//! Interactive terminal front end for a study.
//!
//! - [`Args`] — Command-line arguments of the `study` binary
//! - [`Command`] — Grammar of the interactive prompt
//! - [`Terminal`] — Chart drawn as log lines
//! - [`CLI`] — Prompt loop feeding a [`Session`](crate::session::Session)
mod args;
mod cli;
mod command;
mod terminal;

pub use args::*;
pub use cli::*;
pub use command::*;
pub use terminal::*;
