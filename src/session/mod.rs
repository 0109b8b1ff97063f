//! Single-threaded owner of all study view state.
//!
//! - [`Input`] — Everything that can change the view
//! - [`Frame`] — Snapshot published after each input
//! - [`Session`] — Actor draining the inbox one input at a time
//! - [`Handle`] — Caller side of a running session
mod frame;
mod handle;
mod input;
mod session;

pub use frame::*;
pub use handle::*;
pub use input::*;
pub use session::*;
