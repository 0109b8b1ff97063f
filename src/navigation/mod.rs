//! Stepping through the move tree.
//!
//! - [`Navigator`] — Sole owner of the current path
//! - [`Step`] — First, previous, next, last
//! - [`Cadence`] — Shrinking delays of press-and-hold stepping
//! - [`Repeat`] — Cancellable timer task driving a held step
mod cadence;
mod navigator;
mod repeat;
mod step;

pub use cadence::*;
pub use navigator::*;
pub use repeat::*;
pub use step::*;
