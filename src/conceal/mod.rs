//! Progressive reveal of a shared chapter.
//!
//! A chapter owner may set a ply up to which the mainline is public. Moves
//! beyond it stay hidden from other viewers until the viewer walks through
//! them, while the owner sees them blurred.
//!
//! - [`Conceal`] — Ownership and reveal boundary of the active chapter
//! - [`Visibility`] — Outcome of a single query
//! - [`Moves`] — Every node of the tree with its visibility, in display order
mod conceal;
mod moves;
mod visibility;

pub use conceal::*;
pub use moves::*;
pub use visibility::*;
