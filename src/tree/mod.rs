//! Path-addressable move tree.
//!
//! - [`Id`] — Two-character identifier of a single move
//! - [`Path`] — Concatenated ids from the root to a node
//! - [`Node`] — One played move with its ordered continuations
//! - [`Tree`] — Owner of the root node, lookups by path
mod eval;
mod id;
mod node;
mod path;
mod tree;

pub use eval::*;
pub use id::*;
pub use node::*;
pub use path::*;
pub use tree::*;
