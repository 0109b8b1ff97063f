//! Study documents as delivered by the server.
//!
//! - [`Chapter`] — Metadata of the analysable unit
//! - [`Viewer`] — Who is looking, and what they may do
//! - [`Study`] — A chapter together with its move tree
mod chapter;
mod study;
mod viewer;

pub use chapter::*;
pub use study::*;
pub use viewer::*;
