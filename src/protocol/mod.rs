//! Socket messages exchanged with the study server.
//!
//! Every frame is a JSON object `{"t": type, "d": data}`.
//!
//! - [`Inbound`] — Push messages from the server
//! - [`Outbound`] — Messages sent to the server
mod inbound;
mod outbound;

pub use inbound::*;
pub use outbound::*;
