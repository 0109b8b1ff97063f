//! Server analysis of a chapter's mainline and its evaluation chart.
//!
//! - [`ServerEval`] — Request bookkeeping and chart selection sync
//! - [`Request`] — Whether analysis was asked for, and whether it arrived
//! - [`Chart`] — Surface the evaluation is drawn on
//! - [`Analyst`] — Where analysis requests are sent
//! - [`Series`] — Chart data derived from the mainline
//! - [`Panel`] — What the analysis panel offers the viewer
mod analyst;
mod chart;
mod panel;
mod request;
mod series;
mod server;

pub use analyst::*;
pub use chart::*;
pub use panel::*;
pub use request::*;
pub use series::*;
pub use server::*;
