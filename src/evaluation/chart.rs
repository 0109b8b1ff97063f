use super::*;

/// Surface the evaluation series is drawn on.
///
/// Handed to [`ServerEval::attach`](super::ServerEval::attach) once it is
/// ready; selection is re-rendered on attach since updates that arrived
/// before are not replayed.
pub trait Chart {
    /// Highlights the point at `index`.
    fn select_point(&mut self, index: usize);
    /// Removes any highlight.
    fn clear_selection(&mut self);
    fn has_point(&self, index: usize) -> bool;
    /// Redraws with fresh data.
    fn refresh(&mut self, series: &Series);
}
