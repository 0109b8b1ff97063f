use crate::tree::*;
use crate::*;
use serde::Serialize;

/// One chart point: a mainline move and its evaluation, if any.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Point {
    pub ply: Ply,
    pub san: String,
    pub eval: Option<Eval>,
}

/// Chart data: one point per mainline move, the root excluded,
/// so point `i` is the move at ply `offset + i + 1`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Series(Vec<Point>);

impl Series {
    pub fn mainline(tree: &Tree) -> Self {
        Self(
            tree.mainline()
                .into_iter()
                .skip(1)
                .map(|n| Point {
                    ply: n.ply,
                    san: n.san.clone(),
                    eval: n.eval,
                })
                .collect(),
        )
    }
    pub fn points(&self) -> &[Point] {
        &self.0
    }
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    /// Evaluated points as winning chances, for drawing.
    pub fn chances(&self) -> Vec<Option<f32>> {
        self.0
            .iter()
            .map(|p| p.eval.and_then(|e| e.chances()))
            .collect()
    }
}

impl From<Vec<Point>> for Series {
    fn from(points: Vec<Point>) -> Self {
        Self(points)
    }
}
