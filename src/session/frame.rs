use crate::conceal::*;
use crate::evaluation::*;
use crate::tree::*;
use crate::*;
use serde::Serialize;

/// One move as the move list shows it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Entry {
    pub path: Path,
    pub ply: Ply,
    pub san: String,
    pub mainline: bool,
    pub visibility: Visibility,
    pub eval: Option<Eval>,
}

impl From<Line<'_>> for Entry {
    fn from(line: Line<'_>) -> Self {
        Self {
            ply: line.node.shown_ply(),
            san: line.node.san.clone(),
            eval: line.node.eval,
            path: line.path,
            mainline: line.mainline,
            visibility: line.visibility,
        }
    }
}

/// Everything the rendering layer needs to draw the study.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Frame {
    pub chapter: ChapterId,
    pub path: Path,
    pub ply: Ply,
    pub moves: Vec<Entry>,
    pub panel: Panel,
    pub request: Request,
    /// Mainline ply last handed to the chart.
    pub selection: Option<Ply>,
    /// Reveal boundary, when the chapter has one.
    pub conceal: Option<Ply>,
    pub can_jump_prev: bool,
    pub can_jump_next: bool,
}

impl Frame {
    /// Entry of the current position, absent at the root.
    pub fn current(&self) -> Option<&Entry> {
        self.moves.iter().find(|e| e.path == self.path)
    }
}
