use crate::tree::*;
use crate::*;
use serde::Deserialize;

/// Server analysis progress for one chapter: evaluations of its mainline
/// moves in order, `null` where a move is not evaluated yet.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Progress {
    pub ch: ChapterId,
    #[serde(default)]
    pub evals: Vec<Option<Eval>>,
}

/// Position another member of the study moved to.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Position {
    pub ch: ChapterId,
    pub path: Path,
}

/// New reveal boundary of a chapter.
#[derive(Debug, Clone, PartialEq, serde::Serialize, Deserialize)]
pub struct Boundary {
    pub ch: ChapterId,
    pub ply: Ply,
}

/// Push messages from the server.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "t", content = "d", rename_all = "camelCase")]
pub enum Inbound {
    AnalysisProgress(Progress),
    SetPath(Position),
    Conceal(Boundary),
}

impl Inbound {
    pub fn decode(text: &str) -> Result<Self, Error> {
        serde_json::from_str(text).map_err(|e| Error::Protocol(e.to_string()))
    }
    /// Chapter the message is about.
    pub fn chapter(&self) -> &str {
        match self {
            Self::AnalysisProgress(p) => &p.ch,
            Self::SetPath(p) => &p.ch,
            Self::Conceal(b) => &b.ch,
        }
    }
}

impl std::fmt::Display for Inbound {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AnalysisProgress(p) => write!(f, "analysisProgress {} ({} evals)", p.ch, p.evals.len()),
            Self::SetPath(p) => write!(f, "setPath {} {}", p.ch, p.path),
            Self::Conceal(b) => write!(f, "conceal {} {}", b.ch, b.ply),
        }
    }
}
