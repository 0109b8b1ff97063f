use serde::Deserialize;
use serde::Serialize;

/// Server evaluation of a position.
/// Either a centipawn score or a distance to a forced win, from white's side.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Eval {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cp: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub win: Option<i32>,
}

impl Eval {
    pub fn cp(cp: i32) -> Self {
        Self {
            cp: Some(cp),
            win: None,
        }
    }
    pub fn win(win: i32) -> Self {
        Self {
            cp: None,
            win: Some(win),
        }
    }
    /// Winning chances in [-1, 1] for charting.
    /// Forced wins saturate; centipawns go through a logistic curve.
    pub fn chances(&self) -> Option<f32> {
        match (self.win, self.cp) {
            (Some(w), _) => Some(if w > 0 { 1. } else { -1. }),
            (None, Some(cp)) => Some(2. / (1. + (-0.004 * cp as f32).exp()) - 1.),
            (None, None) => None,
        }
    }
}

/// Move annotation glyph, passed through to rendering untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Glyph {
    pub id: u16,
    pub symbol: String,
}
