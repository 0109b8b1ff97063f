use serde::Serialize;

/// How a single move is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Visibility {
    Visible,
    /// Blurred placeholder the owner can still interact with.
    Concealed,
    /// Nothing rendered at all.
    Hidden,
}

impl Visibility {
    pub fn is_visible(&self) -> bool {
        matches!(self, Self::Visible)
    }
    pub fn is_hidden(&self) -> bool {
        matches!(self, Self::Hidden)
    }
}
