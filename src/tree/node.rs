use super::*;
use crate::*;
use serde::Deserialize;
use serde::Serialize;

/// One played move and the lines continuing from it.
///
/// The first child is the mainline continuation; later children are
/// variations. The root carries no id and no move, only the starting
/// position, and its ply may be non-zero when the game starts mid-way.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Node {
    #[serde(
        default,
        deserialize_with = "blank_id",
        skip_serializing_if = "Option::is_none"
    )]
    pub id: Option<Id>,
    pub ply: Ply,
    #[serde(default)]
    pub fen: String,
    #[serde(default)]
    pub san: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Node>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_ply: Option<Ply>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub eval: Option<Eval>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub glyphs: Vec<Glyph>,
}

impl Node {
    pub fn root(ply: Ply) -> Self {
        Self {
            ply,
            ..Self::default()
        }
    }
    pub fn new(id: Id, ply: Ply, san: &str) -> Self {
        Self {
            id: Some(id),
            ply,
            san: san.to_string(),
            ..Self::default()
        }
    }
    /// Appends a continuation and returns self, for building trees inline.
    pub fn with(mut self, child: Node) -> Self {
        self.children.push(child);
        self
    }
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
    /// Mainline continuation.
    pub fn first(&self) -> Option<&Node> {
        self.children.first()
    }
    pub fn child(&self, id: Id) -> Option<&Node> {
        self.children.iter().find(|c| c.id == Some(id))
    }
    pub fn child_mut(&mut self, id: Id) -> Option<&mut Node> {
        self.children.iter_mut().find(|c| c.id == Some(id))
    }
    /// Ply shown to the user, honoring the override of mid-game starts.
    pub fn shown_ply(&self) -> Ply {
        self.display_ply.unwrap_or(self.ply)
    }
}

impl std::fmt::Display for Node {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let ply = self.shown_ply();
        match ply % 2 {
            1 => write!(f, "{}. {}", (ply + 1) / 2, self.san),
            _ => write!(f, "{}... {}", ply / 2, self.san),
        }
    }
}

fn blank_id<'de, D>(deserializer: D) -> Result<Option<Id>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    match Option::<String>::deserialize(deserializer)?.as_deref() {
        None | Some("") => Ok(None),
        Some(s) => Id::try_from(s).map(Some).map_err(serde::de::Error::custom),
    }
}
