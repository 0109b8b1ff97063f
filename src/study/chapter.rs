use crate::*;
use serde::Deserialize;
use serde::Serialize;

/// One chapter of a study. Server analysis and the evaluation chart
/// both apply to a single chapter at a time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chapter {
    pub id: ChapterId,
    #[serde(default)]
    pub name: String,
    #[serde(default, rename = "ownerId")]
    pub owner: Option<UserId>,
    /// Last mainline ply revealed to other viewers, when concealment is on.
    #[serde(default)]
    pub conceal: Option<Ply>,
    /// Identifier of the server analysis, once one exists.
    #[serde(default)]
    pub analysis: Option<String>,
}
