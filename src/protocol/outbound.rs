use super::*;
use crate::*;
use serde::Serialize;

/// Messages sent to the server.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "t", content = "d", rename_all = "camelCase")]
pub enum Outbound {
    /// One-shot analysis of a chapter's mainline.
    RequestAnalysis(ChapterId),
    /// Owner moved the reveal boundary forward.
    Conceal(Boundary),
}

impl Outbound {
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).expect("serialize outbound message")
    }
}
