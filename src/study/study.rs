use super::*;
use crate::tree::*;
use serde::Deserialize;
use serde::Serialize;

/// A chapter and its recorded moves.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Study {
    pub chapter: Chapter,
    #[serde(rename = "tree")]
    pub root: Node,
}

impl Study {
    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        let study = serde_json::from_str::<Self>(json)?;
        Tree::check_root(&study.root)?;
        log::debug!(
            "[study] loaded chapter {} with {} mainline moves",
            study.chapter.id,
            std::iter::successors(study.root.first(), |n| n.first()).count()
        );
        Ok(study)
    }
    pub fn open(file: &std::path::Path) -> anyhow::Result<Self> {
        let json = std::fs::read_to_string(file)
            .map_err(|e| anyhow::anyhow!("read {}: {}", file.display(), e))?;
        Self::from_json(&json)
    }
    pub fn tree(&self) -> Tree {
        Tree::from(self.root.clone())
    }
}
