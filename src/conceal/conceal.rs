use super::*;
use crate::navigation::Navigator;
use crate::study::*;
use crate::tree::*;
use crate::*;

/// Reveal boundary of the active chapter, seen from one viewer.
///
/// Only exists when the chapter has a boundary configured; without one
/// nothing is ever concealed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Conceal {
    owner: bool,
    ply: Ply,
}

impl Conceal {
    pub fn new(owner: bool, ply: Ply) -> Self {
        Self { owner, ply }
    }
    pub fn of(chapter: &Chapter, viewer: &Viewer) -> Option<Self> {
        chapter
            .conceal
            .map(|ply| Self::new(viewer.owns(chapter), ply))
    }
    pub fn owner(&self) -> bool {
        self.owner
    }
    /// Last mainline ply that is always visible.
    pub fn ply(&self) -> Ply {
        self.ply
    }
    /// Moves the boundary forward. It never moves back.
    pub fn extend(&mut self, ply: Ply) -> bool {
        if ply > self.ply {
            log::debug!("[conceal] boundary {} -> {}", self.ply, ply);
            self.ply = ply;
            true
        } else {
            false
        }
    }
    /// Rules, first match wins:
    /// mainline moves up to the boundary are visible;
    /// moves the viewer has walked through to reach `current` are visible;
    /// anything else is concealed for the owner and hidden for everyone else.
    pub fn visibility(&self, current: &Path, queried: &Path, node: &Node, mainline: bool) -> Visibility {
        if mainline && node.ply <= self.ply {
            Visibility::Visible
        } else if queried.contains(current) {
            Visibility::Visible
        } else if self.owner {
            Visibility::Concealed
        } else {
            Visibility::Hidden
        }
    }
    /// Visibility of the node at `queried`, relative to where `nav` stands.
    pub fn query(&self, nav: &Navigator, queried: &Path) -> Result<Visibility, Error> {
        let node = nav.tree().node(queried)?;
        let mainline = nav.tree().is_mainline(queried);
        Ok(self.visibility(nav.path(), queried, node, mainline))
    }
}

/// Visibility under an optional boundary. No boundary means no restriction.
pub fn visibility(
    conceal: Option<&Conceal>,
    current: &Path,
    queried: &Path,
    node: &Node,
    mainline: bool,
) -> Visibility {
    conceal
        .map(|c| c.visibility(current, queried, node, mainline))
        .unwrap_or(Visibility::Visible)
}
