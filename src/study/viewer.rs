use super::*;
use crate::*;

/// The person looking at the study.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Viewer {
    id: Option<UserId>,
    can_contribute: bool,
}

impl Viewer {
    pub fn new(id: Option<UserId>, can_contribute: bool) -> Self {
        Self { id, can_contribute }
    }
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }
    /// Contributors may request server analysis.
    pub fn can_contribute(&self) -> bool {
        self.can_contribute
    }
    pub fn owns(&self, chapter: &Chapter) -> bool {
        self.id.is_some() && self.id == chapter.owner
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    #[test]
    fn anonymous_viewer_owns_nothing() {
        let chapter = Chapter {
            id: "ch".into(),
            name: String::new(),
            owner: None,
            conceal: None,
            analysis: None,
        };
        assert!(!Viewer::default().owns(&chapter));
        assert!(!Viewer::new(Some("bob".into()), true).owns(&chapter));
    }
}
