use super::*;
use crate::study::Viewer;
use crate::tree::Tree;
use crate::*;
use serde::Serialize;

/// What the analysis panel shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Panel {
    /// Not enough moves to be worth analysing.
    TooShort,
    /// Only contributors may request analysis.
    Forbidden,
    /// Analysis may be requested, once.
    Offer,
    /// Requested, waiting for the server.
    Pending,
    /// Analysis arrived; the chart is shown.
    Ready,
}

impl Panel {
    pub fn of(request: Request, tree: &Tree, viewer: &Viewer) -> Self {
        match request {
            Request::Available => Self::Ready,
            Request::Requested => Self::Pending,
            Request::NotRequested if tree.mainline().len() < MIN_MAINLINE_PLIES => Self::TooShort,
            Request::NotRequested if !viewer.can_contribute() => Self::Forbidden,
            Request::NotRequested => Self::Offer,
        }
    }
    pub fn can_request(&self) -> bool {
        matches!(self, Self::Offer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::*;

    fn line(moves: usize) -> Tree {
        let leaf = (1..=moves).rev().fold(None, |tail: Option<Node>, ply| {
            let id = Id::try_from(format!("{:02}", ply)).unwrap();
            let node = Node::new(id, ply, "m");
            Some(match tail {
                Some(t) => node.with(t),
                None => node,
            })
        });
        Tree::from(match leaf {
            Some(first) => Node::root(0).with(first),
            None => Node::root(0),
        })
    }

    #[test]
    fn short_mainline_cannot_be_analysed() {
        let contributor = Viewer::new(Some("a".into()), true);
        assert_eq!(
            Panel::of(Request::NotRequested, &line(3), &contributor),
            Panel::TooShort
        );
        assert_eq!(
            Panel::of(Request::NotRequested, &line(4), &contributor),
            Panel::Offer
        );
    }

    #[test]
    fn only_contributors_get_the_offer() {
        let guest = Viewer::default();
        assert_eq!(
            Panel::of(Request::NotRequested, &line(10), &guest),
            Panel::Forbidden
        );
        assert!(!Panel::Forbidden.can_request());
    }

    #[test]
    fn progress_overrides_eligibility() {
        let guest = Viewer::default();
        assert_eq!(Panel::of(Request::Requested, &line(1), &guest), Panel::Pending);
        assert_eq!(Panel::of(Request::Available, &line(1), &guest), Panel::Ready);
    }
}
