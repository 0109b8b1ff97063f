use super::*;
use crate::navigation::Navigator;
use crate::tree::*;

/// One rendered move.
#[derive(Debug, Clone, PartialEq)]
pub struct Line<'a> {
    pub path: Path,
    pub node: &'a Node,
    pub mainline: bool,
    pub visibility: Visibility,
}

/// Every move of the tree with its visibility, in reading order:
/// a mainline move, then the alternatives to it with their continuations,
/// then the rest of the mainline. Hidden moves are left out along with
/// everything that follows them.
#[derive(Debug, Clone, Default)]
pub struct Moves<'a>(Vec<Line<'a>>);

impl<'a> Moves<'a> {
    pub fn collect(nav: &'a Navigator, conceal: Option<&Conceal>) -> Self {
        let mut moves = Self::default();
        moves.walk(nav.path(), conceal, &Path::root(), nav.tree().root(), true);
        moves
    }
    pub fn lines(&self) -> &[Line<'a>] {
        &self.0
    }
    fn walk(
        &mut self,
        current: &Path,
        conceal: Option<&Conceal>,
        path: &Path,
        parent: &'a Node,
        mainline: bool,
    ) {
        let Some((main, alternatives)) = parent.children.split_first() else {
            return;
        };
        let Some(main_path) = main.id.map(|id| path.child(id)) else {
            return;
        };
        let shown = self.emit(current, conceal, &main_path, main, mainline);
        for alt in alternatives {
            if let Some(alt_path) = alt.id.map(|id| path.child(id)) {
                if self.emit(current, conceal, &alt_path, alt, false) {
                    self.walk(current, conceal, &alt_path, alt, false);
                }
            }
        }
        if shown {
            self.walk(current, conceal, &main_path, main, mainline);
        }
    }
    fn emit(
        &mut self,
        current: &Path,
        conceal: Option<&Conceal>,
        path: &Path,
        node: &'a Node,
        mainline: bool,
    ) -> bool {
        let visibility = visibility(conceal, current, path, node, mainline);
        if visibility.is_hidden() {
            return false;
        }
        self.0.push(Line {
            path: path.clone(),
            node,
            mainline,
            visibility,
        });
        true
    }
}

impl<'a> IntoIterator for Moves<'a> {
    type Item = Line<'a>;
    type IntoIter = std::vec::IntoIter<Line<'a>>;
    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::navigation::Start;

    fn id(s: &str) -> Id {
        Id::try_from(s).unwrap()
    }
    fn path(s: &str) -> Path {
        Path::try_from(s).unwrap()
    }

    /// 1. m1 (1. x1 2. x2) 2. m2 3. m3
    fn sample() -> Tree {
        Tree::from(
            Node::root(0)
                .with(
                    Node::new(id("m1"), 1, "32-28")
                        .with(Node::new(id("m2"), 2, "19-23").with(Node::new(id("m3"), 3, "28x19"))),
                )
                .with(Node::new(id("x1"), 1, "33-29").with(Node::new(id("x2"), 2, "17-22"))),
        )
    }

    fn paths(moves: &Moves) -> Vec<String> {
        moves.lines().iter().map(|l| l.path.to_string()).collect()
    }

    #[test]
    fn reading_order_without_boundary() {
        let nav = Navigator::new(sample(), Start::Root).unwrap();
        let moves = Moves::collect(&nav, None);
        assert_eq!(paths(&moves), vec!["m1", "x1", "x1x2", "m1m2", "m1m2m3"]);
        assert!(moves.lines().iter().all(|l| l.visibility.is_visible()));
        assert!(moves.lines()[0].mainline);
        assert!(!moves.lines()[1].mainline);
    }

    #[test]
    fn guest_sees_only_public_and_walked_moves() {
        let nav = Navigator::new(sample(), Start::Path(path("m1m2"))).unwrap();
        let conceal = Conceal::new(false, 1);
        let moves = Moves::collect(&nav, Some(&conceal));
        assert_eq!(paths(&moves), vec!["m1", "m1m2"]);
    }

    #[test]
    fn owner_sees_everything_blurred_past_boundary() {
        let nav = Navigator::new(sample(), Start::Root).unwrap();
        let conceal = Conceal::new(true, 1);
        let moves = Moves::collect(&nav, Some(&conceal));
        assert_eq!(paths(&moves), vec!["m1", "x1", "x1x2", "m1m2", "m1m2m3"]);
        let blurred = moves
            .lines()
            .iter()
            .filter(|l| l.visibility == Visibility::Concealed)
            .count();
        assert_eq!(blurred, 4);
    }
}
