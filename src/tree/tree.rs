use super::*;
use crate::*;

/// A recorded game: the root position and every line played from it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Tree {
    root: Node,
}

impl From<Node> for Tree {
    fn from(root: Node) -> Self {
        Self { root }
    }
}

impl Tree {
    /// Tree from a loaded document. Every move below the root needs an id
    /// that no sibling shares, otherwise paths could not address it.
    /// The error names the path of the offending move, or of its parent
    /// when the id is missing.
    pub fn checked(root: Node) -> Result<Self, Error> {
        Self::check_root(&root)?;
        Ok(Self::from(root))
    }
    /// Same check as [`Tree::checked`], without taking the root.
    pub fn check_root(root: &Node) -> Result<(), Error> {
        Self::check(&Path::root(), root)
    }
    fn check(path: &Path, node: &Node) -> Result<(), Error> {
        let mut seen = std::collections::HashSet::new();
        for child in node.children.iter() {
            let id = child
                .id
                .ok_or_else(|| Error::InvalidPath(path.to_string()))?;
            let path = path.child(id);
            if !seen.insert(id) {
                return Err(Error::InvalidPath(path.to_string()));
            }
            Self::check(&path, child)?;
        }
        Ok(())
    }
    pub fn root(&self) -> &Node {
        &self.root
    }
    /// Node addressed by `path`.
    pub fn node(&self, path: &Path) -> Result<&Node, Error> {
        path.ids()
            .iter()
            .try_fold(&self.root, |node, id| node.child(*id))
            .ok_or_else(|| Error::InvalidPath(path.to_string()))
    }
    /// Every node from the root down to the one addressed by `path`.
    pub fn nodes(&self, path: &Path) -> Result<Vec<&Node>, Error> {
        let mut nodes = vec![&self.root];
        for id in path.ids() {
            match nodes.last().and_then(|n| n.child(*id)) {
                Some(child) => nodes.push(child),
                None => return Err(Error::InvalidPath(path.to_string())),
            }
        }
        Ok(nodes)
    }
    pub fn exists(&self, path: &Path) -> bool {
        self.node(path).is_ok()
    }
    /// Root followed by the chain of first children.
    pub fn mainline(&self) -> Vec<&Node> {
        std::iter::successors(Some(&self.root), |n| n.first()).collect()
    }
    /// Path of the deepest addressable mainline node.
    pub fn mainline_path(&self) -> Path {
        self.mainline()
            .into_iter()
            .skip(1)
            .map_while(|n| n.id)
            .collect()
    }
    /// True iff every step of `path` takes the first child.
    pub fn is_mainline(&self, path: &Path) -> bool {
        path.ids()
            .iter()
            .try_fold(&self.root, |node, id| node.first().filter(|c| c.id == Some(*id)))
            .is_some()
    }
    /// Ply of the node at `path` when it lies on the mainline.
    /// `None` inside a variation or off the tree.
    pub fn mainline_ply(&self, path: &Path) -> Option<Ply> {
        self.is_mainline(path)
            .then(|| self.node(path).ok())
            .flatten()
            .map(|n| n.ply)
    }
    /// Ply the chart's first point is counted from.
    /// A display-ply override of zero counts as no override.
    pub fn offset(&self) -> Ply {
        self.root
            .display_ply
            .filter(|p| *p != 0)
            .unwrap_or(self.root.ply)
    }
    /// Attaches server evaluations to the mainline moves, in order.
    /// Returns how many nodes received one.
    pub fn merge(&mut self, evals: &[Option<Eval>]) -> usize {
        let path = self.mainline_path();
        let mut merged = 0;
        let mut node = &mut self.root;
        for (id, eval) in path.ids().iter().zip(evals.iter()) {
            match node.child_mut(*id) {
                Some(child) => node = child,
                None => break,
            }
            if let Some(eval) = eval {
                node.eval = Some(*eval);
                merged += 1;
            }
        }
        log::debug!("[tree] merged {} evaluations into the mainline", merged);
        merged
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(s: &str) -> Id {
        Id::try_from(s).unwrap()
    }
    fn path(s: &str) -> Path {
        Path::try_from(s).unwrap()
    }

    /// 1. aa 2. bb 3. cc, with a variation dd after aa and ee after dd.
    fn sample() -> Tree {
        Tree::from(
            Node::root(0).with(
                Node::new(id("aa"), 1, "32-28")
                    .with(Node::new(id("bb"), 2, "19-23").with(Node::new(id("cc"), 3, "28x19")))
                    .with(Node::new(id("dd"), 2, "18-23").with(Node::new(id("ee"), 3, "37-32"))),
            ),
        )
    }

    #[test]
    fn checked_accepts_well_formed_tree() {
        let tree = Tree::checked(sample().root().clone()).unwrap();
        assert_eq!(tree, sample());
    }

    #[test]
    fn checked_rejects_missing_id() {
        let mut second = Node::new(id("bb"), 2, "19-23");
        second.id = None;
        let root = Node::root(0).with(Node::new(id("aa"), 1, "32-28").with(second));
        assert_eq!(
            Tree::checked(root),
            Err(Error::InvalidPath("aa".into()))
        );
    }

    #[test]
    fn checked_rejects_duplicate_siblings() {
        let root = Node::root(0).with(
            Node::new(id("aa"), 1, "32-28")
                .with(Node::new(id("bb"), 2, "19-23"))
                .with(Node::new(id("bb"), 2, "18-23")),
        );
        assert_eq!(
            Tree::checked(root),
            Err(Error::InvalidPath("aabb".into()))
        );
    }

    #[test]
    fn mainline_path_stops_at_missing_id() {
        let mut second = Node::new(id("bb"), 2, "19-23").with(Node::new(id("cc"), 3, "28x19"));
        second.id = None;
        let tree = Tree::from(Node::root(0).with(Node::new(id("aa"), 1, "32-28").with(second)));
        let path = tree.mainline_path();
        assert_eq!(path, Path::try_from("aa").unwrap());
        assert!(tree.exists(&path));
    }

    #[test]
    fn lookup_by_path() {
        let tree = sample();
        assert_eq!(tree.node(&Path::root()).unwrap().ply, 0);
        assert_eq!(tree.node(&path("aadd")).unwrap().san, "18-23");
        assert_eq!(
            tree.node(&path("aazz")),
            Err(Error::InvalidPath("aazz".into()))
        );
    }

    #[test]
    fn nodes_along_path() {
        let tree = sample();
        let sans = tree
            .nodes(&path("aaddee"))
            .unwrap()
            .iter()
            .map(|n| n.san.as_str())
            .collect::<Vec<_>>();
        assert_eq!(sans, vec!["", "32-28", "18-23", "37-32"]);
        assert!(tree.nodes(&path("ee")).is_err());
    }

    #[test]
    fn mainline_follows_first_children() {
        let tree = sample();
        assert_eq!(tree.mainline().len(), 4);
        assert_eq!(tree.mainline_path(), path("aabbcc"));
    }

    #[test]
    fn mainline_membership() {
        let tree = sample();
        assert!(tree.is_mainline(&Path::root()));
        assert!(tree.is_mainline(&path("aabb")));
        assert!(!tree.is_mainline(&path("aadd")));
        assert!(!tree.is_mainline(&path("aaddee")));
        assert_eq!(tree.mainline_ply(&path("aabbcc")), Some(3));
        assert_eq!(tree.mainline_ply(&path("aadd")), None);
        assert_eq!(tree.mainline_ply(&path("aabbzz")), None);
    }

    #[test]
    fn offset_prefers_nonzero_display_ply() {
        let mut root = Node::root(1);
        assert_eq!(Tree::from(root.clone()).offset(), 1);
        root.display_ply = Some(0);
        assert_eq!(Tree::from(root.clone()).offset(), 1);
        root.display_ply = Some(7);
        assert_eq!(Tree::from(root).offset(), 7);
    }

    #[test]
    fn merge_mainline_evals() {
        let mut tree = sample();
        let merged = tree.merge(&[Some(Eval::cp(20)), None, Some(Eval::win(4)), Some(Eval::cp(1))]);
        assert_eq!(merged, 2);
        assert_eq!(tree.node(&path("aa")).unwrap().eval, Some(Eval::cp(20)));
        assert_eq!(tree.node(&path("aabb")).unwrap().eval, None);
        assert_eq!(tree.node(&path("aabbcc")).unwrap().eval, Some(Eval::win(4)));
        assert_eq!(tree.node(&path("aadd")).unwrap().eval, None);
    }
}
