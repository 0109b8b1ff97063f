use super::*;
use crate::tree::*;
use crate::*;

/// Where the viewer lands when a study is opened.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Start {
    #[default]
    Root,
    /// End of the mainline.
    Last,
    Path(Path),
}

/// Holds the tree and the path currently being viewed.
///
/// Every mutation of the current path goes through here. Stepping past
/// either end of the tree is a no-op reported as `false`; addressing a node
/// that does not exist is an [`Error::InvalidPath`].
#[derive(Debug, Clone)]
pub struct Navigator {
    tree: Tree,
    path: Path,
}

impl Navigator {
    pub fn new(tree: Tree, start: Start) -> Result<Self, Error> {
        let path = match start {
            Start::Root => Path::root(),
            Start::Last => tree.mainline_path(),
            Start::Path(path) => {
                tree.node(&path)?;
                path
            }
        };
        Ok(Self { tree, path })
    }
    pub fn tree(&self) -> &Tree {
        &self.tree
    }
    pub fn path(&self) -> &Path {
        &self.path
    }
    pub fn node(&self) -> &Node {
        // the current path is only ever set to a path the tree resolves
        self.tree.node(&self.path).unwrap_or(self.tree.root())
    }
    /// Mainline ply of the current node, `None` inside a variation.
    pub fn ply(&self) -> Option<Ply> {
        self.tree.mainline_ply(&self.path)
    }
    pub fn can_jump_prev(&self) -> bool {
        !self.path.is_root()
    }
    pub fn can_jump_next(&self) -> bool {
        !self.node().is_leaf()
    }
}

impl Navigator {
    pub fn step(&mut self, step: Step) -> bool {
        match step {
            Step::First => self.first(),
            Step::Prev => self.prev(),
            Step::Next => self.next(),
            Step::Last => self.last(),
        }
    }
    pub fn first(&mut self) -> bool {
        self.goto(Path::root())
    }
    pub fn last(&mut self) -> bool {
        self.goto(self.tree.mainline_path())
    }
    pub fn next(&mut self) -> bool {
        match self.node().first().and_then(|child| child.id) {
            Some(id) => self.goto(self.path.child(id)),
            None => false,
        }
    }
    pub fn prev(&mut self) -> bool {
        match self.path.parent() {
            Ok(parent) => self.goto(parent),
            Err(_) => false,
        }
    }
    /// Moves to an arbitrary node. Reports whether the path changed.
    pub fn jump(&mut self, path: Path) -> Result<bool, Error> {
        self.tree.node(&path)?;
        Ok(self.goto(path))
    }
    /// Scroll-wheel stepping: down goes forward, up goes back.
    pub fn wheel(&mut self, delta: f64) -> bool {
        if delta > 0. {
            self.next()
        } else if delta < 0. {
            self.prev()
        } else {
            false
        }
    }
    /// Attaches server evaluations to the mainline.
    pub fn merge(&mut self, evals: &[Option<Eval>]) -> usize {
        self.tree.merge(evals)
    }
    fn goto(&mut self, path: Path) -> bool {
        if path == self.path {
            false
        } else {
            log::trace!("[navigator] {} -> {}", self.path, path);
            self.path = path;
            true
        }
    }
}
