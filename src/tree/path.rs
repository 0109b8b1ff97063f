use super::*;
use crate::*;

/// Address of a node: the ids between the root and the node, in order.
///
/// The empty path addresses the root. Equality and ordering are defined on
/// the id sequence alone; whether a node actually lives at a path is a
/// question for [`Tree`](super::Tree).
///
/// # Encoding
///
/// Displayed, parsed, and serialized as the concatenation of its ids,
/// so a path three moves deep is a six-character string.
#[derive(Debug, Default, Clone, Eq, Hash, PartialEq, Ord, PartialOrd)]
pub struct Path(Vec<Id>);

impl Path {
    pub fn root() -> Self {
        Self::default()
    }
    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }
    /// Number of moves between the root and the addressed node.
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn ids(&self) -> &[Id] {
        &self.0
    }
    pub fn last(&self) -> Option<Id> {
        self.0.last().copied()
    }
    /// True iff `self` is a prefix of `other`, or equal to it.
    pub fn contains(&self, other: &Path) -> bool {
        other.0.starts_with(&self.0)
    }
    /// Path of the parent node. The root has none.
    pub fn parent(&self) -> Result<Path, Error> {
        match self.0.split_last() {
            Some((_, init)) => Ok(Self(init.to_vec())),
            None => Err(Error::InvalidPath(self.to_string())),
        }
    }
    pub fn child(&self, id: Id) -> Path {
        let mut ids = self.0.clone();
        ids.push(id);
        Self(ids)
    }
}

impl Arbitrary for Path {
    fn random() -> Self {
        (0..rand::random_range(0..16)).map(|_| Id::random()).collect()
    }
}

impl From<Vec<Id>> for Path {
    fn from(ids: Vec<Id>) -> Self {
        Self(ids)
    }
}

impl From<Path> for Vec<Id> {
    fn from(path: Path) -> Self {
        path.0
    }
}

impl FromIterator<Id> for Path {
    fn from_iter<T>(iter: T) -> Self
    where
        T: IntoIterator<Item = Id>,
    {
        Self(iter.into_iter().collect())
    }
}

impl TryFrom<&str> for Path {
    type Error = Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        if s.len() % Id::WIDTH != 0 {
            return Err(Error::InvalidPath(s.to_string()));
        }
        s.as_bytes()
            .chunks(Id::WIDTH)
            .map(Id::try_from)
            .collect::<Result<Vec<_>, _>>()
            .map(Self::from)
            .map_err(|_| Error::InvalidPath(s.to_string()))
    }
}

impl std::fmt::Display for Path {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.iter().try_for_each(|id| write!(f, "{}", id))
    }
}

impl serde::Serialize for Path {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> serde::Deserialize<'de> for Path {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::try_from(s.as_str()).map_err(serde::de::Error::custom)
    }
}
