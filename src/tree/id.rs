use crate::*;

/// Identifier of a single move, unique among its siblings.
///
/// Two printable ASCII bytes. A [`Path`](super::Path) is the concatenation
/// of the ids met on the way down from the root, so the fixed width is what
/// lets a path be split back into ids.
#[derive(Debug, Clone, Copy, Eq, Hash, PartialEq, Ord, PartialOrd)]
pub struct Id([u8; 2]);

impl Id {
    pub const WIDTH: usize = 2;
    pub fn as_str(&self) -> &str {
        // both bytes are ascii graphic by construction
        std::str::from_utf8(&self.0).unwrap_or_default()
    }
}

impl Arbitrary for Id {
    fn random() -> Self {
        let byte = || b'#' + rand::random_range(0..88u8);
        Self([byte(), byte()])
    }
}

impl TryFrom<&[u8]> for Id {
    type Error = Error;
    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        match bytes {
            [a, b] if a.is_ascii_graphic() && b.is_ascii_graphic() => Ok(Self([*a, *b])),
            _ => Err(Error::InvalidPath(String::from_utf8_lossy(bytes).into_owned())),
        }
    }
}

impl TryFrom<&str> for Id {
    type Error = Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::try_from(s.as_bytes())
    }
}

impl TryFrom<String> for Id {
    type Error = Error;
    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::try_from(s.as_str())
    }
}

impl From<Id> for String {
    fn from(id: Id) -> Self {
        id.as_str().to_string()
    }
}

impl std::fmt::Display for Id {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl serde::Serialize for Id {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> serde::Deserialize<'de> for Id {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::try_from(s).map_err(serde::de::Error::custom)
    }
}
