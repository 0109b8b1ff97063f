use serde::Serialize;

/// Progress of the one server analysis a chapter may get.
/// Only moves forward; a chapter switch starts over.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Request {
    #[default]
    NotRequested,
    Requested,
    Available,
}

impl std::fmt::Display for Request {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotRequested => write!(f, "not requested"),
            Self::Requested => write!(f, "requested"),
            Self::Available => write!(f, "available"),
        }
    }
}
