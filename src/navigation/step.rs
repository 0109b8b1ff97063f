/// A single navigation command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Step {
    First,
    Prev,
    Next,
    Last,
}

impl Step {
    /// Only single-ply steps may be held down to repeat.
    pub fn repeats(&self) -> bool {
        matches!(self, Self::Prev | Self::Next)
    }
}

impl TryFrom<&str> for Step {
    type Error = crate::Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s {
            "first" => Ok(Self::First),
            "prev" => Ok(Self::Prev),
            "next" => Ok(Self::Next),
            "last" => Ok(Self::Last),
            _ => Err(crate::Error::Protocol(format!("unknown step {}", s))),
        }
    }
}

impl std::fmt::Display for Step {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::First => write!(f, "first"),
            Self::Prev => write!(f, "prev"),
            Self::Next => write!(f, "next"),
            Self::Last => write!(f, "last"),
        }
    }
}
