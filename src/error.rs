use crate::Ply;
use crate::evaluation::Request;

/// Errors raised by tree addressing, analysis requests, and the wire protocol.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A path naming no node, or text that does not parse as a path.
    InvalidPath(String),
    /// Chart and tree disagree about the mainline length.
    ChartDesync { ply: Ply, index: Option<usize> },
    /// Analysis requested while a request is already out or done.
    DuplicateRequest(Request),
    /// A socket message that does not decode.
    Protocol(String),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidPath(p) => write!(f, "invalid path: {:?}", p),
            Self::ChartDesync {
                ply,
                index: Some(i),
            } => write!(f, "chart has no point {} for ply {}", i, ply),
            Self::ChartDesync { ply, index: None } => {
                write!(f, "ply {} precedes the chart", ply)
            }
            Self::DuplicateRequest(state) => write!(f, "analysis already {}", state),
            Self::Protocol(s) => write!(f, "protocol: {}", s),
        }
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
mod tests {
    use super::*;
    #[test]
    fn display_messages() {
        assert_eq!(
            Error::InvalidPath("ab".into()).to_string(),
            "invalid path: \"ab\""
        );
        assert_eq!(
            Error::ChartDesync {
                ply: 25,
                index: Some(23)
            }
            .to_string(),
            "chart has no point 23 for ply 25"
        );
        assert_eq!(
            Error::DuplicateRequest(Request::Requested).to_string(),
            "analysis already requested"
        );
    }
}
