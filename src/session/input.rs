use crate::evaluation::Chart;
use crate::navigation::Step;
use crate::protocol::Inbound;
use crate::study::Study;
use crate::tree::Path;
use crate::*;

/// Messages processed by a [`Session`](super::Session), strictly in arrival order.
pub enum Input {
    /// Single click on a navigation button.
    Step(Step),
    /// Button pressed and held. First and Last fire once.
    Hold(Step),
    /// Held button let go.
    Release,
    /// Scroll wheel with its vertical delta.
    Wheel(f64),
    Jump(Path),
    /// Ask the server to analyse the active chapter.
    Request,
    /// Owner reveals the mainline up to this ply.
    Reveal(Ply),
    Push(Inbound),
    Attach(Box<dyn Chart + Send>),
    Detach,
    /// Switch to another chapter.
    Load(Study),
    /// Repeat timer firing for the hold with this sequence number.
    Tick(Step, u64),
}

impl std::fmt::Display for Input {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Step(step) => write!(f, "step {}", step),
            Self::Hold(step) => write!(f, "hold {}", step),
            Self::Release => write!(f, "release"),
            Self::Wheel(delta) => write!(f, "wheel {}", delta),
            Self::Jump(path) => write!(f, "jump {}", path),
            Self::Request => write!(f, "request"),
            Self::Reveal(ply) => write!(f, "reveal {}", ply),
            Self::Push(inbound) => write!(f, "push {}", inbound),
            Self::Attach(_) => write!(f, "attach"),
            Self::Detach => write!(f, "detach"),
            Self::Load(study) => write!(f, "load {}", study.chapter.id),
            Self::Tick(step, hold) => write!(f, "tick {} #{}", step, hold),
        }
    }
}
