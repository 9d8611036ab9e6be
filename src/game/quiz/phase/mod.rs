mod answering;
mod revealed;
mod review;
mod summary;

pub use self::answering::*;
pub use self::revealed::*;
pub use self::review::*;
pub use self::summary::*;

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum PhaseKind {
    Answering,
    Revealed,
    Summary,
    Review,
}

#[derive(Debug)]
pub enum Phase {
    Answering(AnsweringState),
    Revealed(RevealedState),
    Summary,
    Review,
}

impl Phase {
    pub fn kind(&self) -> PhaseKind {
        match self {
            Phase::Answering(_) => PhaseKind::Answering,
            Phase::Revealed(_) => PhaseKind::Revealed,
            Phase::Summary => PhaseKind::Summary,
            Phase::Review => PhaseKind::Review,
        }
    }
}
