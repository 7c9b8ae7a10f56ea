//! Class advancement: which class may follow which, and at what XP cost.
mod error;
mod graph;

pub use error::{GraphError, TransitionError};
pub use graph::{AdvancementGraph, EdgeKind, Transition};
