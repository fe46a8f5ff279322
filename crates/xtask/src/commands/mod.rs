//! Command implementations for xtask
//!
//! Each command is a separate module that implements its own CLI args and execution logic.

mod inspect;
mod replay;
mod rules;

pub use inspect::Inspect;
pub use replay::Replay;
pub use rules::Rules;
