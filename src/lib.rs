//! Interactive file-management shell with a soft-delete trash and a
//! single-step undo.
//!
//! The engine resolves user paths into validated absolute targets, enforces
//! a uniform flag/argument contract, and records one compensating action
//! per successful mutating command so the most recent copy, move, or remove
//! can be reversed. All state lives in an explicit [`session::Session`].

pub mod commands;
pub mod errors;
pub mod flags;
pub mod fs;
pub mod history;
pub mod resolve;
pub mod session;
pub mod token;
pub mod trash;
pub mod undo;

pub use errors::{Result, ShellError};
pub use flags::FlagSet;
pub use session::{Session, SessionPaths};
pub use token::{tokenize, CommandKind};
pub use undo::{CompensatingAction, UndoLog};

/// Re-export a small stable API surface for the shell binary and tests.
pub mod prelude {
    pub use crate::{
        commands::dispatch,
        errors::{Result, ShellError},
        flags::FlagSet,
        session::{Session, SessionPaths},
        token::{tokenize, CommandKind},
        undo::CompensatingAction,
    };
}
