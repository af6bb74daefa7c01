//! Command implementations, one module per command family.
//!
//! Every command has the uniform signature `(session, flags, paths)` plus
//! the shell's reader/writer where interaction happens. Structural errors
//! (bad flags, wrong argument count, invalid paths) are returned before any
//! filesystem mutation; per-item failures inside batch loops are reported
//! and skipped.

mod archive;
mod cat;
mod cd;
mod cp;
mod grep;
mod history;
mod ls;
mod mkdir;
mod mv;
mod rm;
mod touch;
mod undo;

pub use archive::{pack, unpack};
pub use cat::cat;
pub use cd::cd;
pub use cp::cp;
pub use grep::grep;
pub use history::history;
pub use ls::ls;
pub use mkdir::mkdir;
pub use mv::mv;
pub use rm::rm;
pub use touch::touch;
pub use undo::undo;

use crate::flags::FlagSet;
use crate::session::Session;
use crate::token::CommandKind;
use std::io::{BufRead, Write};

/// Routes one tokenized line to its command implementation.
pub fn dispatch<R: BufRead, W: Write>(
    session: &mut Session,
    command: CommandKind,
    flags: &FlagSet,
    paths: &[String],
    input: &mut R,
    output: &mut W,
) -> crate::Result<()> {
    match command {
        CommandKind::Ls => ls(session, flags, paths, output),
        CommandKind::Cd => cd(session, flags, paths),
        CommandKind::Cat => cat(session, flags, paths, output),
        CommandKind::Cp => cp(session, flags, paths, output),
        CommandKind::Mv => mv(session, flags, paths, output),
        CommandKind::Rm => rm(session, flags, paths, input, output),
        CommandKind::Undo => undo(session, flags, paths, output),
        CommandKind::History => history(session, flags, paths, output),
        CommandKind::Grep => grep(session, flags, paths, output),
        CommandKind::Touch => touch(session, flags, paths, output),
        CommandKind::Mkdir => mkdir(session, flags, paths, output),
        CommandKind::Tar => pack(session, flags, paths),
        CommandKind::Untar => unpack(session, flags, paths),
    }
}
