//! Reverse the single most recent mutating command.
//!
//! The record is popped before reversal is attempted; an undo is consumed
//! exactly once regardless of how the reversal goes.

use crate::errors::ShellError;
use crate::flags::{self, FlagSet};
use crate::session::Session;
use crate::undo::CompensatingAction;
use crate::fs;
use std::io::Write;
use std::path::PathBuf;
use tracing::error;

pub fn undo<W: Write>(
    session: &mut Session,
    flags: &FlagSet,
    paths: &[String],
    output: &mut W,
) -> crate::Result<()> {
    flags::validate(flags, &[])?;
    if !paths.is_empty() {
        return Err(ShellError::argument_count("undo takes no arguments"));
    }

    let action = session.undo.pop().ok_or(ShellError::NothingToUndo)?;
    match action {
        CompensatingAction::Copy { destination, .. } => fs::remove_entry(&destination),
        CompensatingAction::Move { moved } => restore_pairs(moved, output),
        CompensatingAction::Remove { removed } => restore_pairs(removed, output),
    }
}

/// Moves each recorded destination back to its original path. A reoccupied
/// original is skipped; a vanished destination is reported as deleted.
fn restore_pairs<W: Write>(
    pairs: Vec<(PathBuf, PathBuf)>,
    output: &mut W,
) -> crate::Result<()> {
    for (original, current) in pairs {
        if original.exists() {
            writeln!(output, "{} skipped: already exists", original.display())
                .expect("unable to write shell output");
            error!("undo {} skipped: already exists", original.display());
        } else if !current.exists() {
            writeln!(output, "{} deleted", current.display())
                .expect("unable to write shell output");
            error!("undo: {} deleted", current.display());
        } else {
            fs::rename(&current, &original)?;
        }
    }
    Ok(())
}
