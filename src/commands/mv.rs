//! Move one or more entries to a shared destination.
//!
//! The only command where a single invocation touches many unrelated
//! items: the undo payload records exactly the subset that moved, so a
//! reversal never references a move that did not happen.

use crate::errors::ShellError;
use crate::flags::{self, FlagSet};
use crate::session::Session;
use crate::undo::CompensatingAction;
use crate::{fs, resolve};
use std::io::Write;
use std::path::PathBuf;
use tracing::error;

pub fn mv<W: Write>(
    session: &mut Session,
    flags: &FlagSet,
    paths: &[String],
    output: &mut W,
) -> crate::Result<()> {
    flags::validate(flags, &[])?;
    if paths.len() < 2 {
        return Err(ShellError::argument_count(
            "mv takes one or more sources and a destination",
        ));
    }

    let (sources, destination) = paths.split_at(paths.len() - 1);
    let destination = &destination[0];
    let mut moved: Vec<(PathBuf, PathBuf)> = Vec::new();

    for raw in sources {
        match move_one(session, raw, destination) {
            Ok(pair) => moved.push(pair),
            Err(ShellError::AlreadyExists(_)) => {
                writeln!(output, "{raw} skipped: already exists")
                    .expect("unable to write shell output");
                error!("mv {raw} skipped: already exists");
            }
            Err(err) if err.is_permission_denied() => {
                writeln!(output, "permission denied: {raw}")
                    .expect("unable to write shell output");
                error!("mv {raw} skipped: permission denied");
            }
            // Structural failure mid-batch: commit what already moved to
            // the undo log before surfacing the error.
            Err(err) => {
                if !moved.is_empty() {
                    session.undo.push(CompensatingAction::Move { moved });
                }
                return Err(err);
            }
        }
    }

    if !moved.is_empty() {
        session.undo.push(CompensatingAction::Move { moved });
    }
    Ok(())
}

fn move_one(
    session: &Session,
    raw: &str,
    destination: &str,
) -> crate::Result<(PathBuf, PathBuf)> {
    let source = resolve::normalize(session.cwd(), raw)?;
    let name = resolve::basename(raw);
    let target = resolve::resolve_destination(session.cwd(), &name, destination)?;
    if source.is_dir() && target.starts_with(&source) {
        return Err(ShellError::MoveIntoItself(source));
    }
    fs::rename(&source, &target)?;
    Ok((source, target))
}
