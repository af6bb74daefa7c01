//! Soft delete: copy the entry into the trash store, then delete the
//! original. Copy-first means a failed deletion never loses data.

use crate::errors::ShellError;
use crate::flags::{self, FlagSet};
use crate::session::Session;
use crate::undo::CompensatingAction;
use crate::{fs, resolve};
use std::io::{BufRead, Write};
use std::path::PathBuf;
use tracing::error;

pub fn rm<R: BufRead, W: Write>(
    session: &mut Session,
    flags: &FlagSet,
    paths: &[String],
    input: &mut R,
    output: &mut W,
) -> crate::Result<()> {
    flags::validate(flags, &["r", "recursive"])?;
    if paths.is_empty() {
        return Err(ShellError::argument_count("rm takes at least one path"));
    }

    let recursive = flags::recursive(flags);
    let mut removed: Vec<(PathBuf, PathBuf)> = Vec::new();

    for raw in paths {
        match remove_one(session, raw, recursive, input, output) {
            Ok(Some(pair)) => removed.push(pair),
            // Confirmation declined; the entry stays where it is.
            Ok(None) => {}
            Err(err) if err.is_permission_denied() => {
                writeln!(output, "permission denied: {raw}")
                    .expect("unable to write shell output");
                error!("rm {raw} skipped: permission denied");
            }
            Err(err) => {
                if !removed.is_empty() {
                    session.undo.push(CompensatingAction::Remove { removed });
                }
                return Err(err);
            }
        }
    }

    if !removed.is_empty() {
        session.undo.push(CompensatingAction::Remove { removed });
    }
    Ok(())
}

fn remove_one<R: BufRead, W: Write>(
    session: &Session,
    raw: &str,
    recursive: bool,
    input: &mut R,
    output: &mut W,
) -> crate::Result<Option<(PathBuf, PathBuf)>> {
    let source = resolve::normalize(session.cwd(), raw)?;
    let name = resolve::basename(raw);

    if recursive {
        resolve::require_directory(&source)?;
        if session.cwd().starts_with(&source) {
            return Err(ShellError::SelfDeletionForbidden(source));
        }
        if session.trash.root().starts_with(&source) {
            return Err(ShellError::MoveIntoItself(source));
        }
        if !confirm(&source.display().to_string(), input, output)? {
            return Ok(None);
        }
        session.trash.evict_if_present(&name)?;
        let trashed = session.trash.accept(&source, &name)?;
        fs::remove_dir_all(&source)?;
        Ok(Some((source, trashed)))
    } else {
        resolve::require_file(&source)?;
        session.trash.evict_if_present(&name)?;
        let trashed = session.trash.accept(&source, &name)?;
        fs::remove_file(&source)?;
        Ok(Some((source, trashed)))
    }
}

fn confirm<R: BufRead, W: Write>(
    subject: &str,
    input: &mut R,
    output: &mut W,
) -> crate::Result<bool> {
    write!(output, "Delete {subject}? [y/n] ").expect("unable to write shell output");
    output.flush().expect("unable to write shell output");
    let mut answer = String::new();
    input
        .read_line(&mut answer)
        .map_err(|err| ShellError::io(subject, err))?;
    Ok(answer.trim().eq_ignore_ascii_case("y"))
}
