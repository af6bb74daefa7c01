//! Copy a file, or a directory tree with `-r`/`--recursive`.

use crate::errors::ShellError;
use crate::flags::{self, FlagSet};
use crate::session::Session;
use crate::undo::CompensatingAction;
use crate::{fs, resolve};
use std::io::Write;
use tracing::error;

pub fn cp<W: Write>(
    session: &mut Session,
    flags: &FlagSet,
    paths: &[String],
    output: &mut W,
) -> crate::Result<()> {
    flags::validate(flags, &["r", "recursive"])?;
    if paths.len() != 2 {
        return Err(ShellError::argument_count(
            "cp takes a source and a destination",
        ));
    }

    let source = resolve::normalize(session.cwd(), &paths[0])?;
    let name = resolve::basename(&paths[0]);
    let target = resolve::resolve_destination(session.cwd(), &name, &paths[1])?;

    let result = if flags::recursive(flags) {
        resolve::require_directory(&source)?;
        if target.starts_with(&source) {
            return Err(ShellError::MoveIntoItself(source));
        }
        fs::copy_tree(&source, &target)
    } else {
        resolve::require_file(&source)?;
        fs::copy_file(&source, &target)
    };

    match result {
        Ok(()) => {
            session.undo.push(CompensatingAction::Copy {
                source,
                destination: target,
            });
            Ok(())
        }
        // Nothing (complete) was copied, so there is nothing to undo.
        Err(err) if err.is_permission_denied() => {
            writeln!(output, "permission denied: {}", paths[0])
                .expect("unable to write shell output");
            error!("cp {}: permission denied", paths[0]);
            Ok(())
        }
        Err(err) => Err(err),
    }
}
