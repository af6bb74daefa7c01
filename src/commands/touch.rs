//! Create empty files.

use crate::errors::ShellError;
use crate::flags::{self, FlagSet};
use crate::resolve;
use crate::session::Session;
use crate::fs;
use std::io::Write;
use tracing::error;

pub fn touch<W: Write>(
    session: &Session,
    flags: &FlagSet,
    paths: &[String],
    output: &mut W,
) -> crate::Result<()> {
    flags::validate(flags, &[])?;
    if paths.is_empty() {
        return Err(ShellError::argument_count("touch takes at least one path"));
    }
    for raw in paths {
        match resolve::resolve_destination(session.cwd(), "", raw)
            .and_then(|target| fs::create_file(&target))
        {
            Ok(()) => {}
            Err(ShellError::AlreadyExists(_)) => {
                writeln!(output, "{raw} skipped: already exists")
                    .expect("unable to write shell output");
                error!("touch {raw} skipped: already exists");
            }
            Err(ShellError::PathNotFound(missing)) => {
                writeln!(output, "{raw} skipped: no such path: {missing}")
                    .expect("unable to write shell output");
                error!("touch {raw} skipped: no such path: {missing}");
            }
            Err(err) if err.is_permission_denied() => {
                writeln!(output, "permission denied: {raw}")
                    .expect("unable to write shell output");
                error!("touch {raw} skipped: permission denied");
            }
            Err(err) => return Err(err),
        }
    }
    Ok(())
}
