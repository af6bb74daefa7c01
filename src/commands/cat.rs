//! Print file contents.

use crate::errors::ShellError;
use crate::flags::{self, FlagSet};
use crate::session::Session;
use crate::{fs, resolve};
use std::io::Write;

pub fn cat<W: Write>(
    session: &Session,
    flags: &FlagSet,
    paths: &[String],
    output: &mut W,
) -> crate::Result<()> {
    flags::validate(flags, &[])?;
    if paths.is_empty() {
        return Err(ShellError::argument_count("cat takes at least one file"));
    }
    for raw in paths {
        let path = resolve::normalize(session.cwd(), raw)?;
        resolve::require_file(&path)?;
        let contents = fs::read_to_string(&path)?;
        let trimmed = contents.trim();
        // Empty files print nothing rather than a blank line.
        if !trimmed.is_empty() {
            writeln!(output, "{trimmed}").expect("unable to write shell output");
        }
    }
    Ok(())
}
