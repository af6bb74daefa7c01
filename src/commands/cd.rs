//! Change the session working directory.

use crate::errors::ShellError;
use crate::flags::{self, FlagSet};
use crate::resolve;
use crate::session::Session;

pub fn cd(session: &mut Session, flags: &FlagSet, paths: &[String]) -> crate::Result<()> {
    flags::validate(flags, &[])?;
    if paths.len() > 1 {
        return Err(ShellError::argument_count("cd takes at most one path"));
    }
    let raw = paths.first().map(String::as_str).unwrap_or("~");
    let path = resolve::normalize(session.cwd(), raw)?;
    resolve::require_directory(&path)?;
    session.set_cwd(path);
    Ok(())
}
