//! Print previously executed command lines.

use crate::errors::ShellError;
use crate::flags::{self, FlagSet};
use crate::session::Session;
use std::io::Write;

pub fn history<W: Write>(
    session: &Session,
    flags: &FlagSet,
    paths: &[String],
    output: &mut W,
) -> crate::Result<()> {
    flags::validate(flags, &[])?;
    if paths.len() > 1 {
        return Err(ShellError::argument_count(
            "history takes an optional entry count",
        ));
    }

    let count = match paths.first() {
        Some(raw) => {
            let count: usize = raw.parse().map_err(|_| {
                ShellError::argument_count("history takes an optional entry count")
            })?;
            if count == 0 {
                return Ok(());
            }
            Some(count)
        }
        None => None,
    };

    for line in session.history.tail(count)? {
        writeln!(output, "{line}").expect("unable to write shell output");
    }
    Ok(())
}
