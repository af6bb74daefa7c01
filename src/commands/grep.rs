//! Search file contents for a pattern.

use crate::errors::ShellError;
use crate::flags::{self, FlagSet};
use crate::session::Session;
use crate::{fs, resolve};
use regex::RegexBuilder;
use std::io::Write;
use std::path::{Path, PathBuf};

pub fn grep<W: Write>(
    session: &Session,
    flags: &FlagSet,
    paths: &[String],
    output: &mut W,
) -> crate::Result<()> {
    flags::validate(flags, &["r", "recursive", "i", "ignore-case"])?;
    if paths.is_empty() {
        return Err(ShellError::argument_count(
            "grep takes a pattern and at least one path",
        ));
    }

    // The first argument that names nothing on disk is the pattern.
    let (pattern, rest) = match resolve::normalize(session.cwd(), &paths[0]) {
        Err(_) => (paths[0].as_str(), &paths[1..]),
        Ok(_) => ("", paths),
    };
    if pattern.is_empty() {
        return Ok(());
    }

    let ignore_case = flags.contains("i") || flags.contains("ignore-case");
    let pattern = RegexBuilder::new(pattern)
        .case_insensitive(ignore_case)
        .build()
        .map_err(|err| ShellError::InvalidPattern(err.to_string()))?;

    let mut files: Vec<PathBuf> = Vec::new();
    for raw in rest {
        let path = resolve::normalize(session.cwd(), raw)?;
        if path.is_dir() && flags::recursive(flags) {
            collect_files(&path, &mut files)?;
        } else {
            files.push(path);
        }
    }

    for file in files {
        // Unreadable and non-UTF-8 entries are silently skipped.
        let Ok(contents) = fs::read_to_string(&file) else {
            continue;
        };
        for (number, line) in contents.lines().enumerate() {
            if pattern.is_match(line) {
                writeln!(output, "{}: {} {}", file.display(), number + 1, line)
                    .expect("unable to write shell output");
            }
        }
    }
    Ok(())
}

fn collect_files(path: &Path, files: &mut Vec<PathBuf>) -> crate::Result<()> {
    for child in fs::list_dir(path)? {
        if child.is_dir() {
            collect_files(&child, files)?;
        } else {
            files.push(child);
        }
    }
    Ok(())
}
