//! Directory listing, plain or detailed with `-l`.

use crate::errors::ShellError;
use crate::flags::{self, FlagSet};
use crate::session::Session;
use crate::{fs, resolve};
use chrono::{DateTime, Local};
use std::io::Write;
use std::path::Path;

pub fn ls<W: Write>(
    session: &Session,
    flags: &FlagSet,
    paths: &[String],
    output: &mut W,
) -> crate::Result<()> {
    flags::validate(flags, &["l"])?;
    let targets: Vec<String> = if paths.is_empty() {
        vec![session.cwd().display().to_string()]
    } else {
        paths.to_vec()
    };

    for raw in targets {
        let path = resolve::normalize(session.cwd(), &raw)?;
        resolve::require_directory(&path)?;
        writeln!(output, "{}:", resolve::basename(&path.display().to_string()))
            .expect("unable to write shell output");
        if flags.contains("l") {
            detailed_output(&path, output)?;
        } else {
            plain_output(&path, output)?;
        }
        writeln!(output).expect("unable to write shell output");
    }
    Ok(())
}

/// Hidden entries (dot-prefixed) are not listed.
fn visible_names(path: &Path) -> crate::Result<Vec<String>> {
    let mut names: Vec<String> = fs::list_dir(path)?
        .into_iter()
        .filter_map(|child| {
            child
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
        })
        .filter(|name| !name.starts_with('.'))
        .collect();
    names.sort();
    Ok(names)
}

fn plain_output<W: Write>(path: &Path, output: &mut W) -> crate::Result<()> {
    for name in visible_names(path)? {
        write!(output, "{name} ").expect("unable to write shell output");
    }
    writeln!(output).expect("unable to write shell output");
    Ok(())
}

fn detailed_output<W: Write>(path: &Path, output: &mut W) -> crate::Result<()> {
    for name in visible_names(path)? {
        let child = path.join(&name);
        let metadata = fs::metadata(&child)?;
        let modified: DateTime<Local> = metadata
            .modified()
            .map_err(|err| ShellError::io(&child, err))?
            .into();
        let modified = modified.format("%b %d %H:%M").to_string();
        writeln!(
            output,
            "{:15} {:7} {:12} {:10}",
            name,
            metadata.len(),
            modified,
            mode_string(&metadata)
        )
        .expect("unable to write shell output");
    }
    Ok(())
}

#[cfg(unix)]
fn mode_string(metadata: &std::fs::Metadata) -> String {
    use std::os::unix::fs::PermissionsExt;

    let mode = metadata.permissions().mode();
    let kind = if metadata.is_dir() { 'd' } else { '-' };
    let mut rendered = String::with_capacity(10);
    rendered.push(kind);
    for shift in [6, 3, 0] {
        let bits = (mode >> shift) & 0o7;
        rendered.push(if bits & 0o4 != 0 { 'r' } else { '-' });
        rendered.push(if bits & 0o2 != 0 { 'w' } else { '-' });
        rendered.push(if bits & 0o1 != 0 { 'x' } else { '-' });
    }
    rendered
}

#[cfg(not(unix))]
fn mode_string(metadata: &std::fs::Metadata) -> String {
    let kind = if metadata.is_dir() { 'd' } else { '-' };
    let write = if metadata.permissions().readonly() { '-' } else { 'w' };
    format!("{kind}r{write}-------")
}
