//! Pack a directory into a gzip-compressed tarball, and unpack one.

use crate::errors::ShellError;
use crate::flags::{self, FlagSet};
use crate::resolve;
use crate::session::Session;
use flate2::{read::GzDecoder, write::GzEncoder, Compression};
use std::fs::File;
use std::path::MAIN_SEPARATOR;
use tar::Archive;

/// `tar <directory> <name>`: archives the directory's contents into
/// `<name>.tar.gz`.
pub fn pack(session: &Session, flags: &FlagSet, paths: &[String]) -> crate::Result<()> {
    flags::validate(flags, &[])?;
    if paths.len() != 2 {
        return Err(ShellError::argument_count(
            "tar takes a directory and an archive name",
        ));
    }

    let source = resolve::normalize(session.cwd(), &paths[0])?;
    resolve::require_directory(&source)?;
    let hint = format!("{}.tar.gz", paths[1].trim_end_matches(MAIN_SEPARATOR));
    let target = resolve::resolve_destination(session.cwd(), "", &hint)?;

    let file = File::create(&target).map_err(|err| ShellError::io(&target, err))?;
    let encoder = GzEncoder::new(file, Compression::default());
    let mut archive = tar::Builder::new(encoder);
    archive
        .append_dir_all(".", &source)
        .map_err(|err| ShellError::io(&source, err))?;
    let encoder = archive
        .into_inner()
        .map_err(|err| ShellError::io(&target, err))?;
    encoder
        .finish()
        .map_err(|err| ShellError::io(&target, err))?;
    Ok(())
}

/// `untar <archive>`: unpacks into a working-directory entry named after
/// the archive stem.
pub fn unpack(session: &Session, flags: &FlagSet, paths: &[String]) -> crate::Result<()> {
    flags::validate(flags, &[])?;
    if paths.len() != 1 {
        return Err(ShellError::argument_count("untar takes one archive"));
    }

    let archive_path = resolve::normalize(session.cwd(), &paths[0])?;
    resolve::require_file(&archive_path)?;
    let name = resolve::basename(&archive_path.display().to_string());
    let stem = name
        .strip_suffix(".tar.gz")
        .or_else(|| name.strip_suffix(".tar"))
        .ok_or_else(|| ShellError::NotAnArchive(archive_path.clone()))?;

    let destination = session.cwd().join(stem);
    if destination.exists() {
        return Err(ShellError::AlreadyExists(destination));
    }

    let file = File::open(&archive_path).map_err(|err| ShellError::io(&archive_path, err))?;
    if name.ends_with(".tar.gz") {
        Archive::new(GzDecoder::new(file))
            .unpack(&destination)
            .map_err(|err| ShellError::io(&archive_path, err))?;
    } else {
        Archive::new(file)
            .unpack(&destination)
            .map_err(|err| ShellError::io(&archive_path, err))?;
    }
    Ok(())
}
