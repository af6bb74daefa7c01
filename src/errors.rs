use std::{io, path::PathBuf};

/// Shell-wide error type; one variant per failure kind the engine can report.
#[derive(thiserror::Error, Debug)]
pub enum ShellError {
    /// File system I/O failure.
    #[error("I/O error while accessing {}", .0.display())]
    Io(PathBuf, #[source] io::Error),

    /// A supplied path does not name an existing filesystem entry.
    #[error("no such path: {0}")]
    PathNotFound(String),

    /// The entry exists but is not a directory.
    #[error("{} is not a directory", .0.display())]
    NotADirectory(PathBuf),

    /// The entry exists but is not a regular file.
    #[error("{} is not a file", .0.display())]
    NotAFile(PathBuf),

    /// The computed destination already exists; nothing is overwritten.
    #[error("{} already exists", .0.display())]
    AlreadyExists(PathBuf),

    /// A flag outside the command's allowed set was supplied.
    #[error("unsupported flag: {0}")]
    InvalidFlag(String),

    /// Wrong number of arguments for the command.
    #[error("{0}")]
    InvalidArgumentCount(String),

    /// The input line does not start with a known command name.
    #[error("unknown command: {0}")]
    UnknownCommand(String),

    /// The undo log is empty.
    #[error("nothing to undo")]
    NothingToUndo,

    /// Refusing to remove the working directory or one of its ancestors.
    #[error("refusing to delete {}: it contains the working directory", .0.display())]
    SelfDeletionForbidden(PathBuf),

    /// Refusing to move or copy a directory into its own subtree.
    #[error("cannot move {} into itself", .0.display())]
    MoveIntoItself(PathBuf),

    /// The file's suffix is not a supported archive format.
    #[error("{} is not an archive", .0.display())]
    NotAnArchive(PathBuf),

    /// A search pattern failed to compile.
    #[error("invalid pattern: {0}")]
    InvalidPattern(String),
}

impl ShellError {
    pub fn io(path: impl Into<PathBuf>, error: io::Error) -> Self {
        Self::Io(path.into(), error)
    }

    pub fn not_found(path: impl Into<String>) -> Self {
        Self::PathNotFound(path.into())
    }

    pub fn argument_count(message: impl Into<String>) -> Self {
        Self::InvalidArgumentCount(message.into())
    }

    /// Stable name of the variant, printed before the message at the REPL.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Io(..) => "Io",
            Self::PathNotFound(_) => "PathNotFound",
            Self::NotADirectory(_) => "NotADirectory",
            Self::NotAFile(_) => "NotAFile",
            Self::AlreadyExists(_) => "AlreadyExists",
            Self::InvalidFlag(_) => "InvalidFlag",
            Self::InvalidArgumentCount(_) => "InvalidArgumentCount",
            Self::UnknownCommand(_) => "UnknownCommand",
            Self::NothingToUndo => "NothingToUndo",
            Self::SelfDeletionForbidden(_) => "SelfDeletionForbidden",
            Self::MoveIntoItself(_) => "MoveIntoItself",
            Self::NotAnArchive(_) => "NotAnArchive",
            Self::InvalidPattern(_) => "InvalidPattern",
        }
    }

    /// True when the underlying OS error was a permission failure. Batch
    /// commands catch these per item instead of aborting the invocation.
    pub fn is_permission_denied(&self) -> bool {
        matches!(self, Self::Io(_, err) if err.kind() == io::ErrorKind::PermissionDenied)
    }
}

/// Shared result alias for the crate.
pub type Result<T> = std::result::Result<T, ShellError>;
