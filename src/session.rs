//! Session context: working directory, trash store, undo log, history.
//!
//! All command state lives here and is threaded explicitly through every
//! command, so isolated sessions (e.g. over temp directories in tests)
//! never interfere with each other.

use crate::errors::ShellError;
use crate::history::HistoryLog;
use crate::trash::TrashStore;
use crate::undo::UndoLog;
use std::path::{Path, PathBuf};

/// Locations a session operates on.
#[derive(Debug, Clone)]
pub struct SessionPaths {
    pub cwd: PathBuf,
    pub trash_dir: PathBuf,
    pub history_file: PathBuf,
}

impl SessionPaths {
    /// Default locations: the process working directory, `~/.trash` and
    /// `~/.history`.
    pub fn from_home() -> crate::Result<Self> {
        let cwd = std::env::current_dir().map_err(|err| ShellError::io(".", err))?;
        let home = dirs::home_dir()
            .ok_or_else(|| ShellError::not_found("home directory".to_string()))?;
        Ok(Self {
            cwd,
            trash_dir: home.join(".trash"),
            history_file: home.join(".history"),
        })
    }
}

#[derive(Debug)]
pub struct Session {
    cwd: PathBuf,
    pub trash: TrashStore,
    pub undo: UndoLog,
    pub history: HistoryLog,
}

impl Session {
    /// Starts a session: recreates the trash directory empty, opens the
    /// history file for appending, begins with an empty undo log.
    pub fn start(paths: SessionPaths) -> crate::Result<Self> {
        let trash = TrashStore::open(paths.trash_dir)?;
        let history = HistoryLog::open(paths.history_file)?;
        Ok(Self {
            cwd: paths.cwd,
            trash,
            undo: UndoLog::new(),
            history,
        })
    }

    pub fn cwd(&self) -> &Path {
        &self.cwd
    }

    /// Changes the working directory. Only the `cd` command calls this.
    pub fn set_cwd(&mut self, cwd: PathBuf) {
        self.cwd = cwd;
    }

    /// Ends the session, removing the trash directory and everything in it.
    pub fn close(self) -> crate::Result<()> {
        self.trash.teardown()
    }
}
