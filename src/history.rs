//! Line-oriented command history, appended to a file opened once per session.

use crate::errors::ShellError;
use crate::fs;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Debug)]
pub struct HistoryLog {
    path: PathBuf,
    file: File,
}

impl HistoryLog {
    /// Opens (creating if necessary) the history file in append mode.
    pub fn open(path: PathBuf) -> crate::Result<Self> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(|err| ShellError::io(&path, err))?;
        Ok(Self { path, file })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Appends one accepted input line.
    pub fn append(&mut self, line: &str) -> crate::Result<()> {
        writeln!(self.file, "{line}").map_err(|err| ShellError::io(&self.path, err))
    }

    /// Returns the last `count` lines, or every line when `count` is absent.
    pub fn tail(&self, count: Option<usize>) -> crate::Result<Vec<String>> {
        let contents = fs::read_to_string(&self.path)?;
        let lines: Vec<String> = contents.lines().map(str::to_string).collect();
        let start = match count {
            Some(count) => lines.len().saturating_sub(count),
            None => 0,
        };
        Ok(lines[start..].to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn appends_and_tails_lines() {
        let dir = tempfile::tempdir().unwrap();
        let mut history = HistoryLog::open(dir.path().join(".history")).unwrap();
        history.append("ls").unwrap();
        history.append("cd /tmp").unwrap();
        history.append("cat a.txt").unwrap();

        assert_eq!(
            history.tail(None).unwrap(),
            vec!["ls", "cd /tmp", "cat a.txt"]
        );
        assert_eq!(
            history.tail(Some(2)).unwrap(),
            vec!["cd /tmp", "cat a.txt"]
        );
        assert_eq!(history.tail(Some(10)).unwrap().len(), 3);
    }

    #[test]
    fn reopening_keeps_prior_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(".history");
        {
            let mut history = HistoryLog::open(path.clone()).unwrap();
            history.append("first").unwrap();
        }
        let mut history = HistoryLog::open(path).unwrap();
        history.append("second").unwrap();
        assert_eq!(history.tail(None).unwrap(), vec!["first", "second"]);
    }
}
