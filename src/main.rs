use std::io::{self, BufRead, Write};
use std::path::Path;

use tracing::{error, info};
use undosh::prelude::*;

/// Interactive shell over one session: reads lines, dispatches commands,
/// reports typed errors without ever leaving the loop.
struct Shell<R: BufRead, W: Write> {
    session: Session,
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    fn new(session: Session, reader: R, writer: W) -> Self {
        Self {
            session,
            reader,
            writer,
        }
    }

    /// Runs until EOF or an empty input line.
    fn repl(&mut self) -> io::Result<()> {
        let mut line = String::new();
        loop {
            write!(self.writer, "{}$ ", prompt_path(self.session.cwd()))?;
            self.writer.flush()?;
            line.clear();
            if self.reader.read_line(&mut line)? == 0 {
                writeln!(self.writer)?;
                break;
            }
            let trimmed = line.trim();
            if trimmed.is_empty() {
                break;
            }

            info!("{trimmed}");
            if let Err(err) = self.session.history.append(trimmed) {
                error!("history append failed: {err}");
            }
            match self.execute(trimmed) {
                Ok(()) => info!("success"),
                Err(err) => {
                    writeln!(self.writer, "{}: {}", err.kind(), err)?;
                    error!("{err}");
                }
            }
        }
        Ok(())
    }

    fn execute(&mut self, line: &str) -> undosh::Result<()> {
        let (command, flags, paths) = tokenize(line)?;
        dispatch(
            &mut self.session,
            command,
            &flags,
            &paths,
            &mut self.reader,
            &mut self.writer,
        )
    }

    fn into_session(self) -> Session {
        self.session
    }
}

/// Abbreviates the home directory to `~` for the prompt.
fn prompt_path(cwd: &Path) -> String {
    let rendered = cwd.display().to_string();
    if let Some(home) = dirs::home_dir() {
        let home = home.display().to_string();
        if let Some(rest) = rendered.strip_prefix(&home) {
            return format!("~{rest}");
        }
    }
    rendered
}

fn init_logging() {
    let Some(cache_dir) = dirs::cache_dir() else {
        return;
    };
    let logfile = tracing_appender::rolling::daily(cache_dir.join("undosh/logs"), "log");
    tracing_subscriber::fmt()
        .compact()
        .with_writer(logfile)
        .init();
}

fn main() {
    init_logging();

    let session = match SessionPaths::from_home().and_then(Session::start) {
        Ok(session) => session,
        Err(err) => {
            eprintln!("{}: {}", err.kind(), err);
            std::process::exit(1);
        }
    };

    let stdin = io::stdin();
    let mut shell = Shell::new(session, stdin.lock(), io::stdout());
    if let Err(err) = shell.repl() {
        eprintln!("shell input/output failed: {err}");
    }
    if let Err(err) = shell.into_session().close() {
        eprintln!("{}: {}", err.kind(), err);
        std::process::exit(1);
    }
}
