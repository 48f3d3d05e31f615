/* ************************************************************************ **
** This file is part of lina, and is licensed under EITHER the MIT license  **
** or the Apache 2.0 license, at your option.                               **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

use crate::FailResult;

use log::{Level, LevelFilter};
use std::fmt;
use std::path::{Path, PathBuf};

/// Crates whose log output is governed by `-v`.
const OWN_TARGETS: &[&str] = &["lina_tasks", "lina_linalg", "lina_geometry"];

/// Builder-style setup for logging.
///
/// Everything goes to stderr; stdout is reserved for results.
#[derive(Debug, Clone, Default)]
pub struct GlobalLogger {
    path: Option<PathBuf>,
    verbosity: Verbosity,
}

impl GlobalLogger {
    /// Also write the log to a file.
    ///
    /// NOTE: Relative paths will not be resolved until apply() is called.
    pub fn path<P: AsRef<Path>>(&mut self, path: P) -> &mut Self
    { self.path = Some(path.as_ref().to_owned()); self }

    /// Any integer will be accepted; the level will be truncated
    /// to the most extreme value supported.
    pub fn verbosity(&mut self, level: i32) -> &mut Self
    {
        self.verbosity = match level {
            std::i32::MIN..=0 => Verbosity::Default,
            1 => Verbosity::Loud,
            _ => Verbosity::Louder,
        };
        self
    }

    /// Install the logger.  Only the first call in a process has any effect;
    /// later calls return an error from `log`.
    ///
    /// If the log file can't be opened, logging to stderr is still set up
    /// before the error is returned.
    pub fn apply(&mut self) -> FailResult<()>
    {
        use std::time::Instant;

        let start = Instant::now();
        let own_level = self.verbosity.own_level();

        let mut fern = fern::Dispatch::new();
        fern = fern.format(move |out, message, record| {
                let t = start.elapsed();
                out.finish(format_args!("[{:>4}.{:03}s][{}][{}] {}",
                    t.as_secs(),
                    t.subsec_nanos() / 1_000_000,
                    record.target(),
                    ColorizedLevel(record.level()),
                    message))
            })
            .level(LevelFilter::Warn);

        for &target in OWN_TARGETS {
            fern = fern.level_for(target, own_level);
        }
        fern = fern.chain(std::io::stderr());

        // stderr is installed even if the file can't be opened, so that
        // the error about the file has somewhere to go
        let mut file_error = None;
        if let Some(path) = self.path.as_ref() {
            match fern::log_file(path) {
                Ok(file) => fern = fern.chain(file),
                Err(e) => file_error = Some(format_err!("could not open log file '{}': {}", path.display(), e)),
            }
        }

        fern.apply()?;
        match file_error {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord)]
enum Verbosity { Default, Loud, Louder }

impl Default for Verbosity {
    fn default() -> Self { Verbosity::Default }
}

impl Verbosity {
    fn own_level(self) -> LevelFilter {
        match self {
            Verbosity::Default => LevelFilter::Info,
            Verbosity::Loud => LevelFilter::Debug,
            Verbosity::Louder => LevelFilter::Trace,
        }
    }
}

#[derive(Debug, Copy, Clone)]
pub struct ColorizedLevel(pub Level);
impl fmt::Display for ColorizedLevel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let style = match self.0 {
            Level::Error => ansi_term::Colour::Red.bold(),
            Level::Warn  => ansi_term::Colour::Red.normal(),
            Level::Info  => ansi_term::Colour::Cyan.bold(),
            Level::Debug => ansi_term::Colour::Yellow.dimmed(),
            Level::Trace => ansi_term::Colour::Cyan.normal(),
        };
        write!(f, "{}", style.paint(self.0.to_string()))
    }
}
