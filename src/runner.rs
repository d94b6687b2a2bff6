use std::io::{self, Read};
use std::process::{Command, Stdio};
use std::sync::mpsc::{self, RecvTimeoutError};
use std::thread;
use std::time::{Duration, Instant};

use thiserror::Error;
use tracing::{debug, warn};

use crate::config::Config;

const POLL_INTERVAL: Duration = Duration::from_millis(50);

#[derive(Debug, Error)]
pub enum RunnerError {
    #[error("failed to launch '{program}': {source}")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },

    #[error("I/O error while collecting console output: {0}")]
    Io(#[from] io::Error),

    #[error("command timed out after {}s", .0.as_secs())]
    Timeout(Duration),
}

/// Sends one textual command to the console tool and returns what it printed.
///
/// Implementations never fail: any execution problem yields empty output and a
/// diagnostic, so one bad query cannot abort an enumeration run.
pub trait CommandRunner: Send + Sync {
    fn run(&self, command: &str) -> String;
}

/// Runs the console as a one-shot subprocess: `<program> <args..> "<command>; exit"`.
pub struct ConsoleRunner {
    program: String,
    args: Vec<String>,
    timeout: Duration,
}

impl ConsoleRunner {
    pub fn new(program: impl Into<String>, args: Vec<String>, timeout: Duration) -> Self {
        Self { program: program.into(), args, timeout }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.console_program.clone(), config.console_args.clone(), config.timeout())
    }

    pub fn execute(&self, command: &str) -> Result<String, RunnerError> {
        let payload = format!("{command}; exit");
        let mut child = Command::new(&self.program)
            .args(&self.args)
            .arg(&payload)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|source| RunnerError::Spawn { program: self.program.clone(), source })?;

        let mut stdout =
            child.stdout.take().ok_or_else(|| io::Error::other("console stdout not captured"))?;
        // Drain concurrently so a chatty console cannot block on a full pipe. The
        // reader is detached: a background process may keep the pipe open past exit.
        let (sender, output) = mpsc::channel();
        thread::spawn(move || {
            let mut buffer = Vec::new();
            let _ = sender.send(stdout.read_to_end(&mut buffer).map(|_| buffer));
        });

        let deadline = Instant::now() + self.timeout;
        loop {
            if let Some(status) = child.try_wait()? {
                if !status.success() {
                    debug!(command, %status, "console exited unsuccessfully");
                }
                break;
            }
            if Instant::now() >= deadline {
                let _ = child.kill();
                let _ = child.wait();
                return Err(RunnerError::Timeout(self.timeout));
            }
            thread::sleep(POLL_INTERVAL);
        }

        match output.recv_timeout(deadline.saturating_duration_since(Instant::now())) {
            Ok(read) => Ok(String::from_utf8_lossy(&read?).into_owned()),
            Err(RecvTimeoutError::Timeout) => Err(RunnerError::Timeout(self.timeout)),
            Err(RecvTimeoutError::Disconnected) => {
                Err(io::Error::other("console output reader stopped").into())
            }
        }
    }
}

impl CommandRunner for ConsoleRunner {
    fn run(&self, command: &str) -> String {
        match self.execute(command) {
            Ok(output) => output,
            Err(RunnerError::Timeout(limit)) => {
                warn!(command, timeout_secs = limit.as_secs(), "Command timed out");
                String::new()
            }
            Err(err) => {
                warn!(command, "Error running command: {err}");
                String::new()
            }
        }
    }
}
