//! External command execution
//!
//! Runs the shell-level command strings derived from target configuration.
//! Execution is strictly sequential: one command in flight, the caller
//! blocks until it completes, no timeout and no cancellation.

use std::io;
use std::process::{Command, Stdio};
use std::time::Instant;

use crate::cli::output;
use crate::core::options::RunOptions;

/// The contract the orchestrator executes through.
///
/// `run` launches one shell command and reports its exit code; interpreting
/// a non-zero code as fatal is the caller's job.
pub trait CommandRunner {
    /// Run `command` to completion, returning its exit code
    fn run(&self, command: &str) -> io::Result<i32>;
}

/// Runs commands through `sh -c`
#[derive(Debug, Clone, Copy)]
pub struct ShellRunner {
    quiet: bool,
    time: bool,
}

impl ShellRunner {
    /// Create a runner honoring the invocation's `--quiet` and `--time`
    pub fn new(options: &RunOptions) -> Self {
        Self {
            quiet: options.quiet,
            time: options.time,
        }
    }
}

impl CommandRunner for ShellRunner {
    fn run(&self, command: &str) -> io::Result<i32> {
        println!("{command}");
        let start = Instant::now();

        let status = if self.quiet {
            // Output suppressed; show a liveness spinner while waiting.
            let spinner = output::create_spinner("Processing");
            let status = Command::new("sh")
                .arg("-c")
                .arg(command)
                .stdin(Stdio::null())
                .stdout(Stdio::null())
                .stderr(Stdio::null())
                .status();
            spinner.finish_and_clear();
            status?
        } else {
            Command::new("sh").arg("-c").arg(command).status()?
        };

        if self.time {
            println!("Took {:.2} seconds", start.elapsed().as_secs_f64());
        }

        // None means the command died to a signal; still a failure.
        Ok(status.code().unwrap_or(-1))
    }
}
