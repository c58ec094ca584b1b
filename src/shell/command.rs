//! External command execution.
//!
//! Running a command never fails from the caller's point of view: a missing
//! executable, an unusable working directory or a timeout all come back as a
//! [`CommandResult`] with a non-zero exit code and a message in `stderr`.

use std::io::{ErrorKind, Read};
use std::path::Path;
use std::process::{Child, Command, Stdio};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use tracing::{debug, warn};

/// Exit code reported when the executable could not be located.
pub const EXIT_NOT_FOUND: i32 = 127;

/// Exit code reported when the executable exists but could not be started.
pub const EXIT_CANNOT_EXECUTE: i32 = 126;

/// Exit code reported when a command was killed after its timeout expired.
pub const EXIT_TIMED_OUT: i32 = 124;

/// How often a child is polled while a timeout is armed.
const POLL_INTERVAL: Duration = Duration::from_millis(20);

/// Result of executing an external command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandResult {
    /// Exit code. Signal termination is reported as 1.
    pub exit_code: i32,

    /// Standard output.
    pub stdout: String,

    /// Standard error.
    pub stderr: String,

    /// Execution duration.
    pub duration: Duration,
}

impl CommandResult {
    /// Create a result from captured output.
    pub fn new(exit_code: i32, stdout: String, stderr: String, duration: Duration) -> Self {
        Self {
            exit_code,
            stdout,
            stderr,
            duration,
        }
    }

    /// Create a synthetic failure for a command that never produced output.
    pub fn failure(exit_code: i32, message: String, duration: Duration) -> Self {
        Self {
            exit_code,
            stdout: String::new(),
            stderr: message,
            duration,
        }
    }

    /// Whether the command exited with code 0.
    pub fn success(&self) -> bool {
        self.exit_code == 0
    }

    /// Standard output followed by standard error.
    pub fn combined_output(&self) -> String {
        let mut combined = String::with_capacity(self.stdout.len() + self.stderr.len());
        combined.push_str(&self.stdout);
        combined.push_str(&self.stderr);
        combined
    }
}

/// Executes external commands.
///
/// This trait is the seam between setup logic and the operating system, so
/// tests can substitute scripted results.
pub trait CommandRunner {
    /// Run `argv` (program followed by its arguments), optionally inside `cwd`.
    fn run(&self, argv: &[String], cwd: Option<&Path>) -> CommandResult;
}

impl<T: CommandRunner + ?Sized> CommandRunner for &T {
    fn run(&self, argv: &[String], cwd: Option<&Path>) -> CommandResult {
        (**self).run(argv, cwd)
    }
}

/// Runs commands as real child processes.
#[derive(Debug, Clone, Default)]
pub struct SystemRunner {
    timeout: Option<Duration>,
}

impl SystemRunner {
    /// Create a runner that waits for commands indefinitely.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a runner that kills commands running longer than `timeout`.
    pub fn with_timeout(timeout: Option<Duration>) -> Self {
        Self { timeout }
    }

    /// The configured timeout, if any.
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }
}

impl CommandRunner for SystemRunner {
    fn run(&self, argv: &[String], cwd: Option<&Path>) -> CommandResult {
        let start = Instant::now();

        let Some((program, args)) = argv.split_first() else {
            return CommandResult::failure(
                EXIT_NOT_FOUND,
                "No command given".to_string(),
                start.elapsed(),
            );
        };

        debug!("Running `{}` in {:?}", command_line(argv), cwd);

        let mut cmd = Command::new(program);
        cmd.args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());

        if let Some(dir) = cwd {
            cmd.current_dir(dir);
        }

        let mut child = match cmd.spawn() {
            Ok(child) => child,
            Err(e) => return spawn_failure(program, cwd, e, start.elapsed()),
        };

        let stdout = child.stdout.take().map(spawn_reader);
        let stderr = child.stderr.take().map(spawn_reader);

        let (exit_code, timed_out) = match self.timeout {
            Some(limit) => wait_with_timeout(&mut child, limit),
            None => (child.wait().ok().and_then(|s| s.code()).unwrap_or(1), false),
        };

        let stdout = collect_reader(stdout, timed_out);
        let mut stderr = collect_reader(stderr, timed_out);
        let duration = start.elapsed();

        if timed_out {
            let limit = self.timeout.unwrap_or_default();
            warn!(
                "`{}` exceeded its {}s timeout and was killed",
                command_line(argv),
                limit.as_secs()
            );
            if !stderr.is_empty() && !stderr.ends_with('\n') {
                stderr.push('\n');
            }
            stderr.push_str(&format!(
                "Command timed out after {}s: {}",
                limit.as_secs(),
                command_line(argv)
            ));
            return CommandResult::new(EXIT_TIMED_OUT, stdout, stderr, duration);
        }

        debug!("`{}` exited with code {}", command_line(argv), exit_code);
        CommandResult::new(exit_code, stdout, stderr, duration)
    }
}

/// Render an argv as a single display string.
pub fn command_line(argv: &[String]) -> String {
    argv.join(" ")
}

/// Convert a spawn error into a synthetic result.
fn spawn_failure(
    program: &str,
    cwd: Option<&Path>,
    err: std::io::Error,
    duration: Duration,
) -> CommandResult {
    // A missing working directory also surfaces as NotFound.
    if let Some(dir) = cwd.filter(|d| !d.is_dir()) {
        debug!("Working directory {} does not exist", dir.display());
        return CommandResult::failure(
            EXIT_CANNOT_EXECUTE,
            format!("Working directory not found: {}", dir.display()),
            duration,
        );
    }

    match err.kind() {
        ErrorKind::NotFound => {
            debug!("Executable '{}' not found", program);
            CommandResult::failure(
                EXIT_NOT_FOUND,
                format!("Command not found: {}", program),
                duration,
            )
        }
        _ => {
            debug!("Failed to start '{}': {}", program, err);
            CommandResult::failure(
                EXIT_CANNOT_EXECUTE,
                format!("Failed to start {}: {}", program, err),
                duration,
            )
        }
    }
}

/// Drain a pipe on a helper thread so the child never blocks on a full buffer.
fn spawn_reader<R: Read + Send + 'static>(mut pipe: R) -> JoinHandle<String> {
    thread::spawn(move || {
        let mut buf = Vec::new();
        let _ = pipe.read_to_end(&mut buf);
        String::from_utf8_lossy(&buf).into_owned()
    })
}

/// Join a reader thread.
///
/// After a timeout, grandchildren may still hold the pipe open, so unfinished
/// readers are abandoned instead of joined.
fn collect_reader(handle: Option<JoinHandle<String>>, timed_out: bool) -> String {
    match handle {
        Some(h) if !timed_out || h.is_finished() => h.join().unwrap_or_default(),
        _ => String::new(),
    }
}

/// Poll a child until it exits or `limit` elapses. Returns `(exit_code, timed_out)`.
fn wait_with_timeout(child: &mut Child, limit: Duration) -> (i32, bool) {
    let deadline = Instant::now() + limit;
    loop {
        match child.try_wait() {
            Ok(Some(status)) => return (status.code().unwrap_or(1), false),
            Ok(None) if Instant::now() >= deadline => {
                let _ = child.kill();
                let _ = child.wait();
                return (EXIT_TIMED_OUT, true);
            }
            Ok(None) => thread::sleep(POLL_INTERVAL),
            Err(_) => return (1, false),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn argv(parts: &[&str]) -> Vec<String> {
        parts.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn missing_executable_returns_not_found_result() {
        let runner = SystemRunner::new();
        let result = runner.run(&argv(&["monostrap-no-such-tool-xyz", "--version"]), None);

        assert!(!result.success());
        assert_eq!(result.exit_code, EXIT_NOT_FOUND);
        assert!(result.stdout.is_empty());
        assert!(result.stderr.contains("monostrap-no-such-tool-xyz"));
    }

    #[test]
    fn empty_argv_is_a_failure() {
        let result = SystemRunner::new().run(&[], None);
        assert!(!result.success());
        assert_eq!(result.stderr, "No command given");
    }

    #[test]
    fn combined_output_puts_stdout_first() {
        let result = CommandResult::new(0, "out\n".into(), "err\n".into(), Duration::ZERO);
        assert_eq!(result.combined_output(), "out\nerr\n");
    }

    #[test]
    fn command_line_joins_with_spaces() {
        assert_eq!(command_line(&argv(&["dart", "pub", "get"])), "dart pub get");
    }

    #[test]
    fn runner_timeout_accessor() {
        assert_eq!(SystemRunner::new().timeout(), None);
        let runner = SystemRunner::with_timeout(Some(Duration::from_secs(5)));
        assert_eq!(runner.timeout(), Some(Duration::from_secs(5)));
    }

    #[cfg(unix)]
    #[test]
    fn captures_stdout_and_exit_code() {
        let result = SystemRunner::new().run(&argv(&["sh", "-c", "echo hello"]), None);

        assert!(result.success());
        assert_eq!(result.exit_code, 0);
        assert_eq!(result.stdout.trim(), "hello");
    }

    #[cfg(unix)]
    #[test]
    fn captures_stderr_and_nonzero_exit() {
        let result = SystemRunner::new().run(&argv(&["sh", "-c", "echo broken >&2; exit 3"]), None);

        assert!(!result.success());
        assert_eq!(result.exit_code, 3);
        assert_eq!(result.stderr.trim(), "broken");
    }

    #[cfg(unix)]
    #[test]
    fn runs_in_working_directory() {
        let temp = tempfile::TempDir::new().unwrap();
        let result = SystemRunner::new().run(&argv(&["sh", "-c", "pwd"]), Some(temp.path()));

        assert!(result.success());
        let reported = std::fs::canonicalize(result.stdout.trim()).unwrap();
        assert_eq!(reported, std::fs::canonicalize(temp.path()).unwrap());
    }

    #[cfg(unix)]
    #[test]
    fn missing_working_directory_is_reported() {
        let temp = tempfile::TempDir::new().unwrap();
        let missing = temp.path().join("gone");
        let result = SystemRunner::new().run(&argv(&["sh", "-c", "true"]), Some(&missing));

        assert_eq!(result.exit_code, EXIT_CANNOT_EXECUTE);
        assert!(result.stderr.contains("Working directory not found"));
    }

    #[cfg(unix)]
    #[test]
    fn large_output_does_not_deadlock() {
        let result = SystemRunner::new().run(
            &argv(&["sh", "-c", "i=0; while [ $i -lt 20000 ]; do echo line$i; i=$((i+1)); done"]),
            None,
        );

        assert!(result.success());
        assert_eq!(result.stdout.lines().count(), 20000);
    }

    #[cfg(unix)]
    #[test]
    fn timeout_kills_slow_command() {
        let runner = SystemRunner::with_timeout(Some(Duration::from_millis(200)));
        let result = runner.run(&argv(&["sleep", "5"]), None);

        assert_eq!(result.exit_code, EXIT_TIMED_OUT);
        assert!(result.stderr.contains("timed out"));
        assert!(result.duration < Duration::from_secs(5));
    }

    #[cfg(unix)]
    #[test]
    fn timeout_does_not_affect_fast_command() {
        let runner = SystemRunner::with_timeout(Some(Duration::from_secs(10)));
        let result = runner.run(&argv(&["sh", "-c", "echo quick"]), None);

        assert!(result.success());
        assert_eq!(result.stdout.trim(), "quick");
    }
}
