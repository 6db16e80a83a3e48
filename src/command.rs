//! Abstraction over external command execution.
//!
//! [`CommandRunner`] allows swapping the real system command execution
//! ([`SystemCommandRunner`]) with a mock in tests. Every capability of the
//! crate ends up as exactly one `termux-*` invocation, and those utilities only
//! exist inside a Termux installation. Injecting a [`CommandRunner`] makes the
//! wrappers testable on any machine.
//!
//! An invocation spawns the child, buffers its whole standard output and waits
//! for it to exit. There is no timeout: a utility that never exits blocks the
//! caller forever.

use std::io;
use std::path::PathBuf;
use std::process::Command;
use thiserror::Error;
use tracing::debug;

/// Failure of a single invocation.
#[derive(Debug, Error)]
pub enum CommandError {
    /// No executable name was given.
    #[error("No command given")]
    EmptyCommand,
    /// The process could not be started (not found, not executable, ...).
    #[error("Unable to start `{command}`")]
    Spawn {
        #[allow(missing_docs)]
        command: String,
        #[allow(missing_docs)]
        #[source]
        source: io::Error,
    },
    /// The process ran but did not exit successfully.
    ///
    /// `stdout` holds everything written before the exit.
    #[error("`{command}` exited with {}", describe_exit(.code, .stderr))]
    Exit {
        #[allow(missing_docs)]
        command: String,
        /// Exit code, `None` when terminated by a signal.
        code: Option<i32>,
        #[allow(missing_docs)]
        stdout: Vec<u8>,
        #[allow(missing_docs)]
        stderr: String,
    },
}

fn describe_exit(code: &Option<i32>, stderr: &str) -> String {
    let status = match code {
        Some(c) => format!("code {c}"),
        None => "a signal".to_owned(),
    };
    let stderr = stderr.trim();
    if stderr.is_empty() {
        status
    } else {
        format!("{status}: {stderr}")
    }
}

impl CommandError {
    /// Standard output captured before the failure (empty if the process never ran).
    pub fn captured_stdout(&self) -> &[u8] {
        match self {
            CommandError::Exit { stdout, .. } => stdout,
            _ => &[],
        }
    }
}

/// Trait for running external commands and capturing their stdout.
#[cfg_attr(test, mockall::automock)]
pub trait CommandRunner: Send + Sync {
    /// Run `cmd` with the given `args` and return its raw stdout.
    fn run(&self, cmd: &str, args: Vec<String>) -> Result<Vec<u8>, CommandError>;
}

/// Default implementation that delegates to [`std::process::Command`].
///
/// Commands are looked up in `PATH` unless a `bin_dir` is configured, in which
/// case bare command names are resolved inside it.
#[derive(Debug, Default, Clone)]
pub struct SystemCommandRunner {
    bin_dir: Option<PathBuf>,
}

impl SystemCommandRunner {
    /// Runner resolving commands through `PATH`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Runner resolving bare command names inside `dir`.
    pub fn with_bin_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            bin_dir: Some(dir.into()),
        }
    }

    fn resolve(&self, cmd: &str) -> PathBuf {
        match &self.bin_dir {
            Some(dir) if !cmd.contains('/') => dir.join(cmd),
            _ => PathBuf::from(cmd),
        }
    }
}

impl CommandRunner for SystemCommandRunner {
    fn run(&self, cmd: &str, args: Vec<String>) -> Result<Vec<u8>, CommandError> {
        if cmd.is_empty() {
            return Err(CommandError::EmptyCommand);
        }
        let program = self.resolve(cmd);
        debug!("Running {:?} {:?}", program, args);
        let output = Command::new(&program)
            .args(&args)
            .output()
            .map_err(|source| CommandError::Spawn {
                command: cmd.to_owned(),
                source,
            })?;
        if output.status.success() {
            Ok(output.stdout)
        } else {
            Err(CommandError::Exit {
                command: cmd.to_owned(),
                code: output.status.code(),
                stdout: output.stdout,
                stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            })
        }
    }
}

#[cfg(all(test, unix))]
mod system_runner_should {
    use super::*;
    use mktemp::Temp;
    use std::fs;
    use std::os::unix::fs::PermissionsExt;
    use test_log::test;

    fn stub(dir: &std::path::Path, name: &str, script: &str) {
        let path = dir.join(name);
        fs::write(&path, format!("#!/bin/sh\n{script}\n")).unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
    }

    #[test]
    fn return_exact_stdout() {
        let out = SystemCommandRunner::new()
            .run("echo", vec!["hello".into()])
            .unwrap();
        assert_eq!(out, b"hello\n");
    }

    #[test]
    fn keep_argument_order() {
        let out = SystemCommandRunner::new()
            .run("printf", vec!["%s|%s".into(), "-t".into(), "title".into()])
            .unwrap();
        assert_eq!(out, b"-t|title");
    }

    #[test]
    fn report_nonzero_exit() {
        match SystemCommandRunner::new().run("false", vec![]) {
            Err(CommandError::Exit { code, stdout, .. }) => {
                assert_eq!(code, Some(1));
                assert!(stdout.is_empty());
            }
            other => panic!("Unexpected result {:?}", other),
        }
    }

    #[test]
    fn keep_partial_output_on_failure() {
        let dir = Temp::new_dir().unwrap();
        let root = dir.to_path_buf();
        stub(&root, "termux-partial", "printf 'half'; echo oops >&2; exit 3");
        let err = SystemCommandRunner::with_bin_dir(&root)
            .run("termux-partial", vec![])
            .unwrap_err();
        assert_eq!(err.captured_stdout(), b"half");
        assert_eq!(err.to_string(), "`termux-partial` exited with code 3: oops");
    }

    #[test]
    fn report_missing_executable() {
        let err = SystemCommandRunner::new()
            .run("termux-surely-not-installed", vec![])
            .unwrap_err();
        assert!(matches!(err, CommandError::Spawn { .. }));
        assert!(err.captured_stdout().is_empty());
    }

    #[test]
    fn refuse_empty_command() {
        let err = SystemCommandRunner::new().run("", vec![]).unwrap_err();
        assert!(matches!(err, CommandError::EmptyCommand));
    }

    #[test]
    fn resolve_inside_bin_dir() {
        let dir = Temp::new_dir().unwrap();
        let root = dir.to_path_buf();
        stub(&root, "termux-battery-status", r#"echo '{"percentage":42}'"#);
        let out = SystemCommandRunner::with_bin_dir(&root)
            .run("termux-battery-status", vec![])
            .unwrap();
        assert_eq!(out, b"{\"percentage\":42}\n");
    }

    #[test]
    fn be_usable_from_several_threads() {
        let runner = std::sync::Arc::new(SystemCommandRunner::new());
        let handles: Vec<_> = (0..4)
            .map(|i| {
                let runner = runner.clone();
                std::thread::spawn(move || runner.run("echo", vec![i.to_string()]).unwrap())
            })
            .collect();
        for (i, h) in handles.into_iter().enumerate() {
            assert_eq!(h.join().unwrap(), format!("{i}\n").into_bytes());
        }
    }
}
