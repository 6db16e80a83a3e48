//! Non-fatal reporting of failed invocations.
//!
//! The wrappers of [`crate::api`] return every failure to the caller. Code that
//! prefers the "report and carry on" behaviour goes through this module
//! instead: [`execute`] hands back whatever stdout was captured and
//! [`OrReport::or_report`] falls back to the zero value of a record. In both
//! cases the failure is given to a [`Diagnostics`] sink and control flow is
//! unchanged.

use crate::api::TermuxError;
use crate::command::CommandRunner;
use tracing::error;

/// Side channel receiving failures that are not returned to the caller.
///
/// Implementations must not fail or panic.
#[cfg_attr(test, mockall::automock)]
pub trait Diagnostics: Send + Sync {
    /// Record one failure.
    fn report(&self, error: &TermuxError);
}

/// Sink writing each failure as a `tracing` error event.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogDiagnostics;

impl Diagnostics for LogDiagnostics {
    fn report(&self, error: &TermuxError) {
        error!("{}", error_chain(error));
    }
}

/// Render `error` and its sources on a single line.
pub fn error_chain(error: &(dyn std::error::Error + 'static)) -> String {
    let mut msg = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        msg.push_str(": ");
        msg.push_str(&cause.to_string());
        source = cause.source();
    }
    msg
}

/// Run `cmd` and return its stdout, reporting failures instead of returning them.
///
/// A process that exits unsuccessfully still yields what it printed before
/// exiting; one that cannot be started yields nothing. Callers cannot tell an
/// empty successful output from a failure, use [`CommandRunner::run`] when
/// that matters.
pub fn execute(
    runner: &dyn CommandRunner,
    diagnostics: &dyn Diagnostics,
    cmd: &str,
    args: Vec<String>,
) -> Vec<u8> {
    match runner.run(cmd, args) {
        Ok(stdout) => stdout,
        Err(e) => {
            let stdout = e.captured_stdout().to_vec();
            diagnostics.report(&TermuxError::Command(e));
            stdout
        }
    }
}

/// Fallback to a zero value for wrapper results.
pub trait OrReport<T> {
    /// Return the value, or report the error and return `T::default()`.
    fn or_report(self, diagnostics: &dyn Diagnostics) -> T;
}

impl<T: Default> OrReport<T> for Result<T, TermuxError> {
    fn or_report(self, diagnostics: &dyn Diagnostics) -> T {
        self.unwrap_or_else(|e| {
            diagnostics.report(&e);
            T::default()
        })
    }
}

#[cfg(test)]
mod execute_should {
    use super::*;
    use crate::command::{CommandError, MockCommandRunner, SystemCommandRunner};
    use test_log::test;

    #[test]
    fn return_stdout_without_diagnostic() {
        let mut diagnostics = MockDiagnostics::new();
        diagnostics.expect_report().times(0);
        let out = execute(
            &SystemCommandRunner::new(),
            &diagnostics,
            "echo",
            vec!["hello".into()],
        );
        assert_eq!(out, b"hello\n");
    }

    #[test]
    fn record_one_diagnostic_on_nonzero_exit() {
        let mut diagnostics = MockDiagnostics::new();
        diagnostics
            .expect_report()
            .withf(|e| matches!(e, TermuxError::Command(CommandError::Exit { .. })))
            .times(1)
            .return_const(());
        let out = execute(&SystemCommandRunner::new(), &diagnostics, "false", vec![]);
        assert!(out.is_empty());
    }

    #[test]
    fn record_one_diagnostic_when_command_is_missing() {
        let mut diagnostics = MockDiagnostics::new();
        diagnostics
            .expect_report()
            .withf(|e| matches!(e, TermuxError::Command(CommandError::Spawn { .. })))
            .times(1)
            .return_const(());
        let out = execute(
            &SystemCommandRunner::new(),
            &diagnostics,
            "termux-surely-not-installed",
            vec![],
        );
        assert!(out.is_empty());
    }

    #[test]
    fn return_partial_output_of_failed_command() {
        let mut runner = MockCommandRunner::new();
        runner.expect_run().times(1).returning(|cmd, _| {
            Err(CommandError::Exit {
                command: cmd.to_owned(),
                code: None,
                stdout: b"partial".to_vec(),
                stderr: String::new(),
            })
        });
        let mut diagnostics = MockDiagnostics::new();
        diagnostics.expect_report().times(1).return_const(());
        let out = execute(&runner, &diagnostics, "termux-any", vec![]);
        assert_eq!(out, b"partial");
    }

    #[test]
    fn log_through_default_sink() {
        let out = execute(&SystemCommandRunner::new(), &LogDiagnostics, "false", vec![]);
        assert!(out.is_empty());
    }
}
