//! Typed wrappers over the `termux-*` utilities.
//!
//! Each wrapper builds the argument list of one utility, runs it through the
//! [`CommandRunner`] held by [`Termux`] and either hands back the text output
//! or decodes the JSON it prints into a fresh record owned by the caller.
//!
//! ```no_run
//! use termux::Termux;
//! let termux = Termux::new();
//! let battery = termux.battery_status()?;
//! println!("{}% ({})", battery.percentage, battery.status);
//! # Ok::<(), termux::TermuxError>(())
//! ```

pub mod clipboard;
pub mod contacts;
pub mod device;
pub mod dialog;
pub mod location;
pub mod media;
pub mod share;

use crate::command::{CommandError, CommandRunner, SystemCommandRunner};
use crate::utils::{first_with_comma, join_list};
use serde::de::DeserializeOwned;
use std::fmt;
use std::path::Path;
use thiserror::Error;
use tracing::debug;

/// Errors returned by the capability wrappers.
#[derive(Debug, Error)]
pub enum TermuxError {
    /// The utility could not be run or exited unsuccessfully.
    #[error(transparent)]
    Command(#[from] CommandError),
    /// The utility ran but its output is not the expected JSON.
    #[error("Unable to decode output of `{command}`")]
    Decode {
        #[allow(missing_docs)]
        command: String,
        #[allow(missing_docs)]
        #[source]
        source: serde_json::Error,
    },
    /// The request was rejected before running anything.
    #[error("Invalid use of `{command}`: {reason}")]
    Usage {
        #[allow(missing_docs)]
        command: &'static str,
        #[allow(missing_docs)]
        reason: String,
    },
}

impl TermuxError {
    pub(crate) fn usage(command: &'static str, reason: impl Into<String>) -> Self {
        TermuxError::Usage {
            command,
            reason: reason.into(),
        }
    }
}

/// Entry point to the device capabilities.
///
/// `Termux` holds no state besides its runner: every call builds and returns
/// its own values, so a single instance may be shared between threads.
pub struct Termux {
    runner: Box<dyn CommandRunner>,
}

impl fmt::Debug for Termux {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Termux").finish_non_exhaustive()
    }
}

impl Default for Termux {
    fn default() -> Self {
        Self::new()
    }
}

impl Termux {
    /// Create a client running the utilities found in `PATH`.
    pub fn new() -> Self {
        Self::with_runner(Box::new(SystemCommandRunner::new()))
    }

    /// Create a client with a custom command runner (bin directory, tests, ...).
    pub fn with_runner(runner: Box<dyn CommandRunner>) -> Self {
        Termux { runner }
    }

    pub(crate) fn invoke(&self, command: &str, args: Vec<String>) -> Result<Vec<u8>, TermuxError> {
        debug!("Invoking {} {:?}", command, args);
        Ok(self.runner.run(command, args)?)
    }

    pub(crate) fn invoke_text(
        &self,
        command: &str,
        args: Vec<String>,
    ) -> Result<String, TermuxError> {
        let output = self.invoke(command, args)?;
        Ok(String::from_utf8_lossy(&output).into_owned())
    }

    pub(crate) fn invoke_json<T: DeserializeOwned>(
        &self,
        command: &str,
        args: Vec<String>,
    ) -> Result<T, TermuxError> {
        let output = self.invoke(command, args)?;
        decode(command, &output)
    }
}

/// Decode the JSON printed by `command` into a new `T`.
pub fn decode<T: DeserializeOwned>(command: &str, output: &[u8]) -> Result<T, TermuxError> {
    serde_json::from_slice(output).map_err(|source| TermuxError::Decode {
        command: command.to_owned(),
        source,
    })
}

/// Comma-join `values` for `command`, refusing elements the utility would
/// split or drop.
pub(crate) fn list_arg<S: AsRef<str>>(
    command: &'static str,
    values: &[S],
) -> Result<String, TermuxError> {
    if let Some(v) = first_with_comma(values) {
        return Err(TermuxError::usage(
            command,
            format!("value {v:?} contains a comma"),
        ));
    }
    if values.iter().any(|v| v.as_ref().is_empty()) {
        return Err(TermuxError::usage(command, "list values cannot be empty"));
    }
    Ok(join_list(values))
}

/// Pass `path` to `command` as is, refusing paths that are not valid UTF-8.
pub(crate) fn path_arg(command: &'static str, path: &Path) -> Result<String, TermuxError> {
    path.to_str().map(str::to_owned).ok_or_else(|| {
        TermuxError::usage(command, format!("path {path:?} is not valid UTF-8"))
    })
}

/// Shorthand to build argument vectors from string literals and `String`s.
macro_rules! args {
    ($($arg:expr),* $(,)?) => {
        vec![$(::std::string::String::from($arg)),*]
    };
}
pub(crate) use args;


#[cfg(test)]
mod termux_should {
    use super::*;
    use crate::command::MockCommandRunner;
    use test_log::test;

    #[derive(Debug, serde::Deserialize, PartialEq)]
    struct Answer {
        value: u8,
    }

    #[test]
    fn decode_json_output() {
        let termux = testing::expecting("termux-any", &["-x"], r#"{"value": 7}"#);
        let answer: Answer = termux.invoke_json("termux-any", args!["-x"]).unwrap();
        assert_eq!(answer, Answer { value: 7 });
    }

    #[test]
    fn report_malformed_output_as_decode_error() {
        let termux = testing::expecting("termux-any", &[], "not json");
        let err = termux
            .invoke_json::<Answer>("termux-any", args![])
            .unwrap_err();
        assert!(matches!(err, TermuxError::Decode { ref command, .. } if command == "termux-any"));
    }

    #[test]
    fn report_empty_output_as_decode_error() {
        let termux = testing::expecting("termux-any", &[], "");
        let err = termux
            .invoke_json::<Answer>("termux-any", args![])
            .unwrap_err();
        assert!(matches!(err, TermuxError::Decode { .. }));
    }

    #[test]
    fn keep_command_failure_distinct_from_decode_failure() {
        let mut mock = MockCommandRunner::new();
        mock.expect_run().times(1).returning(|cmd, _| {
            Err(CommandError::Exit {
                command: cmd.to_owned(),
                code: Some(1),
                stdout: b"{\"value\": 1}".to_vec(),
                stderr: String::new(),
            })
        });
        let termux = Termux::with_runner(Box::new(mock));
        let err = termux
            .invoke_json::<Answer>("termux-any", args![])
            .unwrap_err();
        assert!(matches!(
            err,
            TermuxError::Command(CommandError::Exit { code: Some(1), .. })
        ));
    }

    #[test]
    fn refuse_list_values_with_comma() {
        let err = list_arg("termux-dialog", &["ok", "a,b"]).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid use of `termux-dialog`: value \"a,b\" contains a comma"
        );
        assert_eq!(list_arg("termux-dialog", &["a", "b"]).unwrap(), "a,b");
    }

    #[test]
    fn refuse_empty_list_values() {
        for values in [&[""][..], &["a", ""][..]] {
            let err = list_arg("termux-dialog", values).unwrap_err();
            assert_eq!(
                err.to_string(),
                "Invalid use of `termux-dialog`: list values cannot be empty"
            );
        }
    }

    #[cfg(unix)]
    #[test]
    fn refuse_non_utf8_paths() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let path = Path::new(OsStr::from_bytes(b"/sdcard/caf\xe9.mp3"));
        let err = path_arg("termux-media-player", path).unwrap_err();
        assert!(matches!(err, TermuxError::Usage { .. }));
        assert_eq!(
            path_arg("termux-media-player", Path::new("/sdcard/café.mp3")).unwrap(),
            "/sdcard/café.mp3"
        );
    }
}
