//! Sharing files with other apps and the system download manager.
use super::{args, path_arg, Termux, TermuxError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

const TERMUX_SHARE: &str = "termux-share";

/// Share action (`-a`).
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ShareAction {
    #[default]
    #[allow(missing_docs)]
    View,
    #[allow(missing_docs)]
    Edit,
    #[allow(missing_docs)]
    Send,
}

impl fmt::Display for ShareAction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match self {
            ShareAction::View => "view",
            ShareAction::Edit => "edit",
            ShareAction::Send => "send",
        })
    }
}

impl FromStr for ShareAction {
    type Err = TermuxError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "view" => Ok(ShareAction::View),
            "edit" => Ok(ShareAction::Edit),
            "send" => Ok(ShareAction::Send),
            _ => Err(TermuxError::usage(
                TERMUX_SHARE,
                format!("unknown action {s:?} (view, edit, send)"),
            )),
        }
    }
}

/// Parameters of `termux-share`.
#[derive(Debug, Clone, Default)]
pub struct Share {
    #[allow(missing_docs)]
    pub action: ShareAction,
    /// Share to the default receiver if one is set up, instead of asking
    pub default_receiver: bool,
    /// Title of the chooser
    pub title: Option<String>,
    /// Content type, guessed from the file extension when absent
    pub content_type: Option<String>,
    /// File to share, empty input is shared when absent
    pub file: Option<PathBuf>,
}

/// Parameters of `termux-download`.
#[derive(Debug, Clone, Default)]
pub struct Download {
    #[allow(missing_docs)]
    pub url: String,
    #[allow(missing_docs)]
    pub title: String,
    #[allow(missing_docs)]
    pub description: String,
}

impl Termux {
    /// Share a file with another app.
    pub fn share(&self, share: &Share) -> Result<String, TermuxError> {
        let mut args = args!["-a", share.action.to_string()];
        if let Some(content_type) = &share.content_type {
            args.extend(args!["-c", content_type]);
        }
        if share.default_receiver {
            args.push("-d".into());
        }
        if let Some(title) = share.title.as_deref().filter(|t| !t.is_empty()) {
            args.extend(args!["-t", title]);
        }
        if let Some(file) = &share.file {
            args.push(path_arg(TERMUX_SHARE, file)?);
        }
        self.invoke_text(TERMUX_SHARE, args)
    }

    /// Download a resource using the system download manager.
    pub fn download(&self, download: &Download) -> Result<(), TermuxError> {
        if download.url.is_empty() {
            return Err(TermuxError::usage("termux-download", "url is empty"));
        }
        self.invoke(
            "termux-download",
            args![
                "-d",
                &download.description,
                "-t",
                &download.title,
                &download.url
            ],
        )
        .map(|_| ())
    }
}
