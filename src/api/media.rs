//! Media player control and media scanner.
use super::{args, path_arg, Termux, TermuxError};
use std::path::{Path, PathBuf};

const TERMUX_MEDIA_PLAYER: &str = "termux-media-player";
const TERMUX_MEDIA_SCAN: &str = "termux-media-scan";

/// Options of `termux-media-scan`.
#[derive(Debug, Clone, Default)]
pub struct MediaScan {
    /// Scan directories recursively
    pub recursive: bool,
    #[allow(missing_docs)]
    pub verbose: bool,
    /// Files or directories to add to the media content provider
    pub paths: Vec<PathBuf>,
}

impl Termux {
    /// Play `path`.
    pub fn media_play_file(&self, path: &Path) -> Result<(), TermuxError> {
        let path = path_arg(TERMUX_MEDIA_PLAYER, path)?;
        self.invoke(TERMUX_MEDIA_PLAYER, args!["play", path]).map(|_| ())
    }

    /// Resume a paused playback.
    pub fn media_resume(&self) -> Result<(), TermuxError> {
        self.invoke(TERMUX_MEDIA_PLAYER, args!["play"]).map(|_| ())
    }

    /// Quit playback.
    pub fn media_stop(&self) -> Result<(), TermuxError> {
        self.invoke(TERMUX_MEDIA_PLAYER, args!["stop"]).map(|_| ())
    }

    /// Pause playback.
    pub fn media_pause(&self) -> Result<(), TermuxError> {
        self.invoke(TERMUX_MEDIA_PLAYER, args!["pause"]).map(|_| ())
    }

    /// Current playback information as printed by the player.
    pub fn media_info(&self) -> Result<String, TermuxError> {
        self.invoke_text(TERMUX_MEDIA_PLAYER, args!["info"])
    }

    /// Add files to the media content provider.
    pub fn media_scan(&self, scan: &MediaScan) -> Result<String, TermuxError> {
        let mut args = Vec::new();
        if scan.recursive {
            args.push("-r".to_string());
        }
        if scan.verbose {
            args.push("-v".to_string());
        }
        for path in &scan.paths {
            args.push(path_arg(TERMUX_MEDIA_SCAN, path)?);
        }
        self.invoke_text(TERMUX_MEDIA_SCAN, args)
    }
}
