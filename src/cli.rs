//! Command line front-end: one subcommand per capability.
use crate::api::device::{Brightness, Vibration};
use crate::api::dialog::{Choice, Confirm, Counter, DatePick, Speech, TextInput};
use crate::api::location::{LocationQuery, Provider, Request};
use crate::api::media::MediaScan;
use crate::api::share::{Download, Share, ShareAction};
use crate::Termux;
use anyhow::{Context, Result};
use serde::Serialize;
use std::path::PathBuf;
use std::time::Duration;
use structopt::StructOpt;

#[allow(missing_docs)]
#[derive(StructOpt, Debug)]
pub enum Capability {
    /// Status of the device battery
    Battery,
    /// Set the display brightness (0 to 255, or auto)
    Brightness { value: Brightness },
    /// Read or write the system clipboard
    Clipboard(ClipboardCmd),
    /// List the device contacts
    Contacts,
    /// Show a dialog and print the user answer
    Dialog(DialogCmd),
    /// Download a resource using the system download manager
    Download {
        #[structopt(short, long, default_value = "")]
        title: String,
        #[structopt(short, long, default_value = "")]
        description: String,
        url: String,
    },
    /// Infrared transmitter
    Infrared(InfraredCmd),
    /// Device location
    Location {
        /// gps, network or passive
        #[structopt(short, long, default_value = "gps")]
        provider: Provider,
        /// once or last
        #[structopt(short, long, default_value = "once")]
        request: Request,
    },
    /// Media player and media scanner
    Media(MediaCmd),
    /// Share a file with another app
    Share {
        /// view, edit or send
        #[structopt(short, long, default_value = "view")]
        action: ShareAction,
        #[structopt(short = "c", long)]
        content_type: Option<String>,
        /// share to the default receiver if one is set up
        #[structopt(short, long)]
        default_receiver: bool,
        #[structopt(short, long)]
        title: Option<String>,
        #[structopt(parse(from_os_str))]
        file: Option<PathBuf>,
    },
    /// Vibrate the device
    Vibrate {
        /// duration in milliseconds
        #[structopt(short, long, default_value = "1000")]
        duration: u64,
        /// vibrate even in silent mode
        #[structopt(short, long)]
        force: bool,
    },
}

#[allow(missing_docs)]
#[derive(StructOpt, Debug)]
pub enum ClipboardCmd {
    /// Print the clipboard text
    Get,
    /// Replace the clipboard text
    Set { text: String },
}

#[allow(missing_docs)]
#[derive(StructOpt, Debug)]
pub enum InfraredCmd {
    /// Carrier frequencies supported by the transmitter
    Frequencies,
    /// Transmit an on/off pattern (microseconds)
    Transmit {
        #[structopt(short, long, default_value = "38000")]
        frequency: u32,
        timings: Vec<u32>,
    },
}

#[allow(missing_docs)]
#[derive(StructOpt, Debug)]
pub enum MediaCmd {
    /// Play a file, or resume playback when no file is given
    Play {
        #[structopt(parse(from_os_str))]
        file: Option<PathBuf>,
    },
    /// Pause playback
    Pause,
    /// Quit playback
    Stop,
    /// Current playback information
    Info,
    /// Add files to the media content provider
    Scan {
        /// scan directories recursively
        #[structopt(short, long)]
        recursive: bool,
        /// list scanned files
        #[structopt(long)]
        list: bool,
        #[structopt(parse(from_os_str))]
        paths: Vec<PathBuf>,
    },
}

#[allow(missing_docs)]
#[derive(StructOpt, Debug)]
pub struct TitleOpt {
    #[structopt(short, long, default_value = "")]
    pub title: String,
}

#[allow(missing_docs)]
#[derive(StructOpt, Debug)]
pub struct HintOpt {
    #[structopt(short, long, default_value = "")]
    pub title: String,
    #[structopt(short = "i", long, default_value = "")]
    pub hint: String,
}

#[allow(missing_docs)]
#[derive(StructOpt, Debug)]
pub struct ChoiceOpt {
    #[structopt(short, long, default_value = "")]
    pub title: String,
    pub values: Vec<String>,
}

impl From<&ChoiceOpt> for Choice {
    fn from(opt: &ChoiceOpt) -> Self {
        Choice {
            title: opt.title.clone(),
            values: opt.values.clone(),
        }
    }
}

#[allow(missing_docs)]
#[derive(StructOpt, Debug)]
pub enum DialogCmd {
    /// Dialog with a title only
    Simple(TitleOpt),
    /// Confirmation
    Confirm(HintOpt),
    /// Several values using checkboxes
    Checkbox(ChoiceOpt),
    /// Pick a number in a range
    Counter {
        #[structopt(short, long, default_value = "")]
        title: String,
        #[structopt(long, default_value = "0")]
        min: i64,
        #[structopt(long, default_value = "100")]
        max: i64,
        #[structopt(long, default_value = "0")]
        start: i64,
    },
    /// Pick a date
    Date {
        #[structopt(short, long, default_value = "")]
        title: String,
        /// SimpleDateFormat pattern, like dd-MM-yyyy
        #[structopt(short = "d", long)]
        format: Option<String>,
    },
    /// Single value from radio buttons
    Radio(ChoiceOpt),
    /// Value from a sliding bottom sheet
    Sheet(ChoiceOpt),
    /// Single value from a dropdown spinner
    Spinner(ChoiceOpt),
    /// Speech to text
    Speech(HintOpt),
    /// Text input
    Text {
        #[structopt(flatten)]
        hint: HintOpt,
        #[structopt(short, long)]
        multiple_lines: bool,
        #[structopt(short, long)]
        numeric: bool,
        #[structopt(short, long)]
        password: bool,
    },
    /// Pick a time of day
    Time(TitleOpt),
}

fn to_json<T: Serialize>(value: &T) -> Result<String> {
    let mut s = serde_json::to_string_pretty(value).context("Serializing result")?;
    s.push('\n');
    Ok(s)
}

/// Run `capability` and return what should be printed.
pub fn run(termux: &Termux, capability: &Capability) -> Result<String> {
    let out = match capability {
        Capability::Battery => to_json(&termux.battery_status()?)?,
        Capability::Brightness { value } => termux.brightness(*value)?,
        Capability::Clipboard(ClipboardCmd::Get) => termux.clipboard_get()?,
        Capability::Clipboard(ClipboardCmd::Set { text }) => {
            termux.clipboard_set(text)?;
            String::new()
        }
        Capability::Contacts => to_json(&termux.contact_list()?)?,
        Capability::Dialog(cmd) => to_json(&run_dialog(termux, cmd)?)?,
        Capability::Download {
            title,
            description,
            url,
        } => {
            termux.download(&Download {
                url: url.clone(),
                title: title.clone(),
                description: description.clone(),
            })?;
            String::new()
        }
        Capability::Infrared(InfraredCmd::Frequencies) => termux.infrared_frequencies()?,
        Capability::Infrared(InfraredCmd::Transmit { frequency, timings }) => {
            termux.infrared_transmit(*frequency, timings)?
        }
        Capability::Location { provider, request } => to_json(&termux.location(&LocationQuery {
            provider: *provider,
            request: *request,
        })?)?,
        Capability::Media(cmd) => run_media(termux, cmd)?,
        Capability::Share {
            action,
            content_type,
            default_receiver,
            title,
            file,
        } => termux.share(&Share {
            action: *action,
            default_receiver: *default_receiver,
            title: title.clone(),
            content_type: content_type.clone(),
            file: file.clone(),
        })?,
        Capability::Vibrate { duration, force } => {
            termux.vibrate(&Vibration {
                duration: Duration::from_millis(*duration),
                force: *force,
            })?;
            String::new()
        }
    };
    Ok(out)
}

fn run_dialog(
    termux: &Termux,
    cmd: &DialogCmd,
) -> Result<crate::api::dialog::DialogResult, crate::TermuxError> {
    match cmd {
        DialogCmd::Simple(t) => termux.dialog(&t.title),
        DialogCmd::Confirm(h) => termux.dialog_confirm(&Confirm {
            title: h.title.clone(),
            hint: h.hint.clone(),
        }),
        DialogCmd::Checkbox(c) => termux.dialog_checkbox(&c.into()),
        DialogCmd::Counter {
            title,
            min,
            max,
            start,
        } => termux.dialog_counter(&Counter {
            title: title.clone(),
            min: *min,
            max: *max,
            start: *start,
        }),
        DialogCmd::Date { title, format } => termux.dialog_date(&DatePick {
            title: title.clone(),
            format: format.clone(),
        }),
        DialogCmd::Radio(c) => termux.dialog_radio(&c.into()),
        DialogCmd::Sheet(c) => termux.dialog_sheet(&c.into()),
        DialogCmd::Spinner(c) => termux.dialog_spinner(&c.into()),
        DialogCmd::Speech(h) => termux.dialog_speech(&Speech {
            title: h.title.clone(),
            hint: h.hint.clone(),
        }),
        DialogCmd::Text {
            hint,
            multiple_lines,
            numeric,
            password,
        } => termux.dialog_text(&TextInput {
            title: hint.title.clone(),
            hint: hint.hint.clone(),
            multiple_lines: *multiple_lines,
            numeric: *numeric,
            password: *password,
        }),
        DialogCmd::Time(t) => termux.dialog_time(&t.title),
    }
}

fn run_media(termux: &Termux, cmd: &MediaCmd) -> Result<String> {
    let out = match cmd {
        MediaCmd::Play { file: Some(file) } => {
            termux.media_play_file(file)?;
            String::new()
        }
        MediaCmd::Play { file: None } => {
            termux.media_resume()?;
            String::new()
        }
        MediaCmd::Pause => {
            termux.media_pause()?;
            String::new()
        }
        MediaCmd::Stop => {
            termux.media_stop()?;
            String::new()
        }
        MediaCmd::Info => termux.media_info()?,
        MediaCmd::Scan {
            recursive,
            list,
            paths,
        } => termux.media_scan(&MediaScan {
            recursive: *recursive,
            verbose: *list,
            paths: paths.clone(),
        })?,
    };
    Ok(out)
}
