//! `termux-dialog` widgets.
//!
//! Every widget prints the same JSON shape, decoded into [`DialogResult`].
//! `code` is `-1` when the user confirmed, `-2` when the dialog was
//! cancelled. The bottom sheet is the exception and reports `0` on selection.

use super::{args, list_arg, Termux, TermuxError};
use crate::utils::join_numbers;
use serde::{Deserialize, Serialize};

const TERMUX_DIALOG: &str = "termux-dialog";

/// One checked entry of a checkbox dialog.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct DialogValue {
    #[allow(missing_docs)]
    pub index: i32,
    #[allow(missing_docs)]
    pub text: String,
}

/// Answer of any dialog widget.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct DialogResult {
    /// Button pressed (`-1` ok, `-2` cancel, `0` for a sheet selection)
    pub code: i32,
    /// Entered or selected text
    pub text: String,
    /// Selected index for radio, sheet and spinner
    #[serde(skip_serializing_if = "Option::is_none")]
    pub index: Option<i32>,
    /// Checked entries of a checkbox dialog
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub values: Vec<DialogValue>,
    /// Error message reported by the widget
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Yes/no question.
#[derive(Debug, Clone, Default)]
pub struct Confirm {
    #[allow(missing_docs)]
    pub title: String,
    #[allow(missing_docs)]
    pub hint: String,
}

/// Pick values among a list. Used by checkbox, radio, sheet and spinner.
#[derive(Debug, Clone, Default)]
pub struct Choice {
    #[allow(missing_docs)]
    pub title: String,
    /// Proposed values, none of them may contain a comma
    pub values: Vec<String>,
}

/// Pick a number in `min..=max`, starting at `start`.
#[derive(Debug, Clone, Default)]
pub struct Counter {
    #[allow(missing_docs)]
    pub title: String,
    #[allow(missing_docs)]
    pub min: i64,
    #[allow(missing_docs)]
    pub max: i64,
    #[allow(missing_docs)]
    pub start: i64,
}

/// Pick a date, optionally formatted with a `SimpleDateFormat` pattern
/// such as `dd-MM-yyyy`.
#[derive(Debug, Clone, Default)]
pub struct DatePick {
    #[allow(missing_docs)]
    pub title: String,
    #[allow(missing_docs)]
    pub format: Option<String>,
}

/// Speech to text through the device microphone.
#[derive(Debug, Clone, Default)]
pub struct Speech {
    #[allow(missing_docs)]
    pub title: String,
    #[allow(missing_docs)]
    pub hint: String,
}

/// Free text input.
///
/// `multiple_lines` and `numeric` cannot be combined.
#[derive(Debug, Clone, Default)]
pub struct TextInput {
    #[allow(missing_docs)]
    pub title: String,
    #[allow(missing_docs)]
    pub hint: String,
    #[allow(missing_docs)]
    pub multiple_lines: bool,
    #[allow(missing_docs)]
    pub numeric: bool,
    /// Mask the input
    pub password: bool,
}

impl TextInput {
    fn to_args(&self) -> Result<Vec<String>, TermuxError> {
        if self.multiple_lines && self.numeric {
            return Err(TermuxError::usage(
                TERMUX_DIALOG,
                "multiple lines cannot be used with numeric input",
            ));
        }
        let mut args = args!["text", "-i", &self.hint, "-t", &self.title];
        if self.multiple_lines {
            args.push("-m".into());
        }
        if self.numeric {
            args.push("-n".into());
        }
        if self.password {
            args.push("-p".into());
        }
        Ok(args)
    }
}

impl Counter {
    fn to_args(&self) -> Result<Vec<String>, TermuxError> {
        if self.min > self.max {
            return Err(TermuxError::usage(
                TERMUX_DIALOG,
                format!("counter min {} is above max {}", self.min, self.max),
            ));
        }
        if !(self.min..=self.max).contains(&self.start) {
            return Err(TermuxError::usage(
                TERMUX_DIALOG,
                format!(
                    "counter start {} is outside {}..={}",
                    self.start, self.min, self.max
                ),
            ));
        }
        let range = join_numbers(&[self.min, self.max, self.start]);
        Ok(args!["counter", "-r", range, "-t", &self.title])
    }
}

fn choice_args(widget: &str, choice: &Choice) -> Result<Vec<String>, TermuxError> {
    if choice.values.is_empty() {
        return Err(TermuxError::usage(
            TERMUX_DIALOG,
            format!("{widget} needs at least one value"),
        ));
    }
    let values = list_arg(TERMUX_DIALOG, &choice.values)?;
    Ok(args![widget, "-v", values, "-t", &choice.title])
}

impl Termux {
    fn dialog_widget(&self, args: Vec<String>) -> Result<DialogResult, TermuxError> {
        self.invoke_json(TERMUX_DIALOG, args)
    }

    /// Dialog showing only a title (default text widget).
    pub fn dialog(&self, title: &str) -> Result<DialogResult, TermuxError> {
        self.dialog_widget(args!["-t", title])
    }

    /// Confirmation dialog.
    pub fn dialog_confirm(&self, confirm: &Confirm) -> Result<DialogResult, TermuxError> {
        self.dialog_widget(args!["confirm", "-i", &confirm.hint, "-t", &confirm.title])
    }

    /// Multiple values using checkboxes.
    pub fn dialog_checkbox(&self, choice: &Choice) -> Result<DialogResult, TermuxError> {
        self.dialog_widget(choice_args("checkbox", choice)?)
    }

    /// Pick a number in a range.
    pub fn dialog_counter(&self, counter: &Counter) -> Result<DialogResult, TermuxError> {
        self.dialog_widget(counter.to_args()?)
    }

    /// Pick a date.
    pub fn dialog_date(&self, date: &DatePick) -> Result<DialogResult, TermuxError> {
        let mut args = args!["date"];
        if let Some(format) = &date.format {
            args.extend(args!["-d", format]);
        }
        args.extend(args!["-t", &date.title]);
        self.dialog_widget(args)
    }

    /// Pick a single value from radio buttons.
    pub fn dialog_radio(&self, choice: &Choice) -> Result<DialogResult, TermuxError> {
        self.dialog_widget(choice_args("radio", choice)?)
    }

    /// Pick a value from a sliding bottom sheet.
    ///
    /// Beware that a selection reports `code` `0`, not `-1` like radio or spinner.
    pub fn dialog_sheet(&self, choice: &Choice) -> Result<DialogResult, TermuxError> {
        self.dialog_widget(choice_args("sheet", choice)?)
    }

    /// Pick a single value from a dropdown spinner.
    pub fn dialog_spinner(&self, choice: &Choice) -> Result<DialogResult, TermuxError> {
        self.dialog_widget(choice_args("spinner", choice)?)
    }

    /// Obtain speech using the device microphone.
    pub fn dialog_speech(&self, speech: &Speech) -> Result<DialogResult, TermuxError> {
        self.dialog_widget(args!["speech", "-i", &speech.hint, "-t", &speech.title])
    }

    /// Text input.
    pub fn dialog_text(&self, text: &TextInput) -> Result<DialogResult, TermuxError> {
        self.dialog_widget(text.to_args()?)
    }

    /// Pick a time of day.
    pub fn dialog_time(&self, title: &str) -> Result<DialogResult, TermuxError> {
        self.dialog_widget(args!["time", "-t", title])
    }
}

#[cfg(test)]
mod should {
    use super::*;
    use crate::api::testing::{expecting, untouched};
    use test_log::test;

    fn choice(values: &[&str]) -> Choice {
        Choice {
            title: "Pick".into(),
            values: values.iter().map(|v| v.to_string()).collect(),
        }
    }

    #[test]
    fn send_confirm_arguments() {
        let termux = expecting(
            TERMUX_DIALOG,
            &["confirm", "-i", "Really?", "-t", "Delete"],
            r#"{"code":-1,"text":"yes"}"#,
        );
        let res = termux
            .dialog_confirm(&Confirm {
                title: "Delete".into(),
                hint: "Really?".into(),
            })
            .unwrap();
        assert_eq!(
            res,
            DialogResult {
                code: -1,
                text: "yes".into(),
                ..Default::default()
            }
        );
    }

    #[test]
    fn decode_checkbox_values() {
        let termux = expecting(
            TERMUX_DIALOG,
            &["checkbox", "-v", "a,b,c", "-t", "Pick"],
            r#"{"code":-1,"text":"[a, c]","values":[{"index":0,"text":"a"},{"index":2,"text":"c"}]}"#,
        );
        let res = termux.dialog_checkbox(&choice(&["a", "b", "c"])).unwrap();
        assert_eq!(
            res.values,
            vec![
                DialogValue {
                    index: 0,
                    text: "a".into()
                },
                DialogValue {
                    index: 2,
                    text: "c".into()
                }
            ]
        );
    }

    #[test]
    fn decode_radio_index() {
        let termux = expecting(
            TERMUX_DIALOG,
            &["radio", "-v", "x,y", "-t", "Pick"],
            r#"{"code":-1,"text":"y","index":1}"#,
        );
        let res = termux.dialog_radio(&choice(&["x", "y"])).unwrap();
        assert_eq!(res.index, Some(1));
        assert_eq!(res.text, "y");
    }

    #[test]
    fn keep_sheet_code_zero() {
        let termux = expecting(
            TERMUX_DIALOG,
            &["sheet", "-v", "x,y", "-t", "Pick"],
            r#"{"code":0,"text":"x","index":0}"#,
        );
        assert_eq!(termux.dialog_sheet(&choice(&["x", "y"])).unwrap().code, 0);
    }

    #[test]
    fn send_spinner_arguments() {
        let termux = expecting(
            TERMUX_DIALOG,
            &["spinner", "-v", "one", "-t", "Pick"],
            r#"{"code":-2,"text":""}"#,
        );
        assert_eq!(termux.dialog_spinner(&choice(&["one"])).unwrap().code, -2);
    }

    #[test]
    fn refuse_values_with_comma_before_running() {
        let err = untouched()
            .dialog_radio(&choice(&["1,5", "2"]))
            .unwrap_err();
        assert!(matches!(err, TermuxError::Usage { .. }));
    }

    #[test]
    fn refuse_empty_choice() {
        let err = untouched().dialog_spinner(&choice(&[])).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid use of `termux-dialog`: spinner needs at least one value"
        );
    }

    #[test]
    fn refuse_blank_choice_values() {
        let err = untouched().dialog_checkbox(&choice(&[""])).unwrap_err();
        assert!(matches!(err, TermuxError::Usage { .. }));
        let err = untouched().dialog_sheet(&choice(&["a", ""])).unwrap_err();
        assert!(matches!(err, TermuxError::Usage { .. }));
    }

    #[test]
    fn send_counter_range() {
        let termux = expecting(
            TERMUX_DIALOG,
            &["counter", "-r", "-5,10,0", "-t", "How many"],
            r#"{"code":-1,"text":"3"}"#,
        );
        let res = termux
            .dialog_counter(&Counter {
                title: "How many".into(),
                min: -5,
                max: 10,
                start: 0,
            })
            .unwrap();
        assert_eq!(res.text, "3");
    }

    #[test]
    fn refuse_counter_start_out_of_range() {
        let err = untouched()
            .dialog_counter(&Counter {
                title: "t".into(),
                min: 0,
                max: 10,
                start: 11,
            })
            .unwrap_err();
        assert!(matches!(err, TermuxError::Usage { .. }));
    }

    #[test]
    fn send_date_format_before_title() {
        let termux = expecting(
            TERMUX_DIALOG,
            &["date", "-d", "dd-MM-yyyy", "-t", "When"],
            r#"{"code":-1,"text":"16-10-2026"}"#,
        );
        let res = termux
            .dialog_date(&DatePick {
                title: "When".into(),
                format: Some("dd-MM-yyyy".into()),
            })
            .unwrap();
        assert_eq!(res.text, "16-10-2026");
    }

    #[test]
    fn send_text_flags_in_order() {
        let termux = expecting(
            TERMUX_DIALOG,
            &["text", "-i", "pin", "-t", "Code", "-n", "-p"],
            r#"{"code":-1,"text":"1234"}"#,
        );
        let res = termux
            .dialog_text(&TextInput {
                title: "Code".into(),
                hint: "pin".into(),
                numeric: true,
                password: true,
                ..Default::default()
            })
            .unwrap();
        assert_eq!(res.text, "1234");
    }

    #[test]
    fn reject_multiline_numeric_text_identically_each_time() {
        let input = TextInput {
            title: "t".into(),
            multiple_lines: true,
            numeric: true,
            ..Default::default()
        };
        let termux = untouched();
        let first = termux.dialog_text(&input).unwrap_err().to_string();
        let second = termux.dialog_text(&input).unwrap_err().to_string();
        assert_eq!(first, second);
        assert_eq!(
            first,
            "Invalid use of `termux-dialog`: multiple lines cannot be used with numeric input"
        );
    }

    #[test]
    fn send_time_and_speech_arguments() {
        let termux = expecting(
            TERMUX_DIALOG,
            &["time", "-t", "Alarm"],
            r#"{"code":-1,"text":"07:30"}"#,
        );
        assert_eq!(termux.dialog_time("Alarm").unwrap().text, "07:30");

        let termux = expecting(
            TERMUX_DIALOG,
            &["speech", "-i", "Say it", "-t", "Listen"],
            r#"{"code":-1,"text":"hello"}"#,
        );
        let res = termux
            .dialog_speech(&Speech {
                title: "Listen".into(),
                hint: "Say it".into(),
            })
            .unwrap();
        assert_eq!(res.text, "hello");
    }

    #[test]
    fn decode_widget_error() {
        let termux = expecting(
            TERMUX_DIALOG,
            &["-t", "x"],
            r#"{"code":-3,"text":"","error":"no activity"}"#,
        );
        let res = termux.dialog("x").unwrap();
        assert_eq!(res.error.as_deref(), Some("no activity"));
    }
}
