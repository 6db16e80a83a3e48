//! Battery, display brightness, vibration and infrared transmitter.
use super::{args, Termux, TermuxError};
use crate::utils::join_numbers;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

const TERMUX_BRIGHTNESS: &str = "termux-brightness";
const TERMUX_INFRARED_TRANSMIT: &str = "termux-infrared-transmit";

/// Output of `termux-battery-status`.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct BatteryStatus {
    /// `GOOD`, `OVERHEAT`, `DEAD`, ...
    pub health: String,
    #[allow(missing_docs)]
    pub percentage: u8,
    /// `PLUGGED_AC`, `PLUGGED_USB`, `UNPLUGGED`, ...
    pub plugged: String,
    /// `CHARGING`, `DISCHARGING`, `FULL`, ...
    pub status: String,
    /// Degrees Celsius
    pub temperature: f64,
    /// Microamperes, negative while discharging
    pub current: i64,
}

/// Display brightness setting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Brightness {
    /// Manual level, `0..=255`
    Level(u8),
    /// Automatic brightness control
    Auto,
}

impl fmt::Display for Brightness {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Brightness::Level(l) => write!(f, "{l}"),
            Brightness::Auto => write!(f, "auto"),
        }
    }
}

/// Implement FromStr for Brightness which allows to call `parse` from a
/// parameter:
/// ```
/// use termux::api::device::Brightness;
/// assert_eq!("auto".parse::<Brightness>().unwrap(), Brightness::Auto);
/// assert_eq!("128".parse::<Brightness>().unwrap(), Brightness::Level(128));
/// assert!("256".parse::<Brightness>().is_err());
/// ```
impl FromStr for Brightness {
    type Err = TermuxError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("auto") {
            return Ok(Brightness::Auto);
        }
        s.parse().map(Brightness::Level).map_err(|_| {
            TermuxError::usage(
                TERMUX_BRIGHTNESS,
                format!("expect `auto` or a level in 0..=255, got {s:?}"),
            )
        })
    }
}

/// Vibration request.
#[derive(Debug, Clone)]
pub struct Vibration {
    #[allow(missing_docs)]
    pub duration: Duration,
    /// Vibrate even when the device is in silent mode
    pub force: bool,
}

impl Default for Vibration {
    fn default() -> Self {
        Vibration {
            duration: Duration::from_millis(1000),
            force: false,
        }
    }
}

impl Termux {
    /// Status of the device battery.
    pub fn battery_status(&self) -> Result<BatteryStatus, TermuxError> {
        self.invoke_json("termux-battery-status", args![])
    }

    /// Set the display brightness and return what the utility printed.
    ///
    /// A manual level may be ignored while automatic brightness is enabled.
    pub fn brightness(&self, value: Brightness) -> Result<String, TermuxError> {
        self.invoke_text(TERMUX_BRIGHTNESS, args![value.to_string()])
    }

    /// Vibrate the device.
    pub fn vibrate(&self, vibration: &Vibration) -> Result<(), TermuxError> {
        let mut args = args!["-d", vibration.duration.as_millis().to_string()];
        if vibration.force {
            args.push("-f".into());
        }
        self.invoke("termux-vibrate", args).map(|_| ())
    }

    /// Carrier frequencies supported by the infrared transmitter.
    pub fn infrared_frequencies(&self) -> Result<String, TermuxError> {
        self.invoke_text("termux-infrared-frequencies", args![])
    }

    /// Transmit an on/off pattern at the `frequency` carrier (Hz), timings in
    /// microseconds.
    pub fn infrared_transmit(
        &self,
        frequency: u32,
        timings: &[u32],
    ) -> Result<String, TermuxError> {
        if timings.is_empty() {
            return Err(TermuxError::usage(
                TERMUX_INFRARED_TRANSMIT,
                "pattern needs at least one timing",
            ));
        }
        self.invoke_text(
            TERMUX_INFRARED_TRANSMIT,
            args!["-f", frequency.to_string(), join_numbers(timings)],
        )
    }
}
