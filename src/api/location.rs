//! Device location.
use super::{args, Termux, TermuxError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

const TERMUX_LOCATION: &str = "termux-location";

/// Location provider (`-p`).
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Provider {
    #[default]
    #[allow(missing_docs)]
    Gps,
    #[allow(missing_docs)]
    Network,
    #[allow(missing_docs)]
    Passive,
}

/// Kind of request (`-r`).
///
/// Continuous updates are not offered: the utility would never exit.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Request {
    /// Wait for a fresh fix
    #[default]
    Once,
    /// Last known location
    Last,
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match self {
            Provider::Gps => "gps",
            Provider::Network => "network",
            Provider::Passive => "passive",
        })
    }
}

impl fmt::Display for Request {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match self {
            Request::Once => "once",
            Request::Last => "last",
        })
    }
}

impl FromStr for Provider {
    type Err = TermuxError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "gps" => Ok(Provider::Gps),
            "network" => Ok(Provider::Network),
            "passive" => Ok(Provider::Passive),
            _ => Err(TermuxError::usage(
                TERMUX_LOCATION,
                format!("unknown provider {s:?} (gps, network, passive)"),
            )),
        }
    }
}

impl FromStr for Request {
    type Err = TermuxError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "once" => Ok(Request::Once),
            "last" => Ok(Request::Last),
            _ => Err(TermuxError::usage(
                TERMUX_LOCATION,
                format!("unknown request {s:?} (once, last)"),
            )),
        }
    }
}

/// Location request parameters.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocationQuery {
    #[allow(missing_docs)]
    pub provider: Provider,
    #[allow(missing_docs)]
    pub request: Request,
}

/// Output of `termux-location`.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct LocationResult {
    #[allow(missing_docs)]
    pub latitude: f64,
    #[allow(missing_docs)]
    pub longitude: f64,
    /// Meters above the WGS84 ellipsoid
    pub altitude: f64,
    /// Horizontal accuracy in meters
    pub accuracy: f64,
    #[allow(missing_docs)]
    pub vertical_accuracy: f64,
    /// Degrees
    pub bearing: f64,
    /// Meters per second
    pub speed: f64,
    /// Age of the fix in milliseconds
    #[serde(rename = "elapsedMs")]
    pub elapsed_ms: u64,
    #[allow(missing_docs)]
    pub provider: String,
}

impl Termux {
    /// Current location of the device.
    pub fn location(&self, query: &LocationQuery) -> Result<LocationResult, TermuxError> {
        self.invoke_json(
            TERMUX_LOCATION,
            args![
                "-p",
                query.provider.to_string(),
                "-r",
                query.request.to_string()
            ],
        )
    }
}
