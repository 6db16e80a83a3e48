//! This module holds struct and helpers for parameters and configuration
//!
//! Configuration is merged in order: built-in defaults, then the TOML
//! configuration file, then environment variables and command line flags.
use crate::cli::Capability;
use crate::command::SystemCommandRunner;
use ::structopt::clap::AppSettings;
use anyhow::{bail, Context, Result};
use directories_next::ProjectDirs;
use figment::{
    providers::{Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::path::PathBuf;
use tracing::debug;

// Courtesy of structopt_flags crate
#[allow(missing_docs)]
#[derive(structopt::StructOpt, Debug, Clone, PartialEq, Eq)]
pub struct QuietVerbose {
    /// Increase the output's verbosity level
    ///
    /// Pass many times to increase verbosity level, up to 3.
    #[structopt(
        name = "quietverbose",
        long = "verbose",
        short = "v",
        parse(from_occurrences),
        conflicts_with = "quietquiet",
        global = true
    )]
    verbosity_level: u8,

    /// Decrease the output's verbosity level.
    ///
    /// Used once, it will set error log level.
    /// Used twice, will silent the log completely
    #[structopt(
        name = "quietquiet",
        long = "quiet",
        short = "q",
        parse(from_occurrences),
        conflicts_with = "quietverbose",
        global = true
    )]
    quiet_level: u8,
}

impl Default for QuietVerbose {
    fn default() -> Self {
        QuietVerbose {
            verbosity_level: 1,
            quiet_level: 0,
        }
    }
}

impl Serialize for QuietVerbose {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.get_level_filter())
    }
}

fn de_from_str<'de, D>(deserializer: D) -> Result<QuietVerbose, D::Error>
where
    D: Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    let (verbosity_level, quiet_level) = match s.to_ascii_lowercase().as_ref() {
        "off" => (0, 2),
        "error" => (0, 1),
        "warn" => (0, 0),
        "info" => (1, 0),
        "debug" => (2, 0),
        _ => (3, 0),
    };
    Ok(QuietVerbose {
        verbosity_level,
        quiet_level,
    })
}

impl QuietVerbose {
    /// Level name usable as an `EnvFilter` directive.
    pub fn get_level_filter(&self) -> &'static str {
        let quiet: i8 = if self.quiet_level > 1 {
            2
        } else {
            self.quiet_level as i8
        };
        let verbose: i8 = if self.verbosity_level > 2 {
            3
        } else {
            self.verbosity_level as i8
        };
        match verbose - quiet {
            -2 => "off",
            -1 => "error",
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }

    /// No `-v` nor `-q` given on the command line.
    fn is_unset(&self) -> bool {
        self.verbosity_level == 0 && self.quiet_level == 0
    }
}

// Settings shared by the configuration file, the environment and the command line.
#[allow(missing_docs)]
#[derive(structopt::StructOpt, Serialize, Deserialize, Debug, Default)]
pub struct Settings {
    /// directory holding the termux-* utilities
    ///
    /// Utilities are looked up in PATH when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[structopt(long, env = "TERMUX_API_BIN_DIR", parse(from_os_str))]
    pub bin_dir: Option<PathBuf>,

    #[structopt(flatten)]
    #[serde(
        default,
        deserialize_with = "de_from_str",
        skip_serializing_if = "QuietVerbose::is_unset"
    )]
    pub verbose: QuietVerbose,
}

#[derive(structopt::StructOpt, Debug)]
/// Access device capabilities through the termux-* utilities
///
/// Each subcommand runs one utility and prints its result, as JSON when the
/// utility answers with a structured record.
#[structopt(global_settings(&[AppSettings::ColoredHelp, AppSettings::ColorAuto]))]
pub struct Args {
    /// configuration file
    ///
    /// Defaults to config.toml in the user configuration directory.
    #[structopt(short, long, parse(from_os_str))]
    pub config: Option<PathBuf>,

    /// print the merged configuration as TOML and exit
    #[structopt(long)]
    pub dump_config: bool,

    /// Settings that can also come from the configuration file
    #[structopt(flatten)]
    pub settings: Settings,

    /// Capability to run
    #[structopt(subcommand)]
    pub command: Option<Capability>,
}

/// Validated application configuration.
#[derive(Serialize, Debug, PartialEq, Eq)]
pub struct AppConfig {
    /// directory holding the termux-* utilities
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bin_dir: Option<PathBuf>,
    /// log level (`off`, `error`, `warn`, `info`, `debug` or `trace`)
    pub verbose: String,
}

/// Location of the configuration file used when `--config` is not given.
pub fn default_config_file() -> Option<PathBuf> {
    ProjectDirs::from("com", "termux", "termux-api").map(|d| d.config_dir().join("config.toml"))
}

impl Args {
    /// Merge defaults, configuration file and command line into an [`AppConfig`].
    pub fn load_config(&self) -> Result<AppConfig> {
        let mut figment = Figment::from(Serialized::defaults(Settings::default()));
        match &self.config {
            Some(path) if !path.is_file() => {
                bail!("Configuration file {:?} does not exist", path)
            }
            Some(path) => figment = figment.merge(Toml::file(path)),
            None => {
                if let Some(path) = default_config_file() {
                    debug!("Looking for configuration in {:?}", path);
                    figment = figment.merge(Toml::file(path));
                }
            }
        }
        let settings: Settings = figment
            .merge(Serialized::defaults(&self.settings))
            .extract()
            .context("Merging configuration")?;
        settings.validate()
    }
}

impl Settings {
    /// Check settings and build the [`AppConfig`].
    pub fn validate(self) -> Result<AppConfig> {
        if let Some(dir) = &self.bin_dir {
            if !dir.is_dir() {
                bail!("bin_dir {:?} is not a directory", dir);
            }
        }
        Ok(AppConfig {
            bin_dir: self.bin_dir,
            verbose: self.verbose.get_level_filter().to_owned(),
        })
    }
}

impl AppConfig {
    /// Command runner honouring `bin_dir`.
    pub fn runner(&self) -> SystemCommandRunner {
        match &self.bin_dir {
            Some(dir) => SystemCommandRunner::with_bin_dir(dir),
            None => SystemCommandRunner::new(),
        }
    }

    /// Configuration in the format of the configuration file.
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string(self).context("Serializing configuration")
    }
}
