//! Argument definitions for the `ambientika` binary.

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

use ambientika_core::{DEFAULT_HOST, FanSpeed, OperatingMode};

use crate::output::OutputFormat;

#[derive(Debug, Parser)]
#[command(
    name = "ambientika",
    version,
    about = "Control Ambientika ventilation devices from the command line",
    arg_required_else_help = true
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOpts,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Args)]
pub struct GlobalOpts {
    /// Ambientika cloud host
    #[arg(long, global = true, env = "AMBIENTIKA_HOST", default_value = DEFAULT_HOST)]
    pub host: String,

    /// Account username (email)
    #[arg(short = 'u', long, global = true, env = "AMBIENTIKA_USERNAME")]
    pub username: Option<String>,

    /// Account password; prompted for when not given here or in the env
    #[arg(long, global = true, env = "AMBIENTIKA_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,

    /// Output format
    #[arg(
        short = 'o',
        long,
        global = true,
        env = "AMBIENTIKA_OUTPUT",
        value_enum,
        default_value_t = OutputFormat::Table
    )]
    pub output: OutputFormat,

    /// Request timeout in seconds
    #[arg(long, global = true, default_value_t = 30)]
    pub timeout: u64,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short = 'v', long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List the devices on the account
    Devices,

    /// Show the current status of one device, or of all devices
    Status {
        /// Device serial number; omit to show every device
        serial: Option<String>,
    },

    /// Set the operating mode of a device
    SetMode {
        serial: String,
        /// Target mode, e.g. smart, auto, night, off
        mode: OperatingMode,
    },

    /// Set the fan speed of a device
    SetSpeed {
        serial: String,
        /// Target speed: low, medium, or high
        speed: FanSpeed,
    },

    /// Set the target humidity level of a device
    SetHumidity {
        serial: String,
        /// Target level: 1 (dry), 2 (normal), or 3 (moist)
        #[arg(value_parser = clap::value_parser!(u8).range(1..=3))]
        level: u8,
    },

    /// Switch a device on, restoring the mode it ran before turn-off
    On { serial: String },

    /// Switch a device off
    Off { serial: String },

    /// Reset the filter-wear counter of a device
    ResetFilter { serial: String },

    /// Poll continuously and print status on every refresh tick
    Watch {
        /// Seconds between refreshes
        #[arg(long, default_value_t = 300)]
        interval: u64,
    },

    /// Generate shell completions
    Completions { shell: Shell },
}
