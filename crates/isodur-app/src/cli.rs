//! CLI argument types for `isodur`.
//!
//! Defined separately from `main.rs` so tests can parse argument vectors
//! directly.

use clap::{Args, Parser, Subcommand};

/// Parse, format and apply ISO 8601 durations.
#[derive(Parser, Debug)]
#[command(name = "isodur", version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Parse a duration and print its canonical form and components.
    Parse {
        /// Duration such as `P1Y2M3W4DT5H6M7S`.
        duration: String,
    },
    /// Shift a date-time by a duration.
    Shift(ShiftArgs),
    /// Print a duration as a JSON string.
    Json {
        /// Duration such as `PT15M`.
        duration: String,
    },
}

/// Arguments for `isodur shift`.
#[derive(Args, Debug)]
pub struct ShiftArgs {
    /// Duration to apply, e.g. `P1D` or `PT-90M`.
    pub duration: String,

    /// RFC 3339 date-time (`2018-01-01T00:00:00-05:00`) or a wall-clock
    /// time without offset (`2018-01-01T00:00:00`).
    pub datetime: String,

    /// Timezone to shift in. Defaults to `shift.timezone` from configuration
    /// for wall-clock input, and to the given offset for RFC 3339 input.
    #[arg(long)]
    pub tz: Option<String>,
}
