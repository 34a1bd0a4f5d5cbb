use crate::config::toml_config::DatesConfig;
use crate::domain::model::DayOverflow;
use crate::utils::error::Result;
use clap::{Parser, Subcommand};

#[derive(Debug, Clone, Parser)]
#[command(name = "date-utils")]
#[command(about = "Date normalization, timestamps and Monday-to-Sunday week boundaries")]
pub struct CliConfig {
    /// Path to a TOML configuration file
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// Pin "now" to an RFC 3339 moment instead of reading the clock
    #[arg(long, global = true)]
    pub now: Option<String>,

    /// Emit JSON instead of plain text
    #[arg(long, global = true)]
    pub json: bool,

    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    /// Write logs to stderr as JSON lines
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Convert day/month/year picker text to YYYY-MM-DD
    IsoDate {
        date: String,
        /// Reject out-of-range days instead of rolling them over
        #[arg(long)]
        strict: bool,
    },
    /// Print the current time of day as " HH:MM:SS"
    TimeNow,
    /// Picker date followed by the current time of day
    Stamp { date: String },
    /// Print the current moment as YYYY-MM-DDTHH:MM:SS
    Now,
    /// Seconds since the Unix epoch for a date or date-time
    Timestamp {
        input: String,
        /// Read offset-less input as host local time rather than UTC
        #[arg(long)]
        local: bool,
    },
    /// Monday and Sunday of the week containing a date (default: today)
    Week {
        #[arg(long)]
        date: Option<String>,
    },
    /// Weekly occurrences from START up to and including END
    WeeksBetween { start: String, end: String },
}

impl CliConfig {
    /// File configuration (or defaults) with command-line overrides applied.
    pub fn load_config(&self) -> Result<DatesConfig> {
        let mut config = match &self.config {
            Some(path) => DatesConfig::from_file(path)?,
            None => DatesConfig::default(),
        };

        if let Some(now) = &self.now {
            config.set_fixed_clock(now);
        }
        if let Command::IsoDate { strict: true, .. } = self.command {
            config.set_overflow(DayOverflow::Reject);
        }

        Ok(config)
    }
}
