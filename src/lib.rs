pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{CliConfig, Command};

pub use adapters::{FixedClock, SystemClock, UtcClock};
pub use config::DatesConfig;
pub use crate::core::iso_date::{normalize_iso_date, normalize_iso_date_with, parse_day_month_year};
pub use crate::core::now::{current_iso_datetime, current_time_of_day, stamp_with_current_time};
pub use crate::core::timestamp::{extract_timestamp, extract_timestamp_in};
pub use crate::core::week::{week_bounds, week_bounds_for, week_end, week_start, weeks_between};
pub use domain::model::{DayOverflow, WeekBounds};
pub use domain::ports::Clock;
pub use utils::error::{DateError, Result};
