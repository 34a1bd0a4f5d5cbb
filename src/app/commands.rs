use crate::config::{Command, DatesConfig};
use crate::core::iso_date::parse_day_month_year;
use crate::core::now::{current_iso_datetime, current_time_of_day, stamp_with_current_time};
use crate::core::parse::parse_moment;
use crate::core::timestamp::{extract_timestamp, extract_timestamp_in};
use crate::core::week::{week_bounds, weeks_between};
use crate::domain::model::ISO_DATE_FORMAT;
use crate::utils::error::Result;
use chrono::Local;
use serde_json::json;

/// Runs one command and returns what should be printed to stdout.
pub fn execute(command: &Command, config: &DatesConfig, as_json: bool) -> Result<String> {
    let clock = config.build_clock()?;
    tracing::debug!("Running {:?} with clock source {}", command, config.clock_source());

    let output = match command {
        Command::IsoDate { date, .. } => {
            let iso = parse_day_month_year(date, config.overflow())?
                .format(ISO_DATE_FORMAT)
                .to_string();
            render(as_json, json!({ "input": date, "iso_date": iso }), iso)
        }
        Command::TimeNow => {
            let time = current_time_of_day(clock.as_ref());
            render(as_json, json!({ "time": time }), time)
        }
        Command::Stamp { date } => {
            let stamp = stamp_with_current_time(date, config.overflow(), clock.as_ref())?;
            render(as_json, json!({ "input": date, "stamp": stamp }), stamp)
        }
        Command::Now => {
            let now = current_iso_datetime(clock.as_ref());
            render(as_json, json!({ "now": now }), now)
        }
        Command::Timestamp { input, local } => {
            let seconds = if *local {
                extract_timestamp_in(input, &Local)?
            } else {
                extract_timestamp(input)?
            };
            render(
                as_json,
                json!({ "input": input, "timestamp": seconds }),
                seconds.to_string(),
            )
        }
        Command::Week { date } => {
            let bounds = week_bounds(date.as_deref(), clock.as_ref())?;
            let (start, end) = bounds.format(config.week_format())?;
            render(
                as_json,
                json!({ "start": start, "end": end }),
                format!("{}\n{}", start, end),
            )
        }
        Command::WeeksBetween { start, end } => {
            let start_date = parse_moment(start)?.calendar_date();
            let end_date = parse_moment(end)?.calendar_date();
            let weeks = weeks_between(start_date, end_date);
            render(
                as_json,
                json!({ "start": start_date, "end": end_date, "weeks": weeks }),
                weeks.to_string(),
            )
        }
    };

    Ok(output)
}

fn render(as_json: bool, value: serde_json::Value, text: String) -> String {
    if as_json {
        value.to_string()
    } else {
        text
    }
}
