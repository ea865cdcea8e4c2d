use chrono::{DateTime, NaiveDateTime};
use lazy_static::lazy_static;
use regex::Regex;
use tracing::warn;

pub const DATE_PLACEHOLDER: &str = "TBA";

/// e.g. "Fri 7 Nov at 9:00pm"
const DISPLAY_FORMAT: &str = "%a %-d %b at %-I:%M%P";

const NAIVE_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"];

lazy_static! {
    static ref STARTS_WITH_YEAR: Regex =
        Regex::new(r"^\d{4}").expect("Failed to create year regex");
}

/**
   Formats an event date for display.

   ISO timestamps (Eventbrite style) are rendered in 12-hour wall-clock time,
   anything else (Fatsoma style, "TBA") is returned untouched.
*/
pub fn format_event_date(date: Option<&str>) -> String {
    let date = match date {
        Some(date) if !date.trim().is_empty() => date,
        _ => return DATE_PLACEHOLDER.to_string(),
    };

    if !is_iso_shaped(date) {
        return date.to_string();
    }

    match parse_wall_clock(date.trim()) {
        Some(date_time) => date_time.format(DISPLAY_FORMAT).to_string(),
        None => {
            warn!("Could not format date: {}", date);
            date.to_string()
        }
    }
}

fn is_iso_shaped(date: &str) -> bool {
    STARTS_WITH_YEAR.is_match(date) && date.contains('T')
}

/// Offset timestamps keep the wall-clock time of their own offset
fn parse_wall_clock(date: &str) -> Option<NaiveDateTime> {
    if let Ok(date_time) = DateTime::parse_from_rfc3339(date) {
        return Some(date_time.naive_local());
    }

    NAIVE_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(date, format).ok())
}
