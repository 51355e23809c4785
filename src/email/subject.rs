//! Subject line dating

use chrono::{DateTime, Utc};
use chrono_tz::Tz;

use crate::error::{FosterPleaError, Result};

/// Date format used in subject lines (MM/DD/YY)
pub const SUBJECT_DATE_FORMAT: &str = "%m/%d/%y";

/// Resolve a timezone name
///
/// Accepts IANA names plus the US abbreviations spreadsheet tools accept
/// (`CST`, `EST`, `MST`, `PST`), which map to the corresponding
/// daylight-saving-aware zone.
///
/// # Examples
///
/// ```
/// use foster_plea::email::subject::resolve_timezone;
///
/// assert_eq!(resolve_timezone("CST").unwrap(), chrono_tz::America::Chicago);
/// assert_eq!(resolve_timezone("Europe/Paris").unwrap(), chrono_tz::Europe::Paris);
/// ```
pub fn resolve_timezone(name: &str) -> Result<Tz> {
    let tz = match name {
        "CST" => Tz::America__Chicago,
        "EST" => Tz::America__New_York,
        "MST" => Tz::America__Denver,
        "PST" => Tz::America__Los_Angeles,
        other => other.parse::<Tz>().map_err(|e| {
            FosterPleaError::Config(format!("unknown timezone '{}': {}", other, e))
        })?,
    };
    Ok(tz)
}

/// Calendar date of `now` in `tz`, as MM/DD/YY
pub fn format_date(now: DateTime<Utc>, tz: Tz) -> String {
    now.with_timezone(&tz).format(SUBJECT_DATE_FORMAT).to_string()
}

/// Full subject line: `"<title> - <MM/DD/YY>"`
///
/// # Arguments
///
/// * `title` - Subject text before the date
/// * `now` - Instant the draft is created
/// * `tz` - Timezone the calendar date is taken in
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use foster_plea::email::subject::subject_line;
///
/// let now = Utc.with_ymd_and_hms(2024, 3, 9, 18, 0, 0).unwrap();
/// let subject = subject_line("Neonatal Foster Plea", now, chrono_tz::America::Chicago);
/// assert_eq!(subject, "Neonatal Foster Plea - 03/09/24");
/// ```
pub fn subject_line(title: &str, now: DateTime<Utc>, tz: Tz) -> String {
    format!("{} - {}", title, format_date(now, tz))
}
