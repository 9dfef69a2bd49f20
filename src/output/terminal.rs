//! Terminal output formatting

use crate::certificate::EvaluationResult;
use crate::error::Result;
use chrono::{DateTime, FixedOffset, Utc};
use console::style;

const TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Display-time formatting configuration.
///
/// Carries the optional fixed UTC offset used when rendering validity
/// timestamps, passed by value to every print call. Expiry arithmetic never
/// goes through here.
#[derive(Debug, Clone, Copy, Default)]
pub struct TimeFormatter {
    offset: Option<FixedOffset>,
}

impl TimeFormatter {
    pub fn new(offset: Option<FixedOffset>) -> Self {
        TimeFormatter { offset }
    }

    pub fn format(&self, time: DateTime<Utc>) -> String {
        match self.offset {
            Some(offset) => time.with_timezone(&offset).format(TIME_FORMAT).to_string(),
            None => time.format(TIME_FORMAT).to_string(),
        }
    }
}

/// Print one evaluated certificate as a single line, highlighting the
/// expiry timestamp when the certificate is near expiry.
pub fn print_result(result: &EvaluationResult, formatter: TimeFormatter, show_days: bool) {
    let start = formatter.format(result.not_before);
    let end = formatter.format(result.not_after);

    let end = if result.near_expiry {
        style(end).red().bold().to_string()
    } else {
        end
    };

    if show_days {
        println!(
            "{} StartAt={}, EndAt={}, RemainingDays={}",
            style(&result.source).bold(),
            start,
            end,
            result.remaining_days
        );
    } else {
        println!(
            "{} StartAt={}, EndAt={}",
            style(&result.source).bold(),
            start,
            end
        );
    }
}

/// Print one evaluated certificate as a JSON object.
pub fn print_json(result: &EvaluationResult) -> Result<()> {
    println!("{}", serde_json::to_string(result)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn formats_in_utc_by_default() {
        let formatter = TimeFormatter::default();
        let time = Utc.with_ymd_and_hms(2024, 5, 15, 8, 30, 0).unwrap();
        assert_eq!(formatter.format(time), "2024-05-15 08:30:00");
    }

    #[test]
    fn formats_at_a_fixed_offset() {
        let offset: FixedOffset = "+08:00".parse().unwrap();
        let formatter = TimeFormatter::new(Some(offset));
        let time = Utc.with_ymd_and_hms(2024, 5, 15, 23, 0, 0).unwrap();
        assert_eq!(formatter.format(time), "2024-05-16 07:00:00");
    }
}
