use chrono::{DateTime, Datelike, TimeZone, Timelike, Weekday};
use serde::Serialize;

/// Hand angles and date labels computed from a single instant.
///
/// Angles are in degrees, 12 o'clock = 0, clockwise positive, and
/// continuous: sub-unit fractions carry into the next coarser hand so the
/// hands sweep instead of snapping. No modular reduction is applied; the
/// hour hand reads exactly 360 at 12:00:00 rather than wrapping to 0.
/// Wrapping for display is the renderer's concern.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeState {
    /// Hour hand angle in degrees.
    pub hour_angle: f64,
    /// Minute hand angle in degrees.
    pub minute_angle: f64,
    /// Second hand angle in degrees.
    pub second_angle: f64,
    /// Day of month, decimal, no leading zero.
    pub date_string: String,
    /// Uppercase English weekday name.
    pub day_of_week_string: String,
    /// Uppercase English month name.
    pub month_string: String,
}

const MONTH_NAMES: [&str; 12] = [
    "JANUARY",
    "FEBRUARY",
    "MARCH",
    "APRIL",
    "MAY",
    "JUNE",
    "JULY",
    "AUGUST",
    "SEPTEMBER",
    "OCTOBER",
    "NOVEMBER",
    "DECEMBER",
];

impl TimeState {
    /// Computes the state for the given instant.
    ///
    /// The timezone carried by the `DateTime` supplies the calendar;
    /// weekday and month names are fixed English.
    pub fn new<Tz: TimeZone>(instant: &DateTime<Tz>) -> Self {
        let hour = f64::from(instant.hour());
        let minute = f64::from(instant.minute());
        let second = f64::from(instant.second());
        let nanos = f64::from(instant.nanosecond()) / 1_000_000_000.0;

        let total_seconds = second + nanos;
        let total_minutes = minute + total_seconds / 60.0;
        let total_hours = hour + total_minutes / 60.0;

        Self {
            second_angle: total_seconds / 60.0 * 360.0,
            minute_angle: total_minutes / 60.0 * 360.0,
            hour_angle: total_hours / 12.0 * 360.0,
            date_string: instant.day().to_string(),
            day_of_week_string: weekday_name(instant.weekday()).to_owned(),
            month_string: MONTH_NAMES[instant.month0() as usize].to_owned(),
        }
    }
}

fn weekday_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "MONDAY",
        Weekday::Tue => "TUESDAY",
        Weekday::Wed => "WEDNESDAY",
        Weekday::Thu => "THURSDAY",
        Weekday::Fri => "FRIDAY",
        Weekday::Sat => "SATURDAY",
        Weekday::Sun => "SUNDAY",
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use chrono::{TimeZone, Utc};

    use super::*;

    fn make_time(hour: u32, minute: u32, second: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 2, 8, hour, minute, second)
            .unwrap()
    }

    #[test]
    fn midnight_all_angles_zero() {
        let state = TimeState::new(&make_time(0, 0, 0));
        assert_eq!(state.hour_angle, 0.0);
        assert_eq!(state.minute_angle, 0.0);
        assert_eq!(state.second_angle, 0.0);
    }

    #[test]
    fn three_oclock_hour_at_90() {
        let state = TimeState::new(&make_time(3, 0, 0));
        assert_eq!(state.hour_angle, 90.0);
        assert_eq!(state.minute_angle, 0.0);
        assert_eq!(state.second_angle, 0.0);
    }

    #[test]
    fn six_thirty_hour_at_195() {
        let state = TimeState::new(&make_time(6, 30, 0));
        assert_eq!(state.hour_angle, 195.0);
        assert_eq!(state.minute_angle, 180.0);
    }

    // Intentional: the hour angle is continuous across the 12-hour
    // boundary and must not be reduced mod 360.
    #[test]
    fn noon_hour_at_exactly_360() {
        let state = TimeState::new(&make_time(12, 0, 0));
        assert_eq!(state.hour_angle, 360.0);
    }

    #[test]
    fn nine_forty_five_angles() {
        let state = TimeState::new(&make_time(9, 45, 0));
        assert_eq!(state.hour_angle, 292.5);
        assert_eq!(state.minute_angle, 270.0);
    }

    #[test]
    fn thirty_seconds_second_at_180() {
        let state = TimeState::new(&make_time(0, 0, 30));
        assert_eq!(state.second_angle, 180.0);
    }

    #[test]
    fn fractional_seconds_advance_second_hand() {
        let instant = make_time(0, 0, 30) + chrono::Duration::milliseconds(500);
        let state = TimeState::new(&instant);
        assert!((state.second_angle - 183.0).abs() < 1e-9);
    }

    #[test]
    fn seconds_advance_minute_hand() {
        let state = TimeState::new(&make_time(0, 30, 30));
        assert!((state.minute_angle - 183.0).abs() < 1e-9);
    }

    #[test]
    fn evening_hours_continue_past_360() {
        let state = TimeState::new(&make_time(18, 0, 0));
        assert_eq!(state.hour_angle, 540.0);
    }

    #[test]
    fn date_string_has_no_leading_zero() {
        let state = TimeState::new(&make_time(0, 0, 0));
        assert_eq!(state.date_string, "8");
    }

    #[test]
    fn weekday_is_uppercase() {
        // 2026-02-08 is a Sunday.
        let state = TimeState::new(&make_time(0, 0, 0));
        assert_eq!(state.day_of_week_string, "SUNDAY");
    }

    #[test]
    fn month_is_uppercase() {
        let state = TimeState::new(&make_time(0, 0, 0));
        assert_eq!(state.month_string, "FEBRUARY");
    }
}
