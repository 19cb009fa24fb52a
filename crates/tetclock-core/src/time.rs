//! Clock text formatting.

use chrono::Timelike;

/// Format a time as zero-padded 24-hour `HH:MM`.
pub fn format_time<T: Timelike>(time: &T) -> String {
    format_hm(time.hour(), time.minute())
}

/// Format an hour and minute as zero-padded `HH:MM`.
pub fn format_hm(hour: u32, minute: u32) -> String {
    format!("{hour:02}:{minute:02}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveTime;

    #[test]
    fn test_format_hm() {
        assert_eq!(format_hm(0, 0), "00:00");
        assert_eq!(format_hm(23, 59), "23:59");
        assert_eq!(format_hm(9, 5), "09:05");
    }

    #[test]
    fn test_format_time_ignores_seconds() {
        let t = NaiveTime::from_hms_opt(9, 5, 59).unwrap();
        assert_eq!(format_time(&t), "09:05");
    }
}
