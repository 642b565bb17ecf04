//! Attendance rate arithmetic.

/// Percentage of present entries out of the total, 0-100.
///
/// A student or month with no attendance rows reports 0.0 rather than
/// dividing by zero.
pub fn attendance_rate(present: i64, total: i64) -> f64 {
    if total <= 0 {
        0.0
    } else {
        (present as f64 / total as f64) * 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attendance_rate() {
        assert_eq!(attendance_rate(18, 20), 90.0);
        assert_eq!(attendance_rate(0, 20), 0.0);
        assert_eq!(attendance_rate(20, 20), 100.0);
    }

    #[test]
    fn test_attendance_rate_zero_total() {
        assert_eq!(attendance_rate(0, 0), 0.0);
        assert_eq!(attendance_rate(5, 0), 0.0);
    }

    #[test]
    fn test_attendance_rate_fractional() {
        let rate = attendance_rate(1, 3);
        assert!((rate - 33.333333).abs() < 0.001);
    }
}
