//! Balance-ledger arithmetic: inclusive day counts, availability checks at
//! submission time, and the saturating deduction applied on final approval.

use chrono::NaiveDate;

use crate::error::AppError;

/// Days granted per leave type when a user's ledger is seeded.
pub const DEFAULT_BALANCE: i32 = 10;

/// Inclusive day count of a leave range. A reversed range is a validation
/// error rather than a zero or negative count.
pub fn day_count(start: NaiveDate, end: NaiveDate) -> Result<i64, AppError> {
    let days = (end - start).num_days() + 1;
    if days <= 0 {
        return Err(AppError::Validation(
            "end_date cannot be before start_date".to_string(),
        ));
    }
    Ok(days)
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Availability {
    pub sufficient: bool,
    pub remaining: i32,
}

/// Submission-time check: a request is refused when nothing remains or the
/// requested span exceeds what remains.
pub fn check_availability(remaining: i32, requested: i64) -> Availability {
    Availability {
        sufficient: remaining > 0 && requested <= i64::from(remaining),
        remaining,
    }
}

/// Deduct `days` from a balance, clamping at zero.
pub fn apply_deduction(balance: i32, days: i64) -> i32 {
    i64::from(balance).saturating_sub(days).max(0) as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    #[test]
    fn day_count_is_inclusive() {
        assert_eq!(day_count(d("2026-01-05"), d("2026-01-09")).unwrap(), 5);
        assert_eq!(day_count(d("2026-01-05"), d("2026-01-05")).unwrap(), 1);
    }

    #[test]
    fn reversed_range_is_a_validation_error() {
        let err = day_count(d("2026-01-09"), d("2026-01-05")).unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn availability_requires_positive_remainder_and_fit() {
        assert!(check_availability(10, 5).sufficient);
        assert!(check_availability(5, 5).sufficient);
        assert!(!check_availability(3, 5).sufficient);
        assert!(!check_availability(0, 1).sufficient);
        assert!(!check_availability(-1, 1).sufficient);
    }

    #[test]
    fn availability_reports_the_remaining_days() {
        let a = check_availability(3, 5);
        assert!(!a.sufficient);
        assert_eq!(a.remaining, 3);
    }

    #[test]
    fn deduction_clamps_at_zero() {
        assert_eq!(apply_deduction(10, 5), 5);
        assert_eq!(apply_deduction(5, 5), 0);
        assert_eq!(apply_deduction(3, 5), 0);
        assert_eq!(apply_deduction(0, i64::MAX), 0);
    }
}
