//! Daily Streak Rules

use chrono::NaiveDate;

/// Streak after a completion on `today`.
///
/// No prior completion starts at 1, a same-day repeat keeps the count,
/// the next calendar day extends it, and any larger gap restarts at 1.
pub fn advance_streak(streak: u32, last: Option<NaiveDate>, today: NaiveDate) -> u32 {
    match last {
        None => 1,
        Some(last) => match (today - last).num_days() {
            0 => streak,
            1 => streak.saturating_add(1),
            _ => 1,
        },
    }
}

/// True when more than one day has passed since the last completion.
pub fn missed_day(last: Option<NaiveDate>, today: NaiveDate) -> bool {
    last.is_some_and(|last| (today - last).num_days() > 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, d).unwrap()
    }

    #[test]
    fn test_first_completion() {
        assert_eq!(advance_streak(0, None, day(10)), 1);
    }

    #[test]
    fn test_same_day_unchanged() {
        assert_eq!(advance_streak(4, Some(day(10)), day(10)), 4);
    }

    #[test]
    fn test_consecutive_day_increments() {
        assert_eq!(advance_streak(4, Some(day(9)), day(10)), 5);
    }

    #[test]
    fn test_consecutive_day_saturates() {
        assert_eq!(advance_streak(u32::MAX, Some(day(9)), day(10)), u32::MAX);
    }

    #[test]
    fn test_gap_resets() {
        assert_eq!(advance_streak(4, Some(day(7)), day(10)), 1);
    }

    #[test]
    fn test_across_month_boundary() {
        let last = NaiveDate::from_ymd_opt(2024, 2, 29).unwrap();
        assert_eq!(advance_streak(2, Some(last), day(1)), 3);
    }

    #[test]
    fn test_clock_moved_backwards_resets() {
        assert_eq!(advance_streak(4, Some(day(10)), day(9)), 1);
    }

    #[test]
    fn test_missed_day() {
        assert!(!missed_day(None, day(10)));
        assert!(!missed_day(Some(day(10)), day(10)));
        assert!(!missed_day(Some(day(9)), day(10)));
        assert!(missed_day(Some(day(8)), day(10)));
    }
}
