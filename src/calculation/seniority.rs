//! Seniority and triennium calculation.
//!
//! Seniority counts whole calendar years between the hire date and a
//! reference date. A year only counts once its anniversary (month and day)
//! has been reached.

use chrono::NaiveDate;

/// Number of seniority years that make up one triennium.
pub const TRIENNIUM_YEARS: u32 = 3;

/// Returns the whole years elapsed between `hire_date` and `today`.
///
/// A hire date later than `today` gives zero.
///
/// # Examples
///
/// ```
/// use payroll_records::calculation::seniority_years;
/// use chrono::NaiveDate;
///
/// let hired = NaiveDate::from_ymd_opt(2016, 10, 19).unwrap();
/// let day_before = NaiveDate::from_ymd_opt(2026, 10, 18).unwrap();
/// let anniversary = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();
///
/// assert_eq!(seniority_years(hired, day_before), 9);
/// assert_eq!(seniority_years(hired, anniversary), 10);
/// ```
pub fn seniority_years(hire_date: NaiveDate, today: NaiveDate) -> u32 {
    today.years_since(hire_date).unwrap_or(0)
}

/// Returns the number of complete trienniums in `seniority_years`.
pub fn trienniums(seniority_years: u32) -> u32 {
    seniority_years / TRIENNIUM_YEARS
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn test_exact_anniversary_counts_full_year() {
        assert_eq!(seniority_years(date(2020, 10, 18), date(2026, 10, 18)), 6);
    }

    #[test]
    fn test_day_before_anniversary_rounds_down() {
        assert_eq!(seniority_years(date(2020, 10, 19), date(2026, 10, 18)), 5);
    }

    #[test]
    fn test_earlier_month_rounds_down() {
        assert_eq!(seniority_years(date(2020, 11, 1), date(2026, 10, 31)), 5);
    }

    #[test]
    fn test_hired_today_has_zero_seniority() {
        assert_eq!(seniority_years(date(2026, 10, 18), date(2026, 10, 18)), 0);
    }

    #[test]
    fn test_future_hire_date_has_zero_seniority() {
        assert_eq!(seniority_years(date(2027, 1, 1), date(2026, 10, 18)), 0);
    }

    #[test]
    fn test_leap_day_hire_counts_on_march_first() {
        // Feb 29 anniversaries in common years fall after Feb 28
        assert_eq!(seniority_years(date(2020, 2, 29), date(2025, 2, 28)), 4);
        assert_eq!(seniority_years(date(2020, 2, 29), date(2025, 3, 1)), 5);
    }

    #[test]
    fn test_trienniums_boundaries() {
        assert_eq!(trienniums(0), 0);
        assert_eq!(trienniums(2), 0);
        assert_eq!(trienniums(3), 1);
        assert_eq!(trienniums(5), 1);
        assert_eq!(trienniums(6), 2);
        assert_eq!(trienniums(10), 3);
    }

    proptest! {
        #[test]
        fn trienniums_are_seniority_divided_by_three(years in 0u32..200) {
            prop_assert_eq!(trienniums(years), years / 3);
        }

        #[test]
        fn seniority_never_exceeds_year_difference(
            hire_offset in 0i64..60_000,
            span in 0i64..60_000,
        ) {
            let hire = date(1900, 1, 1) + chrono::Duration::days(hire_offset);
            let today = hire + chrono::Duration::days(span);
            let years = seniority_years(hire, today);
            prop_assert!(i64::from(years) <= span / 365);
        }
    }
}
