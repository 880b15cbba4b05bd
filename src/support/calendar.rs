//! Calendar helpers.

/// Days in each month of a non-leap year, January first.
const DAYS_IN_MONTH: [u32; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// Returns the ordinal day of the year (January 1 is day 1).
///
/// Uses a fixed 365-day calendar: February always has 28 days, matching the
/// IEEE 738 solar tables. `day_of_month` is not checked against the length
/// of `month`, so `(2, 30)` simply lands on March 2. Months outside `1..=12`
/// are clamped to that range, and the result saturates at `u32::MAX`.
///
/// ```
/// use twine_ampacity::support::calendar::day_of_year;
///
/// assert_eq!(day_of_year(1, 1), 1);
/// assert_eq!(day_of_year(6, 10), 161);
/// assert_eq!(day_of_year(12, 31), 365);
/// ```
#[must_use]
pub fn day_of_year(month: u32, day_of_month: u32) -> u32 {
    let preceding = month.clamp(1, 12) as usize - 1;
    DAYS_IN_MONTH[..preceding]
        .iter()
        .sum::<u32>()
        .saturating_add(day_of_month)
}

#[cfg(test)]
mod tests {
    use super::*;

    use jiff::civil::date;

    #[test]
    fn matches_a_non_leap_calendar() {
        for month in 1..=12_i8 {
            let first = date(2023, month, 1);
            for day in 1..=first.days_in_month() {
                let expected = date(2023, month, day).day_of_year();
                assert_eq!(
                    day_of_year(month as u32, day as u32),
                    expected as u32,
                    "{month}/{day}"
                );
            }
        }
    }

    #[test]
    fn ignores_leap_years() {
        // March 1 is day 60 even when the host year is a leap year.
        assert_eq!(day_of_year(3, 1), 60);
        assert_eq!(date(2024, 3, 1).day_of_year(), 61);
    }

    #[test]
    fn day_is_not_validated_against_month() {
        assert_eq!(day_of_year(2, 30), day_of_year(3, 2));
    }

    #[test]
    fn huge_day_saturates() {
        assert_eq!(day_of_year(12, u32::MAX), u32::MAX);
        assert_eq!(day_of_year(1, u32::MAX), u32::MAX);
    }
}
