//! # Temporal Index Selector
//!
//! Pure functions that map a point in time onto an index into the element
//! list, for two independent cycles.
//!
//! ## Daily Cycle
//! `index = day_of_year mod N`. Day 1 selects index 1 and day `N` selects
//! index 0; the first element only appears on days that are exact multiples of
//! `N`. This phase is part of the published day-to-element mapping and must
//! not be shifted to `(day - 1) mod N`.
//!
//! The day of year is read from the calendar of the timestamp's own time zone
//! (the binary passes local time).
//!
//! ## Hourly Cycle
//! `index = YYYYMMDDHH mod N`, with the identifier always built from **UTC**
//! fields, even though the daily cycle uses local time. Consecutive
//! identifiers are not evenly spaced (hour 23 → hour 00 of the next day jumps
//! by 77, month ends by far more), so the index sequence is not round-robin
//! and is recomputed from the identifier on every call.

use chrono::{DateTime, Datelike, NaiveDate, TimeZone, Timelike, Utc};

use crate::{FeedError, Result};

/// 1-based ordinal day of `date` within its year, in the date's own time zone.
///
/// Whole days of wall-clock time elapsed since midnight on January 1 of the
/// same year, plus one. Wall-clock time keeps a DST shift inside the year from
/// pulling a just-after-midnight timestamp back into the previous day.
///
/// # Example
/// ```
/// use chrono::{TimeZone, Utc};
/// use element_feed::selector::day_of_year;
///
/// let feb29 = Utc.with_ymd_and_hms(2024, 2, 29, 12, 0, 0).unwrap();
/// assert_eq!(day_of_year(&feb29), 60);
/// ```
pub fn day_of_year<Tz: TimeZone>(date: &DateTime<Tz>) -> u32 {
    let local = date.naive_local();
    // January 1 always exists for any year chrono can represent
    let start_of_year = NaiveDate::from_ymd_opt(local.year(), 1, 1)
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .unwrap_or(local);
    let elapsed = local - start_of_year;
    elapsed.num_days() as u32 + 1
}

/// Index into an `total`-element list for the given day of year.
pub fn day_index(day_of_year: u32, total: usize) -> Result<usize> {
    cyclic_index(u64::from(day_of_year), total)
}

/// `YYYYMMDDHH` identifier of the UTC hour containing `date`.
///
/// # Example
/// ```
/// use chrono::{TimeZone, Utc};
/// use element_feed::selector::hour_identifier;
///
/// let t = Utc.with_ymd_and_hms(2026, 1, 17, 14, 30, 0).unwrap();
/// assert_eq!(hour_identifier(&t), 2026011714);
/// ```
pub fn hour_identifier<Tz: TimeZone>(date: &DateTime<Tz>) -> u64 {
    let utc = date.with_timezone(&Utc);
    let year = u64::try_from(utc.year()).unwrap_or(0);
    year * 1_000_000
        + u64::from(utc.month()) * 10_000
        + u64::from(utc.day()) * 100
        + u64::from(utc.hour())
}

/// Index into an `total`-element list for the given hour identifier.
pub fn hour_index(hour_identifier: u64, total: usize) -> Result<usize> {
    cyclic_index(hour_identifier, total)
}

/// Index of the element of the day for `now`.
pub fn index_for_day<Tz: TimeZone>(now: &DateTime<Tz>, total: usize) -> Result<usize> {
    day_index(day_of_year(now), total)
}

/// Index of the element of the hour for `now`.
pub fn index_for_hour<Tz: TimeZone>(now: &DateTime<Tz>, total: usize) -> Result<usize> {
    hour_index(hour_identifier(now), total)
}

fn cyclic_index(value: u64, total: usize) -> Result<usize> {
    if total == 0 {
        return Err(FeedError::EmptyDataset);
    }
    // The remainder is < total, so it always fits back into usize
    Ok((value % total as u64) as usize)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::FixedOffset;
    use std::collections::HashSet;

    fn utc(y: i32, m: u32, d: u32, h: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, h, 0, 0).unwrap()
    }

    #[test]
    fn test_day_of_year_basics() {
        assert_eq!(day_of_year(&utc(2026, 1, 1, 0)), 1);
        assert_eq!(day_of_year(&utc(2026, 1, 1, 23)), 1);
        assert_eq!(day_of_year(&utc(2026, 2, 1, 0)), 32);
        assert_eq!(day_of_year(&utc(2025, 12, 31, 12)), 365);
        assert_eq!(day_of_year(&utc(2024, 12, 31, 12)), 366);
    }

    #[test]
    fn test_day_of_year_leap_years() {
        assert_eq!(day_of_year(&utc(2024, 2, 28, 0)), 59);
        assert_eq!(day_of_year(&utc(2025, 2, 28, 0)), 59);
        assert_eq!(day_of_year(&utc(2024, 2, 29, 0)), 60);
        assert_eq!(day_of_year(&utc(2024, 3, 1, 0)), 61);
        assert_eq!(day_of_year(&utc(2025, 3, 1, 0)), 60);
        assert_eq!(day_of_year(&utc(2000, 3, 1, 0)), 61);
        assert_eq!(day_of_year(&utc(1900, 3, 1, 0)), 60);
    }

    #[test]
    fn test_day_of_year_matches_calendar_ordinal() {
        let mut date = NaiveDate::from_ymd_opt(2023, 1, 1).unwrap();
        let end = NaiveDate::from_ymd_opt(2025, 12, 31).unwrap();
        while date <= end {
            let stamp = Utc.from_utc_datetime(&date.and_hms_opt(18, 45, 0).unwrap());
            assert_eq!(day_of_year(&stamp), date.ordinal(), "{date}");
            date = date.succ_opt().unwrap();
        }
    }

    #[test]
    fn test_day_of_year_uses_the_timestamps_own_zone() {
        // 2026-01-01T02:00Z is still Dec 31 in New York (UTC-5)
        let eastern = FixedOffset::west_opt(5 * 3600).unwrap();
        let stamp = utc(2026, 1, 1, 2).with_timezone(&eastern);
        assert_eq!(day_of_year(&stamp), 365);
        assert_eq!(day_of_year(&utc(2026, 1, 1, 2)), 1);
    }

    #[test]
    fn test_day_index_phase() {
        assert_eq!(day_index(1, 118).unwrap(), 1);
        assert_eq!(day_index(117, 118).unwrap(), 117);
        assert_eq!(day_index(118, 118).unwrap(), 0);
        assert_eq!(day_index(119, 118).unwrap(), 1);
        assert_eq!(day_index(236, 118).unwrap(), 0);
        assert_eq!(day_index(354, 118).unwrap(), 0);
        assert_eq!(day_index(0, 118).unwrap(), 0);
    }

    #[test]
    fn test_day_index_covers_full_cycle() {
        let indices: HashSet<usize> = (1..=118).map(|d| day_index(d, 118).unwrap()).collect();
        assert_eq!(indices.len(), 118);
    }

    #[test]
    fn test_hour_identifier_examples() {
        assert_eq!(hour_identifier(&utc(2026, 1, 17, 0)), 2026011700);
        assert_eq!(hour_identifier(&utc(2026, 1, 17, 23)), 2026011723);
        assert_eq!(hour_identifier(&utc(2026, 1, 1, 12)), 2026010112);
        assert_eq!(hour_identifier(&utc(9999, 12, 31, 23)), 9999123123);
    }

    #[test]
    fn test_hour_identifier_is_always_utc() {
        let tokyo = FixedOffset::east_opt(9 * 3600).unwrap();
        let stamp = utc(2026, 1, 17, 20).with_timezone(&tokyo);
        // Local calendar says Jan 18 05:00, identifier stays on the UTC hour
        assert_eq!(stamp.day(), 18);
        assert_eq!(hour_identifier(&stamp), 2026011720);
    }

    #[test]
    fn test_hour_identifiers_unique_within_a_day() {
        let ids: HashSet<u64> = (0..24).map(|h| hour_identifier(&utc(2026, 1, 17, h))).collect();
        assert_eq!(ids.len(), 24);
    }

    #[test]
    fn test_hour_index_is_plain_modulus() {
        for id in [2026011700_u64, 2026011723, 2026011800, 9999123123] {
            assert_eq!(hour_index(id, 118).unwrap(), (id % 118) as usize);
        }
        // Midnight rollover is not a +1 step
        let late = hour_index(2026011723, 118).unwrap();
        let next = hour_index(2026011800, 118).unwrap();
        assert_ne!((late + 1) % 118, next);
    }

    #[test]
    fn test_zero_modulus_fails_fast() {
        assert!(matches!(day_index(1, 0), Err(FeedError::EmptyDataset)));
        assert!(matches!(hour_index(2026011700, 0), Err(FeedError::EmptyDataset)));
    }

    #[test]
    fn test_indices_always_in_range() {
        for total in [1_usize, 2, 7, 118, 500] {
            for day in 1..=366 {
                assert!(day_index(day, total).unwrap() < total);
            }
            assert!(hour_index(9999123123, total).unwrap() < total);
        }
    }
}
