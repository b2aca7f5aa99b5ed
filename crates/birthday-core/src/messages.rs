//! Rotating Message Selector
//!
//! Wishes are split into equal groups and one group is shown per UTC day,
//! round-robin.

use chrono::{DateTime, NaiveTime, TimeZone};

const SECONDS_PER_DAY: i64 = 86_400;

/// Days since the Unix epoch of UTC midnight on the reference's local date
pub fn day_number<Tz: TimeZone>(reference: &DateTime<Tz>) -> i64 {
    reference
        .date_naive()
        .and_time(NaiveTime::MIN)
        .and_utc()
        .timestamp()
        .div_euclid(SECONDS_PER_DAY)
}

/// `((day mod len) + len) mod len`, always in `[0, len)`
pub fn cycle_index(day_number: i64, cycle_length: usize) -> usize {
    if cycle_length == 0 {
        return 0;
    }
    day_number.rem_euclid(cycle_length as i64) as usize
}

/// Today's group of `group_size` messages.
///
/// Empty when the pool or the group size is empty. A trailing partial group
/// is never selected.
pub fn select_today_messages<'a, Tz: TimeZone, T>(
    reference: &DateTime<Tz>,
    pool: &'a [T],
    group_size: usize,
) -> &'a [T] {
    if group_size == 0 {
        return &[];
    }
    let cycle_length = pool.len() / group_size;
    if cycle_length == 0 {
        return &[];
    }
    let start = cycle_index(day_number(reference), cycle_length) * group_size;
    &pool[start..start + group_size]
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, Utc};

    fn pool() -> Vec<String> {
        (0..8).map(|n| format!("wish {}", n)).collect()
    }

    fn at(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, mo, d, h, mi, s).unwrap()
    }

    #[test]
    fn test_day_number() {
        assert_eq!(day_number(&at(1970, 1, 1, 0, 0, 0)), 0);
        assert_eq!(day_number(&at(1970, 1, 2, 23, 59, 59)), 1);
        assert_eq!(day_number(&at(1969, 12, 31, 12, 0, 0)), -1);
        assert_eq!(day_number(&at(2024, 2, 24, 8, 0, 0)), 19_777);
    }

    #[test]
    fn test_day_number_uses_local_date() {
        // 2024-02-24 01:00 at +06:00 is still Feb 23 in UTC
        let tz = FixedOffset::east_opt(6 * 3600).unwrap();
        let local = tz.with_ymd_and_hms(2024, 2, 24, 1, 0, 0).unwrap();
        assert_eq!(day_number(&local), 19_777);
    }

    #[test]
    fn test_cycle_index_negative_days() {
        assert_eq!(cycle_index(-1, 4), 3);
        assert_eq!(cycle_index(-4, 4), 0);
        assert_eq!(cycle_index(9, 4), 1);
        assert_eq!(cycle_index(5, 0), 0);
    }

    #[test]
    fn test_same_group_all_day() {
        let pool = pool();
        let morning = select_today_messages(&at(2024, 2, 24, 0, 0, 0), &pool, 2);
        let night = select_today_messages(&at(2024, 2, 24, 23, 59, 59), &pool, 2);
        assert_eq!(morning, night);
        assert_eq!(morning.len(), 2);
    }

    #[test]
    fn test_round_robin_across_days() {
        let pool = pool();
        // 19_777 mod 4 == 1
        let groups: Vec<&[String]> = (24..=28)
            .map(|day| select_today_messages(&at(2024, 2, day, 12, 0, 0), &pool, 2))
            .collect();
        assert_eq!(groups[0], &pool[2..4]);
        assert_eq!(groups[1], &pool[4..6]);
        assert_eq!(groups[2], &pool[6..8]);
        assert_eq!(groups[3], &pool[0..2]);
        assert_eq!(groups[4], &pool[2..4]);
    }

    #[test]
    fn test_degenerate_pools() {
        let pool = pool();
        let empty: Vec<String> = Vec::new();
        let reference = at(2024, 2, 24, 0, 0, 0);
        assert!(select_today_messages(&reference, &pool, 0).is_empty());
        assert!(select_today_messages(&reference, &empty, 2).is_empty());
        assert!(select_today_messages(&reference, &pool[..1], 2).is_empty());
    }
}
