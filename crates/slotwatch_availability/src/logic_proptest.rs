#[cfg(test)]
mod tests {
    use crate::models::{Interval, WeekTarget};
    use crate::predicates::{matches_target, within_window};
    use crate::slots::merge_touching;
    use crate::time::{format_minutes_of_day, parse_time_of_day, weekday_from_number};
    use chrono::{DateTime, Datelike, Duration, NaiveDate, TimeZone, Utc};
    use proptest::prelude::*;

    // Helper strategy: intervals on the quarter-hour grid of one day
    fn interval_strategy() -> impl Strategy<Value = Interval> {
        (0u32..96, 1u32..8).prop_map(|(slot, len)| Interval::new(slot * 15, slot * 15 + len * 15))
    }

    // Helper strategy: an instant between 2020 and 2035
    fn now_strategy() -> impl Strategy<Value = DateTime<Utc>> {
        (1_577_836_800i64..2_051_222_400i64).prop_map(|secs| Utc.timestamp_opt(secs, 0).unwrap())
    }

    proptest! {
        // Growing the window never excludes a date that was included
        #[test]
        fn test_within_window_is_monotonic(
            now in now_strategy(),
            day_offset in -30i64..400,
            window in 0i64..365,
            extra in 0i64..365,
        ) {
            let date: NaiveDate = now.date_naive() + Duration::days(day_offset);
            if within_window(date, now, Some(window)) {
                prop_assert!(within_window(date, now, Some(window + extra)));
            }
        }

        // Merging an already merged list changes nothing
        #[test]
        fn test_merge_is_idempotent(intervals in prop::collection::vec(interval_strategy(), 0..40)) {
            let merged = merge_touching(intervals);
            prop_assert_eq!(merge_touching(merged.clone()), merged);
        }

        // Output is sorted and no neighbour touches the previous one
        #[test]
        fn test_merge_output_sorted_and_not_touching(
            intervals in prop::collection::vec(interval_strategy(), 0..40),
        ) {
            let merged = merge_touching(intervals);
            for pair in merged.windows(2) {
                prop_assert!(pair[0] <= pair[1], "not sorted: {:?}", merged);
                prop_assert!(pair[1].start != pair[0].end, "touching: {:?}", merged);
            }
        }

        // Input order does not matter
        #[test]
        fn test_merge_ignores_input_order(intervals in prop::collection::vec(interval_strategy(), 0..40)) {
            let mut reversed = intervals.clone();
            reversed.reverse();
            prop_assert_eq!(merge_touching(intervals), merge_touching(reversed));
        }

        // Merging never loses or invents covered minutes
        #[test]
        fn test_merge_preserves_coverage(intervals in prop::collection::vec(interval_strategy(), 0..40)) {
            let covered = |list: &[Interval], minute: u32| list.iter().any(|i| i.start <= minute && minute < i.end);
            let merged = merge_touching(intervals.clone());
            for minute in 0..(96 * 15 + 8 * 15) {
                prop_assert_eq!(covered(&intervals, minute), covered(&merged, minute));
            }
        }

        // Display format parses back to the same minute on the quarter-hour grid
        #[test]
        fn test_format_parse_round_trip(slot in 0u32..96) {
            let minutes = slot * 15;
            prop_assert_eq!(parse_time_of_day(&format_minutes_of_day(minutes)), Some(minutes));
        }

        // Exactly one date matches a target, on the right weekday, 7*offset..7*offset+6 days out
        #[test]
        fn test_matches_target_single_day(
            now in now_strategy(),
            weekday_number in 1u32..=7,
            week_offset in 0i64..6,
        ) {
            let target = WeekTarget {
                weekday: weekday_from_number(weekday_number).unwrap(),
                week_offset,
            };
            let today = now.date_naive();
            let matches: Vec<NaiveDate> = (0..(7 * (week_offset + 2)))
                .map(|d| today + Duration::days(d))
                .filter(|d| matches_target(*d, now, Some(&target)))
                .collect();
            prop_assert_eq!(matches.len(), 1);
            let hit = matches[0];
            prop_assert_eq!(hit.weekday(), target.weekday);
            let days_out = (hit - today).num_days();
            prop_assert!(days_out >= 7 * week_offset && days_out < 7 * week_offset + 7);
        }
    }
}
