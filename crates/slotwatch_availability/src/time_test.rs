#[cfg(test)]
mod tests {
    use crate::time::*;
    use chrono::{NaiveDate, Weekday};

    #[test]
    fn test_parse_time_of_day_24h() {
        assert_eq!(parse_time_of_day("00:00"), Some(0));
        assert_eq!(parse_time_of_day("09:00"), Some(540));
        assert_eq!(parse_time_of_day("9:05"), Some(545));
        assert_eq!(parse_time_of_day(" 17:45 "), Some(1065));
        assert_eq!(parse_time_of_day("23:59"), Some(1439));
    }

    #[test]
    fn test_parse_time_of_day_blank_or_invalid_is_unbounded() {
        assert_eq!(parse_time_of_day(""), None);
        assert_eq!(parse_time_of_day("   "), None);
        assert_eq!(parse_time_of_day("24:00"), None);
        assert_eq!(parse_time_of_day("12:60"), None);
        assert_eq!(parse_time_of_day("noon"), None);
        assert_eq!(parse_time_of_day("12"), None);
    }

    #[test]
    fn test_parse_time_of_day_12h() {
        assert_eq!(parse_time_of_day("12:00 AM"), Some(0));
        assert_eq!(parse_time_of_day("12:00 PM"), Some(720));
        assert_eq!(parse_time_of_day("5:45 PM"), Some(1065));
        assert_eq!(parse_time_of_day("9:15 am"), Some(555));
    }

    #[test]
    fn test_format_minutes_of_day() {
        assert_eq!(format_minutes_of_day(0), "12:00 AM");
        assert_eq!(format_minutes_of_day(5), "12:05 AM");
        assert_eq!(format_minutes_of_day(540), "9:00 AM");
        assert_eq!(format_minutes_of_day(720), "12:00 PM");
        assert_eq!(format_minutes_of_day(780), "1:00 PM");
        assert_eq!(format_minutes_of_day(1065), "5:45 PM");
        assert_eq!(format_minutes_of_day(1439), "11:59 PM");
        // slot ending after midnight
        assert_eq!(format_minutes_of_day(1455), "12:15 AM");
    }

    #[test]
    fn test_format_round_trips_on_quarter_hour_grid() {
        for m in (0..MINUTES_PER_DAY).step_by(15) {
            let text = format_minutes_of_day(m);
            assert_eq!(parse_time_of_day(&text), Some(m), "round trip of {}", text);
        }
    }

    #[test]
    fn test_weekday_from_name() {
        assert_eq!(weekday_from_name("Monday"), Some(Weekday::Mon));
        assert_eq!(weekday_from_name("tuesday"), Some(Weekday::Tue));
        assert_eq!(weekday_from_name("SUNDAY"), Some(Weekday::Sun));
        assert_eq!(weekday_from_name(" Friday "), Some(Weekday::Fri));
        assert_eq!(weekday_from_name("Tue"), None);
        assert_eq!(weekday_from_name("Funday"), None);
        assert_eq!(weekday_from_name(""), None);
    }

    #[test]
    fn test_resolve_weekday_spec() {
        assert_eq!(resolve_weekday_spec("1"), Some(Weekday::Mon));
        assert_eq!(resolve_weekday_spec("7"), Some(Weekday::Sun));
        assert_eq!(resolve_weekday_spec(" 3 "), Some(Weekday::Wed));
        assert_eq!(resolve_weekday_spec("0"), None);
        assert_eq!(resolve_weekday_spec("8"), None);
        assert_eq!(resolve_weekday_spec("Thursday"), Some(Weekday::Thu));
        assert_eq!(resolve_weekday_spec("-1"), None);
    }

    #[test]
    fn test_weekday_numbering_is_consistent() {
        for n in 1..=7 {
            let weekday = weekday_from_number(n).unwrap();
            assert_eq!(weekday_number(weekday), n);
            assert_eq!(weekday_from_name(weekday_name(weekday)), Some(weekday));
        }
    }

    #[test]
    fn test_parse_api_datetime() {
        let dt = parse_api_datetime("2025-09-17T13:30:00").unwrap();
        assert_eq!(minute_of_day(&dt), 13 * 60 + 30);
        let dt = parse_api_datetime("2025-09-17T13:30:00Z").unwrap();
        assert_eq!(minute_of_day(&dt), 13 * 60 + 30);
        assert!(parse_api_datetime("17/09/2025 13:30").is_none());
    }

    #[test]
    fn test_parse_api_date() {
        let expected = NaiveDate::from_ymd_opt(2025, 9, 17).unwrap();
        assert_eq!(parse_api_date("2025-09-17T00:00:00"), Some(expected));
        assert_eq!(parse_api_date("2025-09-17"), Some(expected));
        assert_eq!(parse_api_date("not a date"), None);
    }
}
