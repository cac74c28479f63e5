use cadence_core::models::timestamp::{format_timestamp, parse_display};
use cadence_core::models::{DayType, LoginCluster, LoginHistory};
use chrono::{DateTime, Datelike, Duration, TimeZone, Timelike, Utc};
use proptest::prelude::*;

fn arb_timestamp() -> impl Strategy<Value = DateTime<Utc>> {
    // 2020-01-01 through roughly 2035, second resolution.
    (0i64..500_000_000).prop_map(|s| Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap() + Duration::seconds(s))
}

proptest! {
    #[test]
    fn every_timestamp_lands_in_exactly_one_cluster(ts in arb_timestamp()) {
        let cluster = LoginCluster::classify(&ts);
        let hour = ts.hour();

        prop_assert_eq!(cluster.day_type(), DayType::of(ts.weekday()));
        let in_bucket = cluster
            .time_of_day()
            .hour_ranges()
            .iter()
            .any(|&(lo, hi)| (lo..=hi).contains(&hour));
        prop_assert!(in_bucket);

        let matching = LoginCluster::ALL
            .iter()
            .filter(|c| c.day_type() == cluster.day_type())
            .filter(|c| c.time_of_day().hour_ranges().iter().any(|&(lo, hi)| (lo..=hi).contains(&hour)))
            .count();
        prop_assert_eq!(matching, 1);
    }

    #[test]
    fn history_is_sorted_and_keeps_every_login(mut logins in prop::collection::vec(arb_timestamp(), 0..50)) {
        let history = LoginHistory::from_slice(&logins);
        prop_assert_eq!(history.len(), logins.len());
        prop_assert!(history.as_slice().windows(2).all(|w| w[0] <= w[1]));
        prop_assert!(history.intervals_hours().iter().all(|h| *h >= 0.0));

        logins.sort();
        prop_assert_eq!(history.as_slice(), logins.as_slice());
    }

    #[test]
    fn display_format_keeps_second_precision(ts in arb_timestamp()) {
        prop_assert_eq!(parse_display(&format_timestamp(&ts)).unwrap(), ts);
    }
}
