use cadence_core::models::{LoginCluster, LoginHistory};
use cadence_core::traits::ILoginPredictor;
use cadence_prediction::backtest::band_score;
use cadence_prediction::strategies::cluster::sampling::snap_to_cluster;
use cadence_prediction::{ClusterPredictor, IntervalPredictor, PatternPredictor};
use chrono::{DateTime, Duration, TimeZone, Timelike, Utc};
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn base() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 4, 1, 0, 0, 0).unwrap()
}

/// Up to 40 logins spread over roughly three months, at minute resolution.
fn arb_logins() -> impl Strategy<Value = Vec<DateTime<Utc>>> {
    prop::collection::vec(0i64..130_000, 1..40)
        .prop_map(|minutes| minutes.into_iter().map(|m| base() + Duration::minutes(m)).collect())
}

fn arb_cluster() -> impl Strategy<Value = LoginCluster> {
    prop::sample::select(LoginCluster::ALL.to_vec())
}

proptest! {
    #[test]
    fn score_is_bounded(hours in 0.0f64..1_000.0) {
        let score = band_score(hours);
        prop_assert!((10..=100).contains(&score));
    }

    #[test]
    fn score_never_increases_with_distance(a in 0.0f64..200.0, b in 0.0f64..200.0) {
        let (near, far) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(band_score(near) >= band_score(far));
    }

    #[test]
    fn interval_prediction_is_never_before_last_login(logins in arb_logins()) {
        let history = LoginHistory::new(logins);
        let last = history.last().unwrap();
        let predictor = IntervalPredictor::new(history).unwrap();
        let predicted = predictor.predict(&mut StdRng::seed_from_u64(0)).unwrap();
        prop_assert!(predicted >= last);
    }

    #[test]
    fn pattern_prediction_is_after_last_login_on_the_hour(logins in arb_logins()) {
        let history = LoginHistory::new(logins);
        let last = history.last().unwrap();
        let predictor = PatternPredictor::new(history).unwrap();
        let predicted = predictor.predict(&mut StdRng::seed_from_u64(0)).unwrap();

        prop_assert!(predicted > last);
        prop_assert!(predicted - last <= Duration::days(8));
        prop_assert_eq!(predicted.hour(), predictor.most_frequent_hour());
        prop_assert_eq!((predicted.minute(), predicted.second()), (0, 0));
    }

    #[test]
    fn snapping_always_satisfies_target(
        minutes in 0i64..20_160,
        target in arb_cluster(),
        seed in any::<u64>(),
    ) {
        let candidate = base() + Duration::minutes(minutes);
        let snapped = snap_to_cluster(candidate, target, &mut StdRng::seed_from_u64(seed)).unwrap();

        prop_assert_eq!(LoginCluster::classify(&snapped), target);
        prop_assert!(snapped.date_naive() >= candidate.date_naive());
        prop_assert!(snapped - candidate < Duration::days(6));
    }

    #[test]
    fn cluster_prediction_respects_next_cluster(logins in arb_logins(), seed in any::<u64>()) {
        let history = LoginHistory::new(logins);
        let last = history.last().unwrap();
        let mut rng = StdRng::seed_from_u64(seed);
        let predictor = ClusterPredictor::new(history, &mut rng).unwrap();
        let next = predictor.next_cluster().unwrap();
        let predicted = predictor.predict(&mut rng).unwrap();

        prop_assert_eq!(next.day_type(), predictor.last_cluster().day_type());
        if predictor.stats(next).is_some() {
            prop_assert!(predicted > last);
            prop_assert_eq!(LoginCluster::classify(&predicted), next);
        } else {
            prop_assert_eq!(predicted, last);
        }
    }
}
