use cadence_core::models::*;
use chrono::{Datelike, Duration, TimeZone, Utc, Weekday};

fn ts(y: i32, m: u32, d: u32, h: u32, min: u32) -> chrono::DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, h, min, 0).unwrap()
}

// ── LoginHistory ──────────────────────────────────────────────────────────

#[test]
fn history_sorts_a_private_copy() {
    let raw = vec![ts(2025, 4, 3, 9, 0), ts(2025, 4, 1, 9, 0), ts(2025, 4, 2, 9, 0)];
    let history = LoginHistory::from_slice(&raw);

    assert_eq!(history.as_slice()[0], ts(2025, 4, 1, 9, 0));
    assert_eq!(history.last(), Some(ts(2025, 4, 3, 9, 0)));
    // Caller's order untouched
    assert_eq!(raw[0], ts(2025, 4, 3, 9, 0));
}

#[test]
fn history_keeps_duplicates() {
    let history = LoginHistory::new(vec![ts(2025, 4, 1, 9, 0); 3]);
    assert_eq!(history.len(), 3);
    assert_eq!(history.intervals_hours(), vec![0.0, 0.0]);
}

#[test]
fn intervals_are_hours_between_neighbours() {
    let history: LoginHistory = [ts(2025, 4, 1, 10, 0), ts(2025, 4, 1, 14, 0), ts(2025, 4, 1, 19, 0)]
        .into_iter()
        .collect();
    assert_eq!(history.intervals_hours(), vec![4.0, 5.0]);
}

#[test]
fn split_last_withholds_most_recent() {
    let history = LoginHistory::new(vec![ts(2025, 4, 2, 9, 0), ts(2025, 4, 1, 9, 0)]);
    let (rest, held_out) = history.split_last().unwrap();
    assert_eq!(held_out, ts(2025, 4, 2, 9, 0));
    assert_eq!(rest.as_slice(), &[ts(2025, 4, 1, 9, 0)]);
    assert!(LoginHistory::default().split_last().is_none());
}

// ── Clusters ──────────────────────────────────────────────────────────────

#[test]
fn every_weekday_hour_pair_maps_to_exactly_one_cluster() {
    // 2025-04-06 is a Sunday; walk one full week hour by hour.
    let start = ts(2025, 4, 6, 0, 0);
    let mut seen = std::collections::HashSet::new();
    for offset in 0..168 {
        let login = start + Duration::hours(offset);
        let cluster = LoginCluster::classify(&login);
        assert_eq!(cluster.day_type(), DayType::of(login.weekday()));
        assert_eq!(LoginCluster::new(cluster.day_type(), cluster.time_of_day()), cluster);
        seen.insert(cluster);
    }
    assert_eq!(seen.len(), 6);
}

#[test]
fn evening_spans_midnight() {
    assert_eq!(TimeOfDay::of_hour(23), TimeOfDay::of_hour(0));
    assert_eq!(TimeOfDay::of_hour(4), TimeOfDay::Evening);
    assert_eq!(TimeOfDay::of_hour(5), TimeOfDay::Morning);
    assert_eq!(TimeOfDay::of_hour(11), TimeOfDay::Morning);
    assert_eq!(TimeOfDay::of_hour(12), TimeOfDay::Afternoon);
    assert_eq!(TimeOfDay::of_hour(17), TimeOfDay::Afternoon);
    assert_eq!(TimeOfDay::of_hour(18), TimeOfDay::Evening);
}

#[test]
fn hour_ranges_cover_the_day_once() {
    let mut covered = [0u8; 24];
    for tod in [TimeOfDay::Morning, TimeOfDay::Afternoon, TimeOfDay::Evening] {
        for &(lo, hi) in tod.hour_ranges() {
            for hour in lo..=hi {
                covered[hour as usize] += 1;
                assert_eq!(TimeOfDay::of_hour(hour), tod);
            }
        }
    }
    assert!(covered.iter().all(|&c| c == 1));
}

#[test]
fn weekend_is_saturday_and_sunday() {
    assert_eq!(DayType::of(Weekday::Sat), DayType::Weekend);
    assert_eq!(DayType::of(Weekday::Sun), DayType::Weekend);
    assert_eq!(DayType::of(Weekday::Fri), DayType::Weekday);
    assert_eq!(DayType::of(Weekday::Mon), DayType::Weekday);
}

#[test]
fn cluster_serializes_as_snake_case_key() {
    let json = serde_json::to_string(&LoginCluster::WeekendEvening).unwrap();
    assert_eq!(json, "\"weekend_evening\"");
    assert_eq!(LoginCluster::WeekendEvening.to_string(), "weekend_evening");
}

// ── Output shape ──────────────────────────────────────────────────────────

#[test]
fn strategy_prediction_omits_absent_fields() {
    let prediction = StrategyPrediction::new(ts(2025, 5, 1, 23, 30));
    let json = serde_json::to_value(&prediction).unwrap();
    assert_eq!(json, serde_json::json!({ "nextLogin": "2025-05-01 23:30:00" }));
}

#[test]
fn accuracy_block_uses_camel_case_and_display_timestamps() {
    let mut prediction = StrategyPrediction::new(ts(2025, 5, 1, 12, 0));
    prediction.next_cluster = Some(LoginCluster::WeekdayAfternoon);
    prediction.accuracy = Some(BacktestScore {
        score: 80,
        hour_difference: 3.0,
        predicted: ts(2025, 5, 1, 4, 26),
        actual: ts(2025, 5, 1, 7, 26),
    });
    let json = serde_json::to_value(&prediction).unwrap();
    assert_eq!(json["nextCluster"], "weekday_afternoon");
    assert_eq!(json["accuracy"]["score"], 80);
    assert_eq!(json["accuracy"]["hourDifference"], 3.0);
    assert_eq!(json["accuracy"]["predicted"], "2025-05-01 04:26:00");
    assert_eq!(json["accuracy"]["actual"], "2025-05-01 07:26:00");
}

#[test]
fn insufficient_data_outcome_is_a_bare_error_object() {
    let outcome = UserPrediction::insufficient_data();
    let json = serde_json::to_value(&outcome).unwrap();
    assert_eq!(
        json,
        serde_json::json!({ "error": "Not enough login data for prediction" })
    );
    let back: UserPrediction = serde_json::from_value(json).unwrap();
    assert_eq!(back, outcome);
}

#[test]
fn bundle_iterates_in_output_order() {
    let at = ts(2025, 5, 1, 0, 0);
    let bundle = PredictionBundle {
        average_interval: StrategyPrediction::new(at),
        pattern_analysis: StrategyPrediction::new(at + Duration::hours(1)),
        gaussian_mixture: StrategyPrediction::new(at + Duration::hours(2)),
    };
    let kinds: Vec<_> = bundle.iter().map(|(kind, _)| kind).collect();
    assert_eq!(kinds, PredictorKind::ALL.to_vec());
    assert_eq!(bundle.get(PredictorKind::Pattern).next_login, at + Duration::hours(1));

    let json = serde_json::to_value(&bundle).unwrap();
    assert!(json.get("averageInterval").is_some());
    assert!(json.get("patternAnalysis").is_some());
    assert!(json.get("gaussianMixture").is_some());
}

// ── Login API payload ─────────────────────────────────────────────────────

#[test]
fn api_payload_parses_rows() {
    let json = r#"{"status":0,"message":"Success","data":{"rows":[
        {"id":"user_1","name":"Ahmet","logins":["2025-04-01T04:47:00Z","2025-04-06T08:37:00Z"]}
    ]}}"#;
    let response = LoginApiResponse::from_json(json).unwrap();
    assert_eq!(response.users().len(), 1);
    assert_eq!(
        response.users()[0].summary(),
        UserSummary {
            id: "user_1".into(),
            name: "Ahmet".into(),
            login_count: 2,
        }
    );
}

#[test]
fn api_payload_without_rows_is_rejected() {
    let result = LoginApiResponse::from_json(r#"{"status":0,"message":"Success","data":{}}"#);
    assert!(matches!(
        result,
        Err(cadence_core::CadenceError::Payload { .. })
    ));
}

#[test]
fn predictor_kind_keys_match_output_fields() {
    assert_eq!(PredictorKind::Interval.key(), "averageInterval");
    assert_eq!(PredictorKind::Pattern.key(), "patternAnalysis");
    assert_eq!(PredictorKind::Cluster.key(), "gaussianMixture");
    assert_eq!(
        serde_json::to_string(&PredictorKind::Cluster).unwrap(),
        "\"gaussianMixture\""
    );
}
