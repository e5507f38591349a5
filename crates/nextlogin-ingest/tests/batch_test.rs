use chrono::{DateTime, Duration, TimeZone, Utc};
use nextlogin_core::{Algorithm, LoginHistory};
use nextlogin_ingest::{ingest_rows, predict_all, PredictionReport, UserHistory};
use nextlogin_prediction::PredictionEngine;
use proptest::prelude::*;
use serde_json::json;

fn user(id: &str, logins: Vec<DateTime<Utc>>) -> UserHistory {
    UserHistory {
        id: id.to_string(),
        name: format!("User {id}"),
        history: LoginHistory::new(logins).unwrap(),
    }
}

fn daily(start: DateTime<Utc>, count: i64) -> Vec<DateTime<Utc>> {
    (0..count).map(|d| start + Duration::days(d)).collect()
}

#[test]
fn report_rows_mirror_users() {
    let start = Utc.with_ymd_and_hms(2024, 1, 1, 9, 0, 0).unwrap();
    let users = vec![
        user("solo", vec![start]),
        user("pair", daily(start, 2)),
        user("regular", daily(start, 12)),
    ];
    let now = start + Duration::days(12);
    let report = predict_all(&users, &PredictionEngine::default(), now, false);

    assert_eq!(report.users.len(), 3);
    let solo = &report.users[0];
    assert_eq!(solo.login_count, 1);
    assert_eq!(solo.last_login, start);
    assert!(solo.predictions.best_algorithm.is_none());

    assert_eq!(
        report.users[1].predictions.best_algorithm,
        Some(Algorithm::SmartInterval)
    );
    assert_eq!(
        report.users[2].predictions.best_algorithm,
        Some(Algorithm::DynamicPatterns)
    );
}

#[test]
fn report_serializes_output_contract() {
    let rows = vec![json!({
        "id": "u1",
        "name": "Ada",
        "logins": ["2024-01-01T09:00:00Z", "2024-01-02T09:00:00Z", "2024-01-03T09:00:00Z"]
    })];
    let outcome = ingest_rows(&rows);
    let now = Utc.with_ymd_and_hms(2024, 1, 3, 12, 0, 0).unwrap();
    let report = predict_all(&outcome.users, &PredictionEngine::default(), now, true);

    let json = serde_json::to_value(&report).unwrap();
    let row = &json["users"][0];
    assert_eq!(row["id"], "u1");
    assert_eq!(row["name"], "Ada");
    assert_eq!(row["last_login"], "2024-01-03T09:00:00Z");
    assert_eq!(row["login_count"], 3);
    let predictions = &row["predictions"];
    for key in [
        "smart_interval",
        "periodicity",
        "dynamic_patterns",
        "reliability",
        "best_prediction",
        "best_algorithm",
        "best_reliability",
    ] {
        assert!(predictions.get(key).is_some(), "missing {key}");
    }
    assert!(predictions["dynamic_patterns"].is_null());
    assert_eq!(predictions["reliability"]["dynamic_patterns"], 0.0);
    let best = predictions["best_prediction"].as_str().unwrap();
    assert!(best.ends_with('Z') && best.len() == 20, "bad timestamp {best}");

    let back: PredictionReport = serde_json::from_value(json).unwrap();
    assert_eq!(back, report);
}

proptest! {
    #[test]
    fn parallel_and_sequential_agree(counts in prop::collection::vec(1i64..15, 0..20)) {
        let start = Utc.with_ymd_and_hms(2024, 3, 1, 7, 0, 0).unwrap();
        let users: Vec<UserHistory> = counts
            .iter()
            .enumerate()
            .map(|(i, &n)| {
                let logins = (0..n)
                    .map(|k| start + Duration::hours(k * (20 + i as i64)))
                    .collect();
                user(&format!("u{i}"), logins)
            })
            .collect();
        let engine = PredictionEngine::default();
        let now = start + Duration::days(30);
        prop_assert_eq!(
            predict_all(&users, &engine, now, true),
            predict_all(&users, &engine, now, false)
        );
    }
}
