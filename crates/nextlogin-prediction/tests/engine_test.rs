use chrono::{DateTime, Duration, TimeZone, Utc};
use nextlogin_core::{Algorithm, LoginHistory, PredictionSet, ReliabilityScores, ReliabilityTier};
use nextlogin_prediction::{select_best, PredictionEngine};

fn at(y: i32, m: u32, d: u32, h: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, h, 0, 0).unwrap()
}

fn history(logins: Vec<DateTime<Utc>>) -> LoginHistory {
    LoginHistory::new(logins).unwrap()
}

fn assert_score(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}

// ── Ensemble contract ─────────────────────────────────────────────────────

#[test]
fn single_login_yields_empty_set() {
    let engine = PredictionEngine::default();
    let set = engine.predict(&history(vec![at(2024, 1, 1, 9)]), at(2024, 1, 2, 9));
    assert_eq!(set, PredictionSet::empty());
}

#[test]
fn four_daily_logins_pick_interval() {
    let d = at(2024, 1, 1, 0);
    let h = history((0..4).map(|i| d + Duration::days(i)).collect());
    let set = PredictionEngine::default().predict(&h, h.last() + Duration::hours(2));

    assert!(set.smart_interval.is_some());
    assert!(set.periodicity.is_some());
    assert!(set.dynamic_patterns.is_none());

    assert_score(set.reliability.smart_interval, 0.5);
    assert_score(set.reliability.periodicity, 0.3 + 4.0 / 30.0);
    assert_eq!(set.reliability.dynamic_patterns, 0.0);

    assert_eq!(set.best_algorithm, Some(Algorithm::SmartInterval));
    assert_eq!(set.best_prediction, set.smart_interval);
    assert_score(set.best_reliability, 0.5);
    assert_eq!(set.best_tier(), Some(ReliabilityTier::Medium));
}

#[test]
fn ten_mondays_pick_dynamic_patterns() {
    let first = at(2024, 1, 1, 9);
    let h = history((0..10).map(|w| first + Duration::weeks(w)).collect());
    // Wednesday after the last Monday.
    let now = at(2024, 3, 6, 12);
    let set = PredictionEngine::default().predict(&h, now);

    assert_eq!(set.periodicity, Some(at(2024, 3, 11, 9)));
    assert_score(set.reliability.smart_interval, 0.65);
    assert_score(set.reliability.periodicity, 0.3 + 10.0 / 30.0 + 0.1);
    assert_score(set.reliability.dynamic_patterns, 0.9);
    assert_eq!(set.best_algorithm, Some(Algorithm::DynamicPatterns));
    assert_eq!(set.best_prediction, set.dynamic_patterns);
    assert_eq!(set.best_tier(), Some(ReliabilityTier::High));
}

#[test]
fn best_reliability_is_max_over_non_null() {
    let start = at(2024, 2, 1, 7);
    let h = history((0..6).map(|i| start + Duration::hours(30 * i)).collect());
    let set = PredictionEngine::default().predict(&h, h.last() + Duration::hours(1));

    let max = Algorithm::ALL
        .iter()
        .filter(|a| set.prediction(**a).is_some())
        .map(|a| set.reliability.get(*a))
        .fold(0.0_f64, f64::max);
    assert_eq!(set.best_reliability, max);
}

#[test]
fn prediction_is_deterministic_for_fixed_now() {
    let d = at(2024, 4, 1, 8);
    let h = history((0..12).map(|i| d + Duration::hours(26 * i)).collect());
    let engine = PredictionEngine::default();
    let now = h.last() + Duration::hours(3);
    assert_eq!(engine.predict(&h, now), engine.predict(&h, now));
}

#[test]
fn overdue_interval_shifts_with_now() {
    let d = at(2024, 1, 1, 0);
    let h = history((0..4).map(|i| d + Duration::days(i)).collect());
    let engine = PredictionEngine::default();
    let now = h.last() + Duration::days(5);
    let a = engine.predict(&h, now).smart_interval.unwrap();
    let b = engine
        .predict(&h, now + Duration::hours(1))
        .smart_interval
        .unwrap();
    assert_eq!(b - a, Duration::hours(1));
}

// ── Tie-break ─────────────────────────────────────────────────────────────

#[test]
fn ties_go_to_earliest_algorithm() {
    let t = at(2024, 1, 1, 0);
    let forecasts = [Some(t), Some(t + Duration::hours(1)), Some(t + Duration::hours(2))];
    let scores = ReliabilityScores {
        smart_interval: 0.5,
        periodicity: 0.5,
        dynamic_patterns: 0.5,
    };
    let best = select_best(&forecasts, &scores).unwrap();
    assert_eq!(best.algorithm, Algorithm::SmartInterval);
    assert_eq!(best.prediction, t);

    let scores = ReliabilityScores {
        smart_interval: 0.4,
        periodicity: 0.7,
        dynamic_patterns: 0.7,
    };
    assert_eq!(
        select_best(&forecasts, &scores).unwrap().algorithm,
        Algorithm::Periodicity
    );
}

#[test]
fn null_forecasts_are_never_selected() {
    let t = at(2024, 1, 1, 0);
    let scores = ReliabilityScores {
        smart_interval: 0.9,
        periodicity: 0.3,
        dynamic_patterns: 0.0,
    };
    let best = select_best(&[None, Some(t), None], &scores).unwrap();
    assert_eq!(best.algorithm, Algorithm::Periodicity);
    assert_eq!(best.reliability, 0.3);

    assert!(select_best(&[None, None, None], &scores).is_none());
}

#[test]
fn zero_reliability_forecasts_are_not_selected() {
    let t = at(2024, 1, 1, 0);
    let best = select_best(&[Some(t), Some(t), Some(t)], &ReliabilityScores::default());
    assert!(best.is_none());
}

#[test]
fn forecasters_are_in_evaluation_order() {
    let engine = PredictionEngine::default();
    let order: Vec<Algorithm> = engine.forecasters().iter().map(|f| f.algorithm()).collect();
    assert_eq!(order, Algorithm::ALL.to_vec());
}
