use chrono::{DateTime, Duration, TimeZone, Utc};
use nextlogin_core::constants::{
    DYNAMIC_RELIABILITY_CAP, INTERVAL_RELIABILITY_CAP, PERIODICITY_RELIABILITY_CAP,
};
use nextlogin_core::{Algorithm, LoginHistory, PredictionSet};
use nextlogin_prediction::reliability;
use nextlogin_prediction::PredictionEngine;
use proptest::prelude::*;

fn base() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2023, 1, 1, 0, 0, 0).unwrap()
}

/// Histories of 1..40 logins spread over a year, with `now` up to 60 days after the window.
fn arb_case() -> impl Strategy<Value = (LoginHistory, DateTime<Utc>)> {
    (
        prop::collection::vec(0i64..365 * 86_400, 1..40),
        0i64..60 * 86_400,
    )
        .prop_map(|(offsets, now_offset)| {
            let logins = offsets
                .into_iter()
                .map(|o| base() + Duration::seconds(o))
                .collect();
            let history = LoginHistory::new(logins).unwrap();
            let now = base() + Duration::days(365) + Duration::seconds(now_offset);
            (history, now)
        })
}

// ── Reliability bounds and monotonicity ───────────────────────────────────

proptest! {
    #[test]
    fn reliability_is_monotonic_and_capped(n in 0usize..500) {
        for (algorithm, cap) in [
            (Algorithm::SmartInterval, INTERVAL_RELIABILITY_CAP),
            (Algorithm::Periodicity, PERIODICITY_RELIABILITY_CAP),
            (Algorithm::DynamicPatterns, DYNAMIC_RELIABILITY_CAP),
        ] {
            let here = reliability::score(algorithm, n);
            let next = reliability::score(algorithm, n + 1);
            prop_assert!(here >= 0.0);
            prop_assert!(here <= cap);
            prop_assert!(next >= here, "{} not monotonic at {}: {} > {}", algorithm, n, here, next);
        }
    }

    #[test]
    fn reliability_minimums(n in 0usize..5) {
        if n < 3 {
            prop_assert_eq!(reliability::periodicity(n), 0.0);
        }
        prop_assert_eq!(reliability::dynamic_patterns(n), 0.0);
    }
}

// ── Ensemble invariants ───────────────────────────────────────────────────

proptest! {
    #[test]
    fn ensemble_invariants_hold((history, now) in arb_case()) {
        let set = PredictionEngine::default().predict(&history, now);
        let n = history.len();

        if n < 2 {
            prop_assert_eq!(set, PredictionSet::empty());
            return Ok(());
        }

        prop_assert!(set.smart_interval.is_some());
        prop_assert!(set.reliability.smart_interval > 0.0);
        prop_assert!(set.reliability.smart_interval <= INTERVAL_RELIABILITY_CAP);
        if n < 3 {
            prop_assert_eq!(set.reliability.periodicity, 0.0);
        }
        if n < 5 {
            prop_assert_eq!(set.reliability.dynamic_patterns, 0.0);
            prop_assert!(set.dynamic_patterns.is_none());
        }

        let max = Algorithm::ALL
            .iter()
            .filter(|a| set.prediction(**a).is_some())
            .map(|a| set.reliability.get(*a))
            .fold(0.0_f64, f64::max);
        prop_assert_eq!(set.best_reliability, max);

        let best = set.best_algorithm.expect("interval always predicts for n >= 2");
        prop_assert_eq!(set.best_prediction, set.prediction(best));
        // No earlier algorithm ties the winner.
        for earlier in Algorithm::ALL.iter().take_while(|a| **a != best) {
            if set.prediction(*earlier).is_some() {
                prop_assert!(set.reliability.get(*earlier) < set.best_reliability);
            }
        }
    }

    #[test]
    fn ensemble_is_idempotent((history, now) in arb_case()) {
        let engine = PredictionEngine::default();
        prop_assert_eq!(engine.predict(&history, now), engine.predict(&history, now));
    }
}
