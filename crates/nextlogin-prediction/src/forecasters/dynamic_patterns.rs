use chrono::{DateTime, Duration, NaiveDate, Timelike, Utc};
use nextlogin_core::config::PredictionConfig;
use nextlogin_core::constants::{DEFAULT_INTERVAL_SECS, MIN_LOGINS_DYNAMIC};
use nextlogin_core::timefmt;
use nextlogin_core::{Algorithm, Forecaster, LoginHistory};
use tracing::debug;

use crate::calendar::{add_days, at_hour, hour_index};
use crate::grid::HOURS;
use crate::stats::{mean, mode_first_seen};

/// How many popular hours are considered for the next slot.
const TOP_HOURS: usize = 3;
/// Overdue when the silence exceeds this multiple of the recent average gap.
const OVERDUE_FACTOR: f64 = 1.5;
/// Fraction of the recent average gap to wait when overdue.
const OVERDUE_FRACTION: f64 = 0.25;

/// Recent-window cadence, calendar-day gap mode and popular hours.
#[derive(Debug, Clone)]
pub struct DynamicPatternForecaster {
    recent_window: usize,
}

impl DynamicPatternForecaster {
    pub fn new(config: &PredictionConfig) -> Self {
        Self {
            recent_window: config.dynamic_recent_window.max(1),
        }
    }

    /// Mean gap across the last `recent_window` logins, or one day when the
    /// window holds fewer than two.
    pub fn recent_average_gap(&self, history: &LoginHistory) -> f64 {
        let stamps = history.epoch_seconds();
        let window = &stamps[stamps.len().saturating_sub(self.recent_window)..];
        let gaps: Vec<f64> = window.windows(2).map(|w| (w[1] - w[0]) as f64).collect();
        mean(&gaps).unwrap_or(DEFAULT_INTERVAL_SECS)
    }

    /// Most frequent gap, in whole days, between distinct UTC login dates.
    /// Defaults to 1.
    pub fn most_common_day_gap(history: &LoginHistory) -> i64 {
        let mut days: Vec<NaiveDate> = history
            .timestamps()
            .iter()
            .map(|t| t.date_naive())
            .collect();
        days.sort_unstable();
        days.dedup();

        let gaps: Vec<i64> = days
            .windows(2)
            .map(|w| (w[1] - w[0]).num_days())
            .filter(|&d| d > 0)
            .collect();
        mode_first_seen(&gaps).unwrap_or(1)
    }

    /// The three most frequent login hours out of all 24, ties by hour
    /// ascending. Unused hours fill the list when fewer than three are seen.
    pub fn top_hours(history: &LoginHistory) -> Vec<u32> {
        let mut counts = [0usize; HOURS];
        for login in history.timestamps() {
            counts[hour_index(login)] += 1;
        }
        let mut hours: Vec<(usize, usize)> = counts.iter().copied().enumerate().collect();
        hours.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
        hours
            .into_iter()
            .take(TOP_HOURS)
            .map(|(hour, _)| hour as u32)
            .collect()
    }
}

impl Default for DynamicPatternForecaster {
    fn default() -> Self {
        Self::new(&PredictionConfig::default())
    }
}

impl Forecaster for DynamicPatternForecaster {
    fn algorithm(&self) -> Algorithm {
        Algorithm::DynamicPatterns
    }

    fn min_logins(&self) -> usize {
        MIN_LOGINS_DYNAMIC
    }

    fn forecast(&self, history: &LoginHistory, now: DateTime<Utc>) -> Option<DateTime<Utc>> {
        if history.len() < self.min_logins() {
            return None;
        }

        let avg_interval = self.recent_average_gap(history);
        let since_last = (now - history.last()).num_seconds() as f64;
        if avg_interval > 0.0 && since_last > avg_interval * OVERDUE_FACTOR {
            debug!(avg_interval, since_last, "dynamic: overdue short-circuit");
            return timefmt::from_epoch(now.timestamp() + (avg_interval * OVERDUE_FRACTION) as i64);
        }

        let most_common_diff = Self::most_common_day_gap(history);
        let top_hours = Self::top_hours(history);
        let current_hour = now.hour();
        let today = now.date_naive();

        let (next_hour, base_date) = match top_hours.iter().find(|&&h| h > current_hour) {
            Some(&hour) => (hour, today),
            // Every popular hour has passed today.
            None => (*top_hours.first()?, add_days(today, 1)?),
        };

        let mut candidate = at_hour(base_date, next_hour)?;
        if candidate <= now {
            candidate = candidate.checked_add_signed(Duration::days(most_common_diff))?;
            if candidate <= now {
                candidate = candidate.checked_add_signed(Duration::days(1))?;
            }
        }

        debug!(
            next_hour,
            most_common_diff,
            ?top_hours,
            "dynamic: slot-based prediction"
        );
        Some(candidate)
    }
}
