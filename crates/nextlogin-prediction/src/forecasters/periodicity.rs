use chrono::{DateTime, Utc};
use nextlogin_core::constants::MIN_LOGINS_PERIODICITY;
use nextlogin_core::{Algorithm, Forecaster, LoginHistory};
use tracing::debug;

use crate::calendar::{add_days, at_hour, hour_index, weekday_index};
use crate::grid::{FrequencyGrid, WEEKDAYS};

/// Weekday × hour frequency analysis: predicts the next occurrence of the
/// user's dominant weekly slot.
#[derive(Debug, Clone, Default)]
pub struct PeriodicityForecaster;

impl PeriodicityForecaster {
    pub fn new() -> Self {
        Self
    }

    /// Accumulate recency weights `1 + i/n` into a grid.
    pub fn build_grid(history: &LoginHistory) -> FrequencyGrid {
        let n = history.len() as f64;
        let mut grid = FrequencyGrid::new();
        for (i, login) in history.timestamps().iter().enumerate() {
            let weight = 1.0 + i as f64 / n;
            grid.add(weekday_index(login), hour_index(login), weight);
        }
        grid
    }

    /// The (weekday, hour) slot to predict. Falls back to the marginal
    /// argmaxes, then to `now`'s own slot, when the grid is empty.
    pub fn target_slot(grid: &FrequencyGrid, now: DateTime<Utc>) -> (usize, usize) {
        let best_weekday = grid.best_weekday().unwrap_or_else(|| weekday_index(&now));
        let best_hour = grid.best_hour().unwrap_or_else(|| hour_index(&now));
        grid.peak_cell().unwrap_or((best_weekday, best_hour))
    }
}

impl Forecaster for PeriodicityForecaster {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Periodicity
    }

    fn min_logins(&self) -> usize {
        MIN_LOGINS_PERIODICITY
    }

    fn forecast(&self, history: &LoginHistory, now: DateTime<Utc>) -> Option<DateTime<Utc>> {
        if history.len() < self.min_logins() {
            return None;
        }

        let grid = Self::build_grid(history);
        let (target_weekday, target_hour) = Self::target_slot(&grid, now);

        let current_weekday = weekday_index(&now);
        let current_hour = hour_index(&now);
        let mut days_ahead = (target_weekday + WEEKDAYS - current_weekday) % WEEKDAYS;
        // Today's slot has already passed: go to next week.
        if days_ahead == 0 && target_hour <= current_hour {
            days_ahead = WEEKDAYS;
        }

        debug!(target_weekday, target_hour, days_ahead, "periodicity: dominant slot");
        let date = add_days(now.date_naive(), days_ahead as i64)?;
        at_hour(date, target_hour as u32)
    }
}
