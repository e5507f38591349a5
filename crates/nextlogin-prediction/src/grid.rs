//! Weekday × hour frequency accumulation used for periodicity detection.

use crate::stats::argmax_positive;

pub const WEEKDAYS: usize = 7;
pub const HOURS: usize = 24;

/// A 7×24 matrix of non-negative scores (weekday Sunday = 0, hour 0–23) with
/// its two marginals.
#[derive(Debug, Clone, PartialEq)]
pub struct FrequencyGrid {
    cells: [[f64; HOURS]; WEEKDAYS],
    weekdays: [f64; WEEKDAYS],
    hours: [f64; HOURS],
}

impl FrequencyGrid {
    pub fn new() -> Self {
        Self {
            cells: [[0.0; HOURS]; WEEKDAYS],
            weekdays: [0.0; WEEKDAYS],
            hours: [0.0; HOURS],
        }
    }

    /// Add `weight` to the cell and both marginals. Out-of-range indices and
    /// negative weights are ignored.
    pub fn add(&mut self, weekday: usize, hour: usize, weight: f64) {
        if weekday >= WEEKDAYS || hour >= HOURS || weight < 0.0 {
            return;
        }
        self.cells[weekday][hour] += weight;
        self.weekdays[weekday] += weight;
        self.hours[hour] += weight;
    }

    pub fn cell(&self, weekday: usize, hour: usize) -> f64 {
        self.cells
            .get(weekday)
            .and_then(|row| row.get(hour))
            .copied()
            .unwrap_or(0.0)
    }

    pub fn weekday_scores(&self) -> &[f64; WEEKDAYS] {
        &self.weekdays
    }

    pub fn hour_scores(&self) -> &[f64; HOURS] {
        &self.hours
    }

    /// Highest-scoring weekday, `None` when the marginal is all zero.
    pub fn best_weekday(&self) -> Option<usize> {
        argmax_positive(&self.weekdays)
    }

    /// Highest-scoring hour, `None` when the marginal is all zero.
    pub fn best_hour(&self) -> Option<usize> {
        argmax_positive(&self.hours)
    }

    /// Maximum cell scanning weekday-major then hour. The first maximum wins;
    /// `None` when every cell is zero.
    pub fn peak_cell(&self) -> Option<(usize, usize)> {
        let mut best: Option<(usize, usize, f64)> = None;
        for (day, row) in self.cells.iter().enumerate() {
            for (hour, &score) in row.iter().enumerate() {
                if score > best.map_or(0.0, |(_, _, b)| b) {
                    best = Some((day, hour, score));
                }
            }
        }
        best.map(|(day, hour, _)| (day, hour))
    }
}

impl Default for FrequencyGrid {
    fn default() -> Self {
        Self::new()
    }
}
