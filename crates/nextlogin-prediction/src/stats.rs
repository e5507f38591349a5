//! Small numeric helpers shared by the forecasters.

/// Exact middle of `sorted`, or the mean of the two central values for even
/// lengths. `None` for an empty slice.
pub(crate) fn median(sorted: &[f64]) -> Option<f64> {
    let len = sorted.len();
    if len == 0 {
        return None;
    }
    let mid = len / 2;
    if len % 2 == 0 {
        Some((sorted[mid - 1] + sorted[mid]) / 2.0)
    } else {
        Some(sorted[mid])
    }
}

pub(crate) fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// Index of the largest strictly positive value; the first one wins ties.
pub(crate) fn argmax_positive(values: &[f64]) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (i, &v) in values.iter().enumerate() {
        if v > best.map_or(0.0, |(_, b)| b) {
            best = Some((i, v));
        }
    }
    best.map(|(i, _)| i)
}

/// Most frequent value. Among equally frequent values, the one seen first wins.
pub(crate) fn mode_first_seen(values: &[i64]) -> Option<i64> {
    let mut counts: Vec<(i64, usize)> = Vec::new();
    for &v in values {
        match counts.iter_mut().find(|(value, _)| *value == v) {
            Some((_, count)) => *count += 1,
            None => counts.push((v, 1)),
        }
    }
    let mut best: Option<(i64, usize)> = None;
    for (value, count) in counts {
        if count > best.map_or(0, |(_, c)| c) {
            best = Some((value, count));
        }
    }
    best.map(|(value, _)| value)
}
