//! Small numeric helpers over latency/uptime samples.
//!
//! Callers guarantee non-empty input; regions with no records never reach here.

/// Arithmetic mean
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Percentile `p` (0..=100) with linear interpolation between closest ranks.
///
/// The rank is `p / 100 * (n - 1)` over the sorted samples; a fractional
/// rank interpolates between the two bracketing values.
pub fn percentile(values: &[f64], p: f64) -> f64 {
    if values.is_empty() {
        return 0.0;
    }

    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));

    let rank = (p / 100.0).clamp(0.0, 1.0) * (sorted.len() - 1) as f64;
    let lower = rank.floor() as usize;
    let upper = rank.ceil() as usize;
    let weight = rank - lower as f64;

    lerp(sorted[lower], sorted[upper], weight)
}

/// Linear interpolation from the nearer endpoint, so `t >= 0.5` is anchored on `b`.
fn lerp(a: f64, b: f64, t: f64) -> f64 {
    let diff = b - a;
    if t >= 0.5 {
        b - diff * (1.0 - t)
    } else {
        a + diff * t
    }
}

/// Number of samples strictly above `threshold`
pub fn count_breaches(values: &[f64], threshold: f64) -> u64 {
    values.iter().filter(|&&v| v > threshold).count() as u64
}
