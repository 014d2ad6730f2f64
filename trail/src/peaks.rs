//! Prominence-based peak detection for 1-D series.
//!
//! A peak's prominence is its height above the higher of the two
//! lowest points reached, on either side, before the series climbs
//! above the peak again (or runs out). Filtering on prominence keeps
//! summits and drops the noise bumps on their flanks, which a plain
//! sign-change detector would report.

use num_traits::Float;

/// A local maximum of a series.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Peak<T> {
    /// Index of the peak; the middle sample of a flat-topped peak.
    pub index: usize,
    pub prominence: T,
}

/// Returns the indices of all local maxima of `series`.
///
/// Flat tops count as one maximum, reported at their midpoint
/// (rounded down). The first and last samples are never maxima.
pub fn local_maxima<T: Float>(series: &[T]) -> Vec<usize> {
    let mut maxima = Vec::new();
    if series.len() < 3 {
        return maxima;
    }
    let last = series.len() - 1;
    let mut i = 1;
    while i < last {
        if series[i - 1] < series[i] {
            let mut ahead = i + 1;
            while ahead < last && series[ahead] == series[i] {
                ahead += 1;
            }
            if series[ahead] < series[i] {
                maxima.push((i + ahead - 1) / 2);
                i = ahead;
            }
        }
        i += 1;
    }
    maxima
}

/// Returns the topographic prominence of the sample at `peak`.
pub fn prominence<T: Float>(series: &[T], peak: usize) -> T {
    let height = series[peak];

    let mut left_min = height;
    for &value in series[..peak].iter().rev() {
        if value > height {
            break;
        }
        left_min = left_min.min(value);
    }

    let mut right_min = height;
    for &value in &series[peak + 1..] {
        if value > height {
            break;
        }
        right_min = right_min.min(value);
    }

    height - left_min.max(right_min)
}

/// Returns every local maximum whose prominence is at least
/// `min_prominence`, in series order.
pub fn find_peaks<T: Float>(series: &[T], min_prominence: T) -> Vec<Peak<T>> {
    local_maxima(series)
        .into_iter()
        .map(|index| Peak {
            index,
            prominence: prominence(series, index),
        })
        .filter(|peak| peak.prominence >= min_prominence)
        .collect()
}

/// Returns every local minimum whose prominence (depth) is at least
/// `min_prominence`, in series order.
pub fn find_valleys<T: Float>(series: &[T], min_prominence: T) -> Vec<Peak<T>> {
    let negated: Vec<T> = series.iter().map(|&value| -value).collect();
    find_peaks(&negated, min_prominence)
}
