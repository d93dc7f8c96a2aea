use derive_getters::Getters;
use derive_new::new;

use crate::error::StockError;

#[derive(Clone, Copy, Debug, Getters, PartialEq, new)]
pub struct Bin {
    lower: f64,
    upper: f64,
    count: usize,
}

fn bin_edges(min: f64, max: f64, bins: usize) -> Vec<f64> {
    let step = (max - min) / bins as f64;
    let mut edges: Vec<f64> = (0..=bins).map(|i| i as f64 * step + min).collect();
    edges[bins] = max;
    edges
}

/// Buckets are half open except the last, which also holds the maximum. A value
/// on a computed edge goes to the bucket that edge opens, as numpy does. Equal
/// values widen the range by 0.5 on each side.
pub fn histogram(values: &[f64], bins: usize) -> Result<Vec<Bin>, StockError> {
    if bins == 0 {
        return Err(StockError::InvalidBins);
    }

    let finite: Vec<f64> = values.iter().copied().filter(|v| v.is_finite()).collect();
    if finite.is_empty() {
        return Err(StockError::NoReturns);
    }

    let mut min = finite.iter().copied().fold(f64::INFINITY, f64::min);
    let mut max = finite.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    if min == max {
        min -= 0.5;
        max += 0.5;
    }

    let edges = bin_edges(min, max, bins);
    let norm = bins as f64 / (max - min);
    let mut counts = vec![0usize; bins];

    for value in finite {
        let mut index = (((value - min) * norm) as usize).min(bins - 1);
        if value < edges[index] && index > 0 {
            index -= 1;
        } else if value >= edges[index + 1] && index != bins - 1 {
            index += 1;
        }
        counts[index] += 1;
    }

    Ok(counts
        .into_iter()
        .enumerate()
        .map(|(i, count)| Bin::new(edges[i], edges[i + 1], count))
        .collect())
}
