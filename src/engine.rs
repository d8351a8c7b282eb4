use bigdecimal::{BigDecimal, Zero};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::ComputeError;
use crate::orientation::{self, Orientation};
use crate::weights::{LinearWeighted, Uniform, WeightScheme};

/// Which moving-average family to run; the selector a wrapping CLI or service
/// deserializes and dispatches on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Mode {
    Simple,
    Cumulative,
    Weighted,
}

/// Simple moving average: uniform weights over a fixed window.
pub fn simple(
    series: &[BigDecimal],
    period: usize,
    orientation: Orientation,
) -> Result<Vec<BigDecimal>, ComputeError> {
    compute(series, period, &Uniform, orientation)
}

/// Linearly weighted moving average with the most recent value heaviest.
pub fn linear_weighted(
    series: &[BigDecimal],
    period: usize,
    orientation: Orientation,
) -> Result<Vec<BigDecimal>, ComputeError> {
    compute(series, period, &LinearWeighted::default(), orientation)
}

/// Dispatch on a deserialized mode selector. `period` is ignored for
/// [`Mode::Cumulative`], whose window is the growing prefix of the series.
pub fn by_mode(
    series: &[BigDecimal],
    mode: Mode,
    period: usize,
    orientation: Orientation,
) -> Result<Vec<BigDecimal>, ComputeError> {
    match mode {
        Mode::Simple => simple(series, period, orientation),
        Mode::Weighted => linear_weighted(series, period, orientation),
        Mode::Cumulative => cumulative(series, orientation),
    }
}

/// Moving average of `series` over a fixed window of `period` values.
///
/// Returns one average per full window, `series.len() - period + 1` in all,
/// ordered the same way the input was. The call is a pure function of its
/// arguments; concurrent calls share nothing.
pub fn compute(
    series: &[BigDecimal],
    period: usize,
    scheme: &dyn WeightScheme,
    orientation: Orientation,
) -> Result<Vec<BigDecimal>, ComputeError> {
    if period == 0 {
        return Err(ComputeError::InvalidPeriod);
    }
    if series.len() < period {
        return Err(ComputeError::InsufficientData {
            len: series.len(),
            period,
        });
    }

    // The total only depends on the window size, so the first window's check
    // covers every window of the pass.
    let total = scheme.total_weight(period);
    if total.is_zero() {
        return Err(ComputeError::DegenerateWeights { period });
    }

    debug!(
        points = series.len(),
        period,
        incremental = scheme.supports_incremental_update(),
        "sliding window pass"
    );

    let data = orientation::normalize(series, orientation);
    let averages = if scheme.supports_incremental_update() {
        slide_incremental(&data, period, scheme, &total)
    } else {
        recompute_each(&data, period, scheme, &total)
    };
    Ok(orientation::denormalize(averages, orientation))
}

/// Cumulative moving average: output position `i` averages the oldest `i + 1`
/// values. The running sum only ever appends; nothing is evicted.
pub fn cumulative(
    series: &[BigDecimal],
    orientation: Orientation,
) -> Result<Vec<BigDecimal>, ComputeError> {
    if series.is_empty() {
        return Err(ComputeError::InsufficientData { len: 0, period: 1 });
    }

    debug!(points = series.len(), "cumulative pass");

    let data = orientation::normalize(series, orientation);
    let mut running = BigDecimal::zero();
    let mut averages = Vec::with_capacity(data.len());
    for (count, value) in data.iter().enumerate() {
        running = running + value;
        averages.push(&running / BigDecimal::from(count as u64 + 1));
    }
    Ok(orientation::denormalize(averages, orientation))
}

// Two running accumulators cover every affine scheme: `plain` = sum(value)
// and `positional` = sum(position * value). The window's weighted sum is then
// w(0) * plain + step * positional, where step is the constant weight
// difference between adjacent positions (0 for uniform, +-1 for linear).
fn slide_incremental(
    data: &[BigDecimal],
    period: usize,
    scheme: &dyn WeightScheme,
    total: &BigDecimal,
) -> Vec<BigDecimal> {
    let base = scheme.weight_at(0, period);
    let step = if period > 1 {
        scheme.weight_at(1, period) - &base
    } else {
        BigDecimal::zero()
    };

    let mut plain = BigDecimal::zero();
    let mut positional = BigDecimal::zero();
    for (position, value) in data[..period].iter().enumerate() {
        plain = plain + value;
        positional = positional + BigDecimal::from(position as u64) * value;
    }

    let last_position = BigDecimal::from(period as u64 - 1);
    let mut averages = Vec::with_capacity(data.len() - period + 1);
    for start in 0..=data.len() - period {
        let weighted = &base * &plain + &step * &positional;
        averages.push(weighted / total);

        if start + period < data.len() {
            let leaving = &data[start];
            let entering = &data[start + period];
            // The leaving value sat at position 0 and contributed nothing to
            // `positional`; survivors shift one position down while the
            // entering value lands at position period - 1.
            positional = positional - &plain + leaving + &last_position * entering;
            plain = plain - leaving + entering;
        }
    }

    averages
}

// Correctness-first fallback for schemes without a slide recurrence: every
// window is re-summed with weight_at, O(period) per emitted average.
fn recompute_each(
    data: &[BigDecimal],
    period: usize,
    scheme: &dyn WeightScheme,
    total: &BigDecimal,
) -> Vec<BigDecimal> {
    let mut averages = Vec::with_capacity(data.len() - period + 1);
    for window in data.windows(period) {
        let weighted = window
            .iter()
            .enumerate()
            .fold(BigDecimal::zero(), |acc, (position, value)| {
                acc + scheme.weight_at(position, period) * value
            });
        averages.push(weighted / total);
    }
    averages
}
