use bigdecimal::{BigDecimal, One, Zero};

/// Per-position weighting applied inside a window.
///
/// Position 0 is always the oldest value in the window and `len - 1` the most
/// recent, regardless of the orientation the caller handed the series in.
pub trait WeightScheme {
    /// Weight of the value at `position` within a window of `len` values.
    fn weight_at(&self, position: usize, len: usize) -> BigDecimal;

    /// Sum of all weights for a window of `len` values.
    fn total_weight(&self, len: usize) -> BigDecimal {
        (0..len).fold(BigDecimal::zero(), |acc, position| {
            acc + self.weight_at(position, len)
        })
    }

    /// True when the weights are affine in the window position, which lets the
    /// engine slide the window in O(1) per step instead of re-summing it.
    fn supports_incremental_update(&self) -> bool {
        false
    }
}

/// Every value weighs the same; backs the simple and cumulative averages.
#[derive(Debug, Clone, Copy, Default)]
pub struct Uniform;

impl WeightScheme for Uniform {
    fn weight_at(&self, _position: usize, _len: usize) -> BigDecimal {
        BigDecimal::one()
    }

    fn total_weight(&self, len: usize) -> BigDecimal {
        BigDecimal::from(len as u64)
    }

    fn supports_incremental_update(&self) -> bool {
        true
    }
}

/// Weights grow linearly across the window, `1..=len`.
///
/// The default convention puts the highest weight on the most recent value;
/// [`LinearWeighted::oldest_heavy`] flips it for domains that discount
/// recency instead.
#[derive(Debug, Clone, Copy)]
pub struct LinearWeighted {
    latest_heaviest: bool,
}

impl LinearWeighted {
    pub fn latest_heavy() -> Self {
        Self {
            latest_heaviest: true,
        }
    }

    pub fn oldest_heavy() -> Self {
        Self {
            latest_heaviest: false,
        }
    }
}

impl Default for LinearWeighted {
    fn default() -> Self {
        Self::latest_heavy()
    }
}

impl WeightScheme for LinearWeighted {
    fn weight_at(&self, position: usize, len: usize) -> BigDecimal {
        let weight = if self.latest_heaviest {
            position as u64 + 1
        } else {
            (len - position) as u64
        };
        BigDecimal::from(weight)
    }

    fn total_weight(&self, len: usize) -> BigDecimal {
        let len = len as u64;
        BigDecimal::from(len * (len + 1) / 2)
    }

    fn supports_incremental_update(&self) -> bool {
        true
    }
}

/// Caller-supplied weighting. No recurrence is assumed, so the engine
/// recomputes every window in full.
pub struct Custom<F>
where
    F: Fn(usize, usize) -> BigDecimal,
{
    weight_fn: F,
}

impl<F> Custom<F>
where
    F: Fn(usize, usize) -> BigDecimal,
{
    pub fn new(weight_fn: F) -> Self {
        Self { weight_fn }
    }
}

impl<F> WeightScheme for Custom<F>
where
    F: Fn(usize, usize) -> BigDecimal,
{
    fn weight_at(&self, position: usize, len: usize) -> BigDecimal {
        (self.weight_fn)(position, len)
    }
}
