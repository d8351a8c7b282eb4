//! Moving-average smoothing over arbitrary-precision series.
//!
//! Series values are [`bigdecimal::BigDecimal`], so the averages carry no
//! binary-float drift. Three families are supported: simple (uniform fixed
//! window), cumulative (growing window), and weighted (per-position weights),
//! with series supplied either oldest-first or latest-first.

pub mod engine;
pub mod errors;
pub mod orientation;
pub mod weights;

pub use engine::{by_mode, compute, cumulative, linear_weighted, simple, Mode};
pub use errors::ComputeError;
pub use orientation::Orientation;
pub use weights::{Custom, LinearWeighted, Uniform, WeightScheme};
