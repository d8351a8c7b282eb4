use std::borrow::Cow;

use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};

/// Whether a series (and the averages computed from it) runs oldest-to-latest
/// or latest-to-oldest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Orientation {
    OldestFirst,
    LatestFirst,
}

/// Present the series oldest-first regardless of how the caller ordered it.
pub(crate) fn normalize(series: &[BigDecimal], orientation: Orientation) -> Cow<'_, [BigDecimal]> {
    match orientation {
        Orientation::OldestFirst => Cow::Borrowed(series),
        Orientation::LatestFirst => Cow::Owned(series.iter().rev().cloned().collect()),
    }
}

/// Restore the caller's ordering on the way out.
pub(crate) fn denormalize(mut averages: Vec<BigDecimal>, orientation: Orientation) -> Vec<BigDecimal> {
    if orientation == Orientation::LatestFirst {
        averages.reverse();
    }
    averages
}
