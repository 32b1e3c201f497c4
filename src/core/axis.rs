use serde::{Deserialize, Serialize};

use crate::core::{PlotArea, ValueDomain};

/// Horizontal gridline position with the value it represents.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValueTick {
    pub value: f64,
    pub y: f64,
}

/// Evenly spaced ticks from `domain.min()` to `domain.max()` inclusive.
///
/// `intervals` gaps produce `intervals + 1` ticks. A degenerate domain yields
/// a single tick at mid height.
#[must_use]
pub fn value_ticks(domain: ValueDomain, plot: PlotArea, intervals: usize) -> Vec<ValueTick> {
    if domain.is_degenerate() || intervals == 0 {
        return vec![ValueTick {
            value: domain.min(),
            y: domain.value_to_y(domain.min(), plot),
        }];
    }

    (0..=intervals)
        .map(|index| {
            let value = domain.value_at(index as f64 / intervals as f64);
            ValueTick {
                value,
                y: domain.value_to_y(value, plot),
            }
        })
        .collect()
}

/// Compact tick label: integers without decimals, otherwise up to two
/// decimals with trailing zeros removed. Magnitudes from 1e15 up use
/// scientific notation.
#[must_use]
pub fn format_tick_value(value: f64) -> String {
    if value.abs() >= 1e15 {
        return format!("{value:e}");
    }
    // Adding zero folds -0.0 into 0.0.
    let rounded = (value * 100.0).round() / 100.0 + 0.0;
    if rounded.fract() == 0.0 {
        return format!("{rounded:.0}");
    }
    let text = format!("{rounded:.2}");
    text.trim_end_matches('0').trim_end_matches('.').to_owned()
}
