// File: crates/epicurve-core/src/axis.rs
// Summary: Tick layout for the three axes (time bottom, value left, percent right).

use crate::locale::{format_percent, format_value, Locale};
use crate::scale::{TimeScale, ValueScale};

/// One tick: a plot-relative pixel position along the axis plus its label.
#[derive(Clone, Debug, PartialEq)]
pub struct Tick {
    pub pos: f32,
    pub label: String,
}

/// Inclusive evenly spaced values from `start` to `end`.
pub fn linspace(start: f64, end: f64, steps: usize) -> Vec<f64> {
    if steps < 2 {
        return vec![start, end];
    }
    let step = (end - start) / (steps as f64 - 1.0);
    (0..steps).map(|i| start + step * i as f64).collect()
}

/// `count` date ticks spread over the time domain, labeled `mmm yyyy`.
/// A zero-span domain collapses to a single tick at the range start.
pub fn time_ticks(scale: &TimeScale, count: usize, locale: &Locale) -> Vec<Tick> {
    if scale.span_days() <= 0 {
        return vec![Tick { pos: 0.0, label: locale.month_year(scale.min()) }];
    }
    linspace(0.0, 1.0, count.max(2))
        .into_iter()
        .map(|f| {
            let date = scale.date_at(f);
            Tick { pos: scale.to_px(date), label: locale.month_year(date) }
        })
        .collect()
}

/// Ticks over `[0, vmax]` split into `intervals`, with plain numeric labels.
pub fn value_ticks(scale: &ValueScale, intervals: usize) -> Vec<Tick> {
    linspace(0.0, scale.vmax(), intervals.max(1) + 1)
        .into_iter()
        .map(|v| Tick { pos: scale.to_px(v), label: format_value(v) })
        .collect()
}

/// Like `value_ticks` but each label carries the `%` suffix.
pub fn percent_ticks(scale: &ValueScale, intervals: usize) -> Vec<Tick> {
    linspace(0.0, scale.vmax(), intervals.max(1) + 1)
        .into_iter()
        .map(|v| Tick { pos: scale.to_px(v), label: format_percent(v) })
        .collect()
}
