// File: crates/epicurve-core/src/scale.rs
// Summary: Time (X) and Value (Y) scale transforms for the plot rect.

use chrono::NaiveDate;

use crate::data::{DataSet, SeriesColumn};

/// Horizontal time scale mapping `[min, max]` dates onto `[0, width]` pixels,
/// linear in elapsed days.
#[derive(Clone, Copy, Debug)]
pub struct TimeScale {
    min: NaiveDate,
    max: NaiveDate,
    width: f32,
}

impl TimeScale {
    pub fn new(min: NaiveDate, max: NaiveDate, width: f32) -> Self {
        Self { min, max: max.max(min), width: width.max(0.0) }
    }

    pub fn from_dataset(data: &DataSet, width: f32) -> Option<Self> {
        Some(Self::new(data.min_date()?, data.max_date()?, width))
    }

    pub fn min(&self) -> NaiveDate { self.min }
    pub fn max(&self) -> NaiveDate { self.max }

    pub fn span_days(&self) -> i64 {
        self.max.signed_duration_since(self.min).num_days()
    }

    /// A zero-span domain maps every date to the range start.
    #[inline]
    pub fn to_px(&self, date: NaiveDate) -> f32 {
        let span = self.span_days();
        if span <= 0 {
            return 0.0;
        }
        let elapsed = date.signed_duration_since(self.min).num_days() as f32;
        elapsed / span as f32 * self.width
    }

    /// Date at a fraction of elapsed days, rounded to the nearest day.
    pub fn date_at(&self, fraction: f64) -> NaiveDate {
        let days = (self.span_days() as f64 * fraction).round() as i64;
        self.min + chrono::Duration::days(days)
    }

    /// Whether a date lies inside the loaded time domain.
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.min && date <= self.max
    }
}

/// Vertical value scale mapping `[0, vmax]` onto `[height, 0]` pixels
/// (inverted, top is the high value).
#[derive(Clone, Copy, Debug)]
pub struct ValueScale {
    vmax: f64,
    height: f32,
}

impl ValueScale {
    pub fn new(vmax: f64, height: f32) -> Self {
        Self { vmax, height: height.max(0.0) }
    }

    /// Left-axis scale: domain ceiling is the column maximum rounded up to an
    /// axis-friendly number.
    pub fn left_for(data: &DataSet, height: f32) -> Self {
        let vmax = nice_ceil(data.max_value(SeriesColumn::Deaths7d).unwrap_or(0.0));
        Self::new(vmax, height)
    }

    /// Right-axis scale: fixed `[0, 100]` percent domain, independent of data.
    pub fn percent(height: f32) -> Self {
        Self::new(100.0, height)
    }

    pub fn vmax(&self) -> f64 { self.vmax }

    /// A zero-span domain maps every value to the range start (the bottom).
    #[inline]
    pub fn to_px(&self, v: f64) -> f32 {
        if self.vmax <= 0.0 {
            return self.height;
        }
        self.height - (v / self.vmax) as f32 * self.height
    }
}

/// Round up to the nearest 1/2/5 x 10^k at or above `v`; non-positive input
/// yields 1.0 so a flat series still gets a drawable axis.
pub fn nice_ceil(v: f64) -> f64 {
    if !v.is_finite() || v <= 0.0 {
        return 1.0;
    }
    let exp = v.log10().floor();
    let base = 10f64.powf(exp);
    for m in [1.0, 2.0, 5.0, 10.0] {
        let candidate = m * base;
        if candidate >= v - candidate * 1e-9 {
            return candidate;
        }
    }
    10.0 * base
}
