// File: crates/epicurve-core/src/data.rs
// Summary: Data model for the two-series timeline (daily rows keyed by date).

use chrono::NaiveDate;

/// Which of the two value columns a series reads.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SeriesColumn {
    /// 7-day rolling average of daily deaths (left axis).
    Deaths7d,
    /// Share of the population vaccinated, 0..=100 (right axis).
    VaccinatedPct,
}

/// One daily row. Either value may be missing (blank cell in the source file);
/// present values are finite.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DataPoint {
    pub date: NaiveDate,
    pub deaths_7d: Option<f64>,
    pub vaccinated_pct: Option<f64>,
}

impl DataPoint {
    pub fn value(&self, col: SeriesColumn) -> Option<f64> {
        match col {
            SeriesColumn::Deaths7d => self.deaths_7d,
            SeriesColumn::VaccinatedPct => self.vaccinated_pct,
        }
    }
}

/// Ordered sequence of rows, ascending by date, no duplicate dates.
/// Built once by the loader and immutable afterwards; a resize re-renders
/// from the same in-memory set.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DataSet {
    points: Vec<DataPoint>,
}

impl DataSet {
    /// Wrap rows that are already sorted ascending with unique dates.
    /// The loader is the usual producer; `from_unsorted` normalizes arbitrary input.
    pub fn new(points: Vec<DataPoint>) -> Self {
        Self { points }
    }

    /// Sort by date and drop duplicate dates, keeping the first occurrence.
    pub fn from_unsorted(mut points: Vec<DataPoint>) -> Self {
        points.sort_by_key(|p| p.date);
        points.dedup_by_key(|p| p.date);
        Self { points }
    }

    pub fn len(&self) -> usize { self.points.len() }
    pub fn is_empty(&self) -> bool { self.points.is_empty() }
    pub fn points(&self) -> &[DataPoint] { &self.points }

    pub fn min_date(&self) -> Option<NaiveDate> {
        self.points.first().map(|p| p.date)
    }

    pub fn max_date(&self) -> Option<NaiveDate> {
        self.points.last().map(|p| p.date)
    }

    /// Largest defined, finite value in a column.
    pub fn max_value(&self, col: SeriesColumn) -> Option<f64> {
        self.points
            .iter()
            .filter_map(|p| p.value(col))
            .filter(|v| v.is_finite())
            .fold(None, |acc, v| Some(acc.map_or(v, |m: f64| m.max(v))))
    }

    /// Last row with a defined, finite value in a column.
    pub fn last_defined(&self, col: SeriesColumn) -> Option<(NaiveDate, f64)> {
        self.points
            .iter()
            .rev()
            .find_map(|p| p.value(col).filter(|v| v.is_finite()).map(|v| (p.date, v)))
    }

    /// Maximal contiguous runs of defined, finite values in a column.
    /// A missing or non-finite value ends the current run; the line renderer
    /// draws each run independently instead of interpolating across the gap.
    pub fn defined_runs(&self, col: SeriesColumn) -> Vec<Vec<(NaiveDate, f64)>> {
        let mut runs = Vec::new();
        let mut current: Vec<(NaiveDate, f64)> = Vec::new();
        for p in &self.points {
            match p.value(col).filter(|v| v.is_finite()) {
                Some(v) => current.push((p.date, v)),
                None => {
                    if !current.is_empty() {
                        runs.push(std::mem::take(&mut current));
                    }
                }
            }
        }
        if !current.is_empty() {
            runs.push(current);
        }
        runs
    }
}
