// File: crates/epicurve-core/src/locale.rs
// Summary: Month-name tables and label formatting for axis ticks.

use chrono::{Datelike, NaiveDate};

/// Abbreviated month names for tick labels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Locale {
    pub name: &'static str,
    months: [&'static str; 12],
}

impl Locale {
    /// Chilean Spanish, the chart's default.
    pub fn es_cl() -> Self {
        Self {
            name: "es-CL",
            months: [
                "ene", "feb", "mar", "abr", "may", "jun",
                "jul", "ago", "sep", "oct", "nov", "dic",
            ],
        }
    }

    pub fn en_us() -> Self {
        Self {
            name: "en-US",
            months: [
                "jan", "feb", "mar", "apr", "may", "jun",
                "jul", "aug", "sep", "oct", "nov", "dec",
            ],
        }
    }

    /// Abbreviated month/year tick label, e.g. `feb 2021`.
    pub fn month_year(&self, date: NaiveDate) -> String {
        format!("{} {}", self.months[date.month0() as usize], date.year())
    }
}

impl Default for Locale {
    fn default() -> Self {
        Self::es_cl()
    }
}

/// Percent label with up to two decimals, trailing zeros trimmed:
/// `10.13%`, `55%`.
pub fn format_percent(v: f64) -> String {
    let s = format!("{v:.2}");
    let s = s.trim_end_matches('0').trim_end_matches('.');
    format!("{s}%")
}

/// Plain numeric label for the left axis; whole numbers drop the decimals.
pub fn format_value(v: f64) -> String {
    if (v - v.round()).abs() < 1e-9 {
        format!("{}", v.round() as i64)
    } else {
        let s = format!("{v:.2}");
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    }
}
