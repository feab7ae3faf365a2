// File: crates/epicurve-core/src/loader.rs
// Summary: CSV loader for `date,deaths_7d,vaccinated_pct` rows with row-level filtering.

use std::io::Read;
use std::path::Path;

use chrono::NaiveDate;
use thiserror::Error;

use crate::data::{DataPoint, DataSet};

const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to open data file '{path}'")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed csv input")]
    Csv(#[from] csv::Error),
    #[error("missing column '{0}' in header")]
    MissingColumn(&'static str),
    #[error("no valid rows after filtering")]
    NoValidData,
}

/// Load a dataset from a CSV file on disk.
pub fn load_csv(path: impl AsRef<Path>) -> Result<DataSet, LoadError> {
    let path = path.as_ref();
    let file = std::fs::File::open(path).map_err(|source| LoadError::Io {
        path: path.display().to_string(),
        source,
    })?;
    read_csv(file)
}

/// Load a dataset from any CSV reader.
///
/// Per-row policy: a row is excluded (not fatal) when its date does not parse
/// as `YYYY-MM-DD`, when a non-blank value cell is unparseable or non-finite,
/// or when both value cells are blank. A blank cell is a missing value and the
/// row keeps contributing to the other series. Rows are sorted by date; the
/// first occurrence of a duplicate date wins.
pub fn read_csv<R: Read>(reader: R) -> Result<DataSet, LoadError> {
    let mut rdr = csv::ReaderBuilder::new().has_headers(true).from_reader(reader);

    let headers = rdr
        .headers()?
        .iter()
        .map(|h| h.trim().to_lowercase())
        .collect::<Vec<_>>();
    let col = |name: &'static str| -> Result<usize, LoadError> {
        headers
            .iter()
            .position(|h| h.as_str() == name)
            .ok_or(LoadError::MissingColumn(name))
    };
    let i_date = col("date")?;
    let i_deaths = col("deaths_7d")?;
    let i_vac = col("vaccinated_pct")?;

    let mut points = Vec::new();
    let mut skipped = 0usize;

    for rec in rdr.records() {
        let Ok(rec) = rec else {
            skipped += 1;
            continue;
        };
        let date = rec
            .get(i_date)
            .and_then(|s| NaiveDate::parse_from_str(s.trim(), DATE_FORMAT).ok());
        let deaths_7d = rec.get(i_deaths).map(parse_cell);
        let vaccinated_pct = rec.get(i_vac).map(parse_cell);

        match (date, deaths_7d, vaccinated_pct) {
            (Some(date), Some(Ok(deaths_7d)), Some(Ok(vaccinated_pct)))
                if deaths_7d.is_some() || vaccinated_pct.is_some() =>
            {
                points.push(DataPoint { date, deaths_7d, vaccinated_pct });
            }
            _ => skipped += 1,
        }
    }

    if skipped > 0 {
        tracing::debug!(skipped, kept = points.len(), "excluded malformed rows");
    }
    if points.is_empty() {
        return Err(LoadError::NoValidData);
    }
    Ok(DataSet::from_unsorted(points))
}

/// Parse one value cell: blank means missing, anything else must be a finite float.
fn parse_cell(s: &str) -> Result<Option<f64>, ()> {
    let s = s.trim();
    if s.is_empty() {
        return Ok(None);
    }
    match s.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(Some(v)),
        _ => Err(()),
    }
}
