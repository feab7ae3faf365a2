// File: crates/epicurve-core/tests/sample_data.rs
// Purpose: Validate the shipped dataset asset and the tick label formatting.

use chrono::NaiveDate;
use epicurve_core::locale::format_percent;
use epicurve_core::{load_csv, Locale, SeriesColumn};

fn sample_path() -> std::path::PathBuf {
    std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("../../assets/data.csv")
}

#[test]
fn shipped_dataset_satisfies_the_data_contract() {
    let data = load_csv(sample_path()).unwrap();
    assert!(data.len() > 30);

    let points = data.points();
    for w in points.windows(2) {
        assert!(w[0].date < w[1].date, "dates must be strictly ascending");
    }
    for p in points {
        if let Some(d) = p.deaths_7d {
            assert!(d >= 0.0, "deaths_7d negative on {}", p.date);
        }
        if let Some(v) = p.vaccinated_pct {
            assert!((0.0..=100.0).contains(&v), "vaccinated_pct out of range on {}", p.date);
        }
    }

    // Coverage only ever grows in the source domain.
    let vac: Vec<f64> = points.iter().filter_map(|p| p.vaccinated_pct).collect();
    for w in vac.windows(2) {
        assert!(w[1] >= w[0], "vaccination coverage must be non-decreasing");
    }
}

#[test]
fn continuity_ramp_reaches_the_campaign_start() {
    let data = load_csv(sample_path()).unwrap();
    let at = |y, m, d| {
        let date = NaiveDate::from_ymd_opt(y, m, d).unwrap();
        data.points().iter().find(|p| p.date == date).unwrap().vaccinated_pct
    };
    assert_eq!(at(2020, 12, 24), Some(0.1));
    assert_eq!(at(2021, 1, 1), Some(10.13));
    // The vaccination line stays continuous across the holiday reporting gap.
    assert_eq!(data.defined_runs(SeriesColumn::VaccinatedPct).len(), 1);
    // The deaths line breaks over the same gap.
    assert!(data.defined_runs(SeriesColumn::Deaths7d).len() > 1);
}

#[test]
fn date_labels_round_trip_through_the_locale() {
    let date = NaiveDate::from_ymd_opt(2021, 2, 3).unwrap();
    assert_eq!(Locale::es_cl().month_year(date), "feb 2021");
    assert_eq!(Locale::en_us().month_year(date), "feb 2021");
    let enero = NaiveDate::from_ymd_opt(2021, 1, 15).unwrap();
    assert_eq!(Locale::es_cl().month_year(enero), "ene 2021");
    assert_eq!(Locale::en_us().month_year(enero), "jan 2021");
}

#[test]
fn percent_labels_trim_trailing_zeros() {
    assert_eq!(format_percent(10.13), "10.13%");
    assert_eq!(format_percent(55.0), "55%");
    assert_eq!(format_percent(0.0), "0%");
    assert_eq!(format_percent(2.5), "2.5%");
}
