// File: crates/epicurve-core/tests/scale_curve.rs
// Purpose: Scale math (nice ceilings, zero-span guards) and curve shape checks.

use chrono::NaiveDate;
use epicurve_core::curve::monotone_path;
use epicurve_core::render::PathSeg;
use epicurve_core::scale::nice_ceil;
use epicurve_core::{TimeScale, ValueScale};

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

#[test]
fn time_scale_is_linear_in_days() {
    let s = TimeScale::new(d(2021, 1, 1), d(2021, 1, 11), 100.0);
    assert_eq!(s.to_px(d(2021, 1, 1)), 0.0);
    assert_eq!(s.to_px(d(2021, 1, 11)), 100.0);
    assert!((s.to_px(d(2021, 1, 6)) - 50.0).abs() < 1e-4);
}

#[test]
fn zero_span_time_maps_to_range_start() {
    let s = TimeScale::new(d(2021, 1, 1), d(2021, 1, 1), 100.0);
    assert_eq!(s.to_px(d(2021, 1, 1)), 0.0);
    assert_eq!(s.to_px(d(2021, 6, 1)), 0.0);
}

#[test]
fn value_scale_is_inverted() {
    let s = ValueScale::new(100.0, 200.0);
    assert_eq!(s.to_px(0.0), 200.0);
    assert_eq!(s.to_px(100.0), 0.0);
    assert_eq!(s.to_px(50.0), 100.0);
}

#[test]
fn zero_span_value_maps_to_bottom() {
    let s = ValueScale::new(0.0, 200.0);
    assert_eq!(s.to_px(0.0), 200.0);
    assert_eq!(s.to_px(42.0), 200.0);
}

#[test]
fn nice_ceil_lands_on_round_numbers() {
    assert_eq!(nice_ceil(87.5), 100.0);
    assert_eq!(nice_ceil(100.0), 100.0);
    assert_eq!(nice_ceil(101.0), 200.0);
    assert_eq!(nice_ceil(3.2), 5.0);
    assert_eq!(nice_ceil(0.7), 1.0);
    assert_eq!(nice_ceil(0.0), 1.0);
    assert_eq!(nice_ceil(1350.0), 2000.0);
}

#[test]
fn monotone_path_has_no_segments_below_two_points() {
    assert!(monotone_path(&[]).is_empty());
    assert!(monotone_path(&[(0.0, 0.0)]).is_empty());
}

#[test]
fn monotone_path_two_points_is_a_straight_join() {
    let segs = monotone_path(&[(0.0, 0.0), (10.0, 5.0)]);
    assert_eq!(segs, vec![PathSeg::MoveTo(0.0, 0.0), PathSeg::LineTo(10.0, 5.0)]);
}

#[test]
fn monotone_path_does_not_overshoot_monotone_data() {
    // Increasing samples: every control point must stay inside the y-range of
    // its interval, so the rendered curve cannot dip or overshoot.
    let pts = [(0.0f32, 0.0f32), (10.0, 1.0), (20.0, 8.0), (30.0, 9.0), (40.0, 9.5)];
    let segs = monotone_path(&pts);
    assert_eq!(segs.len(), pts.len()); // MoveTo + one cubic per interval
    let mut i = 0usize;
    for seg in &segs {
        if let PathSeg::CubicTo { c1, c2, to } = seg {
            let (y0, y1) = (pts[i].1, pts[i + 1].1);
            let (lo, hi) = (y0.min(y1) - 1e-4, y0.max(y1) + 1e-4);
            assert!(c1.1 >= lo && c1.1 <= hi, "c1 out of band in interval {i}");
            assert!(c2.1 >= lo && c2.1 <= hi, "c2 out of band in interval {i}");
            assert_eq!(*to, pts[i + 1]);
            i += 1;
        }
    }
    assert_eq!(i, pts.len() - 1);
}

#[test]
fn monotone_path_flattens_at_extrema() {
    // A peak in the middle: the tangent there must be zero, which shows up as
    // control points level with the peak.
    let pts = [(0.0f32, 0.0f32), (10.0, 10.0), (20.0, 0.0)];
    let segs = monotone_path(&pts);
    match (&segs[1], &segs[2]) {
        (PathSeg::CubicTo { c2, .. }, PathSeg::CubicTo { c1, .. }) => {
            assert!((c2.1 - 10.0).abs() < 1e-4);
            assert!((c1.1 - 10.0).abs() < 1e-4);
        }
        other => panic!("expected two cubics, got {other:?}"),
    }
}
