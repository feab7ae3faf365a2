// File: crates/epicurve-core/tests/frame.rs
// Purpose: Frame-builder behavior: idempotence, gap handling, clipping, breakpoints.

use chrono::NaiveDate;
use epicurve_core::annotate::OverlayProfile;
use epicurve_core::render::{DrawCmd, TextAnchor};
use epicurve_core::{read_csv, Chart, Milestone, Theme, Viewport};

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

fn transition_chart() -> Chart {
    // The continuity-corrected transition window: deaths reporting pauses over
    // the holidays, vaccination ramps from 0.1% to 10.13%.
    let csv = "\
date,deaths_7d,vaccinated_pct
2020-12-24,,0.1
2020-12-25,,0.2
2020-12-26,44.0,0.4
2020-12-27,44.5,0.7
2020-12-28,45.0,1.2
2020-12-29,,2.1
2020-12-30,46.0,3.8
2020-12-31,46.5,6.2
2021-01-01,10,10.13
";
    Chart::new(read_csv(csv.as_bytes()).unwrap()).with_profile(OverlayProfile::none())
}

fn paths_with_color(frame: &epicurve_core::Frame, color: epicurve_core::Color) -> usize {
    frame
        .commands()
        .iter()
        .filter(|c| matches!(c, DrawCmd::Path { style, .. } if style.color == color && style.dash.is_none()))
        .count()
}

#[test]
fn identical_inputs_build_identical_frames() {
    let chart = transition_chart();
    let vp = Viewport::default();
    assert_eq!(chart.build_frame(&vp), chart.build_frame(&vp));
}

#[test]
fn missing_deaths_break_the_line_but_not_the_vaccination_line() {
    let chart = transition_chart();
    let theme = chart.theme;
    let frame = chart.build_frame(&Viewport::default());

    // Deaths: runs [26..28] and [30..01-01], two separate paths.
    assert_eq!(paths_with_color(&frame, theme.deaths), 2);
    // Vaccination: one continuous path across all nine days.
    assert_eq!(paths_with_color(&frame, theme.vaccinated), 1);
}

#[test]
fn milestones_outside_the_domain_are_clipped() {
    let mut chart = transition_chart();
    chart.profile = OverlayProfile {
        name: "test",
        milestones: vec![
            Milestone::new(d(2020, 12, 1), &["antes"], 0.0),
            Milestone::new(d(2021, 2, 1), &["después"], 0.0),
            Milestone::new(d(2020, 12, 24), &["al inicio"], 0.0),
        ],
        annotations: Vec::new(),
    };
    let vp = Viewport::default();
    let frame = chart.build_frame(&vp);

    let guides: Vec<f32> = frame
        .commands()
        .iter()
        .filter_map(|c| match c {
            DrawCmd::Line { from, style, .. } if style.dash.is_some() => Some(from.0),
            _ => None,
        })
        .collect();
    // Only the in-domain milestone survives, and it sits at x = 0 of the plot.
    assert_eq!(guides, vec![vp.plot_left()]);
}

#[test]
fn annotations_outside_the_domain_are_clipped() {
    let chart = transition_chart().with_profile(OverlayProfile::full());
    let frame = chart.build_frame(&Viewport::default());
    // The full profile's narrative comments all date from mid-2021 onward;
    // none of their text may appear over this December window.
    let texts: Vec<&str> = frame
        .commands()
        .iter()
        .filter_map(|c| match c {
            DrawCmd::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
        .collect();
    assert!(!texts.iter().any(|t| t.contains("ómicron")));
    assert!(!texts.iter().any(|t| t.contains("Primera ola")));
}

#[test]
fn mobile_breakpoint_reduces_ticks_and_stroke() {
    let chart = transition_chart();
    let theme = chart.theme;
    let desktop = Viewport { width: 1024, ..Viewport::default() };
    let mobile = Viewport { width: 420, ..Viewport::default() };

    let count_x_labels = |frame: &epicurve_core::Frame| {
        frame
            .commands()
            .iter()
            .filter(|c| {
                matches!(c, DrawCmd::Text { style, .. }
                    if style.anchor == TextAnchor::Middle)
            })
            .count()
    };
    let stroke = |frame: &epicurve_core::Frame| {
        frame
            .commands()
            .iter()
            .find_map(|c| match c {
                DrawCmd::Path { style, .. } if style.color == theme.deaths => Some(style.width),
                _ => None,
            })
            .unwrap()
    };

    let df = chart.build_frame(&desktop);
    let mf = chart.build_frame(&mobile);
    assert_eq!(count_x_labels(&df), 6);
    assert_eq!(count_x_labels(&mf), 4);
    assert_eq!(stroke(&df), Theme::default().line_width);
    assert_eq!(stroke(&mf), Theme::default().line_width_mobile);
}

#[test]
fn single_defined_point_draws_no_line() {
    let csv = "\
date,deaths_7d,vaccinated_pct
2021-01-01,10.0,
2021-01-02,,1.0
2021-01-03,,2.0
";
    let chart =
        Chart::new(read_csv(csv.as_bytes()).unwrap()).with_profile(OverlayProfile::none());
    let theme = chart.theme;
    let frame = chart.build_frame(&Viewport::default());
    // One isolated deaths point: no deaths path at all, no error.
    assert_eq!(paths_with_color(&frame, theme.deaths), 0);
    assert_eq!(paths_with_color(&frame, theme.vaccinated), 1);
}
