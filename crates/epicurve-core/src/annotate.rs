// File: crates/epicurve-core/src/annotate.rs
// Summary: Milestone and annotation tables plus the built-in overlay profiles.

use chrono::NaiveDate;

use crate::render::TextAnchor;

/// Which value axis an annotation pins its `value` to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

/// A notable campaign date: vertical dashed guide line across the plot with a
/// stacked label block above it and a short arrow down to the plot edge.
/// Milestones whose date falls outside the loaded time domain are not drawn.
#[derive(Clone, Debug, PartialEq)]
pub struct Milestone {
    pub date: NaiveDate,
    pub lines: Vec<String>,
    /// Extra distance between the label block and the plot top, so adjacent
    /// milestone labels can dodge each other.
    pub offset: f32,
}

impl Milestone {
    pub fn new(date: NaiveDate, lines: &[&str], offset: f32) -> Self {
        Self {
            date,
            lines: lines.iter().map(|s| s.to_string()).collect(),
            offset,
        }
    }
}

/// Free-text call-out pinned to a date (or the midpoint of a date range) and
/// a value on one of the two axes, nudged by pixel offsets.
#[derive(Clone, Debug, PartialEq)]
pub struct Annotation {
    pub date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub side: Side,
    pub value: f64,
    pub anchor: TextAnchor,
    pub lines: Vec<String>,
    pub dx: f32,
    pub dy: f32,
}

impl Annotation {
    pub fn new(
        date: NaiveDate,
        side: Side,
        value: f64,
        anchor: TextAnchor,
        lines: &[&str],
    ) -> Self {
        Self {
            date,
            end_date: None,
            side,
            value,
            anchor,
            lines: lines.iter().map(|s| s.to_string()).collect(),
            dx: 0.0,
            dy: 0.0,
        }
    }

    pub fn spanning(mut self, end_date: NaiveDate) -> Self {
        self.end_date = Some(end_date);
        self
    }

    pub fn offset(mut self, dx: f32, dy: f32) -> Self {
        self.dx = dx;
        self.dy = dy;
        self
    }

    /// Anchor date: the range midpoint when `end_date` is set.
    pub fn anchor_date(&self) -> NaiveDate {
        match self.end_date {
            Some(end) => {
                let half = end.signed_duration_since(self.date).num_days() / 2;
                self.date + chrono::Duration::days(half)
            }
            None => self.date,
        }
    }
}

/// A named set of overlays. The two presets mirror the two observed variants
/// of the chart; pick one instead of hard-coding either table.
#[derive(Clone, Debug, PartialEq)]
pub struct OverlayProfile {
    pub name: &'static str,
    pub milestones: Vec<Milestone>,
    pub annotations: Vec<Annotation>,
}

impl OverlayProfile {
    /// Campaign milestones plus the narrative comments and the omicron call-out.
    pub fn full() -> Self {
        let d = |y, m, day| NaiveDate::from_ymd_opt(y, m, day).unwrap();
        Self {
            name: "full",
            milestones: vec![
                Milestone::new(
                    d(2020, 12, 24),
                    &["Inicio vacunación", "personal de salud"],
                    26.0,
                ),
                Milestone::new(d(2021, 2, 3), &["Campaña masiva", "desde 85 años"], 4.0),
            ],
            annotations: vec![
                Annotation::new(
                    d(2020, 6, 15),
                    Side::Left,
                    95.0,
                    TextAnchor::Middle,
                    &["Primera ola:", "peak de fallecidos"],
                )
                .offset(0.0, -18.0),
                Annotation::new(
                    d(2021, 4, 10),
                    Side::Left,
                    110.0,
                    TextAnchor::Middle,
                    &["Segunda ola pese al", "avance de la vacunación"],
                )
                .spanning(d(2021, 6, 10))
                .offset(0.0, -18.0),
                Annotation::new(
                    d(2021, 9, 1),
                    Side::Right,
                    73.0,
                    TextAnchor::Start,
                    &["Chile entre los países", "con mayor cobertura"],
                )
                .offset(8.0, -6.0),
                Annotation::new(
                    d(2021, 12, 4),
                    Side::Right,
                    86.0,
                    TextAnchor::End,
                    &["Llegada de", "ómicron"],
                )
                .offset(-8.0, -12.0),
            ],
        }
    }

    /// Campaign milestones only.
    pub fn minimal() -> Self {
        let full = Self::full();
        Self {
            name: "minimal",
            milestones: full.milestones,
            annotations: Vec::new(),
        }
    }

    /// Empty profile, useful for tests and bare renders.
    pub fn none() -> Self {
        Self { name: "none", milestones: Vec::new(), annotations: Vec::new() }
    }
}

impl Default for OverlayProfile {
    fn default() -> Self {
        Self::full()
    }
}

/// Return the list of built-in overlay presets.
pub fn presets() -> Vec<OverlayProfile> {
    vec![OverlayProfile::full(), OverlayProfile::minimal(), OverlayProfile::none()]
}

/// Find a profile by its `name`, falling back to the full set.
pub fn find(name: &str) -> OverlayProfile {
    for p in presets() {
        if p.name.eq_ignore_ascii_case(name) {
            return p;
        }
    }
    OverlayProfile::full()
}
