// File: crates/epicurve-core/src/chart.rs
// Summary: Frame builder; turns the dataset plus overlay tables into draw commands.

use crate::annotate::{OverlayProfile, Side};
use crate::axis::{percent_ticks, time_ticks, value_ticks};
use crate::curve::monotone_path;
use crate::data::{DataSet, SeriesColumn};
use crate::locale::Locale;
use crate::render::{Color, DrawCmd, Frame, LineStyle, PathSeg, TextAnchor, TextStyle};
use crate::scale::{TimeScale, ValueScale};
use crate::theme::Theme;
use crate::types::Viewport;

const AXIS_TEXT: f32 = 11.0;
const LABEL_TEXT: f32 = 12.0;
const FOOTNOTE_TEXT: f32 = 10.0;
const LINE_HEIGHT: f32 = 14.0;
const TICK_LEN: f32 = 5.0;
const LEFT_INTERVALS: usize = 5;
const RIGHT_INTERVALS: usize = 4;
const GUIDE_DASH: [f32; 2] = [4.0, 3.0];
const ARROW_LEN: f32 = 10.0;

/// The chart model: one immutable dataset plus presentation configuration.
/// `build_frame` is pure; the same chart and viewport always produce the
/// same frame.
#[derive(Clone, Debug)]
pub struct Chart {
    pub dataset: DataSet,
    pub theme: Theme,
    pub profile: OverlayProfile,
    pub locale: Locale,
    pub deaths_label: String,
    pub vaccinated_label: String,
    pub source_note: String,
}

impl Chart {
    pub fn new(dataset: DataSet) -> Self {
        Self {
            dataset,
            theme: Theme::default(),
            profile: OverlayProfile::default(),
            locale: Locale::default(),
            deaths_label: "Fallecidos (promedio 7 días)".to_string(),
            vaccinated_label: "Población vacunada".to_string(),
            source_note: "Fuente: Ministerio de Salud de Chile / Our World in Data"
                .to_string(),
        }
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    pub fn with_profile(mut self, profile: OverlayProfile) -> Self {
        self.profile = profile;
        self
    }

    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }

    /// Build the full frame in the fixed draw order:
    /// axes, lines, milestones, labels, annotations.
    pub fn build_frame(&self, vp: &Viewport) -> Frame {
        let mut frame = Frame::new();
        let Some(time) = TimeScale::from_dataset(&self.dataset, vp.plot_width()) else {
            return frame;
        };
        let left = ValueScale::left_for(&self.dataset, vp.plot_height());
        let right = ValueScale::percent(vp.plot_height());

        self.draw_axes(&mut frame, vp, &time, &left, &right);
        self.draw_lines(&mut frame, vp, &time, &left, &right);
        self.draw_milestones(&mut frame, vp, &time);
        self.draw_labels(&mut frame, vp, &time, &left, &right);
        self.draw_annotations(&mut frame, vp, &time, &left, &right);

        tracing::debug!(
            commands = frame.len(),
            width = vp.width,
            mobile = vp.is_mobile(),
            "built frame"
        );
        frame
    }

    fn draw_axes(
        &self,
        frame: &mut Frame,
        vp: &Viewport,
        time: &TimeScale,
        left: &ValueScale,
        right: &ValueScale,
    ) {
        let (l, r) = (vp.plot_left(), vp.plot_right());
        let (t, b) = (vp.plot_top(), vp.plot_bottom());

        // Bottom time axis, neutral ink.
        let axis = LineStyle::solid(self.theme.foreground, 1.0);
        frame.push(DrawCmd::Line { from: (l, b), to: (r, b), style: axis });
        for tick in time_ticks(time, vp.x_tick_count(), &self.locale) {
            let x = l + tick.pos;
            frame.push(DrawCmd::Line { from: (x, b), to: (x, b + TICK_LEN), style: axis });
            frame.push(text(
                (x, b + TICK_LEN + AXIS_TEXT + 2.0),
                tick.label,
                self.theme.foreground,
                AXIS_TEXT,
                TextAnchor::Middle,
            ));
        }

        // Left axis tinted to the deaths series for visual binding.
        let left_axis = LineStyle::solid(self.theme.deaths, 1.0);
        frame.push(DrawCmd::Line { from: (l, t), to: (l, b), style: left_axis });
        for tick in value_ticks(left, LEFT_INTERVALS) {
            let y = t + tick.pos;
            frame.push(DrawCmd::Line { from: (l - TICK_LEN, y), to: (l, y), style: left_axis });
            frame.push(text(
                (l - TICK_LEN - 3.0, y + 4.0),
                tick.label,
                self.theme.deaths,
                AXIS_TEXT,
                TextAnchor::End,
            ));
        }

        // Right percent axis tinted to the vaccination series.
        let right_axis = LineStyle::solid(self.theme.vaccinated, 1.0);
        frame.push(DrawCmd::Line { from: (r, t), to: (r, b), style: right_axis });
        for tick in percent_ticks(right, RIGHT_INTERVALS) {
            let y = t + tick.pos;
            frame.push(DrawCmd::Line { from: (r, y), to: (r + TICK_LEN, y), style: right_axis });
            frame.push(text(
                (r + TICK_LEN + 3.0, y + 4.0),
                tick.label,
                self.theme.vaccinated,
                AXIS_TEXT,
                TextAnchor::Start,
            ));
        }
    }

    fn draw_lines(
        &self,
        frame: &mut Frame,
        vp: &Viewport,
        time: &TimeScale,
        left: &ValueScale,
        right: &ValueScale,
    ) {
        let width = self.theme.line_width_for(vp.is_mobile());
        let series: [(SeriesColumn, &ValueScale, Color); 2] = [
            (SeriesColumn::Deaths7d, left, self.theme.deaths),
            (SeriesColumn::VaccinatedPct, right, self.theme.vaccinated),
        ];
        for (col, scale, color) in series {
            // One path per contiguous run; gaps break the line instead of
            // interpolating across missing days.
            for run in self.dataset.defined_runs(col) {
                if run.len() < 2 {
                    continue;
                }
                let points: Vec<(f32, f32)> = run
                    .iter()
                    .map(|&(date, v)| {
                        (vp.plot_left() + time.to_px(date), vp.plot_top() + scale.to_px(v))
                    })
                    .collect();
                frame.push(DrawCmd::Path {
                    segs: monotone_path(&points),
                    style: LineStyle::solid(color, width),
                });
            }
        }
    }

    fn draw_milestones(&self, frame: &mut Frame, vp: &Viewport, time: &TimeScale) {
        let style = LineStyle::dashed(self.theme.milestone, 1.0, GUIDE_DASH);
        for m in &self.profile.milestones {
            if !time.contains(m.date) {
                continue;
            }
            let x = vp.plot_left() + time.to_px(m.date);

            frame.push(DrawCmd::Line {
                from: (x, vp.plot_top()),
                to: (x, vp.plot_bottom()),
                style,
            });

            // Label block stacked above the plot, arrow pointing back down.
            let block_h = m.lines.len() as f32 * LINE_HEIGHT;
            let block_top = vp.plot_top() - m.offset - block_h - ARROW_LEN;
            for (i, line) in m.lines.iter().enumerate() {
                frame.push(text(
                    (x, block_top + (i as f32 + 1.0) * LINE_HEIGHT - 3.0),
                    line.clone(),
                    self.theme.annotation,
                    AXIS_TEXT,
                    TextAnchor::Middle,
                ));
            }
            let tip = vp.plot_top() - m.offset;
            frame.push(DrawCmd::Path {
                segs: vec![
                    PathSeg::MoveTo(x, tip - ARROW_LEN),
                    PathSeg::LineTo(x, tip),
                    PathSeg::MoveTo(x - 3.0, tip - 4.0),
                    PathSeg::LineTo(x, tip),
                    PathSeg::LineTo(x + 3.0, tip - 4.0),
                ],
                style: LineStyle::solid(self.theme.milestone, 1.0),
            });
        }
    }

    fn draw_labels(
        &self,
        frame: &mut Frame,
        vp: &Viewport,
        time: &TimeScale,
        left: &ValueScale,
        right: &ValueScale,
    ) {
        // Direct end-of-line labels, nudged off the line so they do not sit on it.
        let ends: [(SeriesColumn, &ValueScale, Color, &str); 2] = [
            (SeriesColumn::Deaths7d, left, self.theme.deaths, self.deaths_label.as_str()),
            (
                SeriesColumn::VaccinatedPct,
                right,
                self.theme.vaccinated,
                self.vaccinated_label.as_str(),
            ),
        ];
        for (col, scale, color, label) in ends {
            if let Some((date, v)) = self.dataset.last_defined(col) {
                let x = vp.plot_left() + time.to_px(date);
                let y = vp.plot_top() + scale.to_px(v);
                frame.push(text(
                    (x - 4.0, y - 10.0),
                    label.to_string(),
                    color,
                    LABEL_TEXT,
                    TextAnchor::End,
                ));
            }
        }

        frame.push(text(
            (vp.plot_left(), vp.height as f32 - 10.0),
            self.source_note.clone(),
            self.theme.footnote,
            FOOTNOTE_TEXT,
            TextAnchor::Start,
        ));
    }

    fn draw_annotations(
        &self,
        frame: &mut Frame,
        vp: &Viewport,
        time: &TimeScale,
        left: &ValueScale,
        right: &ValueScale,
    ) {
        for a in &self.profile.annotations {
            let date = a.anchor_date();
            if !time.contains(date) {
                continue;
            }
            let scale = match a.side {
                Side::Left => left,
                Side::Right => right,
            };
            let x = vp.plot_left() + time.to_px(date) + a.dx;
            let y = vp.plot_top() + scale.to_px(a.value) + a.dy;
            for (i, line) in a.lines.iter().enumerate() {
                frame.push(text(
                    (x, y + i as f32 * LINE_HEIGHT),
                    line.clone(),
                    self.theme.annotation,
                    AXIS_TEXT,
                    a.anchor,
                ));
            }
        }
    }
}

fn text(pos: (f32, f32), text: String, color: Color, size: f32, anchor: TextAnchor) -> DrawCmd {
    DrawCmd::Text { pos, text, style: TextStyle { color, size, anchor } }
}
