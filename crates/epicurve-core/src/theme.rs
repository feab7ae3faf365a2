// File: crates/epicurve-core/src/theme.rs
// Summary: Light/Dark theming for chart colors and stroke widths.

use crate::render::Color;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Theme {
    pub name: &'static str,
    pub background: Color,
    /// Neutral ink for the bottom axis and its labels.
    pub foreground: Color,
    /// De-emphasized ink for secondary marks.
    pub muted: Color,
    /// Deaths series and the left axis it binds to.
    pub deaths: Color,
    /// Vaccination series and the right axis it binds to.
    pub vaccinated: Color,
    pub milestone: Color,
    pub annotation: Color,
    pub footnote: Color,
    pub line_width: f32,
    pub line_width_mobile: f32,
}

impl Theme {
    pub fn light() -> Self {
        Self {
            name: "light",
            background: Color::rgb(250, 250, 252),
            foreground: Color::rgb(60, 60, 70),
            muted: Color::rgb(140, 140, 150),
            deaths: Color::rgb(192, 57, 43),
            vaccinated: Color::rgb(26, 153, 136),
            milestone: Color::rgb(150, 150, 158),
            annotation: Color::rgb(110, 110, 120),
            footnote: Color::rgb(150, 150, 160),
            line_width: 2.5,
            line_width_mobile: 1.8,
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: Color::rgb(18, 18, 20),
            foreground: Color::rgb(210, 210, 220),
            muted: Color::rgb(130, 130, 140),
            deaths: Color::rgb(235, 110, 90),
            vaccinated: Color::rgb(60, 200, 180),
            milestone: Color::rgb(110, 110, 120),
            annotation: Color::rgb(160, 160, 170),
            footnote: Color::rgb(120, 120, 130),
            line_width: 2.5,
            line_width_mobile: 1.8,
        }
    }

    /// Series stroke width for the current layout.
    pub fn line_width_for(&self, mobile: bool) -> f32 {
        if mobile { self.line_width_mobile } else { self.line_width }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::light()
    }
}

/// Return the list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::light(), Theme::dark()]
}

/// Find a theme by its `name`, falling back to light.
pub fn find(name: &str) -> Theme {
    for t in presets() {
        if t.name.eq_ignore_ascii_case(name) {
            return t;
        }
    }
    Theme::light()
}
