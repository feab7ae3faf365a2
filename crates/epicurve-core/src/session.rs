// File: crates/epicurve-core/src/session.rs
// Summary: Chart session: load-once state machine and debounced resize redraws.

use std::path::Path;
use std::time::{Duration, Instant};

use crate::annotate::OverlayProfile;
use crate::chart::Chart;
use crate::loader::{load_csv, LoadError};
use crate::locale::Locale;
use crate::render::Frame;
use crate::theme::Theme;
use crate::types::Viewport;

/// Trailing-edge quiet window for resize bursts.
pub const RESIZE_DEBOUNCE: Duration = Duration::from_millis(150);

/// Message shown in place of the chart when loading fails.
pub const FALLBACK_MESSAGE: &str = "No fue posible cargar los datos del gráfico.";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Uninitialized,
    Ready,
    /// Terminal; loading failed and there is no retry.
    Error,
}

/// Trailing-edge debounce with reset-on-trigger semantics: every trigger
/// pushes the deadline out, so only the last call of a burst fires.
/// Time is injected so callers (and tests) control the clock.
#[derive(Clone, Copy, Debug)]
pub struct Debounce {
    delay: Duration,
    deadline: Option<Instant>,
}

impl Debounce {
    pub fn new(delay: Duration) -> Self {
        Self { delay, deadline: None }
    }

    pub fn trigger(&mut self, now: Instant) {
        self.deadline = Some(now + self.delay);
    }

    pub fn pending(&self) -> bool {
        self.deadline.is_some()
    }

    /// Consume the deadline once it has passed.
    pub fn fire(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}

/// Owns the loaded chart and the current viewport. Lifecycle:
/// Uninitialized -> Ready on a successful load, Uninitialized -> Error
/// (terminal) when the load fails. In Ready, `resize` arms the debounce and
/// `poll` rebuilds the frame from the in-memory dataset once the burst
/// settles; nothing is ever re-fetched.
#[derive(Debug)]
pub struct ChartSession {
    phase: Phase,
    chart: Option<Chart>,
    viewport: Viewport,
    debounce: Debounce,
    theme: Theme,
    profile: OverlayProfile,
    locale: Locale,
    fallback: Option<&'static str>,
}

impl ChartSession {
    pub fn new(viewport: Viewport) -> Self {
        Self {
            phase: Phase::Uninitialized,
            chart: None,
            viewport,
            debounce: Debounce::new(RESIZE_DEBOUNCE),
            theme: Theme::default(),
            profile: OverlayProfile::default(),
            locale: Locale::default(),
            fallback: None,
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

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn chart(&self) -> Option<&Chart> {
        self.chart.as_ref()
    }

    /// User-visible replacement message, set once the session enters Error.
    pub fn fallback_message(&self) -> Option<&str> {
        self.fallback
    }

    /// Load the dataset and render the first frame. Only meaningful from
    /// Uninitialized; a failed load is terminal.
    pub fn load(&mut self, path: impl AsRef<Path>) -> Result<Frame, LoadError> {
        match load_csv(path) {
            Ok(dataset) => {
                tracing::info!(rows = dataset.len(), "dataset loaded");
                let chart = Chart::new(dataset)
                    .with_theme(self.theme)
                    .with_profile(self.profile.clone())
                    .with_locale(self.locale);
                let frame = chart.build_frame(&self.viewport);
                self.chart = Some(chart);
                self.phase = Phase::Ready;
                Ok(frame)
            }
            Err(err) => {
                tracing::warn!(error = %err, "load failed; session is terminal");
                self.phase = Phase::Error;
                self.fallback = Some(FALLBACK_MESSAGE);
                Err(err)
            }
        }
    }

    /// Record a new surface size. No-op outside Ready; the redraw itself is
    /// deferred until `poll` observes the quiet window.
    pub fn resize(&mut self, width: i32, height: i32, now: Instant) {
        if self.phase != Phase::Ready {
            return;
        }
        self.viewport.width = width;
        self.viewport.height = height;
        self.debounce.trigger(now);
    }

    /// Rebuild the frame if a debounced resize has settled.
    pub fn poll(&mut self, now: Instant) -> Option<Frame> {
        if self.phase != Phase::Ready || !self.debounce.fire(now) {
            return None;
        }
        self.chart.as_ref().map(|c| c.build_frame(&self.viewport))
    }
}
