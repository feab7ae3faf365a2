// File: crates/demo/src/main.rs
// Summary: Demo loads the timeline CSV and renders desktop and mobile PNGs.

use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use epicurve_core::session::RESIZE_DEBOUNCE;
use epicurve_core::{annotate, theme, ChartSession, Viewport};
use epicurve_render_skia::SkiaRenderer;
use tracing_subscriber::EnvFilter;

const MOBILE_WIDTH: i32 = 420;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    // Accept path/theme/profile from CLI or fall back to the bundled sample.
    let path = std::env::args().nth(1).unwrap_or_else(|| "assets/data.csv".to_string());
    let theme = theme::find(&std::env::args().nth(2).unwrap_or_default());
    let profile = annotate::find(&std::env::args().nth(3).unwrap_or_default());
    tracing::info!(path, theme = theme.name, profile = profile.name, "starting");

    let viewport = Viewport::default();
    let mut session = ChartSession::new(viewport)
        .with_theme(theme)
        .with_profile(profile);

    let frame = match session.load(&path) {
        Ok(frame) => frame,
        Err(err) => {
            // The user-facing surface shows the fallback text instead of a chart.
            if let Some(msg) = session.fallback_message() {
                eprintln!("{msg}");
            }
            return Err(err).with_context(|| format!("failed to load CSV '{path}'"));
        }
    };

    let renderer = SkiaRenderer::new();
    let out_dir = PathBuf::from("target/out");

    let desktop_png = out_dir.join("epicurve_desktop.png");
    renderer.render_to_png(&frame, viewport.width, viewport.height, theme.background, &desktop_png)?;
    println!("Wrote {}", desktop_png.display());

    // Same session, same in-memory data: resize below the breakpoint and let
    // the debounce settle.
    let now = Instant::now();
    session.resize(MOBILE_WIDTH, viewport.height, now);
    let mobile_frame = session
        .poll(now + RESIZE_DEBOUNCE)
        .context("debounced redraw did not fire")?;

    let mobile_png = out_dir.join("epicurve_mobile.png");
    renderer.render_to_png(&mobile_frame, MOBILE_WIDTH, viewport.height, theme.background, &mobile_png)?;
    println!("Wrote {}", mobile_png.display());

    Ok(())
}
