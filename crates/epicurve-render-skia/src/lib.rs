// File: crates/epicurve-render-skia/src/lib.rs
// Summary: Skia renderer; replays core frames onto CPU raster surfaces and encodes PNG.

use anyhow::Result;
use skia_safe as skia;

use epicurve_core::render::{Color, DrawCmd, Frame, LineStyle, PathSeg};

mod text;
pub use text::TextShaper;

fn to_skia(color: Color) -> skia::Color {
    skia::Color::from_argb(color.a, color.r, color.g, color.b)
}

fn stroke_paint(style: &LineStyle) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Stroke);
    paint.set_stroke_width(style.width);
    paint.set_color(to_skia(style.color));
    if let Some([on, off]) = style.dash {
        paint.set_path_effect(skia::PathEffect::dash(&[on, off], 0.0));
    }
    paint
}

pub struct SkiaRenderer {
    shaper: TextShaper,
}

impl SkiaRenderer {
    pub fn new() -> Self {
        Self { shaper: TextShaper::new() }
    }

    /// Rasterize a frame and return PNG bytes.
    pub fn render_to_png_bytes(
        &self,
        frame: &Frame,
        width: i32,
        height: i32,
        background: Color,
    ) -> Result<Vec<u8>> {
        let mut surface = skia::surfaces::raster_n32_premul((width, height))
            .ok_or_else(|| anyhow::anyhow!("failed to create raster surface"))?;
        let canvas = surface.canvas();
        canvas.clear(to_skia(background));
        self.paint(canvas, frame);

        let image = surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or_else(|| anyhow::anyhow!("encode PNG failed"))?;
        Ok(data.as_bytes().to_vec())
    }

    /// Rasterize a frame and write a PNG at `output_png_path`.
    pub fn render_to_png(
        &self,
        frame: &Frame,
        width: i32,
        height: i32,
        background: Color,
        output_png_path: impl AsRef<std::path::Path>,
    ) -> Result<()> {
        let bytes = self.render_to_png_bytes(frame, width, height, background)?;
        if let Some(parent) = output_png_path.as_ref().parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(output_png_path, bytes)?;
        Ok(())
    }

    /// Replay every draw command onto a canvas, in frame order.
    pub fn paint(&self, canvas: &skia::Canvas, frame: &Frame) {
        for cmd in frame.commands() {
            match cmd {
                DrawCmd::Line { from, to, style } => {
                    canvas.draw_line(*from, *to, &stroke_paint(style));
                }
                DrawCmd::Path { segs, style } => {
                    let mut path = skia::Path::new();
                    for seg in segs {
                        match *seg {
                            PathSeg::MoveTo(x, y) => {
                                path.move_to((x, y));
                            }
                            PathSeg::LineTo(x, y) => {
                                path.line_to((x, y));
                            }
                            PathSeg::CubicTo { c1, c2, to } => {
                                path.cubic_to(c1, c2, to);
                            }
                        }
                    }
                    canvas.draw_path(&path, &stroke_paint(style));
                }
                DrawCmd::Text { pos, text, style } => {
                    self.shaper.draw_anchored(
                        canvas,
                        text,
                        pos.0,
                        pos.1,
                        style.size,
                        to_skia(style.color),
                        style.anchor,
                    );
                }
            }
        }
    }
}

impl Default for SkiaRenderer {
    fn default() -> Self {
        Self::new()
    }
}
