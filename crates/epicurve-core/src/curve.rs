// File: crates/epicurve-core/src/curve.rs
// Summary: Shape-preserving monotone cubic interpolation for line paths.

use crate::render::PathSeg;

/// Build a monotone cubic path (Fritsch-Carlson tangents) through screen
/// points with strictly increasing x. The curve passes through every sample
/// and never overshoots between neighbors, so a monotone series stays
/// monotone on screen. Fewer than two points produce no segments.
pub fn monotone_path(points: &[(f32, f32)]) -> Vec<PathSeg> {
    let n = points.len();
    if n < 2 {
        return Vec::new();
    }

    let mut segs = Vec::with_capacity(n);
    segs.push(PathSeg::MoveTo(points[0].0, points[0].1));

    if n == 2 {
        segs.push(PathSeg::LineTo(points[1].0, points[1].1));
        return segs;
    }

    let tangents = fritsch_carlson_tangents(points);
    for i in 0..n - 1 {
        let (x0, y0) = points[i];
        let (x1, y1) = points[i + 1];
        let h = x1 - x0;
        if h <= f32::EPSILON {
            // Coincident x (degenerate scale); fall back to a straight join.
            segs.push(PathSeg::LineTo(x1, y1));
            continue;
        }
        let t = h / 3.0;
        segs.push(PathSeg::CubicTo {
            c1: (x0 + t, y0 + tangents[i] * t),
            c2: (x1 - t, y1 - tangents[i + 1] * t),
            to: (x1, y1),
        });
    }
    segs
}

/// Per-point tangents limited so each interval stays monotone.
fn fritsch_carlson_tangents(points: &[(f32, f32)]) -> Vec<f32> {
    let n = points.len();
    let mut delta = Vec::with_capacity(n - 1);
    for i in 0..n - 1 {
        let h = points[i + 1].0 - points[i].0;
        if h <= f32::EPSILON {
            delta.push(0.0);
        } else {
            delta.push((points[i + 1].1 - points[i].1) / h);
        }
    }

    let mut m = vec![0.0f32; n];
    m[0] = delta[0];
    m[n - 1] = delta[n - 2];
    for i in 1..n - 1 {
        // Zero tangent at local extrema, averaged secant elsewhere.
        if delta[i - 1] * delta[i] <= 0.0 {
            m[i] = 0.0;
        } else {
            m[i] = (delta[i - 1] + delta[i]) / 2.0;
        }
    }

    for i in 0..n - 1 {
        if delta[i] == 0.0 {
            m[i] = 0.0;
            m[i + 1] = 0.0;
            continue;
        }
        let a = m[i] / delta[i];
        let b = m[i + 1] / delta[i];
        let s = a * a + b * b;
        if s > 9.0 {
            let tau = 3.0 / s.sqrt();
            m[i] = tau * a * delta[i];
            m[i + 1] = tau * b * delta[i];
        }
    }
    m
}
