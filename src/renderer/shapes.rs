//! Shape generation for 2D primitives

use glam::Vec2;
use std::f32::consts::PI;

use super::vertex::{Vertex, colors};
use crate::anim::easing::ease;
use crate::consts::{CURVE_HEIGHT, CURVE_LINE_WIDTH, CURVE_SAMPLES, CURVE_WIDTH};

/// Generate vertices for a filled circle
pub fn circle(center: Vec2, radius: f32, color: [f32; 4], segments: u32) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity((segments * 3) as usize);

    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * 2.0 * PI;
        let theta2 = ((i + 1) as f32 / segments as f32) * 2.0 * PI;

        // Triangle from center to edge
        vertices.push(Vertex::new(center.x, center.y, color));
        vertices.push(Vertex::new(
            center.x + radius * theta1.cos(),
            center.y + radius * theta1.sin(),
            color,
        ));
        vertices.push(Vertex::new(
            center.x + radius * theta2.cos(),
            center.y + radius * theta2.sin(),
            color,
        ));
    }

    vertices
}

/// Generate vertices for a constant-width polyline (one quad per segment)
pub fn polyline(points: &[Vec2], width: f32, color: [f32; 4]) -> Vec<Vertex> {
    if points.len() < 2 {
        return Vec::new();
    }

    let half = width / 2.0;
    let mut vertices = Vec::with_capacity((points.len() - 1) * 6);

    for pair in points.windows(2) {
        let (p1, p2) = (pair[0], pair[1]);
        let dir = (p2 - p1).normalize_or_zero();
        let perp = Vec2::new(-dir.y, dir.x);

        // Quad corners
        let v1a = p1 + perp * half;
        let v1b = p1 - perp * half;
        let v2a = p2 + perp * half;
        let v2b = p2 - perp * half;

        // Two triangles
        vertices.push(Vertex::new(v1a.x, v1a.y, color));
        vertices.push(Vertex::new(v1b.x, v1b.y, color));
        vertices.push(Vertex::new(v2a.x, v2a.y, color));

        vertices.push(Vertex::new(v2a.x, v2a.y, color));
        vertices.push(Vertex::new(v1b.x, v1b.y, color));
        vertices.push(Vertex::new(v2b.x, v2b.y, color));
    }

    vertices
}

/// Generate the easing-curve preview: the current curve sampled into a
/// `CURVE_WIDTH` x `CURVE_HEIGHT` strip anchored at `origin`, plus a marker
/// dot at the current (progress, eased) position.
pub fn easing_curve(origin: Vec2, sharpness: f32, progress: f32, eased: f32) -> Vec<Vertex> {
    let points: Vec<Vec2> = (0..=CURVE_SAMPLES)
        .map(|i| {
            let t = i as f32 / CURVE_SAMPLES as f32;
            origin + Vec2::new(CURVE_WIDTH * t, CURVE_HEIGHT * ease(t, sharpness))
        })
        .collect();

    let mut vertices = polyline(&points, CURVE_LINE_WIDTH, colors::CURVE);

    let marker = origin + Vec2::new(CURVE_WIDTH * progress, CURVE_HEIGHT * eased);
    vertices.extend(circle(marker, CURVE_LINE_WIDTH * 2.0, colors::CURVE_MARKER, 16));

    vertices
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_circle_triangle_count() {
        let verts = circle(Vec2::ZERO, 10.0, colors::CIRCLE, 32);
        assert_eq!(verts.len(), 32 * 3);
    }

    #[test]
    fn test_circle_edge_on_radius() {
        let verts = circle(Vec2::new(5.0, -3.0), 10.0, colors::CIRCLE, 16);
        // Every non-center vertex sits on the circle boundary
        for v in verts.iter().skip(1).step_by(3) {
            let d = Vec2::from(v.position) - Vec2::new(5.0, -3.0);
            assert!((d.length() - 10.0).abs() < 1e-3);
        }
    }

    #[test]
    fn test_polyline_needs_two_points() {
        assert!(polyline(&[Vec2::ZERO], 1.0, colors::CURVE).is_empty());
        let verts = polyline(&[Vec2::ZERO, Vec2::new(10.0, 0.0)], 1.0, colors::CURVE);
        assert_eq!(verts.len(), 6);
    }

    #[test]
    fn test_easing_curve_nonempty() {
        let verts = easing_curve(Vec2::ZERO, 2.0, 0.25, 0.125);
        assert!(verts.len() > CURVE_SAMPLES as usize * 6);
    }
}
