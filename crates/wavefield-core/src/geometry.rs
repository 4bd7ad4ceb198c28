//! Geometry utilities: point-in-polygon classification, edge-normal
//! search, vector reflection, and wavefront ring sampling.
//!
//! Everything here is total: degenerate inputs produce documented
//! fallback values rather than errors.

use glam::DVec2;

use crate::constants::COLLISION_SAMPLES;
use crate::types::Point;

/// Fallback direction when an incident vector has zero length.
pub const FALLBACK_INCIDENT: DVec2 = DVec2::new(1.0, 0.0);

/// Fallback normal when no polygon edge yields one.
pub const FALLBACK_NORMAL: DVec2 = DVec2::new(0.0, 1.0);

/// Even-odd ray-cast classification against a closed polygon.
///
/// The polygon closes implicitly (last vertex connects to the first).
/// Horizontal edges are excluded from the intersection test entirely:
/// they contribute no crossing, and the x-intersection is recomputed
/// fresh for every edge that does cross.
pub fn point_in_polygon(point: Point, polygon: &[Point]) -> bool {
    if polygon.len() < 3 {
        return false;
    }

    let mut inside = false;
    let n = polygon.len();
    let mut p1 = polygon[0];

    for i in 1..=n {
        let p2 = polygon[i % n];
        if p1.y != p2.y {
            let (y_min, y_max) = if p1.y < p2.y { (p1.y, p2.y) } else { (p2.y, p1.y) };
            if point.y > y_min && point.y <= y_max {
                let x_intersect = (point.y - p1.y) * (p2.x - p1.x) / (p2.y - p1.y) + p1.x;
                if point.x <= x_intersect {
                    inside = !inside;
                }
            }
        }
        p1 = p2;
    }

    inside
}

/// Unit normal of the polygon edge nearest to `point`.
///
/// Distance is measured to each edge's supporting line, not the bounded
/// segment. On concave polygons this can select an edge whose segment is
/// nowhere near the point; accepted as a known limitation of the model.
/// Returns [`FALLBACK_NORMAL`] for polygons with no usable edge.
pub fn nearest_edge_normal(polygon: &[Point], point: Point) -> DVec2 {
    let mut best = FALLBACK_NORMAL;
    let mut min_dist = f64::INFINITY;
    let n = polygon.len();

    for i in 0..n {
        let p1 = DVec2::from(polygon[i]);
        let p2 = DVec2::from(polygon[(i + 1) % n]);
        let edge = p2 - p1;
        let len = edge.length();
        if len == 0.0 {
            continue;
        }
        let unit = edge / len;
        let normal = DVec2::new(-unit.y, unit.x);
        let dist = (DVec2::from(point) - p1).dot(normal).abs();
        if dist < min_dist {
            min_dist = dist;
            best = normal;
        }
    }

    best
}

/// Mirror `incident` about `normal`: `i - 2(i . n)n`.
/// Preserves length, so a unit incident stays unit.
pub fn reflect(incident: DVec2, normal: DVec2) -> DVec2 {
    incident - 2.0 * incident.dot(normal) * normal
}

/// Normalized direction from `from` to `to`, with [`FALLBACK_INCIDENT`]
/// when the two points coincide.
pub fn incident_unit(from: Point, to: Point) -> DVec2 {
    let v = DVec2::from(to) - DVec2::from(from);
    let len = v.length();
    if len > 0.0 {
        v / len
    } else {
        FALLBACK_INCIDENT
    }
}

/// Sample the wavefront ring against one obstacle polygon.
///
/// Tests [`COLLISION_SAMPLES`] points evenly spaced in angle at the
/// current radius and returns the first one inside the polygon — one
/// collision per obstacle per tick, regardless of how many samples
/// would hit. Polygons with fewer than 3 vertices never collide.
pub fn first_ring_hit(origin: Point, radius: f64, polygon: &[Point]) -> Option<Point> {
    if polygon.len() < 3 {
        return None;
    }

    for i in 0..COLLISION_SAMPLES {
        let angle = std::f64::consts::TAU * i as f64 / COLLISION_SAMPLES as f64;
        let sample = Point::new(
            origin.x + radius * angle.cos(),
            origin.y + radius * angle.sin(),
        );
        if point_in_polygon(sample, polygon) {
            return Some(sample);
        }
    }

    None
}

/// Centroid of a polygon's vertices (arithmetic mean).
pub fn centroid(polygon: &[Point]) -> Point {
    if polygon.is_empty() {
        return Point::default();
    }
    let n = polygon.len() as f64;
    let (sx, sy) = polygon
        .iter()
        .fold((0.0, 0.0), |(sx, sy), p| (sx + p.x, sy + p.y));
    Point::new(sx / n, sy / n)
}

/// Shortest-arc absolute difference between two angles, in [0, π].
pub fn angle_difference(a: f64, b: f64) -> f64 {
    let diff = (a - b).abs() % std::f64::consts::TAU;
    if diff > std::f64::consts::PI {
        std::f64::consts::TAU - diff
    } else {
        diff
    }
}
