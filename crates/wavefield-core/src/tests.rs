//! Tests for materials, geometry utilities, and core types.

use glam::DVec2;
use proptest::prelude::*;

use crate::components::{EchoKey, Wavefront};
use crate::enums::WaveKind;
use crate::errors::ConfigError;
use crate::geometry::*;
use crate::materials;
use crate::types::{Point, SimTime};

fn square() -> Vec<Point> {
    vec![
        Point::new(100.0, 100.0),
        Point::new(200.0, 100.0),
        Point::new(200.0, 200.0),
        Point::new(100.0, 200.0),
    ]
}

// ---- Materials ----

#[test]
fn test_material_lookup_known() {
    let metal = materials::lookup("METAL").unwrap();
    assert_eq!(metal.reflection, 0.9);
    assert_eq!(metal.transmission, 0.0);

    let glass = materials::lookup("GLASS").unwrap();
    assert_eq!(glass.transmission, 0.8);
}

#[test]
fn test_material_lookup_unknown() {
    let err = materials::lookup("ADAMANTIUM").unwrap_err();
    assert_eq!(err, ConfigError::UnknownMaterial("ADAMANTIUM".to_string()));
}

// ---- Point-in-polygon ----

#[test]
fn test_point_in_polygon_interior_exterior() {
    let poly = square();
    assert!(point_in_polygon(Point::new(150.0, 150.0), &poly));
    assert!(!point_in_polygon(Point::new(50.0, 150.0), &poly));
    assert!(!point_in_polygon(Point::new(250.0, 150.0), &poly));
    assert!(!point_in_polygon(Point::new(150.0, 50.0), &poly));
}

#[test]
fn test_point_in_polygon_rotation_invariant() {
    let poly = square();
    let inside = Point::new(150.0, 150.0);
    for offset in 0..poly.len() {
        let rotated: Vec<Point> = (0..poly.len())
            .map(|i| poly[(i + offset) % poly.len()])
            .collect();
        assert!(
            point_in_polygon(inside, &rotated),
            "Classification changed under rotation offset {offset}"
        );
    }
}

#[test]
fn test_point_in_polygon_horizontal_edges() {
    // The square's top and bottom edges are horizontal; they must not
    // contribute crossings. A point level with the bottom edge is
    // outside, one just inside the edge band is inside.
    let poly = square();
    assert!(!point_in_polygon(Point::new(150.0, 100.0), &poly));
    assert!(point_in_polygon(Point::new(150.0, 100.5), &poly));

    // Staircase outline with a horizontal edge at interior height.
    let poly = vec![
        Point::new(0.0, 0.0),
        Point::new(10.0, 0.0),
        Point::new(10.0, 5.0),
        Point::new(20.0, 5.0),
        Point::new(20.0, 10.0),
        Point::new(0.0, 10.0),
    ];
    assert!(point_in_polygon(Point::new(5.0, 5.0), &poly));
    assert!(!point_in_polygon(Point::new(15.0, 2.0), &poly));
    assert!(point_in_polygon(Point::new(15.0, 7.0), &poly));
}

#[test]
fn test_point_in_polygon_degenerate() {
    assert!(!point_in_polygon(Point::new(0.0, 0.0), &[]));
    assert!(!point_in_polygon(
        Point::new(0.0, 0.0),
        &[Point::new(-1.0, -1.0), Point::new(1.0, 1.0)]
    ));
}

// ---- Reflection ----

#[test]
fn test_reflect_head_on() {
    let out = reflect(DVec2::new(1.0, 0.0), DVec2::new(1.0, 0.0));
    assert!((out - DVec2::new(-1.0, 0.0)).length() < 1e-12);
}

#[test]
fn test_reflect_45_degrees() {
    let s = std::f64::consts::FRAC_1_SQRT_2;
    let out = reflect(DVec2::new(s, s), DVec2::new(0.0, -1.0));
    assert!((out - DVec2::new(s, -s)).length() < 1e-12);
}

#[test]
fn test_incident_unit_fallback() {
    let p = Point::new(3.0, 4.0);
    assert_eq!(incident_unit(p, p), FALLBACK_INCIDENT);

    let dir = incident_unit(Point::new(0.0, 0.0), Point::new(0.0, 7.0));
    assert!((dir - DVec2::new(0.0, 1.0)).length() < 1e-12);
}

// ---- Edge normals ----

#[test]
fn test_nearest_edge_normal_square() {
    // Point just inside the left edge: that edge's supporting line is
    // nearest, and its normal is horizontal.
    let normal = nearest_edge_normal(&square(), Point::new(102.0, 150.0));
    assert!(normal.x.abs() > 0.999, "normal should be horizontal: {normal}");
    assert!(normal.y.abs() < 1e-9);
    assert!((normal.length() - 1.0).abs() < 1e-12);
}

#[test]
fn test_nearest_edge_normal_degenerate() {
    assert_eq!(nearest_edge_normal(&[], Point::new(0.0, 0.0)), FALLBACK_NORMAL);
    assert_eq!(
        nearest_edge_normal(&[Point::new(1.0, 1.0), Point::new(1.0, 1.0)], Point::new(0.0, 0.0)),
        FALLBACK_NORMAL
    );
}

// ---- Ring sampling ----

#[test]
fn test_first_ring_hit_finds_first_sample() {
    // Sample 0 is due east of the origin; at radius 52 it lands at
    // (102, 150), inside the square.
    let hit = first_ring_hit(Point::new(50.0, 150.0), 52.0, &square()).unwrap();
    assert!((hit.x - 102.0).abs() < 1e-9);
    assert!((hit.y - 150.0).abs() < 1e-9);
}

#[test]
fn test_first_ring_hit_misses_when_short() {
    assert!(first_ring_hit(Point::new(50.0, 150.0), 40.0, &square()).is_none());
}

#[test]
fn test_first_ring_hit_degenerate_polygon() {
    let line = vec![Point::new(0.0, 0.0), Point::new(100.0, 0.0)];
    assert!(first_ring_hit(Point::new(50.0, 50.0), 60.0, &line).is_none());
}

// ---- Misc geometry ----

#[test]
fn test_centroid() {
    let c = centroid(&square());
    assert_eq!(c, Point::new(150.0, 150.0));
    assert_eq!(centroid(&[]), Point::default());
}

#[test]
fn test_angle_difference_shortest_arc() {
    let tau = std::f64::consts::TAU;
    assert!((angle_difference(0.1, tau - 0.1) - 0.2).abs() < 1e-12);
    assert!((angle_difference(1.0, 1.0)).abs() < 1e-12);
    assert!((angle_difference(0.0, std::f64::consts::PI) - std::f64::consts::PI).abs() < 1e-12);
}

// ---- Core types ----

#[test]
fn test_sim_time_advance() {
    let mut time = SimTime::default();
    for _ in 0..60 {
        time.advance();
    }
    assert_eq!(time.tick, 60);
    assert!((time.elapsed_secs - 1.0).abs() < 1e-9);
}

#[test]
fn test_bearing_wraps_positive() {
    let origin = Point::new(0.0, 0.0);
    let b = origin.bearing_to(&Point::new(1.0, -1.0));
    assert!(b > std::f64::consts::PI, "bearing must be wrapped into [0, 2pi): {b}");
}

#[test]
fn test_ring_spacing_per_kind() {
    let sonar = Wavefront::primary(0, WaveKind::Sonar, Point::default(), 2.0, 1.0);
    assert_eq!(sonar.ring_spacing(), 40.0);
    let radio = Wavefront::primary(1, WaveKind::Radio, Point::default(), 2.0, 1.0);
    assert_eq!(radio.ring_spacing(), 25.0);
}

#[test]
fn test_echo_key_quantizes() {
    let a = EchoKey::new(3, 120.0001, 1.5708);
    let b = EchoKey::new(3, 119.9999, 1.5708);
    assert_eq!(a, b);
    assert_ne!(a, EchoKey::new(4, 120.0, 1.5708));
}

// ---- Properties ----

proptest! {
    #[test]
    fn prop_reflect_preserves_unit_length(
        incident_angle in 0.0..std::f64::consts::TAU,
        normal_angle in 0.0..std::f64::consts::TAU,
    ) {
        let i = DVec2::new(incident_angle.cos(), incident_angle.sin());
        let n = DVec2::new(normal_angle.cos(), normal_angle.sin());
        let out = reflect(i, n);
        prop_assert!((out.length() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn prop_point_in_polygon_rotation_invariant(
        offset in 0usize..6,
        x in -50.0..250.0f64,
        y in -50.0..250.0f64,
    ) {
        let poly = vec![
            Point::new(100.0, 100.0),
            Point::new(200.0, 120.0),
            Point::new(220.0, 180.0),
            Point::new(150.0, 220.0),
            Point::new(90.0, 190.0),
            Point::new(80.0, 140.0),
        ];
        let rotated: Vec<Point> = (0..poly.len())
            .map(|i| poly[(i + offset) % poly.len()])
            .collect();
        let p = Point::new(x, y);
        prop_assert_eq!(point_in_polygon(p, &poly), point_in_polygon(p, &rotated));
    }
}
