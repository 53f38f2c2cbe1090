//! Property tests for the vector helpers.
//!
//! Inputs are bounded (|component| <= 1e3) so absolute tolerances stay meaningful.

use super::*;
use nalgebra::{Vector2, Vector3};
use proptest::prelude::*;
use std::f64::consts::{PI, TAU};

fn comp() -> impl Strategy<Value = f64> {
    -1e3f64..1e3f64
}

fn vec2() -> impl Strategy<Value = Vector2<f64>> {
    (comp(), comp()).prop_map(|(x, y)| Vector2::new(x, y))
}

fn vec3() -> impl Strategy<Value = Vector3<f64>> {
    (comp(), comp(), comp()).prop_map(|(x, y, z)| Vector3::new(x, y, z))
}

fn nonzero3() -> impl Strategy<Value = Vector3<f64>> {
    vec3().prop_filter("away from zero", |v| v.norm() > 1e-3)
}

fn wrap_angle(d: f64) -> f64 {
    d - TAU * (d / TAU).round()
}

proptest! {
    #[test]
    fn unit_vector_has_unit_norm(v in nonzero3()) {
        prop_assert!((unit_vector(v).norm() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn unit_vector_keeps_direction(v in vec2().prop_filter("away from zero", |v| v.norm() > 1e-3)) {
        let u = unit_vector(v);
        prop_assert!(angle_between(u, v) < 1e-6);
    }

    #[test]
    fn polar_round_trip(r in 1e-3f64..1e3, phi in (-PI + 1e-6)..PI) {
        let xy = polar_to_cartesian(r, phi);
        let back = cartesian_to_polar(xy.x, xy.y);
        prop_assert!((back.r - r).abs() < 1e-9 * (1.0 + r));
        prop_assert!(wrap_angle(back.phi - phi).abs() < 1e-9);
        prop_assert!(back.phi > -PI && back.phi <= PI);
    }

    #[test]
    fn cartesian_round_trip(v in vec2()) {
        let p = cartesian_to_polar(v.x, v.y);
        prop_assert!(p.r >= 0.0);
        let xy = p.to_cartesian();
        prop_assert!((xy - v).norm() < 1e-9 * (1.0 + v.norm()));
    }

    #[test]
    fn angle_in_range_and_symmetric(a in vec3(), b in vec3()) {
        let ab = angle_between(a, b);
        prop_assert!((0.0..=PI).contains(&ab));
        prop_assert_eq!(ab, angle_between(b, a));
    }

    #[test]
    fn magnitude_paths_agree(v in vec3()) {
        let slow = get_magnitude(v, false);
        let fast = get_magnitude(v, true);
        prop_assert!((slow - fast).abs() <= 1e-12 * (1.0 + slow));
    }

    #[test]
    fn decomposition_reconstructs_and_is_orthogonal(a in vec3(), b in nonzero3()) {
        let par = get_parallel_component(a, b);
        let perp = get_perpendicular_component(a, b);
        prop_assert!((par + perp - a).norm() < 1e-9 * (1.0 + a.norm()));
        prop_assert!(perp.dot(&b).abs() < 1e-9 * (1.0 + a.norm() * b.norm()));
        // parallel part is a multiple of b
        prop_assert!(par.cross(&b).norm() < 1e-9 * (1.0 + par.norm() * b.norm()));
    }

    #[test]
    fn bisector_splits_angle(a in nonzero3(), b in nonzero3()) {
        let bis = get_bisector(a, b);
        prop_assume!(bis.norm() > 1e-3 * a.norm() * b.norm());
        prop_assert!((angle_between(bis, a) - angle_between(bis, b)).abs() < 1e-6);
    }

    #[test]
    fn endpoint_offset_from_line(
        b in vec2().prop_filter("not vertical", |b| b.x.abs() > 1e-3),
        t in -100.0f64..100.0,
        d in 1e-3f64..10.0,
    ) {
        let on_line = b * t;
        prop_assert!(is_vector_endpoint_above_vector_slope(on_line + Vector2::new(0.0, d), b));
        prop_assert!(!is_vector_endpoint_above_vector_slope(on_line - Vector2::new(0.0, d), b));
    }
}
