use super::*;
use crate::error::GeomError;
use nalgebra::{vector, Vector2, Vector3};
use rand::{rngs::StdRng, Rng, SeedableRng};
use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI, SQRT_2};

#[test]
fn polar_axis_points_and_origin() {
    let p = cartesian_to_polar(0.0, 2.0);
    assert!((p.r - 2.0).abs() < 1e-12);
    assert!((p.phi - FRAC_PI_2).abs() < 1e-12);

    let p = cartesian_to_polar(-3.0, 0.0);
    assert!((p.r - 3.0).abs() < 1e-12);
    assert_eq!(p.phi, PI);
    // -0.0 on the negative x-axis would give atan2 = -π; stays on the +π side.
    assert_eq!(cartesian_to_polar(-3.0, -0.0).phi, PI);

    // Origin: angle is conventionally 0.
    assert_eq!(cartesian_to_polar(0.0, 0.0), Polar::new(0.0, 0.0));
}

#[test]
fn polar_to_cartesian_inverts_and_reflects_negative_radius() {
    let xy = polar_to_cartesian(SQRT_2, FRAC_PI_4);
    assert!((xy - vector![1.0, 1.0]).norm() < 1e-12);

    let back = cartesian_to_polar(xy.x, xy.y);
    assert!((back.r - SQRT_2).abs() < 1e-12);
    assert!((back.phi - FRAC_PI_4).abs() < 1e-12);

    // Negative radius reflects through the origin.
    let refl = polar_to_cartesian(-1.0, 0.0);
    assert!((refl - vector![-1.0, 0.0]).norm() < 1e-12);

    let via_from: Vector2<f64> = Polar::new(2.0, FRAC_PI_2).into();
    assert!((via_from - vector![0.0, 2.0]).norm() < 1e-12);
}

#[test]
fn unit_vector_scales_to_one_and_keeps_zero() {
    let u = unit_vector(vector![3.0, 4.0]);
    assert!((u - vector![0.6, 0.8]).norm() < 1e-12);

    let u3 = unit_vector(vector![0.0, 0.0, -5.0]);
    assert!((u3 - vector![0.0, 0.0, -1.0]).norm() < 1e-12);

    let z = unit_vector(vector![0.0, 0.0]);
    assert_eq!(z, vector![0.0, 0.0]);
    assert!(!z.x.is_nan() && !z.y.is_nan());
}

#[test]
fn angle_between_reference_cases() {
    let x = vector![1.0, 0.0];
    assert!((angle_between(x, vector![0.0, 1.0]) - FRAC_PI_2).abs() < 1e-12);
    assert!(angle_between(x, x).abs() < 1e-12);
    assert!((angle_between(x, vector![-1.0, 0.0]) - PI).abs() < 1e-12);

    let ex = vector![1.0, 0.0, 0.0];
    assert!((angle_between(ex, vector![0.0, 1.0, 0.0]) - FRAC_PI_2).abs() < 1e-12);
    assert!((angle_between(ex, vector![-1.0, 0.0, 0.0]) - PI).abs() < 1e-12);
}

#[test]
fn angle_between_clamps_overshoot_and_is_symmetric() {
    // Nearly parallel long vectors: the raw cosine can exceed 1 by an ulp.
    let a = vector![1e8, 1e-8, 3.0];
    let b = a * 7.0;
    let ang = angle_between(a, b);
    assert!(!ang.is_nan());
    assert!(ang.abs() < 1e-7);

    let c = vector![0.3, -2.0, 1.5];
    assert_eq!(angle_between(a, c), angle_between(c, a));
}

#[test]
fn angle_between_zero_operand_is_right_angle() {
    // Silent policy: zero vector normalizes to itself, dot is 0.
    let ang = angle_between(vector![0.0, 0.0], vector![1.0, 0.0]);
    assert!((ang - FRAC_PI_2).abs() < 1e-12);
    let ang = angle_between(Vector3::<f64>::zeros(), Vector3::zeros());
    assert!((ang - FRAC_PI_2).abs() < 1e-12);
}

#[test]
fn magnitude_paths_agree_seeded() {
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..64 {
        let v = Vector3::new(
            rng.gen_range(-10.0..10.0),
            rng.gen_range(-10.0..10.0),
            rng.gen_range(-10.0..10.0),
        );
        let slow = get_magnitude(v, false);
        let fast = get_magnitude(v, true);
        assert!((slow - fast).abs() < 1e-12 * (1.0 + slow));
        assert_eq!(magnitude(v), slow);
    }
    assert_eq!(get_magnitude(vector![3.0, 4.0], false), 5.0);
    assert_eq!(get_magnitude(vector![3.0, 4.0], true), 5.0);
}

#[test]
fn parallel_and_perpendicular_components() {
    let a = vector![2.0, 3.0];
    let b = vector![4.0, 0.0];
    let par = get_parallel_component(a, b);
    let perp = get_perpendicular_component(a, b);
    assert!((par - vector![2.0, 0.0]).norm() < 1e-12);
    assert!((perp - vector![0.0, 3.0]).norm() < 1e-12);

    let a3 = vector![1.0, 2.0, 3.0];
    let b3 = vector![1.0, 1.0, 0.0];
    let d = decompose(a3, b3);
    assert!((d.parallel - vector![1.5, 1.5, 0.0]).norm() < 1e-12);
    assert!(d.perpendicular.dot(&b3).abs() < 1e-12);
    assert!((d.recompose() - a3).norm() < 1e-12);
    assert_eq!(d.parallel, get_parallel_component(a3, b3));
    assert_eq!(d.perpendicular, get_perpendicular_component(a3, b3));
}

#[test]
fn projection_onto_zero_vector_is_nan() {
    let par = get_parallel_component(vector![1.0, 2.0], vector![0.0, 0.0]);
    assert!(par.iter().all(|c| c.is_nan()));
    let perp = get_perpendicular_component(vector![1.0, 2.0], vector![0.0, 0.0]);
    assert!(perp.iter().all(|c| c.is_nan()));
}

#[test]
fn bisector_cases() {
    let bis = get_bisector(vector![1.0, 0.0], vector![0.0, 1.0]);
    assert!((bis - vector![1.0, 1.0]).norm() < 1e-12);
    assert!((unit_vector(bis) - vector![1.0, 1.0] / SQRT_2).norm() < 1e-12);

    // Unequal lengths still bisect the angle.
    let a = vector![3.0, 0.0, 0.0];
    let b = vector![0.0, 0.0, 0.5];
    let bis = get_bisector(a, b);
    assert!((angle_between(bis, a) - angle_between(bis, b)).abs() < 1e-12);

    // A zero operand zeroes both terms.
    assert_eq!(
        get_bisector(vector![0.0, 0.0], vector![2.0, 1.0]),
        vector![0.0, 0.0]
    );
}

#[test]
fn endpoint_above_slope() {
    assert!(is_vector_endpoint_above_vector_slope(
        vector![0.0, 5.0],
        vector![1.0, 1.0]
    ));
    assert!(!is_vector_endpoint_above_vector_slope(
        vector![0.0, -5.0],
        vector![1.0, 1.0]
    ));
    // On the line counts as not above.
    assert!(!is_vector_endpoint_above_vector_slope(
        vector![2.0, 2.0],
        vector![1.0, 1.0]
    ));
    // Negative Bx: slope is still By/Bx.
    assert!(is_vector_endpoint_above_vector_slope(
        vector![1.0, 0.0],
        vector![-1.0, 1.0]
    ));
    // Vertical reference, unchecked: inf * 0 = NaN, comparison is false.
    assert!(!is_vector_endpoint_above_vector_slope(
        vector![0.0, 5.0],
        vector![0.0, 1.0]
    ));
}

#[test]
fn checked_variants_reject_degenerate_inputs() {
    let cfg = VecCfg::default();
    let zero = vector![0.0, 0.0];
    let x = vector![1.0, 0.0];

    assert_eq!(
        try_unit_vector(zero, cfg),
        Err(GeomError::ZeroVector {
            op: "try_unit_vector",
            arg: "v"
        })
    );
    assert!(matches!(
        try_angle_between(x, zero, cfg),
        Err(GeomError::ZeroVector { arg: "v2", .. })
    ));
    assert!(try_parallel_component(x, zero, cfg).is_err());
    assert!(try_perpendicular_component(x, zero, cfg).is_err());
    assert!(try_decompose(x, zero, cfg).is_err());
    assert!(matches!(
        try_is_vector_endpoint_above_vector_slope(x, vector![0.0, 1.0], cfg),
        Err(GeomError::VerticalSlope { .. })
    ));

    // Tolerance is configurable.
    let loose = VecCfg {
        eps_norm: 1e-3,
        ..cfg
    };
    assert!(try_unit_vector(vector![1e-4, 0.0], loose).is_err());
    assert!(try_unit_vector(vector![1e-4, 0.0], cfg).is_ok());
}

#[test]
fn checked_variants_match_unchecked_on_success() {
    let cfg = VecCfg::default();
    let a = vector![2.0, -1.0, 0.5];
    let b = vector![0.5, 3.0, 1.0];
    assert_eq!(try_unit_vector(a, cfg), Ok(unit_vector(a)));
    assert_eq!(try_angle_between(a, b, cfg), Ok(angle_between(a, b)));
    assert_eq!(
        try_parallel_component(a, b, cfg),
        Ok(get_parallel_component(a, b))
    );
    assert_eq!(
        try_perpendicular_component(a, b, cfg),
        Ok(get_perpendicular_component(a, b))
    );
    assert_eq!(try_decompose(a, b, cfg), Ok(decompose(a, b)));
    assert_eq!(
        try_is_vector_endpoint_above_vector_slope(vector![0.0, 5.0], vector![1.0, 1.0], cfg),
        Ok(true)
    );
}
