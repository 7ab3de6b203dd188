//! Integration tests for the basis evaluators

use std::f64::consts::{FRAC_1_SQRT_2, PI};

use approx::assert_abs_diff_eq;
use fetools_basis::{
    num_zernike_terms, zernike_indices, zernike_order_from_coeff_count, AxialDirection,
    LegendreBasis, ZernikeBasis, ZernikeIndex, ZernikeLegendreBasis,
};
use nalgebra::Point3;
use rstest::{fixture, rstest};

#[fixture]
fn legendre() -> LegendreBasis {
    LegendreBasis::new(-3.0, 7.0).unwrap()
}

#[fixture]
fn zernike() -> ZernikeBasis {
    ZernikeBasis::new(0.5, [1.0, -2.0]).unwrap()
}

/// Composite Simpson rule over [a, b] with an even number of intervals
fn simpson(a: f64, b: f64, intervals: usize, f: impl Fn(f64) -> f64) -> f64 {
    let h = (b - a) / intervals as f64;
    let mut sum = f(a) + f(b);
    for i in 1..intervals {
        let weight = if i % 2 == 0 { 2.0 } else { 4.0 };
        sum += weight * f(a + i as f64 * h);
    }
    sum * h / 3.0
}

#[rstest]
fn triangular_inverse_law() {
    for n in 0..=200 {
        assert_eq!(zernike_order_from_coeff_count(num_zernike_terms(n)).unwrap(), n);
    }
}

#[rstest]
#[case(2, 1)]
#[case(4, 2)]
#[case(5, 2)]
#[case(11, 4)]
#[case(16, 5)]
fn non_triangular_counts_round_up(#[case] count: usize, #[case] order: usize) {
    assert_eq!(zernike_order_from_coeff_count(count).unwrap(), order);
    assert!(num_zernike_terms(order) >= count);
    assert!(num_zernike_terms(order - 1) < count);
}

#[rstest]
fn canonical_order_for_n2() {
    let pairs: Vec<(u32, i32)> = zernike_indices(2).map(|z| (z.n, z.m)).collect();
    assert_eq!(pairs, vec![(0, 0), (1, -1), (1, 1), (2, -2), (2, 0), (2, 2)]);
    assert_eq!(pairs.len(), num_zernike_terms(2));
}

#[rstest]
fn legendre_orthonormality(legendre: LegendreBasis) {
    // integrate over the canonical interval, dz = (length / 2) dz'
    let jacobian = 2.0 / legendre.length();
    for i in 0..=4 {
        for j in 0..=4 {
            let integral = simpson(legendre.z_min(), legendre.z_max(), 4000, |z| {
                legendre.value(i, z) * legendre.value(j, z)
            }) * jacobian;
            let expected = if i == j { 1.0 } else { 0.0 };
            assert_abs_diff_eq!(integral, expected, epsilon = 1e-9);
        }
    }
}

#[rstest]
#[case(-3.0)]
#[case(0.0)]
#[case(2.5)]
#[case(7.0)]
fn legendre_zeroth_order_is_constant(legendre: LegendreBasis, #[case] z: f64) {
    assert_eq!(legendre.value(0, z), FRAC_1_SQRT_2);
}

#[rstest]
fn legendre_first_order_endpoints(legendre: LegendreBasis) {
    let expected = 1.5_f64.sqrt();
    assert_abs_diff_eq!(legendre.value(1, legendre.z_min()), -expected, epsilon = 1e-15);
    assert_abs_diff_eq!(legendre.value(1, legendre.z_max()), expected, epsilon = 1e-15);
}

#[rstest]
fn legendre_endpoint_parity(legendre: LegendreBasis) {
    // P_l(1) = 1 and P_l(-1) = (-1)^l before normalisation
    for l in 0..=10 {
        let scale = ((2 * l + 1) as f64 / 2.0).sqrt();
        let sign = if l % 2 == 0 { 1.0 } else { -1.0 };
        assert_abs_diff_eq!(legendre.value(l, legendre.z_max()), scale, epsilon = 1e-12);
        assert_abs_diff_eq!(legendre.value(l, legendre.z_min()), sign * scale, epsilon = 1e-12);
    }
}

#[rstest]
#[case(0.0, 0.0)]
#[case(1.0, 1.0)]
#[case(1.0, -0.5)]
#[case(f64::NAN, 1.0)]
fn degenerate_legendre_interval_rejected(#[case] z_min: f64, #[case] z_max: f64) {
    assert!(LegendreBasis::new(z_min, z_max).is_err());
}

#[rstest]
#[case(1.0, -2.0)]
#[case(1.3, -2.1)]
#[case(0.6, -2.2)]
#[case(1.0, -1.5)]
fn zernike_piston_is_unity(zernike: ZernikeBasis, #[case] x: f64, #[case] y: f64) {
    assert!(zernike.contains(x, y));
    assert_eq!(zernike.value(0, 0, x, y).unwrap(), 1.0);
}

#[rstest]
#[case(0.0)]
#[case(-0.4)]
#[case(f64::INFINITY)]
fn zernike_rejects_invalid_radius(#[case] radius: f64) {
    assert!(ZernikeBasis::new(radius, [0.0, 0.0]).is_err());
}

#[rstest]
#[case(2, 1)]
#[case(1, 3)]
#[case(-1, 1)]
#[case(3, -2)]
#[case(3, i32::MIN)]
#[case(4, i32::MIN)]
#[case(i32::MAX, i32::MIN)]
fn zernike_rejects_invalid_index(zernike: ZernikeBasis, #[case] n: i32, #[case] m: i32) {
    assert!(zernike.value(m, n, 1.0, -2.0).is_err());
    assert!(ZernikeIndex::new(n, m).is_err());
}

#[rstest]
fn zernike_disk_boundary_uses_squared_radius() {
    // squared distance 0.36 is below the radius but above its square
    let zernike = ZernikeBasis::new(0.5, [0.0, 0.0]).unwrap();
    assert!(!zernike.contains(0.6, 0.0));
    assert!(zernike.contains(0.5, 0.0));
    assert!(zernike.contains(0.0, -0.49));
}

#[rstest]
fn zernike_outside_disk_still_evaluates() {
    let zernike = ZernikeBasis::new(1.0, [0.0, 0.0]).unwrap();
    // Z_1^1 = 2 r cos(theta) = 2x on the unit disk, extrapolated past it
    let value = zernike.value(1, 1, 3.0, 0.0).unwrap();
    assert_abs_diff_eq!(value, 6.0, epsilon = 1e-12);
}

#[rstest]
fn zernike_orthogonality_on_disk() {
    let zernike = ZernikeBasis::new(1.0, [0.0, 0.0]).unwrap();
    let n_order = 4;
    let n_theta = 64;

    // polar integration, Simpson in r and uniform trapezoid in theta
    let n_terms = num_zernike_terms(n_order);
    let n_r = 2000;
    let h = 1.0 / n_r as f64;
    let d_theta = 2.0 * PI / n_theta as f64;
    let mut gram = vec![0.0; n_terms * n_terms];
    for k in 0..n_theta {
        let theta = k as f64 * d_theta;
        for i in 0..=n_r {
            let r = i as f64 * h;
            let simpson_weight = match i {
                0 => 1.0,
                i if i == n_r => 1.0,
                i if i % 2 == 0 => 2.0,
                _ => 4.0,
            };
            let weight = simpson_weight * h / 3.0 * r * d_theta;
            let v = zernike.values(n_order, r * theta.cos(), r * theta.sin());
            for a in 0..n_terms {
                for b in 0..n_terms {
                    gram[a * n_terms + b] += weight * v[a] * v[b];
                }
            }
        }
    }

    for a in 0..n_terms {
        for b in 0..n_terms {
            let expected = if a == b { PI } else { 0.0 };
            assert_abs_diff_eq!(gram[a * n_terms + b], expected, epsilon = 1e-7);
        }
    }
}

#[rstest]
#[case(AxialDirection::X, Point3::new(4.0, 1.1, -1.9))]
#[case(AxialDirection::Y, Point3::new(1.1, 4.0, -1.9))]
#[case(AxialDirection::Z, Point3::new(1.1, -1.9, 4.0))]
fn combined_basis_follows_direction(
    legendre: LegendreBasis,
    zernike: ZernikeBasis,
    #[case] direction: AxialDirection,
    #[case] point: Point3<f64>,
) {
    let basis = ZernikeLegendreBasis::new(legendre, zernike, direction);
    assert!(basis.contains(&point));

    let index = ZernikeIndex::new(2, -2).unwrap();
    let expected = legendre.value(3, 4.0) * zernike.value(-2, 2, 1.1, -1.9).unwrap();
    assert_abs_diff_eq!(basis.value(3, index, &point).unwrap(), expected, epsilon = 1e-14);

    let zernike_values = basis.zernike_values(2, &point);
    assert_abs_diff_eq!(zernike_values[index.position()], zernike.value(-2, 2, 1.1, -1.9).unwrap());
}

#[rstest]
#[case("z", AxialDirection::Z)]
#[case(" X ", AxialDirection::X)]
#[case("1", AxialDirection::Y)]
fn axial_direction_from_str(#[case] s: &str, #[case] expected: AxialDirection) {
    assert_eq!(s.parse::<AxialDirection>().unwrap(), expected);
}

#[rstest]
fn axial_direction_from_index() {
    assert_eq!(AxialDirection::try_from(0_i32).unwrap(), AxialDirection::X);
    assert_eq!(AxialDirection::try_from(2_i32).unwrap(), AxialDirection::Z);
    assert!(AxialDirection::try_from(3_i32).is_err());
}
