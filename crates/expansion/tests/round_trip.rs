//! Projection followed by reconstruction recovers fields in the span

use std::f64::consts::SQRT_2;

use approx::{assert_abs_diff_eq, assert_relative_eq};
use fetools_basis::{AxialDirection, LegendreBasis, ZernikeBasis, ZernikeLegendreBasis};
use fetools_expansion::{
    cylinder_quadrature, CoefficientSet, Deconstruction, ExpansionOrder, Kernel, LocalReduction,
    QuadraturePoint, Reconstruction,
};
use nalgebra::{Point3, Vector3};
use rstest::{fixture, rstest};

fn basis_along(direction: AxialDirection) -> ZernikeLegendreBasis {
    ZernikeLegendreBasis::new(
        LegendreBasis::new(-1.0, 3.0).unwrap(),
        ZernikeBasis::new(0.5, [0.2, -0.1]).unwrap(),
        direction,
    )
}

#[fixture]
fn basis() -> ZernikeLegendreBasis {
    basis_along(AxialDirection::Z)
}

/// Project a field with a quadrature exact for everything used here
fn project(
    basis: ZernikeLegendreBasis,
    order: ExpansionOrder,
    field: impl Fn(&Point3<f64>) -> f64,
) -> CoefficientSet {
    let element = cylinder_quadrature(&basis, 8, 8, 24, field).unwrap();
    let kernel = Kernel::cylinder_volume(&basis).unwrap();

    let mut projection = Deconstruction::new(basis, order, kernel);
    projection.initialize();
    projection.execute(&element).unwrap();
    projection.finalize(&LocalReduction).unwrap();
    projection.coefficients().unwrap()
}

/// Separable polynomial of axial degree 3 and transverse degree 4
fn smooth_field(basis: &ZernikeLegendreBasis, point: &Point3<f64>) -> f64 {
    let (axial, (x, y)) = basis.direction().split(point);
    let z = basis.legendre().normalize(axial);
    let [cx, cy] = basis.zernike().center();
    let radius = basis.zernike().radius();
    let (x, y) = ((x - cx) / radius, (y - cy) / radius);

    (2.0 + z + 0.1 * z.powi(3)) * (1.0 + x * x - x * y + y.powi(3) + 0.5 * x.powi(4))
}

fn sample_points(basis: &ZernikeLegendreBasis) -> Vec<Point3<f64>> {
    let [cx, cy] = basis.zernike().center();
    let radius = basis.zernike().radius();
    let legendre = basis.legendre();

    let mut points = Vec::new();
    for i in 0..5 {
        let axial = legendre.z_min() + legendre.length() * (i as f64 + 0.5) / 5.0;
        for (r, theta) in [(0.0, 0.0), (0.3, 1.0), (0.7, 2.5), (0.95, -2.0), (1.0, 0.4)] {
            let transverse = (
                cx + radius * r * f64::cos(theta),
                cy + radius * r * f64::sin(theta),
            );
            points.push(basis.direction().compose(axial, transverse));
        }
    }
    points
}

#[rstest]
#[case(250.0)]
#[case(-3.5)]
#[case(0.0)]
fn constant_field_round_trip(basis: ZernikeLegendreBasis, #[case] c: f64) {
    let coefficients = project(basis, ExpansionOrder::new(0, 0), |_| c);

    assert_relative_eq!(coefficients.to_flat()[0], SQRT_2 * c, max_relative = 1e-12);

    let reconstruction = Reconstruction::new(basis, coefficients);
    for point in sample_points(&basis) {
        assert_abs_diff_eq!(reconstruction.value(&point), c, epsilon = 1e-10);
    }
    assert_abs_diff_eq!(reconstruction.domain_average(), c, epsilon = 1e-10);
}

#[rstest]
#[case(AxialDirection::X)]
#[case(AxialDirection::Y)]
#[case(AxialDirection::Z)]
fn smooth_field_round_trip(#[case] direction: AxialDirection) {
    let basis = basis_along(direction);
    let field = |p: &Point3<f64>| smooth_field(&basis, p);

    let coefficients = project(basis, ExpansionOrder::new(3, 4), field);
    let reconstruction = Reconstruction::new(basis, coefficients);

    for point in sample_points(&basis) {
        assert_abs_diff_eq!(reconstruction.value(&point), field(&point), epsilon = 1e-9);
    }
}

#[rstest]
fn higher_orders_of_a_low_order_field_vanish(basis: ZernikeLegendreBasis) {
    // linear in z, so every l > 1 and every n > 0 term is zero
    let field = |p: &Point3<f64>| 1.0 + 0.25 * p.z;
    let coefficients = project(basis, ExpansionOrder::new(4, 3), field);

    for (l, vector) in coefficients.vectors().iter().enumerate() {
        for (index, c) in vector.terms() {
            if l > 1 || index.n > 0 {
                assert_abs_diff_eq!(c, 0.0, epsilon = 1e-10);
            }
        }
    }
    assert!(coefficients.legendre(1).unwrap().as_slice()[0].abs() > 0.1);
}

#[rstest]
fn parallel_reconstruction_matches_serial(basis: ZernikeLegendreBasis) {
    let field = |p: &Point3<f64>| smooth_field(&basis, p);
    let coefficients = project(basis, ExpansionOrder::new(3, 4), field);
    let reconstruction = Reconstruction::new(basis, coefficients);

    let points = sample_points(&basis);
    let serial: Vec<f64> = points.iter().map(|p| reconstruction.value(p)).collect();
    assert_eq!(reconstruction.values_par(&points), serial);
}

#[rstest]
fn single_order_matches_full_set(basis: ZernikeLegendreBasis) {
    let field = |p: &Point3<f64>| smooth_field(&basis, p);
    let element = cylinder_quadrature(&basis, 8, 8, 24, field).unwrap();
    let kernel = Kernel::cylinder_volume(&basis).unwrap();

    let full = project(basis, ExpansionOrder::new(3, 4), field);

    let mut single = Deconstruction::single_order(basis, 2, 4, kernel);
    single.initialize();
    single.execute(&element).unwrap();
    single.finalize(&LocalReduction).unwrap();

    let row = single.legendre_coefficients(2).unwrap();
    for (a, b) in row.as_slice().iter().zip(full.legendre(2).unwrap().as_slice()) {
        assert_relative_eq!(*a, *b, epsilon = 1e-12, max_relative = 1e-12);
    }

    // lower orders are not part of this projection
    assert!(single.legendre_coefficients(1).is_err());
    let set = single.coefficients().unwrap();
    assert_eq!(set.order(), ExpansionOrder::new(2, 4));
    assert!(set.legendre(0).unwrap().as_slice().iter().all(|c| *c == 0.0));
}

#[rstest]
fn degenerate_volume_gives_zero_coefficients(basis: ZernikeLegendreBasis) {
    let element = cylinder_quadrature(&basis, 2, 2, 4, |_| 1000.0).unwrap();
    let kernel = Kernel::volume(1e-8).unwrap();

    let mut projection = Deconstruction::new(basis, ExpansionOrder::new(1, 1), kernel);
    projection.initialize();
    projection.execute(&element).unwrap();
    projection.finalize(&LocalReduction).unwrap();

    let flat = projection.coefficients().unwrap().to_flat();
    assert!(flat.iter().all(|c| *c == 0.0));
}

#[rstest]
fn uniform_surface_flux(basis: ZernikeLegendreBasis) {
    // points on the curved wall, k |∇T| = 3 everywhere
    let legendre = basis.legendre();
    let radius = basis.zernike().radius();
    let [cx, cy] = basis.zernike().center();
    let (n_axial, n_theta) = (10, 16);
    let dz = legendre.length() / n_axial as f64;
    let d_theta = 2.0 * std::f64::consts::PI / n_theta as f64;

    let mut element = Vec::new();
    for i in 0..n_axial {
        let z = legendre.z_min() + (i as f64 + 0.5) * dz;
        for k in 0..n_theta {
            let theta = k as f64 * d_theta;
            let position = Point3::new(cx + radius * theta.cos(), cy + radius * theta.sin(), z);
            let gradient = Vector3::new(theta.cos(), theta.sin(), 0.0) * 2.0;
            element.push(QuadraturePoint::flux(position, dz * radius * d_theta, 1.5, gradient));
        }
    }

    let kernel = Kernel::cylinder_surface(&basis).unwrap();
    let mut projection = Deconstruction::new(basis, ExpansionOrder::new(0, 0), kernel);
    projection.initialize();
    projection.execute(&element).unwrap();
    projection.finalize(&LocalReduction).unwrap();

    // -k|∇T| A P̃_0 · 4π/A
    let expected = -3.0 * 4.0 * std::f64::consts::PI / SQRT_2;
    assert_relative_eq!(
        projection.coefficients().unwrap().to_flat()[0],
        expected,
        max_relative = 1e-12
    );
}
