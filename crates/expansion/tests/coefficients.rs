//! Coefficient layout, inference of orders, and configuration

use std::io::Write;

use fetools_basis::{AxialDirection, ZernikeIndex};
use fetools_expansion::{CoefficientSet, CoefficientVector, Error, ExpansionConfig, ExpansionOrder};
use rstest::rstest;

#[rstest]
#[case(0)]
#[case(5)]
#[case(7)]
#[case(12)]
fn zernike_order_2_needs_exactly_6(#[case] length: usize) {
    let result = CoefficientVector::from_vec(vec![0.0; length], 2);
    assert!(matches!(
        result,
        Err(Error::CoefficientCountMismatch { expected: 6, .. })
    ));
}

#[rstest]
#[case(1, 0)]
#[case(3, 1)]
#[case(6, 2)]
#[case(45, 8)]
fn zernike_order_is_inferred(#[case] length: usize, #[case] n_order: usize) {
    let vector = CoefficientVector::try_from_vec(vec![1.0; length]).unwrap();
    assert_eq!(vector.n_order(), n_order);
    assert_eq!(vector.len(), length);
}

#[rstest]
#[case(2)]
#[case(4)]
#[case(44)]
fn non_triangular_length_is_rejected(#[case] length: usize) {
    assert!(matches!(
        CoefficientVector::try_from_vec(vec![1.0; length]),
        Err(Error::IncompleteZernikeSet(_))
    ));
}

#[rstest]
fn terms_follow_canonical_order() {
    let vector = CoefficientVector::try_from_vec((0..6).map(f64::from).collect()).unwrap();
    let terms: Vec<(i32, i32, f64)> = vector
        .terms()
        .map(|(index, c)| (index.n as i32, index.m, c))
        .collect();

    assert_eq!(
        terms,
        vec![
            (0, 0, 0.0),
            (1, -1, 1.0),
            (1, 1, 2.0),
            (2, -2, 3.0),
            (2, 0, 4.0),
            (2, 2, 5.0)
        ]
    );
}

#[rstest]
fn flat_layout_is_legendre_major() {
    let order = ExpansionOrder::new(2, 1);
    let flat: Vec<f64> = (0..9).map(f64::from).collect();
    let set = CoefficientSet::from_flat(order, &flat).unwrap();

    // (l=2; n=1, m=1) sits at 2 * T(1) + 2
    let index = ZernikeIndex::new(1, 1).unwrap();
    assert_eq!(set.get(2, index), Some(8.0));
    assert_eq!(set.get(1, ZernikeIndex::new(0, 0).unwrap()), Some(3.0));
    assert_eq!(set.get(3, index), None);
    assert_eq!(set.to_flat(), flat);
}

#[rstest]
#[case(ExpansionOrder::new(2, 1), 8)]
#[case(ExpansionOrder::new(2, 1), 10)]
#[case(ExpansionOrder::new(0, 2), 0)]
fn flat_length_mismatch_fails_loudly(#[case] order: ExpansionOrder, #[case] length: usize) {
    let result = CoefficientSet::from_flat(order, &vec![0.0; length]);
    match result {
        Err(Error::CoefficientCountMismatch { expected, found }) => {
            assert_eq!(expected, order.num_coefficients());
            assert_eq!(found, length);
        }
        other => panic!("unexpected {other:?}"),
    }
}

#[rstest]
fn from_vectors_matches_from_flat() {
    let vectors = vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]];
    let set = CoefficientSet::from_vectors(vectors).unwrap();
    let expected =
        CoefficientSet::from_flat(ExpansionOrder::new(1, 1), &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0])
            .unwrap();
    assert_eq!(set, expected);
}

#[rstest]
fn from_vectors_requires_equal_lengths() {
    let result = CoefficientSet::from_vectors(vec![vec![0.0; 6], vec![0.0; 6], vec![0.0; 3]]);
    assert!(matches!(
        result,
        Err(Error::CoefficientCountMismatch {
            expected: 6,
            found: 3
        })
    ));
}

#[rstest]
fn display_lists_every_legendre_order() {
    let set = CoefficientSet::zeros(ExpansionOrder::new(2, 0));
    let text = set.to_string();
    assert!(text.starts_with("Zernike-Legendre coefficients (L=2, N=0)"));
    assert_eq!(text.lines().count(), 4);
    assert!(text.contains("0.00000e+00"));
}

#[rstest]
fn negative_orders_are_rejected() {
    assert!(matches!(
        ExpansionOrder::try_from_signed(3, -2),
        Err(Error::NegativeOrder { l: 3, n: -2 })
    ));
}

#[rstest]
fn config_defaults() {
    let config = ExpansionConfig::from_json(
        r#"{"l_order": 1, "n_order": 3, "l_geom_norm": [-1.0, 1.0], "radius": 2.0}"#,
    )
    .unwrap();
    assert_eq!(config.l_direction, AxialDirection::Z);
    assert_eq!(config.center, [0.0, 0.0]);

    let (basis, order) = config.build().unwrap();
    assert_eq!(order, ExpansionOrder::new(1, 3));
    assert_eq!(basis.legendre().length(), 2.0);
    assert_eq!(basis.zernike().radius(), 2.0);
}

#[rstest]
#[case(r#"{"l_order": -1, "n_order": 3, "l_geom_norm": [0.0, 1.0], "radius": 1.0}"#)]
#[case(r#"{"l_order": 1, "n_order": 3, "l_geom_norm": [0.0, 1.0]}"#)]
#[case(r#"{"l_order": 1, "n_order": 3, "l_geom_norm": [0.0, 1.0], "radius": 1.0, "dbg": true}"#)]
#[case(r#"{"l_order": 1, "n_order": 3, "l_direction": "w", "l_geom_norm": [0.0, 1.0], "radius": 1.0}"#)]
fn malformed_config_is_rejected(#[case] json: &str) {
    assert!(matches!(
        ExpansionConfig::from_json(json),
        Err(Error::JsonError(_))
    ));
}

#[rstest]
#[case([1.0, 1.0], 1.0)]
#[case([2.0, 1.0], 1.0)]
#[case([0.0, 1.0], 0.0)]
#[case([0.0, 1.0], -1.0)]
fn invalid_geometry_fails_to_build(#[case] l_geom_norm: [f64; 2], #[case] radius: f64) {
    let config = ExpansionConfig {
        l_order: 2,
        n_order: 2,
        l_direction: AxialDirection::X,
        l_geom_norm,
        radius,
        center: [0.0, 0.0],
    };
    assert!(matches!(config.build(), Err(Error::BasisError(_))));
}

#[rstest]
fn config_from_file() {
    let config = ExpansionConfig {
        l_order: 5,
        n_order: 4,
        l_direction: AxialDirection::Y,
        l_geom_norm: [0.0, 366.0],
        radius: 0.4095,
        center: [1.26, 1.26],
    };

    let path = std::env::temp_dir().join("fetools_expansion_config.json");
    let mut file = std::fs::File::create(&path).unwrap();
    file.write_all(serde_json::to_string(&config).unwrap().as_bytes())
        .unwrap();

    assert_eq!(ExpansionConfig::read_json(&path).unwrap(), config);
    std::fs::remove_file(&path).unwrap();
}

#[rstest]
fn missing_file_is_an_io_error() {
    let result = ExpansionConfig::read_json("this/path/does/not/exist.json");
    assert!(matches!(result, Err(Error::IOError(_))));
}
