//! End-to-end checks of the quaternion kernel against nalgebra and faer matrices.

use apex_quaternion::{
    IntegrationMethod, PropagationConfig, QuatError, Quaternion, Quaterniond, Quaternionf,
    propagate,
};
use faer::Mat;
use nalgebra::{DMatrix, Matrix3};
use std::f64::consts::{FRAC_1_SQRT_2, PI};

const TOLERANCE: f64 = 1e-12;

/// Reference unit quaternion and its rotation matrix, computed independently.
struct Fixture {
    q: Quaterniond,
    matrix: Matrix3<f64>,
}

impl Fixture {
    fn new() -> Self {
        let q = Quaternion::new(
            0.533215448243828,
            0.592817248117098,
            0.083109566226999,
            0.597780725760344,
        );

        #[rustfmt::skip]
        let matrix = Matrix3::new(
            0.271502007821992, -0.538954266589856,  0.797380058863537,
            0.736029403961437, -0.417548171511386, -0.532836035729257,
            0.620118840427219,  0.731561222996468,  0.283321020672862,
        );

        Self { q, matrix }
    }
}

fn assert_components(q: &Quaterniond, expected: [f64; 4], tolerance: f64) {
    for (i, value) in expected.iter().enumerate() {
        assert!(
            (q[i] - value).abs() < tolerance,
            "component {i}: expected {value}, got {}",
            q[i]
        );
    }
}

fn permutation(entries: [(usize, usize, f64); 3]) -> Matrix3<f64> {
    let mut s = Matrix3::zeros();
    for (row, col, value) in entries {
        s[(row, col)] = value;
    }
    s
}

#[test]
fn test_to_matrix_matches_reference() {
    let fixture = Fixture::new();
    let r: Matrix3<f64> = fixture.q.to_matrix();
    for i in 0..3 {
        for j in 0..3 {
            assert!((r[(i, j)] - fixture.matrix[(i, j)]).abs() < TOLERANCE);
        }
    }
}

#[test]
fn test_from_matrix_matches_reference() {
    let fixture = Fixture::new();
    let q = Quaternion::from_matrix(&fixture.matrix);
    assert_components(&q, fixture.q.coords(), TOLERANCE);

    let checked = Quaternion::try_from_matrix(&fixture.matrix, 1e-9).expect("reference rotation");
    assert_eq!(q, checked);
}

#[test]
fn test_from_matrix_singularities() {
    let s = permutation([(0, 1, 1.0), (1, 0, 1.0), (2, 2, -1.0)]);
    assert_components(
        &Quaternion::from_matrix(&s),
        [0.0, FRAC_1_SQRT_2, FRAC_1_SQRT_2, 0.0],
        TOLERANCE,
    );

    let s = permutation([(0, 0, -1.0), (1, 2, 1.0), (2, 1, 1.0)]);
    assert_components(
        &Quaternion::from_matrix(&s),
        [0.0, 0.0, FRAC_1_SQRT_2, FRAC_1_SQRT_2],
        TOLERANCE,
    );

    let s = permutation([(0, 2, 1.0), (1, 1, -1.0), (2, 0, 1.0)]);
    assert_components(
        &Quaternion::from_matrix(&s),
        [0.0, FRAC_1_SQRT_2, 0.0, FRAC_1_SQRT_2],
        TOLERANCE,
    );
}

#[test]
fn test_faer_and_nalgebra_agree() {
    let q = Quaternion::rotation(1.9, -0.4, 0.9, 0.2);
    let r_nalgebra: Matrix3<f64> = q.to_matrix();
    let r_faer: Mat<f64> = q.to_matrix();
    let r_dynamic: DMatrix<f64> = q.to_matrix();

    for i in 0..3 {
        for j in 0..3 {
            assert_eq!(r_nalgebra[(i, j)], r_faer[(i, j)]);
            assert_eq!(r_nalgebra[(i, j)], r_dynamic[(i, j)]);
        }
    }

    assert_eq!(
        Quaternion::from_matrix(&r_nalgebra),
        Quaternion::from_matrix(&r_faer)
    );
}

#[test]
fn test_checked_conversion_rejects_wrong_shape() {
    let m = Mat::<f64>::zeros(3, 4);
    assert_eq!(
        Err(QuatError::InvalidMatrixShape { rows: 3, cols: 4 }),
        Quaternion::try_from_matrix(&m, 1e-9)
    );
}

#[test]
fn test_precision_types_are_distinct() {
    let qf = Quaternionf::new(0.1, 0.1, 0.1, 0.1);
    assert_ne!(0.1_f64, f64::from(qf.a()));

    let qd = Quaterniond::new(0.1, 0.1, 0.1, 0.1);
    assert_eq!(0.1, qd.a());
}

#[test]
fn test_algebra_sequence() {
    let qa = Quaternion::new(1.0, 2.0, 3.0, 4.0);
    let qb = Quaternion::new(1.0, -2.0, 3.0, -2.0);
    assert_components(&(qa + qb), [2.0, 0.0, 6.0, 2.0], TOLERANCE);

    let mut q = qa * 2.0;
    assert_components(&q, [2.0, 4.0, 6.0, 8.0], TOLERANCE);
    q *= 0.5;
    assert_components(&q, [1.0, 2.0, 3.0, 4.0], TOLERANCE);
    q /= 2.0;
    assert_components(&q, [0.5, 1.0, 1.5, 2.0], TOLERANCE);

    let mut unit = Quaternion::new(1.0, 1.0, 1.0, 1.0);
    assert_eq!(2.0, unit.norm());
    assert_eq!([1.0, -1.0, -1.0, -1.0], unit.conjugate().coords());
    unit.normalize();
    assert_eq!([0.5, 0.5, 0.5, 0.5], unit.coords());
}

#[test]
fn test_rotation_factory() {
    let qx = Quaternion::rotation(PI / 3.0, 1.0, 0.0, 0.0);
    assert_components(&qx, [3.0_f64.sqrt() / 2.0, 0.5, 0.0, 0.0], TOLERANCE);

    let qy = Quaternion::rotation(PI / 2.0, 0.0, 1.0, 0.0);
    assert_components(&qy, [FRAC_1_SQRT_2, 0.0, FRAC_1_SQRT_2, 0.0], TOLERANCE);

    let qz = Quaternion::rotation(PI, 0.0, 0.0, 1.0);
    assert_components(&qz, [0.0, 0.0, 0.0, 1.0], TOLERANCE);

    let qnull = Quaternion::rotation_vector(0.0, 0.0, 0.0);
    assert_eq!([1.0, 0.0, 0.0, 0.0], qnull.coords());
}

#[test]
fn test_integration_converges_to_closed_form() {
    let w = Quaternion::pure(0.0, 0.0, 60.0 / 180.0 * PI);
    let mut qe = Quaterniond::default();
    let mut qr = Quaterniond::default();

    for _ in 0..100_000 {
        qe.integrate_euler(&w, 0.00001);
        qr.integrate_runge_kutta4(&w, 0.00001);
    }

    let expected = [3.0_f64.sqrt() / 2.0, 0.0, 0.0, 0.5];
    assert_components(&qe, expected, 1e-10);
    assert_components(&qr, expected, 1e-10);
}

#[test]
fn test_propagate_agrees_with_in_place_integration() {
    let w = Quaternion::pure(0.2, -0.1, 0.5);
    let config = PropagationConfig::new(1e-3).with_method(IntegrationMethod::RungeKutta4);
    let result = propagate(Quaternion::identity(), &w, 2000, &config).expect("valid config");

    let mut q = Quaternion::identity();
    for _ in 0..2000 {
        q.integrate_runge_kutta4(&w, 1e-3);
    }
    assert_eq!(q, result);

    // Two seconds at constant rate
    let expected = Quaternion::rotation_vector(0.4, -0.2, 1.0);
    assert!(result.is_approx(&expected, 1e-10));
}
