//! Integration test: vector construction and operation contracts.
//!
//! Builds buffers from seeded random input, runs every operation
//! through the facade, and checks the results against the naive
//! reference loops in `cvec-test-utils`.

use cvec::prelude::*;
use cvec_test_utils::{
    assert_all_close, nonzero_vec, ramp, random_buffer, random_vec, reference, seeded_rng,
    DEFAULT_SEED,
};

const N: usize = 20;

// ── Construction ─────────────────────────────────────────────────────

#[test]
fn new_has_requested_length() {
    let v = Buffer::<f64>::new(N);
    assert_eq!(v.len(), N);
}

#[test]
fn new_with_const_fills_every_element() {
    let v = Buffer::new_with_const(2.0f64, N);
    assert_eq!(v.len(), N);
    assert!(v.iter().all(|&x| x == 2.0));
}

#[test]
fn new_from_array_matches_source() {
    let mut rng = seeded_rng(DEFAULT_SEED);
    let a: Vec<f64> = random_vec(&mut rng, N, -20.0, 20.0);
    let v = Buffer::new_from_array(&a);
    assert_all_close(v.as_slice(), &a, 1e-10);
}

#[test]
fn copies_are_equal_and_independent() {
    let mut rng = seeded_rng(DEFAULT_SEED);
    let x: Buffer<f64> = random_buffer(&mut rng, N, -20.0, 20.0);
    let mut copy = Buffer::new_from_copy(&x);
    assert!(ops::equals(&x, &copy));

    let before = x.to_vec();
    ops::scale_by(3.0, &mut copy);
    copy.push(1.0);
    assert_eq!(x.to_vec(), before);
    assert!(!ops::equals(&x, &copy));
}

// ── Elementwise ──────────────────────────────────────────────────────

#[test]
fn prod_matches_reference() {
    let mut rng = seeded_rng(1);
    let a: Vec<f64> = random_vec(&mut rng, N, -20.0, 20.0);
    let b: Vec<f64> = random_vec(&mut rng, N, -20.0, 20.0);
    let (va, vb) = (Buffer::new_from_array(&a), Buffer::new_from_array(&b));
    let expected = reference::elementwise(&a, &b, |x, y| x * y);

    let mut vc = Buffer::new(N);
    ops::prod(&va, &vb, &mut vc).unwrap();
    assert_all_close(vc.as_slice(), &expected, 1e-10);

    let vc = ops::new_from_prod(&va, &vb).unwrap();
    assert_eq!(vc.len(), N);
    assert_all_close(vc.as_slice(), &expected, 1e-10);
}

#[test]
fn div_matches_reference() {
    let mut rng = seeded_rng(2);
    let a: Vec<f64> = random_vec(&mut rng, N, -20.0, 20.0);
    let b: Vec<f64> = nonzero_vec(&mut rng, N, -20.0, 20.0, 1e-3);
    let (va, vb) = (Buffer::new_from_array(&a), Buffer::new_from_array(&b));
    let expected = reference::elementwise(&a, &b, |x, y| x / y);

    let mut vc = Buffer::new(N);
    ops::div(&va, &vb, &mut vc).unwrap();
    assert_all_close(vc.as_slice(), &expected, 1e-10);

    let vc = ops::new_from_div(&va, &vb).unwrap();
    assert_all_close(vc.as_slice(), &expected, 1e-10);
}

#[test]
fn in_place_forms_alias_the_destination() {
    let mut rng = seeded_rng(3);
    let x: Buffer<f64> = random_buffer(&mut rng, N, -5.0, 5.0);
    let y: Buffer<f64> = random_buffer(&mut rng, N, -5.0, 5.0);

    let written = ops::new_from_prod(&x, &y).unwrap();
    let mut aliased = x.clone();
    ops::prod_assign(&mut aliased, &y).unwrap();
    assert!(ops::equals(&written, &aliased));

    let mut z = x.clone();
    ops::abs_assign(&mut z);
    assert!(ops::equals(&z, &ops::new_from_abs(&x)));

    let mut z = x.clone();
    ops::add_const_assign(&mut z, 1.5);
    assert!(ops::equals(&z, &ops::new_from_add_const(&x, 1.5)));
}

#[test]
fn inverse_and_abs_match_reference() {
    let mut rng = seeded_rng(4);
    let a: Vec<f64> = nonzero_vec(&mut rng, N, -20.0, 20.0, 1e-3);
    let x = Buffer::new_from_array(&a);

    let inv = ops::new_from_inv(&x);
    let expected: Vec<f64> = a.iter().map(|v| 1.0 / v).collect();
    assert_all_close(inv.as_slice(), &expected, 1e-10);

    let mut abs = Buffer::new(N);
    ops::abs(&x, &mut abs).unwrap();
    let expected: Vec<f64> = a.iter().map(|v| v.abs()).collect();
    assert_all_close(abs.as_slice(), &expected, 0.0);
}

#[test]
fn mismatched_lengths_are_rejected_everywhere() {
    let x = Buffer::new_with_const(1.0f64, 3);
    let y = Buffer::new_with_const(1.0f64, 4);
    let mut z = Buffer::new(3);

    assert!(matches!(
        ops::prod(&x, &y, &mut z),
        Err(VectorError::LengthMismatch { .. })
    ));
    assert!(ops::div(&x, &y, &mut z).is_err());
    assert!(ops::new_from_prod(&x, &y).is_err());
    assert!(ops::new_from_div(&x, &y).is_err());
    assert!(ops::dot_prod(&x, &y).is_err());
    assert!(ops::w_rms_norm(&x, &y).is_err());
    assert!(ops::w_l2_norm(&x, &y).is_err());
    assert!(ops::axpy(2.0, &x, &mut y.clone()).is_err());
    assert!(ops::add_const(&y, 1.0, &mut z).is_err());
}

// ── Reductions ───────────────────────────────────────────────────────

#[test]
fn dot_prod_matches_reference() {
    let mut rng = seeded_rng(5);
    for n in [1, 2, 7, N, 100] {
        let a: Vec<f64> = random_vec(&mut rng, n, -20.0, 20.0);
        let b: Vec<f64> = random_vec(&mut rng, n, -20.0, 20.0);
        let expected = reference::dot(&a, &b);
        let got = ops::dot_prod(&Buffer::new_from_array(&a), &Buffer::new_from_array(&b)).unwrap();
        assert!((got - expected).abs() <= 1e-10, "n={n}: {got} vs {expected}");
    }
}

#[test]
fn max_norm_of_ramps() {
    let up = ramp::<f64>(N, false);
    let down = ramp::<f64>(N, true);
    assert_eq!(ops::max_norm(&up).unwrap(), (N - 1) as f64);
    assert_eq!(ops::max_norm(&down).unwrap(), (N - 1) as f64);
}

#[test]
fn min_of_ramps() {
    assert_eq!(ops::min(&ramp::<f64>(N, false)).unwrap(), 0.0);
    assert_eq!(ops::min(&ramp::<f64>(N, true)).unwrap(), -((N - 1) as f64));
}

#[test]
fn weighted_rms_regression() {
    let x = Buffer::new_from_array(&[2.0f64, 3.0, 5.0]);
    let w = Buffer::new_from_array(&[1.0f64, 1.0, 1.0]);
    let norm = ops::w_rms_norm(&x, &w).unwrap();
    assert!((norm - 3.559026084010437).abs() < 1e-10);
}

#[test]
fn weighted_rms_matches_reference() {
    let mut rng = seeded_rng(6);
    let a: Vec<f64> = random_vec(&mut rng, N, -20.0, 20.0);
    let w: Vec<f64> = random_vec(&mut rng, N, 0.0, 1.0);
    let expected = reference::weighted_rms(&a, &w);
    let got = ops::w_rms_norm(&Buffer::new_from_array(&a), &Buffer::new_from_array(&w)).unwrap();
    assert_eq!(got, expected);
}

#[test]
fn l1_norm_sums_magnitudes() {
    let down = ramp::<f64>(N, true);
    let expected = (0..N).map(|i| i as f64).sum::<f64>();
    assert_eq!(ops::l1_norm(&down), expected);
}

#[test]
fn empty_reductions_are_defined() {
    let empty = Buffer::<f64>::null();
    assert_eq!(ops::dot_prod(&empty, &empty), Ok(0.0));
    assert_eq!(ops::l1_norm(&empty), 0.0);
    assert_eq!(ops::w_l2_norm(&empty, &empty), Ok(0.0));
    assert!(matches!(
        ops::max_norm(&empty),
        Err(VectorError::EmptyInput { .. })
    ));
    assert!(matches!(ops::min(&empty), Err(VectorError::EmptyInput { .. })));
    assert!(matches!(
        ops::w_rms_norm(&empty, &empty),
        Err(VectorError::EmptyInput { .. })
    ));
}

// ── axpy ─────────────────────────────────────────────────────────────

#[test]
fn axpy_agrees_with_naive_loop_for_all_coefficient_paths() {
    let mut rng = seeded_rng(7);
    let x: Vec<f64> = random_vec(&mut rng, N, -20.0, 20.0);
    let y: Vec<f64> = random_vec(&mut rng, N, -20.0, 20.0);
    let bx = Buffer::new_from_array(&x);

    for a in [1.0, -1.0, 0.0, 2.5, -0.75] {
        let mut by = Buffer::new_from_array(&y);
        ops::axpy(a, &bx, &mut by).unwrap();
        assert_all_close(by.as_slice(), &reference::axpy(a, &x, &y), 0.0);
    }
}

#[test]
fn axpy_unit_paths_add_and_subtract() {
    let x = Buffer::new_from_array(&[1.0f64, 2.0]);
    let y = Buffer::new_from_array(&[10.0f64, 10.0]);
    assert_eq!(ops::new_from_axpy(1.0, &x, &y).unwrap().to_vec(), vec![11.0, 12.0]);
    assert_eq!(ops::new_from_axpy(-1.0, &x, &y).unwrap().to_vec(), vec![9.0, 8.0]);
}

// ── Equality ─────────────────────────────────────────────────────────

#[test]
fn equal_sources_give_equal_buffers() {
    let a = Buffer::new_with_const(2.5f64, N);
    let b = Buffer::new_from_array(a.as_slice());
    assert!(ops::equals(&a, &b));
    assert!(ops::equals_tol(&a, &b, 0.0));
}

#[test]
fn equals_implies_elementwise_identity() {
    let mut rng = seeded_rng(8);
    let a: Buffer<f64> = random_buffer(&mut rng, N, -20.0, 20.0);
    let b: Buffer<f64> = random_buffer(&mut rng, N, -20.0, 20.0);
    if ops::equals(&a, &b) {
        assert_eq!(a.to_vec(), b.to_vec());
    } else {
        assert_ne!(a.to_vec(), b.to_vec());
    }
}

#[test]
fn single_precision_instantiation() {
    let x = Buffer::new_from_array(&[3.0f32, 4.0]);
    let w = Buffer::new_with_const(1.0f32, 2);
    assert_eq!(ops::w_l2_norm(&x, &w).unwrap(), 5.0f32);
    assert_eq!(ops::max_norm(&x).unwrap(), 4.0f32);
}
