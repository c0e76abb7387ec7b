// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

#![allow(missing_docs)]
use ffmath::{
    abs, ceil, clamp, clamp01, equal_approx, floor, fmod, inverse_lerp, is_finite, is_zero_approx,
    lerp, move_towards, round, sign, wrap,
};

#[test]
fn clamp_picks_bound_or_value() {
    assert_eq!(clamp(-3, 0, 10), 0);
    assert_eq!(clamp(13, 0, 10), 10);
    assert_eq!(clamp(7, 0, 10), 7);
    assert_eq!(clamp("m", "a", "k"), "k");
    assert_eq!(clamp01(1.5_f32), 1.0);
    assert_eq!(clamp01(-0.5_f64), 0.0);
    assert_eq!(clamp01(0.25_f32), 0.25);
    assert_eq!(clamp01(7_u8), 1);
}

#[test]
fn lerp_worked_examples() {
    assert_eq!(lerp(0.0_f32, 10.0, 0.0), 0.0);
    assert_eq!(lerp(0.0_f32, 10.0, 1.0), 10.0);
    assert_eq!(lerp(0.0_f32, 10.0, 0.5), 5.0);
    assert_eq!(lerp(0.0_f32, 10.0, 2.0), 20.0);
    assert_eq!(lerp(0.0_f32, 10.0, -1.0), -10.0);
}

#[test]
fn inverse_lerp_worked_examples() {
    assert_eq!(inverse_lerp(0.0_f32, 10.0, 0.0), 0.0);
    assert_eq!(inverse_lerp(0.0_f32, 10.0, 10.0), 1.0);
    assert_eq!(inverse_lerp(0.0_f32, 10.0, 5.0), 0.5);
    assert_eq!(inverse_lerp(0.0_f32, 10.0, 20.0), 2.0);
    assert_eq!(inverse_lerp(0.0_f32, 10.0, -10.0), -1.0);
}

#[test]
fn inverse_lerp_degenerate_range_follows_ieee() {
    assert_eq!(inverse_lerp(2.0_f32, 2.0, 3.0), f32::INFINITY);
    assert_eq!(inverse_lerp(2.0_f32, 2.0, 1.0), f32::NEG_INFINITY);
    assert!(inverse_lerp(2.0_f32, 2.0, 2.0).is_nan());
}

#[test]
fn wrap_stepping_sequence() {
    // Stepping up by 0.5 from 9.0 in [5, 10).
    let mut value = 9.0_f32;
    let mut seen = Vec::new();
    for _ in 0..3 {
        value = wrap(value + 0.5, 5.0, 10.0);
        seen.push(value);
    }
    assert_eq!(seen, vec![9.5, 5.0, 5.5]);

    // And back down.
    seen.clear();
    for _ in 0..3 {
        value = wrap(value - 0.5, 5.0, 10.0);
        seen.push(value);
    }
    assert_eq!(seen, vec![5.0, 9.5, 9.0]);
}

#[test]
fn wrap_snaps_to_max_when_approximately_max() {
    // Lands a hair below max: returned as max itself, outside [min, max).
    assert_eq!(wrap(9.999_999_f32, 5.0, 10.0), 10.0);
    assert_eq!(wrap(-0.000_001_f32, 0.0, 1.0), 1.0);
}

#[test]
fn wrap_with_empty_range_returns_min() {
    assert_eq!(wrap(42.0_f32, 3.0, 3.0), 3.0);
    assert_eq!(wrap(42.0_f32, 3.0, 3.000_001), 3.0);
    assert_eq!(wrap(42_i32, 3, 3), 3);
}

#[test]
fn wrap_integers() {
    assert_eq!(wrap(7_i32, 0, 5), 2);
    assert_eq!(wrap(-3_i64, 0, 5), 2);
    assert_eq!(wrap(10_u8, 5, 10), 5);
    assert_eq!(wrap(4_u8, 5, 10), 9);
}

#[test]
fn equal_approx_table() {
    let cases: &[(f32, f32, bool)] = &[
        (f32::INFINITY, f32::INFINITY, true),
        (f32::NEG_INFINITY, f32::NEG_INFINITY, true),
        (f32::INFINITY, f32::NEG_INFINITY, false),
        (f32::NEG_INFINITY, f32::INFINITY, false),
        (105.0, 105.0, true),
        (105.0, 106.0, false),
        (1.005, 1.005, true),
        (1.005, 1.006, false),
        (1.000_001, 1.000_006, true),
    ];
    for &(a, b, want) in cases {
        assert_eq!(equal_approx(a, b), want, "equal_approx({a}, {b})");
    }
}

#[test]
fn equal_approx_scales_tolerance_with_magnitude() {
    assert!(equal_approx(1_000_000.0_f64, 1_000_009.0));
    assert!(!equal_approx(1_000_000.0_f64, 1_000_011.0));
    assert!(!equal_approx(f32::NAN, f32::NAN));
}

#[test]
fn equal_approx_integers_are_exact() {
    assert!(equal_approx(5_i32, 5));
    assert!(!equal_approx(5_i32, 6));
    assert!(!equal_approx(0_u64, 1));
}

#[test]
fn is_zero_approx_per_family() {
    assert!(is_zero_approx(0.000_009_f32));
    assert!(!is_zero_approx(0.000_01_f32));
    assert!(is_zero_approx(-0.000_001_f64));
    assert!(is_zero_approx(0_i16));
    assert!(!is_zero_approx(1_u16));
}

#[test]
fn rounding_per_family() {
    assert_eq!(floor(-1.5_f32), -2.0);
    assert_eq!(ceil(-1.5_f32), -1.0);
    assert_eq!(round(2.5_f32), 3.0);
    assert_eq!(round(-2.5_f64), -3.0);
    assert_eq!(floor(7_i32), 7);
    assert_eq!(ceil(7_u32), 7);
    assert_eq!(round(-7_i64), -7);
}

#[test]
fn abs_and_sign_per_family() {
    assert_eq!(abs(-2.5_f32), 2.5);
    assert_eq!(abs(-9_i32), 9);
    assert_eq!(abs(9_u32), 9);
    assert_eq!(sign(-0.1_f64), -1.0);
    assert_eq!(sign(0.1_f32), 1.0);
    assert_eq!(sign(0.0_f32), 0.0);
    assert_eq!(sign(-4_i8), -1);
    assert_eq!(sign(0_i8), 0);
    assert_eq!(sign(4_u8), 1);
}

#[test]
fn move_towards_never_overshoots() {
    assert_eq!(move_towards(0.0_f32, 10.0, 3.0), 3.0);
    assert_eq!(move_towards(9.0_f32, 10.0, 3.0), 10.0);
    assert_eq!(move_towards(10.0_f32, 0.0, 4.0), 6.0);
    assert_eq!(move_towards(2_u8, 0, 5), 0);
    assert_eq!(move_towards(8_u8, 0, 5), 3);
    assert_eq!(move_towards(0_u8, 200, 5), 5);
}

#[test]
fn move_towards_negative_delta_moves_away() {
    assert_eq!(move_towards(5.0_f32, 10.0, -2.0), 3.0);
    assert_eq!(move_towards(5_i32, 0, -2), 7);
    assert_eq!(move_towards(5.0_f32, 5.0, -2.0), 5.0);
}

#[test]
fn move_towards_handles_integer_spans_wider_than_the_type() {
    assert_eq!(move_towards(-100_i8, 100, 5), -95);
    assert_eq!(move_towards(100_i8, -100, 5), 95);
    assert_eq!(move_towards(i32::MIN, i32::MAX, 1), i32::MIN + 1);
    assert_eq!(move_towards(i32::MAX, i32::MIN, i32::MAX), 0);
    assert_eq!(move_towards(5_u8, 10, u8::MAX), 10);
}

#[test]
fn move_towards_saturates_when_moving_away() {
    assert_eq!(move_towards(-120_i8, 0, -100), i8::MIN);
    assert_eq!(move_towards(120_i8, 0, -100), i8::MAX);
    assert_eq!(move_towards(120_i8, 127, -100), 20);
}

#[test]
fn integer_lerp_is_exact_when_the_result_fits() {
    assert_eq!(lerp(-100_i8, 100, 0), -100);
    assert_eq!(lerp(-100_i8, 100, 1), 100);
    assert_eq!(lerp(i32::MIN, i32::MAX, 1), i32::MAX);
    assert_eq!(lerp(200_u8, 10, 1), 10);
}

#[test]
fn integer_inverse_lerp_uses_the_exact_span() {
    assert_eq!(inverse_lerp(-100_i8, 100, 0), 0);
    assert_eq!(inverse_lerp(-100_i8, 100, 100), 1);
    assert_eq!(inverse_lerp(100_i8, -100, -100), 1);
    assert_eq!(inverse_lerp(0_i8, 1, -128), -128);
    assert_eq!(inverse_lerp(-128_i8, -127, 127), i8::MAX);
    assert_eq!(inverse_lerp(i32::MIN, i32::MAX, i32::MAX), 1);
}

#[test]
fn unsigned_inverse_lerp_below_from_is_zero() {
    assert_eq!(inverse_lerp(10_u8, 20, 5), 0);
    assert_eq!(inverse_lerp(20_u8, 10, 0), 2);
    assert_eq!(inverse_lerp(10_u8, 20, 40), 3);
}

#[test]
fn fmod_keeps_sign_of_lhs() {
    assert_eq!(fmod(7.0, 3.0), 1.0);
    assert_eq!(fmod(-7.0, 3.0), -1.0);
    assert_eq!(fmod(7.0, -3.0), 1.0);
    assert!(fmod(1.0, 0.0).is_nan());
}

#[test]
fn is_finite_rejects_nan_and_infinities() {
    assert!(is_finite(0.0));
    assert!(is_finite(f32::MAX));
    assert!(!is_finite(f32::NAN));
    assert!(!is_finite(f32::INFINITY));
    assert!(!is_finite(f32::NEG_INFINITY));
}
