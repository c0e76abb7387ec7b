// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Fast `f32` approximations for square root, arctangent, and sine/cosine.
//!
//! These trade a bounded amount of accuracy for speed on 32-bit targets
//! without an FPU-backed libm:
//! - [`sqrt`]: exponent-halving estimate plus two Newton steps. Relative
//!   error stays far below the promised 5%.
//! - [`atan2_norm`]: rational first-quadrant approximation in quarter-turns,
//!   absolute error ≤ 0.1620°.
//! - [`sin_cos`]: octant range reduction with short Taylor polynomials.

use core::f32::consts::{FRAC_PI_2, TAU};

const SIGN_MASK: u32 = 0x8000_0000;

/// 2^64.
const SUBNORMAL_SCALE: f32 = 18_446_744_073_709_551_616.0;
/// 2^-32.
const SUBNORMAL_UNSCALE: f32 = 1.0 / 4_294_967_296.0;

/// Approximate square root.
///
/// - `0` and `+∞` are returned unchanged.
/// - Negative inputs and NaN return NaN.
/// - Subnormal inputs keep the same relative accuracy as normal ones.
pub fn sqrt(x: f32) -> f32 {
    if x.is_nan() || x < 0.0 {
        return f32::NAN;
    }
    if x == 0.0 || x.is_infinite() {
        return x;
    }
    if x < f32::MIN_POSITIVE {
        // Subnormal: the exponent trick needs a normal input. Scale by 2^64
        // and undo with 2^-32 on the root; both are exact.
        return sqrt(x * SUBNORMAL_SCALE) * SUBNORMAL_UNSCALE;
    }
    // Halving the biased exponent gives an estimate within ~6%.
    let mut y = f32::from_bits((x.to_bits() + 0x3f80_0000) >> 1);
    y = 0.5 * (y + x / y);
    0.5 * (y + x / y)
}

/// Approximate four-quadrant arctangent normalized to quarter-turns.
///
/// Returns a value in `[0, 4)`: `(1, 0)` maps to `0`, `(0, 1)` to `1`,
/// `(-1, 0)` to `2`, and `(0, -1)` to `3`. Multiply by `π/2` for radians.
/// `(0, 0)` has no direction and yields NaN.
pub fn atan2_norm(y: f32, x: f32) -> f32 {
    const B: f32 = 0.596_227;

    let ux_s = SIGN_MASK & x.to_bits();
    let uy_s = SIGN_MASK & y.to_bits();

    // Quadrant offset: 0 for +x/+y, 2 for -x, 4 for +x/-y.
    let q = (((!ux_s & uy_s) >> 29) | (ux_s >> 30)) as f32;

    let bxy_a = (B * x * y).abs();
    let n = bxy_a + y * y;
    let atan_1q = n / (x * x + bxy_a + n);

    // Flip the first-quadrant result when the signs differ, then offset.
    let uatan_2q = (ux_s ^ uy_s) | atan_1q.to_bits();
    q + f32::from_bits(uatan_2q)
}

/// Approximate sine and cosine of `angle` (radians), returned as `(sin, cos)`.
///
/// Non-finite angles yield `(NaN, NaN)`.
pub fn sin_cos(angle: f32) -> (f32, f32) {
    if !angle.is_finite() {
        return (f32::NAN, f32::NAN);
    }

    let r = angle.rem_euclid(TAU);
    // Nearest quarter turn, leaving a residual in [-π/4, π/4].
    let quadrant = (r / FRAC_PI_2 + 0.5) as u32;
    let a = r - quadrant as f32 * FRAC_PI_2;

    let s = sin_poly(a);
    let c = cos_poly(a);

    match quadrant % 4 {
        0 => (s, c),
        1 => (c, -s),
        2 => (-s, -c),
        _ => (-c, s),
    }
}

#[inline]
fn sin_poly(a: f32) -> f32 {
    let a2 = a * a;
    a * (1.0 + a2 * (-1.0 / 6.0 + a2 * (1.0 / 120.0 + a2 * (-1.0 / 5040.0 + a2 / 362_880.0))))
}

#[inline]
fn cos_poly(a: f32) -> f32 {
    let a2 = a * a;
    1.0 + a2 * (-0.5 + a2 * (1.0 / 24.0 + a2 * (-1.0 / 720.0 + a2 * (1.0 / 40_320.0 - a2 / 3_628_800.0))))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sqrt_relative_error_is_small() {
        for x in [
            1e-6_f32,
            0.25,
            1.0,
            2.0,
            10.0,
            12345.678,
            3.0e30,
            f32::MIN_POSITIVE,
            f32::MIN_POSITIVE / 2.0,
            1e-40,
            1e-45,
        ] {
            let exact = x.sqrt();
            let rel = ((sqrt(x) - exact) / exact).abs();
            assert!(rel < 1e-5, "sqrt({x}): relative error {rel}");
        }
    }

    #[test]
    fn sqrt_special_values() {
        assert_eq!(sqrt(0.0), 0.0);
        assert_eq!(sqrt(f32::INFINITY), f32::INFINITY);
        assert!(sqrt(-1.0).is_nan());
        assert!(sqrt(f32::NAN).is_nan());
    }

    #[test]
    fn atan2_norm_cardinal_directions() {
        assert_eq!(atan2_norm(0.0, 1.0), 0.0);
        assert_eq!(atan2_norm(1.0, 0.0), 1.0);
        assert_eq!(atan2_norm(0.0, -1.0), 2.0);
        assert_eq!(atan2_norm(-1.0, 0.0), 3.0);
        assert!(atan2_norm(0.0, 0.0).is_nan());
    }

    #[test]
    fn atan2_norm_error_bound() {
        let bound = 0.17_f32.to_radians();
        let mut deg = -179.5_f32;
        while deg < 180.0 {
            let theta = deg.to_radians();
            let (y, x) = theta.sin_cos();
            let approx = atan2_norm(y, x) * FRAC_PI_2;
            let exact = y.atan2(x).rem_euclid(TAU);
            let mut err = (approx - exact).abs();
            if err > core::f32::consts::PI {
                err = TAU - err;
            }
            assert!(err <= bound, "deg {deg}: error {err}");
            deg += 0.5;
        }
    }

    #[test]
    fn sin_cos_tracks_std() {
        let mut theta = -20.0_f32;
        while theta < 20.0 {
            let (s, c) = sin_cos(theta);
            assert!((s - theta.sin()).abs() < 5e-6, "sin({theta})");
            assert!((c - theta.cos()).abs() < 5e-6, "cos({theta})");
            theta += 0.173;
        }
    }

    #[test]
    fn sin_cos_non_finite() {
        let (s, c) = sin_cos(f32::INFINITY);
        assert!(s.is_nan() && c.is_nan());
    }
}
