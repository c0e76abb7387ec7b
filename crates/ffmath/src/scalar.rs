// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Generic scalar helpers: clamping, interpolation, wrapping, rounding, and
//! approximate comparison.
//!
//! Every helper is written once against [`Number`], and the per-family
//! behavior (floats vs signed integers vs unsigned integers) is selected at
//! compile time by the trait impls at the bottom of this module:
//!
//! | family   | `floor`/`ceil`/`round` | `abs`      | `sign`       | approx compare       |
//! |----------|------------------------|------------|--------------|----------------------|
//! | floats   | `libm` rounding        | `fabs`     | `-1, 0, +1`  | tolerance [`EPSILON`] |
//! | signed   | identity               | magnitude  | `-1, 0, 1`   | exact                |
//! | unsigned | identity               | identity   | `0, 1`       | exact                |

use core::f32::consts::TAU;
use core::fmt::Debug;
use core::ops::{Add, Div, Mul, Sub};

/// Smallest rounding error tolerated by [`equal_approx`] and [`is_zero_approx`].
pub const EPSILON: f32 = 0.00001;

/// Multiply a radian value by this factor to convert it to degrees.
pub const RAD_TO_DEG: f32 = 360.0 / TAU;

/// Multiply a degree value by this factor to convert it to radians.
pub const DEG_TO_RAD: f32 = TAU / 360.0;

/// Built-in numeric types the helpers in this module operate on.
///
/// Arithmetic operators are required via the standard operator traits so the
/// generic formulas read like their scalar counterparts. The methods carry the
/// semantics that differ between numeric families.
pub trait Number:
    Copy
    + Debug
    + PartialOrd
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
{
    /// Additive identity.
    const ZERO: Self;

    /// Multiplicative identity.
    const ONE: Self;

    /// Largest integral value not greater than `self`. Identity for integers.
    fn floor(self) -> Self;

    /// Smallest integral value not less than `self`. Identity for integers.
    fn ceil(self) -> Self;

    /// Nearest integral value, ties away from zero. Identity for integers.
    fn round(self) -> Self;

    /// Absolute value. Identity for unsigned integers.
    fn abs(self) -> Self;

    /// `+1` for positive values, `-1` for negative values, `0` for zero.
    ///
    /// Unsigned integers never return a negative sign. Float NaN propagates.
    fn sign(self) -> Self;

    /// Approximate equality: tolerance-based for floats, exact for integers.
    fn equal_approx(self, other: Self) -> bool;

    /// Approximate zero test: `|self| < EPSILON` for floats, `== 0` for integers.
    fn is_zero_approx(self) -> bool;

    /// Wraps `self` into `[min, max)` using floor-division remainder.
    ///
    /// See [`wrap`] for the exact contract.
    fn wrap(self, min: Self, max: Self) -> Self;

    /// `self + rhs`, wrapping around at the type bounds for integers.
    fn wrapping_add(self, rhs: Self) -> Self;

    /// `self - rhs`, wrapping around at the type bounds for integers.
    fn wrapping_sub(self, rhs: Self) -> Self;

    /// `self * rhs`, wrapping around at the type bounds for integers.
    fn wrapping_mul(self, rhs: Self) -> Self;

    /// `self + rhs`, clamped to the type bounds for integers.
    fn saturating_add(self, rhs: Self) -> Self;

    /// `self - rhs`, clamped to the type bounds for integers.
    fn saturating_sub(self, rhs: Self) -> Self;

    /// `|self - other|`, or `None` when it does not fit in `Self`.
    ///
    /// Always `Some` for floats and unsigned integers.
    fn checked_distance(self, other: Self) -> Option<Self>;

    /// `(self - from) / (to - from)`, never trapping.
    ///
    /// Floats follow IEEE-754 (a zero span yields ±∞ or NaN). Integers
    /// divide the exact span (truncating toward zero), yield zero for a zero
    /// span, and saturate results that do not fit; unsigned results that
    /// would be negative are zero.
    fn fraction(self, from: Self, to: Self) -> Self;
}

/// Returns `val` clamped between `min` and `max`.
///
/// - `val < min` returns `min`
/// - `val > max` returns `max`
/// - otherwise returns `val` unchanged
///
/// Works for any partially ordered type. NaN inputs are returned as-is.
pub fn clamp<T: PartialOrd>(val: T, min: T, max: T) -> T {
    if val < min {
        min
    } else if val > max {
        max
    } else {
        val
    }
}

/// Returns `val` clamped between `0` and `1`.
pub fn clamp01<T: Number>(val: T) -> T {
    clamp(val, T::ZERO, T::ONE)
}

/// Moves `start` towards `end` by `delta`, never overshooting `end`.
///
/// A negative `delta` moves away from `end` without any bound correction.
/// When `start == end` and `delta` is negative the value stays put, because
/// the direction of travel is `sign(0) == 0`.
///
/// Integer steps never overflow: a gap wider than the type can hold is never
/// closed in one step, and stepping past the type bounds saturates.
pub fn move_towards<T: Number>(start: T, end: T, delta: T) -> T {
    if let Some(distance) = start.checked_distance(end) {
        if distance <= delta {
            return end;
        }
        if distance == T::ZERO {
            return start;
        }
    }
    if end >= start {
        start.saturating_add(delta)
    } else {
        start.saturating_sub(delta)
    }
}

/// Linear interpolation between `from` and `to` by `weight`.
///
/// `weight` outside `[0, 1]` extrapolates; pass it through [`clamp01`] if
/// that is not desired. See [`inverse_lerp`] for the reverse operation.
///
/// Integers use wrapping arithmetic, so the result is exact whenever it fits
/// the type even if `to - from` does not.
pub fn lerp<T: Number>(from: T, to: T, weight: T) -> T {
    from.wrapping_add(to.wrapping_sub(from).wrapping_mul(weight))
}

/// Reverse of [`lerp`]: the weight at which `value` sits between `from` and `to`.
///
/// - `[0, 1]` when `value` lies between `from` and `to`
/// - `< 0` below `from`, `> 1` above `to`
///
/// When `from == to` floats yield ±∞ or NaN under IEEE rules and integers
/// yield zero. Integer spans wider than the type are handled exactly; see
/// [`Number::fraction`].
pub fn inverse_lerp<T: Number>(from: T, to: T, value: T) -> T {
    value.fraction(from, to)
}

/// Wraps `value` into the half-open range `[min, max)` instead of clamping.
///
/// Computed as `value - (max - min) * floor((value - min) / (max - min))`.
///
/// - If `max - min` is approximately zero, returns `min`.
/// - If the float result is approximately equal to `max`, returns `max`
///   itself. This sits outside the half-open range and is kept on purpose:
///   callers stepping a value upward by small increments see it land on `max`
///   once before rolling over.
///
/// Integer types use true floor division, so values below `min` wrap from
/// the top of the range (also for unsigned types).
pub fn wrap<T: Number>(value: T, min: T, max: T) -> T {
    value.wrap(min, max)
}

/// Checks whether two numbers are approximately equal.
///
/// Floats compare equal when `a == b`, or when `|a - b|` is below
/// `max(EPSILON, EPSILON * |a|)`. Infinities of the same sign are equal.
/// Integers use plain equality.
pub fn equal_approx<T: Number>(a: T, b: T) -> bool {
    a.equal_approx(b)
}

/// Checks whether `a` is approximately zero. Cheaper than `equal_approx(a, 0)`.
pub fn is_zero_approx<T: Number>(a: T) -> bool {
    a.is_zero_approx()
}

/// Floored value of `a`. Integers are returned as-is.
pub fn floor<T: Number>(a: T) -> T {
    a.floor()
}

/// Ceiled value of `a`. Integers are returned as-is.
pub fn ceil<T: Number>(a: T) -> T {
    a.ceil()
}

/// Rounded value of `a`, ties away from zero. Integers are returned as-is.
pub fn round<T: Number>(a: T) -> T {
    a.round()
}

/// Absolute value of `a`. Unsigned integers are returned as-is.
pub fn abs<T: Number>(a: T) -> T {
    a.abs()
}

/// Sign of `a`: `+1`, `-1`, or `0`. Unsigned integers never return `-1`.
pub fn sign<T: Number>(a: T) -> T {
    a.sign()
}

/// Floating-point remainder `lhs % rhs`, with the sign of `lhs`.
///
/// Computed in double precision and rounded back to `f32`. Cheaper remainder
/// approximations drift near multiples of `rhs`, which breaks
/// [`crate::angle_difference`] at the half-turn boundary.
pub fn fmod(lhs: f32, rhs: f32) -> f32 {
    libm::fmod(f64::from(lhs), f64::from(rhs)) as f32
}

/// Returns `true` unless `f` is NaN or ±∞.
pub fn is_finite(f: f32) -> bool {
    f.is_finite()
}

/// Converts degrees to radians.
pub fn deg_to_rad(value: f32) -> f32 {
    value * DEG_TO_RAD
}

/// Converts radians to degrees.
pub fn rad_to_deg(value: f32) -> f32 {
    value * RAD_TO_DEG
}

macro_rules! impl_float {
    ($t:ty, $floor:path, $ceil:path, $round:path, $fabs:path) => {
        impl Number for $t {
            const ZERO: Self = 0.0;
            const ONE: Self = 1.0;

            #[inline]
            fn floor(self) -> Self {
                $floor(self)
            }

            #[inline]
            fn ceil(self) -> Self {
                $ceil(self)
            }

            #[inline]
            fn round(self) -> Self {
                $round(self)
            }

            #[inline]
            fn abs(self) -> Self {
                $fabs(self)
            }

            #[inline]
            fn sign(self) -> Self {
                if self > 0.0 {
                    1.0
                } else if self < 0.0 {
                    -1.0
                } else {
                    // ±0 or NaN
                    self
                }
            }

            fn equal_approx(self, other: Self) -> bool {
                const EPS: $t = 0.00001;
                if self == other {
                    return true;
                }
                let mut tolerance = EPS * $fabs(self);
                if tolerance < EPS {
                    tolerance = EPS;
                }
                $fabs(self - other) < tolerance
            }

            #[inline]
            fn is_zero_approx(self) -> bool {
                const EPS: $t = 0.00001;
                $fabs(self) < EPS
            }

            fn wrap(self, min: Self, max: Self) -> Self {
                let delta = max - min;
                if delta.is_zero_approx() {
                    return min;
                }
                let result = self - delta * $floor((self - min) / delta);
                if result.equal_approx(max) {
                    return max;
                }
                result
            }

            #[inline]
            fn wrapping_add(self, rhs: Self) -> Self {
                self + rhs
            }

            #[inline]
            fn wrapping_sub(self, rhs: Self) -> Self {
                self - rhs
            }

            #[inline]
            fn wrapping_mul(self, rhs: Self) -> Self {
                self * rhs
            }

            #[inline]
            fn saturating_add(self, rhs: Self) -> Self {
                self + rhs
            }

            #[inline]
            fn saturating_sub(self, rhs: Self) -> Self {
                self - rhs
            }

            #[inline]
            fn checked_distance(self, other: Self) -> Option<Self> {
                Some($fabs(self - other))
            }

            #[inline]
            fn fraction(self, from: Self, to: Self) -> Self {
                (self - from) / (to - from)
            }
        }
    };
}

impl_float!(f32, libm::floorf, libm::ceilf, libm::roundf, libm::fabsf);
impl_float!(f64, libm::floor, libm::ceil, libm::round, libm::fabs);

macro_rules! impl_signed {
    ($($t:ty),* $(,)?) => {$(
        impl Number for $t {
            const ZERO: Self = 0;
            const ONE: Self = 1;

            #[inline]
            fn floor(self) -> Self {
                self
            }

            #[inline]
            fn ceil(self) -> Self {
                self
            }

            #[inline]
            fn round(self) -> Self {
                self
            }

            #[inline]
            fn abs(self) -> Self {
                self.wrapping_abs()
            }

            #[inline]
            fn sign(self) -> Self {
                self.signum()
            }

            #[inline]
            fn equal_approx(self, other: Self) -> bool {
                self == other
            }

            #[inline]
            fn is_zero_approx(self) -> bool {
                self == 0
            }

            fn wrap(self, min: Self, max: Self) -> Self {
                let delta = max.wrapping_sub(min);
                if delta == 0 {
                    return min;
                }
                let offset = self.wrapping_sub(min);
                let mut quotient = offset.wrapping_div(delta);
                if offset.wrapping_rem(delta) != 0 && ((offset < 0) != (delta < 0)) {
                    quotient -= 1;
                }
                self.wrapping_sub(delta.wrapping_mul(quotient))
            }

            #[inline]
            fn wrapping_add(self, rhs: Self) -> Self {
                <$t>::wrapping_add(self, rhs)
            }

            #[inline]
            fn wrapping_sub(self, rhs: Self) -> Self {
                <$t>::wrapping_sub(self, rhs)
            }

            #[inline]
            fn wrapping_mul(self, rhs: Self) -> Self {
                <$t>::wrapping_mul(self, rhs)
            }

            #[inline]
            fn saturating_add(self, rhs: Self) -> Self {
                <$t>::saturating_add(self, rhs)
            }

            #[inline]
            fn saturating_sub(self, rhs: Self) -> Self {
                <$t>::saturating_sub(self, rhs)
            }

            #[inline]
            fn checked_distance(self, other: Self) -> Option<Self> {
                Self::try_from(self.abs_diff(other)).ok()
            }

            fn fraction(self, from: Self, to: Self) -> Self {
                let span = to.abs_diff(from);
                if span == 0 {
                    return 0;
                }
                let magnitude = self.abs_diff(from) / span;
                if (self < from) == (to < from) {
                    Self::try_from(magnitude).unwrap_or(Self::MAX)
                } else {
                    Self::checked_sub_unsigned(0, magnitude).unwrap_or(Self::MIN)
                }
            }
        }
    )*};
}

impl_signed!(i8, i16, i32, i64, i128, isize);

macro_rules! impl_unsigned {
    ($($t:ty),* $(,)?) => {$(
        impl Number for $t {
            const ZERO: Self = 0;
            const ONE: Self = 1;

            #[inline]
            fn floor(self) -> Self {
                self
            }

            #[inline]
            fn ceil(self) -> Self {
                self
            }

            #[inline]
            fn round(self) -> Self {
                self
            }

            #[inline]
            fn abs(self) -> Self {
                self
            }

            #[inline]
            fn sign(self) -> Self {
                Self::from(self != 0)
            }

            #[inline]
            fn equal_approx(self, other: Self) -> bool {
                self == other
            }

            #[inline]
            fn is_zero_approx(self) -> bool {
                self == 0
            }

            fn wrap(self, min: Self, max: Self) -> Self {
                match min.cmp(&max) {
                    core::cmp::Ordering::Equal => min,
                    // [min, max)
                    core::cmp::Ordering::Less => {
                        let delta = max - min;
                        if self >= min {
                            min + (self - min) % delta
                        } else {
                            let back = (min - self) % delta;
                            if back == 0 {
                                min
                            } else {
                                max - back
                            }
                        }
                    }
                    // Reversed bounds land in (max, min], like the float formula.
                    core::cmp::Ordering::Greater => {
                        let delta = min - max;
                        if self <= min {
                            min - (min - self) % delta
                        } else {
                            let forward = (self - min) % delta;
                            if forward == 0 {
                                min
                            } else {
                                max + forward
                            }
                        }
                    }
                }
            }

            #[inline]
            fn wrapping_add(self, rhs: Self) -> Self {
                <$t>::wrapping_add(self, rhs)
            }

            #[inline]
            fn wrapping_sub(self, rhs: Self) -> Self {
                <$t>::wrapping_sub(self, rhs)
            }

            #[inline]
            fn wrapping_mul(self, rhs: Self) -> Self {
                <$t>::wrapping_mul(self, rhs)
            }

            #[inline]
            fn saturating_add(self, rhs: Self) -> Self {
                <$t>::saturating_add(self, rhs)
            }

            #[inline]
            fn saturating_sub(self, rhs: Self) -> Self {
                <$t>::saturating_sub(self, rhs)
            }

            #[inline]
            fn checked_distance(self, other: Self) -> Option<Self> {
                Some(self.abs_diff(other))
            }

            fn fraction(self, from: Self, to: Self) -> Self {
                // Negative quotients are not representable.
                if (self < from) != (to < from) {
                    return 0;
                }
                self.abs_diff(from).checked_div(to.abs_diff(from)).unwrap_or(0)
            }
        }
    )*};
}

impl_unsigned!(u8, u16, u32, u64, u128, usize);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn float_sign_keeps_zero_and_nan() {
        assert_eq!(sign(0.0_f32), 0.0);
        assert_eq!(sign(-3.5_f32), -1.0);
        assert_eq!(sign(2.0_f64), 1.0);
        assert!(sign(f32::NAN).is_nan());
    }

    #[test]
    fn unsigned_sign_is_never_negative() {
        assert_eq!(sign(0_u8), 0);
        assert_eq!(sign(200_u8), 1);
        assert_eq!(sign(u64::MAX), 1);
    }

    #[test]
    fn signed_abs_does_not_trap_at_min() {
        assert_eq!(abs(-5_i32), 5);
        assert_eq!(abs(i8::MIN), i8::MIN);
    }

    #[test]
    fn integer_division_by_zero_is_total() {
        assert_eq!(inverse_lerp(3_i32, 3, 7), 0);
        assert_eq!(inverse_lerp(3_u32, 3, 7), 0);
    }

    #[test]
    fn signed_wrap_uses_floor_division() {
        assert_eq!(wrap(-1_i32, 0, 5), 4);
        assert_eq!(wrap(5_i32, 0, 5), 0);
        assert_eq!(wrap(-6_i32, 0, 5), 4);
        assert_eq!(wrap(12_i32, 10, 12), 10);
        assert_eq!(wrap(3_i32, 7, 7), 7);
    }

    #[test]
    fn unsigned_wrap_below_min_rolls_from_the_top() {
        assert_eq!(wrap(2_u32, 5, 10), 7);
        assert_eq!(wrap(0_u32, 5, 10), 5);
        assert_eq!(wrap(23_u32, 5, 10), 8);
        assert_eq!(wrap(9_u32, 5, 5), 5);
    }

    #[test]
    fn unsigned_wrap_with_reversed_bounds_matches_float_side() {
        // (max, min] == (5, 10]
        assert_eq!(wrap(5_u32, 10, 5), 10);
        assert_eq!(wrap(11_u32, 10, 5), 6);
        assert_eq!(wrap(3_u32, 10, 5), 8);
        assert_eq!(wrap(5.0_f32, 10.0, 5.0), 10.0);
        assert_eq!(wrap(11.0_f32, 10.0, 5.0), 6.0);
    }
}
