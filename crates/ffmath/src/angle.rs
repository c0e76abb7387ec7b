// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Angles as wrapped radian scalars, plus shortest-path angle arithmetic.
//!
//! An [`Angle`] may carry any radian value between operations. Only
//! [`Angle::normalize`] maps it into `[0, 2π)`; [`angle_difference`] folds its
//! result into `[-π, π]` internally, so callers never need to pre-normalize.

use core::f32::consts::{FRAC_PI_2, PI, TAU};
use core::ops::{Add, Mul, Neg, Sub};

use crate::scalar::{abs, clamp, fmod, sign, DEG_TO_RAD, RAD_TO_DEG};

/// Angle stored in radians.
#[derive(Debug, Copy, Clone, Default, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Angle {
    radians: f32,
}

impl Angle {
    /// Zero rotation.
    pub const ZERO: Self = Self::from_radians(0.0);

    /// A quarter turn (90°).
    pub const RIGHT: Self = Self::from_radians(FRAC_PI_2);

    /// A half turn (180°).
    pub const HALF_CIRCLE: Self = Self::from_radians(PI);

    /// A full turn (360°).
    pub const FULL_CIRCLE: Self = Self::from_radians(TAU);

    /// Creates an angle from radians.
    pub const fn from_radians(radians: f32) -> Self {
        Self { radians }
    }

    /// Creates an angle from degrees.
    pub fn from_degrees(degrees: f32) -> Self {
        Self::from_radians(degrees * DEG_TO_RAD)
    }

    /// Value in radians, as stored (not normalized).
    pub fn radians(self) -> f32 {
        self.radians
    }

    /// Value in degrees, as stored (not normalized).
    pub fn degrees(self) -> f32 {
        self.radians * RAD_TO_DEG
    }

    /// Maps the angle into `[0, 2π)`. Non-finite angles stay non-finite.
    pub fn normalize(self) -> Self {
        let r = self.radians.rem_euclid(TAU);
        // rem_euclid may round up to the modulus for tiny negative inputs.
        if r >= TAU {
            Self::ZERO
        } else {
            Self::from_radians(r)
        }
    }
}

impl Add for Angle {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self::from_radians(self.radians + rhs.radians)
    }
}

impl Sub for Angle {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self::from_radians(self.radians - rhs.radians)
    }
}

impl Neg for Angle {
    type Output = Self;
    fn neg(self) -> Self {
        Self::from_radians(-self.radians)
    }
}

impl Mul<f32> for Angle {
    type Output = Self;
    fn mul(self, rhs: f32) -> Self {
        Self::from_radians(self.radians * rhs)
    }
}

/// Interpolates from `from` towards `to` along the shorter arc.
///
/// `weight` outside `[0, 1]` extrapolates. Unlike a plain lerp on radians,
/// `lerp_angle(350°, 10°, 0.5)` passes through 0°, not 180°.
pub fn lerp_angle(from: Angle, to: Angle, weight: f32) -> Angle {
    from + angle_difference(from, to) * weight
}

/// Signed shortest rotation that takes `from` to `to`, in `[-π, π]`.
///
/// Inputs need not be normalized. When the angles are exactly opposite the
/// result is `-π` if `from < to` and `+π` otherwise; this falls out of the
/// remainder arithmetic below and is relied upon by [`rotate_towards`].
pub fn angle_difference(from: Angle, to: Angle) -> Angle {
    let diff = fmod(to.radians - from.radians, TAU);
    Angle::from_radians(fmod(2.0 * diff, TAU) - diff)
}

/// Rotates `from` towards `to` by at most `delta`, along the shorter arc.
///
/// Never passes `to`. A negative `delta` rotates away from `to` and stops at
/// the angle opposite `to`.
pub fn rotate_towards(from: Angle, to: Angle, delta: Angle) -> Angle {
    let diff = angle_difference(from, to).radians;
    let abs_diff = abs(diff);
    let step = clamp(delta.radians, abs_diff - PI, abs_diff) * sign(diff);
    Angle::from_radians(from.radians + step)
}
