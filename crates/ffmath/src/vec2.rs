// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use core::f32::consts::FRAC_PI_2;
use core::ops::{Add, Mul, Neg, Sub};

use crate::angle::Angle;
use crate::fast;
use crate::geom::Point;
use crate::scalar::{self, EPSILON};
use crate::viewport::Viewport;

/// Float 2D vector used for positions and directions.
///
/// * Components are screen-space pixels; y grows downward.
/// * Values are immutable; every operation returns a new vector.
/// * [`Vec2::radius`], [`Vec2::normalize`], [`Vec2::azimuth`], and the
///   distance helpers use the approximations in [`crate::fast`].
#[derive(Debug, Copy, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec2 {
    /// Horizontal component.
    pub x: f32,
    /// Vertical component.
    pub y: f32,
}

/// Shortcut for [`Vec2::new`].
pub const fn vec2(x: f32, y: f32) -> Vec2 {
    Vec2::new(x, y)
}

impl Vec2 {
    /// The zero vector.
    pub const ZERO: Self = Self::new(0.0, 0.0);

    /// Creates a vector from components.
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Converts to a [`Point`] by truncating toward zero.
    ///
    /// `1.9` becomes `1` and `-1.9` becomes `-1`. Out-of-range values
    /// saturate and NaN becomes `0`.
    pub fn to_point(self) -> Point {
        Point::new(self.x as i32, self.y as i32)
    }

    /// Componentwise absolute value.
    pub fn abs(self) -> Self {
        Self::new(scalar::abs(self.x), scalar::abs(self.y))
    }

    /// Multiplies both components by `factor`.
    pub fn scale(self, factor: f32) -> Self {
        Self::new(self.x * factor, self.y * factor)
    }

    /// Componentwise minimum of two vectors.
    pub fn component_min(self, other: Self) -> Self {
        Self::new(
            if other.x < self.x { other.x } else { self.x },
            if other.y < self.y { other.y } else { self.y },
        )
    }

    /// Componentwise maximum of two vectors.
    pub fn component_max(self, other: Self) -> Self {
        Self::new(
            if other.x > self.x { other.x } else { self.x },
            if other.y > self.y { other.y } else { self.y },
        )
    }

    /// Clamps each component between the matching components of `min` and `max`.
    pub fn clamp(self, min: Self, max: Self) -> Self {
        Self::new(
            scalar::clamp(self.x, min.x, max.x),
            scalar::clamp(self.y, min.y, max.y),
        )
    }

    /// Rounds both components, ties away from zero.
    pub fn round(self) -> Self {
        Self::new(scalar::round(self.x), scalar::round(self.y))
    }

    /// Ceils both components.
    pub fn ceil(self) -> Self {
        Self::new(scalar::ceil(self.x), scalar::ceil(self.y))
    }

    /// Floors both components.
    pub fn floor(self) -> Self {
        Self::new(scalar::floor(self.x), scalar::floor(self.y))
    }

    /// Returns `true` when the vector lies on the default console screen.
    pub fn in_bounds(self) -> bool {
        self.in_viewport(Viewport::FIREFLY)
    }

    /// Returns `true` when `0 <= x < width` and `0 <= y < height`.
    pub fn in_viewport(self, viewport: Viewport) -> bool {
        viewport.contains_xy(self.x, self.y)
    }

    /// Dot product.
    pub fn dot(self, other: Self) -> f32 {
        self.x * other.x + self.y * other.y
    }

    /// Scalar cross term `x1*y2 + y1*x2`.
    ///
    /// Note the `+`: this is not the usual `x1*y2 - y1*x2` determinant, and
    /// existing callers depend on the symmetric form.
    pub fn cross(self, other: Self) -> f32 {
        self.x * other.y + self.y * other.x
    }

    /// Vector length. Approximate; see [`crate::fast::sqrt`].
    pub fn radius(self) -> f32 {
        fast::sqrt(self.radius_squared())
    }

    /// Exact squared length.
    pub fn radius_squared(self) -> f32 {
        self.x * self.x + self.y * self.y
    }

    /// Polar angle of the vector.
    ///
    /// - `(1, 0)` → 0°
    /// - `(0, 1)` → 90°
    /// - `(-1, 0)` → 180°
    /// - `(0, -1)` → 270°
    ///
    /// Absolute error is at most 0.1620°. The zero vector yields NaN.
    pub fn azimuth(self) -> Angle {
        Angle::from_radians(FRAC_PI_2 * fast::atan2_norm(self.y, self.x))
    }

    /// Moves towards `to` by `delta`, never passing it.
    ///
    /// Snaps to `to` when already within `delta`, or when the remaining
    /// distance is below [`EPSILON`] and the direction is meaningless.
    /// A negative `delta` moves away.
    pub fn move_towards(self, to: Self, delta: f32) -> Self {
        let offset = to - self;
        let dist = offset.radius();
        if dist <= delta || dist < EPSILON {
            return to;
        }
        self + offset.scale(delta / dist)
    }

    /// Approximate distance to `to`.
    pub fn distance_to(self, to: Self) -> f32 {
        (self - to).radius()
    }

    /// Exact squared distance to `to`.
    pub fn distance_to_squared(self, to: Self) -> f32 {
        (self - to).radius_squared()
    }

    /// Returns the vector scaled to unit length.
    ///
    /// The zero vector is returned unchanged rather than producing NaN.
    pub fn normalize(self) -> Self {
        let squared = self.radius_squared();
        if squared == 0.0 {
            return Self::ZERO;
        }
        let radius = fast::sqrt(squared);
        Self::new(self.x / radius, self.y / radius)
    }

    /// Returns `true` when the squared length is approximately `1`.
    pub fn is_normalized(self) -> bool {
        scalar::equal_approx(self.radius_squared(), 1.0)
    }

    /// Componentwise [`scalar::equal_approx`]. Exact equality is `==`.
    pub fn equal_approx(self, other: Self) -> bool {
        scalar::equal_approx(self.x, other.x) && scalar::equal_approx(self.y, other.y)
    }

    /// Returns `true` when both components are approximately zero.
    pub fn is_zero_approx(self) -> bool {
        scalar::is_zero_approx(self.x) && scalar::is_zero_approx(self.y)
    }

    /// Returns `true` when neither component is NaN or infinite.
    pub fn is_finite(self) -> bool {
        scalar::is_finite(self.x) && scalar::is_finite(self.y)
    }
}

impl Add for Vec2 {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Vec2 {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Neg for Vec2 {
    type Output = Self;
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y)
    }
}

impl Mul<f32> for Vec2 {
    type Output = Self;
    fn mul(self, rhs: f32) -> Self {
        self.scale(rhs)
    }
}

impl From<Point> for Vec2 {
    fn from(point: Point) -> Self {
        Self::new(point.x as f32, point.y as f32)
    }
}

/// Unit vector for `angle` in screen space: `(cos θ, -sin θ)`.
///
/// The negated sine makes positive angles turn counter-clockwise on a
/// y-down screen.
impl From<Angle> for Vec2 {
    fn from(angle: Angle) -> Self {
        let (sin, cos) = fast::sin_cos(angle.radians());
        Self::new(cos, -sin)
    }
}

impl From<Vec2> for Point {
    fn from(v: Vec2) -> Self {
        v.to_point()
    }
}

impl From<Vec2> for Angle {
    fn from(v: Vec2) -> Self {
        v.azimuth()
    }
}

/// Converts a 2-element `[f32; 2]` array into a `Vec2` interpreted as `(x, y)`.
///
/// # Examples
/// ```
/// use ffmath::Vec2;
/// let v = Vec2::from([1.0, 2.0]);
/// assert_eq!(v, Vec2::new(1.0, 2.0));
/// ```
impl From<[f32; 2]> for Vec2 {
    fn from([x, y]: [f32; 2]) -> Self {
        Self::new(x, y)
    }
}
