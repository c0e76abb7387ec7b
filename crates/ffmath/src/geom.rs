// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Integer screen-space value types: [`Point`] and [`Size`].

use core::ops::{Add, Neg, Sub};

use crate::viewport::Viewport;

/// Integer position in screen space (y grows downward).
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    /// Horizontal component.
    pub x: i32,
    /// Vertical component.
    pub y: i32,
}

impl Point {
    /// The origin.
    pub const ZERO: Self = Self::new(0, 0);

    /// Creates a point from components.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Returns `true` when the point lies on the default console screen.
    pub fn in_bounds(self) -> bool {
        Viewport::FIREFLY.contains(self)
    }
}

impl Add for Point {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Neg for Point {
    type Output = Self;
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y)
    }
}

impl From<Size> for Point {
    fn from(size: Size) -> Self {
        Self::new(size.width, size.height)
    }
}

/// Integer extent. Components are non-negative by convention only.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Size {
    /// Horizontal extent.
    pub width: i32,
    /// Vertical extent.
    pub height: i32,
}

impl Size {
    /// The empty size.
    pub const ZERO: Self = Self::new(0, 0);

    /// Creates a size from its width and height.
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }
}

impl Add for Size {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self::new(self.width + rhs.width, self.height + rhs.height)
    }
}

impl Sub for Size {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.width - rhs.width, self.height - rhs.height)
    }
}

impl From<Point> for Size {
    fn from(point: Point) -> Self {
        Self::new(point.x, point.y)
    }
}
