// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Geometric draws composed from the scalar helpers.
//!
//! Components are drawn x before y (width before height).

use core::f32::consts::TAU;

use ffmath::{angle_difference, vec2, Angle, Point, Size, Vec2};

use crate::random::Random;
use crate::source::EntropySource;

impl<S: EntropySource> Random<S> {
    /// Point with raw signed components. May be negative.
    pub fn point(&mut self) -> Point {
        let x = self.int();
        let y = self.int();
        Point::new(x, y)
    }

    /// Point in `[0, n.x) × [0, n.y)`.
    pub fn pointn(&mut self, n: Point) -> Point {
        let x = self.intn(n.x);
        let y = self.intn(n.y);
        Point::new(x, y)
    }

    /// Point in `[min.x, max.x) × [min.y, max.y)`.
    pub fn point_range(&mut self, min: Point, max: Point) -> Point {
        let x = self.int_range(min.x, max.x);
        let y = self.int_range(min.y, max.y);
        Point::new(x, y)
    }

    /// Size with raw signed components. May be negative.
    pub fn size(&mut self) -> Size {
        let width = self.int();
        let height = self.int();
        Size::new(width, height)
    }

    /// Size in `[0, n.width) × [0, n.height)`.
    pub fn sizen(&mut self, n: Size) -> Size {
        let width = self.intn(n.width);
        let height = self.intn(n.height);
        Size::new(width, height)
    }

    /// Size in `[min, max)` per component.
    pub fn size_range(&mut self, min: Size, max: Size) -> Size {
        let width = self.int_range(min.width, max.width);
        let height = self.int_range(min.height, max.height);
        Size::new(width, height)
    }

    /// Angle in `[0, 2π)`.
    pub fn angle(&mut self) -> Angle {
        Angle::from_radians(self.float32() * TAU)
    }

    /// Angle in `[0, n)`, with `n` normalized into `[0, 2π)` first.
    pub fn anglen(&mut self, n: Angle) -> Angle {
        Angle::from_radians(self.float32() * n.normalize().radians())
    }

    /// Angle on the shorter arc from `min` towards `max`.
    ///
    /// The result is `min + t * angle_difference(min, max)` for `t` in
    /// `[0, 1)`, so it may be un-normalized.
    pub fn angle_range(&mut self, min: Angle, max: Angle) -> Angle {
        min + angle_difference(min, max) * self.float32()
    }

    /// Unit vector in a uniformly random direction.
    pub fn vec_unit(&mut self) -> Vec2 {
        Vec2::from(self.angle())
    }

    /// Vector in `[min.x, max.x) × [min.y, max.y)`.
    pub fn vec_range(&mut self, min: Vec2, max: Vec2) -> Vec2 {
        let x = self.float32_range(min.x, max.x);
        let y = self.float32_range(min.y, max.y);
        vec2(x, y)
    }
}
