// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! ffmath: utility math for small-screen game consoles.
//!
//! - Generic scalar helpers (clamp, lerp, wrap, approximate equality) whose
//!   per-type semantics are chosen at compile time through [`Number`].
//! - [`Vec2`] for float positions and directions, [`Angle`] with
//!   shortest-path arithmetic, and the integer [`Point`]/[`Size`] types.
//! - [`fast`] approximations for square root, arctangent, and sine/cosine.
//!
//! Every operation is pure and total: degenerate inputs either hit an
//! explicit guard (the zero vector normalizes to zero) or follow IEEE-754.
#![forbid(unsafe_code)]
#![deny(missing_docs, rust_2018_idioms, unused_must_use)]

mod angle;
pub mod fast;
mod geom;
pub mod scalar;
mod vec2;
mod viewport;

pub use angle::{angle_difference, lerp_angle, rotate_towards, Angle};
pub use geom::{Point, Size};
pub use scalar::{
    abs, ceil, clamp, clamp01, deg_to_rad, equal_approx, floor, fmod, inverse_lerp, is_finite,
    is_zero_approx, lerp, move_towards, rad_to_deg, round, sign, wrap, Number, DEG_TO_RAD,
    EPSILON, RAD_TO_DEG,
};
pub use vec2::{vec2, Vec2};
pub use viewport::{Viewport, ViewportError};
