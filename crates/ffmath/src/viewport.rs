// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Host screen dimensions used for bounds checks.

use thiserror::Error;

use crate::geom::{Point, Size};

/// Error type for viewport construction and configuration.
#[derive(Debug, Error)]
pub enum ViewportError {
    /// Width or height is zero or negative.
    #[error("viewport must be non-empty, got {width}x{height}")]
    Empty {
        /// Rejected width.
        width: i32,
        /// Rejected height.
        height: i32,
    },
    /// Configuration blob could not be parsed.
    #[cfg(feature = "serde")]
    #[error("viewport config error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Screen dimensions in pixels.
///
/// Invariant: `width > 0` and `height > 0`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "RawViewport")
)]
pub struct Viewport {
    width: i32,
    height: i32,
}

impl Viewport {
    /// The Firefly Zero screen: 240×160.
    pub const FIREFLY: Self = Self {
        width: 240,
        height: 160,
    };

    /// Creates a viewport, rejecting empty dimensions.
    ///
    /// # Errors
    ///
    /// [`ViewportError::Empty`] when `width` or `height` is not positive.
    pub fn new(width: i32, height: i32) -> Result<Self, ViewportError> {
        if width <= 0 || height <= 0 {
            return Err(ViewportError::Empty { width, height });
        }
        Ok(Self { width, height })
    }

    /// Parses a JSON viewport description such as `{"width":320,"height":240}`.
    ///
    /// # Errors
    ///
    /// [`ViewportError::Parse`] for malformed JSON, [`ViewportError::Empty`]
    /// for non-positive dimensions.
    #[cfg(feature = "serde")]
    pub fn from_json_slice(bytes: &[u8]) -> Result<Self, ViewportError> {
        let raw: RawViewport = serde_json::from_slice(bytes)?;
        let viewport = Self::try_from(raw)?;
        tracing::debug!(
            width = viewport.width,
            height = viewport.height,
            "loaded viewport configuration"
        );
        Ok(viewport)
    }

    /// Width in pixels.
    pub fn width(self) -> i32 {
        self.width
    }

    /// Height in pixels.
    pub fn height(self) -> i32 {
        self.height
    }

    /// Dimensions as a [`Size`].
    pub fn size(self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Returns `true` when `point` is inside `[0, width) × [0, height)`.
    pub fn contains(self, point: Point) -> bool {
        point.x >= 0 && point.y >= 0 && point.x < self.width && point.y < self.height
    }

    /// Float variant of [`Viewport::contains`].
    pub fn contains_xy(self, x: f32, y: f32) -> bool {
        x >= 0.0 && y >= 0.0 && x < self.width as f32 && y < self.height as f32
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::FIREFLY
    }
}

/// Unvalidated wire form of [`Viewport`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawViewport {
    width: i32,
    height: i32,
}

#[cfg(feature = "serde")]
impl TryFrom<RawViewport> for Viewport {
    type Error = ViewportError;

    fn try_from(raw: RawViewport) -> Result<Self, Self::Error> {
        Self::new(raw.width, raw.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_empty_dimensions() {
        assert!(matches!(
            Viewport::new(0, 10),
            Err(ViewportError::Empty { width: 0, height: 10 })
        ));
        assert!(Viewport::new(10, -1).is_err());
    }

    #[test]
    fn contains_is_half_open() {
        let vp = Viewport::FIREFLY;
        assert!(vp.contains(Point::new(0, 0)));
        assert!(vp.contains(Point::new(239, 159)));
        assert!(!vp.contains(Point::new(240, 0)));
        assert!(!vp.contains(Point::new(0, 160)));
        assert!(!vp.contains(Point::new(-1, 5)));
    }
}
