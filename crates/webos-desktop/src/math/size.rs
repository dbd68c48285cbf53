//! 2D integer size for window dimensions

use serde::{Deserialize, Serialize};

/// Width and height of a window
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Size {
    pub width: u32,
    pub height: u32,
}

impl Default for Size {
    fn default() -> Self {
        Self::new(1, 1)
    }
}

impl Size {
    /// Create a new size
    #[inline]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Check if either dimension is zero
    #[inline]
    pub fn is_empty(self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Check if both dimensions are at least `min`
    #[inline]
    pub fn fits(self, min: Size) -> bool {
        self.width >= min.width && self.height >= min.height
    }

    /// Clamp a possibly negative dimension to `min`
    #[inline]
    pub fn clamp_dimension(value: i64, min: u32) -> u32 {
        let clamped = value.max(i64::from(min));
        u32::try_from(clamped).unwrap_or(u32::MAX)
    }

    /// Build a size from signed dimensions, clamping each to `min`
    #[inline]
    pub fn clamped(width: i64, height: i64, min: Size) -> Self {
        Self::new(
            Self::clamp_dimension(width, min.width),
            Self::clamp_dimension(height, min.height),
        )
    }
}
