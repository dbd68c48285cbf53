//! Error types for the fallible edges of the window manager
//!
//! Window commands never fail. Only loading a configuration or importing a
//! persisted snapshot can be rejected.

use crate::math::Size;

/// Errors raised while building a [`ManagerConfig`](crate::ManagerConfig).
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Minimum window size has a zero dimension.
    #[error("minimum size must be at least 1x1, got {0:?}")]
    ZeroMinSize(Size),

    /// Fallback size for new windows is smaller than the minimum.
    #[error("default size {default:?} is smaller than minimum size {min:?}")]
    DefaultBelowMin { default: Size, min: Size },

    /// Cascade step would stack windows towards the origin.
    #[error("cascade step must not be negative, got {0}")]
    NegativeCascadeStep(i32),

    /// Z-index base leaves too few indices before the limit.
    #[error("z-index base {base} is above the allowed maximum {max}")]
    ZIndexBaseTooHigh { base: u64, max: u64 },

    /// Configuration JSON could not be parsed.
    #[error("invalid config JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors raised while importing a [`Snapshot`](crate::Snapshot).
#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    /// Snapshot was written by a newer build.
    #[error("unsupported snapshot version {found}, newest known is {supported}")]
    UnsupportedVersion { found: u32, supported: u32 },

    /// Two windows share an id.
    #[error("duplicate window id: {0}")]
    DuplicateId(String),

    /// Two windows share a z-index.
    #[error("duplicate z-index {z_index} on window {id}")]
    DuplicateZIndex { id: String, z_index: u64 },

    /// A window sits at or below the z-index base.
    #[error("z-index {z_index} on window {id} is not above base {base}")]
    ZIndexBelowBase { id: String, z_index: u64, base: u64 },

    /// A window or the stored counter is past the z-index limit.
    #[error("z-index {z_index} is above the maximum {max}")]
    ZIndexAboveMax { z_index: u64, max: u64 },

    /// More than one window claims focus.
    #[error("{0} windows are focused, at most one allowed")]
    MultipleFocused(usize),

    /// A minimized window claims focus.
    #[error("window {0} is both minimized and focused")]
    MinimizedFocused(String),

    /// A window is smaller than the configured minimum.
    #[error("window {id} has size {size:?}, below minimum {min:?}")]
    BelowMinSize { id: String, size: Size, min: Size },

    /// Configuration to restore into is itself invalid.
    #[error("invalid config: {0}")]
    Config(#[from] ConfigError),

    /// Snapshot JSON could not be parsed.
    #[error("invalid snapshot JSON: {0}")]
    Json(#[from] serde_json::Error),
}
