//! Desktop window manager for the webos browser desktop
//!
//! This crate owns the state of every application window on the desktop:
//! - Window lifecycle (open, re-activate, close)
//! - Focus and z-order (one focused window, strictly increasing z-indices)
//! - Minimize, maximize, and restore flags
//! - Geometry updates landing from the renderer's drag and resize gestures
//!
//! ## Architecture
//!
//! - [`math`]: Integer geometry types (`Point`, `Size`)
//! - [`window`]: Window entity, open options, patches, and the manager
//! - [`input`]: Renderer-side drag sessions that produce patches on release
//! - [`persistence`]: Validated snapshot export/import
//!
//! Rendering, viewport fitting of maximized windows, and what the content
//! payload means all belong to the shell. The manager stores content as an
//! opaque `C` and never reads it.
//!
//! ## Example
//!
//! ```rust
//! use webos_desktop::{OpenWindowOptions, WindowManager, WindowPatch};
//!
//! let mut wm = WindowManager::new();
//! wm.open_window(OpenWindowOptions::new("calc", "Calculator", "calculator"));
//! wm.open_window(OpenWindowOptions::new("paint", "Paint", "paint"));
//!
//! wm.focus_window("calc");
//! wm.update_window("calc", WindowPatch::new().position(320, 180));
//!
//! assert_eq!(wm.focused().map(|w| w.id.as_str()), Some("calc"));
//! ```

pub mod math;
pub mod window;
pub mod input;
pub mod persistence;

mod config;
mod error;

// WASM exports (only available with "wasm" feature)
#[cfg(feature = "wasm")]
mod wasm;
#[cfg(feature = "wasm")]
pub use wasm::*;

// Re-export core types for convenience
pub use math::{Point, Size};
pub use window::{OpenWindowOptions, Window, WindowId, WindowManager, WindowPatch, WindowState};
pub use input::{calculate_resize, DragFrame, DragSession, ResizeHandle};
pub use persistence::Snapshot;
pub use config::ManagerConfig;
pub use error::{ConfigError, SnapshotError};
