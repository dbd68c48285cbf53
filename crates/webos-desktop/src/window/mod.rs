//! Window management module
//!
//! Provides the window entity, the options and patch types that feed it, and
//! the manager owning the collection.

mod id;
#[allow(clippy::module_inception)]
mod window;
mod options;
mod patch;
mod manager;

pub use id::WindowId;
pub use window::{Window, WindowState};
pub use options::OpenWindowOptions;
pub use patch::WindowPatch;
pub use manager::WindowManager;
