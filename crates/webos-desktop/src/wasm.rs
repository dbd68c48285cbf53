//! WASM exports for the window manager
//!
//! This module provides wasm-bindgen exports for the WindowManager, allowing
//! the browser shell to drive windows directly. Window content is a string
//! key naming the app component the shell mounts (`"calculator"`,
//! `"notepad:readme.txt"`, ...).

use wasm_bindgen::prelude::*;

use crate::config::ManagerConfig;
use crate::input::{DragSession, ResizeHandle};
use crate::math::Point;
use crate::persistence::Snapshot;
use crate::window::{OpenWindowOptions, WindowId, WindowManager, WindowPatch};

/// Desktop controller for WASM - wraps WindowManager with JS-friendly API
#[wasm_bindgen]
pub struct DesktopController {
    windows: WindowManager<String>,
    drag: Option<DragSession>,
}

impl Default for DesktopController {
    fn default() -> Self {
        Self::new()
    }
}

#[wasm_bindgen]
impl DesktopController {
    /// Create a controller with the default configuration
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        console_error_panic_hook::set_once();
        Self {
            windows: WindowManager::new(),
            drag: None,
        }
    }

    /// Create a controller from a JSON configuration
    #[wasm_bindgen]
    pub fn with_config(config_json: &str) -> Result<DesktopController, JsError> {
        console_error_panic_hook::set_once();
        let config = ManagerConfig::from_json(config_json)?;
        Ok(Self {
            windows: WindowManager::with_config(config)?,
            drag: None,
        })
    }

    /// Fresh id for apps that open a new window on every launch
    #[wasm_bindgen]
    pub fn new_instance_id(prefix: &str) -> String {
        WindowId::unique(prefix).into_string()
    }

    // =========================================================================
    // Window commands
    // =========================================================================

    /// Open or re-activate a window; returns the window as JSON
    #[wasm_bindgen]
    pub fn open_window(&mut self, options_json: &str) -> Result<String, JsError> {
        let options: OpenWindowOptions<String> = serde_json::from_str(options_json)?;
        let window = self.windows.open_window(options);
        Ok(serde_json::to_string(window)?)
    }

    /// Close a window
    #[wasm_bindgen]
    pub fn close_window(&mut self, id: &str) -> bool {
        self.cancel_drag_for(id);
        self.windows.close_window(id)
    }

    /// Focus a window
    #[wasm_bindgen]
    pub fn focus_window(&mut self, id: &str) -> bool {
        self.windows.focus_window(id)
    }

    /// Minimize a window
    #[wasm_bindgen]
    pub fn minimize_window(&mut self, id: &str) -> bool {
        self.cancel_drag_for(id);
        self.windows.minimize_window(id)
    }

    /// Maximize a window
    #[wasm_bindgen]
    pub fn maximize_window(&mut self, id: &str) -> bool {
        self.cancel_drag_for(id);
        self.windows.maximize_window(id)
    }

    /// Restore a window
    #[wasm_bindgen]
    pub fn restore_window(&mut self, id: &str) -> bool {
        self.windows.restore_window(id)
    }

    /// Apply a JSON patch (`{"x":..,"width":..,"title":..}`)
    #[wasm_bindgen]
    pub fn update_window(&mut self, id: &str, patch_json: &str) -> Result<bool, JsError> {
        let patch: WindowPatch<String> = serde_json::from_str(patch_json)?;
        Ok(self.windows.update_window(id, patch))
    }

    /// Apply a patch computed by `updater(windowJson) -> patchJson`
    #[wasm_bindgen]
    pub fn update_window_with(&mut self, id: &str, updater: &js_sys::Function) -> Result<bool, JsError> {
        let Some(window) = self.windows.get(id) else {
            return Ok(false);
        };
        let window_json = serde_json::to_string(window)?;

        let result = updater
            .call1(&JsValue::NULL, &JsValue::from_str(&window_json))
            .map_err(|e| JsError::new(&format!("updater threw: {:?}", e)))?;
        let patch_json = result
            .as_string()
            .ok_or_else(|| JsError::new("updater must return a JSON string"))?;
        let patch: WindowPatch<String> = serde_json::from_str(&patch_json)?;

        Ok(self.windows.update_window_with(id, move |_| patch))
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// Get all windows (open order) as JSON
    #[wasm_bindgen]
    pub fn get_windows_json(&self) -> String {
        serde_json::to_string(self.windows.windows()).unwrap_or_else(|_| "[]".to_string())
    }

    /// Get all windows back to front as JSON
    #[wasm_bindgen]
    pub fn get_windows_by_z_json(&self) -> String {
        serde_json::to_string(&self.windows.windows_by_z()).unwrap_or_else(|_| "[]".to_string())
    }

    /// Get one window as JSON (`null` when absent)
    #[wasm_bindgen]
    pub fn get_window_json(&self, id: &str) -> String {
        serde_json::to_string(&self.windows.get(id)).unwrap_or_else(|_| "null".to_string())
    }

    /// Presentation state of a window (`"normal"`, `"minimized"`, `"maximized"`)
    #[wasm_bindgen]
    pub fn get_window_state(&self, id: &str) -> Option<String> {
        self.windows.get(id).map(|w| w.state().as_str().to_string())
    }

    /// Get the focused window ID
    #[wasm_bindgen]
    pub fn get_focused_window(&self) -> Option<String> {
        self.windows.focused().map(|w| w.id.to_string())
    }

    /// Changes whenever a command changed state; poll to skip redundant renders
    #[wasm_bindgen]
    pub fn revision(&self) -> f64 {
        self.windows.revision() as f64
    }

    // =========================================================================
    // Drag and resize
    // =========================================================================

    /// Start moving a window; focuses it like a title bar press
    #[wasm_bindgen]
    pub fn begin_move(&mut self, id: &str, x: i32, y: i32) -> bool {
        if !self.windows.focus_window(id) {
            return false;
        }
        let Some(window) = self.windows.get(id) else {
            return false;
        };
        self.drag = Some(DragSession::begin_move(window, Point::new(x, y)));
        true
    }

    /// Start resizing from a direction (`"n"`, `"se"`, ...)
    #[wasm_bindgen]
    pub fn begin_resize(&mut self, id: &str, direction: &str, x: i32, y: i32) -> bool {
        let Some(handle) = ResizeHandle::from_direction(direction) else {
            return false;
        };
        let min_size = self.windows.config().min_size;
        let Some(window) = self.windows.get(id) else {
            return false;
        };
        self.drag = DragSession::begin_resize(window, handle, Point::new(x, y), min_size);
        self.drag.is_some()
    }

    /// In-flight geometry as JSON (`null` when not dragging)
    #[wasm_bindgen]
    pub fn drag_preview_json(&self, x: i32, y: i32) -> String {
        let frame = self.drag.as_ref().map(|drag| drag.preview(Point::new(x, y)));
        serde_json::to_string(&frame).unwrap_or_else(|_| "null".to_string())
    }

    /// CSS cursor for the active drag
    #[wasm_bindgen]
    pub fn drag_cursor(&self) -> Option<String> {
        self.drag.as_ref().map(|drag| drag.cursor().to_string())
    }

    /// CSS cursor for hovering a resize handle (`"n"`, `"se"`, ...)
    #[wasm_bindgen]
    pub fn resize_cursor(direction: &str) -> Option<String> {
        ResizeHandle::from_direction(direction).map(|handle| handle.cursor().to_string())
    }

    /// Check if a drag is in progress
    #[wasm_bindgen]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// Release the pointer and commit the final geometry
    #[wasm_bindgen]
    pub fn end_drag(&mut self, x: i32, y: i32) -> bool {
        let Some(drag) = self.drag.take() else {
            return false;
        };
        let (id, patch) = drag.finish(Point::new(x, y));
        self.windows.update_window(&id, patch)
    }

    /// Drop the drag without committing anything
    #[wasm_bindgen]
    pub fn cancel_drag(&mut self) {
        self.drag = None;
    }

    // =========================================================================
    // Persistence
    // =========================================================================

    /// Export all windows as snapshot JSON
    #[wasm_bindgen]
    pub fn export_snapshot(&self) -> String {
        serde_json::to_string(&self.windows.snapshot()).unwrap_or_else(|_| "{}".to_string())
    }

    /// Replace all windows with a validated snapshot
    #[wasm_bindgen]
    pub fn import_snapshot(&mut self, snapshot_json: &str) -> Result<(), JsError> {
        let snapshot = Snapshot::from_json(snapshot_json)?;
        self.windows = WindowManager::from_snapshot(*self.windows.config(), snapshot)?;
        self.drag = None;
        Ok(())
    }
}

impl DesktopController {
    fn cancel_drag_for(&mut self, id: &str) {
        if self.drag.as_ref().is_some_and(|drag| drag.window_id() == id) {
            self.drag = None;
        }
    }
}
