//! Window manager for lifecycle, focus, and z-order

use crate::config::ManagerConfig;
use crate::error::ConfigError;
use crate::math::Size;
use super::{OpenWindowOptions, Window, WindowPatch};

/// Window manager owning every open window of one desktop session.
///
/// All mutation goes through the command methods, which keep these invariants:
/// - ids are unique
/// - at most one window is focused, and never a minimized one
/// - z-indices come from one increasing counter, so none repeat
/// - sizes never drop below the configured minimum
///
/// Commands naming an unknown id do nothing and return `false`.
pub struct WindowManager<C> {
    /// Open windows in the order they were opened
    windows: Vec<Window<C>>,
    config: ManagerConfig,
    /// Last z-index handed out
    z_counter: u64,
    /// Bumped by every command that changed state
    revision: u64,
}

impl<C> Default for WindowManager<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> WindowManager<C> {
    /// Create a window manager with the default configuration
    pub fn new() -> Self {
        Self::from_parts(ManagerConfig::default(), Vec::new(), ManagerConfig::Z_INDEX_BASE)
    }

    /// Create a window manager with a validated configuration
    pub fn with_config(config: ManagerConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::from_parts(config, Vec::new(), config.z_index_base))
    }

    pub(crate) fn from_parts(config: ManagerConfig, windows: Vec<Window<C>>, z_counter: u64) -> Self {
        Self {
            windows,
            config,
            z_counter,
            revision: 0,
        }
    }

    // =========================================================================
    // Commands
    // =========================================================================

    /// Open a window, or re-activate the open window with the same id.
    ///
    /// Re-activation overwrites title and content, plus icon and geometry
    /// where the options supply them, then brings the window to the front
    /// focused and un-minimized. A new window without a position cascades from
    /// the base position by one step per window already open.
    pub fn open_window(&mut self, options: OpenWindowOptions<C>) -> &Window<C> {
        let z_index = self.next_z_index();
        let index = match self.index_of(&options.id) {
            Some(index) => {
                self.reopen(index, options, z_index);
                index
            }
            None => self.create(options, z_index),
        };
        self.revision += 1;
        &self.windows[index]
    }

    fn reopen(&mut self, index: usize, options: OpenWindowOptions<C>, z_index: u64) {
        let min_size = self.config.min_size;
        let window = &mut self.windows[index];

        window.title = options.title;
        window.content = options.content;
        if let Some(icon) = options.icon {
            window.icon = Some(icon);
        }
        if let Some(x) = options.x {
            window.x = x;
        }
        if let Some(y) = options.y {
            window.y = y;
        }
        if let Some(width) = options.width {
            window.width = Size::clamp_dimension(i64::from(width), min_size.width);
        }
        if let Some(height) = options.height {
            window.height = Size::clamp_dimension(i64::from(height), min_size.height);
        }
        window.minimized = false;
        window.z_index = z_index;

        tracing::debug!(window = %window.id, z_index, "window re-activated");
        self.focus_only(index);
    }

    fn create(&mut self, options: OpenWindowOptions<C>, z_index: u64) -> usize {
        let min_size = self.config.min_size;
        let cascade = self.config.cascade_position(self.windows.len());
        let size = Size::clamped(
            options.width.map_or(i64::from(self.config.default_size.width), i64::from),
            options.height.map_or(i64::from(self.config.default_size.height), i64::from),
            min_size,
        );

        let window = Window {
            id: options.id,
            title: options.title,
            content: options.content,
            icon: options.icon,
            x: options.x.unwrap_or(cascade.x),
            y: options.y.unwrap_or(cascade.y),
            width: size.width,
            height: size.height,
            minimized: options.minimized,
            maximized: options.maximized,
            z_index,
            focused: false,
            resizable: options.resizable,
        };
        tracing::debug!(
            window = %window.id,
            x = window.x,
            y = window.y,
            width = window.width,
            height = window.height,
            z_index,
            "window opened"
        );

        self.windows.push(window);
        let index = self.windows.len() - 1;
        // A window opened minimized cannot take focus. Existing focus stays;
        // without one, the top visible window takes it.
        if !self.windows[index].minimized {
            self.focus_only(index);
        } else if self.focused().is_none() {
            self.focus_top_visible();
        }
        index
    }

    /// Close a window. The top-most remaining visible window takes focus.
    pub fn close_window(&mut self, id: &str) -> bool {
        let Some(index) = self.lookup(id, "close") else {
            return false;
        };

        let removed = self.windows.remove(index);
        tracing::debug!(window = %removed.id, remaining = self.windows.len(), "window closed");

        self.focus_top_visible();
        self.revision += 1;
        true
    }

    /// Focus a window, un-minimizing it and raising it to the top
    pub fn focus_window(&mut self, id: &str) -> bool {
        self.activate(id, "focus", |_| {})
    }

    /// Minimize a window. Its z-index stays, and no other window is focused
    /// in its place.
    pub fn minimize_window(&mut self, id: &str) -> bool {
        let Some(index) = self.lookup(id, "minimize") else {
            return false;
        };

        let window = &mut self.windows[index];
        window.minimized = true;
        window.focused = false;
        tracing::debug!(window = %window.id, "window minimized");

        self.revision += 1;
        true
    }

    /// Flag a window maximized and raise it focused. Geometry is kept for
    /// restore; the renderer supplies viewport bounds.
    pub fn maximize_window(&mut self, id: &str) -> bool {
        self.activate(id, "maximize", |window| window.maximized = true)
    }

    /// Clear minimized and maximized and raise the window focused
    pub fn restore_window(&mut self, id: &str) -> bool {
        self.activate(id, "restore", |window| window.maximized = false)
    }

    /// Apply a partial update to a window's display fields.
    ///
    /// This is where drag-end and resize-end geometry lands. Focus and
    /// z-index are left alone.
    pub fn update_window(&mut self, id: &str, patch: WindowPatch<C>) -> bool {
        self.update_window_with(id, move |_| patch)
    }

    /// Apply a patch computed from the current window, e.g. a delta move
    pub fn update_window_with<F>(&mut self, id: &str, updater: F) -> bool
    where
        F: FnOnce(&Window<C>) -> WindowPatch<C>,
    {
        let Some(index) = self.lookup(id, "update") else {
            return false;
        };

        let patch = updater(&self.windows[index]);
        let min_size = self.config.min_size;
        let window = &mut self.windows[index];
        if patch.apply(window, min_size) {
            tracing::debug!(
                window = %window.id,
                x = window.x,
                y = window.y,
                width = window.width,
                height = window.height,
                "window updated"
            );
            self.revision += 1;
        }
        true
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// Open windows in the order they were opened
    #[inline]
    pub fn windows(&self) -> &[Window<C>] {
        &self.windows
    }

    /// Get windows sorted by z-index (back to front)
    pub fn windows_by_z(&self) -> Vec<&Window<C>> {
        let mut windows: Vec<&Window<C>> = self.windows.iter().collect();
        windows.sort_by_key(|w| w.z_index);
        windows
    }

    /// Get a window by id
    pub fn get(&self, id: &str) -> Option<&Window<C>> {
        self.windows.iter().find(|w| w.id == id)
    }

    /// Whether a window with this id is open
    pub fn contains(&self, id: &str) -> bool {
        self.index_of(id).is_some()
    }

    /// The focused window, if any
    pub fn focused(&self) -> Option<&Window<C>> {
        self.windows.iter().find(|w| w.focused)
    }

    /// Get the number of windows
    #[inline]
    pub fn count(&self) -> usize {
        self.windows.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.windows.is_empty()
    }

    /// Highest z-index handed out so far
    #[inline]
    pub fn top_z_index(&self) -> u64 {
        self.z_counter
    }

    /// Counter that changes whenever a command changed state
    #[inline]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    #[inline]
    pub fn config(&self) -> &ManagerConfig {
        &self.config
    }

    // =========================================================================
    // Internals
    // =========================================================================

    fn index_of(&self, id: &str) -> Option<usize> {
        self.windows.iter().position(|w| w.id == id)
    }

    fn lookup(&self, id: &str, op: &'static str) -> Option<usize> {
        let index = self.index_of(id);
        if index.is_none() {
            tracing::trace!(window = id, op, "ignored: no such window");
        }
        index
    }

    fn next_z_index(&mut self) -> u64 {
        self.z_counter = self.z_counter.saturating_add(1);
        self.z_counter
    }

    /// Shared path of focus, maximize, and restore
    fn activate(&mut self, id: &str, op: &'static str, adjust: impl FnOnce(&mut Window<C>)) -> bool {
        let Some(index) = self.lookup(id, op) else {
            return false;
        };

        let z_index = self.next_z_index();
        let window = &mut self.windows[index];
        adjust(window);
        window.minimized = false;
        window.z_index = z_index;
        tracing::debug!(window = %window.id, op, z_index, "window raised");

        self.focus_only(index);
        self.revision += 1;
        true
    }

    fn focus_only(&mut self, index: usize) {
        for (i, window) in self.windows.iter_mut().enumerate() {
            window.focused = i == index;
        }
    }

    fn focus_top_visible(&mut self) {
        let top = self
            .windows
            .iter()
            .enumerate()
            .filter(|(_, w)| w.is_visible())
            .max_by_key(|(_, w)| w.z_index)
            .map(|(i, _)| i);

        match top {
            Some(index) => self.focus_only(index),
            None => self.windows.iter_mut().for_each(|w| w.focused = false),
        }
    }
}
