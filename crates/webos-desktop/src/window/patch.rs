//! Partial updates to a window's display fields

use serde::{Deserialize, Deserializer};

use crate::math::Size;
use super::Window;

/// Partial update applied by [`WindowManager::update_window`](super::WindowManager::update_window).
///
/// Only display fields can be patched. Focus, stacking, and the
/// minimized/maximized flags change through the window commands alone.
/// `width`/`height` are signed so a renderer reporting a negative size from a
/// resize gets clamped instead of rejected.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WindowPatch<C> {
    #[serde(default)]
    pub x: Option<i32>,
    #[serde(default)]
    pub y: Option<i32>,
    #[serde(default)]
    pub width: Option<i32>,
    #[serde(default)]
    pub height: Option<i32>,
    #[serde(default)]
    pub title: Option<String>,
    pub content: Option<C>,
    /// `Some(None)` clears the icon
    #[serde(default, deserialize_with = "double_option")]
    pub icon: Option<Option<String>>,
}

/// Distinguish an absent `icon` (leave as is) from `"icon": null` (clear).
fn double_option<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

impl<C> Default for WindowPatch<C> {
    fn default() -> Self {
        Self {
            x: None,
            y: None,
            width: None,
            height: None,
            title: None,
            content: None,
            icon: None,
        }
    }
}

impl<C> WindowPatch<C> {
    /// Empty patch
    pub fn new() -> Self {
        Self::default()
    }

    /// Move to a new position (drag end)
    pub fn position(mut self, x: i32, y: i32) -> Self {
        self.x = Some(x);
        self.y = Some(y);
        self
    }

    /// Resize (resize end)
    pub fn size(mut self, width: i32, height: i32) -> Self {
        self.width = Some(width);
        self.height = Some(height);
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn content(mut self, content: C) -> Self {
        self.content = Some(content);
        self
    }

    /// Set (`Some`) or clear (`None`) the icon
    pub fn icon(mut self, icon: Option<String>) -> Self {
        self.icon = Some(icon);
        self
    }

    /// True when applying the patch would change nothing
    pub fn is_empty(&self) -> bool {
        self.x.is_none()
            && self.y.is_none()
            && self.width.is_none()
            && self.height.is_none()
            && self.title.is_none()
            && self.content.is_none()
            && self.icon.is_none()
    }

    /// Apply onto `window`, clamping size to `min_size`.
    ///
    /// Returns whether any field was written.
    pub(crate) fn apply(self, window: &mut Window<C>, min_size: Size) -> bool {
        if self.is_empty() {
            return false;
        }

        if let Some(x) = self.x {
            window.x = x;
        }
        if let Some(y) = self.y {
            window.y = y;
        }
        if let Some(width) = self.width {
            window.width = Size::clamp_dimension(i64::from(width), min_size.width);
            if i64::from(window.width) != i64::from(width) {
                tracing::debug!(window = %window.id, requested = width, width = window.width, "clamped width");
            }
        }
        if let Some(height) = self.height {
            window.height = Size::clamp_dimension(i64::from(height), min_size.height);
            if i64::from(window.height) != i64::from(height) {
                tracing::debug!(window = %window.id, requested = height, height = window.height, "clamped height");
            }
        }
        if let Some(title) = self.title {
            window.title = title;
        }
        if let Some(content) = self.content {
            window.content = content;
        }
        if let Some(icon) = self.icon {
            window.icon = icon;
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::window::WindowId;

    fn create_test_window() -> Window<u32> {
        Window {
            id: WindowId::from("notepad-1"),
            title: "Untitled - Notepad".to_string(),
            content: 7,
            icon: Some("icons/notepad.png".to_string()),
            x: 100,
            y: 100,
            width: 600,
            height: 400,
            minimized: false,
            maximized: false,
            z_index: 201,
            focused: true,
            resizable: true,
        }
    }

    #[test]
    fn test_apply_position_and_size() {
        let mut w = create_test_window();
        let changed = WindowPatch::new().position(-20, 40).size(320, 240).apply(&mut w, Size::new(1, 1));

        assert!(changed);
        assert_eq!((w.x, w.y, w.width, w.height), (-20, 40, 320, 240));
        assert_eq!(w.title, "Untitled - Notepad");
        assert_eq!(w.content, 7);
    }

    #[test]
    fn test_apply_clamps_negative_size() {
        let mut w = create_test_window();
        WindowPatch::<u32>::new().size(-10, 0).apply(&mut w, Size::new(1, 1));
        assert_eq!((w.width, w.height), (1, 1));
    }

    #[test]
    fn test_apply_clamps_to_configured_min() {
        let mut w = create_test_window();
        WindowPatch::<u32>::new().size(50, 500).apply(&mut w, Size::new(200, 150));
        assert_eq!((w.width, w.height), (200, 500));
    }

    #[test]
    fn test_empty_patch_changes_nothing() {
        let mut w = create_test_window();
        let before = w.clone();
        assert!(!WindowPatch::new().apply(&mut w, Size::new(1, 1)));
        assert_eq!(w, before);
    }

    #[test]
    fn test_icon_set_and_clear() {
        let mut w = create_test_window();
        WindowPatch::<u32>::new().icon(None).apply(&mut w, Size::new(1, 1));
        assert!(w.icon.is_none());

        WindowPatch::<u32>::new().icon(Some("a.png".to_string())).apply(&mut w, Size::new(1, 1));
        assert_eq!(w.icon.as_deref(), Some("a.png"));
    }

    #[test]
    fn test_json_icon_absent_vs_null() {
        let absent: WindowPatch<String> = serde_json::from_str(r#"{"x": 5}"#).unwrap();
        assert_eq!(absent.icon, None);
        assert_eq!(absent.x, Some(5));

        let cleared: WindowPatch<String> = serde_json::from_str(r#"{"icon": null}"#).unwrap();
        assert_eq!(cleared.icon, Some(None));
    }

    #[test]
    fn test_json_content_and_title() {
        let patch: WindowPatch<String> =
            serde_json::from_str(r#"{"title": "notes.txt - Notepad", "content": "notes.txt"}"#).unwrap();
        assert_eq!(patch.title.as_deref(), Some("notes.txt - Notepad"));
        assert_eq!(patch.content.as_deref(), Some("notes.txt"));
        assert!(patch.width.is_none());
    }
}
