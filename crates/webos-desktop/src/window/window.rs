//! Window struct and state

use serde::{Deserialize, Serialize};

use crate::math::{Point, Size};
use super::WindowId;

/// Presentation state derived from the window flags
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WindowState {
    #[default]
    Normal,
    Minimized,
    Maximized,
}

impl WindowState {
    pub fn as_str(self) -> &'static str {
        match self {
            WindowState::Normal => "normal",
            WindowState::Minimized => "minimized",
            WindowState::Maximized => "maximized",
        }
    }
}

/// One open application instance on the desktop.
///
/// `C` is the content payload the shell renders inside the frame. The
/// manager stores it and hands it back; it never looks inside.
///
/// While `maximized` is set, `x`/`y`/`width`/`height` still hold the
/// pre-maximize geometry. The renderer draws the window at viewport bounds.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Window<C> {
    /// Caller-assigned identifier
    pub id: WindowId,
    /// Title bar label
    pub title: String,
    /// Opaque content payload
    pub content: C,
    /// Opaque icon reference
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
    /// Exists but is not drawn; never focused
    pub minimized: bool,
    /// Drawn at full viewport by the renderer
    pub maximized: bool,
    /// Stacking order (higher = on top)
    pub z_index: u64,
    pub focused: bool,
    /// Whether the renderer may offer resize handles
    #[serde(default = "default_resizable")]
    pub resizable: bool,
}

fn default_resizable() -> bool {
    true
}

impl<C> Window<C> {
    /// Top-left corner
    #[inline]
    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Stored (restore) size
    #[inline]
    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Minimized wins over maximized, so a maximized window that was
    /// minimized reports `Minimized` until it is focused again.
    pub fn state(&self) -> WindowState {
        if self.minimized {
            WindowState::Minimized
        } else if self.maximized {
            WindowState::Maximized
        } else {
            WindowState::Normal
        }
    }

    /// Whether the renderer should draw this window
    #[inline]
    pub fn is_visible(&self) -> bool {
        !self.minimized
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_window() -> Window<&'static str> {
        Window {
            id: WindowId::from("calc"),
            title: "Calculator".to_string(),
            content: "calculator",
            icon: None,
            x: 50,
            y: 60,
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
    fn test_window_geometry() {
        let w = create_test_window();
        assert_eq!(w.position(), Point::new(50, 60));
        assert_eq!(w.size(), Size::new(600, 400));
    }

    #[test]
    fn test_window_state() {
        let mut w = create_test_window();
        assert_eq!(w.state(), WindowState::Normal);

        w.maximized = true;
        assert_eq!(w.state(), WindowState::Maximized);

        w.minimized = true;
        assert_eq!(w.state(), WindowState::Minimized);
        assert!(!w.is_visible());
        assert_eq!(serde_json::to_string(&w.state()).unwrap(), format!("\"{}\"", w.state().as_str()));
    }

    #[test]
    fn test_window_json_field_names() {
        let w = create_test_window();
        let json = serde_json::to_value(&w).unwrap();
        assert_eq!(json["zIndex"], 201);
        assert_eq!(json["content"], "calculator");
        assert!(json.get("icon").is_none());
    }

    #[test]
    fn test_resizable_defaults_to_true() {
        let json = r#"{"id":"a","title":"A","content":"x","x":0,"y":0,"width":10,"height":10,
            "minimized":false,"maximized":false,"zIndex":201,"focused":false}"#;
        let w: Window<String> = serde_json::from_str(json).unwrap();
        assert!(w.resizable);
        assert!(w.icon.is_none());
    }
}
