//! Options for opening a window

use serde::Deserialize;

use super::WindowId;

/// Options for [`WindowManager::open_window`](super::WindowManager::open_window).
///
/// `id`, `title`, and `content` are required. Every other field is optional;
/// when the id is already open, omitted fields leave the window unchanged.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OpenWindowOptions<C> {
    pub id: WindowId,
    pub title: String,
    pub content: C,
    #[serde(default)]
    pub icon: Option<String>,
    /// Left edge (None = cascade)
    #[serde(default)]
    pub x: Option<i32>,
    /// Top edge (None = cascade)
    #[serde(default)]
    pub y: Option<i32>,
    /// Width; clamped to the minimum size
    #[serde(default)]
    pub width: Option<i32>,
    /// Height; clamped to the minimum size
    #[serde(default)]
    pub height: Option<i32>,
    #[serde(default)]
    pub minimized: bool,
    #[serde(default)]
    pub maximized: bool,
    #[serde(default = "default_resizable")]
    pub resizable: bool,
}

fn default_resizable() -> bool {
    true
}

impl<C> OpenWindowOptions<C> {
    /// Options with only the required fields set
    pub fn new(id: impl Into<WindowId>, title: impl Into<String>, content: C) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            content,
            icon: None,
            x: None,
            y: None,
            width: None,
            height: None,
            minimized: false,
            maximized: false,
            resizable: true,
        }
    }

    /// Place the window at an explicit position
    pub fn at(mut self, x: i32, y: i32) -> Self {
        self.x = Some(x);
        self.y = Some(y);
        self
    }

    /// Give the window an explicit size
    pub fn with_size(mut self, width: i32, height: i32) -> Self {
        self.width = Some(width);
        self.height = Some(height);
        self
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    /// Open the window minimized (created unfocused)
    pub fn minimized(mut self) -> Self {
        self.minimized = true;
        self
    }

    pub fn maximized(mut self) -> Self {
        self.maximized = true;
        self
    }

    /// Disallow resizing
    pub fn fixed_size(mut self) -> Self {
        self.resizable = false;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder() {
        let opts = OpenWindowOptions::new("mines", "Minesweeper", ())
            .at(10, 20)
            .with_size(300, 350)
            .with_icon("icons/mine.png")
            .fixed_size();

        assert_eq!(opts.id, "mines");
        assert_eq!((opts.x, opts.y), (Some(10), Some(20)));
        assert_eq!((opts.width, opts.height), (Some(300), Some(350)));
        assert_eq!(opts.icon.as_deref(), Some("icons/mine.png"));
        assert!(!opts.resizable);
        assert!(!opts.minimized);
    }

    #[test]
    fn test_json_defaults() {
        let opts: OpenWindowOptions<String> =
            serde_json::from_str(r#"{"id":"calc","title":"Calculator","content":"calculator"}"#).unwrap();

        assert_eq!(opts.id, "calc");
        assert!(opts.x.is_none());
        assert!(opts.width.is_none());
        assert!(opts.icon.is_none());
        assert!(!opts.minimized);
        assert!(!opts.maximized);
        assert!(opts.resizable);
    }

    #[test]
    fn test_json_requires_content() {
        let result: Result<OpenWindowOptions<String>, _> =
            serde_json::from_str(r#"{"id":"calc","title":"Calculator"}"#);
        assert!(result.is_err());
    }
}
