//! Drag state for move and resize gestures

use serde::Serialize;

use crate::math::{Point, Size};
use crate::window::{Window, WindowId, WindowPatch};
use super::{calculate_resize, ResizeHandle};

/// Geometry of a window while a drag is in flight
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct DragFrame {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl DragFrame {
    fn new(position: Point, size: Size) -> Self {
        Self {
            x: position.x,
            y: position.y,
            width: size.width,
            height: size.height,
        }
    }
}

/// Current drag operation state
#[derive(Clone, Debug, PartialEq)]
pub enum DragSession {
    /// Moving a window by its title bar
    Move {
        /// Window being moved
        window_id: WindowId,
        /// Offset from window origin to pointer
        offset: Point,
        /// Window size (unchanged by a move)
        size: Size,
    },
    /// Resizing a window by an edge or corner
    Resize {
        /// Window being resized
        window_id: WindowId,
        /// Which resize handle
        handle: ResizeHandle,
        /// Window position at start
        start_pos: Point,
        /// Window size at start
        start_size: Size,
        /// Pointer position at start
        start_pointer: Point,
        /// Smallest size the gesture may produce
        min_size: Size,
    },
}

impl DragSession {
    /// Start moving `window` from a pointer-down at `pointer`
    pub fn begin_move<C>(window: &Window<C>, pointer: Point) -> Self {
        DragSession::Move {
            window_id: window.id.clone(),
            offset: pointer - window.position(),
            size: window.size(),
        }
    }

    /// Start resizing `window`.
    ///
    /// Returns `None` for windows that are not resizable or are maximized,
    /// since their frame offers no handles.
    pub fn begin_resize<C>(
        window: &Window<C>,
        handle: ResizeHandle,
        pointer: Point,
        min_size: Size,
    ) -> Option<Self> {
        if !window.resizable || window.maximized {
            tracing::trace!(window = %window.id, ?handle, "resize refused");
            return None;
        }
        Some(DragSession::Resize {
            window_id: window.id.clone(),
            handle,
            start_pos: window.position(),
            start_size: window.size(),
            start_pointer: pointer,
            min_size,
        })
    }

    /// The window this gesture targets
    pub fn window_id(&self) -> &WindowId {
        match self {
            DragSession::Move { window_id, .. } | DragSession::Resize { window_id, .. } => window_id,
        }
    }

    /// Check if this is a window move operation
    #[inline]
    pub fn is_move(&self) -> bool {
        matches!(self, DragSession::Move { .. })
    }

    /// Check if this is a window resize operation
    #[inline]
    pub fn is_resize(&self) -> bool {
        matches!(self, DragSession::Resize { .. })
    }

    /// CSS cursor to show for the whole gesture
    pub fn cursor(&self) -> &'static str {
        match self {
            DragSession::Move { .. } => "move",
            DragSession::Resize { handle, .. } => handle.cursor(),
        }
    }

    /// Geometry the window would have if released at `pointer`
    pub fn preview(&self, pointer: Point) -> DragFrame {
        match self {
            DragSession::Move { offset, size, .. } => DragFrame::new(pointer - *offset, *size),
            DragSession::Resize {
                handle,
                start_pos,
                start_size,
                start_pointer,
                min_size,
                ..
            } => {
                let (pos, size) =
                    calculate_resize(*handle, *start_pos, *start_size, pointer - *start_pointer, *min_size);
                DragFrame::new(pos, size)
            }
        }
    }

    /// End the gesture at `pointer`, yielding the patch to commit
    pub fn finish<C>(self, pointer: Point) -> (WindowId, WindowPatch<C>) {
        let frame = self.preview(pointer);
        let patch = match &self {
            DragSession::Move { .. } => WindowPatch::new().position(frame.x, frame.y),
            DragSession::Resize { .. } => WindowPatch::new()
                .position(frame.x, frame.y)
                .size(clamp_i32(frame.width), clamp_i32(frame.height)),
        };
        let window_id = match self {
            DragSession::Move { window_id, .. } | DragSession::Resize { window_id, .. } => window_id,
        };
        (window_id, patch)
    }
}

fn clamp_i32(value: u32) -> i32 {
    i32::try_from(value).unwrap_or(i32::MAX)
}
