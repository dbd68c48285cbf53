//! Renderer-side drag and resize
//!
//! The manager never sees a drag in progress. The renderer keeps a
//! [`DragSession`] while the pointer is down, previews geometry from it, and
//! hands the patch from [`DragSession::finish`] to
//! [`WindowManager::update_window`](crate::WindowManager::update_window) on
//! release.

mod drag;
mod handle;

pub use drag::{DragFrame, DragSession};
pub use handle::ResizeHandle;

use crate::math::{Point, Size};

/// Calculate new position and size after a resize by `delta`.
///
/// Size never drops below `min_size`. When a north or west edge hits the
/// minimum, the opposite edge stays where it was.
pub fn calculate_resize(
    handle: ResizeHandle,
    start_pos: Point,
    start_size: Size,
    delta: Point,
    min_size: Size,
) -> (Point, Size) {
    let start_w = i64::from(start_size.width);
    let start_h = i64::from(start_size.height);
    let dx = i64::from(delta.x);
    let dy = i64::from(delta.y);

    let mut width = start_w;
    let mut height = start_h;
    if handle.moves_east() {
        width = start_w + dx;
    }
    if handle.moves_west() {
        width = start_w - dx;
    }
    if handle.moves_south() {
        height = start_h + dy;
    }
    if handle.moves_north() {
        height = start_h - dy;
    }

    let size = Size::clamped(width, height, min_size);
    let mut pos = start_pos;
    if handle.moves_west() {
        pos.x = shift(start_pos.x, start_w - i64::from(size.width));
    }
    if handle.moves_north() {
        pos.y = shift(start_pos.y, start_h - i64::from(size.height));
    }

    (pos, size)
}

fn shift(origin: i32, by: i64) -> i32 {
    let moved = i64::from(origin) + by;
    i32::try_from(moved).unwrap_or(if moved < 0 { i32::MIN } else { i32::MAX })
}
