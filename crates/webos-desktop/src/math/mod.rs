//! Integer geometry for desktop placement
//!
//! Coordinates are desktop-relative and caller-defined (conventionally CSS
//! pixels). Positions are signed; sizes are unsigned.

mod point;
mod size;

pub use point::Point;
pub use size::Size;
