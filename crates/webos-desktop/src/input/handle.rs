//! Resize handles on a window frame

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Edge or corner grabbed for a resize
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResizeHandle {
    N,
    S,
    E,
    W,
    NE,
    NW,
    SE,
    SW,
}

impl ResizeHandle {
    /// Parse the renderer's direction string (`"n"`, `"se"`, ...)
    pub fn from_direction(direction: &str) -> Option<Self> {
        match direction {
            "n" => Some(ResizeHandle::N),
            "s" => Some(ResizeHandle::S),
            "e" => Some(ResizeHandle::E),
            "w" => Some(ResizeHandle::W),
            "ne" => Some(ResizeHandle::NE),
            "nw" => Some(ResizeHandle::NW),
            "se" => Some(ResizeHandle::SE),
            "sw" => Some(ResizeHandle::SW),
            _ => None,
        }
    }

    #[inline]
    pub(crate) fn moves_north(self) -> bool {
        matches!(self, ResizeHandle::N | ResizeHandle::NE | ResizeHandle::NW)
    }

    #[inline]
    pub(crate) fn moves_south(self) -> bool {
        matches!(self, ResizeHandle::S | ResizeHandle::SE | ResizeHandle::SW)
    }

    #[inline]
    pub(crate) fn moves_east(self) -> bool {
        matches!(self, ResizeHandle::E | ResizeHandle::NE | ResizeHandle::SE)
    }

    #[inline]
    pub(crate) fn moves_west(self) -> bool {
        matches!(self, ResizeHandle::W | ResizeHandle::NW | ResizeHandle::SW)
    }

    /// Get CSS cursor style for this handle
    pub fn cursor(self) -> &'static str {
        match self {
            ResizeHandle::N | ResizeHandle::S => "ns-resize",
            ResizeHandle::E | ResizeHandle::W => "ew-resize",
            ResizeHandle::NE | ResizeHandle::SW => "nesw-resize",
            ResizeHandle::NW | ResizeHandle::SE => "nwse-resize",
        }
    }
}

impl FromStr for ResizeHandle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_direction(s).ok_or_else(|| format!("unknown resize direction: {}", s))
    }
}
