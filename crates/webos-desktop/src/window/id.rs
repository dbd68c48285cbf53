//! Caller-assigned window identity

use std::borrow::Borrow;
use std::fmt;
use std::ops::Deref;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Opaque window identifier, unique among open windows.
///
/// The shell picks ids. Reusing a fixed id (`"minesweeper"`) makes an app
/// single-instance because reopening re-activates the existing window;
/// [`WindowId::unique`] gives every open call its own window.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WindowId(String);

impl WindowId {
    /// Wrap a caller-chosen id
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Fresh id of the form `<prefix>-<uuid>`
    pub fn unique(prefix: &str) -> Self {
        Self(format!("{}-{}", prefix, Uuid::new_v4()))
    }

    /// Borrow the id as a string slice
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume into the underlying string
    pub fn into_string(self) -> String {
        self.0
    }
}

impl Deref for WindowId {
    type Target = str;

    fn deref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for WindowId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for WindowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for WindowId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for WindowId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl PartialEq<str> for WindowId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for WindowId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unique_ids_differ() {
        let a = WindowId::unique("notepad");
        let b = WindowId::unique("notepad");
        assert_ne!(a, b);
        assert!(a.starts_with("notepad-"));
    }

    #[test]
    fn test_compares_with_str() {
        let id = WindowId::from("calc");
        assert_eq!(id, "calc");
        assert_eq!(id.as_str(), "calc");
        assert_eq!(id.to_string(), "calc");
    }

    #[test]
    fn test_serializes_as_plain_string() {
        let id = WindowId::new("paint");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"paint\"");
        let back: WindowId = serde_json::from_str("\"paint\"").unwrap();
        assert_eq!(back, id);
    }
}
