//! Snapshot serialization for window manager state

use std::collections::HashSet;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::config::ManagerConfig;
use crate::error::SnapshotError;
use crate::window::{Window, WindowManager};

/// Snapshot of every open window, for restoring a desktop session
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot<C> {
    /// Version for migration support
    pub version: u32,
    /// Z-index counter at export time
    pub next_z_index: u64,
    /// Windows in open order
    pub windows: Vec<Window<C>>,
}

impl<C> Snapshot<C> {
    /// Current snapshot version
    pub const CURRENT_VERSION: u32 = 1;

    /// Create a new snapshot
    pub fn new(next_z_index: u64, windows: Vec<Window<C>>) -> Self {
        Self {
            version: Self::CURRENT_VERSION,
            next_z_index,
            windows,
        }
    }

    /// Check if snapshot needs migration
    pub fn needs_migration(&self) -> bool {
        self.version < Self::CURRENT_VERSION
    }

    /// Migrate snapshot to current version
    pub fn migrate(&mut self) {
        // Version 0 predates the counter field; highest z-index stands in
        if self.version == 0 {
            let highest = self.windows.iter().map(|w| w.z_index).max().unwrap_or(0);
            self.next_z_index = self.next_z_index.max(highest);
        }
        self.version = Self::CURRENT_VERSION;
    }

    /// Check every window manager invariant against `config`
    pub fn validate(&self, config: &ManagerConfig) -> Result<(), SnapshotError> {
        if self.version > Self::CURRENT_VERSION {
            return Err(SnapshotError::UnsupportedVersion {
                found: self.version,
                supported: Self::CURRENT_VERSION,
            });
        }

        if self.next_z_index > ManagerConfig::Z_INDEX_MAX {
            return Err(SnapshotError::ZIndexAboveMax {
                z_index: self.next_z_index,
                max: ManagerConfig::Z_INDEX_MAX,
            });
        }

        let mut ids = HashSet::new();
        let mut z_indices = HashSet::new();
        let mut focused = 0;

        for window in &self.windows {
            if !ids.insert(window.id.as_str()) {
                return Err(SnapshotError::DuplicateId(window.id.to_string()));
            }
            if window.z_index <= config.z_index_base {
                return Err(SnapshotError::ZIndexBelowBase {
                    id: window.id.to_string(),
                    z_index: window.z_index,
                    base: config.z_index_base,
                });
            }
            if window.z_index > ManagerConfig::Z_INDEX_MAX {
                return Err(SnapshotError::ZIndexAboveMax {
                    z_index: window.z_index,
                    max: ManagerConfig::Z_INDEX_MAX,
                });
            }
            if !z_indices.insert(window.z_index) {
                return Err(SnapshotError::DuplicateZIndex {
                    id: window.id.to_string(),
                    z_index: window.z_index,
                });
            }
            if !window.size().fits(config.min_size) {
                return Err(SnapshotError::BelowMinSize {
                    id: window.id.to_string(),
                    size: window.size(),
                    min: config.min_size,
                });
            }
            if window.focused {
                if window.minimized {
                    return Err(SnapshotError::MinimizedFocused(window.id.to_string()));
                }
                focused += 1;
            }
        }

        if focused > 1 {
            return Err(SnapshotError::MultipleFocused(focused));
        }
        Ok(())
    }
}

impl<C: DeserializeOwned> Snapshot<C> {
    /// Parse a snapshot from JSON without validating it
    pub fn from_json(json: &str) -> Result<Self, SnapshotError> {
        Ok(serde_json::from_str(json)?)
    }
}

impl<C: Clone> WindowManager<C> {
    /// Export the open windows
    pub fn snapshot(&self) -> Snapshot<C> {
        Snapshot::new(self.top_z_index(), self.windows().to_vec())
    }
}

impl<C> WindowManager<C> {
    /// Rebuild a window manager from a snapshot.
    ///
    /// The snapshot is migrated, then rejected if it breaks any invariant.
    /// The z-index counter resumes above every stored window.
    pub fn from_snapshot(config: ManagerConfig, mut snapshot: Snapshot<C>) -> Result<Self, SnapshotError> {
        config.validate()?;
        if snapshot.needs_migration() {
            tracing::debug!(from = snapshot.version, to = Snapshot::<C>::CURRENT_VERSION, "migrating snapshot");
            snapshot.migrate();
        }
        if let Err(err) = snapshot.validate(&config) {
            tracing::warn!(error = %err, "rejected snapshot");
            return Err(err);
        }

        let highest = snapshot.windows.iter().map(|w| w.z_index).max().unwrap_or(0);
        let z_counter = snapshot.next_z_index.max(highest).max(config.z_index_base);
        tracing::debug!(windows = snapshot.windows.len(), z_counter, "snapshot restored");

        Ok(Self::from_parts(config, snapshot.windows, z_counter))
    }
}
