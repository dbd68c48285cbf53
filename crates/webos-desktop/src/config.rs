//! Window manager configuration
//!
//! Placement defaults and limits. Every field has a default, so a partial
//! JSON object (or `{}`) is a valid configuration.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::math::{Point, Size};

/// Placement and stacking parameters for a [`WindowManager`](crate::WindowManager)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ManagerConfig {
    /// Position of the first un-positioned window
    pub base_position: Point,
    /// Per-window offset applied on both axes when cascading
    pub cascade_step: i32,
    /// Size used when the caller gives none
    pub default_size: Size,
    /// Smallest size a window may have
    pub min_size: Size,
    /// Z-index counter start; the first window gets `z_index_base + 1`
    pub z_index_base: u64,
}

impl ManagerConfig {
    /// Default cascade base
    pub const BASE_POSITION: Point = Point::new(100, 100);
    /// Default cascade step
    pub const CASCADE_STEP: i32 = 30;
    /// Default window size
    pub const DEFAULT_SIZE: Size = Size::new(600, 400);
    /// Default minimum window size
    pub const MIN_SIZE: Size = Size::new(1, 1);
    /// Default z-index base
    pub const Z_INDEX_BASE: u64 = 200;
    /// Largest z-index the shell can hold exactly (a JS number)
    pub const Z_INDEX_MAX: u64 = (1 << 53) - 1;
    /// Z-indices that must stay available above the base
    pub const Z_INDEX_HEADROOM: u64 = 1 << 32;

    /// Parse and validate a configuration from JSON
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: ManagerConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that the configuration can uphold the size invariants
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min_size.is_empty() {
            return Err(ConfigError::ZeroMinSize(self.min_size));
        }
        if !self.default_size.fits(self.min_size) {
            return Err(ConfigError::DefaultBelowMin {
                default: self.default_size,
                min: self.min_size,
            });
        }
        if self.cascade_step < 0 {
            return Err(ConfigError::NegativeCascadeStep(self.cascade_step));
        }
        if self.z_index_base > Self::Z_INDEX_MAX - Self::Z_INDEX_HEADROOM {
            return Err(ConfigError::ZIndexBaseTooHigh {
                base: self.z_index_base,
                max: Self::Z_INDEX_MAX - Self::Z_INDEX_HEADROOM,
            });
        }
        Ok(())
    }

    /// Default position for a new window when `count` windows are already open
    pub fn cascade_position(&self, count: usize) -> Point {
        let count = i32::try_from(count).unwrap_or(i32::MAX);
        self.base_position.offset(self.cascade_step.saturating_mul(count))
    }
}

impl Default for ManagerConfig {
    fn default() -> Self {
        Self {
            base_position: Self::BASE_POSITION,
            cascade_step: Self::CASCADE_STEP,
            default_size: Self::DEFAULT_SIZE,
            min_size: Self::MIN_SIZE,
            z_index_base: Self::Z_INDEX_BASE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(ManagerConfig::default().validate().is_ok());
    }

    #[test]
    fn test_cascade_position() {
        let config = ManagerConfig::default();
        assert_eq!(config.cascade_position(0), Point::new(100, 100));
        assert_eq!(config.cascade_position(1), Point::new(130, 130));
        assert_eq!(config.cascade_position(3), Point::new(190, 190));
    }

    #[test]
    fn test_from_json_partial() {
        let config = ManagerConfig::from_json(r#"{"cascadeStep": 20, "minSize": {"width": 200, "height": 150}}"#).unwrap();
        assert_eq!(config.cascade_step, 20);
        assert_eq!(config.min_size, Size::new(200, 150));
        assert_eq!(config.default_size, ManagerConfig::DEFAULT_SIZE);
        assert_eq!(config.z_index_base, 200);
    }

    #[test]
    fn test_from_json_empty_object() {
        let config = ManagerConfig::from_json("{}").unwrap();
        assert_eq!(config, ManagerConfig::default());
    }

    #[test]
    fn test_rejects_zero_min_size() {
        let config = ManagerConfig {
            min_size: Size::new(0, 10),
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::ZeroMinSize(_))));
    }

    #[test]
    fn test_rejects_default_below_min() {
        let err = ManagerConfig::from_json(r#"{"minSize": {"width": 800, "height": 100}}"#).unwrap_err();
        assert!(matches!(err, ConfigError::DefaultBelowMin { .. }));
    }

    #[test]
    fn test_rejects_negative_step() {
        let err = ManagerConfig::from_json(r#"{"cascadeStep": -5}"#).unwrap_err();
        assert!(matches!(err, ConfigError::NegativeCascadeStep(-5)));
    }

    #[test]
    fn test_rejects_z_index_base_without_headroom() {
        let err = ManagerConfig::from_json(r#"{"zIndexBase": 9007199254740990}"#).unwrap_err();
        assert!(matches!(err, ConfigError::ZIndexBaseTooHigh { base: 9007199254740990, .. }));

        let config = ManagerConfig {
            z_index_base: ManagerConfig::Z_INDEX_MAX - ManagerConfig::Z_INDEX_HEADROOM,
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_rejects_malformed_json() {
        let err = ManagerConfig::from_json("{ not json").unwrap_err();
        assert!(matches!(err, ConfigError::Json(_)));
    }
}
