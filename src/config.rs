//! Panel configuration persistence
//!
//! A YAML document describing a panel's resting geometry and animation
//! parameters, e.g.:
//!
//! ```yaml
//! position: bottomTrailing
//! margins:
//!   top: 0.0
//!   leading: 16.0
//!   bottom: 16.0
//!   trailing: 16.0
//! size:
//!   width: 320.0
//!   height: 480.0
//! ```

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::geometry::{Margins, Size};
use crate::offscreen::AxisFlags;
use crate::panel::SpringTiming;
use crate::position::{LayoutDirection, PanelPosition};

/// Panel configuration that persists across sessions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PanelConfig {
    pub position: PanelPosition,
    pub margins: Margins,
    pub size: Size,
    pub direction: LayoutDirection,
    pub hide_flags: AxisFlags,
    pub spring: SpringTiming,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            position: PanelPosition::Trailing,
            margins: Margins::all(8.0),
            size: Size::new(320.0, 480.0),
            direction: LayoutDirection::default(),
            hide_flags: AxisFlags::default(),
            spring: SpringTiming::default(),
        }
    }
}

impl PanelConfig {
    /// Parse a config from a YAML document
    pub fn from_yaml(content: &str) -> Result<Self> {
        serde_yaml::from_str(content).context("failed to parse panel config")
    }

    /// Serialize this config to YAML
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).context("failed to serialize panel config")
    }

    /// Load config from disk, or return defaults if missing or malformed
    pub fn load(path: &Path) -> Self {
        if !path.exists() {
            tracing::debug!(
                "Panel config not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(content) => match Self::from_yaml(&content) {
                Ok(config) => {
                    tracing::info!("Loaded panel config from {}", path.display());
                    config
                }
                Err(e) => {
                    tracing::warn!("Failed to parse panel config at {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!("Failed to read panel config at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Save config to disk, creating parent directories as needed
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).with_context(|| {
                format!("failed to create config directory {}", parent.display())
            })?;
        }

        let content = self.to_yaml()?;
        std::fs::write(path, content)
            .with_context(|| format!("failed to write panel config to {}", path.display()))?;

        tracing::info!("Saved panel config to {}", path.display());
        Ok(())
    }
}
