//! Tracker configuration
//!
//! Read from an optional TOML file and then overridden by command-line flags.
//!
//! ```toml
//! [views]
//! today_uses_location_filter = false
//! reminder_source = "at_school"
//! ```

use crate::inventory::{ReminderSource, ViewConfig};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackerConfig {
    pub views: ViewConfig,
}

impl TrackerConfig {
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        Ok(config)
    }

    /// Apply command-line overrides on top of the file values
    pub fn with_overrides(
        mut self,
        today_ignores_location_filter: bool,
        reminder_source: Option<ReminderSource>,
    ) -> Self {
        if today_ignores_location_filter {
            self.views.today_uses_location_filter = false;
        }
        if let Some(source) = reminder_source {
            self.views.reminder_source = source;
        }
        self
    }
}
