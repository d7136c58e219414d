use std::str::FromStr;

use log::LevelFilter;
use serde::{Deserialize, Serialize};

pub const SNAPSHOT_RESOURCE_DEFAULT: &str = "WOT-Scryfall.json";
pub const SETTINGS_RESOURCE: &str = "settings.json";
pub const SWIPE_THRESHOLD_DEFAULT: f64 = 50.0;
pub const GRID_COLUMNS_DEFAULT: u32 = 3;
const LOG_LEVEL_DEFAULT: &str = "info";

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
  pub snapshot_resource: String,
  pub swipe_threshold: f64,
  pub grid_columns: u32,
  pub log_level: String,
}

impl Default for Settings {
  fn default() -> Self {
    Self {
      snapshot_resource: SNAPSHOT_RESOURCE_DEFAULT.to_string(),
      swipe_threshold: SWIPE_THRESHOLD_DEFAULT,
      grid_columns: GRID_COLUMNS_DEFAULT,
      log_level: LOG_LEVEL_DEFAULT.to_string(),
    }
  }
}

impl Settings {
  /// Parse bundled settings. Anything unreadable falls back to the defaults.
  pub fn from_json_or_default(bytes: &[u8]) -> Self {
    match serde_json::from_slice::<Settings>(bytes) {
      Ok(settings) => settings.normalized(),
      Err(error) => {
        log::warn!("Ignoring invalid settings, using defaults: {}", error);
        Self::default()
      }
    }
  }

  fn normalized(mut self) -> Self {
    if self.snapshot_resource.trim().is_empty() {
      self.snapshot_resource = SNAPSHOT_RESOURCE_DEFAULT.to_string();
    }
    if !self.swipe_threshold.is_finite() || self.swipe_threshold < 0.0 {
      self.swipe_threshold = SWIPE_THRESHOLD_DEFAULT;
    }
    if self.grid_columns == 0 {
      self.grid_columns = GRID_COLUMNS_DEFAULT;
    }
    self
  }

  pub fn level_filter(&self) -> LevelFilter {
    LevelFilter::from_str(self.log_level.trim()).unwrap_or(LevelFilter::Info)
  }
}
