//! Generic settings persistence coordination.
//!
//! Provides a reusable API for persisting application settings to storage,
//! plus loading of the timeline configuration from its possible sources.

use anyhow::Context;
use rtimeline::TimelineConfig;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Storage key of the persisted timeline configuration.
pub const CONFIG_KEY: &str = "timeline_config";

/// Coordinates generic settings persistence.
///
/// This coordinator provides type-safe loading and saving of any serializable
/// settings to eframe's persistent storage. Settings are stored as JSON strings.
pub struct SettingsCoordinator;

impl SettingsCoordinator {
    /// Loads a setting from persistent storage with a default fallback.
    ///
    /// # Type Parameters
    /// * `T` - The type to deserialize, must implement Deserialize and Default
    ///
    /// # Arguments
    /// * `storage` - The eframe storage interface
    /// * `key` - The storage key for this setting
    ///
    /// # Returns
    /// The deserialized value if found and valid, otherwise the default value for type T
    ///
    /// # Examples
    /// ```ignore
    /// let config: TimelineConfig = SettingsCoordinator::load_setting(
    ///     storage,
    ///     "timeline_config"
    /// );
    /// ```
    pub fn load_setting<T>(storage: Option<&dyn eframe::Storage>, key: &str) -> T
    where
        T: for<'de> Deserialize<'de> + Default,
    {
        if let Some(storage) = storage {
            if let Some(json_str) = storage.get_string(key) {
                if let Ok(value) = serde_json::from_str(&json_str) {
                    return value;
                }
            }
        }
        T::default()
    }

    /// Saves a setting to persistent storage.
    ///
    /// # Type Parameters
    /// * `T` - The type to serialize, must implement Serialize
    ///
    /// # Arguments
    /// * `storage` - The eframe storage interface (mutable)
    /// * `key` - The storage key for this setting
    /// * `value` - The value to serialize and save
    ///
    /// # Examples
    /// ```ignore
    /// SettingsCoordinator::save_setting(
    ///     storage,
    ///     "timeline_config",
    ///     state.timeline.config()
    /// );
    /// ```
    pub fn save_setting<T>(storage: &mut dyn eframe::Storage, key: &str, value: &T)
    where
        T: Serialize,
    {
        if let Ok(json_str) = serde_json::to_string(value) {
            storage.set_string(key, json_str);
            storage.flush();
        }
    }

    /// Reads a timeline configuration from a JSON file.
    ///
    /// # Arguments
    /// * `path` - Path of the JSON file
    ///
    /// # Returns
    /// The validated configuration, or an error naming the file
    pub fn load_config_file(path: &Path) -> anyhow::Result<TimelineConfig> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        TimelineConfig::from_json(&json)
            .with_context(|| format!("Failed to parse config file {}", path.display()))
    }

    /// Resolves the timeline configuration at startup.
    ///
    /// An explicit file wins over the stored configuration, which wins over
    /// the defaults. A file that cannot be loaded is logged and skipped.
    pub fn resolve_config(
        config_path: Option<&Path>,
        storage: Option<&dyn eframe::Storage>,
    ) -> TimelineConfig {
        if let Some(path) = config_path {
            match Self::load_config_file(path) {
                Ok(config) => {
                    log::info!("Loaded timeline config from {}", path.display());
                    return config;
                }
                Err(err) => log::warn!("{err:#}; falling back to stored settings"),
            }
        }

        Self::load_setting::<TimelineConfig>(storage, CONFIG_KEY).validated()
    }
}
