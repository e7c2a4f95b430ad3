// Copyright © SixtyFPS GmbH <info@slint.dev>
// SPDX-License-Identifier: MIT

use std::path::PathBuf;

/// Storage key holding the serialized task list. Matches the key used by the
/// browser version, so existing data is picked up.
pub const DEFAULT_STORAGE_KEY: &str = "todos";

pub const APP_QUALIFIER: &str = "dev";
pub const APP_ORGANIZATION: &str = "slint";
pub const APP_NAME: &str = "task-tracker";

#[derive(Clone, Debug, PartialEq)]
pub struct TrackerConfig {
    pub storage_key: String,
    /// Directory for the native file storage. `None` picks the platform data
    /// directory.
    pub data_dir: Option<PathBuf>,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self { storage_key: DEFAULT_STORAGE_KEY.into(), data_dir: None }
    }
}

impl TrackerConfig {
    #[must_use]
    pub fn with_storage_key(self, storage_key: impl Into<String>) -> Self {
        Self { storage_key: storage_key.into(), ..self }
    }

    #[must_use]
    pub fn with_data_dir(self, data_dir: impl Into<PathBuf>) -> Self {
        Self { data_dir: Some(data_dir.into()), ..self }
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn resolve_data_dir(&self) -> Option<PathBuf> {
        self.data_dir.clone().or_else(|| {
            directories::ProjectDirs::from(APP_QUALIFIER, APP_ORGANIZATION, APP_NAME)
                .map(|dirs| dirs.data_dir().to_path_buf())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = TrackerConfig::default();
        assert_eq!(config.storage_key, "todos");
        assert_eq!(config.data_dir, None);
    }

    #[test]
    fn test_builders() {
        let config = TrackerConfig::default().with_storage_key("tasks").with_data_dir("/tmp/tt");
        assert_eq!(config.storage_key, "tasks");
        assert_eq!(config.data_dir, Some(PathBuf::from("/tmp/tt")));
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn test_explicit_data_dir_wins() {
        let config = TrackerConfig::default().with_data_dir("/tmp/tt");
        assert_eq!(config.resolve_data_dir(), Some(PathBuf::from("/tmp/tt")));
    }
}
