// Copyright © SixtyFPS GmbH <info@slint.dev>
// SPDX-License-Identifier: MIT

use std::rc::Rc;

use super::traits::KeyValueStorage;
use crate::{models::TaskModel, StorageError};

/// Reads and writes the whole task list as one JSON array under a single
/// storage key.
#[derive(Clone)]
pub struct TaskRepository {
    storage: Rc<dyn KeyValueStorage>,
    key: String,
}

impl TaskRepository {
    pub fn new(storage: Rc<dyn KeyValueStorage>, key: impl Into<String>) -> Self {
        Self { storage, key: key.into() }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// `Ok(None)` when nothing (or a JSON `null`) is stored yet.
    pub fn load(&self) -> Result<Option<Vec<TaskModel>>, StorageError> {
        let Some(blob) = self.storage.read(&self.key)? else {
            return Ok(None);
        };

        Ok(serde_json::from_str::<Option<Vec<TaskModel>>>(&blob)?)
    }

    pub fn save(&self, tasks: &[TaskModel]) -> Result<(), StorageError> {
        self.storage.write(&self.key, &serde_json::to_string(tasks)?)
    }

    pub fn backup_key(&self) -> String {
        format!("{}.bak", self.key)
    }

    /// Copies the raw blob stored under the key to [`Self::backup_key`],
    /// unparsed. Does nothing when the key is empty.
    pub fn backup(&self) -> Result<(), StorageError> {
        if let Some(blob) = self.storage.read(&self.key)? {
            self.storage.write(&self.backup_key(), &blob)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::MemoryStorage;
    use chrono::{TimeZone, Utc};

    fn test_tasks() -> Vec<TaskModel> {
        vec![
            TaskModel {
                id: 1704103200000,
                text: "Buy milk".into(),
                deadline: Utc.with_ymd_and_hms(2024, 1, 1, 10, 0, 0).unwrap(),
                completed: false,
            },
            TaskModel {
                id: 1704103200001,
                text: "Call \"Bob\" ✓".into(),
                deadline: Utc.with_ymd_and_hms(2024, 2, 29, 23, 59, 0).unwrap(),
                completed: true,
            },
        ]
    }

    #[test]
    fn test_load_nothing_stored() {
        let repo = TaskRepository::new(Rc::new(MemoryStorage::new()), "todos");
        assert_eq!(repo.load().unwrap(), None);
    }

    #[test]
    fn test_load_null() {
        let storage = MemoryStorage::new().with_entry("todos", "null");
        let repo = TaskRepository::new(Rc::new(storage), "todos");

        assert_eq!(repo.load().unwrap(), None);
    }

    #[test]
    fn test_save_then_load() {
        let storage = MemoryStorage::new();
        let repo = TaskRepository::new(Rc::new(storage.clone()), "todos");

        repo.save(&test_tasks()).unwrap();

        assert!(storage.get("todos").unwrap().starts_with('['));
        assert_eq!(repo.load().unwrap(), Some(test_tasks()));
    }

    #[test]
    fn test_save_empty_list() {
        let storage = MemoryStorage::new();
        let repo = TaskRepository::new(Rc::new(storage.clone()), "todos");

        repo.save(&[]).unwrap();

        assert_eq!(storage.get("todos").as_deref(), Some("[]"));
        assert_eq!(repo.load().unwrap(), Some(vec![]));
    }

    #[test]
    fn test_load_malformed() {
        for blob in ["not json", r#"{"id":1}"#, r#"[{"text":"no id"}]"#] {
            let storage = MemoryStorage::new().with_entry("todos", blob);
            let repo = TaskRepository::new(Rc::new(storage), "todos");

            assert!(matches!(repo.load(), Err(StorageError::Serialization(_))), "{blob}");
        }
    }

    #[test]
    fn test_uses_configured_key() {
        let storage = MemoryStorage::new();
        let repo = TaskRepository::new(Rc::new(storage.clone()), "other");

        repo.save(&test_tasks()).unwrap();

        assert!(storage.get("todos").is_none());
        assert!(storage.get("other").is_some());
    }

    #[test]
    fn test_backup_copies_raw_blob() {
        let storage = MemoryStorage::new().with_entry("todos", "{broken");
        let repo = TaskRepository::new(Rc::new(storage.clone()), "todos");

        repo.backup().unwrap();

        assert_eq!(repo.backup_key(), "todos.bak");
        assert_eq!(storage.get("todos.bak").as_deref(), Some("{broken"));
        assert_eq!(storage.get("todos").as_deref(), Some("{broken"));
    }

    #[test]
    fn test_backup_of_nothing() {
        let storage = MemoryStorage::new();
        let repo = TaskRepository::new(Rc::new(storage.clone()), "todos");

        repo.backup().unwrap();

        assert!(storage.get("todos.bak").is_none());
    }
}
