// Copyright © SixtyFPS GmbH <info@slint.dev>
// SPDX-License-Identifier: MIT

use std::path::PathBuf;

use super::traits;
use crate::StorageError;

/// Keeps each key in its own `<key>.json` file inside one directory.
#[derive(Clone, Debug)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl traits::KeyValueStorage for FileStorage {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        match std::fs::read_to_string(self.path(key)) {
            Ok(blob) => Ok(Some(blob)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn write(&self, key: &str, blob: &str) -> Result<(), StorageError> {
        std::fs::create_dir_all(&self.dir)?;

        // write next to the target and rename, so a crash never leaves half a file
        let path = self.path(key);
        let tmp_path = path.with_extension("json.tmp");
        std::fs::write(&tmp_path, blob)?;
        std::fs::rename(&tmp_path, &path)?;

        log::debug!("Wrote {} bytes to {}", blob.len(), path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::traits::KeyValueStorage;

    #[test]
    fn test_read_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileStorage::new(dir.path());

        assert!(storage.read("todos").unwrap().is_none());
    }

    #[test]
    fn test_write_then_read() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileStorage::new(dir.path().join("nested"));

        storage.write("todos", r#"[{"id":1}]"#).unwrap();
        storage.write("todos", "[]").unwrap();

        assert_eq!(storage.read("todos").unwrap().as_deref(), Some("[]"));
        assert!(dir.path().join("nested").join("todos.json").is_file());
        assert!(!dir.path().join("nested").join("todos.json.tmp").exists());
    }

    #[test]
    fn test_keys_are_separate_files() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileStorage::new(dir.path());

        storage.write("a", "1").unwrap();
        storage.write("b", "2").unwrap();

        assert_eq!(storage.read("a").unwrap().as_deref(), Some("1"));
        assert_eq!(storage.read("b").unwrap().as_deref(), Some("2"));
    }
}
