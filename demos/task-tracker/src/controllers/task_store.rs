// Copyright © SixtyFPS GmbH <info@slint.dev>
// SPDX-License-Identifier: MIT

use std::{
    cell::{Cell, RefCell},
    rc::Rc,
};

use crate::models::{Action, AppState};
use crate::reducer::{reduce, Effect};
use crate::repositories::{traits::Clock, TaskRepository};
use crate::{Callback, StorageError};

/// Owns the application state. Every change goes through [`TaskStore::dispatch`],
/// which runs the reducer, mirrors the task list to storage when needed and
/// then notifies the view.
pub struct TaskStore {
    state: RefCell<AppState>,
    repo: TaskRepository,
    clock: Rc<dyn Clock>,
    loaded: Cell<bool>,
    persist_blocked: Cell<bool>,
    changed_callback: Callback<AppState>,
}

impl TaskStore {
    pub fn new(repo: TaskRepository, clock: impl Clock + 'static) -> Rc<Self> {
        Rc::new(Self {
            state: RefCell::new(AppState::default()),
            repo,
            clock: Rc::new(clock),
            loaded: Cell::new(false),
            persist_blocked: Cell::new(false),
            changed_callback: Callback::default(),
        })
    }

    pub fn state(&self) -> AppState {
        self.state.borrow().clone()
    }

    pub fn with_state<T>(&self, f: impl FnOnce(&AppState) -> T) -> T {
        f(&self.state.borrow())
    }

    /// Seeds the task list from storage. Only the first call reads anything.
    ///
    /// Stored data that cannot be read is copied to the repository's backup
    /// key before anything is written over it. If that copy fails, the store
    /// stops saving altogether.
    pub fn load(&self) -> Result<(), StorageError> {
        if self.loaded.replace(true) {
            log::debug!("Task list already loaded, ignoring");
            return Ok(());
        }

        let stored = match self.repo.load() {
            Ok(stored) => stored,
            Err(e) => {
                self.keep_unreadable_tasks();
                return Err(e);
            }
        };

        match stored {
            Some(tasks) => {
                log::info!("Loaded {} tasks from \"{}\"", tasks.len(), self.repo.key());
                self.dispatch(Action::LoadPersisted(tasks));
            }
            None => log::info!("Nothing stored under \"{}\" yet", self.repo.key()),
        }

        Ok(())
    }

    pub fn dispatch(&self, action: Action) {
        log::debug!("{:?}", action);

        let (next, effect) = reduce(&self.state.borrow(), action, self.clock.now_millis());

        if effect == Effect::Persist && self.persist_blocked.get() {
            log::warn!("Not saving tasks over unreadable data in \"{}\"", self.repo.key());
        } else if effect == Effect::Persist {
            if let Err(e) = self.repo.save(&next.tasks) {
                log::error!("Failed to save tasks: {}", e);
            }
        }

        *self.state.borrow_mut() = next.clone();
        self.changed_callback.invoke(&next);
    }

    pub fn on_changed(&self, callback: impl FnMut(&AppState) + 'static) {
        self.changed_callback.on(callback);
    }

    fn keep_unreadable_tasks(&self) {
        match self.repo.backup() {
            Ok(()) => log::warn!(
                "Copied unreadable tasks from \"{}\" to \"{}\"",
                self.repo.key(),
                self.repo.backup_key()
            ),
            Err(e) => {
                log::error!("Failed to back up \"{}\", saving is disabled: {}", self.repo.key(), e);
                self.persist_blocked.set(true);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TaskModel;
    use crate::repositories::{traits::KeyValueStorage, MemoryStorage, MockClock};
    use chrono::{TimeZone, Utc};

    const NOW: i64 = 1_704_103_200_000;

    struct FailingStorage;

    impl KeyValueStorage for FailingStorage {
        fn read(&self, _key: &str) -> Result<Option<String>, StorageError> {
            Err(StorageError::Unavailable("test".into()))
        }

        fn write(&self, _key: &str, _blob: &str) -> Result<(), StorageError> {
            Err(StorageError::Unavailable("test".into()))
        }
    }

    // refuses writes to backup keys
    struct NoBackupStorage(MemoryStorage);

    impl KeyValueStorage for NoBackupStorage {
        fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
            self.0.read(key)
        }

        fn write(&self, key: &str, blob: &str) -> Result<(), StorageError> {
            if key.ends_with(".bak") {
                return Err(StorageError::Backend("read-only".into()));
            }
            self.0.write(key, blob)
        }
    }

    const NULL_DEADLINE: &str = r#"[{"id":1,"text":"keep me","deadline":"2024-01-01T10:00:00.000Z","completed":false},{"id":2,"text":"edited","deadline":null,"completed":false}]"#;

    fn test_store(storage: &MemoryStorage) -> Rc<TaskStore> {
        test_store_with_clock(storage, MockClock::new(NOW))
    }

    fn test_store_with_clock(storage: &MemoryStorage, clock: MockClock) -> Rc<TaskStore> {
        TaskStore::new(TaskRepository::new(Rc::new(storage.clone()), "todos"), clock)
    }

    fn create(store: &TaskStore, text: &str) {
        store.dispatch(Action::SetDraftText(text.into()));
        store.dispatch(Action::SetDraftDeadline(Some(
            Utc.with_ymd_and_hms(2024, 1, 1, 10, 0, 0).unwrap(),
        )));
        store.dispatch(Action::CreateTask);
    }

    #[test]
    fn test_buy_milk_scenario() {
        let storage = MemoryStorage::new();
        let store = test_store(&storage);
        store.load().unwrap();
        assert!(store.state().tasks.is_empty());

        create(&store, "Buy milk");
        let tasks = store.state().tasks;
        assert_eq!(
            tasks,
            vec![TaskModel {
                id: NOW,
                text: "Buy milk".into(),
                deadline: Utc.with_ymd_and_hms(2024, 1, 1, 10, 0, 0).unwrap(),
                completed: false,
            }]
        );

        store.dispatch(Action::ToggleCompleted(NOW));
        assert!(store.state().tasks[0].completed);

        store.dispatch(Action::DeleteTask(NOW));
        assert!(store.state().tasks.is_empty());
        assert_eq!(storage.get("todos").as_deref(), Some("[]"));
    }

    #[test]
    fn test_persist_then_reload() {
        let storage = MemoryStorage::new();
        let store = test_store(&storage);
        create(&store, "First");
        create(&store, "Second");
        store.dispatch(Action::ToggleCompleted(NOW + 1));

        let reloaded = test_store(&storage);
        reloaded.load().unwrap();

        assert_eq!(reloaded.state().tasks, store.state().tasks);
    }

    #[test]
    fn test_ids_follow_the_clock() {
        let clock = MockClock::new(NOW);
        let store = test_store_with_clock(&MemoryStorage::new(), clock.clone());

        create(&store, "a");
        create(&store, "b");
        clock.advance(50);
        create(&store, "c");
        clock.set(NOW);
        create(&store, "d");

        let ids: Vec<_> = store.state().tasks.iter().map(|task| task.id).collect();
        assert_eq!(ids, vec![NOW, NOW + 1, NOW + 50, NOW + 51]);
    }

    #[test]
    fn test_draft_changes_are_not_persisted() {
        let storage = MemoryStorage::new();
        let store = test_store(&storage);

        store.dispatch(Action::SetDraftText("typing".into()));
        store.dispatch(Action::OpenCreateDialog);

        assert!(storage.get("todos").is_none());
    }

    #[test]
    fn test_rejected_create_is_not_persisted() {
        let storage = MemoryStorage::new();
        let store = test_store(&storage);

        store.dispatch(Action::SetDraftText("no deadline".into()));
        store.dispatch(Action::CreateTask);

        assert!(storage.get("todos").is_none());
        assert!(store.state().tasks.is_empty());
    }

    #[test]
    fn test_load_reads_only_once() {
        let storage = MemoryStorage::new();
        let store = test_store(&storage);
        store.load().unwrap();

        storage.write("todos", "not json").unwrap();

        assert!(store.load().is_ok());
        assert!(store.state().tasks.is_empty());
    }

    #[test]
    fn test_load_malformed_keeps_empty_list() {
        let storage = MemoryStorage::new().with_entry("todos", "{broken");
        let store = test_store(&storage);

        assert!(matches!(store.load(), Err(StorageError::Serialization(_))));
        assert!(store.state().tasks.is_empty());
    }

    #[test]
    fn test_create_after_failed_load_keeps_stored_blob() {
        let storage = MemoryStorage::new().with_entry("todos", NULL_DEADLINE);
        let store = test_store(&storage);

        assert!(store.load().is_err());
        create(&store, "new");

        assert_eq!(storage.get("todos.bak").as_deref(), Some(NULL_DEADLINE));
        let stored: Vec<TaskModel> = serde_json::from_str(&storage.get("todos").unwrap()).unwrap();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].text, "new");
    }

    #[test]
    fn test_failed_backup_disables_saving() {
        let storage = MemoryStorage::new().with_entry("todos", NULL_DEADLINE);
        let store = TaskStore::new(
            TaskRepository::new(Rc::new(NoBackupStorage(storage.clone())), "todos"),
            MockClock::new(NOW),
        );

        assert!(store.load().is_err());
        create(&store, "new");

        assert_eq!(store.state().tasks.len(), 1);
        assert_eq!(storage.get("todos").as_deref(), Some(NULL_DEADLINE));
        assert!(storage.get("todos.bak").is_none());
    }

    #[test]
    fn test_failed_write_keeps_state() {
        let store = TaskStore::new(
            TaskRepository::new(Rc::new(FailingStorage), "todos"),
            MockClock::new(NOW),
        );

        create(&store, "Still here");

        assert_eq!(store.state().tasks.len(), 1);
        assert!(store.load().is_err());
    }

    #[test]
    fn test_on_changed() {
        let storage = MemoryStorage::new();
        let store = test_store(&storage);

        let seen = Rc::new(RefCell::new(Vec::new()));
        store.on_changed({
            let seen = seen.clone();
            move |state| seen.borrow_mut().push(state.draft_text.clone())
        });

        store.dispatch(Action::SetDraftText("a".into()));
        store.dispatch(Action::SetDraftText("ab".into()));

        assert_eq!(*seen.borrow(), vec!["a".to_string(), "ab".to_string()]);
    }

    #[test]
    fn test_listener_may_read_store() {
        let storage = MemoryStorage::new();
        let store = test_store(&storage);

        let seen = Rc::new(Cell::new(0));
        store.on_changed({
            let store = Rc::downgrade(&store);
            let seen = seen.clone();
            move |_| {
                if let Some(store) = store.upgrade() {
                    seen.set(store.with_state(|state| state.tasks.len()));
                }
            }
        });

        create(&store, "Buy milk");

        assert_eq!(seen.get(), 1);
    }
}
