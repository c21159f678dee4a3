use crate::io::snapshot::{
    STORAGE_KEY, SnapshotBackend, SnapshotError, decode_snapshot, encode_snapshot,
};
use crate::model::{Todo, TodoPatch};

/// Error type for store mutations that surface to the user
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("storage error: {0}")]
    Persist(#[from] SnapshotError),
}

/// Derived completion counts for the header
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Stats {
    pub total: usize,
    pub completed: usize,
}

/// Owns the authoritative in-memory todo collection and mirrors every
/// mutation to a snapshot backend as a full serialized copy.
///
/// Newest todos sit at the front. The store is the backend's sole writer;
/// all operations run to completion within one event turn, so at most one
/// mutation (and at most one delete) is ever in flight.
pub struct TodoStore {
    todos: Vec<Todo>,
    backend: Box<dyn SnapshotBackend>,
}

impl TodoStore {
    /// Load the persisted snapshot from `backend`. An absent, unreadable,
    /// or malformed snapshot initializes an empty collection — a load
    /// failure is never fatal and never surfaced.
    pub fn load(backend: Box<dyn SnapshotBackend>) -> Self {
        let todos = backend
            .get(STORAGE_KEY)
            .ok()
            .flatten()
            .and_then(|raw| decode_snapshot(&raw))
            .unwrap_or_default();
        TodoStore { todos, backend }
    }

    pub fn todos(&self) -> &[Todo] {
        &self.todos
    }

    pub fn is_empty(&self) -> bool {
        self.todos.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Todo> {
        self.todos.iter().find(|t| t.id == id)
    }

    pub fn stats(&self) -> Stats {
        Stats {
            total: self.todos.len(),
            completed: self.todos.iter().filter(|t| t.completed).count(),
        }
    }

    /// Add a new todo at the front of the collection.
    ///
    /// The title is trimmed; an empty result makes the whole call a silent
    /// no-op (nothing stored, nothing persisted). Returns whether a todo
    /// was added.
    pub fn add(&mut self, title: &str, notes: &str) -> bool {
        let title = title.trim();
        if title.is_empty() {
            return false;
        }
        self.todos
            .insert(0, Todo::new(title.to_string(), notes.trim().to_string()));
        let _ = self.persist();
        true
    }

    /// Merge `patch` into the todo with `id`. No-op if the id is absent.
    ///
    /// A patched title is trimmed; a title that trims to empty is ignored
    /// so an empty title can never be stored.
    pub fn update(&mut self, id: &str, patch: TodoPatch) {
        let Some(todo) = self.todos.iter_mut().find(|t| t.id == id) else {
            return;
        };
        if let Some(title) = patch.title {
            let title = title.trim();
            if !title.is_empty() {
                todo.title = title.to_string();
            }
        }
        if let Some(notes) = patch.notes {
            todo.notes = notes.trim().to_string();
        }
        let _ = self.persist();
    }

    /// Flip the completion flag on the todo with `id`. No-op if absent.
    pub fn toggle_complete(&mut self, id: &str) {
        let Some(todo) = self.todos.iter_mut().find(|t| t.id == id) else {
            return;
        };
        todo.completed = !todo.completed;
        let _ = self.persist();
    }

    /// Delete the todo with `id`, optimistically.
    ///
    /// The record is removed from memory first, then the post-removal
    /// collection is persisted. If the write fails, in-memory state is
    /// recovered: the last-known-good snapshot is re-read and adopted if
    /// it is still readable; otherwise the removed record is re-inserted
    /// at the front. Either recovery path returns an error so the caller
    /// can raise a user-visible notification. An absent id is a no-op.
    pub fn delete(&mut self, id: &str) -> Result<(), StoreError> {
        let Some(pos) = self.todos.iter().position(|t| t.id == id) else {
            return Ok(());
        };

        // Phase 1: optimistic removal. Keep the removed record so the
        // compensating path works from pre-removal state rather than a
        // re-read.
        let removed = self.todos.remove(pos);

        // Phase 2: attempt to persist the post-removal collection.
        let Err(err) = self.persist() else {
            return Ok(());
        };

        // Recovery: trust the last-known-good persisted snapshot if it is
        // readable, else revert the removal directly.
        let persisted = self
            .backend
            .get(STORAGE_KEY)
            .ok()
            .flatten()
            .and_then(|raw| decode_snapshot(&raw));
        match persisted {
            Some(snapshot) => self.todos = snapshot,
            None => self.todos.insert(0, removed),
        }
        Err(StoreError::Persist(err))
    }

    /// Serialize the full collection and write it under the fixed key.
    fn persist(&mut self) -> Result<(), SnapshotError> {
        let raw = encode_snapshot(&self.todos)?;
        self.backend.set(STORAGE_KEY, &raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::snapshot::MemoryBackend;
    use pretty_assertions::assert_eq;
    use std::io;
    use std::path::PathBuf;

    /// Backend whose writes can be made to fail, with an independently
    /// controllable stored value (possibly corrupt).
    struct FlakyBackend {
        value: Option<String>,
        fail_writes: bool,
    }

    impl SnapshotBackend for FlakyBackend {
        fn get(&self, _key: &str) -> Result<Option<String>, SnapshotError> {
            Ok(self.value.clone())
        }

        fn set(&mut self, _key: &str, value: &str) -> Result<(), SnapshotError> {
            if self.fail_writes {
                return Err(SnapshotError::Write {
                    path: PathBuf::from("todos.json"),
                    source: io::Error::other("disk full"),
                });
            }
            self.value = Some(value.to_string());
            Ok(())
        }
    }

    fn store_with(todos: &[(&str, &str)]) -> TodoStore {
        let mut store = TodoStore::load(Box::new(MemoryBackend::new()));
        // add() prepends, so insert in reverse to keep the given order
        for (title, notes) in todos.iter().rev() {
            assert!(store.add(title, notes));
        }
        store
    }

    #[test]
    fn load_from_empty_backend_is_empty() {
        let store = TodoStore::load(Box::new(MemoryBackend::new()));
        assert!(store.is_empty());
        assert_eq!(store.stats(), Stats::default());
    }

    #[test]
    fn load_ignores_malformed_snapshot() {
        let mut backend = MemoryBackend::new();
        backend.set(STORAGE_KEY, "not json {{{").unwrap();
        let store = TodoStore::load(Box::new(backend));
        assert!(store.is_empty());
    }

    #[test]
    fn add_prepends_and_persists() {
        let mut store = store_with(&[("older", "")]);
        assert!(store.add("newer", "some notes"));

        assert_eq!(store.todos().len(), 2);
        assert_eq!(store.todos()[0].title, "newer");
        assert_eq!(store.todos()[0].notes, "some notes");
        assert!(!store.todos()[0].completed);
        assert_eq!(store.todos()[1].title, "older");
    }

    #[test]
    fn add_trims_title_and_notes() {
        let mut store = store_with(&[]);
        assert!(store.add("  buy milk  ", "  2%  "));
        assert_eq!(store.todos()[0].title, "buy milk");
        assert_eq!(store.todos()[0].notes, "2%");
    }

    #[test]
    fn add_blank_title_is_a_no_op() {
        let mut backend = MemoryBackend::new();
        backend.set(STORAGE_KEY, "probe").unwrap();
        let mut store = TodoStore::load(Box::new(backend));

        assert!(!store.add("   ", "notes"));
        assert!(!store.add("", ""));
        assert!(store.is_empty());
        // Nothing was persisted either
        assert_eq!(
            store.backend.get(STORAGE_KEY).unwrap().as_deref(),
            Some("probe")
        );
    }

    #[test]
    fn update_patches_only_given_fields() {
        let mut store = store_with(&[("original", "keep me")]);
        let id = store.todos()[0].id.clone();
        store.toggle_complete(&id);

        store.update(&id, TodoPatch::title("renamed"));

        let todo = store.get(&id).unwrap();
        assert_eq!(todo.title, "renamed");
        assert_eq!(todo.notes, "keep me");
        assert!(todo.completed);
    }

    #[test]
    fn update_ignores_empty_title() {
        let mut store = store_with(&[("original", "")]);
        let id = store.todos()[0].id.clone();
        store.update(&id, TodoPatch::title("   "));
        assert_eq!(store.get(&id).unwrap().title, "original");
    }

    #[test]
    fn update_unknown_id_is_a_no_op() {
        let mut store = store_with(&[("only", "")]);
        store.update("nope", TodoPatch::title("renamed"));
        assert_eq!(store.todos()[0].title, "only");
    }

    #[test]
    fn toggle_twice_restores_flag() {
        let mut store = store_with(&[("task", "")]);
        let id = store.todos()[0].id.clone();

        store.toggle_complete(&id);
        assert!(store.get(&id).unwrap().completed);
        store.toggle_complete(&id);
        assert!(!store.get(&id).unwrap().completed);
    }

    #[test]
    fn stats_counts_completed() {
        let mut store = store_with(&[("a", ""), ("b", ""), ("c", "")]);
        let id = store.todos()[1].id.clone();
        store.toggle_complete(&id);

        assert_eq!(
            store.stats(),
            Stats {
                total: 3,
                completed: 1
            }
        );
    }

    #[test]
    fn delete_success_removes_from_memory_and_snapshot() {
        let mut store = store_with(&[("one", ""), ("two", "")]);
        let id = store.todos()[0].id.clone();

        store.delete(&id).unwrap();

        assert_eq!(store.todos().len(), 1);
        assert_eq!(store.todos()[0].title, "two");
        // Snapshot mirrors the post-removal collection
        let raw = store.backend.get(STORAGE_KEY).unwrap().unwrap();
        let persisted = decode_snapshot(&raw).unwrap();
        assert_eq!(persisted, store.todos);
    }

    #[test]
    fn delete_unknown_id_is_a_no_op() {
        let mut store = store_with(&[("one", "")]);
        store.delete("nope").unwrap();
        assert_eq!(store.todos().len(), 1);
    }

    #[test]
    fn delete_failure_restores_from_readable_snapshot() {
        let mut store = store_with(&[("one", ""), ("two", "")]);
        let before = store.todos.clone();
        let id = before[0].id.clone();

        // Snapshot currently holds both todos; start failing writes
        let raw = store.backend.get(STORAGE_KEY).unwrap().unwrap();
        store.backend = Box::new(FlakyBackend {
            value: Some(raw),
            fail_writes: true,
        });

        let err = store.delete(&id).unwrap_err();
        assert!(matches!(err, StoreError::Persist(_)));
        // In-memory state equals the re-read snapshot, order preserved
        assert_eq!(store.todos, before);
    }

    #[test]
    fn delete_failure_with_corrupt_snapshot_reinserts_at_front() {
        let mut store = store_with(&[("one", ""), ("two", "")]);
        let removed = store.todos[1].clone();
        store.backend = Box::new(FlakyBackend {
            value: Some("corrupt {{{".into()),
            fail_writes: true,
        });

        let err = store.delete(&removed.id).unwrap_err();
        assert!(matches!(err, StoreError::Persist(_)));
        // Both todos survive; the deleted one moved to the front
        assert_eq!(store.todos.len(), 2);
        assert_eq!(store.todos[0], removed);
        assert_eq!(store.todos[1].title, "one");
    }
}
