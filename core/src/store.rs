//! In-memory progress/status store.
//!
//! Holds every [`UploadTask`] of the current page in selection order and
//! routes lifecycle events to them by [`TaskKey`].

use crate::task::{TaskId, TaskKey, UploadEvent, UploadState, UploadTask};

/// How tasks are keyed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum KeyMode {
    /// One key per selected file.
    #[default]
    TaskId,
    /// Key by file name. Same-named files overwrite each other's entry.
    FileName,
}

/// Counts of tasks per state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StoreSummary {
    pub pending: usize,
    pub in_progress: usize,
    pub succeeded: usize,
    pub failed: usize,
}

impl StoreSummary {
    pub fn total(&self) -> usize {
        self.pending + self.in_progress + self.succeeded + self.failed
    }

    pub fn finished(&self) -> usize {
        self.succeeded + self.failed
    }
}

/// Progress and status of every upload on the page.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProgressStore {
    mode: KeyMode,
    next_id: u64,
    tasks: Vec<UploadTask>,
}

impl ProgressStore {
    pub fn new(mode: KeyMode) -> Self {
        Self {
            mode,
            next_id: 0,
            tasks: Vec::new(),
        }
    }

    pub fn mode(&self) -> KeyMode {
        self.mode
    }

    /// Register a newly selected file and return its key.
    ///
    /// With [`KeyMode::FileName`] an existing entry with the same name is
    /// replaced in place.
    pub fn begin(&mut self, name: &str, size: u64) -> TaskKey {
        let id = TaskId(self.next_id);
        self.next_id += 1;

        let key = match self.mode {
            KeyMode::TaskId => TaskKey::Id(id),
            KeyMode::FileName => TaskKey::Name(name.to_string()),
        };
        let task = UploadTask::new(key.clone(), name, size);

        match self.tasks.iter_mut().find(|t| t.key == key) {
            Some(existing) => {
                log::debug!("Upload key {} collides, replacing tracked state", key);
                *existing = task;
            }
            None => self.tasks.push(task),
        }
        key
    }

    /// Route an event to its task. Returns `false` if nothing changed.
    pub fn apply(&mut self, key: &TaskKey, event: UploadEvent) -> bool {
        match self.tasks.iter_mut().find(|t| &t.key == key) {
            Some(task) => task.apply(event),
            None => {
                log::warn!("Upload event {:?} for unknown key {}", event, key);
                false
            }
        }
    }

    pub fn get(&self, key: &TaskKey) -> Option<&UploadTask> {
        self.tasks.iter().find(|t| &t.key == key)
    }

    /// Tasks in selection order.
    pub fn tasks(&self) -> &[UploadTask] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn summary(&self) -> StoreSummary {
        self.tasks
            .iter()
            .fold(StoreSummary::default(), |mut summary, task| {
                match task.state {
                    UploadState::Pending => summary.pending += 1,
                    UploadState::InProgress { .. } => summary.in_progress += 1,
                    UploadState::Succeeded => summary.succeeded += 1,
                    UploadState::Failed(_) => summary.failed += 1,
                }
                summary
            })
    }

    /// Whether every tracked upload reached a terminal status.
    pub fn is_settled(&self) -> bool {
        self.tasks.iter().all(UploadTask::is_terminal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_id_mode_tracks_same_names_independently() {
        let mut store = ProgressStore::default();
        let first = store.begin("photo.jpg", 10);
        let second = store.begin("photo.jpg", 20);

        assert_ne!(first, second);
        assert_eq!(store.len(), 2);

        store.apply(&first, UploadEvent::Completed { status: 500 });
        store.apply(&second, UploadEvent::Completed { status: 200 });
        assert_eq!(store.get(&first).unwrap().status_text(), "Upload failed: 500");
        assert_eq!(store.get(&second).unwrap().status_text(), "Upload successful");
    }

    #[test]
    fn test_file_name_mode_collides() {
        let mut store = ProgressStore::new(KeyMode::FileName);
        let first = store.begin("photo.jpg", 10);
        store.apply(&first, UploadEvent::Progress { loaded: 5, total: Some(10) });
        let second = store.begin("photo.jpg", 20);

        assert_eq!(first, second);
        assert_eq!(store.len(), 1);

        let survivor = store.get(&second).unwrap();
        assert_eq!(survivor.size, 20);
        assert_eq!(survivor.state, UploadState::Pending);
    }

    #[test]
    fn test_unknown_key_is_ignored() {
        let mut store = ProgressStore::default();
        store.begin("a.txt", 1);
        assert!(!store.apply(&TaskKey::Id(TaskId(99)), UploadEvent::Started));
    }

    #[test]
    fn test_selection_order_preserved() {
        let mut store = ProgressStore::default();
        for name in ["c.txt", "a.txt", "b.txt"] {
            store.begin(name, 1);
        }
        let names: Vec<_> = store.tasks().iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["c.txt", "a.txt", "b.txt"]);
    }

    #[test]
    fn test_summary_and_settled() {
        let mut store = ProgressStore::default();
        let a = store.begin("a", 1);
        let b = store.begin("b", 1);
        let c = store.begin("c", 1);
        let _d = store.begin("d", 1);

        store.apply(&a, UploadEvent::Completed { status: 200 });
        store.apply(&b, UploadEvent::TransportFailed);
        store.apply(&c, UploadEvent::Started);

        let summary = store.summary();
        assert_eq!(
            summary,
            StoreSummary {
                pending: 1,
                in_progress: 1,
                succeeded: 1,
                failed: 1
            }
        );
        assert_eq!(summary.total(), 4);
        assert_eq!(summary.finished(), 2);
        assert!(!store.is_settled());
    }

    #[test]
    fn test_empty_store_is_settled() {
        assert!(ProgressStore::default().is_settled());
    }
}
