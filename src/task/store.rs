//! # Task Store
//!
//! An array-backed binary min-heap of tasks keyed by priority, with a
//! configurable capacity ceiling, plain-text persistence, and CSV export.
//!
//! The element at index `i` has children at `2i + 1` and `2i + 2`, and its
//! priority never exceeds theirs. Ties are not ordered.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::{
    fs::{self, File},
    io::BufWriter,
    path::Path,
};

use tracing::{debug, info, warn};

use super::{format, Task, TaskId};
use crate::{
    constants::{DEFAULT_CAPACITY, DEFAULT_DUE_SOON_HOURS},
    datetime::{self, Timestamp, Urgency},
    error::{TaskError, TaskResult},
};

/// Outcome of [`TaskStore::load`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadReport {
    /// Tasks now held by the store
    pub loaded: usize,
    /// Malformed lines that were ignored
    pub skipped: usize,
    /// Valid lines dropped because the store was full
    pub over_capacity: usize,
}

/// A task flagged by [`TaskStore::urgent_tasks`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UrgentTask<'a> {
    pub task: &'a Task,
    /// Either [`Urgency::Overdue`] or [`Urgency::DueSoon`]
    pub urgency: Urgency,
}

#[derive(Debug, Clone)]
struct Slot {
    id: TaskId,
    task: Task,
}

/// Priority-ordered task collection.
#[derive(Debug, Clone)]
pub struct TaskStore {
    heap: Vec<Slot>,
    capacity: usize,
    due_soon_hours: u32,
    next_id: u64,
}

impl Default for TaskStore {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

impl TaskStore {
    /// Creates an empty store holding at most `capacity` tasks.
    pub const fn new(capacity: usize) -> Self {
        Self {
            heap: Vec::new(),
            capacity,
            due_soon_hours: DEFAULT_DUE_SOON_HOURS,
            next_id: 0,
        }
    }

    /// Sets the look-ahead window used by [`Self::urgent_tasks`].
    #[must_use]
    pub fn with_due_soon_hours(mut self, hours: u32) -> Self {
        self.due_soon_hours = hours;
        self
    }

    /// Maximum number of tasks.
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Look-ahead window for due-soon reminders, in hours.
    pub const fn due_soon_hours(&self) -> u32 {
        self.due_soon_hours
    }

    /// Number of tasks currently stored.
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Returns true if no tasks are stored.
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Removes every task.
    pub fn clear(&mut self) {
        self.heap.clear();
    }

    /// Returns the task inserted under `id`, if it is still stored.
    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.heap.iter().find(|s| s.id == id).map(|s| &s.task)
    }

    /// Iterates tasks in internal heap order.
    pub fn iter(&self) -> impl Iterator<Item = &Task> {
        self.heap.iter().map(|s| &s.task)
    }

    /// Inserts a new task stamped with the current time.
    ///
    /// `priority` is expected in 1..=5 but is not range-checked here. An empty
    /// `due` means no due date; anything else must be `YYYY-MM-DD HH:MM`.
    /// Line breaks in `description` are replaced with spaces so each task
    /// stays on one line of the data file.
    pub fn insert(
        &mut self,
        priority: i32,
        description: &str,
        due: Option<&str>,
    ) -> TaskResult<TaskId> {
        if self.heap.len() >= self.capacity {
            return Err(TaskError::CapacityExceeded {
                capacity: self.capacity,
            });
        }

        let due_date = match due.filter(|d| !d.is_empty()) {
            Some(d) => datetime::format(datetime::parse(d)?),
            None => String::new(),
        };

        let task = Task {
            priority,
            description: description.replace(['\r', '\n'], " "),
            created_at: datetime::now_string(),
            due_date,
        };

        let id = self.push(task);
        debug!(%id, priority, "inserted task");
        Ok(id)
    }

    /// Removes and returns the most urgent task.
    pub fn remove_top(&mut self) -> TaskResult<Task> {
        if self.heap.is_empty() {
            return Err(TaskError::Empty);
        }

        let top = self.heap.swap_remove(0);
        self.sift_down(0);
        debug!(id = %top.id, priority = top.task.priority, "removed top task");
        Ok(top.task)
    }

    /// Returns the most urgent task without removing it.
    pub fn peek_top(&self) -> TaskResult<&Task> {
        self.heap.first().map(|s| &s.task).ok_or(TaskError::Empty)
    }

    /// Returns all tasks sorted by ascending priority.
    pub fn list_all(&self) -> Vec<&Task> {
        let mut tasks: Vec<&Task> = self.iter().collect();
        tasks.sort_by_key(|t| t.priority);
        tasks
    }

    /// Returns, in internal order, every overdue or due-soon task.
    pub fn urgent_tasks(&self) -> Vec<UrgentTask<'_>> {
        self.urgent_tasks_at(datetime::now())
    }

    /// [`Self::urgent_tasks`] against an explicit `now`.
    pub fn urgent_tasks_at(&self, now: Timestamp) -> Vec<UrgentTask<'_>> {
        self.iter()
            .filter_map(|task| {
                let urgency = Urgency::classify_at(&task.due_date, now, self.due_soon_hours);
                urgency.is_urgent().then_some(UrgentTask { task, urgency })
            })
            .collect()
    }

    /// Writes all tasks to `path` in data-file format, replacing its contents.
    pub fn save(&self, path: &Path) -> TaskResult<()> {
        let file = File::create(path).map_err(|e| TaskError::io(path, e))?;
        let mut writer = BufWriter::new(file);
        format::write_lines(&mut writer, self.iter()).map_err(|e| TaskError::io(path, e))?;

        debug!(path = %path.display(), count = self.len(), "saved tasks");
        Ok(())
    }

    /// Replaces the contents of the store with the tasks in `path`.
    ///
    /// Malformed lines, including ones that are not valid UTF-8, are skipped.
    /// On I/O failure the store is unchanged.
    pub fn load(&mut self, path: &Path) -> TaskResult<LoadReport> {
        let content = fs::read(path).map_err(|e| TaskError::io(path, e))?;

        let mut report = LoadReport::default();
        let mut tasks = Vec::new();

        for (index, raw) in content.split(|&b| b == b'\n').enumerate() {
            let raw = raw.strip_suffix(b"\r").unwrap_or(raw);
            if raw.iter().all(u8::is_ascii_whitespace) {
                continue;
            }
            let Ok(line) = std::str::from_utf8(raw) else {
                warn!(
                    path = %path.display(),
                    line = index + 1,
                    "skipping task line that is not UTF-8"
                );
                report.skipped += 1;
                continue;
            };
            let Some(task) = format::parse_line(line) else {
                warn!(path = %path.display(), line = index + 1, "skipping malformed task line");
                report.skipped += 1;
                continue;
            };
            if tasks.len() >= self.capacity {
                report.over_capacity += 1;
                continue;
            }
            tasks.push(task);
        }

        if report.over_capacity > 0 {
            warn!(
                path = %path.display(),
                dropped = report.over_capacity,
                capacity = self.capacity,
                "task file exceeds capacity"
            );
        }

        let slots: Vec<Slot> = tasks
            .into_iter()
            .map(|task| Slot {
                id: self.allocate_id(),
                task,
            })
            .collect();
        self.heap = slots;
        self.heapify();

        report.loaded = self.heap.len();
        info!(
            path = %path.display(),
            loaded = report.loaded,
            skipped = report.skipped,
            "loaded tasks"
        );
        Ok(report)
    }

    /// Writes all tasks to `path` as CSV, replacing its contents.
    pub fn export_csv(&self, path: &Path) -> TaskResult<()> {
        let file = File::create(path).map_err(|e| TaskError::io(path, e))?;
        let mut writer = BufWriter::new(file);
        format::write_csv(&mut writer, self.iter()).map_err(|e| TaskError::io(path, e))?;

        debug!(path = %path.display(), count = self.len(), "exported tasks");
        Ok(())
    }

    // -------------------------------------------------------------------------
    // Heap maintenance
    // -------------------------------------------------------------------------

    fn allocate_id(&mut self) -> TaskId {
        let id = TaskId::new(self.next_id);
        self.next_id += 1;
        id
    }

    fn push(&mut self, task: Task) -> TaskId {
        let id = self.allocate_id();
        self.heap.push(Slot { id, task });
        self.sift_up(self.heap.len() - 1);
        id
    }

    fn priority(&self, index: usize) -> i32 {
        self.heap[index].task.priority
    }

    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = (index - 1) / 2;
            if self.priority(parent) <= self.priority(index) {
                break;
            }
            self.heap.swap(parent, index);
            index = parent;
        }
    }

    /// Moves the element at `index` down; on equal children the left wins.
    fn sift_down(&mut self, mut index: usize) {
        let len = self.heap.len();
        loop {
            let left = 2 * index + 1;
            let right = left + 1;
            let mut smallest = index;

            if left < len && self.priority(left) < self.priority(smallest) {
                smallest = left;
            }
            if right < len && self.priority(right) < self.priority(smallest) {
                smallest = right;
            }
            if smallest == index {
                break;
            }
            self.heap.swap(index, smallest);
            index = smallest;
        }
    }

    fn heapify(&mut self) {
        for index in (0..self.heap.len() / 2).rev() {
            self.sift_down(index);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn store_with(priorities: &[i32]) -> TaskStore {
        let mut store = TaskStore::default();
        for &p in priorities {
            store.insert(p, &format!("task {p}"), None).unwrap();
        }
        store
    }

    fn assert_heap(store: &TaskStore) {
        let priorities: Vec<i32> = store.iter().map(|t| t.priority).collect();
        for (i, &p) in priorities.iter().enumerate() {
            for child in [2 * i + 1, 2 * i + 2] {
                if let Some(&c) = priorities.get(child) {
                    assert!(p <= c, "heap violated at {i}: {priorities:?}");
                }
            }
        }
    }

    fn drain(store: &mut TaskStore) -> Vec<i32> {
        std::iter::from_fn(|| store.remove_top().ok())
            .map(|t| t.priority)
            .collect()
    }

    #[test]
    fn test_extraction_order() {
        let mut store = store_with(&[5, 1, 3, 2, 4]);
        assert_eq!(drain(&mut store), vec![1, 2, 3, 4, 5]);
        assert!(store.is_empty());
    }

    #[test]
    fn test_heap_invariant_under_mixed_operations() {
        let mut store = store_with(&[3, 3, 1, 5, 2, 2, 4, 1, 5]);
        assert_heap(&store);

        store.remove_top().unwrap();
        store.remove_top().unwrap();
        assert_heap(&store);

        store.insert(1, "late", None).unwrap();
        store.insert(4, "later", None).unwrap();
        assert_heap(&store);

        let order = drain(&mut store);
        let mut sorted = order.clone();
        sorted.sort_unstable();
        assert_eq!(order, sorted);
    }

    #[test]
    fn test_sift_down_prefers_left_on_ties() {
        let mut store = store_with(&[1, 2, 2, 3]);
        store.heap[1].task.description = "left".to_string();
        store.heap[2].task.description = "right".to_string();

        store.remove_top().unwrap();
        assert_eq!(store.peek_top().unwrap().description, "left");
    }

    #[test]
    fn test_empty_store() {
        let mut store = TaskStore::default();
        assert!(matches!(store.peek_top(), Err(TaskError::Empty)));
        assert!(matches!(store.remove_top(), Err(TaskError::Empty)));
    }

    #[test]
    fn test_peek_is_idempotent() {
        let store = store_with(&[4, 2, 3]);
        let before: Vec<Task> = store.list_all().into_iter().cloned().collect();

        let first = store.peek_top().unwrap().clone();
        for _ in 0..5 {
            assert_eq!(store.peek_top().unwrap(), &first);
        }
        assert_eq!(first.priority, 2);

        let after: Vec<Task> = store.list_all().into_iter().cloned().collect();
        assert_eq!(before, after);
    }

    #[test]
    fn test_capacity_exceeded() {
        let mut store = TaskStore::new(2);
        store.insert(1, "a", None).unwrap();
        store.insert(2, "b", None).unwrap();

        let err = store.insert(3, "c", None).unwrap_err();
        assert!(matches!(err, TaskError::CapacityExceeded { capacity: 2 }));
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_insert_rejects_malformed_due_date() {
        let mut store = TaskStore::default();
        let err = store.insert(1, "a", Some("next week")).unwrap_err();
        assert!(matches!(err, TaskError::Parse(_)));
        assert!(store.is_empty());
    }

    #[test]
    fn test_insert_stamps_fields() {
        let mut store = TaskStore::default();
        let id = store.insert(2, "line one\nline two", Some("2030-01-02 03:04")).unwrap();
        let task = store.get(id).unwrap();

        assert_eq!(task.priority, 2);
        assert_eq!(task.description, "line one line two");
        assert_eq!(task.due_date, "2030-01-02 03:04");
        assert!(datetime::parse(&task.created_at).is_ok());

        let no_due = store.insert(3, "b", Some("")).unwrap();
        assert_eq!(store.get(no_due).unwrap().due(), None);
    }

    #[test]
    fn test_insert_accepts_out_of_range_priority() {
        let mut store = TaskStore::default();
        store.insert(9, "low", None).unwrap();
        store.insert(0, "high", None).unwrap();
        assert_eq!(store.peek_top().unwrap().priority, 0);
    }

    #[test]
    fn test_get_after_removal() {
        let mut store = TaskStore::default();
        let id = store.insert(1, "a", None).unwrap();
        store.remove_top().unwrap();
        assert!(store.get(id).is_none());
    }

    #[test]
    fn test_clear_keeps_settings_and_ids() {
        let mut store = TaskStore::new(2).with_due_soon_hours(6);
        let first = store.insert(1, "a", None).unwrap();
        store.insert(2, "b", None).unwrap();

        store.clear();
        assert!(store.is_empty());
        assert!(matches!(store.peek_top(), Err(TaskError::Empty)));
        assert_eq!(store.capacity(), 2);
        assert_eq!(store.due_soon_hours(), 6);

        let second = store.insert(3, "c", None).unwrap();
        assert_ne!(first, second);
        assert!(store.get(first).is_none());
        assert_eq!(store.get(second).unwrap().description, "c");
    }

    #[test]
    fn test_list_all_sorted_without_mutation() {
        let store = store_with(&[3, 1, 2]);
        let internal: Vec<i32> = store.iter().map(|t| t.priority).collect();

        let listed: Vec<i32> = store.list_all().iter().map(|t| t.priority).collect();
        assert_eq!(listed, vec![1, 2, 3]);

        let internal_after: Vec<i32> = store.iter().map(|t| t.priority).collect();
        assert_eq!(internal, internal_after);
    }

    #[test]
    fn test_save_load_round_trip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("tasks.txt");

        let mut store = TaskStore::default();
        store.insert(3, "Water | plants", None).unwrap();
        store.insert(1, r#"Say "hi""#, Some("2030-05-05 05:05")).unwrap();
        store.insert(2, "Pay rent", Some("2030-06-01 00:00")).unwrap();
        store.save(&path).unwrap();

        let mut reloaded = TaskStore::default();
        let report = reloaded.load(&path).unwrap();
        assert_eq!(report.loaded, 3);
        assert_eq!(report.skipped, 0);

        let mut original: Vec<Task> = store.iter().cloned().collect();
        let mut restored: Vec<Task> = reloaded.iter().cloned().collect();
        original.sort_by(|a, b| a.description.cmp(&b.description));
        restored.sort_by(|a, b| a.description.cmp(&b.description));
        assert_eq!(original, restored);
        assert_heap(&reloaded);
    }

    #[test]
    fn test_load_skips_malformed_lines_and_heapifies() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("tasks.txt");
        fs::write(
            &path,
            "5|2026-10-16 09:00||five\n\
             garbage\n\
             x|2026-10-16 09:00||bad priority\n\
             \n\
             1|2026-10-16 09:00||one\n\
             3|2026-10-16 09:00|2026-10-20 10:00|three\n",
        )
        .unwrap();

        let mut store = store_with(&[2]);
        let report = store.load(&path).unwrap();
        assert_eq!(
            report,
            LoadReport {
                loaded: 3,
                skipped: 2,
                over_capacity: 0
            }
        );
        assert_heap(&store);
        assert_eq!(drain(&mut store), vec![1, 3, 5]);
    }

    #[test]
    fn test_load_skips_lines_that_are_not_utf8() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("tasks.txt");
        fs::write(
            &path,
            b"1|2026-10-01 09:00||good\n2|2026-10-01 09:00||caf\xe9\r\n3|2026-10-01 09:00||ok\r\n",
        )
        .unwrap();

        let mut store = TaskStore::default();
        let report = store.load(&path).unwrap();
        assert_eq!(report.loaded, 2);
        assert_eq!(report.skipped, 1);
        assert_eq!(store.peek_top().unwrap().description, "good");
        assert!(store.iter().any(|t| t.description == "ok"));
    }

    #[test]
    fn test_load_respects_capacity() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("tasks.txt");
        fs::write(
            &path,
            "1|2026-10-16 09:00||a\n2|2026-10-16 09:00||b\n3|2026-10-16 09:00||c\n",
        )
        .unwrap();

        let mut store = TaskStore::new(2);
        let report = store.load(&path).unwrap();
        assert_eq!(report.loaded, 2);
        assert_eq!(report.over_capacity, 1);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_load_missing_file_leaves_store_untouched() {
        let dir = tempdir().unwrap();
        let mut store = store_with(&[1, 2]);

        let err = store.load(&dir.path().join("missing.txt")).unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_save_to_unwritable_path() {
        let dir = tempdir().unwrap();
        let store = store_with(&[1]);
        let err = store
            .save(&dir.path().join("no-such-dir").join("tasks.txt"))
            .unwrap_err();
        assert!(matches!(err, TaskError::Io { .. }));
    }

    #[test]
    fn test_export_csv() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.csv");

        let mut store = TaskStore::default();
        store.insert(1, r#"He said "hi""#, None).unwrap();
        store.export_csv(&path).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        let mut lines = content.lines();
        assert_eq!(lines.next(), Some("Priority,Added,Due Date,Description"));
        let row = lines.next().unwrap();
        assert!(row.starts_with("1,\""));
        assert!(row.ends_with(r#","","He said ""hi""""#));
        assert_eq!(lines.next(), None);
    }

    #[test]
    fn test_urgent_tasks_classification() {
        let now = datetime::parse("2026-10-16 12:00").unwrap();
        let mut store = TaskStore::default();
        store.insert(1, "overdue", Some("2026-10-16 11:59")).unwrap();
        store.insert(2, "soon", Some("2026-10-17 11:00")).unwrap();
        store.insert(3, "later", Some("2026-10-17 13:00")).unwrap();
        store.insert(4, "never", None).unwrap();

        let urgent = store.urgent_tasks_at(now);
        let tagged: Vec<(&str, Urgency)> = urgent
            .iter()
            .map(|u| (u.task.description.as_str(), u.urgency))
            .collect();
        assert_eq!(
            tagged,
            vec![("overdue", Urgency::Overdue), ("soon", Urgency::DueSoon)]
        );
    }

    #[test]
    fn test_urgent_tasks_custom_horizon() {
        let now = datetime::parse("2026-10-16 12:00").unwrap();
        let mut store = TaskStore::default().with_due_soon_hours(48);
        store.insert(3, "later", Some("2026-10-17 13:00")).unwrap();

        let urgent = store.urgent_tasks_at(now);
        assert_eq!(urgent.len(), 1);
        assert_eq!(urgent[0].urgency, Urgency::DueSoon);
    }
}
