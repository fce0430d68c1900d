//! The engine's diary: an append-only session log.
//!
//! Appends from any number of callers serialize on the internal lock,
//! so entry order is lock-acquisition order. Nothing is ever reordered
//! or pruned; the log lives and dies with the engine that owns it.

use std::sync::Mutex;

/// Append-only ordered sequence of log lines.
pub struct ActivityLog {
    entries: Mutex<Vec<String>>,
}

impl ActivityLog {
    pub fn new() -> Self {
        Self {
            entries: Mutex::new(Vec::new()),
        }
    }

    /// Append one entry. The only mutator.
    pub fn append(&self, entry: impl Into<String>) {
        self.entries.lock().unwrap().push(entry.into());
    }

    /// An owned copy of everything appended so far, oldest first.
    /// Appends racing with the snapshot may or may not be included.
    pub fn snapshot(&self) -> Vec<String> {
        self.entries.lock().unwrap().clone()
    }

    pub fn len(&self) -> usize {
        self.entries.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for ActivityLog {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn starts_empty() {
        let log = ActivityLog::new();
        assert!(log.is_empty());
        assert_eq!(log.snapshot(), Vec::<String>::new());
    }

    #[test]
    fn appends_preserve_order() {
        let log = ActivityLog::new();
        log.append("first");
        log.append("second");
        log.append("third");
        assert_eq!(log.snapshot(), vec!["first", "second", "third"]);
    }

    #[test]
    fn snapshot_is_a_copy() {
        let log = ActivityLog::new();
        log.append("before");
        let snapshot = log.snapshot();
        log.append("after");

        assert_eq!(snapshot, vec!["before"]);
        assert_eq!(log.len(), 2);
    }

    #[test]
    fn concurrent_appends_all_land() {
        let log = Arc::new(ActivityLog::new());
        let mut handles = Vec::new();
        for worker in 0..8 {
            let log = Arc::clone(&log);
            handles.push(std::thread::spawn(move || {
                for i in 0..50 {
                    log.append(format!("worker {worker} entry {i}"));
                }
            }));
        }
        for handle in handles {
            handle.join().unwrap();
        }
        assert_eq!(log.len(), 8 * 50);
    }

    #[test]
    fn entries_from_one_caller_stay_ordered() {
        let log = Arc::new(ActivityLog::new());
        let writer = {
            let log = Arc::clone(&log);
            std::thread::spawn(move || {
                for i in 0..100 {
                    log.append(format!("seq {i}"));
                }
            })
        };
        writer.join().unwrap();

        let snapshot = log.snapshot();
        let mine: Vec<_> = snapshot.iter().filter(|e| e.starts_with("seq ")).collect();
        for (i, entry) in mine.iter().enumerate() {
            assert_eq!(**entry, format!("seq {i}"));
        }
    }
}
