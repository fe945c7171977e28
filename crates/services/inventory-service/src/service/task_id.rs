//! Task identifier generation.

use std::sync::atomic::{AtomicI64, Ordering};

use domain::TASK_ID_PREFIX;

/// Issues `TASK<unix-millis>` identifiers.
///
/// Identifiers are strictly increasing per generator: when the clock has not
/// advanced past the last issued value, the last value plus one is used.
#[derive(Debug, Default)]
pub struct TaskIdGenerator {
    last: AtomicI64,
}

impl TaskIdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Next identifier for the given wall-clock reading in milliseconds.
    pub fn next_id(&self, now_millis: i64) -> String {
        let mut issued = now_millis;
        // The closure reruns on contention; `issued` ends as the stored value.
        let _ = self
            .last
            .fetch_update(Ordering::AcqRel, Ordering::Acquire, |last| {
                issued = now_millis.max(last + 1);
                Some(issued)
            });

        format!("{}{}", TASK_ID_PREFIX, issued)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format() {
        let generator = TaskIdGenerator::new();
        assert_eq!(generator.next_id(1_700_000_000_123), "TASK1700000000123");
    }

    #[test]
    fn test_same_millisecond_is_distinct() {
        let generator = TaskIdGenerator::new();
        let first = generator.next_id(1_000);
        let second = generator.next_id(1_000);

        assert_eq!(first, "TASK1000");
        assert_eq!(second, "TASK1001");
    }

    #[test]
    fn test_clock_going_backwards() {
        let generator = TaskIdGenerator::new();
        generator.next_id(5_000);
        assert_eq!(generator.next_id(4_000), "TASK5001");
        assert_eq!(generator.next_id(9_000), "TASK9000");
    }

    #[test]
    fn test_concurrent_ids_unique() {
        use std::collections::HashSet;
        use std::sync::Arc;

        let generator = Arc::new(TaskIdGenerator::new());
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let generator = generator.clone();
                std::thread::spawn(move || {
                    (0..250).map(|_| generator.next_id(42)).collect::<Vec<_>>()
                })
            })
            .collect();

        let ids: HashSet<String> = handles
            .into_iter()
            .flat_map(|handle| handle.join().unwrap())
            .collect();
        assert_eq!(ids.len(), 1000);
    }
}
