//! Fallback identifier generation for form fields.

use std::sync::atomic::{AtomicU64, Ordering};

static FIELD_IDS: FieldIdGenerator = FieldIdGenerator::new();

/// Monotonic id source backing generated field identifiers.
///
/// Ids are unique for the life of the process, so an unbounded number of
/// fields on one page can never collide. The process-wide instance serves
/// production renders; tests that need reproducible sequences hold their
/// own instance, which always counts from 1.
#[derive(Debug)]
pub struct FieldIdGenerator {
    counter: AtomicU64,
}

impl FieldIdGenerator {
    /// Creates a generator whose first issued suffix is 1.
    pub const fn new() -> Self {
        Self {
            counter: AtomicU64::new(1),
        }
    }

    /// Issues the next `{prefix}-N` identifier.
    pub fn next_id(&self, prefix: &str) -> String {
        let suffix = self.counter.fetch_add(1, Ordering::Relaxed);
        format!("{prefix}-{suffix}")
    }
}

impl Default for FieldIdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

/// Next process-wide field id, used when a caller supplies none.
pub(crate) fn next_field_id() -> String {
    FIELD_IDS.next_id("field")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn fresh_generator_counts_from_one() {
        let generator = FieldIdGenerator::new();
        assert_eq!(generator.next_id("field"), "field-1");
        assert_eq!(generator.next_id("field"), "field-2");
        assert_eq!(generator.next_id("input"), "input-3");
    }

    #[test]
    fn page_scale_batches_never_collide() {
        let generator = FieldIdGenerator::new();
        let ids: HashSet<String> = (0..10_000).map(|_| generator.next_id("field")).collect();
        assert_eq!(ids.len(), 10_000);
    }

    #[test]
    fn process_wide_ids_stay_distinct() {
        let first = next_field_id();
        let second = next_field_id();
        assert_ne!(first, second);
    }
}
