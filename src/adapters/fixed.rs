//! Deterministic adapter for the `IdGenerator` port.

use std::sync::atomic::{AtomicUsize, Ordering};

use uuid::Uuid;

use crate::ports::IdGenerator;

/// Hands out a predetermined sequence of ids, wrapping around at the end.
#[derive(Debug)]
pub struct FixedIdGenerator {
    ids: Vec<Uuid>,
    next: AtomicUsize,
}

impl FixedIdGenerator {
    /// Creates a generator that yields `ids` in order.
    ///
    /// # Panics
    ///
    /// Panics if `ids` is empty.
    #[must_use]
    pub fn new(ids: Vec<Uuid>) -> Self {
        assert!(!ids.is_empty(), "FixedIdGenerator needs at least one id");
        Self { ids, next: AtomicUsize::new(0) }
    }

    /// Creates a generator that always yields `id`.
    #[must_use]
    pub fn single(id: Uuid) -> Self {
        Self::new(vec![id])
    }
}

impl IdGenerator for FixedIdGenerator {
    fn generate_id(&self) -> Uuid {
        let idx = self.next.fetch_add(1, Ordering::Relaxed);
        self.ids[idx % self.ids.len()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const A: Uuid = Uuid::from_u128(0x0f1e_2d3c_4b5a_4978_8796_a5b4_c3d2_e1f0);
    const B: Uuid = Uuid::from_u128(0x1111_2222_3333_4444_9555_6666_7777_8888);

    #[test]
    fn yields_ids_in_order_and_wraps() {
        let gen = FixedIdGenerator::new(vec![A, B]);

        assert_eq!(gen.generate_id(), A);
        assert_eq!(gen.generate_id(), B);
        assert_eq!(gen.generate_id(), A);
    }

    #[test]
    fn single_repeats() {
        let gen = FixedIdGenerator::single(B);

        assert_eq!(gen.generate_id(), B);
        assert_eq!(gen.generate_id(), B);
    }

    #[test]
    #[should_panic(expected = "at least one id")]
    fn rejects_empty_sequence() {
        let _ = FixedIdGenerator::new(Vec::new());
    }
}
