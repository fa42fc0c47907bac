//! Single-slot memo cell for derived values.

use std::cell::RefCell;
use std::sync::Arc;

use tracing::{debug, trace};

/// Caches one derived value together with the input versions it was
/// computed from.
///
/// A read with the same versions returns the cached `Arc`; any other
/// versions recompute and replace it.
pub(crate) struct Memo<K, T> {
    name: &'static str,
    slot: RefCell<Option<(K, Arc<T>)>>,
}

impl<K: Copy + PartialEq, T> Memo<K, T> {
    pub(crate) fn new(name: &'static str) -> Self {
        Self {
            name,
            slot: RefCell::new(None),
        }
    }

    /// Return the cached value for `stamp`, computing it if stale.
    ///
    /// `compute` may read other memos, but not this one.
    pub(crate) fn get(&self, stamp: K, compute: impl FnOnce() -> T) -> Arc<T> {
        if let Some((cached, value)) = self.slot.borrow().as_ref() {
            if *cached == stamp {
                trace!(node = self.name, "derived value cache hit");
                return Arc::clone(value);
            }
        }

        debug!(node = self.name, "recomputing derived value");
        let value = Arc::new(compute());
        *self.slot.borrow_mut() = Some((stamp, Arc::clone(&value)));
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn same_stamp_hits_cache() {
        let memo: Memo<u64, String> = Memo::new("test");
        let calls = Cell::new(0);
        let compute = || {
            calls.set(calls.get() + 1);
            "value".to_string()
        };

        let first = memo.get(1, compute);
        let second = memo.get(1, || unreachable!("cached"));

        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn new_stamp_recomputes() {
        let memo: Memo<(u64, u64), usize> = Memo::new("test");

        let first = memo.get((1, 1), || 10);
        let second = memo.get((1, 2), || 20);
        let third = memo.get((1, 2), || 30);

        assert_eq!(*first, 10);
        assert_eq!(*second, 20);
        assert!(Arc::ptr_eq(&second, &third));
    }

    #[test]
    fn returning_to_old_stamp_recomputes() {
        let memo: Memo<u64, usize> = Memo::new("test");
        memo.get(1, || 1);
        memo.get(2, || 2);
        assert_eq!(*memo.get(1, || 100), 100);
    }
}
