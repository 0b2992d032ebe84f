use super::eviction::{EvictionPolicy, RetentionPolicy};
use dashmap::DashMap;
use std::convert::Infallible;
use std::hash::Hash;
use std::sync::{Arc, Mutex, PoisonError};

/// One cache slot: empty until its first computation succeeds.
type Slot<V> = Mutex<Option<Arc<V>>>;

/// ResolutionCache - memoizes `key -> value` computations.
///
/// At most one computation runs per key at a time. Concurrent callers for
/// the same key block on the key's slot and then read the stored value
/// instead of computing it again. Failed computations are not stored, so a
/// later lookup retries.
///
/// A computation must not look up its own key in the same cache (the slot
/// lock is not reentrant). Nested lookups of other keys are fine.
pub struct ResolutionCache<K, V> {
    slots: DashMap<K, Arc<Slot<V>>>,
    policy: Box<dyn EvictionPolicy<K>>,
}

impl<K, V> ResolutionCache<K, V>
where
    K: Eq + Hash + Clone + Send + Sync + 'static,
    V: Send + Sync,
{
    /// Creates a cache that keeps every value
    pub fn new() -> Self {
        Self::with_retention(RetentionPolicy::Unbounded)
    }

    pub fn with_retention(retention: RetentionPolicy) -> Self {
        Self::with_policy(retention.build())
    }

    pub fn with_policy(policy: Box<dyn EvictionPolicy<K>>) -> Self {
        Self {
            slots: DashMap::new(),
            policy,
        }
    }

    /// Returns the value for `key`, computing it if absent.
    ///
    /// # Errors
    /// Returns the computation's error; nothing is cached in that case.
    pub fn get_or_try_compute<E, F>(&self, key: &K, compute: F) -> Result<Arc<V>, E>
    where
        F: FnOnce(&K) -> Result<V, E>,
    {
        let slot = self.slot_for(key);
        let mut stored = slot.lock().unwrap_or_else(PoisonError::into_inner);

        if let Some(value) = stored.as_ref() {
            let value = Arc::clone(value);
            drop(stored);
            self.policy.record_access(key);
            return Ok(value);
        }

        match compute(key) {
            Ok(value) => {
                let value = Arc::new(value);
                *stored = Some(Arc::clone(&value));
                drop(stored);
                for evicted in self.policy.record_insert(key) {
                    self.discard(&evicted);
                }
                Ok(value)
            }
            Err(error) => {
                drop(stored);
                // Waiters already queued on this slot retry inside it
                self.detach_if_unshared(key, &slot);
                Err(error)
            }
        }
    }

    /// Infallible variant of [`Self::get_or_try_compute`]
    pub fn get_or_compute<F>(&self, key: &K, compute: F) -> Arc<V>
    where
        F: FnOnce(&K) -> V,
    {
        match self.get_or_try_compute::<Infallible, _>(key, |k| Ok(compute(k))) {
            Ok(value) => value,
            Err(never) => match never {},
        }
    }

    /// Drops the value for `key`; the next lookup recomputes it.
    ///
    /// Waits for a computation of `key` that is in flight, so it must not be
    /// called from inside that computation.
    pub fn evict(&self, key: &K) {
        self.discard(key);
        self.policy.record_removal(key);
    }

    /// Evicts every key, with the same waiting rule as [`Self::evict`].
    pub fn clear(&self) {
        let keys: Vec<K> = self.slots.iter().map(|entry| entry.key().clone()).collect();
        for key in keys {
            self.discard(&key);
        }
        self.policy.clear();
    }

    /// Number of retained keys, including computations still in flight
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    fn slot_for(&self, key: &K) -> Arc<Slot<V>> {
        // The map guard is released before the slot is locked
        Arc::clone(self.slots.entry(key.clone()).or_default().value())
    }

    /// Empties the slot for `key` in place, then detaches it once no other
    /// caller holds it. A slot stays mapped while anyone waits on it, so
    /// every caller for the key keeps sharing one lock.
    fn discard(&self, key: &K) {
        let slot = match self.slots.get(key) {
            Some(entry) => Arc::clone(entry.value()),
            None => return,
        };
        *slot.lock().unwrap_or_else(PoisonError::into_inner) = None;
        self.detach_if_unshared(key, &slot);
    }

    fn detach_if_unshared(&self, key: &K, slot: &Arc<Slot<V>>) {
        // Runs under the map entry lock, so no new caller can clone the
        // slot between the count check and the removal. The map and `slot`
        // account for two references.
        self.slots.remove_if(key, |_, current| {
            Arc::ptr_eq(current, slot) && Arc::strong_count(current) == 2
        });
    }
}

impl<K, V> Default for ResolutionCache<K, V>
where
    K: Eq + Hash + Clone + Send + Sync + 'static,
    V: Send + Sync,
{
    fn default() -> Self {
        Self::new()
    }
}
