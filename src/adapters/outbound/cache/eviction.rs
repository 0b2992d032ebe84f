use std::collections::VecDeque;
use std::sync::{Mutex, PoisonError};

/// EvictionPolicy decides which cached keys may be dropped.
///
/// Dropped values are recomputed on the next lookup, so a policy only trades
/// memory for recomputation and never loses data.
pub trait EvictionPolicy<K>: Send + Sync {
    /// Records a freshly computed key; returns the keys to evict now.
    fn record_insert(&self, key: &K) -> Vec<K>;

    /// Records a cache hit on `key`.
    fn record_access(&self, key: &K);

    /// Forgets `key` after it was removed from the cache.
    fn record_removal(&self, key: &K);

    /// Forgets every key.
    fn clear(&self);
}

/// Retention settings chosen by configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RetentionPolicy {
    /// Keep every value for the lifetime of the process
    #[default]
    Unbounded,
    /// Keep at most `capacity` values, dropping the least recently used
    LeastRecentlyUsed { capacity: usize },
}

impl RetentionPolicy {
    /// `None` keeps everything; `Some(n)` bounds the cache to `n` entries.
    pub fn from_max_entries(max_entries: Option<usize>) -> Self {
        match max_entries {
            Some(capacity) => Self::LeastRecentlyUsed { capacity },
            None => Self::Unbounded,
        }
    }

    pub(crate) fn build<K>(self) -> Box<dyn EvictionPolicy<K>>
    where
        K: PartialEq + Clone + Send + 'static,
    {
        match self {
            Self::Unbounded => Box::new(Unbounded),
            Self::LeastRecentlyUsed { capacity } => Box::new(LeastRecentlyUsed::new(capacity)),
        }
    }
}

/// Never evicts.
#[derive(Debug, Default)]
pub struct Unbounded;

impl<K> EvictionPolicy<K> for Unbounded {
    fn record_insert(&self, _key: &K) -> Vec<K> {
        Vec::new()
    }

    fn record_access(&self, _key: &K) {}

    fn record_removal(&self, _key: &K) {}

    fn clear(&self) {}
}

/// Size-bounded policy evicting the least recently used key first.
#[derive(Debug)]
pub struct LeastRecentlyUsed<K> {
    capacity: usize,
    // front = least recently used
    order: Mutex<VecDeque<K>>,
}

impl<K: PartialEq> LeastRecentlyUsed<K> {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity: capacity.max(1),
            order: Mutex::new(VecDeque::new()),
        }
    }

    fn touch(order: &mut VecDeque<K>, key: &K) -> Option<K> {
        let position = order.iter().position(|k| k == key)?;
        order.remove(position)
    }
}

impl<K> EvictionPolicy<K> for LeastRecentlyUsed<K>
where
    K: PartialEq + Clone + Send,
{
    fn record_insert(&self, key: &K) -> Vec<K> {
        let mut order = self.order.lock().unwrap_or_else(PoisonError::into_inner);
        Self::touch(&mut order, key);
        order.push_back(key.clone());

        let overflow = order.len().saturating_sub(self.capacity);
        order.drain(..overflow).collect()
    }

    fn record_access(&self, key: &K) {
        let mut order = self.order.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(existing) = Self::touch(&mut order, key) {
            order.push_back(existing);
        }
    }

    fn record_removal(&self, key: &K) {
        let mut order = self.order.lock().unwrap_or_else(PoisonError::into_inner);
        Self::touch(&mut order, key);
    }

    fn clear(&self) {
        self.order
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}
