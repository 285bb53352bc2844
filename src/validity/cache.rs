//! Concurrent verdict cache
//!
//! Remembers which words are known to exist and which are known not to. Each word
//! maps to exactly one verdict, so a word can never be both verified and rejected.

use rustc_hash::FxHashMap;
use std::collections::VecDeque;
use std::sync::{PoisonError, RwLock};

/// Cached validity of a word
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verdict {
    /// Known to be a real word
    Verified,
    /// Known not to be a word
    Rejected,
}

impl Verdict {
    #[inline]
    #[must_use]
    pub const fn is_valid(self) -> bool {
        matches!(self, Self::Verified)
    }
}

/// Storage for validity verdicts shared by all request handlers
pub trait VerdictCache: Send + Sync {
    fn get(&self, word: &str) -> Option<Verdict>;

    /// Record a verdict, replacing any previous one for the same word
    fn insert(&self, word: &str, verdict: Verdict);

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

struct Entries {
    verdicts: FxHashMap<String, Verdict>,
    /// Insertion order, oldest first
    order: VecDeque<String>,
}

/// Capacity-bounded cache that evicts its oldest entries first
///
/// Reads take a shared lock; inserts take the exclusive lock only for the map update.
pub struct BoundedCache {
    capacity: usize,
    entries: RwLock<Entries>,
}

impl BoundedCache {
    /// Create a cache holding at most `capacity` words (at least one)
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity: capacity.max(1),
            entries: RwLock::new(Entries {
                verdicts: FxHashMap::default(),
                order: VecDeque::new(),
            }),
        }
    }

    #[inline]
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }
}

impl VerdictCache for BoundedCache {
    fn get(&self, word: &str) -> Option<Verdict> {
        // A poisoned lock still holds consistent data: every write is a single map update
        let entries = self.entries.read().unwrap_or_else(PoisonError::into_inner);
        entries.verdicts.get(word).copied()
    }

    fn insert(&self, word: &str, verdict: Verdict) {
        let mut entries = self.entries.write().unwrap_or_else(PoisonError::into_inner);

        if let Some(existing) = entries.verdicts.get_mut(word) {
            *existing = verdict;
            return;
        }

        while entries.verdicts.len() >= self.capacity {
            let Some(oldest) = entries.order.pop_front() else {
                break;
            };
            entries.verdicts.remove(&oldest);
        }

        entries.verdicts.insert(word.to_string(), verdict);
        entries.order.push_back(word.to_string());
    }

    fn len(&self) -> usize {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .verdicts
            .len()
    }
}
