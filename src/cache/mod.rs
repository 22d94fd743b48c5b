use log::debug;

use crate::config::{CacheConfig, CacheKind};
use crate::rules::Rules;
use crate::state::GameState;

pub mod lru;
pub mod unlimited;

pub use lru::LruCache;
pub use unlimited::UnlimitedCache;

/// Counters kept by every cache. `clear()` leaves them intact.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    pub inserts: u64,    // new signatures stored
    pub duplicates: u64, // insert of an already stored signature
    pub evictions: u64,
    pub probes: u64, // contains() calls
}

/// Visited-state set over canonical position signatures.
///
/// Not synchronised: callers sharing a cache across threads must wrap every call
/// in one lock.
pub trait StateCache {
    /// Stores the position's signature. Returns true iff it was not already present.
    fn insert(&mut self, gs: &GameState) -> bool;
    /// Membership check; never changes what is stored or in what order.
    fn contains(&self, gs: &GameState) -> bool;
    fn clear(&mut self);
    fn len(&self) -> usize;
    fn stats(&self) -> CacheStats;
    fn reset_stats(&mut self);

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Builds the cache a config asks for. `rules` are the rules of the search's
/// initial position and fix the hasher's suit reduction.
pub fn build_cache(rules: &Rules, config: &CacheConfig) -> Box<dyn StateCache> {
    match config.kind {
        CacheKind::Unlimited => Box::new(UnlimitedCache::new(rules, config.suit_symmetry)),
        CacheKind::Lru { max_items } => {
            Box::new(LruCache::new(rules, max_items, config.suit_symmetry))
        }
        CacheKind::LruBudget { mib } => {
            debug!("[cache] sizing LRU from a {mib} MiB budget");
            Box::new(LruCache::with_budget_mib(rules, mib, config.suit_symmetry))
        }
    }
}
