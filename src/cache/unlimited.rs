use std::cell::Cell;

use hashbrown::HashSet;
use log::debug;

use crate::config::SuitSymmetry;
use crate::encode::Encoder;
use crate::hash::StateHasher;
use crate::rules::Rules;
use crate::signature::Signature;
use crate::state::GameState;

use super::{CacheStats, StateCache};

/// Append-only visited set. Never evicts.
#[derive(Debug)]
pub struct UnlimitedCache {
    encoder: Encoder,
    set: HashSet<Signature, StateHasher>,
    stats: CacheStats,
    probes: Cell<u64>,
}

impl UnlimitedCache {
    pub fn new(rules: &Rules, symmetry: SuitSymmetry) -> Self {
        Self::with_capacity(rules, 0, symmetry)
    }

    pub fn with_capacity(rules: &Rules, cap: usize, symmetry: SuitSymmetry) -> Self {
        let hasher = StateHasher::new(rules, symmetry);
        debug!(
            "[cache] unlimited: initial capacity={cap} reduction={:?}",
            hasher.reduction()
        );
        Self {
            encoder: Encoder::new(symmetry),
            set: HashSet::with_capacity_and_hasher(cap, hasher),
            stats: CacheStats::default(),
            probes: Cell::new(0),
        }
    }

    /// Iterate stored signatures in no particular order.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &Signature> {
        self.set.iter()
    }

    #[inline]
    pub fn contains_signature(&self, sig: &Signature) -> bool {
        self.set.contains(sig)
    }
}

impl StateCache for UnlimitedCache {
    fn insert(&mut self, gs: &GameState) -> bool {
        let fresh = self.set.insert(self.encoder.encode(gs));
        if fresh {
            self.stats.inserts = self.stats.inserts.saturating_add(1);
        } else {
            self.stats.duplicates = self.stats.duplicates.saturating_add(1);
        }
        fresh
    }

    fn contains(&self, gs: &GameState) -> bool {
        self.probes.set(self.probes.get().saturating_add(1));
        self.set.contains(&self.encoder.encode(gs))
    }

    fn clear(&mut self) {
        debug!("[cache] unlimited: clearing {} entries, stats={:?}", self.set.len(), self.stats());
        self.set.clear();
    }

    #[inline]
    fn len(&self) -> usize {
        self.set.len()
    }

    #[inline]
    fn stats(&self) -> CacheStats {
        CacheStats { probes: self.probes.get(), ..self.stats }
    }

    #[inline]
    fn reset_stats(&mut self) {
        self.stats = CacheStats::default();
        self.probes.set(0);
    }
}
