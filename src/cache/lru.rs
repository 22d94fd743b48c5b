use std::cell::Cell;
use std::mem::size_of;

use hashbrown::HashTable;
use log::{debug, trace};

use crate::config::SuitSymmetry;
use crate::encode::Encoder;
use crate::hash::StateHasher;
use crate::rules::Rules;
use crate::signature::{Signature, Symbol, SIGNATURE_RESERVE};
use crate::state::GameState;

use super::{CacheStats, StateCache};

pub type EntryId = u32;

const NIL: EntryId = EntryId::MAX;

/// Arena slot. `prev`/`next` link the recency list, most recent first.
#[derive(Debug, Clone)]
struct Node {
    sig: Signature,
    hash: u64,
    prev: EntryId,
    next: EntryId,
}

/// Capacity-bounded visited set with least-recently-used eviction.
///
/// Entries live in one arena. Two views index it: an intrusive doubly linked
/// recency list threaded through the nodes, and a hash table of entry ids keyed by
/// signature hash. Only `link_new`, `touch` and `evict_tail` mutate either view, and
/// each updates both before returning.
#[derive(Debug)]
pub struct LruCache {
    encoder: Encoder,
    hasher: StateHasher,
    max_num_items: usize,
    nodes: Vec<Node>,
    free: Vec<EntryId>,
    index: HashTable<EntryId>,
    head: EntryId,
    tail: EntryId,
    stats: CacheStats,
    probes: Cell<u64>,
}

impl LruCache {
    pub fn new(rules: &Rules, max_num_items: usize, symmetry: SuitSymmetry) -> Self {
        let hasher = StateHasher::new(rules, symmetry);
        debug!(
            "[cache] lru: capacity={max_num_items} reduction={:?}",
            hasher.reduction()
        );
        Self {
            encoder: Encoder::new(symmetry),
            hasher,
            max_num_items,
            nodes: Vec::new(),
            free: Vec::new(),
            index: HashTable::new(),
            head: NIL,
            tail: NIL,
            stats: CacheStats::default(),
            probes: Cell::new(0),
        }
    }

    /// Approximate bytes per resident entry: arena node, index slot plus control
    /// byte, and a signature buffer sized for a full deal.
    #[inline]
    pub fn bytes_per_entry() -> usize {
        size_of::<Node>() + size_of::<EntryId>() + 1 + SIGNATURE_RESERVE * size_of::<Symbol>()
    }

    /// Largest entry count whose approximate footprint fits `budget_bytes`.
    /// A non-zero budget yields at least 1.
    #[inline]
    pub fn capacity_for_budget_bytes(budget_bytes: usize) -> usize {
        if budget_bytes == 0 {
            return 0;
        }
        (budget_bytes / Self::bytes_per_entry()).max(1)
    }

    #[inline]
    pub fn approx_bytes_for_capacity(capacity: usize) -> usize {
        capacity.saturating_mul(Self::bytes_per_entry())
    }

    pub fn with_budget_mib(rules: &Rules, mib: usize, symmetry: SuitSymmetry) -> Self {
        let budget = mib.saturating_mul(1024 * 1024);
        Self::new(rules, Self::capacity_for_budget_bytes(budget), symmetry)
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.max_num_items
    }

    /// Stored signatures, most recently touched first.
    pub fn iter(&self) -> impl Iterator<Item = &Signature> + '_ {
        let nodes = &self.nodes;
        let first = (self.head != NIL).then_some(self.head);
        std::iter::successors(first, move |&id| {
            let next = nodes[id as usize].next;
            (next != NIL).then_some(next)
        })
        .map(move |id| &nodes[id as usize].sig)
    }

    #[inline]
    pub fn contains_signature(&self, sig: &Signature) -> bool {
        self.find(self.hasher.hash_signature(sig), sig).is_some()
    }

    #[inline]
    fn find(&self, hash: u64, sig: &Signature) -> Option<EntryId> {
        let nodes = &self.nodes;
        self.index
            .find(hash, |&id| nodes[id as usize].sig == *sig)
            .copied()
    }

    fn alloc(&mut self, node: Node) -> EntryId {
        match self.free.pop() {
            Some(id) => {
                self.nodes[id as usize] = node;
                id
            }
            None => {
                debug_assert!(self.nodes.len() < NIL as usize);
                self.nodes.push(node);
                (self.nodes.len() - 1) as EntryId
            }
        }
    }

    fn unlink(&mut self, id: EntryId) {
        let (prev, next) = {
            let n = &self.nodes[id as usize];
            (n.prev, n.next)
        };
        if prev == NIL {
            self.head = next;
        } else {
            self.nodes[prev as usize].next = next;
        }
        if next == NIL {
            self.tail = prev;
        } else {
            self.nodes[next as usize].prev = prev;
        }
        let n = &mut self.nodes[id as usize];
        n.prev = NIL;
        n.next = NIL;
    }

    fn push_front(&mut self, id: EntryId) {
        let old_head = self.head;
        {
            let n = &mut self.nodes[id as usize];
            n.prev = NIL;
            n.next = old_head;
        }
        if old_head == NIL {
            self.tail = id;
        } else {
            self.nodes[old_head as usize].prev = id;
        }
        self.head = id;
    }

    /// Moves an existing entry to the front of the recency list.
    fn touch(&mut self, id: EntryId) {
        if self.head != id {
            self.unlink(id);
            self.push_front(id);
        }
    }

    /// Adds a new entry to the arena, the front of the list, and the index.
    fn link_new(&mut self, sig: Signature, hash: u64) {
        let id = self.alloc(Node { sig, hash, prev: NIL, next: NIL });
        self.push_front(id);
        let nodes = &self.nodes;
        self.index.insert_unique(hash, id, |&i| nodes[i as usize].hash);
    }

    /// Drops the least recently used entry from the list, the index and the arena.
    fn evict_tail(&mut self) {
        let id = self.tail;
        if id == NIL {
            return;
        }
        self.unlink(id);
        let hash = self.nodes[id as usize].hash;
        if let Ok(entry) = self.index.find_entry(hash, |&i| i == id) {
            entry.remove();
        }
        let evicted = std::mem::take(&mut self.nodes[id as usize].sig);
        self.free.push(id);
        self.stats.evictions = self.stats.evictions.saturating_add(1);
        trace!("[cache] lru: evicted {evicted}");
    }
}

impl StateCache for LruCache {
    fn insert(&mut self, gs: &GameState) -> bool {
        let sig = self.encoder.encode(gs);
        let hash = self.hasher.hash_signature(&sig);

        if let Some(id) = self.find(hash, &sig) {
            self.touch(id);
            self.stats.duplicates = self.stats.duplicates.saturating_add(1);
            return false;
        }

        self.link_new(sig, hash);
        self.stats.inserts = self.stats.inserts.saturating_add(1);
        if self.index.len() > self.max_num_items {
            self.evict_tail();
        }
        true
    }

    fn contains(&self, gs: &GameState) -> bool {
        self.probes.set(self.probes.get().saturating_add(1));
        self.contains_signature(&self.encoder.encode(gs))
    }

    fn clear(&mut self) {
        debug!("[cache] lru: clearing {} entries, stats={:?}", self.index.len(), self.stats());
        self.index.clear();
        self.nodes.clear();
        self.free.clear();
        self.head = NIL;
        self.tail = NIL;
    }

    #[inline]
    fn len(&self) -> usize {
        self.index.len()
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
