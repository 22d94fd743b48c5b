use std::hash::{BuildHasher, Hasher};

use crate::cards::Card;
use crate::config::SuitSymmetry;
use crate::rules::Rules;
use crate::signature::{Signature, SuitReduction, Symbol};

/// Golden-ratio constant used by the combine step.
const COMBINE_C: u64 = 0x9e37_79b9;

/// SplitMix64 finaliser: the per-symbol integer hash.
#[inline]
fn splitmix64(mut x: u64) -> u64 {
    x = x.wrapping_add(0x9E37_79B9_7F4A_7C15);
    let mut z = x;
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

/// Order-sensitive fold: `seed ^= h + C + (seed << 6) + (seed >> 2)`.
#[inline]
pub fn combine(seed: u64, h: u64) -> u64 {
    seed ^ h
        .wrapping_add(COMBINE_C)
        .wrapping_add(seed << 6)
        .wrapping_add(seed >> 2)
}

/// Hashes signatures consistently with signature equality.
///
/// Built once from the cache's initial rules. Each symbol is re-reduced with the
/// same suit reduction the encoder used (a no-op on encoder output), hashed on its
/// own, then folded in signature order. Order independence across interchangeable
/// piles comes only from the encoder's sorting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StateHasher {
    reduction: SuitReduction,
}

impl StateHasher {
    #[inline]
    pub fn new(rules: &Rules, symmetry: SuitSymmetry) -> Self {
        Self { reduction: SuitReduction::for_rules(rules, symmetry) }
    }

    #[inline]
    pub fn reduction(&self) -> SuitReduction {
        self.reduction
    }

    #[inline]
    fn hash_symbol(&self, symbol: Symbol) -> u64 {
        splitmix64(u64::from(self.reduction.reduce(symbol).raw()))
    }

    /// Reduced hash of a single card, without building a signature.
    #[inline]
    pub fn hash_card(&self, card: Card) -> u64 {
        splitmix64(u64::from(self.reduction.symbol(card).raw()))
    }

    pub fn hash_signature(&self, sig: &Signature) -> u64 {
        sig.symbols()
            .iter()
            .fold(0, |acc, &s| combine(acc, self.hash_symbol(s)))
    }
}

/// Streaming form of `StateHasher`, fed one byte per symbol by `Signature`'s `Hash` impl.
#[derive(Debug, Clone)]
pub struct SignatureHasher {
    owner: StateHasher,
    seed: u64,
}

impl Hasher for SignatureHasher {
    #[inline]
    fn finish(&self) -> u64 {
        self.seed
    }

    #[inline]
    fn write(&mut self, bytes: &[u8]) {
        for &b in bytes {
            self.write_u8(b);
        }
    }

    #[inline]
    fn write_u8(&mut self, b: u8) {
        let h = self.owner.hash_symbol(Symbol::from_raw(b));
        self.seed = combine(self.seed, h);
    }
}

impl BuildHasher for StateHasher {
    type Hasher = SignatureHasher;

    #[inline]
    fn build_hasher(&self) -> SignatureHasher {
        SignatureHasher { owner: *self, seed: 0 }
    }
}
