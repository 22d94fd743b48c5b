use std::fmt;
use std::hash::{Hash, Hasher};

use crate::cards::Card;
use crate::config::SuitSymmetry;
use crate::rules::{BuildPolicy, Rules};
use crate::types::Suit;

/// Room for a full deck plus one divider per pile of the largest layouts.
pub const SIGNATURE_RESERVE: usize = 52 + 18;

/// How much of a card's suit survives into the signature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SuitReduction {
    /// Suit kept as-is.
    Exact,
    /// Suit replaced by its colour.
    Colour,
    /// Suit dropped; only rank remains.
    Erased,
}

impl SuitReduction {
    pub fn for_rules(rules: &Rules, symmetry: SuitSymmetry) -> Self {
        if !symmetry.is_symmetric(rules) {
            return SuitReduction::Exact;
        }
        match rules.build_policy {
            BuildPolicy::SameSuit => SuitReduction::Exact,
            BuildPolicy::RedBlack => SuitReduction::Colour,
            BuildPolicy::AnySuit | BuildPolicy::NoBuild => SuitReduction::Erased,
        }
    }

    /// Reduced suit value for a card's suit.
    #[inline]
    pub fn suit_value(self, suit: Suit) -> u8 {
        match self {
            SuitReduction::Exact => suit.index(),
            SuitReduction::Colour => suit.colour().index(),
            SuitReduction::Erased => 0,
        }
    }

    #[inline]
    pub fn symbol(self, card: Card) -> Symbol {
        Symbol::pack(self.suit_value(card.suit()), card.rank())
    }

    /// Re-applies the reduction to an already packed symbol. Idempotent: the colour
    /// values (Black = 0, Red = 1) are the suit values of Clubs and Diamonds, whose
    /// colours are Black and Red again. The divider maps to itself.
    #[inline]
    pub fn reduce(self, symbol: Symbol) -> Symbol {
        Symbol::pack(self.suit_value(Suit::from_index(symbol.suit_bits())), symbol.rank())
    }
}

/// One signature entry: a (possibly suit-reduced) card packed as `suit << 4 | rank`,
/// or the divider, which is suit 0 rank 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Symbol(u8);

impl Symbol {
    pub const DIVIDER: Symbol = Symbol(0);

    #[inline]
    pub const fn pack(suit: u8, rank: u8) -> Self {
        Symbol(((suit & 0b11) << 4) | (rank & 0x0F))
    }

    #[inline]
    pub const fn from_raw(raw: u8) -> Self {
        Symbol(raw)
    }

    #[inline]
    pub fn raw(self) -> u8 {
        self.0
    }

    #[inline]
    pub fn suit_bits(self) -> u8 {
        self.0 >> 4
    }

    #[inline]
    pub fn rank(self) -> u8 {
        self.0 & 0x0F
    }

    #[inline]
    pub fn is_divider(self) -> bool {
        self == Self::DIVIDER
    }
}

/// Canonical, symmetry-reduced flat form of a position. Two positions are
/// equivalent iff their signatures are equal as sequences.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Signature {
    data: Vec<Symbol>,
}

impl Signature {
    #[inline]
    pub(crate) fn with_reserve() -> Self {
        Self { data: Vec::with_capacity(SIGNATURE_RESERVE) }
    }

    #[inline]
    pub(crate) fn push(&mut self, symbol: Symbol) {
        self.data.push(symbol);
    }

    #[inline]
    pub(crate) fn extend_from_slice(&mut self, symbols: &[Symbol]) {
        self.data.extend_from_slice(symbols);
    }

    #[inline]
    pub(crate) fn push_divider(&mut self) {
        self.data.push(Symbol::DIVIDER);
    }

    #[inline]
    pub fn symbols(&self) -> &[Symbol] {
        &self.data
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    #[inline]
    pub fn divider_count(&self) -> usize {
        self.data.iter().filter(|s| s.is_divider()).count()
    }
}

/// Feeds one byte per symbol and no length prefix, so a table built with
/// `StateHasher` sees exactly the symbol stream.
impl Hash for Signature {
    fn hash<H: Hasher>(&self, state: &mut H) {
        for s in &self.data {
            state.write_u8(s.raw());
        }
    }
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for s in &self.data {
            if s.is_divider() {
                f.write_str("|")?;
                first = true;
                continue;
            }
            if !first {
                f.write_str(" ")?;
            }
            first = false;
            let suit = Suit::from_index(s.suit_bits()).letter();
            match s.rank() {
                1 => write!(f, "A{suit}")?,
                11 => write!(f, "J{suit}")?,
                12 => write!(f, "Q{suit}")?,
                13 => write!(f, "K{suit}")?,
                r => write!(f, "{r}{suit}")?,
            }
        }
        Ok(())
    }
}
