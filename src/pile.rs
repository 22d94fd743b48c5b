use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::cards::{Card, CardParseError};

/// An ordered sequence of cards. The last card is the top of the pile.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Pile {
    cards: Vec<Card>,
}

impl Pile {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    #[inline]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    #[inline]
    pub fn top_card(&self) -> Option<Card> {
        self.cards.last().copied()
    }

    #[inline]
    pub fn push(&mut self, card: Card) {
        self.cards.push(card);
    }

    #[inline]
    pub fn pop(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl FromIterator<Card> for Pile {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        Self { cards: iter.into_iter().collect() }
    }
}

/// Whitespace-separated cards, bottom first: "6C 7D". An empty string is an empty pile.
impl FromStr for Pile {
    type Err = CardParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.split_whitespace().map(str::parse::<Card>).collect()
    }
}
