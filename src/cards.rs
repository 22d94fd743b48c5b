use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::{Colour, Suit};

/// Highest rank that fits the 4-bit packed representation.
pub const MAX_RANK: u8 = 15;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CardParseError {
    #[error("empty card string")]
    Empty,
    #[error("unknown rank '{0}'")]
    Rank(String),
    #[error("unknown suit '{0}'")]
    Suit(char),
}

/// An immutable playing card. Rank 0 never occurs on a real card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Card {
    suit: Suit,
    rank: u8,
}

impl Card {
    #[inline]
    pub fn new(suit: Suit, rank: u8) -> Self {
        debug_assert!((1..=MAX_RANK).contains(&rank), "rank out of range: {rank}");
        Self { suit, rank: rank & 0x0F }
    }

    #[inline]
    pub fn suit(self) -> Suit {
        self.suit
    }

    #[inline]
    pub fn rank(self) -> u8 {
        self.rank
    }

    #[inline]
    pub fn colour(self) -> Colour {
        self.suit.colour()
    }
}

fn rank_from_str(s: &str) -> Result<u8, CardParseError> {
    let rank = match s {
        "A" => 1,
        "J" => 11,
        "Q" => 12,
        "K" => 13,
        _ => s.parse::<u8>().map_err(|_| CardParseError::Rank(s.to_string()))?,
    };
    if (1..=MAX_RANK).contains(&rank) {
        Ok(rank)
    } else {
        Err(CardParseError::Rank(s.to_string()))
    }
}

fn suit_from_char(c: char) -> Result<Suit, CardParseError> {
    match c.to_ascii_uppercase() {
        'C' => Ok(Suit::Clubs),
        'D' => Ok(Suit::Diamonds),
        'H' => Ok(Suit::Hearts),
        'S' => Ok(Suit::Spades),
        other => Err(CardParseError::Suit(other)),
    }
}

/// Parses "AC", "7D", "10H", "KS". The last character is the suit.
impl FromStr for Card {
    type Err = CardParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let suit_char = s.chars().last().ok_or(CardParseError::Empty)?;
        let rank_part = &s[..s.len() - suit_char.len_utf8()];
        if rank_part.is_empty() {
            return Err(CardParseError::Rank(String::new()));
        }
        let rank = rank_from_str(&rank_part.to_ascii_uppercase())?;
        let suit = suit_from_char(suit_char)?;
        Ok(Card::new(suit, rank))
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.rank {
            1 => write!(f, "A")?,
            11 => write!(f, "J")?,
            12 => write!(f, "Q")?,
            13 => write!(f, "K")?,
            r => write!(f, "{r}")?,
        }
        write!(f, "{}", self.suit.letter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_face_and_numeric_ranks() {
        let ac: Card = "AC".parse().unwrap();
        assert_eq!(ac.suit(), Suit::Clubs);
        assert_eq!(ac.rank(), 1);

        let td: Card = "10D".parse().unwrap();
        assert_eq!(td.rank(), 10);
        assert_eq!(td.colour(), Colour::Red);

        let ks: Card = "ks".parse().unwrap();
        assert_eq!(ks, Card::new(Suit::Spades, 13));
    }

    #[test]
    fn rejects_malformed_cards() {
        assert_eq!("".parse::<Card>(), Err(CardParseError::Empty));
        assert_eq!("C".parse::<Card>(), Err(CardParseError::Rank(String::new())));
        assert_eq!("0H".parse::<Card>(), Err(CardParseError::Rank("0".into())));
        assert_eq!("ZH".parse::<Card>(), Err(CardParseError::Rank("Z".into())));
        assert_eq!("AX".parse::<Card>(), Err(CardParseError::Suit('X')));
    }

    #[test]
    fn display_matches_parse() {
        for text in ["AC", "2D", "10H", "QS"] {
            let c: Card = text.parse().unwrap();
            assert_eq!(c.to_string(), text);
        }
    }
}
