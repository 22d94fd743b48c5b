use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg64;

use crate::cards::Card;
use crate::rules::Rules;
use crate::state::GameState;
use crate::types::Suit;

/// Deterministic RNG factory for a given (seed, deal_id) pair.
///
/// Derives a per-deal 64-bit seed as `seed ^ deal_id.rotate_left(32)` and feeds it to
/// PCG 64 (rand_pcg::Pcg64), so equal inputs give equal sequences across runs.
#[inline]
pub fn rng_for_deal(seed: u64, deal_id: u64) -> Pcg64 {
    Pcg64::seed_from_u64(seed ^ deal_id.rotate_left(32))
}

/// Every card of ranks `1..=max_rank` in all four suits, clubs first.
pub fn deck(max_rank: u8) -> Vec<Card> {
    Suit::all()
        .into_iter()
        .flat_map(|s| (1..=max_rank).map(move |r| Card::new(s, r)))
        .collect()
}

/// Shuffles a deck and lays it out over the roles the rules declare.
///
/// The hole takes one card, cells start empty, the stock takes up to
/// `stock_size` cards, and the rest go round-robin over reserve then tableau piles.
pub fn deal<R: Rng + ?Sized>(rules: Rules, rng: &mut R) -> GameState {
    let mut cards = deck(rules.max_rank);
    cards.shuffle(rng);

    let mut gs = GameState::new_empty(rules);
    let mut it = cards.into_iter();

    if rules.hole {
        if let Some(c) = it.next() {
            gs.hole.push(c);
        }
    }
    if rules.stock_size > 0 {
        gs.stock = it.by_ref().take(usize::from(rules.stock_size)).collect();
    }

    let targets = gs.reserve.len() + gs.tableau.len();
    if targets > 0 {
        for (i, c) in it.enumerate() {
            let slot = i % targets;
            if slot < gs.reserve.len() {
                gs.reserve[slot].push(c);
            } else {
                gs.tableau[slot - gs.reserve.len()].push(c);
            }
        }
    }
    gs
}

/// Shuffles pile order within every interchangeable role. The result is
/// equivalent to `gs` under the cache's symmetries.
pub fn shuffle_roles<R: Rng + ?Sized>(gs: &GameState, rng: &mut R) -> GameState {
    let mut out = gs.clone();
    out.cells.shuffle(rng);
    out.reserve.shuffle(rng);
    out.tableau.shuffle(rng);
    out
}
