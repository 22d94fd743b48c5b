use crate::config::SuitSymmetry;
use crate::pile::Pile;
use crate::signature::{Signature, SuitReduction, Symbol};
use crate::state::GameState;

/// Reduces a position to its canonical signature.
///
/// Layout, in order:
/// - hole top card (hole variants only; a divider if the hole is empty)
/// - cell piles, sorted, each followed by a divider, then a role divider
/// - stock, divider, and waste, divider (when the rules have them)
/// - reserve piles, sorted and divided like cells
/// - tableau piles, sorted and divided like cells
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Encoder {
    symmetry: SuitSymmetry,
}

impl Encoder {
    #[inline]
    pub fn new(symmetry: SuitSymmetry) -> Self {
        Self { symmetry }
    }

    #[inline]
    pub fn symmetry(&self) -> SuitSymmetry {
        self.symmetry
    }

    pub fn encode(&self, gs: &GameState) -> Signature {
        let rules = &gs.rules;
        let reduction = SuitReduction::for_rules(rules, self.symmetry);
        let mut sig = Signature::with_reserve();

        if rules.hole {
            match gs.hole.top_card() {
                Some(c) => sig.push(reduction.symbol(c)),
                None => sig.push_divider(),
            }
        }

        add_role(&mut sig, &gs.cells, rules.cells > 0, reduction);

        if rules.stock_size > 0 {
            add_pile(&mut sig, &gs.stock, reduction);
            sig.push_divider();

            if rules.has_waste() {
                add_pile(&mut sig, &gs.waste, reduction);
                sig.push_divider();
            }
        }

        add_role(&mut sig, &gs.reserve, rules.reserve_size > 0, reduction);
        add_role(&mut sig, &gs.tableau, rules.tableau_piles > 0, reduction);

        sig
    }
}

/// Free-function form of `Encoder::encode`.
#[inline]
pub fn encode(gs: &GameState, symmetry: SuitSymmetry) -> Signature {
    Encoder::new(symmetry).encode(gs)
}

#[inline]
fn add_pile(sig: &mut Signature, pile: &Pile, reduction: SuitReduction) {
    for &c in pile.cards() {
        sig.push(reduction.symbol(c));
    }
}

/// Interchangeable piles: encode each, sort, emit with a divider after every pile
/// (empty ones included), then one role divider when the role is declared.
fn add_role(sig: &mut Signature, piles: &[Pile], declared: bool, reduction: SuitReduction) {
    let mut runs: Vec<Vec<Symbol>> = piles
        .iter()
        .map(|p| p.cards().iter().map(|&c| reduction.symbol(c)).collect())
        .collect();
    runs.sort_unstable();

    for run in &runs {
        sig.extend_from_slice(run);
        sig.push_divider();
    }
    if declared {
        sig.push_divider();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::{BuildPolicy, Rules, StockDealType};

    fn pile(s: &str) -> Pile {
        s.parse().unwrap()
    }

    fn tableau(policy: BuildPolicy, piles: &[&str]) -> GameState {
        let rules = Rules::tableau(piles.len() as u8, policy);
        GameState::from_piles(rules, piles.iter().map(|s| pile(s)).collect()).unwrap()
    }

    #[test]
    fn layout_of_a_small_tableau() {
        let gs = tableau(BuildPolicy::SameSuit, &["3H", "AC 2D", ""]);
        let sig = Encoder::default().encode(&gs);
        // sorted: [] < [AC 2D] < [3H]; three pile dividers plus a role divider
        assert_eq!(sig.to_string(), "|AC 2D|3H||");
        assert_eq!(sig.divider_count(), 4);
    }

    #[test]
    fn stock_and_waste_keep_their_order() {
        let rules = Rules {
            stock_size: 3,
            stock_deal_type: StockDealType::Waste,
            ..Rules::tableau(1, BuildPolicy::SameSuit)
        };
        let a = GameState::from_piles(rules, vec![pile("AC 2C"), pile("3C"), pile("4C")]).unwrap();
        let b = GameState::from_piles(rules, vec![pile("2C AC"), pile("3C"), pile("4C")]).unwrap();
        let c = GameState::from_piles(rules, vec![pile("3C"), pile("AC 2C"), pile("4C")]).unwrap();

        let enc = Encoder::default();
        assert_eq!(enc.encode(&a).to_string(), "AC 2C|3C|4C||");
        assert_ne!(enc.encode(&a), enc.encode(&b));
        assert_ne!(enc.encode(&a), enc.encode(&c));
    }

    #[test]
    fn no_waste_when_stock_deals_to_tableau() {
        let rules = Rules {
            stock_size: 2,
            stock_deal_type: StockDealType::TableauPiles,
            ..Rules::tableau(1, BuildPolicy::SameSuit)
        };
        let gs = GameState::from_piles(rules, vec![pile("AC 2C"), pile("3C")]).unwrap();
        assert_eq!(Encoder::default().encode(&gs).to_string(), "AC 2C|3C||");
    }

    #[test]
    fn undeclared_roles_emit_nothing() {
        let gs = GameState::new_empty(Rules::default());
        assert!(Encoder::default().encode(&gs).is_empty());
    }

    #[test]
    fn hole_contributes_its_top_card() {
        let rules = Rules { hole: true, ..Rules::tableau(1, BuildPolicy::SameSuit) };
        let gs = GameState::from_piles(rules, vec![pile("AC 5D"), pile("2S")]).unwrap();
        assert_eq!(Encoder::default().encode(&gs).to_string(), "5D 2S||");

        let empty = GameState::from_piles(rules, vec![Pile::new(), pile("2S")]).unwrap();
        assert_eq!(Encoder::default().encode(&empty).to_string(), "|2S||");
    }

    #[test]
    fn encoding_is_deterministic() {
        let gs = tableau(BuildPolicy::RedBlack, &["KS QH", "", "7C", "7D 6S"]);
        let enc = Encoder::new(SuitSymmetry::Forced);
        assert_eq!(enc.encode(&gs), enc.encode(&gs));
        assert_eq!(enc.encode(&gs), encode(&gs, SuitSymmetry::Forced));
    }
}
