use thiserror::Error;

use crate::pile::Pile;
use crate::rules::Rules;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StateError {
    #[error("rules declare {expected} piles but {found} were supplied")]
    PileCount { expected: usize, found: usize },
}

/// A full snapshot of every pile, grouped by role, plus the rules it is played under.
///
/// Cells, reserve and tableau are sets of interchangeable piles; their order here is
/// incidental. Stock and waste are ordered and never interchangeable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub rules: Rules,
    pub hole: Pile,
    pub cells: Vec<Pile>,
    pub stock: Pile,
    pub waste: Pile,
    pub reserve: Vec<Pile>,
    pub tableau: Vec<Pile>,
}

impl GameState {
    /// Empty piles for every role the rules declare.
    #[inline]
    pub fn new_empty(rules: Rules) -> Self {
        Self {
            rules,
            hole: Pile::new(),
            cells: vec![Pile::new(); usize::from(rules.cells)],
            stock: Pile::new(),
            waste: Pile::new(),
            reserve: vec![Pile::new(); usize::from(rules.reserve_size)],
            tableau: vec![Pile::new(); usize::from(rules.tableau_piles)],
        }
    }

    /// Distributes `piles` over the declared roles in layout order:
    /// hole, cells, stock, waste, reserve, tableau.
    pub fn from_piles(rules: Rules, piles: Vec<Pile>) -> Result<Self, StateError> {
        let expected = rules.pile_count();
        if piles.len() != expected {
            return Err(StateError::PileCount { expected, found: piles.len() });
        }

        let mut it = piles.into_iter();
        let mut take = |n: usize| -> Vec<Pile> { it.by_ref().take(n).collect() };

        let hole = take(usize::from(rules.hole)).pop().unwrap_or_default();
        let cells = take(usize::from(rules.cells));
        let stock = take(usize::from(rules.stock_size > 0)).pop().unwrap_or_default();
        let waste = take(usize::from(rules.has_waste())).pop().unwrap_or_default();
        let reserve = take(usize::from(rules.reserve_size));
        let tableau = take(usize::from(rules.tableau_piles));

        Ok(Self { rules, hole, cells, stock, waste, reserve, tableau })
    }

    /// Total number of cards across all roles.
    pub fn card_count(&self) -> usize {
        let sum = |ps: &[Pile]| ps.iter().map(Pile::len).sum::<usize>();
        self.hole.len()
            + sum(&self.cells)
            + self.stock.len()
            + self.waste.len()
            + sum(&self.reserve)
            + sum(&self.tableau)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::{BuildPolicy, StockDealType};

    fn pile(s: &str) -> Pile {
        s.parse().unwrap()
    }

    #[test]
    fn from_piles_fills_roles_in_layout_order() {
        let rules = Rules {
            hole: true,
            cells: 1,
            stock_size: 2,
            stock_deal_type: StockDealType::Waste,
            reserve_size: 1,
            tableau_piles: 2,
            ..Rules::tableau(0, BuildPolicy::SameSuit)
        };
        let names = ["AS", "2S", "3S 4S", "5S", "6S", "7S", "8S"];
        let piles = names.iter().map(|s| pile(s)).collect();
        let gs = GameState::from_piles(rules, piles).unwrap();

        assert_eq!(gs.hole, pile("AS"));
        assert_eq!(gs.cells, vec![pile("2S")]);
        assert_eq!(gs.stock.len(), 2);
        assert_eq!(gs.waste, pile("5S"));
        assert_eq!(gs.reserve.len(), 1);
        assert_eq!(gs.tableau.len(), 2);
        assert_eq!(gs.card_count(), 8);
    }

    #[test]
    fn from_piles_rejects_wrong_count() {
        let rules = Rules::tableau(3, BuildPolicy::AnySuit);
        let err = GameState::from_piles(rules, vec![Pile::new(); 2]).unwrap_err();
        assert_eq!(err, StateError::PileCount { expected: 3, found: 2 });
    }
}
