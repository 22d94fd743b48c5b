use serde::{Deserialize, Serialize};

/// How cards may be built on one another in the tableau.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BuildPolicy {
    SameSuit,
    RedBlack,
    AnySuit,
    NoBuild,
}

/// Where stock cards go when dealt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StockDealType {
    Waste,
    TableauPiles,
}

/// Read-only description of a solitaire variant: role sizes and build policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Rules {
    pub build_policy: BuildPolicy,
    pub hole: bool,
    pub cells: u8,
    pub stock_size: u8,
    pub stock_deal_type: StockDealType,
    pub reserve_size: u8,
    pub tableau_piles: u8,
    pub max_rank: u8,
}

impl Default for Rules {
    fn default() -> Self {
        // No roles at all; callers size the ones they need.
        Self {
            build_policy: BuildPolicy::AnySuit,
            hole: false,
            cells: 0,
            stock_size: 0,
            stock_deal_type: StockDealType::Waste,
            reserve_size: 0,
            tableau_piles: 0,
            max_rank: 13,
        }
    }
}

impl Rules {
    #[inline]
    pub const fn tableau(tableau_piles: u8, build_policy: BuildPolicy) -> Self {
        Self {
            build_policy,
            hole: false,
            cells: 0,
            stock_size: 0,
            stock_deal_type: StockDealType::Waste,
            reserve_size: 0,
            tableau_piles,
            max_rank: 13,
        }
    }

    /// FreeCell-like: red-black building, four cells, eight columns.
    #[inline]
    pub const fn free_cell() -> Self {
        Self {
            cells: 4,
            ..Self::tableau(8, BuildPolicy::RedBlack)
        }
    }

    /// Black Hole-like: a hole pile, no building, seventeen fans.
    #[inline]
    pub const fn black_hole() -> Self {
        Self {
            hole: true,
            ..Self::tableau(17, BuildPolicy::NoBuild)
        }
    }

    /// Waste pile exists only when there is a stock that deals to it.
    #[inline]
    pub fn has_waste(&self) -> bool {
        self.stock_size > 0 && self.stock_deal_type == StockDealType::Waste
    }

    /// Number of piles a position under these rules holds, summed over all roles.
    #[inline]
    pub fn pile_count(&self) -> usize {
        usize::from(self.hole)
            + usize::from(self.cells)
            + usize::from(self.stock_size > 0)
            + usize::from(self.has_waste())
            + usize::from(self.reserve_size)
            + usize::from(self.tableau_piles)
    }
}
