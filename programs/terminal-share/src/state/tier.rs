use anchor_lang::prelude::*;
use crate::constants::*;

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Tier {
    One = 0,
    Two = 1,
    Three = 2,
}

impl Tier {
    /// Band lookup. Bands are closed at the top: 10,000 is Tier 1, 10,000.01 is Tier 2.
    pub fn for_amount(amount: u64) -> Self {
        if amount <= TIER_UPPER_BOUNDS[0] {
            Tier::One
        } else if amount <= TIER_UPPER_BOUNDS[1] {
            Tier::Two
        } else {
            Tier::Three
        }
    }

    /// Get the array index for this tier
    pub fn to_index(&self) -> usize {
        *self as usize
    }

    /// Profit share in basis points
    pub fn rate_bps(&self) -> u16 {
        TIER_RATES[self.to_index()]
    }

    pub fn label(&self) -> &'static str {
        match self {
            Tier::One => "Tier 1",
            Tier::Two => "Tier 2",
            Tier::Three => "Tier 3",
        }
    }
}

/// Which calculator drives profile projections and investment minimums
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum ProfitModel {
    /// Tiered profit share over average usage hours
    TierShare,
    /// Monthly commission by threshold plus flat device rental income
    Commission,
}

impl ProfitModel {
    pub fn default_min_investment(&self) -> u64 {
        match self {
            ProfitModel::TierShare => TIER_SHARE_MIN_INVESTMENT,
            ProfitModel::Commission => COMMISSION_MIN_INVESTMENT,
        }
    }
}
