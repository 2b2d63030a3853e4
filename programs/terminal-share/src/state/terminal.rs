use anchor_lang::prelude::*;
use crate::constants::*;
use crate::error::TerminalShareError;

/// A satellite internet terminal co-owned by up to MAX_TERMINAL_INVESTORS investors
#[account]
pub struct Terminal {
    pub terminal_id: u64,
    pub name: String,
    pub location: String,
    /// Revenue reported for the last month, minor units
    pub monthly_revenue: u64,
    /// Investor profile addresses
    pub investors: Vec<Pubkey>,
    pub is_active: bool,
    pub created_at: i64,
    pub updated_at: i64,
    pub bump: u8,
}

/// Dashboard view of one terminal
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct TerminalSummary {
    pub terminal_id: u64,
    pub name: String,
    pub location: String,
    pub monthly_revenue: u64,
    pub co_investor_count: u8,
    pub is_active: bool,
}

impl Terminal {
    pub const SIZE: usize = 8 + // discriminator
        8 + // terminal_id
        4 + MAX_TERMINAL_NAME_LEN + // name
        4 + MAX_LOCATION_LEN + // location
        8 + // monthly_revenue
        4 + 32 * MAX_TERMINAL_INVESTORS + // investors
        1 + // is_active
        8 + // created_at
        8 + // updated_at
        1 + // bump
        64; // headroom

    pub fn new(
        terminal_id: u64,
        name: String,
        location: String,
        monthly_revenue: u64,
        current_time: i64,
        bump: u8,
    ) -> Self {
        Self {
            terminal_id,
            name,
            location,
            monthly_revenue,
            investors: Vec::new(),
            is_active: true,
            created_at: current_time,
            updated_at: current_time,
            bump,
        }
    }

    pub fn co_investor_count(&self) -> u8 {
        self.investors.len() as u8
    }

    pub fn has_investor(&self, profile: &Pubkey) -> bool {
        self.investors.contains(profile)
    }

    pub fn assign_investor(&mut self, profile: Pubkey, current_time: i64) -> Result<()> {
        if !self.is_active {
            return Err(TerminalShareError::TerminalInactive.into());
        }
        if self.has_investor(&profile) {
            return Err(TerminalShareError::InvestorAlreadyAssigned.into());
        }
        if self.investors.len() >= MAX_TERMINAL_INVESTORS {
            return Err(TerminalShareError::TerminalFull.into());
        }

        self.investors.push(profile);
        self.updated_at = current_time;
        Ok(())
    }

    pub fn update_revenue(&mut self, monthly_revenue: u64, current_time: i64) {
        self.monthly_revenue = monthly_revenue;
        self.updated_at = current_time;
    }

    pub fn set_active(&mut self, is_active: bool, current_time: i64) {
        self.is_active = is_active;
        self.updated_at = current_time;
    }

    pub fn summary(&self) -> TerminalSummary {
        TerminalSummary {
            terminal_id: self.terminal_id,
            name: self.name.clone(),
            location: self.location.clone(),
            monthly_revenue: self.monthly_revenue,
            co_investor_count: self.co_investor_count(),
            is_active: self.is_active,
        }
    }
}
