use anchor_lang::prelude::*;
use crate::error::TerminalShareError;

#[account]
pub struct PlatformState {
    pub authority: Pubkey,
    pub total_investors: u64,
    pub total_invested: u64,
    pub total_profit_credited: u64,
    pub total_referral_paid: u64,
    pub total_terminals: u64,
    pub is_paused: bool,
    pub created_at: i64,
    pub bump: u8,
}

impl PlatformState {
    /// Size for account allocation
    pub const SIZE: usize = 8 + // discriminator
        32 + // authority
        8 + // total_investors
        8 + // total_invested
        8 + // total_profit_credited
        8 + // total_referral_paid
        8 + // total_terminals
        1 + // is_paused
        8 + // created_at
        1; // bump

    pub fn new(authority: Pubkey, created_at: i64, bump: u8) -> Self {
        Self {
            authority,
            total_investors: 0,
            total_invested: 0,
            total_profit_credited: 0,
            total_referral_paid: 0,
            total_terminals: 0,
            is_paused: false,
            created_at,
            bump,
        }
    }

    pub fn require_active(&self) -> Result<()> {
        if self.is_paused {
            return Err(TerminalShareError::PlatformPaused.into());
        }
        Ok(())
    }

    pub fn add_investor(&mut self) -> Result<()> {
        self.total_investors = self.total_investors
            .checked_add(1)
            .ok_or(TerminalShareError::MathOverflow)?;
        Ok(())
    }

    pub fn add_investment(&mut self, amount: u64) -> Result<()> {
        self.total_invested = self.total_invested
            .checked_add(amount)
            .ok_or(TerminalShareError::MathOverflow)?;
        Ok(())
    }

    pub fn add_profit(&mut self, amount: u64) -> Result<()> {
        self.total_profit_credited = self.total_profit_credited
            .checked_add(amount)
            .ok_or(TerminalShareError::MathOverflow)?;
        Ok(())
    }

    pub fn add_referral_payment(&mut self, amount: u64) -> Result<()> {
        self.total_referral_paid = self.total_referral_paid
            .checked_add(amount)
            .ok_or(TerminalShareError::MathOverflow)?;
        Ok(())
    }

    pub fn add_terminal(&mut self) -> Result<()> {
        self.total_terminals = self.total_terminals
            .checked_add(1)
            .ok_or(TerminalShareError::MathOverflow)?;
        Ok(())
    }

    /// Toggle pause state
    pub fn toggle_pause(&mut self) {
        self.is_paused = !self.is_paused;
    }
}
