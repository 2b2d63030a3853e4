// state/platform_config.rs
use anchor_lang::prelude::*;
use crate::constants::*;
use crate::error::TerminalShareError;
use crate::state::ProfitModel;
use crate::utils::validation::validate_lockout_policy;

/// Thresholds applied by the login policy
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LockoutPolicy {
    pub max_failed_attempts: u8,
    pub lockout_duration: i64,
}

impl Default for LockoutPolicy {
    fn default() -> Self {
        Self {
            max_failed_attempts: DEFAULT_MAX_FAILED_ATTEMPTS,
            lockout_duration: DEFAULT_LOCKOUT_DURATION,
        }
    }
}

#[account]
pub struct PlatformConfig {
    /// Admin authority who can update config and record investments
    pub authority: Pubkey,

    /// Calculator that drives profile projections
    pub profit_model: ProfitModel,

    /// Minimum total investment under the tier share model
    pub tier_share_min_investment: u64,

    /// Minimum total investment under the commission model
    pub commission_min_investment: u64,

    /// Largest single investment accepted
    pub max_investment: u64,

    /// Consecutive failed logins before lockout
    pub max_failed_attempts: u8,

    /// Lockout length in seconds
    pub lockout_duration: i64,

    /// Minimum seconds between credential resets
    pub credential_reset_cooldown: i64,

    /// Whether new registrations are allowed
    pub registrations_open: bool,

    /// Bump seed for PDA
    pub bump: u8,
}

impl PlatformConfig {
    /// Size for account allocation
    pub const SIZE: usize = 8 + // discriminator
        32 + // authority
        1 + // profit_model
        8 + // tier_share_min_investment
        8 + // commission_min_investment
        8 + // max_investment
        1 + // max_failed_attempts
        8 + // lockout_duration
        8 + // credential_reset_cooldown
        1 + // registrations_open
        1 + // bump
        32; // headroom

    /// Create new config with default values
    pub fn new(authority: Pubkey, profit_model: ProfitModel, bump: u8) -> Self {
        Self {
            authority,
            profit_model,
            tier_share_min_investment: ProfitModel::TierShare.default_min_investment(),
            commission_min_investment: ProfitModel::Commission.default_min_investment(),
            max_investment: MAX_SINGLE_INVESTMENT,
            max_failed_attempts: DEFAULT_MAX_FAILED_ATTEMPTS,
            lockout_duration: DEFAULT_LOCKOUT_DURATION,
            credential_reset_cooldown: CREDENTIAL_RESET_COOLDOWN,
            registrations_open: true,
            bump,
        }
    }

    pub fn lockout_policy(&self) -> LockoutPolicy {
        LockoutPolicy {
            max_failed_attempts: self.max_failed_attempts,
            lockout_duration: self.lockout_duration,
        }
    }

    /// Minimum total investment for the active model
    pub fn min_investment(&self) -> u64 {
        self.min_investment_for(self.profit_model)
    }

    pub fn min_investment_for(&self, model: ProfitModel) -> u64 {
        match model {
            ProfitModel::TierShare => self.tier_share_min_investment,
            ProfitModel::Commission => self.commission_min_investment,
        }
    }

    pub fn require_authority(&self, signer: Pubkey) -> Result<()> {
        if signer != self.authority {
            return Err(TerminalShareError::UnauthorizedAdmin.into());
        }
        Ok(())
    }

    /// Update lockout thresholds (admin only)
    pub fn update_lockout_policy(&mut self, max_failed_attempts: u8, lockout_duration: i64) -> Result<()> {
        validate_lockout_policy(max_failed_attempts, lockout_duration)?;
        self.max_failed_attempts = max_failed_attempts;
        self.lockout_duration = lockout_duration;
        Ok(())
    }
}
