use anchor_lang::prelude::*;

// Import modules
pub mod constants;
pub mod error;
pub mod state;
pub mod instructions;
pub mod utils;

// Re-export for convenience
pub use constants::*;
pub use error::*;
pub use state::*;
pub use instructions::*;
pub use utils::{CommissionProjection, TierProjection};

declare_id!("7HxRb5mq3QKnc2cWQPaZLBjTJzxFh2hXq5KZ4uNqYJ8o");

#[program]
pub mod terminal_share {
    use super::*;

    /// Initialize the platform config and state
    pub fn initialize(ctx: Context<Initialize>, profit_model: ProfitModel) -> Result<()> {
        instructions::initialize::handler(ctx, profit_model)
    }

    // ------------------------------------------------------------------
    // Admin
    // ------------------------------------------------------------------

    pub fn toggle_pause(ctx: Context<TogglePause>) -> Result<()> {
        instructions::admin::toggle_pause(ctx)
    }

    pub fn toggle_registrations(ctx: Context<UpdateConfig>) -> Result<()> {
        instructions::admin::toggle_registrations(ctx)
    }

    pub fn set_profit_model(ctx: Context<UpdateConfig>, profit_model: ProfitModel) -> Result<()> {
        instructions::admin::set_profit_model(ctx, profit_model)
    }

    pub fn update_lockout_policy(
        ctx: Context<UpdateConfig>,
        max_failed_attempts: u8,
        lockout_duration: i64,
    ) -> Result<()> {
        instructions::admin::update_lockout_policy(ctx, max_failed_attempts, lockout_duration)
    }

    pub fn set_verification_status(ctx: Context<UpdateProfile>, status: VerificationStatus) -> Result<()> {
        instructions::admin::set_verification_status(ctx, status)
    }

    pub fn refresh_projection(ctx: Context<UpdateProfile>) -> Result<()> {
        instructions::admin::refresh_projection(ctx)
    }

    // ------------------------------------------------------------------
    // Accounts & login
    // ------------------------------------------------------------------

    /// Create an investor profile
    pub fn register_investor(
        ctx: Context<RegisterInvestor>,
        email_hash: [u8; 32],
        email: String,
        display_name: String,
        credential: Pubkey,
    ) -> Result<()> {
        instructions::register::handler(ctx, email_hash, email, display_name, credential)
    }

    /// Login attempt; failures are persisted and reported in the outcome
    pub fn login(ctx: Context<Login>, email_hash: [u8; 32]) -> Result<LoginOutcome> {
        instructions::login::handler(ctx, email_hash)
    }

    pub fn reset_credential(ctx: Context<ResetCredential>, new_credential: Pubkey) -> Result<()> {
        instructions::reset_credential::handler(ctx, new_credential)
    }

    // ------------------------------------------------------------------
    // Investments
    // ------------------------------------------------------------------

    pub fn record_investment(ctx: Context<RecordInvestment>, amount: u64) -> Result<()> {
        instructions::investment::record_investment(ctx, amount)
    }

    pub fn credit_profit(ctx: Context<CreditProfit>, amount: u64) -> Result<()> {
        instructions::investment::credit_profit(ctx, amount)
    }

    // ------------------------------------------------------------------
    // Terminals
    // ------------------------------------------------------------------

    pub fn create_terminal(
        ctx: Context<CreateTerminal>,
        terminal_id: u64,
        name: String,
        location: String,
        monthly_revenue: u64,
    ) -> Result<()> {
        instructions::terminals::create_terminal(ctx, terminal_id, name, location, monthly_revenue)
    }

    pub fn assign_investor(ctx: Context<AssignInvestor>) -> Result<()> {
        instructions::terminals::assign_investor(ctx)
    }

    pub fn update_terminal_revenue(ctx: Context<UpdateTerminal>, monthly_revenue: u64) -> Result<()> {
        instructions::terminals::update_terminal_revenue(ctx, monthly_revenue)
    }

    pub fn set_terminal_active(ctx: Context<UpdateTerminal>, is_active: bool) -> Result<()> {
        instructions::terminals::set_terminal_active(ctx, is_active)
    }

    // ------------------------------------------------------------------
    // Views
    // ------------------------------------------------------------------

    pub fn quote_tier_share(ctx: Context<Quote>, amount: u64) -> Result<TierProjection> {
        instructions::quote::quote_tier_share(ctx, amount)
    }

    pub fn quote_commission(ctx: Context<Quote>, amount: u64, months: u16) -> Result<CommissionProjection> {
        instructions::quote::quote_commission(ctx, amount, months)
    }

    /// Terminal accounts go in remaining accounts
    pub fn get_dashboard(ctx: Context<GetDashboard>) -> Result<InvestorDashboard> {
        instructions::dashboard::handler(ctx)
    }
}

// ============================================================================
// EVENTS
// ============================================================================

#[event]
pub struct InvestorRegistered {
    pub profile: Pubkey,
    pub owner: Pubkey,
    pub referrer: Option<Pubkey>,
    pub registered_at: i64,
}

#[event]
pub struct LoginSucceeded {
    pub profile: Pubkey,
    pub logged_in_at: i64,
}

#[event]
pub struct LoginFailed {
    pub profile: Pubkey,
    pub failed_attempt_count: u8,
    pub attempts_remaining: u8,
}

#[event]
pub struct AccountLockedOut {
    pub profile: Pubkey,
    pub failed_attempt_count: u8,
    pub lockout_until: i64,
}

#[event]
pub struct CredentialReset {
    pub profile: Pubkey,
    pub reset_at: i64,
}

#[event]
pub struct InvestmentRecorded {
    pub profile: Pubkey,
    pub amount: u64,
    pub total_invested: u64,
    pub tier: Tier,
    pub projected_monthly_profit: u64,
    pub recorded_at: i64,
}

#[event]
pub struct TierChanged {
    pub profile: Pubkey,
    pub previous: Tier,
    pub current: Tier,
}

#[event]
pub struct ProfitCredited {
    pub profile: Pubkey,
    pub amount: u64,
    pub total_profit: u64,
    pub credited_at: i64,
}

#[event]
pub struct ReferralBonusCredited {
    pub referrer: Pubkey,
    pub referee: Pubkey,
    pub amount: u64,
}

#[event]
pub struct TerminalCreated {
    pub terminal: Pubkey,
    pub terminal_id: u64,
    pub monthly_revenue: u64,
}

#[event]
pub struct InvestorAssigned {
    pub terminal: Pubkey,
    pub profile: Pubkey,
    pub co_investor_count: u8,
}

#[event]
pub struct TerminalRevenueUpdated {
    pub terminal: Pubkey,
    pub previous: u64,
    pub current: u64,
}

#[event]
pub struct ProfitModelUpdated {
    pub previous: ProfitModel,
    pub current: ProfitModel,
    pub min_investment: u64,
}
