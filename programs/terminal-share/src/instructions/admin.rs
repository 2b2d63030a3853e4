// instructions/admin.rs
use anchor_lang::prelude::*;
use crate::constants::*;
use crate::state::*;

/// Admin function to pause/unpause the platform
pub fn toggle_pause(ctx: Context<TogglePause>) -> Result<()> {
    let platform_state = &mut ctx.accounts.platform_state;
    ctx.accounts.platform_config.require_authority(ctx.accounts.authority.key())?;

    platform_state.toggle_pause();

    msg!("Platform pause toggled. New state: {}", platform_state.is_paused);
    Ok(())
}

/// Admin function to open/close registrations
pub fn toggle_registrations(ctx: Context<UpdateConfig>) -> Result<()> {
    let platform_config = &mut ctx.accounts.platform_config;
    platform_config.require_authority(ctx.accounts.authority.key())?;

    platform_config.registrations_open = !platform_config.registrations_open;

    msg!("Registrations open: {}", platform_config.registrations_open);
    Ok(())
}

/// Switch the calculator that drives projections and minimums
pub fn set_profit_model(ctx: Context<UpdateConfig>, profit_model: ProfitModel) -> Result<()> {
    let platform_config = &mut ctx.accounts.platform_config;
    platform_config.require_authority(ctx.accounts.authority.key())?;

    let previous = platform_config.profit_model;
    platform_config.profit_model = profit_model;

    emit!(crate::ProfitModelUpdated {
        previous,
        current: profit_model,
        min_investment: platform_config.min_investment(),
    });

    msg!("Profit model updated: {:?} -> {:?}", previous, profit_model);
    Ok(())
}

/// Update lockout thresholds
pub fn update_lockout_policy(
    ctx: Context<UpdateConfig>,
    max_failed_attempts: u8,
    lockout_duration: i64,
) -> Result<()> {
    let platform_config = &mut ctx.accounts.platform_config;
    platform_config.require_authority(ctx.accounts.authority.key())?;

    platform_config.update_lockout_policy(max_failed_attempts, lockout_duration)?;

    msg!(
        "Lockout policy updated: {} attempts, {} seconds",
        max_failed_attempts,
        lockout_duration
    );
    Ok(())
}

/// Record the outcome of off-chain identity verification
pub fn set_verification_status(ctx: Context<UpdateProfile>, status: VerificationStatus) -> Result<()> {
    ctx.accounts.platform_config.require_authority(ctx.accounts.authority.key())?;

    let profile = &mut ctx.accounts.profile;
    profile.verification_status = status;
    profile.updated_at = Clock::get()?.unix_timestamp;

    msg!("Verification status for {}: {:?}", profile.key(), status);
    Ok(())
}

/// Recompute a profile's projection under the active model
pub fn refresh_projection(ctx: Context<UpdateProfile>) -> Result<()> {
    let platform_config = &ctx.accounts.platform_config;
    platform_config.require_authority(ctx.accounts.authority.key())?;

    let profile = &mut ctx.accounts.profile;
    profile.refresh_projection(platform_config.profit_model)?;

    msg!(
        "Projection refreshed for {}: {} per month",
        profile.key(),
        profile.projected_monthly_profit
    );
    Ok(())
}

#[derive(Accounts)]
pub struct TogglePause<'info> {
    pub authority: Signer<'info>,

    #[account(
        seeds = [PLATFORM_CONFIG_SEED],
        bump = platform_config.bump
    )]
    pub platform_config: Account<'info, PlatformConfig>,

    #[account(
        mut,
        seeds = [PLATFORM_STATE_SEED],
        bump = platform_state.bump
    )]
    pub platform_state: Account<'info, PlatformState>,
}

#[derive(Accounts)]
pub struct UpdateConfig<'info> {
    /// Authority (admin)
    pub authority: Signer<'info>,

    /// Platform config to update
    #[account(
        mut,
        seeds = [PLATFORM_CONFIG_SEED],
        bump = platform_config.bump
    )]
    pub platform_config: Account<'info, PlatformConfig>,
}

#[derive(Accounts)]
pub struct UpdateProfile<'info> {
    /// Authority (admin)
    pub authority: Signer<'info>,

    #[account(
        seeds = [PLATFORM_CONFIG_SEED],
        bump = platform_config.bump
    )]
    pub platform_config: Account<'info, PlatformConfig>,

    #[account(
        mut,
        seeds = [PROFILE_SEED, profile.email_hash.as_ref()],
        bump = profile.bump
    )]
    pub profile: Account<'info, InvestorProfile>,
}
