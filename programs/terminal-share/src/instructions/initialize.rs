// instructions/initialize.rs
use anchor_lang::prelude::*;
use crate::constants::*;
use crate::state::*;

/// Initialize the platform with PlatformState and PlatformConfig accounts
pub fn handler(ctx: Context<Initialize>, profit_model: ProfitModel) -> Result<()> {
    let clock = Clock::get()?;

    let platform_state = &mut ctx.accounts.platform_state;
    **platform_state = PlatformState::new(
        ctx.accounts.authority.key(),
        clock.unix_timestamp,
        ctx.bumps.platform_state,
    );

    let platform_config = &mut ctx.accounts.platform_config;
    **platform_config = PlatformConfig::new(
        ctx.accounts.authority.key(),
        profit_model,
        ctx.bumps.platform_config,
    );

    msg!("Terminal share platform initialized");
    msg!("Authority: {}", ctx.accounts.authority.key());
    msg!("Profit model: {:?}", profit_model);
    msg!("Minimum investment: {}", platform_config.min_investment());

    Ok(())
}

#[derive(Accounts)]
pub struct Initialize<'info> {
    /// Authority (admin) who manages the platform
    #[account(mut)]
    pub authority: Signer<'info>,

    /// Global platform statistics
    #[account(
        init,
        payer = authority,
        space = PlatformState::SIZE,
        seeds = [PLATFORM_STATE_SEED],
        bump
    )]
    pub platform_state: Account<'info, PlatformState>,

    /// Global platform configuration
    #[account(
        init,
        payer = authority,
        space = PlatformConfig::SIZE,
        seeds = [PLATFORM_CONFIG_SEED],
        bump
    )]
    pub platform_config: Account<'info, PlatformConfig>,

    /// System program for account creation
    pub system_program: Program<'info, System>,
}
