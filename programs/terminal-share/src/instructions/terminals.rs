// instructions/terminals.rs
use anchor_lang::prelude::*;
use crate::constants::*;
use crate::state::*;
use crate::utils::*;

/// Register a new terminal
pub fn create_terminal(
    ctx: Context<CreateTerminal>,
    terminal_id: u64,
    name: String,
    location: String,
    monthly_revenue: u64,
) -> Result<()> {
    let clock = Clock::get()?;
    ctx.accounts.platform_config.require_authority(ctx.accounts.authority.key())?;

    let name = validate_terminal_text(&name, MAX_TERMINAL_NAME_LEN)?;
    let location = validate_terminal_text(&location, MAX_LOCATION_LEN)?;

    let terminal = &mut ctx.accounts.terminal;
    **terminal = Terminal::new(
        terminal_id,
        name,
        location,
        monthly_revenue,
        clock.unix_timestamp,
        ctx.bumps.terminal,
    );
    ctx.accounts.platform_state.add_terminal()?;

    emit!(crate::TerminalCreated {
        terminal: terminal.key(),
        terminal_id,
        monthly_revenue,
    });

    msg!("🛰️ Terminal {} created: {} ({})", terminal_id, terminal.name, terminal.location);
    Ok(())
}

/// Add an investor as co-owner of a terminal
pub fn assign_investor(ctx: Context<AssignInvestor>) -> Result<()> {
    let clock = Clock::get()?;
    ctx.accounts.platform_config.require_authority(ctx.accounts.authority.key())?;

    let terminal = &mut ctx.accounts.terminal;
    let profile = &mut ctx.accounts.profile;

    terminal.assign_investor(profile.key(), clock.unix_timestamp)?;
    profile.add_terminal()?;

    emit!(crate::InvestorAssigned {
        terminal: terminal.key(),
        profile: profile.key(),
        co_investor_count: terminal.co_investor_count(),
    });

    msg!(
        "Investor {} assigned to terminal {} ({} co-investors)",
        profile.key(),
        terminal.terminal_id,
        terminal.co_investor_count()
    );
    Ok(())
}

/// Report last month's revenue for a terminal
pub fn update_terminal_revenue(ctx: Context<UpdateTerminal>, monthly_revenue: u64) -> Result<()> {
    let clock = Clock::get()?;
    ctx.accounts.platform_config.require_authority(ctx.accounts.authority.key())?;

    let terminal = &mut ctx.accounts.terminal;
    let previous = terminal.monthly_revenue;
    terminal.update_revenue(monthly_revenue, clock.unix_timestamp);

    emit!(crate::TerminalRevenueUpdated {
        terminal: terminal.key(),
        previous,
        current: monthly_revenue,
    });

    msg!("Terminal {} revenue: {} -> {}", terminal.terminal_id, previous, monthly_revenue);
    Ok(())
}

/// Take a terminal in or out of service
pub fn set_terminal_active(ctx: Context<UpdateTerminal>, is_active: bool) -> Result<()> {
    let clock = Clock::get()?;
    ctx.accounts.platform_config.require_authority(ctx.accounts.authority.key())?;

    let terminal = &mut ctx.accounts.terminal;
    terminal.set_active(is_active, clock.unix_timestamp);

    msg!("Terminal {} active: {}", terminal.terminal_id, is_active);
    Ok(())
}

#[derive(Accounts)]
#[instruction(terminal_id: u64)]
pub struct CreateTerminal<'info> {
    #[account(mut)]
    pub authority: Signer<'info>,

    #[account(
        init,
        payer = authority,
        space = Terminal::SIZE,
        seeds = [TERMINAL_SEED, terminal_id.to_le_bytes().as_ref()],
        bump
    )]
    pub terminal: Account<'info, Terminal>,

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

    pub system_program: Program<'info, System>,
}

#[derive(Accounts)]
pub struct AssignInvestor<'info> {
    pub authority: Signer<'info>,

    #[account(
        mut,
        seeds = [TERMINAL_SEED, terminal.terminal_id.to_le_bytes().as_ref()],
        bump = terminal.bump
    )]
    pub terminal: Account<'info, Terminal>,

    #[account(
        mut,
        seeds = [PROFILE_SEED, profile.email_hash.as_ref()],
        bump = profile.bump
    )]
    pub profile: Account<'info, InvestorProfile>,

    #[account(
        seeds = [PLATFORM_CONFIG_SEED],
        bump = platform_config.bump
    )]
    pub platform_config: Account<'info, PlatformConfig>,
}

#[derive(Accounts)]
pub struct UpdateTerminal<'info> {
    pub authority: Signer<'info>,

    #[account(
        mut,
        seeds = [TERMINAL_SEED, terminal.terminal_id.to_le_bytes().as_ref()],
        bump = terminal.bump
    )]
    pub terminal: Account<'info, Terminal>,

    #[account(
        seeds = [PLATFORM_CONFIG_SEED],
        bump = platform_config.bump
    )]
    pub platform_config: Account<'info, PlatformConfig>,
}
