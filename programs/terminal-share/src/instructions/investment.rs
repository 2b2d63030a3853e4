// instructions/investment.rs
use anchor_lang::prelude::*;
use crate::constants::*;
use crate::state::*;

/// Record a settled investment: update totals, tier, projection and pay the referral bonus
pub fn record_investment(ctx: Context<RecordInvestment>, amount: u64) -> Result<()> {
    let clock = Clock::get()?;
    let platform_config = &ctx.accounts.platform_config;
    let platform_state = &mut ctx.accounts.platform_state;
    let profile = &mut ctx.accounts.profile;

    platform_config.require_authority(ctx.accounts.authority.key())?;
    platform_state.require_active()?;

    let supplied_referrer = ctx.accounts.referrer_profile.as_ref().map(|referrer| referrer.key());
    let referral_bonus = profile.check_investment(amount, platform_config, supplied_referrer)?;

    // Referral bonus goes to the profile recorded at registration
    if let (Some(bonus), Some(referrer_profile)) = (referral_bonus, ctx.accounts.referrer_profile.as_mut()) {
        referrer_profile.add_referral_bonus(bonus)?;
        platform_state.add_referral_payment(bonus)?;

        emit!(crate::ReferralBonusCredited {
            referrer: referrer_profile.key(),
            referee: profile.key(),
            amount: bonus,
        });
        msg!("🤝 Referral bonus {} credited to {}", bonus, referrer_profile.key());
    }

    let previous_tier = profile.apply_investment(amount, platform_config.profit_model, clock.unix_timestamp)?;
    platform_state.add_investment(amount)?;

    if previous_tier != profile.tier {
        emit!(crate::TierChanged {
            profile: profile.key(),
            previous: previous_tier,
            current: profile.tier,
        });
        msg!("📈 Tier changed: {} -> {}", previous_tier.label(), profile.tier.label());
    }

    emit!(crate::InvestmentRecorded {
        profile: profile.key(),
        amount,
        total_invested: profile.total_invested,
        tier: profile.tier,
        projected_monthly_profit: profile.projected_monthly_profit,
        recorded_at: clock.unix_timestamp,
    });

    msg!(
        "💰 Investment recorded: {} (total {}, {}, projected {} per month)",
        amount,
        profile.total_invested,
        profile.tier.label(),
        profile.projected_monthly_profit
    );
    Ok(())
}

/// Credit realized profit to an investor
pub fn credit_profit(ctx: Context<CreditProfit>, amount: u64) -> Result<()> {
    let clock = Clock::get()?;
    ctx.accounts.platform_config.require_authority(ctx.accounts.authority.key())?;

    let platform_state = &mut ctx.accounts.platform_state;
    let profile = &mut ctx.accounts.profile;

    profile.credit_profit(amount, clock.unix_timestamp)?;
    platform_state.add_profit(amount)?;

    emit!(crate::ProfitCredited {
        profile: profile.key(),
        amount,
        total_profit: profile.total_profit,
        credited_at: clock.unix_timestamp,
    });

    msg!("💸 Profit credited: {} to {}", amount, profile.key());
    Ok(())
}

#[derive(Accounts)]
pub struct RecordInvestment<'info> {
    pub authority: Signer<'info>,

    #[account(
        mut,
        seeds = [PROFILE_SEED, profile.email_hash.as_ref()],
        bump = profile.bump
    )]
    pub profile: Account<'info, InvestorProfile>,

    /// Required when the profile has a referrer
    #[account(mut)]
    pub referrer_profile: Option<Account<'info, InvestorProfile>>,

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
pub struct CreditProfit<'info> {
    pub authority: Signer<'info>,

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

    #[account(
        mut,
        seeds = [PLATFORM_STATE_SEED],
        bump = platform_state.bump
    )]
    pub platform_state: Account<'info, PlatformState>,
}
