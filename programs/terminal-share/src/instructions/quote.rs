// instructions/quote.rs
use anchor_lang::prelude::*;
use crate::constants::*;
use crate::state::*;
use crate::utils::*;

/// Tier share calculator. Read-only; the projection comes back as return data.
pub fn quote_tier_share(ctx: Context<Quote>, amount: u64) -> Result<TierProjection> {
    let platform_config = &ctx.accounts.platform_config;
    validate_investment_amount(
        amount,
        platform_config.min_investment_for(ProfitModel::TierShare),
        platform_config.max_investment,
    )?;

    let projection = calculate_tier_projection(amount)?;
    msg!(
        "TIER_QUOTE: amount={}, tier={}, daily={}, monthly={}, yearly={}",
        amount,
        projection.tier.label(),
        projection.daily_profit,
        projection.monthly_profit,
        projection.yearly_profit
    );
    Ok(projection)
}

/// Commission calculator over a window of months
pub fn quote_commission(ctx: Context<Quote>, amount: u64, months: u16) -> Result<CommissionProjection> {
    let platform_config = &ctx.accounts.platform_config;
    validate_investment_amount(
        amount,
        platform_config.min_investment_for(ProfitModel::Commission),
        platform_config.max_investment,
    )?;
    validate_timeframe(months)?;

    let projection = calculate_commission_projection(amount, months)?;
    msg!(
        "COMMISSION_QUOTE: amount={}, months={}, rate_bps={}, commission={}, rental={}, total={}",
        amount,
        months,
        projection.commission_bps,
        projection.total_commission,
        projection.total_rental,
        projection.total_profit
    );
    Ok(projection)
}

#[derive(Accounts)]
pub struct Quote<'info> {
    #[account(
        seeds = [PLATFORM_CONFIG_SEED],
        bump = platform_config.bump
    )]
    pub platform_config: Account<'info, PlatformConfig>,
}
