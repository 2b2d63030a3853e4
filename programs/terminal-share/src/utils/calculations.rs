// utils/calculations.rs
use anchor_lang::prelude::*;
use crate::constants::*;
use crate::error::TerminalShareError;
use crate::state::{ProfitModel, Tier};

/// Tier share projection for one amount. All figures in minor units.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct TierProjection {
    pub amount: u64,
    pub tier: Tier,
    pub rate_bps: u16,
    pub daily_profit: u64,
    pub monthly_profit: u64,
    pub yearly_profit: u64,
}

/// Commission model projection over `months`. All figures in minor units.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct CommissionProjection {
    pub amount: u64,
    pub months: u16,
    pub commission_bps: u16,
    pub monthly_commission: u64,
    pub total_commission: u64,
    /// Commission return over the window, basis points of the amount
    pub roi_bps: u64,
    pub daily_rental: u64,
    pub monthly_rental: u64,
    pub total_rental: u64,
    pub total_profit: u64,
}

fn to_u64(value: u128) -> Result<u64> {
    u64::try_from(value).map_err(|_| TerminalShareError::MathOverflow.into())
}

/// Tier share model: daily = amount * rate * usage_hours / 30, monthly = daily * 30, yearly = monthly * 12.
/// The 30s cancel, so monthly is taken straight from the amount and truncated once.
/// Daily is monthly / 30 for display only.
pub fn calculate_tier_projection(amount: u64) -> Result<TierProjection> {
    let tier = Tier::for_amount(amount);
    let rate_bps = tier.rate_bps();

    let monthly = amount as u128 * rate_bps as u128 * AVERAGE_DAILY_USAGE_HOURS as u128
        / BASIS_POINTS as u128;
    let monthly_profit = to_u64(monthly)?;
    let daily_profit = monthly_profit / DAYS_PER_MONTH;

    let yearly_profit = monthly_profit
        .checked_mul(MONTHS_PER_YEAR)
        .ok_or(TerminalShareError::MathOverflow)?;

    Ok(TierProjection {
        amount,
        tier,
        rate_bps,
        daily_profit,
        monthly_profit,
        yearly_profit,
    })
}

/// Monthly commission rate for an amount
pub fn commission_rate_bps(amount: u64) -> u16 {
    if amount <= COMMISSION_THRESHOLD {
        COMMISSION_RATES[0]
    } else {
        COMMISSION_RATES[1]
    }
}

/// Commission model: commission by threshold plus flat rental income over `months`
pub fn calculate_commission_projection(amount: u64, months: u16) -> Result<CommissionProjection> {
    let commission_bps = commission_rate_bps(amount);
    let monthly_commission = to_u64(amount as u128 * commission_bps as u128 / BASIS_POINTS as u128)?;
    let total_commission = monthly_commission
        .checked_mul(months as u64)
        .ok_or(TerminalShareError::MathOverflow)?;

    let roi_bps = if amount == 0 {
        0
    } else {
        to_u64(total_commission as u128 * BASIS_POINTS as u128 / amount as u128)?
    };

    let daily_rental = RENTAL_HOURS_PER_DAY * RENTAL_RATE_PER_HOUR;
    let monthly_rental = daily_rental * DAYS_PER_MONTH;
    let total_rental = monthly_rental
        .checked_mul(months as u64)
        .ok_or(TerminalShareError::MathOverflow)?;

    let total_profit = total_commission
        .checked_add(total_rental)
        .ok_or(TerminalShareError::MathOverflow)?;

    Ok(CommissionProjection {
        amount,
        months,
        commission_bps,
        monthly_commission,
        total_commission,
        roi_bps,
        daily_rental,
        monthly_rental,
        total_rental,
        total_profit,
    })
}

/// Projected monthly profit under the active model
pub fn calculate_monthly_projection(model: ProfitModel, amount: u64) -> Result<u64> {
    match model {
        ProfitModel::TierShare => Ok(calculate_tier_projection(amount)?.monthly_profit),
        ProfitModel::Commission => Ok(calculate_commission_projection(amount, 1)?.total_profit),
    }
}

/// Calculate referral bonus for an invested amount
pub fn calculate_referral_bonus(amount: u64) -> u64 {
    (amount as u128 * REFERRAL_BONUS_BPS as u128 / BASIS_POINTS as u128) as u64
}

#[cfg(test)]
mod tests {
    use super::*;

    fn units(whole: u64) -> u64 {
        whole * CURRENCY_UNIT
    }

    #[test]
    fn tier_two_example() {
        let projection = calculate_tier_projection(units(25_000)).unwrap();

        assert_eq!(projection.tier, Tier::Two);
        assert_eq!(projection.rate_bps, 2_500);
        assert_eq!(projection.daily_profit, units(625));
        assert_eq!(projection.monthly_profit, units(18_750));
        assert_eq!(projection.yearly_profit, units(225_000));
    }

    #[test]
    fn tier_bands_drive_rate() {
        for amount in [units(2_000), units(5_000), units(10_000)] {
            let projection = calculate_tier_projection(amount).unwrap();
            assert_eq!(projection.tier.label(), "Tier 1");
            assert_eq!(projection.rate_bps, 1_000);
        }
        for amount in [units(10_000) + 1, units(30_000), units(50_000)] {
            let projection = calculate_tier_projection(amount).unwrap();
            assert_eq!(projection.tier.label(), "Tier 2");
            assert_eq!(projection.rate_bps, 2_500);
        }
        for amount in [units(50_000) + 1, units(100_000), units(1_000_000)] {
            let projection = calculate_tier_projection(amount).unwrap();
            assert_eq!(projection.tier.label(), "Tier 3");
            assert_eq!(projection.rate_bps, 5_000);
        }
    }

    #[test]
    fn monthly_is_not_built_from_truncated_daily() {
        // 2,000.07 at 10%: 600.021 a month, 20.0007 a day
        let projection = calculate_tier_projection(200_007).unwrap();
        assert_eq!(projection.monthly_profit, 60_002);
        assert_eq!(projection.daily_profit, 2_000);

        // 2,000.99: 600.297 a month; 30 truncated days would give 600.00
        let projection = calculate_tier_projection(200_099).unwrap();
        assert_eq!(projection.monthly_profit, 60_029);
        assert_eq!(projection.daily_profit, 2_000);
        assert_eq!(projection.yearly_profit, 720_348);
    }

    #[test]
    fn yearly_is_twelve_months() {
        for amount in [units(2_000), 200_123, 1_234_567, units(50_000) + 7, 987_654_321] {
            let projection = calculate_tier_projection(amount).unwrap();
            assert_eq!(projection.yearly_profit, projection.monthly_profit * 12);
            assert_eq!(projection.daily_profit, projection.monthly_profit / 30);
        }
    }

    #[test]
    fn tier_projection_reports_overflow() {
        assert!(calculate_tier_projection(u64::MAX).is_err());
    }

    #[test]
    fn commission_minimum_scenario() {
        let projection = calculate_commission_projection(units(1_900), 3).unwrap();

        assert_eq!(projection.commission_bps, 190);
        assert_eq!(projection.monthly_commission, 3_610); // 36.10
        assert_eq!(projection.total_commission, 10_830);
        assert_eq!(projection.roi_bps, 570);
        assert_eq!(projection.daily_rental, units(240));
        assert_eq!(projection.monthly_rental, units(7_200));
        assert_eq!(projection.total_rental, units(21_600));
        assert_eq!(projection.total_profit, 10_830 + units(21_600));
    }

    #[test]
    fn commission_threshold_is_inclusive() {
        assert_eq!(commission_rate_bps(units(15_000)), 190);
        assert_eq!(commission_rate_bps(units(15_000) + 1), 500);

        let projection = calculate_commission_projection(units(20_000), 12).unwrap();
        assert_eq!(projection.commission_bps, 500);
        assert_eq!(projection.monthly_commission, units(1_000));
        assert_eq!(projection.total_commission, units(12_000));
        assert_eq!(projection.roi_bps, 6_000);
    }

    #[test]
    fn commission_zero_amount_has_no_roi() {
        let projection = calculate_commission_projection(0, 3).unwrap();
        assert_eq!(projection.roi_bps, 0);
        assert_eq!(projection.total_profit, projection.total_rental);
    }

    #[test]
    fn monthly_projection_follows_model() {
        assert_eq!(
            calculate_monthly_projection(ProfitModel::TierShare, units(25_000)).unwrap(),
            units(18_750)
        );
        assert_eq!(
            calculate_monthly_projection(ProfitModel::Commission, units(1_900)).unwrap(),
            3_610 + units(7_200)
        );
    }

    #[test]
    fn referral_bonus() {
        assert_eq!(calculate_referral_bonus(units(25_000)), 31_250); // 312.50
        assert_eq!(calculate_referral_bonus(0), 0);
    }
}
