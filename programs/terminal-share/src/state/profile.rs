// state/profile.rs
use anchor_lang::prelude::*;
use crate::constants::*;
use crate::error::TerminalShareError;
use crate::state::{LockoutPolicy, PlatformConfig, ProfitModel, Tier, TerminalSummary};
use crate::utils::calculations::{calculate_monthly_projection, calculate_referral_bonus};
use crate::utils::validation::validate_investment_amount;

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum VerificationStatus {
    Pending,
    Verified,
    Rejected,
}

/// Result of a login attempt that reached the credential check
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum LoginOutcome {
    Authenticated,
    Rejected { attempts_remaining: u8 },
    LockedOut { retry_in_minutes: u32 },
}

/// Everything the investor dashboard renders
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct InvestorDashboard {
    pub display_name: String,
    pub verification_status: VerificationStatus,
    pub total_invested: u64,
    pub tier: Tier,
    pub tier_label: String,
    pub rate_bps: u16,
    pub projected_monthly_profit: u64,
    pub projected_yearly_profit: u64,
    pub total_profit: u64,
    pub referral_count: u32,
    pub referral_bonus: u64,
    pub is_locked: bool,
    pub terminals: Vec<TerminalSummary>,
    pub terminals_monthly_revenue: u64,
}

#[account]
pub struct InvestorProfile {
    /// Wallet that registered (and paid for) the profile
    pub owner: Pubkey,
    /// Key that must sign a login for it to succeed
    pub credential: Pubkey,
    /// SHA-256 of the normalized email, also the PDA seed
    pub email_hash: [u8; 32],
    pub display_name: String,
    pub verification_status: VerificationStatus,
    pub total_invested: u64,
    pub tier: Tier,
    pub projected_monthly_profit: u64,
    pub total_profit: u64,
    /// Profile address of the referrer
    pub referrer: Option<Pubkey>,
    pub referral_count: u32,
    pub referral_bonus: u64,
    pub terminal_count: u8,
    pub failed_attempt_count: u8,
    pub lockout_until: Option<i64>,
    pub last_login: i64,
    /// 0 until the first reset
    pub last_credential_reset: i64,
    pub created_at: i64,
    pub updated_at: i64,
    pub bump: u8,
}

impl InvestorProfile {
    pub const SIZE: usize = 8 + // discriminator
        32 + // owner
        32 + // credential
        32 + // email_hash
        4 + MAX_DISPLAY_NAME_LEN + // display_name
        1 + // verification_status
        8 + // total_invested
        1 + // tier
        8 + // projected_monthly_profit
        8 + // total_profit
        1 + 32 + // referrer
        4 + // referral_count
        8 + // referral_bonus
        1 + // terminal_count
        1 + // failed_attempt_count
        1 + 8 + // lockout_until
        8 + // last_login
        8 + // last_credential_reset
        8 + // created_at
        8 + // updated_at
        1 + // bump
        64; // headroom

    pub fn new(
        owner: Pubkey,
        credential: Pubkey,
        email_hash: [u8; 32],
        display_name: String,
        referrer: Option<Pubkey>,
        current_time: i64,
        bump: u8,
    ) -> Self {
        Self {
            owner,
            credential,
            email_hash,
            display_name,
            verification_status: VerificationStatus::Pending,
            total_invested: 0,
            tier: Tier::One,
            projected_monthly_profit: 0,
            total_profit: 0,
            referrer,
            referral_count: 0,
            referral_bonus: 0,
            terminal_count: 0,
            failed_attempt_count: 0,
            lockout_until: None,
            last_login: 0,
            last_credential_reset: 0,
            created_at: current_time,
            updated_at: current_time,
            bump,
        }
    }

    // ------------------------------------------------------------------
    // Login policy
    // ------------------------------------------------------------------

    /// Locked while `now <= lockout_until`. An expired lockout is left in place
    /// and simply stops counting.
    pub fn is_locked(&self, now: i64) -> bool {
        matches!(self.lockout_until, Some(until) if now <= until)
    }

    /// Whole minutes until the lockout ends, rounded up, at least 1
    pub fn lockout_minutes_remaining(&self, now: i64) -> u32 {
        match self.lockout_until {
            Some(until) if now <= until => minutes_ceil(until - now),
            _ => 0,
        }
    }

    /// Reject the attempt outright while locked. The error carries the
    /// remaining minutes as its compared values: `("retry_in_minutes", n)`.
    pub fn check_not_locked(&self, now: i64) -> Result<()> {
        if self.is_locked(now) {
            let minutes = self.lockout_minutes_remaining(now);
            msg!("🔒 Account temporarily locked. Please try again in {} minutes.", minutes);
            return Err(error!(TerminalShareError::AccountLocked).with_values(("retry_in_minutes", minutes)));
        }
        Ok(())
    }

    pub fn record_login_success(&mut self, now: i64) {
        self.failed_attempt_count = 0;
        self.lockout_until = None;
        self.last_login = now;
        self.updated_at = now;
    }

    pub fn record_login_failure(&mut self, now: i64, policy: LockoutPolicy) -> Result<LoginOutcome> {
        let attempts = self.failed_attempt_count.saturating_add(1);
        self.failed_attempt_count = attempts;
        self.updated_at = now;

        if attempts >= policy.max_failed_attempts {
            let until = now
                .checked_add(policy.lockout_duration)
                .ok_or(TerminalShareError::MathOverflow)?;
            self.lockout_until = Some(until);
            return Ok(LoginOutcome::LockedOut {
                retry_in_minutes: minutes_ceil(policy.lockout_duration),
            });
        }

        Ok(LoginOutcome::Rejected {
            attempts_remaining: policy.max_failed_attempts - attempts,
        })
    }

    /// Full policy: lockout gate first, then the credential check
    pub fn attempt_login(&mut self, claimant: Pubkey, now: i64, policy: LockoutPolicy) -> Result<LoginOutcome> {
        self.check_not_locked(now)?;

        if claimant == self.credential {
            self.record_login_success(now);
            Ok(LoginOutcome::Authenticated)
        } else {
            self.record_login_failure(now, policy)
        }
    }

    /// Replace the login key; clears any lockout
    pub fn reset_credential(&mut self, new_credential: Pubkey, now: i64, cooldown: i64) -> Result<()> {
        if self.last_credential_reset != 0 && now < self.last_credential_reset.saturating_add(cooldown) {
            return Err(TerminalShareError::CredentialResetTooSoon.into());
        }

        self.credential = new_credential;
        self.failed_attempt_count = 0;
        self.lockout_until = None;
        self.last_credential_reset = now;
        self.updated_at = now;
        Ok(())
    }

    // ------------------------------------------------------------------
    // Investments
    // ------------------------------------------------------------------

    pub fn is_verified(&self) -> bool {
        self.verification_status == VerificationStatus::Verified
    }

    /// Gate a recorded investment: verified profile, amount within bounds,
    /// resulting total at the active model's minimum, and the registered
    /// referrer supplied when there is one. Returns the referral bonus owed.
    pub fn check_investment(
        &self,
        amount: u64,
        config: &PlatformConfig,
        referrer: Option<Pubkey>,
    ) -> Result<Option<u64>> {
        if !self.is_verified() {
            return Err(TerminalShareError::ProfileNotVerified.into());
        }

        validate_investment_amount(amount, 1, config.max_investment)?;
        let total = self.total_invested
            .checked_add(amount)
            .ok_or(TerminalShareError::MathOverflow)?;
        if total < config.min_investment() {
            msg!("Minimum investment is {}", config.min_investment());
            return Err(TerminalShareError::InvestmentBelowMinimum.into());
        }

        match (self.referrer, referrer) {
            (None, _) => Ok(None),
            (Some(_), None) => Err(TerminalShareError::ReferrerRequired.into()),
            (Some(expected), Some(supplied)) if expected != supplied => {
                Err(TerminalShareError::InvalidReferrer.into())
            }
            (Some(_), Some(_)) => Ok(Some(calculate_referral_bonus(amount))),
        }
    }

    /// Add to the invested total and recompute tier and projection.
    /// Returns the tier held before the investment.
    pub fn apply_investment(&mut self, amount: u64, model: ProfitModel, now: i64) -> Result<Tier> {
        let previous_tier = self.tier;

        let total = self.total_invested
            .checked_add(amount)
            .ok_or(TerminalShareError::MathOverflow)?;

        self.projected_monthly_profit = calculate_monthly_projection(model, total)?;
        self.total_invested = total;
        self.tier = Tier::for_amount(total);
        self.updated_at = now;

        Ok(previous_tier)
    }

    /// Recompute the projection after the platform switches models
    pub fn refresh_projection(&mut self, model: ProfitModel) -> Result<()> {
        self.projected_monthly_profit = calculate_monthly_projection(model, self.total_invested)?;
        Ok(())
    }

    pub fn credit_profit(&mut self, amount: u64, now: i64) -> Result<()> {
        self.total_profit = self.total_profit
            .checked_add(amount)
            .ok_or(TerminalShareError::MathOverflow)?;
        self.updated_at = now;
        Ok(())
    }

    pub fn add_referral(&mut self) -> Result<()> {
        self.referral_count = self.referral_count
            .checked_add(1)
            .ok_or(TerminalShareError::MathOverflow)?;
        Ok(())
    }

    pub fn add_referral_bonus(&mut self, amount: u64) -> Result<()> {
        self.referral_bonus = self.referral_bonus
            .checked_add(amount)
            .ok_or(TerminalShareError::MathOverflow)?;
        Ok(())
    }

    pub fn add_terminal(&mut self) -> Result<()> {
        self.terminal_count = self.terminal_count
            .checked_add(1)
            .ok_or(TerminalShareError::MathOverflow)?;
        Ok(())
    }

    // ------------------------------------------------------------------
    // Dashboard
    // ------------------------------------------------------------------

    pub fn dashboard(&self, terminals: Vec<TerminalSummary>, now: i64) -> Result<InvestorDashboard> {
        let terminals_monthly_revenue = terminals
            .iter()
            .try_fold(0u64, |sum, terminal| sum.checked_add(terminal.monthly_revenue))
            .ok_or(TerminalShareError::MathOverflow)?;

        let projected_yearly_profit = self.projected_monthly_profit
            .checked_mul(MONTHS_PER_YEAR)
            .ok_or(TerminalShareError::MathOverflow)?;

        Ok(InvestorDashboard {
            display_name: self.display_name.clone(),
            verification_status: self.verification_status,
            total_invested: self.total_invested,
            tier: self.tier,
            tier_label: self.tier.label().to_string(),
            rate_bps: self.tier.rate_bps(),
            projected_monthly_profit: self.projected_monthly_profit,
            projected_yearly_profit,
            total_profit: self.total_profit,
            referral_count: self.referral_count,
            referral_bonus: self.referral_bonus,
            is_locked: self.is_locked(now),
            terminals,
            terminals_monthly_revenue,
        })
    }
}

fn minutes_ceil(seconds: i64) -> u32 {
    let minutes = (seconds + SECONDS_PER_MINUTE - 1) / SECONDS_PER_MINUTE;
    minutes.clamp(1, u32::MAX as i64) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    const NOW: i64 = 1_750_000_000;

    fn units(whole: u64) -> u64 {
        whole * CURRENCY_UNIT
    }

    fn sample_profile() -> (InvestorProfile, Pubkey) {
        let credential = Pubkey::new_unique();
        let profile = InvestorProfile::new(
            Pubkey::new_unique(),
            credential,
            [7u8; 32],
            "Rahim Ahmed".to_string(),
            None,
            NOW - 86_400,
            255,
        );
        (profile, credential)
    }

    #[test]
    fn four_failures_stay_normal() {
        let (mut profile, _) = sample_profile();
        let policy = LockoutPolicy::default();
        let intruder = Pubkey::new_unique();

        for attempt in 1..=4u8 {
            let outcome = profile.attempt_login(intruder, NOW + attempt as i64, policy).unwrap();
            assert_eq!(outcome, LoginOutcome::Rejected { attempts_remaining: 5 - attempt });
        }

        assert_eq!(profile.failed_attempt_count, 4);
        assert_eq!(profile.lockout_until, None);
        assert!(!profile.is_locked(NOW + 5));
    }

    #[test]
    fn fifth_failure_locks_for_fifteen_minutes() {
        let (mut profile, _) = sample_profile();
        let policy = LockoutPolicy::default();
        let intruder = Pubkey::new_unique();

        for _ in 0..4 {
            profile.attempt_login(intruder, NOW, policy).unwrap();
        }
        let outcome = profile.attempt_login(intruder, NOW, policy).unwrap();

        assert_eq!(outcome, LoginOutcome::LockedOut { retry_in_minutes: 15 });
        assert_eq!(profile.failed_attempt_count, 5);
        assert_eq!(profile.lockout_until, Some(NOW + 15 * 60));
        assert!(profile.is_locked(NOW));
    }

    #[test]
    fn locked_account_rejects_even_the_right_credential() {
        let (mut profile, credential) = sample_profile();
        let policy = LockoutPolicy::default();
        let intruder = Pubkey::new_unique();
        for _ in 0..5 {
            profile.attempt_login(intruder, NOW, policy).unwrap();
        }

        let err = profile.attempt_login(credential, NOW + 60, policy).unwrap_err();
        assert_eq!(err, anchor_lang::error::Error::from(TerminalShareError::AccountLocked));

        match err {
            anchor_lang::error::Error::AnchorError(anchor_error) => match &anchor_error.compared_values {
                Some(anchor_lang::error::ComparedValues::Values((label, minutes))) => {
                    assert_eq!(label, "retry_in_minutes");
                    assert_eq!(minutes, "14");
                }
                other => panic!("unexpected compared values: {:?}", other),
            },
            other => panic!("unexpected error: {:?}", other),
        }

        // Nothing was consulted or counted
        assert_eq!(profile.failed_attempt_count, 5);
        assert_eq!(profile.last_login, 0);
        assert_eq!(profile.lockout_until, Some(NOW + 15 * 60));
    }

    #[test]
    fn lockout_boundary_is_inclusive() {
        let (mut profile, credential) = sample_profile();
        let policy = LockoutPolicy::default();
        for _ in 0..5 {
            profile.attempt_login(Pubkey::new_unique(), NOW, policy).unwrap();
        }
        let until = NOW + 15 * 60;

        assert!(profile.attempt_login(credential, until, policy).is_err());
        assert_eq!(
            profile.attempt_login(credential, until + 1, policy).unwrap(),
            LoginOutcome::Authenticated
        );
    }

    #[test]
    fn success_after_expiry_resets_counter() {
        let (mut profile, credential) = sample_profile();
        let policy = LockoutPolicy::default();
        for _ in 0..5 {
            profile.attempt_login(Pubkey::new_unique(), NOW, policy).unwrap();
        }

        let later = NOW + 15 * 60 + 30;
        let outcome = profile.attempt_login(credential, later, policy).unwrap();

        assert_eq!(outcome, LoginOutcome::Authenticated);
        assert_eq!(profile.failed_attempt_count, 0);
        assert_eq!(profile.lockout_until, None);
        assert_eq!(profile.last_login, later);
    }

    #[test]
    fn failure_after_expiry_locks_again() {
        let (mut profile, _) = sample_profile();
        let policy = LockoutPolicy::default();
        for _ in 0..5 {
            profile.attempt_login(Pubkey::new_unique(), NOW, policy).unwrap();
        }

        let later = NOW + 15 * 60 + 1;
        let outcome = profile.attempt_login(Pubkey::new_unique(), later, policy).unwrap();

        assert_eq!(outcome, LoginOutcome::LockedOut { retry_in_minutes: 15 });
        assert_eq!(profile.failed_attempt_count, 6);
        assert_eq!(profile.lockout_until, Some(later + 15 * 60));
    }

    #[test]
    fn success_clears_partial_failures() {
        let (mut profile, credential) = sample_profile();
        let policy = LockoutPolicy::default();
        profile.attempt_login(Pubkey::new_unique(), NOW, policy).unwrap();
        profile.attempt_login(Pubkey::new_unique(), NOW, policy).unwrap();

        profile.attempt_login(credential, NOW + 10, policy).unwrap();
        assert_eq!(profile.failed_attempt_count, 0);
    }

    #[test]
    fn remaining_minutes_round_up() {
        let (mut profile, _) = sample_profile();
        profile.lockout_until = Some(NOW + 61);

        assert_eq!(profile.lockout_minutes_remaining(NOW), 2);
        assert_eq!(profile.lockout_minutes_remaining(NOW + 60), 1);
        assert_eq!(profile.lockout_minutes_remaining(NOW + 61), 1);
        assert_eq!(profile.lockout_minutes_remaining(NOW + 62), 0);
    }

    #[test]
    fn custom_policy_threshold() {
        let (mut profile, _) = sample_profile();
        let policy = LockoutPolicy { max_failed_attempts: 2, lockout_duration: 120 };

        assert_eq!(
            profile.attempt_login(Pubkey::new_unique(), NOW, policy).unwrap(),
            LoginOutcome::Rejected { attempts_remaining: 1 }
        );
        assert_eq!(
            profile.attempt_login(Pubkey::new_unique(), NOW, policy).unwrap(),
            LoginOutcome::LockedOut { retry_in_minutes: 2 }
        );
    }

    #[test]
    fn credential_reset_respects_cooldown() {
        let (mut profile, _) = sample_profile();
        for _ in 0..5 {
            profile.attempt_login(Pubkey::new_unique(), NOW, LockoutPolicy::default()).unwrap();
        }

        let fresh = Pubkey::new_unique();
        profile.reset_credential(fresh, NOW, CREDENTIAL_RESET_COOLDOWN).unwrap();
        assert_eq!(profile.credential, fresh);
        assert_eq!(profile.failed_attempt_count, 0);
        assert!(!profile.is_locked(NOW));

        assert_eq!(
            profile.reset_credential(Pubkey::new_unique(), NOW + 59, CREDENTIAL_RESET_COOLDOWN).unwrap_err(),
            anchor_lang::error::Error::from(TerminalShareError::CredentialResetTooSoon)
        );
        assert!(profile.reset_credential(Pubkey::new_unique(), NOW + 60, CREDENTIAL_RESET_COOLDOWN).is_ok());
    }

    fn verified_profile(referrer: Option<Pubkey>) -> InvestorProfile {
        let (mut profile, _) = sample_profile();
        profile.verification_status = VerificationStatus::Verified;
        profile.referrer = referrer;
        profile
    }

    fn sample_config() -> PlatformConfig {
        PlatformConfig::new(Pubkey::new_unique(), ProfitModel::TierShare, 254)
    }

    #[test]
    fn investment_requires_verified_profile() {
        let (profile, _) = sample_profile();
        assert_eq!(
            profile.check_investment(units(5_000), &sample_config(), None).unwrap_err(),
            anchor_lang::error::Error::from(TerminalShareError::ProfileNotVerified)
        );
    }

    #[test]
    fn investment_minimum_applies_to_resulting_total() {
        let mut profile = verified_profile(None);
        let mut config = sample_config();

        assert_eq!(
            profile.check_investment(units(1_999), &config, None).unwrap_err(),
            anchor_lang::error::Error::from(TerminalShareError::InvestmentBelowMinimum)
        );
        assert_eq!(profile.check_investment(units(2_000), &config, None).unwrap(), None);

        config.profit_model = ProfitModel::Commission;
        assert!(profile.check_investment(units(1_900), &config, None).is_ok());

        // Top-ups below the minimum are fine once the total clears it
        config.profit_model = ProfitModel::TierShare;
        profile.total_invested = units(1_500);
        assert!(profile.check_investment(units(500), &config, None).is_ok());
        assert!(profile.check_investment(units(499), &config, None).is_err());
    }

    #[test]
    fn investment_bounds() {
        let profile = verified_profile(None);
        let config = sample_config();

        assert!(profile.check_investment(0, &config, None).is_err());
        assert_eq!(
            profile.check_investment(config.max_investment + 1, &config, None).unwrap_err(),
            anchor_lang::error::Error::from(TerminalShareError::InvestmentAboveMaximum)
        );
    }

    #[test]
    fn referred_investment_needs_the_registered_referrer() {
        let referrer = Pubkey::new_unique();
        let profile = verified_profile(Some(referrer));
        let config = sample_config();

        assert_eq!(
            profile.check_investment(units(25_000), &config, None).unwrap_err(),
            anchor_lang::error::Error::from(TerminalShareError::ReferrerRequired)
        );
        assert_eq!(
            profile.check_investment(units(25_000), &config, Some(Pubkey::new_unique())).unwrap_err(),
            anchor_lang::error::Error::from(TerminalShareError::InvalidReferrer)
        );
        assert_eq!(
            profile.check_investment(units(25_000), &config, Some(referrer)).unwrap(),
            Some(31_250)
        );
    }

    #[test]
    fn unreferred_investment_ignores_supplied_referrer() {
        let profile = verified_profile(None);
        assert_eq!(
            profile.check_investment(units(25_000), &sample_config(), Some(Pubkey::new_unique())).unwrap(),
            None
        );
    }

    #[test]
    fn investments_move_tier_and_projection() {
        let (mut profile, _) = sample_profile();

        let before = profile.apply_investment(units(5_000), ProfitModel::TierShare, NOW).unwrap();
        assert_eq!(before, Tier::One);
        assert_eq!(profile.tier, Tier::One);

        let before = profile.apply_investment(units(20_000), ProfitModel::TierShare, NOW).unwrap();
        assert_eq!(before, Tier::One);
        assert_eq!(profile.tier, Tier::Two);
        assert_eq!(profile.total_invested, units(25_000));
        assert_eq!(profile.projected_monthly_profit, units(18_750));
    }

    #[test]
    fn switching_models_refreshes_projection() {
        let (mut profile, _) = sample_profile();
        profile.apply_investment(units(1_900), ProfitModel::Commission, NOW).unwrap();
        assert_eq!(profile.projected_monthly_profit, 3_610 + units(7_200));

        profile.refresh_projection(ProfitModel::TierShare).unwrap();
        assert_eq!(profile.projected_monthly_profit, units(570));
    }

    #[test]
    fn dashboard_aggregates_terminals() {
        let (mut profile, _) = sample_profile();
        profile.apply_investment(units(25_000), ProfitModel::TierShare, NOW).unwrap();
        profile.credit_profit(units(6_250), NOW).unwrap();
        for _ in 0..3 {
            profile.add_referral().unwrap();
        }
        profile.add_referral_bonus(31_250).unwrap();

        let terminals = vec![
            TerminalSummary {
                terminal_id: 1,
                name: "Rangpur Hub".to_string(),
                location: "Rangpur".to_string(),
                monthly_revenue: units(12_500),
                co_investor_count: 5,
                is_active: true,
            },
            TerminalSummary {
                terminal_id: 2,
                name: "Khulna Central".to_string(),
                location: "Khulna".to_string(),
                monthly_revenue: units(10_000),
                co_investor_count: 4,
                is_active: true,
            },
        ];

        let dashboard = profile.dashboard(terminals, NOW).unwrap();
        assert_eq!(dashboard.tier_label, "Tier 2");
        assert_eq!(dashboard.rate_bps, 2_500);
        assert_eq!(dashboard.total_invested, units(25_000));
        assert_eq!(dashboard.total_profit, units(6_250));
        assert_eq!(dashboard.projected_yearly_profit, units(225_000));
        assert_eq!(dashboard.referral_count, 3);
        assert_eq!(dashboard.referral_bonus, 31_250);
        assert_eq!(dashboard.terminals.len(), 2);
        assert_eq!(dashboard.terminals_monthly_revenue, units(22_500));
        assert!(!dashboard.is_locked);
    }
}
