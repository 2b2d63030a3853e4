// instructions/login.rs
use anchor_lang::prelude::*;
use crate::constants::*;
use crate::state::*;

/// Login attempt under the lockout policy.
///
/// The profile is a writable account, so the runtime serializes every
/// transaction touching it: the lockout check, the credential check and the
/// counter update happen as one step and concurrent attempts cannot
/// under-count.
///
/// A wrong credential returns `Ok` with a `Rejected`/`LockedOut` outcome,
/// because an error would roll back the counter. An attempt against an
/// account that is already locked changes nothing and fails with
/// `AccountLocked`.
pub fn handler(ctx: Context<Login>, _email_hash: [u8; 32]) -> Result<LoginOutcome> {
    let clock = Clock::get()?;
    let now = clock.unix_timestamp;
    let policy = ctx.accounts.platform_config.lockout_policy();
    let claimant = ctx.accounts.claimant.key();
    let profile = &mut ctx.accounts.profile;

    let outcome = profile.attempt_login(claimant, now, policy)?;

    match outcome {
        LoginOutcome::Authenticated => {
            emit!(crate::LoginSucceeded {
                profile: profile.key(),
                logged_in_at: now,
            });
            msg!("✅ Login successful for {}", profile.key());
        }
        LoginOutcome::Rejected { attempts_remaining } => {
            emit!(crate::LoginFailed {
                profile: profile.key(),
                failed_attempt_count: profile.failed_attempt_count,
                attempts_remaining,
            });
            msg!(
                "❌ Invalid credential for {} ({} attempts remaining)",
                profile.key(),
                attempts_remaining
            );
        }
        LoginOutcome::LockedOut { retry_in_minutes } => {
            emit!(crate::AccountLockedOut {
                profile: profile.key(),
                failed_attempt_count: profile.failed_attempt_count,
                lockout_until: profile.lockout_until.unwrap_or(now),
            });
            msg!(
                "🔒 Too many failed login attempts. Account locked for {} minutes.",
                retry_in_minutes
            );
        }
    }

    Ok(outcome)
}

#[derive(Accounts)]
#[instruction(email_hash: [u8; 32])]
pub struct Login<'info> {
    /// Whoever claims the account; must be the profile's credential key to succeed
    pub claimant: Signer<'info>,

    #[account(
        mut,
        seeds = [PROFILE_SEED, email_hash.as_ref()],
        bump = profile.bump
    )]
    pub profile: Account<'info, InvestorProfile>,

    #[account(
        seeds = [PLATFORM_CONFIG_SEED],
        bump = platform_config.bump
    )]
    pub platform_config: Account<'info, PlatformConfig>,
}
