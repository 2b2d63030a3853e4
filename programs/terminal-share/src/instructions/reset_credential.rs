// instructions/reset_credential.rs
use anchor_lang::prelude::*;
use crate::constants::*;
use crate::state::*;

/// Replace an investor's login key after an off-chain reset request.
/// Rate limited per profile by `credential_reset_cooldown`.
pub fn handler(ctx: Context<ResetCredential>, new_credential: Pubkey) -> Result<()> {
    let clock = Clock::get()?;
    let platform_config = &ctx.accounts.platform_config;
    platform_config.require_authority(ctx.accounts.authority.key())?;

    let profile = &mut ctx.accounts.profile;
    profile.reset_credential(
        new_credential,
        clock.unix_timestamp,
        platform_config.credential_reset_cooldown,
    )?;

    emit!(crate::CredentialReset {
        profile: profile.key(),
        reset_at: clock.unix_timestamp,
    });

    msg!("🔑 Credential reset for {}", profile.key());
    Ok(())
}

#[derive(Accounts)]
pub struct ResetCredential<'info> {
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
