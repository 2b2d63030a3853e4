// instructions/register.rs
use anchor_lang::prelude::*;
use crate::constants::*;
use crate::state::*;
use crate::error::*;
use crate::utils::*;

/// Create an investor profile keyed by the hash of the investor's email
pub fn handler(
    ctx: Context<RegisterInvestor>,
    email_hash: [u8; 32],
    email: String,
    display_name: String,
    credential: Pubkey,
) -> Result<()> {
    let clock = Clock::get()?;
    let platform_config = &ctx.accounts.platform_config;
    let platform_state = &mut ctx.accounts.platform_state;

    platform_state.require_active()?;
    if !platform_config.registrations_open {
        return Err(TerminalShareError::RegistrationsClosed.into());
    }

    validate_email(&email, &email_hash)?;
    let display_name = validate_display_name(&display_name)?;

    let profile_key = ctx.accounts.profile.key();
    let referrer = match ctx.accounts.referrer_profile.as_mut() {
        Some(referrer_profile) => {
            let referrer_key = referrer_profile.key();
            validate_referrer(profile_key, Some(referrer_key))?;
            referrer_profile.add_referral()?;
            Some(referrer_key)
        }
        None => None,
    };

    let profile = &mut ctx.accounts.profile;
    **profile = InvestorProfile::new(
        ctx.accounts.owner.key(),
        credential,
        email_hash,
        display_name,
        referrer,
        clock.unix_timestamp,
        ctx.bumps.profile,
    );

    platform_state.add_investor()?;

    emit!(crate::InvestorRegistered {
        profile: profile_key,
        owner: profile.owner,
        referrer,
        registered_at: clock.unix_timestamp,
    });

    msg!("👤 Investor registered: {}", profile_key);
    if let Some(referrer_key) = referrer {
        msg!("Referred by: {}", referrer_key);
    }

    Ok(())
}

#[derive(Accounts)]
#[instruction(email_hash: [u8; 32])]
pub struct RegisterInvestor<'info> {
    /// Wallet registering and paying rent
    #[account(mut)]
    pub owner: Signer<'info>,

    #[account(
        init,
        payer = owner,
        space = InvestorProfile::SIZE,
        seeds = [PROFILE_SEED, email_hash.as_ref()],
        bump
    )]
    pub profile: Account<'info, InvestorProfile>,

    /// Existing profile that referred this investor
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

    pub system_program: Program<'info, System>,
}
