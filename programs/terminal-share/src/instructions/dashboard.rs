// instructions/dashboard.rs
use anchor_lang::prelude::*;
use crate::constants::*;
use crate::state::*;

/// Assemble the investor dashboard. Terminal accounts are passed as remaining
/// accounts; anything that is not a terminal listing this profile is skipped.
pub fn handler(ctx: Context<GetDashboard>) -> Result<InvestorDashboard> {
    let clock = Clock::get()?;
    let profile = &ctx.accounts.profile;
    let terminals = collect_terminal_summaries(ctx.remaining_accounts, profile.key());

    let dashboard = profile.dashboard(terminals, clock.unix_timestamp)?;

    msg!(
        "DASHBOARD: profile={}, invested={}, tier={}, profit={}, terminals={}, terminal_revenue={}",
        profile.key(),
        dashboard.total_invested,
        dashboard.tier_label,
        dashboard.total_profit,
        dashboard.terminals.len(),
        dashboard.terminals_monthly_revenue
    );
    Ok(dashboard)
}

/// Read terminal summaries for a profile out of untrusted accounts
pub fn collect_terminal_summaries(accounts: &[AccountInfo], profile: Pubkey) -> Vec<TerminalSummary> {
    let mut summaries = Vec::new();
    let mut seen: Vec<Pubkey> = Vec::new();

    for (index, account_info) in accounts.iter().enumerate() {
        if summaries.len() >= MAX_DASHBOARD_TERMINALS {
            msg!("⚠️ Dashboard terminal limit reached, {} accounts ignored", accounts.len() - index);
            break;
        }
        if account_info.owner != &crate::ID {
            msg!("⚠️ Account {} is not owned by this program", index);
            continue;
        }
        if seen.contains(account_info.key) {
            msg!("⚠️ Account {} passed more than once", index);
            continue;
        }
        seen.push(*account_info.key);

        let data = match account_info.try_borrow_data() {
            Ok(data) => data,
            Err(_) => {
                msg!("⚠️ Account {} data unavailable", index);
                continue;
            }
        };
        match Terminal::try_deserialize(&mut &data[..]) {
            Ok(terminal) if terminal.has_investor(&profile) => summaries.push(terminal.summary()),
            Ok(terminal) => {
                msg!("⚠️ Terminal {} does not list this investor", terminal.terminal_id);
            }
            Err(_) => {
                msg!("❌ Account {} is not a terminal", index);
            }
        }
    }

    summaries
}

#[derive(Accounts)]
pub struct GetDashboard<'info> {
    #[account(
        seeds = [PROFILE_SEED, profile.email_hash.as_ref()],
        bump = profile.bump
    )]
    pub profile: Account<'info, InvestorProfile>,
}
