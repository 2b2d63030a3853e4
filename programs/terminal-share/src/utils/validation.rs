use anchor_lang::prelude::*;
use anchor_lang::solana_program::hash::hash;
use crate::constants::*;
use crate::error::*;

/// Lowercase and trim, the form that gets hashed into the profile seed
pub fn normalize_email(email: &str) -> String {
    email.trim().to_ascii_lowercase()
}

/// SHA-256 of the normalized email
pub fn email_digest(email: &str) -> [u8; 32] {
    hash(normalize_email(email).as_bytes()).to_bytes()
}

fn is_local_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '%' | '+' | '-')
}

fn is_domain_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '.' | '-')
}

/// Same acceptance as `^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$`
pub fn is_valid_email(email: &str) -> bool {
    let email = normalize_email(email);
    if email.is_empty() || email.len() > MAX_EMAIL_LEN {
        return false;
    }

    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || !local.chars().all(is_local_char) {
        return false;
    }

    // The TLD cannot contain a dot, so it starts after the last one
    let Some((host, tld)) = domain.rsplit_once('.') else {
        return false;
    };
    !host.is_empty()
        && host.chars().all(is_domain_char)
        && tld.len() >= 2
        && tld.chars().all(|c| c.is_ascii_alphabetic())
}

/// Validate email format and that the caller hashed it the same way we do
pub fn validate_email(email: &str, email_hash: &[u8; 32]) -> Result<()> {
    if !is_valid_email(email) {
        return Err(TerminalShareError::InvalidEmail.into());
    }
    if email_digest(email) != *email_hash {
        return Err(TerminalShareError::EmailHashMismatch.into());
    }
    Ok(())
}

/// Validate display name and return it trimmed
pub fn validate_display_name(name: &str) -> Result<String> {
    let trimmed = name.trim();
    let len = trimmed.chars().count();

    if len < MIN_DISPLAY_NAME_LEN || trimmed.len() > MAX_DISPLAY_NAME_LEN {
        return Err(TerminalShareError::InvalidDisplayName.into());
    }
    if trimmed.chars().any(|c| FORBIDDEN_NAME_CHARS.contains(&c)) {
        return Err(TerminalShareError::InvalidDisplayName.into());
    }

    Ok(trimmed.to_string())
}

/// Validate terminal name or location and return it trimmed
pub fn validate_terminal_text(text: &str, max_len: usize) -> Result<String> {
    let trimmed = text.trim();
    if trimmed.is_empty() || trimmed.len() > max_len {
        return Err(TerminalShareError::InvalidTerminalName.into());
    }
    Ok(trimmed.to_string())
}

/// Validate amount against minimum and maximum
pub fn validate_investment_amount(amount: u64, min_amount: u64, max_amount: u64) -> Result<()> {
    if amount < min_amount {
        return Err(TerminalShareError::InvestmentBelowMinimum.into());
    }
    if amount > max_amount {
        return Err(TerminalShareError::InvestmentAboveMaximum.into());
    }
    Ok(())
}

/// Validate projection window for the commission model
pub fn validate_timeframe(months: u16) -> Result<()> {
    if !(MIN_TIMEFRAME_MONTHS..=MAX_TIMEFRAME_MONTHS).contains(&months) {
        return Err(TerminalShareError::InvalidTimeframe.into());
    }
    Ok(())
}

/// Validate lockout policy bounds
pub fn validate_lockout_policy(max_failed_attempts: u8, lockout_duration: i64) -> Result<()> {
    if max_failed_attempts == 0 || max_failed_attempts > MAX_FAILED_ATTEMPTS_LIMIT {
        return Err(TerminalShareError::InvalidLockoutPolicy.into());
    }
    if !(MIN_LOCKOUT_DURATION..=MAX_LOCKOUT_DURATION).contains(&lockout_duration) {
        return Err(TerminalShareError::InvalidLockoutPolicy.into());
    }
    Ok(())
}

/// Validate referrer profile against the profile being registered
pub fn validate_referrer(profile: Pubkey, referrer: Option<Pubkey>) -> Result<()> {
    if let Some(referrer_key) = referrer {
        if referrer_key == profile {
            return Err(TerminalShareError::CannotReferYourself.into());
        }
        if referrer_key == Pubkey::default() {
            return Err(TerminalShareError::InvalidReferrer.into());
        }
    }
    Ok(())
}
