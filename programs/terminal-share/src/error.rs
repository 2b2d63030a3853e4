// error.rs
use anchor_lang::prelude::*;

#[error_code]
pub enum TerminalShareError {
    // 📝 VALIDATION
    #[msg("Invalid email format")]
    InvalidEmail,

    #[msg("Email hash does not match the normalized email")]
    EmailHashMismatch,

    #[msg("Name must be 2-32 characters without angle brackets, braces, square brackets or slashes")]
    InvalidDisplayName,

    #[msg("Investment amount is below the minimum")]
    InvestmentBelowMinimum,

    #[msg("Investment amount is above the maximum")]
    InvestmentAboveMaximum,

    #[msg("Timeframe must be between 3 and 60 months")]
    InvalidTimeframe,

    #[msg("Terminal name and location must be 1-32 characters")]
    InvalidTerminalName,

    #[msg("Invalid lockout policy")]
    InvalidLockoutPolicy,

    #[msg("Profile is not verified")]
    ProfileNotVerified,

    // 🤝 REFERRALS
    #[msg("Cannot refer yourself")]
    CannotReferYourself,

    #[msg("Invalid referrer")]
    InvalidReferrer,

    #[msg("Referrer profile must be supplied")]
    ReferrerRequired,

    // 🔐 LOGIN POLICY
    #[msg("Account temporarily locked. Retry after the reported number of minutes")]
    AccountLocked,

    #[msg("Please wait before requesting another credential reset")]
    CredentialResetTooSoon,

    // 🛰️ TERMINALS
    #[msg("Terminal already has the maximum number of co-investors")]
    TerminalFull,

    #[msg("Investor already assigned to this terminal")]
    InvestorAlreadyAssigned,

    #[msg("Terminal is not active")]
    TerminalInactive,

    // 🚫 ADMIN & PLATFORM
    #[msg("Unauthorized admin action")]
    UnauthorizedAdmin,

    #[msg("Registrations are closed")]
    RegistrationsClosed,

    #[msg("Platform is paused")]
    PlatformPaused,

    // 🧮 MISC
    #[msg("Math overflow")]
    MathOverflow,
}
