// constants.rs

// ============================================================================
// MONEY
// ============================================================================

/// Minor units per whole currency unit (two decimals)
pub const CURRENCY_UNIT: u64 = 100;

/// Rates are expressed in basis points
pub const BASIS_POINTS: u64 = 10_000;

pub const DAYS_PER_MONTH: u64 = 30;
pub const MONTHS_PER_YEAR: u64 = 12;

// ============================================================================
// TIER SHARE MODEL
// ============================================================================

/// Number of profit-share tiers
pub const TIER_COUNT: usize = 3;

/// Inclusive upper bound of each band, in minor units. Tier 3 is unbounded.
pub const TIER_UPPER_BOUNDS: [u64; TIER_COUNT - 1] = [
    10_000 * CURRENCY_UNIT, // Tier 1: up to 10,000
    50_000 * CURRENCY_UNIT, // Tier 2: up to 50,000
];

/// Profit share per tier in basis points
pub const TIER_RATES: [u16; TIER_COUNT] = [1_000, 2_500, 5_000]; // 10%, 25%, 50%

/// Average hours a terminal is rented per day (rural usage data)
pub const AVERAGE_DAILY_USAGE_HOURS: u64 = 3;

/// Minimum investment for the tier share model
pub const TIER_SHARE_MIN_INVESTMENT: u64 = 2_000 * CURRENCY_UNIT;

// ============================================================================
// COMMISSION MODEL
// ============================================================================

/// Minimum investment for the commission model
pub const COMMISSION_MIN_INVESTMENT: u64 = 1_900 * CURRENCY_UNIT;

/// Amounts up to this threshold earn the low commission rate
pub const COMMISSION_THRESHOLD: u64 = 15_000 * CURRENCY_UNIT;

/// Monthly commission in basis points: low band, high band
pub const COMMISSION_RATES: [u16; 2] = [190, 500]; // 1.9%, 5%

/// Device rental assumptions
pub const RENTAL_HOURS_PER_DAY: u64 = 8;
pub const RENTAL_RATE_PER_HOUR: u64 = 30 * CURRENCY_UNIT;

/// Allowed projection window in months
pub const MIN_TIMEFRAME_MONTHS: u16 = 3;
pub const MAX_TIMEFRAME_MONTHS: u16 = 60;

// ============================================================================
// INVESTMENTS & REFERRALS
// ============================================================================

/// Largest single investment the platform records
pub const MAX_SINGLE_INVESTMENT: u64 = 1_000_000 * CURRENCY_UNIT;

/// Referral bonus paid to the referrer, basis points of the invested amount
pub const REFERRAL_BONUS_BPS: u16 = 125; // 1.25%

// ============================================================================
// LOGIN POLICY
// ============================================================================

/// Consecutive failures before the account is locked
pub const DEFAULT_MAX_FAILED_ATTEMPTS: u8 = 5;

/// Lockout length in seconds (15 minutes)
pub const DEFAULT_LOCKOUT_DURATION: i64 = 15 * 60;

/// Bounds accepted by update_lockout_policy
pub const MAX_FAILED_ATTEMPTS_LIMIT: u8 = 20;
pub const MIN_LOCKOUT_DURATION: i64 = 60;
pub const MAX_LOCKOUT_DURATION: i64 = 86_400;

/// Minimum spacing between two credential resets (seconds)
pub const CREDENTIAL_RESET_COOLDOWN: i64 = 60;

pub const SECONDS_PER_MINUTE: i64 = 60;

// ============================================================================
// RECORD LIMITS
// ============================================================================

pub const MIN_DISPLAY_NAME_LEN: usize = 2;
pub const MAX_DISPLAY_NAME_LEN: usize = 32;
pub const MAX_TERMINAL_NAME_LEN: usize = 32;
pub const MAX_LOCATION_LEN: usize = 32;
pub const MAX_EMAIL_LEN: usize = 254;

/// Co-investors per terminal
pub const MAX_TERMINAL_INVESTORS: usize = 16;

/// Terminals listed in one dashboard (return data is capped at 1 KiB)
pub const MAX_DASHBOARD_TERMINALS: usize = 8;

/// Characters rejected in display names
pub const FORBIDDEN_NAME_CHARS: [char; 8] = ['<', '>', '{', '}', '[', ']', '\\', '/'];

// ============================================================================
// PDA SEEDS
// ============================================================================

pub const PLATFORM_CONFIG_SEED: &[u8] = b"platform_config";
pub const PLATFORM_STATE_SEED: &[u8] = b"platform_state";
pub const PROFILE_SEED: &[u8] = b"profile";
pub const TERMINAL_SEED: &[u8] = b"terminal";
