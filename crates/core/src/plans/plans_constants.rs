/// Plan identifiers
///
/// These match the plan ids issued by the billing service. Anything else
/// coming out of a subscription record is unrecognized and resolves to
/// the free tier.

/// Free tier: capped trade log, education content only.
pub const PLAN_ID_FREE: &str = "free";

/// Monthly paid tier: unbounded trade log plus the full feature set.
pub const PLAN_ID_PRO: &str = "pro";

/// One-time-purchase tier: same features as pro, no renewal.
pub const PLAN_ID_LIFETIME: &str = "lifetime";

/// Entry cap for the free tier in the reference configuration.
pub const FREE_PLAN_MAX_ENTRIES: u32 = 30;

/// Feature flags
pub const FEATURE_EDUCATION: &str = "education";
pub const FEATURE_ADVANCED_STATS: &str = "advancedStats";
pub const FEATURE_LEADERBOARD: &str = "leaderboard";
pub const FEATURE_EXPORT: &str = "export";
