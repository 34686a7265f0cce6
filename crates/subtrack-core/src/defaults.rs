//! Default configuration values.
//!
//! Centralized default constants for use across all crates.

use crate::plan::{Plan, Validity};

// ============================================================================
// Server Defaults
// ============================================================================

/// Default HTTP listen address.
pub const DEFAULT_LISTEN: &str = "127.0.0.1:3000";

// ============================================================================
// Database Pool Defaults
// ============================================================================

/// Default maximum connections in the SQL pool.
pub const DEFAULT_DB_MAX_CONNECTIONS: u32 = 10;
/// Default minimum connections to keep open.
pub const DEFAULT_DB_MIN_CONNECTIONS: u32 = 1;
/// Default connection acquire timeout in seconds.
pub const DEFAULT_DB_CONNECT_TIMEOUT_SECS: u64 = 30;

// ============================================================================
// Plan Catalog Defaults
// ============================================================================

/// The distinguished free-tier plan code.
///
/// A subscription on this plan never constrains the start date of a later
/// paid plan, and status queries never report it.
pub const FREE_PLAN_ID: &str = "FREE";

/// Built-in plan catalog seed, used when the config file lists no plans.
pub fn default_plans() -> Vec<Plan> {
    vec![
        Plan::new(FREE_PLAN_ID, Validity::Unbounded, 0),
        Plan::new("TRIAL", Validity::Finite(7), 0),
        Plan::new("LITE_1M", Validity::Finite(30), 100),
        Plan::new("PRO_1M", Validity::Finite(30), 200),
        Plan::new("LITE_6M", Validity::Finite(180), 500),
        Plan::new("PRO_6M", Validity::Finite(180), 900),
    ]
}
