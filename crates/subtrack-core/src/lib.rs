//! Core subscription lifecycle logic.
//!
//! This crate holds the pure domain rules: the plan catalog, the renewal
//! continuity resolver, the expiry calculator and the point-in-time status
//! resolver. Everything here is side-effect free; persistence and transport
//! live in the `subtrack-store` and `subtrack-server` crates.
//!
//! # Example
//!
//! ```
//! use chrono::NaiveDate;
//! use subtrack_core::{compute_expiry, resolve_start, Validity};
//!
//! let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
//! let effective = resolve_start(&[], start, "FREE");
//! let valid_till = compute_expiry(effective, Validity::Finite(30));
//! assert_eq!(valid_till, NaiveDate::from_ymd_opt(2024, 1, 31).unwrap());
//! ```

pub mod dates;
pub mod defaults;
mod expiry;
mod plan;
mod renewal;
mod status;
mod subscription;

pub use dates::{parse_date, today, DateError};
pub use expiry::compute_expiry;
pub use plan::{Plan, PlanCatalog, Validity};
pub use renewal::resolve_start;
pub use status::{resolve_status, PlanStatus};
pub use subscription::SubscriptionPeriod;
