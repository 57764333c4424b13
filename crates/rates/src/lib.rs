//! `stayforge-rates`
//!
//! **Responsibility:** seasonal/weekend rate plans and the deterministic
//! price resolver. The resolver is total: it always returns a usable price
//! rather than failing a sync.

pub mod plan;
pub mod resolver;

pub use plan::RatePlan;
pub use resolver::{DEFAULT_NIGHTLY_PRICE, resolve_price};
