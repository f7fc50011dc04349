//! Data models
//!
//! Shared between onboard-server and API clients.
//! Customer and contract ids are `u64`, assigned by the caller; businesses
//! are keyed by their legal id; payments by the (customer, business) pair.

pub mod business;
pub mod customer;
pub mod payment;
pub mod terms;

// Re-exports
pub use business::*;
pub use customer::*;
pub use payment::*;
pub use terms::*;
