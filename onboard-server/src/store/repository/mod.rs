//! Repository Module
//!
//! Cross-entity rules on top of the raw stores: field validation and
//! foreign-key checks. Every failing check returns early with `?`.

pub mod business;
pub mod contract;
pub mod customer;
pub mod payment;

// Re-exports
pub use business::BusinessRepository;
pub use contract::ContractRepository;
pub use customer::CustomerRepository;
pub use payment::PaymentRepository;

use std::sync::Arc;

use shared::models::{Business, Customer, CustomerId, Payment, Terms};

use super::{EntityStore, MemoryStore, Resource, StoreError, StoreResult};

/// One store per entity kind
#[derive(Clone, Default)]
pub struct Stores {
    pub customers: Arc<MemoryStore<Customer>>,
    pub businesses: Arc<MemoryStore<Business>>,
    pub contracts: Arc<MemoryStore<Terms>>,
    pub payments: Arc<MemoryStore<Payment>>,
}

impl Stores {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Foreign-key check: the referenced customer must exist
fn require_customer(customers: &MemoryStore<Customer>, id: CustomerId) -> StoreResult<()> {
    if !customers.contains(&id) {
        return Err(StoreError::missing_reference(Resource::Customer, id));
    }
    Ok(())
}

/// Foreign-key check: the business must exist and belong to `customer_id`
fn require_owned_business(
    businesses: &MemoryStore<Business>,
    legal_id: &str,
    customer_id: CustomerId,
) -> StoreResult<()> {
    let business = businesses
        .get(&legal_id.to_string())
        .map_err(|_| StoreError::missing_reference(Resource::Business, legal_id))?;
    if business.customer_id != customer_id {
        return Err(StoreError::ForeignBusiness {
            legal_id: legal_id.to_string(),
            customer_id,
        });
    }
    Ok(())
}
