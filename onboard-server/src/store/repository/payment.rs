//! Payment Repository

use std::sync::Arc;

use shared::models::{
    Business, Customer, CustomerId, Payment, PaymentCreate, PaymentKey, PaymentUpdate,
};

use super::{require_customer, require_owned_business};
use crate::store::validation::{
    MAX_NAME_LEN, MAX_SHORT_TEXT_LEN, validate_optional_text, validate_required_text,
};
use crate::store::{EntityStore, Filter, MemoryStore, Resource, StoreError, StoreResult};

/// Payment records of one customer
struct PaymentsOf(CustomerId);

impl Filter<Payment> for PaymentsOf {
    fn matches(&self, payment: &Payment) -> bool {
        payment.customer_id == self.0
    }
}

#[derive(Clone)]
pub struct PaymentRepository {
    payments: Arc<MemoryStore<Payment>>,
    customers: Arc<MemoryStore<Customer>>,
    businesses: Arc<MemoryStore<Business>>,
}

impl PaymentRepository {
    pub fn new(
        payments: Arc<MemoryStore<Payment>>,
        customers: Arc<MemoryStore<Customer>>,
        businesses: Arc<MemoryStore<Business>>,
    ) -> Self {
        Self {
            payments,
            customers,
            businesses,
        }
    }

    /// Billing records of a customer, one per business
    pub fn find_for_customer(&self, customer_id: CustomerId) -> StoreResult<Vec<Payment>> {
        if !self.customers.contains(&customer_id) {
            return Err(StoreError::not_found(Resource::Customer, customer_id));
        }
        Ok(self.payments.query(&PaymentsOf(customer_id)))
    }

    pub fn find_by_key(&self, customer_id: CustomerId, business_id: &str) -> StoreResult<Payment> {
        self.payments.get(&PaymentKey::new(customer_id, business_id))
    }

    pub fn create(&self, customer_id: CustomerId, data: PaymentCreate) -> StoreResult<Payment> {
        require_customer(&self.customers, customer_id)?;
        require_owned_business(&self.businesses, &data.business_id, customer_id)?;
        validate_required_text(&data.bank_name, "bank_name", MAX_NAME_LEN)?;
        validate_required_text(&data.account, "account", MAX_SHORT_TEXT_LEN)?;

        let payment = data.into_payment(customer_id);
        self.payments.create(payment.key(), payment)
    }

    pub fn update(
        &self,
        customer_id: CustomerId,
        business_id: &str,
        data: PaymentUpdate,
    ) -> StoreResult<Payment> {
        let key = PaymentKey::new(customer_id, business_id);
        if !self.payments.contains(&key) {
            return Err(StoreError::not_found(Resource::Payment, &key));
        }
        validate_optional_text(&data.bank_name, "bank_name", MAX_NAME_LEN)?;
        validate_optional_text(&data.account, "account", MAX_SHORT_TEXT_LEN)?;

        self.payments.update(&key, data)
    }

    pub fn delete(&self, customer_id: CustomerId, business_id: &str) -> StoreResult<Payment> {
        self.payments.delete(&PaymentKey::new(customer_id, business_id))
    }
}
