//! Contract (Terms) Repository
//!
//! Contracts are always addressed under their customer: a contract that
//! belongs to another customer is reported as not found.

use std::sync::Arc;

use shared::models::{
    Business, ContractFilter, ContractId, Customer, CustomerId, STATUS_ACTIVE, Terms, TermsCreate,
    TermsUpdate,
};

use super::{require_customer, require_owned_business};
use crate::store::validation::{
    MAX_SHORT_TEXT_LEN, normalize_fee, validate_optional_text, validate_required_text,
};
use crate::store::{EntityStore, Filter, MemoryStore, Resource, StoreError, StoreResult};

/// Contracts of one customer, narrowed by a [`ContractFilter`]
struct CustomerContracts<'a> {
    customer_id: CustomerId,
    filter: &'a ContractFilter,
}

impl Filter<Terms> for CustomerContracts<'_> {
    fn matches(&self, terms: &Terms) -> bool {
        terms.customer_id == self.customer_id && self.filter.matches(terms)
    }
}

#[derive(Clone)]
pub struct ContractRepository {
    contracts: Arc<MemoryStore<Terms>>,
    customers: Arc<MemoryStore<Customer>>,
    businesses: Arc<MemoryStore<Business>>,
}

impl ContractRepository {
    pub fn new(
        contracts: Arc<MemoryStore<Terms>>,
        customers: Arc<MemoryStore<Customer>>,
        businesses: Arc<MemoryStore<Business>>,
    ) -> Self {
        Self {
            contracts,
            customers,
            businesses,
        }
    }

    /// Contracts of `customer_id` matching `filter`, in insertion order
    pub fn find_for_customer(
        &self,
        customer_id: CustomerId,
        filter: &ContractFilter,
    ) -> StoreResult<Vec<(ContractId, Terms)>> {
        if !self.customers.contains(&customer_id) {
            return Err(StoreError::not_found(Resource::Customer, customer_id));
        }
        let scoped = CustomerContracts {
            customer_id,
            filter,
        };
        Ok(self
            .contracts
            .query(&scoped)
            .into_iter()
            .map(|t| (t.contract_id, t))
            .collect())
    }

    pub fn find_by_id(&self, customer_id: CustomerId, contract_id: ContractId) -> StoreResult<Terms> {
        let terms = self.contracts.get(&contract_id)?;
        if terms.customer_id != customer_id {
            return Err(StoreError::not_found(Resource::Contract, contract_id));
        }
        Ok(terms)
    }

    pub fn create(&self, customer_id: CustomerId, data: TermsCreate) -> StoreResult<Terms> {
        require_customer(&self.customers, customer_id)?;
        require_owned_business(&self.businesses, &data.business_id, customer_id)?;
        validate_optional_text(&data.status, "status", MAX_SHORT_TEXT_LEN)?;

        let mut terms = data.into_terms(customer_id);
        terms.fee = normalize_fee(terms.fee)?;
        self.contracts.create(terms.contract_id, terms)
    }

    pub fn update(
        &self,
        customer_id: CustomerId,
        contract_id: ContractId,
        mut data: TermsUpdate,
    ) -> StoreResult<Terms> {
        let current = self.find_by_id(customer_id, contract_id)?;

        if let Some(id) = data.customer_id {
            require_customer(&self.customers, id)?;
        }
        if let Some(legal_id) = &data.business_id {
            validate_required_text(legal_id, "business_id", MAX_SHORT_TEXT_LEN)?;
        }
        // The pair after the update must still match
        if data.customer_id.is_some() || data.business_id.is_some() {
            let owner = data.customer_id.unwrap_or(current.customer_id);
            let legal_id = data.business_id.as_deref().unwrap_or(current.business_id.as_str());
            require_owned_business(&self.businesses, legal_id, owner)?;
        }
        validate_optional_text(&data.status, "status", MAX_SHORT_TEXT_LEN)?;
        if let Some(fee) = data.fee {
            data.fee = Some(normalize_fee(fee)?);
        }

        self.contracts.update(&contract_id, data)
    }

    /// Sign a contract: its status becomes `active`
    pub fn sign(&self, customer_id: CustomerId, contract_id: ContractId) -> StoreResult<Terms> {
        let patch = TermsUpdate {
            status: Some(STATUS_ACTIVE.to_string()),
            ..Default::default()
        };
        self.update(customer_id, contract_id, patch)
    }

    pub fn delete(&self, customer_id: CustomerId, contract_id: ContractId) -> StoreResult<Terms> {
        self.find_by_id(customer_id, contract_id)?;
        self.contracts.delete(&contract_id)
    }
}
