//! Customer Repository

use std::sync::Arc;

use shared::models::{Customer, CustomerCreate, CustomerFilter, CustomerId, CustomerUpdate};

use crate::store::validation::{
    MAX_NAME_LEN, MAX_SHORT_TEXT_LEN, validate_optional_text, validate_required_text,
};
use crate::store::{EntityStore, MemoryStore, Resource, StoreError, StoreResult};

#[derive(Clone)]
pub struct CustomerRepository {
    customers: Arc<MemoryStore<Customer>>,
}

impl CustomerRepository {
    pub fn new(customers: Arc<MemoryStore<Customer>>) -> Self {
        Self { customers }
    }

    /// Find all customers, in insertion order
    pub fn find_all(&self) -> Vec<(CustomerId, Customer)> {
        self.customers.get_all()
    }

    pub fn find_by_id(&self, id: CustomerId) -> StoreResult<Customer> {
        self.customers.get(&id)
    }

    /// Customers matching every set field of `filter`
    pub fn search(&self, filter: &CustomerFilter) -> Vec<Customer> {
        self.customers.query(filter)
    }

    pub fn create(&self, data: CustomerCreate) -> StoreResult<Customer> {
        validate_required_text(&data.full_name, "full_name", MAX_NAME_LEN)?;
        validate_required_text(&data.business_name, "business_name", MAX_NAME_LEN)?;
        validate_required_text(&data.role, "role", MAX_SHORT_TEXT_LEN)?;
        validate_required_text(&data.country, "country", MAX_SHORT_TEXT_LEN)?;

        let customer = Customer::from(data);
        self.customers.create(customer.id, customer)
    }

    pub fn update(&self, id: CustomerId, data: CustomerUpdate) -> StoreResult<Customer> {
        if !self.customers.contains(&id) {
            return Err(StoreError::not_found(Resource::Customer, id));
        }
        validate_optional_text(&data.full_name, "full_name", MAX_NAME_LEN)?;
        validate_optional_text(&data.business_name, "business_name", MAX_NAME_LEN)?;
        validate_optional_text(&data.role, "role", MAX_SHORT_TEXT_LEN)?;
        validate_optional_text(&data.country, "country", MAX_SHORT_TEXT_LEN)?;

        self.customers.update(&id, data)
    }

    /// Delete a customer. Records that reference it are kept.
    pub fn delete(&self, id: CustomerId) -> StoreResult<Customer> {
        self.customers.delete(&id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::{Email, PhoneNumber};

    fn create_payload(id: CustomerId, name: &str, country: &str) -> CustomerCreate {
        CustomerCreate {
            id,
            full_name: name.to_string(),
            email: Email::parse(format!("{}@example.com", name.to_lowercase())).unwrap(),
            business_name: format!("{name}'s Tapas"),
            num_locations: 1,
            phone: PhoneNumber::parse("+34 600 123 456").unwrap(),
            role: "owner".to_string(),
            country: country.to_string(),
        }
    }

    fn repo() -> CustomerRepository {
        CustomerRepository::new(Arc::new(MemoryStore::new()))
    }

    #[test]
    fn test_anna_moves_to_portugal() {
        let repo = repo();
        repo.create(create_payload(1, "Anna", "Spain")).unwrap();

        let updated = repo
            .update(
                1,
                CustomerUpdate {
                    country: Some("Portugal".to_string()),
                    ..Default::default()
                },
            )
            .unwrap();
        assert_eq!(updated.full_name, "Anna");
        assert_eq!(updated.country, "Portugal");
        assert_eq!(repo.find_by_id(1).unwrap(), updated);
    }

    #[test]
    fn test_create_duplicate_conflicts() {
        let repo = repo();
        let original = repo.create(create_payload(1, "Anna", "Spain")).unwrap();

        let err = repo.create(create_payload(1, "Other", "France")).unwrap_err();
        assert!(matches!(err, StoreError::Conflict { .. }));
        assert_eq!(repo.find_all(), vec![(1, original)]);
    }

    #[test]
    fn test_create_rejects_blank_name() {
        let repo = repo();
        let mut payload = create_payload(1, "Anna", "Spain");
        payload.full_name = "  ".to_string();

        assert!(repo.create(payload).unwrap_err().is_invalid_argument());
        assert!(repo.find_all().is_empty());
    }

    #[test]
    fn test_update_missing_is_not_found_before_validation() {
        let repo = repo();
        let err = repo
            .update(
                3,
                CustomerUpdate {
                    role: Some(String::new()),
                    ..Default::default()
                },
            )
            .unwrap_err();
        assert_eq!(err, StoreError::not_found(Resource::Customer, 3));
    }

    #[test]
    fn test_update_empty_patch_rejected() {
        let repo = repo();
        let anna = repo.create(create_payload(1, "Anna", "Spain")).unwrap();

        let err = repo.update(1, CustomerUpdate::default()).unwrap_err();
        assert_eq!(err, StoreError::EmptyPatch);
        assert_eq!(repo.find_by_id(1).unwrap(), anna);
    }

    #[test]
    fn test_delete_then_recreate_conflicts() {
        let repo = repo();
        let anna = repo.create(create_payload(1, "Anna", "Spain")).unwrap();

        assert_eq!(repo.delete(1).unwrap(), anna);
        assert!(matches!(
            repo.find_by_id(1).unwrap_err(),
            StoreError::NotFound { .. }
        ));
        assert!(matches!(
            repo.create(create_payload(1, "Anna", "Spain")).unwrap_err(),
            StoreError::Conflict { .. }
        ));
    }

    #[test]
    fn test_search() {
        let repo = repo();
        repo.create(create_payload(1, "Anna", "Spain")).unwrap();
        repo.create(create_payload(2, "Lloyd", "Ireland")).unwrap();

        let filter = CustomerFilter {
            full_name: Some("Lloyd".to_string()),
            ..Default::default()
        };
        let found = repo.search(&filter);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, 2);
    }
}
