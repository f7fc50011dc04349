//! Business Repository
//!
//! Businesses and their locations. A location is addressed by its position
//! in the business's location list; a business always keeps at least one.

use std::sync::Arc;

use shared::models::{Business, BusinessCreate, BusinessUpdate, Customer, Location, LocationUpdate};

use super::require_customer;
use crate::store::validation::{
    MAX_NAME_LEN, MAX_SHORT_TEXT_LEN, validate_location, validate_locations,
    validate_optional_text, validate_required_text,
};
use crate::store::{EntityStore, MemoryStore, Resource, StoreError, StoreResult};

#[derive(Clone)]
pub struct BusinessRepository {
    businesses: Arc<MemoryStore<Business>>,
    customers: Arc<MemoryStore<Customer>>,
}

impl BusinessRepository {
    pub fn new(
        businesses: Arc<MemoryStore<Business>>,
        customers: Arc<MemoryStore<Customer>>,
    ) -> Self {
        Self {
            businesses,
            customers,
        }
    }

    pub fn find_all(&self) -> Vec<(String, Business)> {
        self.businesses.get_all()
    }

    pub fn find_by_id(&self, legal_id: &str) -> StoreResult<Business> {
        self.businesses.get(&legal_id.to_string())
    }

    pub fn create(&self, data: BusinessCreate) -> StoreResult<Business> {
        validate_required_text(&data.legal_id, "legal_id", MAX_SHORT_TEXT_LEN)?;
        validate_required_text(&data.name, "name", MAX_NAME_LEN)?;
        validate_locations(&data.legal_id, &data.locations)?;
        require_customer(&self.customers, data.customer_id)?;

        let business = Business::from(data);
        self.businesses.create(business.legal_id.clone(), business)
    }

    pub fn update(&self, legal_id: &str, data: BusinessUpdate) -> StoreResult<Business> {
        let key = legal_id.to_string();
        if !self.businesses.contains(&key) {
            return Err(StoreError::not_found(Resource::Business, legal_id));
        }
        validate_optional_text(&data.name, "name", MAX_NAME_LEN)?;
        if let Some(locations) = &data.locations {
            validate_locations(legal_id, locations)?;
        }
        if let Some(customer_id) = data.customer_id {
            require_customer(&self.customers, customer_id)?;
        }

        self.businesses.update(&key, data)
    }

    pub fn delete(&self, legal_id: &str) -> StoreResult<Business> {
        self.businesses.delete(&legal_id.to_string())
    }

    // ── Locations ───────────────────────────────────────────────────

    pub fn list_locations(&self, legal_id: &str) -> StoreResult<Vec<Location>> {
        Ok(self.find_by_id(legal_id)?.locations)
    }

    pub fn get_location(&self, legal_id: &str, position: usize) -> StoreResult<Location> {
        let business = self.find_by_id(legal_id)?;
        business
            .locations
            .into_iter()
            .nth(position)
            .ok_or_else(|| location_not_found(legal_id, position))
    }

    /// Append a location; returns it with its position
    pub fn add_location(&self, legal_id: &str, location: Location) -> StoreResult<(usize, Location)> {
        validate_location(&location)?;

        let (_, position) = self.businesses.modify(&legal_id.to_string(), |b| {
            b.locations.push(location.clone());
            Ok(b.locations.len() - 1)
        })?;
        Ok((position, location))
    }

    pub fn update_location(
        &self,
        legal_id: &str,
        position: usize,
        data: LocationUpdate,
    ) -> StoreResult<Location> {
        let (_, location) = self.businesses.modify(&legal_id.to_string(), |b| {
            let location = b
                .locations
                .get_mut(position)
                .ok_or_else(|| location_not_found(legal_id, position))?;
            if data.is_empty() {
                return Err(StoreError::EmptyPatch);
            }
            data.apply(location);
            validate_location(location)?;
            Ok(location.clone())
        })?;
        Ok(location)
    }

    /// Remove a location; the last one cannot be removed
    pub fn remove_location(&self, legal_id: &str, position: usize) -> StoreResult<Location> {
        let (_, removed) = self.businesses.modify(&legal_id.to_string(), |b| {
            if position >= b.locations.len() {
                return Err(location_not_found(legal_id, position));
            }
            if b.locations.len() == 1 {
                return Err(StoreError::LocationRequired {
                    legal_id: legal_id.to_string(),
                });
            }
            Ok(b.locations.remove(position))
        })?;
        Ok(removed)
    }
}

fn location_not_found(legal_id: &str, position: usize) -> StoreError {
    StoreError::not_found(Resource::Location, format!("{legal_id}/{position}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::CustomerCreate;
    use shared::{Email, PhoneNumber};

    fn location(name: &str) -> Location {
        Location {
            name: name.to_string(),
            address: format!("{name} street 1"),
            postcode: "28013".to_string(),
            country: "Spain".to_string(),
            phone: None,
            website: None,
        }
    }

    fn setup() -> BusinessRepository {
        let customers = Arc::new(MemoryStore::new());
        let anna = Customer::from(CustomerCreate {
            id: 1,
            full_name: "Anna".to_string(),
            email: Email::parse("anna@example.com").unwrap(),
            business_name: "Anna's Tapas".to_string(),
            num_locations: 2,
            phone: PhoneNumber::parse("600123456").unwrap(),
            role: "owner".to_string(),
            country: "Spain".to_string(),
        });
        customers.create(1, anna).unwrap();
        BusinessRepository::new(Arc::new(MemoryStore::new()), customers)
    }

    fn tapas(customer_id: u64, locations: Vec<Location>) -> BusinessCreate {
        BusinessCreate {
            legal_id: "B-100".to_string(),
            customer_id,
            name: "Anna's Tapas".to_string(),
            locations,
        }
    }

    #[test]
    fn test_create_requires_existing_customer() {
        let repo = setup();
        let err = repo.create(tapas(99, vec![location("Centro")])).unwrap_err();
        assert_eq!(err, StoreError::missing_reference(Resource::Customer, 99));
        assert!(repo.find_all().is_empty());

        assert!(repo.create(tapas(1, vec![location("Centro")])).is_ok());
    }

    #[test]
    fn test_create_requires_a_location() {
        let repo = setup();
        let err = repo.create(tapas(1, vec![])).unwrap_err();
        assert!(err.is_invalid_argument());
    }

    #[test]
    fn test_update_checks_customer_reference() {
        let repo = setup();
        let original = repo.create(tapas(1, vec![location("Centro")])).unwrap();

        let err = repo
            .update(
                "B-100",
                BusinessUpdate {
                    customer_id: Some(42),
                    ..Default::default()
                },
            )
            .unwrap_err();
        assert!(err.is_invalid_argument());
        assert_eq!(repo.find_by_id("B-100").unwrap(), original);

        let err = repo
            .update(
                "B-100",
                BusinessUpdate {
                    locations: Some(vec![]),
                    ..Default::default()
                },
            )
            .unwrap_err();
        assert!(err.is_invalid_argument());
    }

    #[test]
    fn test_location_lifecycle() {
        let repo = setup();
        repo.create(tapas(1, vec![location("Centro")])).unwrap();

        let (position, _) = repo.add_location("B-100", location("Puerto")).unwrap();
        assert_eq!(position, 1);
        assert_eq!(repo.get_location("B-100", 1).unwrap().name, "Puerto");

        let updated = repo
            .update_location(
                "B-100",
                1,
                LocationUpdate {
                    postcode: Some("29016".to_string()),
                    ..Default::default()
                },
            )
            .unwrap();
        assert_eq!(updated.name, "Puerto");
        assert_eq!(updated.postcode, "29016");

        let removed = repo.remove_location("B-100", 0).unwrap();
        assert_eq!(removed.name, "Centro");

        let names: Vec<String> = repo
            .list_locations("B-100")
            .unwrap()
            .into_iter()
            .map(|l| l.name)
            .collect();
        assert_eq!(names, vec!["Puerto"]);
    }

    #[test]
    fn test_last_location_cannot_be_removed() {
        let repo = setup();
        let original = repo.create(tapas(1, vec![location("Centro")])).unwrap();

        let err = repo.remove_location("B-100", 0).unwrap_err();
        assert_eq!(
            err,
            StoreError::LocationRequired {
                legal_id: "B-100".to_string()
            }
        );
        assert_eq!(repo.find_by_id("B-100").unwrap(), original);
    }

    #[test]
    fn test_failed_location_update_leaves_business_unchanged() {
        let repo = setup();
        let original = repo.create(tapas(1, vec![location("Centro")])).unwrap();

        let err = repo
            .update_location(
                "B-100",
                0,
                LocationUpdate {
                    postcode: Some("29016".to_string()),
                    name: Some("   ".to_string()),
                    ..Default::default()
                },
            )
            .unwrap_err();
        assert!(err.is_invalid_argument());
        assert_eq!(repo.find_by_id("B-100").unwrap(), original);

        let err = repo
            .update_location("B-100", 0, LocationUpdate::default())
            .unwrap_err();
        assert_eq!(err, StoreError::EmptyPatch);
    }

    #[test]
    fn test_unknown_business_or_position_is_not_found() {
        let repo = setup();
        repo.create(tapas(1, vec![location("Centro")])).unwrap();

        assert_eq!(
            repo.get_location("B-100", 5).unwrap_err(),
            StoreError::not_found(Resource::Location, "B-100/5")
        );
        assert_eq!(
            repo.list_locations("B-404").unwrap_err(),
            StoreError::not_found(Resource::Business, "B-404")
        );
        assert!(matches!(
            repo.add_location("B-404", location("Puerto")).unwrap_err(),
            StoreError::NotFound { .. }
        ));
        assert!(matches!(
            repo.remove_location("B-100", 3).unwrap_err(),
            StoreError::NotFound {
                resource: Resource::Location,
                ..
            }
        ));
    }
}
