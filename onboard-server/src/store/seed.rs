//! Demo data
//!
//! 开启 `SEED_DEMO_DATA` 时预置三个客户，便于直接调用 API。

use shared::models::{Customer, CustomerCreate};
use shared::{Email, PhoneNumber};

use super::{EntityStore, MemoryStore, StoreResult};

const DEMO_CUSTOMERS: [(u64, &str, &str, &str, &str, &str, &str); 3] = [
    (0, "Anna", "anna@example.com", "Anna's Tapas", "+34 600 100 200", "owner", "Spain"),
    (1, "Lloyd", "lloyd@example.com", "Lloyd's Diner", "+353 85 123 4567", "manager", "Ireland"),
    (2, "Niko", "niko@example.com", "Niko's Grill", "+30 690 123 4567", "owner", "Greece"),
];

/// Insert the demo customers, returns how many were added
pub fn seed_demo_data(customers: &MemoryStore<Customer>) -> StoreResult<usize> {
    for (id, full_name, email, business_name, phone, role, country) in DEMO_CUSTOMERS {
        let customer = Customer::from(CustomerCreate {
            id,
            full_name: full_name.to_string(),
            email: Email::parse(email)?,
            business_name: business_name.to_string(),
            num_locations: 1,
            phone: PhoneNumber::parse(phone)?,
            role: role.to_string(),
            country: country.to_string(),
        });
        customers.create(id, customer)?;
    }

    tracing::info!(count = DEMO_CUSTOMERS.len(), "Seeded demo customers");
    Ok(DEMO_CUSTOMERS.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_inserts_three_customers_in_order() {
        let store = MemoryStore::new();
        assert_eq!(seed_demo_data(&store).unwrap(), 3);

        let names: Vec<(u64, String)> = store
            .get_all()
            .into_iter()
            .map(|(id, c)| (id, c.full_name))
            .collect();
        assert_eq!(
            names,
            vec![
                (0, "Anna".to_string()),
                (1, "Lloyd".to_string()),
                (2, "Niko".to_string())
            ]
        );
    }

    #[test]
    fn test_seed_twice_conflicts() {
        let store = MemoryStore::new();
        seed_demo_data(&store).unwrap();
        assert!(seed_demo_data(&store).is_err());
        assert_eq!(store.len(), 3);
    }
}
