//! Customer Model

use serde::{Deserialize, Serialize};

use crate::types::{Email, PhoneNumber};

pub type CustomerId = u64;

/// Customer entity (onboarding form submission)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    pub id: CustomerId,
    pub full_name: String,
    pub email: Email,
    pub business_name: String,
    /// Number of restaurant locations
    pub num_locations: u32,
    pub phone: PhoneNumber,
    pub role: String,
    pub country: String,
}

fn default_num_locations() -> u32 {
    1
}

/// Create customer payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomerCreate {
    pub id: CustomerId,
    pub full_name: String,
    pub email: Email,
    pub business_name: String,
    #[serde(default = "default_num_locations")]
    pub num_locations: u32,
    pub phone: PhoneNumber,
    pub role: String,
    pub country: String,
}

impl From<CustomerCreate> for Customer {
    fn from(c: CustomerCreate) -> Self {
        Self {
            id: c.id,
            full_name: c.full_name,
            email: c.email,
            business_name: c.business_name,
            num_locations: c.num_locations,
            phone: c.phone,
            role: c.role,
            country: c.country,
        }
    }
}

/// Update customer payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CustomerUpdate {
    pub full_name: Option<String>,
    pub email: Option<Email>,
    pub business_name: Option<String>,
    pub num_locations: Option<u32>,
    pub phone: Option<PhoneNumber>,
    pub role: Option<String>,
    pub country: Option<String>,
}

impl CustomerUpdate {
    pub fn is_empty(&self) -> bool {
        self.full_name.is_none()
            && self.email.is_none()
            && self.business_name.is_none()
            && self.num_locations.is_none()
            && self.phone.is_none()
            && self.role.is_none()
            && self.country.is_none()
    }

    /// Overwrite the fields that are set, leave the rest alone
    pub fn apply(self, customer: &mut Customer) {
        if let Some(v) = self.full_name {
            customer.full_name = v;
        }
        if let Some(v) = self.email {
            customer.email = v;
        }
        if let Some(v) = self.business_name {
            customer.business_name = v;
        }
        if let Some(v) = self.num_locations {
            customer.num_locations = v;
        }
        if let Some(v) = self.phone {
            customer.phone = v;
        }
        if let Some(v) = self.role {
            customer.role = v;
        }
        if let Some(v) = self.country {
            customer.country = v;
        }
    }
}

/// Customer search parameters (每个字段均为等值匹配)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CustomerFilter {
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub business_name: Option<String>,
    pub role: Option<String>,
    pub country: Option<String>,
    pub num_locations: Option<u32>,
}

impl CustomerFilter {
    pub fn matches(&self, customer: &Customer) -> bool {
        eq(&self.full_name, &customer.full_name)
            && self
                .email
                .as_deref()
                .is_none_or(|e| e == customer.email.as_str())
            && eq(&self.business_name, &customer.business_name)
            && eq(&self.role, &customer.role)
            && eq(&self.country, &customer.country)
            && self.num_locations.is_none_or(|n| n == customer.num_locations)
    }
}

fn eq(want: &Option<String>, have: &str) -> bool {
    want.as_deref().is_none_or(|w| w == have)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn anna() -> Customer {
        Customer {
            id: 1,
            full_name: "Anna".to_string(),
            email: Email::parse("anna@example.com").unwrap(),
            business_name: "Anna's Tapas".to_string(),
            num_locations: 2,
            phone: PhoneNumber::parse("+34 600 123 456").unwrap(),
            role: "owner".to_string(),
            country: "Spain".to_string(),
        }
    }

    #[test]
    fn test_update_overwrites_only_set_fields() {
        let mut customer = anna();
        let patch = CustomerUpdate {
            country: Some("Portugal".to_string()),
            ..Default::default()
        };
        assert!(!patch.is_empty());
        patch.apply(&mut customer);

        let mut expected = anna();
        expected.country = "Portugal".to_string();
        assert_eq!(customer, expected);
    }

    #[test]
    fn test_empty_update_from_json() {
        let patch: CustomerUpdate = serde_json::from_str("{}").unwrap();
        assert!(patch.is_empty());

        let patch: CustomerUpdate = serde_json::from_str(r#"{"role": null}"#).unwrap();
        assert!(patch.is_empty());
    }

    #[test]
    fn test_create_defaults_num_locations() {
        let create: CustomerCreate = serde_json::from_value(serde_json::json!({
            "id": 7,
            "full_name": "Niko",
            "email": "niko@example.com",
            "business_name": "Niko's Grill",
            "phone": "600123456",
            "role": "manager",
            "country": "Greece"
        }))
        .unwrap();
        assert_eq!(Customer::from(create).num_locations, 1);
    }

    #[test]
    fn test_filter_is_equality_on_every_field() {
        let customer = anna();

        assert!(CustomerFilter::default().matches(&customer));

        let filter = CustomerFilter {
            country: Some("Spain".to_string()),
            num_locations: Some(2),
            ..Default::default()
        };
        assert!(filter.matches(&customer));

        let filter = CustomerFilter {
            country: Some("Spain".to_string()),
            num_locations: Some(3),
            ..Default::default()
        };
        assert!(!filter.matches(&customer));

        let filter = CustomerFilter {
            email: Some("anna@example.com".to_string()),
            role: Some("chef".to_string()),
            ..Default::default()
        };
        assert!(!filter.matches(&customer));
    }
}
