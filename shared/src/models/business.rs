//! Business Model

use serde::{Deserialize, Serialize};

use super::customer::CustomerId;
use crate::types::PhoneNumber;

/// Business entity, keyed by its legal id
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Business {
    pub legal_id: String,
    pub customer_id: CustomerId,
    pub name: String,
    /// 至少一个门店，按添加顺序排列
    pub locations: Vec<Location>,
}

/// A single business location, addressed by its position in
/// [`Business::locations`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub name: String,
    pub address: String,
    pub postcode: String,
    pub country: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<PhoneNumber>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
}

/// Create business payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BusinessCreate {
    pub legal_id: String,
    pub customer_id: CustomerId,
    pub name: String,
    pub locations: Vec<Location>,
}

impl From<BusinessCreate> for Business {
    fn from(b: BusinessCreate) -> Self {
        Self {
            legal_id: b.legal_id,
            customer_id: b.customer_id,
            name: b.name,
            locations: b.locations,
        }
    }
}

/// Update business payload
///
/// `locations`, when set, replaces the whole collection.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BusinessUpdate {
    pub customer_id: Option<CustomerId>,
    pub name: Option<String>,
    pub locations: Option<Vec<Location>>,
}

impl BusinessUpdate {
    pub fn is_empty(&self) -> bool {
        self.customer_id.is_none() && self.name.is_none() && self.locations.is_none()
    }

    pub fn apply(self, business: &mut Business) {
        if let Some(v) = self.customer_id {
            business.customer_id = v;
        }
        if let Some(v) = self.name {
            business.name = v;
        }
        if let Some(v) = self.locations {
            business.locations = v;
        }
    }
}

/// Update location payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LocationUpdate {
    pub name: Option<String>,
    pub address: Option<String>,
    pub postcode: Option<String>,
    pub country: Option<String>,
    pub phone: Option<PhoneNumber>,
    pub website: Option<String>,
}

impl LocationUpdate {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.address.is_none()
            && self.postcode.is_none()
            && self.country.is_none()
            && self.phone.is_none()
            && self.website.is_none()
    }

    pub fn apply(self, location: &mut Location) {
        if let Some(v) = self.name {
            location.name = v;
        }
        if let Some(v) = self.address {
            location.address = v;
        }
        if let Some(v) = self.postcode {
            location.postcode = v;
        }
        if let Some(v) = self.country {
            location.country = v;
        }
        if let Some(v) = self.phone {
            location.phone = Some(v);
        }
        if let Some(v) = self.website {
            location.website = Some(v);
        }
    }
}
