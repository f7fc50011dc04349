//! Terms (Contract) Model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::customer::CustomerId;

pub type ContractId = u64;

/// Product tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Product {
    Basic,
    Core,
    Premium,
}

impl Product {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Basic => "Basic",
            Self::Core => "Core",
            Self::Premium => "Premium",
        }
    }
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Default status of a new contract
pub const STATUS_PENDING: &str = "pending";
/// Status set when a contract is signed
pub const STATUS_ACTIVE: &str = "active";

/// Contract entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Terms {
    pub contract_id: ContractId,
    pub customer_id: CustomerId,
    /// Legal id of the contracted business
    pub business_id: String,
    pub product: Product,
    /// Monthly fee, 2 decimal places
    pub fee: f64,
    /// Effective date
    pub date: DateTime<Utc>,
    /// pending / active / completed ...
    pub status: String,
}

/// Create contract payload (customer comes from the route)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TermsCreate {
    pub contract_id: ContractId,
    pub business_id: String,
    pub product: Product,
    pub fee: f64,
    #[serde(default)]
    pub date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub status: Option<String>,
}

impl TermsCreate {
    /// Build the record for `customer_id`; effective date defaults to now
    pub fn into_terms(self, customer_id: CustomerId) -> Terms {
        Terms {
            contract_id: self.contract_id,
            customer_id,
            business_id: self.business_id,
            product: self.product,
            fee: self.fee,
            date: self.date.unwrap_or_else(Utc::now),
            status: self.status.unwrap_or_else(|| STATUS_PENDING.to_string()),
        }
    }
}

/// Update contract payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TermsUpdate {
    pub customer_id: Option<CustomerId>,
    pub business_id: Option<String>,
    pub product: Option<Product>,
    pub fee: Option<f64>,
    pub date: Option<DateTime<Utc>>,
    pub status: Option<String>,
}

impl TermsUpdate {
    pub fn is_empty(&self) -> bool {
        self.customer_id.is_none()
            && self.business_id.is_none()
            && self.product.is_none()
            && self.fee.is_none()
            && self.date.is_none()
            && self.status.is_none()
    }

    pub fn apply(self, terms: &mut Terms) {
        if let Some(v) = self.customer_id {
            terms.customer_id = v;
        }
        if let Some(v) = self.business_id {
            terms.business_id = v;
        }
        if let Some(v) = self.product {
            terms.product = v;
        }
        if let Some(v) = self.fee {
            terms.fee = v;
        }
        if let Some(v) = self.date {
            terms.date = v;
        }
        if let Some(v) = self.status {
            terms.status = v;
        }
    }
}

/// Contract list filter
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContractFilter {
    pub status: Option<String>,
    pub product: Option<Product>,
}

impl ContractFilter {
    pub fn matches(&self, terms: &Terms) -> bool {
        self.status.as_deref().is_none_or(|s| s == terms.status)
            && self.product.is_none_or(|p| p == terms.product)
    }
}
