//! Payment Model

use serde::{Deserialize, Serialize};
use std::fmt;

use super::customer::CustomerId;
use crate::types::MaskedCard;

/// Payment records have no id of their own: one per (customer, business)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PaymentKey {
    pub customer_id: CustomerId,
    pub business_id: String,
}

impl PaymentKey {
    pub fn new(customer_id: CustomerId, business_id: impl Into<String>) -> Self {
        Self {
            customer_id,
            business_id: business_id.into(),
        }
    }
}

impl fmt::Display for PaymentKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.customer_id, self.business_id)
    }
}

/// Billing data needed to process a payment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Payment {
    pub customer_id: CustomerId,
    pub business_id: String,
    pub bank_name: String,
    pub account: String,
    /// 仅保存卡号后四位
    pub card: MaskedCard,
}

impl Payment {
    pub fn key(&self) -> PaymentKey {
        PaymentKey::new(self.customer_id, self.business_id.clone())
    }
}

/// Create payment payload (customer comes from the route)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentCreate {
    pub business_id: String,
    pub bank_name: String,
    pub account: String,
    pub card: MaskedCard,
}

impl PaymentCreate {
    pub fn into_payment(self, customer_id: CustomerId) -> Payment {
        Payment {
            customer_id,
            business_id: self.business_id,
            bank_name: self.bank_name,
            account: self.account,
            card: self.card,
        }
    }
}

/// Update payment payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PaymentUpdate {
    pub bank_name: Option<String>,
    pub account: Option<String>,
    pub card: Option<MaskedCard>,
}

impl PaymentUpdate {
    pub fn is_empty(&self) -> bool {
        self.bank_name.is_none() && self.account.is_none() && self.card.is_none()
    }

    pub fn apply(self, payment: &mut Payment) {
        if let Some(v) = self.bank_name {
            payment.bank_name = v;
        }
        if let Some(v) = self.account {
            payment.account = v;
        }
        if let Some(v) = self.card {
            payment.card = v;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_masks_card() {
        let create: PaymentCreate = serde_json::from_value(serde_json::json!({
            "business_id": "B-100",
            "bank_name": "Banco Norte",
            "account": "ES91 2100 0418 4502 0005 1332",
            "card": "4111-1111-1111-4242"
        }))
        .unwrap();

        let payment = create.into_payment(1);
        assert_eq!(payment.card.as_str(), "**** 4242");
        assert_eq!(payment.key(), PaymentKey::new(1, "B-100"));

        let json = serde_json::to_value(&payment).unwrap();
        assert_eq!(json["card"], "**** 4242");
    }

    #[test]
    fn test_key_display() {
        assert_eq!(PaymentKey::new(3, "B-7").to_string(), "3/B-7");
    }
}
