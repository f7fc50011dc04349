//! Entity bindings for the shared models

use std::fmt;

use shared::models::{
    Business, BusinessUpdate, ContractId, Customer, CustomerFilter, CustomerId, CustomerUpdate,
    Payment, PaymentKey, PaymentUpdate, Terms, TermsUpdate,
};

use super::{Entity, Filter, Patch};

/// Resource kind, used in error reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Resource {
    Customer,
    Business,
    Location,
    Contract,
    Payment,
}

impl Resource {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Customer => "Customer",
            Self::Business => "Business",
            Self::Location => "Location",
            Self::Contract => "Contract",
            Self::Payment => "Payment",
        }
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Entity for Customer {
    type Id = CustomerId;
    type Patch = CustomerUpdate;
    const RESOURCE: Resource = Resource::Customer;

    fn id(&self) -> CustomerId {
        self.id
    }
}

impl Entity for Business {
    type Id = String;
    type Patch = BusinessUpdate;
    const RESOURCE: Resource = Resource::Business;

    fn id(&self) -> String {
        self.legal_id.clone()
    }
}

impl Entity for Terms {
    type Id = ContractId;
    type Patch = TermsUpdate;
    const RESOURCE: Resource = Resource::Contract;

    fn id(&self) -> ContractId {
        self.contract_id
    }
}

impl Entity for Payment {
    type Id = PaymentKey;
    type Patch = PaymentUpdate;
    const RESOURCE: Resource = Resource::Payment;

    fn id(&self) -> PaymentKey {
        self.key()
    }
}

// ── Patches ─────────────────────────────────────────────────────────

macro_rules! impl_patch {
    ($($patch:ty => $entity:ty),* $(,)?) => {
        $(
            impl Patch<$entity> for $patch {
                fn is_empty(&self) -> bool {
                    <$patch>::is_empty(self)
                }

                fn apply(self, record: &mut $entity) {
                    <$patch>::apply(self, record)
                }
            }
        )*
    };
}

impl_patch! {
    CustomerUpdate => Customer,
    BusinessUpdate => Business,
    TermsUpdate => Terms,
    PaymentUpdate => Payment,
}

impl Filter<Customer> for CustomerFilter {
    fn matches(&self, record: &Customer) -> bool {
        CustomerFilter::matches(self, record)
    }
}
