//! Customers and suppliers.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A customer or supplier record.
///
/// Customers and suppliers share one shape and are supplied as two separate
/// collections; which collection a party came from determines how a
/// [`PartyRef`] resolves it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Party {
    /// Store identifier
    pub id: String,
    /// Display name, used for entry matching (exact, case-sensitive)
    pub name: String,
    /// Opening balance carried into any statement filtered to this party.
    /// Positive means CR (owed to the business).
    #[serde(default)]
    pub opening_balance: Decimal,
}

/// A reference to one selected counterparty for the entity filter.
///
/// The variant names which reference collection resolves the id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PartyRef {
    /// A customer id, resolved against the customers collection
    Customer(String),
    /// A supplier id, resolved against the suppliers collection
    Supplier(String),
}

impl PartyRef {
    /// The referenced id.
    #[must_use]
    pub fn id(&self) -> &str {
        match self {
            Self::Customer(id) | Self::Supplier(id) => id,
        }
    }

    /// Resolve this reference against the two party collections.
    ///
    /// Returns `None` when the referenced collection has no such id; callers
    /// treat that as "no entity selected".
    #[must_use]
    pub fn resolve<'a>(&self, customers: &'a [Party], suppliers: &'a [Party]) -> Option<&'a Party> {
        let (collection, id) = match self {
            Self::Customer(id) => (customers, id),
            Self::Supplier(id) => (suppliers, id),
        };
        collection.iter().find(|p| &p.id == id)
    }
}
