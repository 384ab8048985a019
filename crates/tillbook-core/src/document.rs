//! Raw source documents as supplied by the external data layer.
//!
//! Four document kinds feed the ledger: sale invoices, purchase invoices,
//! receipt vouchers and payment vouchers. The structs here mirror the store's
//! records, so most fields are optional; the normalizer in `tillbook-ledger`
//! is the single place that supplies defaults and derives the canonical
//! [`crate::LedgerEntry`] shape.
//!
//! Documents are immutable inputs. The engine never writes them back.

use serde::{Deserialize, Serialize};
use std::fmt;

use rust_decimal::Decimal;

/// The kind of source document a ledger entry was derived from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentType {
    /// Sale invoice (posts as debit against the customer)
    Sale,
    /// Purchase invoice (posts as credit against the supplier)
    Purchase,
    /// Receipt voucher (money in, posts as credit)
    Receipt,
    /// Payment voucher (money out, posts as debit)
    Payment,
}

impl DocumentType {
    /// Stable lowercase tag used in derived entry ids.
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Sale => "sale",
            Self::Purchase => "purchase",
            Self::Receipt => "receipt",
            Self::Payment => "payment",
        }
    }

    /// Human-readable label for reports.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Sale => "Sale",
            Self::Purchase => "Purchase",
            Self::Receipt => "Receipt",
            Self::Payment => "Payment",
        }
    }
}

impl fmt::Display for DocumentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A sale invoice raised against a customer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaleInvoice {
    /// Store identifier, unique within the sales collection
    pub id: String,
    /// Invoice date as stored (raw string, tolerantly parsed downstream)
    #[serde(default)]
    pub date: Option<String>,
    /// Human-facing invoice number
    #[serde(default)]
    pub number: Option<String>,
    /// Customer record id, when the invoice is linked to one
    #[serde(default)]
    pub customer_id: Option<String>,
    /// Customer display name
    #[serde(default)]
    pub customer_name: Option<String>,
    /// Invoice grand total
    #[serde(default)]
    pub total: Option<Decimal>,
}

/// A purchase invoice received from a supplier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseInvoice {
    /// Store identifier, unique within the purchases collection
    pub id: String,
    /// Invoice date as stored
    #[serde(default)]
    pub date: Option<String>,
    /// Human-facing invoice number
    #[serde(default)]
    pub number: Option<String>,
    /// Supplier record id, when the invoice is linked to one
    #[serde(default)]
    pub supplier_id: Option<String>,
    /// Supplier display name
    #[serde(default)]
    pub supplier_name: Option<String>,
    /// Invoice grand total
    #[serde(default)]
    pub total: Option<Decimal>,
}

/// A receipt voucher recording money received.
///
/// Receipts carry only a free-text payer name; there is no stable link to a
/// customer record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReceiptVoucher {
    /// Store identifier, unique within the receipts collection
    pub id: String,
    /// Voucher date as stored
    #[serde(default)]
    pub date: Option<String>,
    /// Human-facing voucher number
    #[serde(default)]
    pub number: Option<String>,
    /// Free-text payer name
    #[serde(default)]
    pub received_from: Option<String>,
    /// Amount received
    #[serde(default)]
    pub amount: Option<Decimal>,
}

/// A payment voucher recording money paid out.
///
/// Like receipts, payments carry only a free-text payee name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentVoucher {
    /// Store identifier, unique within the payments collection
    pub id: String,
    /// Voucher date as stored
    #[serde(default)]
    pub date: Option<String>,
    /// Human-facing voucher number
    #[serde(default)]
    pub number: Option<String>,
    /// Free-text payee name
    #[serde(default)]
    pub paid_to: Option<String>,
    /// Amount paid
    #[serde(default)]
    pub amount: Option<Decimal>,
}

/// Any of the four raw document kinds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum SourceDocument {
    /// A sale invoice
    Sale(SaleInvoice),
    /// A purchase invoice
    Purchase(PurchaseInvoice),
    /// A receipt voucher
    Receipt(ReceiptVoucher),
    /// A payment voucher
    Payment(PaymentVoucher),
}

impl SourceDocument {
    /// The document kind.
    #[must_use]
    pub const fn document_type(&self) -> DocumentType {
        match self {
            Self::Sale(_) => DocumentType::Sale,
            Self::Purchase(_) => DocumentType::Purchase,
            Self::Receipt(_) => DocumentType::Receipt,
            Self::Payment(_) => DocumentType::Payment,
        }
    }

    /// The store id of the underlying record.
    #[must_use]
    pub fn source_id(&self) -> &str {
        match self {
            Self::Sale(d) => &d.id,
            Self::Purchase(d) => &d.id,
            Self::Receipt(d) => &d.id,
            Self::Payment(d) => &d.id,
        }
    }

    /// The derived ledger entry id, `"{tag}-{source_id}"`.
    ///
    /// This id is the deduplication key during merging: two documents of the
    /// same kind with the same store id produce one entry.
    #[must_use]
    pub fn entry_id(&self) -> String {
        format!("{}-{}", self.document_type().tag(), self.source_id())
    }
}

impl From<SaleInvoice> for SourceDocument {
    fn from(doc: SaleInvoice) -> Self {
        Self::Sale(doc)
    }
}

impl From<PurchaseInvoice> for SourceDocument {
    fn from(doc: PurchaseInvoice) -> Self {
        Self::Purchase(doc)
    }
}

impl From<ReceiptVoucher> for SourceDocument {
    fn from(doc: ReceiptVoucher) -> Self {
        Self::Receipt(doc)
    }
}

impl From<PaymentVoucher> for SourceDocument {
    fn from(doc: PaymentVoucher) -> Self {
        Self::Payment(doc)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn sale(id: &str) -> SaleInvoice {
        SaleInvoice {
            id: id.to_string(),
            date: Some("2024-01-05".to_string()),
            number: Some("INV-1".to_string()),
            customer_id: Some("c-1".to_string()),
            customer_name: Some("Acme".to_string()),
            total: Some(dec!(1000)),
        }
    }

    #[test]
    fn test_entry_id_uses_kind_tag() {
        let doc = SourceDocument::from(sale("s-9"));
        assert_eq!(doc.entry_id(), "sale-s-9");

        let doc = SourceDocument::Payment(PaymentVoucher {
            id: "p-3".to_string(),
            date: None,
            number: None,
            paid_to: None,
            amount: None,
        });
        assert_eq!(doc.entry_id(), "payment-p-3");
    }

    #[test]
    fn test_document_type_display() {
        assert_eq!(DocumentType::Sale.to_string(), "Sale");
        assert_eq!(DocumentType::Receipt.tag(), "receipt");
    }

    #[test]
    fn test_deserialize_sparse_record() {
        // Only the id is required; everything else defaults
        let doc: SaleInvoice = serde_json::from_str(r#"{"id": "s-1"}"#).unwrap();
        assert_eq!(doc.id, "s-1");
        assert!(doc.total.is_none());
        assert!(doc.customer_name.is_none());
    }

    #[test]
    fn test_deserialize_camel_case() {
        let doc: ReceiptVoucher = serde_json::from_str(
            r#"{"id": "r-1", "receivedFrom": "Acme", "amount": "250.50"}"#,
        )
        .unwrap();
        assert_eq!(doc.received_from.as_deref(), Some("Acme"));
        assert_eq!(doc.amount, Some(dec!(250.50)));
    }
}
