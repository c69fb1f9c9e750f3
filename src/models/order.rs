//! Order Models

use serde::{Deserialize, Serialize};

use super::status::OrderStatus;

/// Invoice kind requested at checkout. Official invoices require the
/// customer's full billing profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum InvoiceType {
    #[default]
    Unofficial,
    Official,
}

impl InvoiceType {
    pub fn label(&self) -> &'static str {
        match self {
            InvoiceType::Unofficial => "فاکتور غیررسمی",
            InvoiceType::Official => "فاکتور رسمی",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderItem {
    pub id: u32,
    pub product_id: u32,
    pub product_name: String,
    pub requested_quantity: u32,
    /// Set by the admin during pricing
    #[serde(default)]
    pub quoted_unit_price: Option<f64>,
    #[serde(default)]
    pub final_quantity: Option<u32>,
    #[serde(default)]
    pub customer_notes: Option<String>,
    #[serde(default)]
    pub admin_notes: Option<String>,
}

impl OrderItem {
    /// An item counts as priced once both quote fields are present.
    pub fn is_priced(&self) -> bool {
        self.quoted_unit_price.is_some() && self.final_quantity.is_some()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: u32,
    pub status: OrderStatus,
    #[serde(default)]
    pub items: Vec<OrderItem>,
    pub created_at: String,
    #[serde(default)]
    pub customer_name: Option<String>,
    #[serde(default)]
    pub customer_comment: Option<String>,
    #[serde(default)]
    pub admin_comment: Option<String>,
    #[serde(default)]
    pub quoted_total: Option<f64>,
    #[serde(default)]
    pub priced_by_name: Option<String>,
    #[serde(default)]
    pub pricing_date: Option<String>,
    #[serde(default)]
    pub business_invoice_type: InvoiceType,
    #[serde(default)]
    pub invoice_number: Option<String>,
    #[serde(default)]
    pub invoice_date: Option<String>,
    #[serde(default)]
    pub has_payment_receipts: bool,
    #[serde(default)]
    pub assigned_dealer_name: Option<String>,
    #[serde(default)]
    pub dealer_notes: Option<String>,
    /// Commission fields are computed server-side; shown as-is
    #[serde(default)]
    pub effective_commission_rate: Option<f64>,
    #[serde(default)]
    pub dealer_commission_amount: Option<f64>,
}

impl Order {
    pub fn is_priced(&self) -> bool {
        self.quoted_total.is_some()
    }

    pub fn has_invoice(&self) -> bool {
        self.invoice_number.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn item_priced_needs_both_fields() {
        let mut item = OrderItem {
            id: 1,
            product_id: 9,
            product_name: "چسب صنعتی".to_string(),
            requested_quantity: 10,
            quoted_unit_price: None,
            final_quantity: None,
            customer_notes: None,
            admin_notes: None,
        };
        assert!(!item.is_priced());
        item.quoted_unit_price = Some(125_000.0);
        assert!(!item.is_priced());
        item.final_quantity = Some(8);
        assert!(item.is_priced());
    }

    #[test]
    fn order_decodes_with_missing_optional_fields() {
        let json = r#"{
            "id": 42,
            "status": "pending_pricing",
            "created_at": "2024-05-01T10:30:00Z"
        }"#;
        let order: Order = serde_json::from_str(json).unwrap();
        assert_eq!(order.id, 42);
        assert_eq!(order.status, OrderStatus::PendingPricing);
        assert!(order.items.is_empty());
        assert!(!order.has_payment_receipts);
        assert_eq!(order.business_invoice_type, InvoiceType::Unofficial);
        assert!(!order.is_priced());
        assert!(!order.has_invoice());
    }

    #[test]
    fn invoice_type_wire_names() {
        assert_eq!(serde_json::to_string(&InvoiceType::Official).unwrap(), "\"official\"");
        let t: InvoiceType = serde_json::from_str("\"unofficial\"").unwrap();
        assert_eq!(t, InvoiceType::Unofficial);
    }
}
