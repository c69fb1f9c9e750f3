//! Order Status
//!
//! Workflow states as the backend reports them. The client never
//! advances a status on its own; after any mutation the order is
//! re-fetched and this enum is re-read from the wire.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum OrderStatus {
    /// Submitted, waiting for an admin to quote prices
    PendingPricing,
    /// Priced, waiting for the customer to approve or reject
    WaitingCustomerApproval,
    /// Approved by the customer, payment not yet uploaded
    Confirmed,
    /// At least one payment receipt uploaded
    PaymentUploaded,
    /// Verified and closed
    Completed,
    /// Rejected by the customer
    Rejected,
    /// Cancelled
    Cancelled,
    /// A status this build does not know about yet
    Unknown(String),
}

impl OrderStatus {
    pub fn as_str(&self) -> &str {
        match self {
            OrderStatus::PendingPricing => "pending_pricing",
            OrderStatus::WaitingCustomerApproval => "waiting_customer_approval",
            OrderStatus::Confirmed => "confirmed",
            OrderStatus::PaymentUploaded => "payment_uploaded",
            OrderStatus::Completed => "completed",
            OrderStatus::Rejected => "rejected",
            OrderStatus::Cancelled => "cancelled",
            OrderStatus::Unknown(raw) => raw,
        }
    }

    /// Persian label shown in badges and tables
    pub fn label(&self) -> &str {
        match self {
            OrderStatus::PendingPricing => "در انتظار قیمت‌گذاری",
            OrderStatus::WaitingCustomerApproval => "در انتظار تأیید مشتری",
            OrderStatus::Confirmed => "تأیید شده",
            OrderStatus::PaymentUploaded => "رسید پرداخت ارسال شده",
            OrderStatus::Completed => "تکمیل شده",
            OrderStatus::Rejected => "رد شده",
            OrderStatus::Cancelled => "لغو شده",
            OrderStatus::Unknown(raw) => raw,
        }
    }

    pub fn color_class(&self) -> &'static str {
        match self {
            OrderStatus::PendingPricing => "status-pending",
            OrderStatus::WaitingCustomerApproval => "status-waiting",
            OrderStatus::Confirmed => "status-confirmed",
            OrderStatus::PaymentUploaded => "status-payment",
            OrderStatus::Completed => "status-completed",
            OrderStatus::Rejected => "status-rejected",
            OrderStatus::Cancelled => "status-cancelled",
            OrderStatus::Unknown(_) => "status-unknown",
        }
    }

    /// Admins may enter or revise a quote only here
    pub fn can_submit_pricing(&self) -> bool {
        matches!(self, OrderStatus::PendingPricing)
    }

    /// Customers may approve or reject only here
    pub fn can_decide_approval(&self) -> bool {
        matches!(self, OrderStatus::WaitingCustomerApproval)
    }

    /// Receipts may be uploaded only between approval and the first
    /// upload; from then on the office reviews what was sent.
    pub fn can_upload_receipt(&self) -> bool {
        matches!(self, OrderStatus::Confirmed)
    }

    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            OrderStatus::Completed | OrderStatus::Rejected | OrderStatus::Cancelled
        )
    }
}

impl From<String> for OrderStatus {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "pending_pricing" => OrderStatus::PendingPricing,
            "waiting_customer_approval" => OrderStatus::WaitingCustomerApproval,
            "confirmed" => OrderStatus::Confirmed,
            "payment_uploaded" => OrderStatus::PaymentUploaded,
            "completed" => OrderStatus::Completed,
            "rejected" => OrderStatus::Rejected,
            "cancelled" => OrderStatus::Cancelled,
            _ => OrderStatus::Unknown(raw),
        }
    }
}

impl From<OrderStatus> for String {
    fn from(status: OrderStatus) -> Self {
        status.as_str().to_string()
    }
}

impl Default for OrderStatus {
    fn default() -> Self {
        OrderStatus::PendingPricing
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_names_round_trip() {
        for name in [
            "pending_pricing",
            "waiting_customer_approval",
            "confirmed",
            "payment_uploaded",
            "completed",
            "rejected",
            "cancelled",
        ] {
            let status = OrderStatus::from(name.to_string());
            assert!(!matches!(status, OrderStatus::Unknown(_)), "{name}");
            assert_eq!(status.as_str(), name);
        }
    }

    #[test]
    fn unfamiliar_status_is_preserved() {
        let status = OrderStatus::from("on_hold".to_string());
        assert_eq!(status, OrderStatus::Unknown("on_hold".to_string()));
        assert_eq!(status.as_str(), "on_hold");
        assert_eq!(status.label(), "on_hold");
        assert!(!status.can_submit_pricing());
        assert!(!status.can_decide_approval());
        assert!(!status.can_upload_receipt());
        assert!(!status.is_terminal());
    }

    #[test]
    fn pricing_only_before_quote() {
        assert!(OrderStatus::PendingPricing.can_submit_pricing());
        assert!(!OrderStatus::WaitingCustomerApproval.can_submit_pricing());
        assert!(!OrderStatus::Confirmed.can_submit_pricing());
        assert!(!OrderStatus::Completed.can_submit_pricing());
    }

    #[test]
    fn approval_only_while_waiting() {
        assert!(OrderStatus::WaitingCustomerApproval.can_decide_approval());
        assert!(!OrderStatus::PendingPricing.can_decide_approval());
        assert!(!OrderStatus::Confirmed.can_decide_approval());
        assert!(!OrderStatus::Rejected.can_decide_approval());
    }

    #[test]
    fn upload_window_is_confirmed_only() {
        assert!(OrderStatus::Confirmed.can_upload_receipt());
        assert!(!OrderStatus::PaymentUploaded.can_upload_receipt());
        assert!(!OrderStatus::WaitingCustomerApproval.can_upload_receipt());
        assert!(!OrderStatus::Completed.can_upload_receipt());
        assert!(!OrderStatus::Cancelled.can_upload_receipt());
    }

    #[test]
    fn at_most_one_action_per_status() {
        let statuses = [
            OrderStatus::PendingPricing,
            OrderStatus::WaitingCustomerApproval,
            OrderStatus::Confirmed,
            OrderStatus::PaymentUploaded,
            OrderStatus::Completed,
            OrderStatus::Rejected,
            OrderStatus::Cancelled,
            OrderStatus::Unknown("on_hold".to_string()),
        ];
        for status in statuses {
            let active = [
                status.can_submit_pricing(),
                status.can_decide_approval(),
                status.can_upload_receipt(),
            ]
            .into_iter()
            .filter(|b| *b)
            .count();
            assert!(active <= 1, "{}", status.as_str());
        }
    }

    #[test]
    fn terminal_states() {
        assert!(OrderStatus::Completed.is_terminal());
        assert!(OrderStatus::Rejected.is_terminal());
        assert!(OrderStatus::Cancelled.is_terminal());
        assert!(!OrderStatus::PaymentUploaded.is_terminal());
    }

    #[test]
    fn serde_uses_wire_names() {
        let json = serde_json::to_string(&OrderStatus::WaitingCustomerApproval).unwrap();
        assert_eq!(json, "\"waiting_customer_approval\"");
        let back: OrderStatus = serde_json::from_str("\"payment_uploaded\"").unwrap();
        assert_eq!(back, OrderStatus::PaymentUploaded);
        let unknown: OrderStatus = serde_json::from_str("\"archived\"").unwrap();
        assert_eq!(unknown, OrderStatus::Unknown("archived".to_string()));
    }
}
