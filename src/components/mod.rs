//! UI Components
//!
//! Reusable Leptos components.

mod approval_form;
mod billing_fields;
mod error_banner;
mod invoice_panel;
mod notice;
mod order_items_table;
mod pricing_form;
mod product_card;
mod receipt_upload_modal;
mod receipts_list;
mod status_badge;

pub use approval_form::ApprovalForm;
pub use billing_fields::BillingInfoFields;
pub use error_banner::ErrorBanner;
pub use invoice_panel::InvoicePanel;
pub use notice::NoticeToast;
pub use order_items_table::OrderItemsTable;
pub use pricing_form::PricingForm;
pub use product_card::ProductCard;
pub use receipt_upload_modal::ReceiptUploadModal;
pub use receipts_list::ReceiptsList;
pub use status_badge::StatusBadge;
