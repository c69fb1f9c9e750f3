//! Data Models
//!
//! Wire types for the REST backend plus the small read-only helpers the
//! views need. Anything the backend computes (totals, commission,
//! status transitions) is deserialized and displayed, never derived here.

pub mod order;
pub mod product;
pub mod receipt;
pub mod status;
pub mod user;

pub use order::{InvoiceType, Order, OrderItem};
pub use product::{Category, Product, ShipmentAnnouncement};
pub use receipt::{PaymentReceipt, ReceiptFileType};
pub use status::OrderStatus;
pub use user::{CustomerInfo, UserData};
