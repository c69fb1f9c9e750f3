//! REST Client
//!
//! One module per backend resource, all sharing the plumbing in
//! `http` and the `ApiError` taxonomy. Requests carry an optional
//! `AbortSignal` from an abort scope owned by the calling page.

pub mod abort;
pub mod auth;
pub mod customers;
pub mod error;
pub mod http;
pub mod invoices;
pub mod orders;
pub mod products;
pub mod receipts;

pub use error::ApiError;
