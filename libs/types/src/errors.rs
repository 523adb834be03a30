//! Error types for the matching engine
//!
//! Every rejection leaves engine state untouched. Callers that want
//! silent no-op behavior simply discard the `Err`; the protocol layer
//! does exactly that.

use thiserror::Error;

/// Order admission and lifecycle errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum OrderError {
    #[error("invalid price: {0}")]
    InvalidPrice(i64),

    #[error("invalid quantity: {0}")]
    InvalidQuantity(i64),

    #[error("duplicate order id: {order_id}")]
    DuplicateId { order_id: String },

    #[error("order not found: {order_id}")]
    NotFound { order_id: String },

    #[error("order cannot be modified: {order_id}")]
    NotModifiable { order_id: String },
}
