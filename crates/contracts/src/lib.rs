//! Wire contracts shared with the backend.
//!
//! Every type here mirrors a JSON payload of the HTTP API one to one;
//! the frontend never reshapes these on the wire.

pub mod portfolio;
pub mod sales;

pub use portfolio::PortfolioItem;
pub use sales::{PurchaseLot, Sale, SaleCalculation, SaleUpdate};

use serde::{Deserialize, Serialize};

/// Error envelope used by every endpoint instead of a record on failure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
