//! Query parameter types shared by API handlers.

use autoshop_core::types::DbId;
use serde::Deserialize;

/// `?query=` for the customer search endpoint.
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub query: String,
}

/// Optional `?customer_id=` filter for the vehicle listing.
#[derive(Debug, Deserialize)]
pub struct VehicleFilter {
    pub customer_id: Option<DbId>,
}
