//! Order status enums and the completion rule.
//!
//! The database stores every flag as SMALLINT. These enums are the single
//! place where those integers are interpreted; everything above the
//! repository layer works with the typed values.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::types::DbId;

/// `received` value that forces an order into [`OrderStatus::Returned`].
pub const RECEIVED_OVERRIDE: i16 = 2;

/// Completion flag of a line item or of the additional-request work.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "i16", into = "i16")]
#[repr(i16)]
pub enum Completion {
    #[default]
    Pending = 0,
    Done = 1,
}

impl Completion {
    pub fn is_done(self) -> bool {
        self == Completion::Done
    }
}

impl From<Completion> for i16 {
    fn from(value: Completion) -> Self {
        value as i16
    }
}

impl TryFrom<i16> for Completion {
    type Error = CoreError;

    fn try_from(value: i16) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Completion::Pending),
            1 => Ok(Completion::Done),
            other => Err(CoreError::Validation(format!(
                "Invalid completion flag {other}. Must be 0 or 1"
            ))),
        }
    }
}

/// Derived state of an order, persisted as `orders.active_order`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "i16", into = "i16")]
#[repr(i16)]
pub enum OrderStatus {
    /// At least one service or the additional request is still open.
    Incomplete = 0,
    /// All work is done.
    Complete = 1,
    /// Vehicle handed back without full completion tracking.
    Returned = 2,
}

impl OrderStatus {
    /// Return the database value.
    pub fn id(self) -> i16 {
        self as i16
    }
}

impl From<OrderStatus> for i16 {
    fn from(value: OrderStatus) -> Self {
        value as i16
    }
}

impl TryFrom<i16> for OrderStatus {
    type Error = CoreError;

    fn try_from(value: i16) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(OrderStatus::Incomplete),
            1 => Ok(OrderStatus::Complete),
            2 => Ok(OrderStatus::Returned),
            other => Err(CoreError::Validation(format!(
                "Invalid order status {other}. Must be 0, 1 or 2"
            ))),
        }
    }
}

/// A requested line item: one catalog service and its completion flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceLine {
    pub service_id: DbId,
    #[serde(default)]
    pub service_completed: Completion,
}

/// Whether an additional request is present. Absent and empty both mean
/// "no extra request".
pub fn has_additional_request(additional_request: Option<&str>) -> bool {
    additional_request.is_some_and(|r| !r.is_empty())
}

/// Derive an order's status from the supplied line items and request flags.
///
/// An empty service list counts as complete. `received == 2` wins over
/// everything else.
pub fn derive_order_status(
    services: &[ServiceLine],
    additional_request: Option<&str>,
    additional_requests_completed: Completion,
    received: Option<i16>,
) -> OrderStatus {
    if received == Some(RECEIVED_OVERRIDE) {
        return OrderStatus::Returned;
    }

    let services_complete = services.iter().all(|s| s.service_completed.is_done());

    let complete = if has_additional_request(additional_request) {
        services_complete && additional_requests_completed.is_done()
    } else {
        services_complete
    };

    if complete {
        OrderStatus::Complete
    } else {
        OrderStatus::Incomplete
    }
}
