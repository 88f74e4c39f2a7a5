//! Order, order info and line item models.
//!
//! SMALLINT status columns are decoded straight into the core enums via
//! `#[sqlx(try_from = "i16")]`, so an out-of-range value surfaces as a
//! decode error instead of leaking into handlers.

use autoshop_core::order::{Completion, OrderStatus, ServiceLine};
use autoshop_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// An order row from the `orders` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Order {
    pub id: DbId,
    pub employee_id: DbId,
    pub customer_id: DbId,
    pub vehicle_id: DbId,
    pub order_description: String,
    pub estimated_completion_date: Option<Timestamp>,
    #[sqlx(try_from = "i16")]
    pub active_order: OrderStatus,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// The `order_info` row belonging to an order.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct OrderInfo {
    pub order_id: DbId,
    pub order_total_price: i64,
    pub estimated_completion_date: Option<Timestamp>,
    pub notes_for_internal_use: String,
    pub notes_for_customer: String,
    pub additional_request: Option<String>,
    #[sqlx(try_from = "i16")]
    pub additional_requests_completed: Completion,
    pub updated_at: Timestamp,
}

/// A line item joined with its catalog name.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct OrderServiceItem {
    #[serde(skip)]
    pub order_id: DbId,
    pub service_id: DbId,
    pub service_name: String,
    #[sqlx(try_from = "i16")]
    pub service_completed: Completion,
}

/// An order with its info row and line items.
#[derive(Debug, Clone, Serialize)]
pub struct OrderDetail {
    #[serde(flatten)]
    pub order: Order,
    pub order_info: OrderInfo,
    pub services: Vec<OrderServiceItem>,
}

/// One row of the order listing: the order joined with vehicle, customer,
/// employee and info columns.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct OrderSummary {
    pub order_id: DbId,
    pub order_date: Timestamp,
    #[sqlx(try_from = "i16")]
    pub active_order: OrderStatus,
    pub vehicle_year: i32,
    pub vehicle_make: String,
    pub vehicle_model: String,
    pub vehicle_color: Option<String>,
    pub vehicle_mileage: i64,
    pub vehicle_serial: Option<String>,
    pub vehicle_tag: Option<String>,
    pub customer_name: String,
    pub customer_email: String,
    pub customer_phone_number: String,
    pub employee_name: String,
    pub order_total_price: i64,
    pub estimated_completion_date: Option<Timestamp>,
    pub additional_request: Option<String>,
    #[sqlx(try_from = "i16")]
    pub additional_requests_completed: Completion,
}

/// An [`OrderSummary`] with its line items attached.
#[derive(Debug, Clone, Serialize)]
pub struct OrderListItem {
    #[serde(flatten)]
    pub summary: OrderSummary,
    pub services: Vec<OrderServiceItem>,
}

/// DTO for creating an order together with its info row and line items.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateOrder {
    pub employee_id: DbId,
    pub customer_id: DbId,
    pub vehicle_id: DbId,
    pub order_description: Option<String>,
    pub estimated_completion_date: Option<Timestamp>,
    /// Defaults to 0 if omitted.
    #[validate(range(min = 0))]
    pub order_total_price: Option<i64>,
    pub notes_for_internal_use: Option<String>,
    pub notes_for_customer: Option<String>,
    pub additional_request: Option<String>,
    /// Defaults to done (1) if omitted.
    pub additional_requests_completed: Option<Completion>,
    #[serde(default, alias = "order_services")]
    pub services: Vec<ServiceLine>,
}
