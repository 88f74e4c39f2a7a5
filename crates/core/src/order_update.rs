//! The order update workflow.
//!
//! An update replaces an order's line items wholesale, patches its
//! `order_info` row and recomputes `orders.active_order`. All of it happens
//! inside one transaction obtained from an injected [`OrderStore`]; any
//! failure rolls the whole thing back.

use async_trait::async_trait;
use serde::Deserialize;

use crate::error::OrderUpdateError;
use crate::order::{derive_order_status, Completion, OrderStatus, ServiceLine};
use crate::types::DbId;

/// Request body of an order update.
///
/// Every field is optional. `None` for `additional_request` means "keep the
/// stored value"; an explicit empty string is a real value and is stored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OrderUpdate {
    pub services: Option<Vec<ServiceLine>>,
    #[serde(rename = "totalPrice", alias = "order_total_price")]
    pub total_price: Option<i64>,
    pub additional_request: Option<String>,
    pub additional_requests_completed: Option<Completion>,
    pub received: Option<i16>,
}

impl OrderUpdate {
    /// Supplied line items, or an empty slice when none were sent.
    pub fn service_lines(&self) -> &[ServiceLine] {
        self.services.as_deref().unwrap_or(&[])
    }

    /// Additional-request completion flag, defaulting to done.
    pub fn additional_requests_completed(&self) -> Completion {
        self.additional_requests_completed.unwrap_or(Completion::Done)
    }
}

/// Values written to `order_info` by an update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderInfoPatch {
    /// Overwrites the stored total.
    pub total_price: i64,
    /// Coalesced: `None` keeps the stored value.
    pub additional_request: Option<String>,
    pub additional_requests_completed: Completion,
}

impl OrderInfoPatch {
    pub fn from_update(update: &OrderUpdate) -> Self {
        Self {
            total_price: update.total_price.unwrap_or(0),
            additional_request: update.additional_request.clone(),
            additional_requests_completed: update.additional_requests_completed(),
        }
    }
}

/// Source of transactions for the workflow.
#[async_trait]
pub trait OrderStore: Send + Sync {
    type Tx: OrderTransaction;

    /// Acquire a connection and open a transaction on it.
    async fn begin(&self) -> Result<Self::Tx, OrderUpdateError>;
}

/// The statements the workflow issues inside one open transaction.
///
/// Dropping a transaction without calling [`commit`](Self::commit) must
/// discard its writes and release the connection.
#[async_trait]
pub trait OrderTransaction: Send + Sized {
    async fn order_exists(&mut self, order_id: DbId) -> Result<bool, OrderUpdateError>;

    /// Delete every line item of the order, returning how many were removed.
    async fn delete_order_services(&mut self, order_id: DbId) -> Result<u64, OrderUpdateError>;

    /// Catalog lookup for a single service id.
    async fn service_exists(&mut self, service_id: DbId) -> Result<bool, OrderUpdateError>;

    /// Insert all `lines` for the order in one statement.
    async fn insert_order_services(
        &mut self,
        order_id: DbId,
        lines: &[ServiceLine],
    ) -> Result<(), OrderUpdateError>;

    async fn update_order_info(
        &mut self,
        order_id: DbId,
        patch: &OrderInfoPatch,
    ) -> Result<(), OrderUpdateError>;

    async fn set_active_order(
        &mut self,
        order_id: DbId,
        status: OrderStatus,
    ) -> Result<(), OrderUpdateError>;

    async fn commit(self) -> Result<(), OrderUpdateError>;

    async fn rollback(self) -> Result<(), OrderUpdateError>;
}

/// Apply `update` to order `order_id` atomically and return the new status.
///
/// On any error the transaction is rolled back before returning; no retry
/// is attempted.
pub async fn update_order<S: OrderStore>(
    store: &S,
    order_id: DbId,
    update: &OrderUpdate,
) -> Result<OrderStatus, OrderUpdateError> {
    let mut tx = store.begin().await?;

    match apply_update(&mut tx, order_id, update).await {
        Ok(status) => {
            tx.commit().await?;
            tracing::info!(order_id, status = ?status, "Order updated");
            Ok(status)
        }
        Err(err) => {
            tracing::warn!(order_id, error = %err, "Order update failed, rolling back");
            if let Err(rollback_err) = tx.rollback().await {
                tracing::error!(order_id, error = %rollback_err, "Rollback failed");
            }
            Err(err)
        }
    }
}

async fn apply_update<T: OrderTransaction>(
    tx: &mut T,
    order_id: DbId,
    update: &OrderUpdate,
) -> Result<OrderStatus, OrderUpdateError> {
    if !tx.order_exists(order_id).await? {
        return Err(OrderUpdateError::OrderNotFound(order_id));
    }

    let removed = tx.delete_order_services(order_id).await?;
    tracing::debug!(order_id, removed, "Cleared existing order services");

    let lines = update.service_lines();
    if !lines.is_empty() {
        // Every id is checked before anything is inserted.
        for line in lines {
            if !tx.service_exists(line.service_id).await? {
                return Err(OrderUpdateError::UnknownService(line.service_id));
            }
        }
        tx.insert_order_services(order_id, lines).await?;
    }

    let patch = OrderInfoPatch::from_update(update);
    tx.update_order_info(order_id, &patch).await?;

    let status = derive_order_status(
        lines,
        update.additional_request.as_deref(),
        patch.additional_requests_completed,
        update.received,
    );
    tx.set_active_order(order_id, status).await?;

    Ok(status)
}
