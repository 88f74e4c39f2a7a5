//! Postgres-backed [`OrderStore`] for the order update workflow.

use async_trait::async_trait;
use autoshop_core::error::OrderUpdateError;
use autoshop_core::order::{OrderStatus, ServiceLine};
use autoshop_core::order_update::{OrderInfoPatch, OrderStore, OrderTransaction};
use autoshop_core::types::DbId;
use sqlx::{PgPool, Postgres, Transaction};

use crate::repositories::OrderRepo;

/// Hands out pooled transactions to [`autoshop_core::order_update::update_order`].
#[derive(Clone)]
pub struct PgOrderStore {
    pool: PgPool,
}

impl PgOrderStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// One open transaction. Dropping it without committing rolls back.
pub struct PgOrderTx {
    tx: Transaction<'static, Postgres>,
}

fn db_err(err: sqlx::Error) -> OrderUpdateError {
    OrderUpdateError::Database(err.to_string())
}

#[async_trait]
impl OrderStore for PgOrderStore {
    type Tx = PgOrderTx;

    async fn begin(&self) -> Result<Self::Tx, OrderUpdateError> {
        let tx = self.pool.begin().await.map_err(db_err)?;
        Ok(PgOrderTx { tx })
    }
}

#[async_trait]
impl OrderTransaction for PgOrderTx {
    async fn order_exists(&mut self, order_id: DbId) -> Result<bool, OrderUpdateError> {
        // Row lock serialises concurrent updates of the same order.
        let row = sqlx::query_scalar::<_, DbId>("SELECT id FROM orders WHERE id = $1 FOR UPDATE")
            .bind(order_id)
            .fetch_optional(&mut *self.tx)
            .await
            .map_err(db_err)?;
        Ok(row.is_some())
    }

    async fn delete_order_services(&mut self, order_id: DbId) -> Result<u64, OrderUpdateError> {
        let result = sqlx::query("DELETE FROM order_services WHERE order_id = $1")
            .bind(order_id)
            .execute(&mut *self.tx)
            .await
            .map_err(db_err)?;
        Ok(result.rows_affected())
    }

    async fn service_exists(&mut self, service_id: DbId) -> Result<bool, OrderUpdateError> {
        OrderRepo::service_exists(&mut self.tx, service_id)
            .await
            .map_err(db_err)
    }

    async fn insert_order_services(
        &mut self,
        order_id: DbId,
        lines: &[ServiceLine],
    ) -> Result<(), OrderUpdateError> {
        OrderRepo::insert_service_lines(&mut self.tx, order_id, lines)
            .await
            .map_err(db_err)
    }

    async fn update_order_info(
        &mut self,
        order_id: DbId,
        patch: &OrderInfoPatch,
    ) -> Result<(), OrderUpdateError> {
        sqlx::query(
            "UPDATE order_info SET
                order_total_price = $2,
                additional_request = COALESCE($3, additional_request),
                additional_requests_completed = $4
             WHERE order_id = $1",
        )
        .bind(order_id)
        .bind(patch.total_price)
        .bind(&patch.additional_request)
        .bind(i16::from(patch.additional_requests_completed))
        .execute(&mut *self.tx)
        .await
        .map_err(db_err)?;
        Ok(())
    }

    async fn set_active_order(
        &mut self,
        order_id: DbId,
        status: OrderStatus,
    ) -> Result<(), OrderUpdateError> {
        sqlx::query("UPDATE orders SET active_order = $2 WHERE id = $1")
            .bind(order_id)
            .bind(status.id())
            .execute(&mut *self.tx)
            .await
            .map_err(db_err)?;
        Ok(())
    }

    async fn commit(self) -> Result<(), OrderUpdateError> {
        self.tx.commit().await.map_err(db_err)
    }

    async fn rollback(self) -> Result<(), OrderUpdateError> {
        self.tx.rollback().await.map_err(db_err)
    }
}
