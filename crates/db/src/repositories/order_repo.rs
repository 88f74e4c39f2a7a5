//! Repository for `orders`, `order_info` and `order_services`.
//!
//! Updates go through [`crate::order_store::PgOrderStore`]; this module
//! covers create, read and delete plus the line-item statements both share.

use std::collections::HashMap;

use autoshop_core::order::{derive_order_status, Completion, ServiceLine};
use autoshop_core::types::DbId;
use sqlx::{PgConnection, PgPool};

use crate::models::order::{
    CreateOrder, Order, OrderDetail, OrderInfo, OrderListItem, OrderServiceItem, OrderSummary,
};

/// Column list for the `orders` table.
const COLUMNS: &str = "id, employee_id, customer_id, vehicle_id, order_description, \
                        estimated_completion_date, active_order, created_at, updated_at";

/// Column list for the `order_info` table.
const INFO_COLUMNS: &str = "order_id, order_total_price, estimated_completion_date, \
                             notes_for_internal_use, notes_for_customer, additional_request, \
                             additional_requests_completed, updated_at";

/// Line items joined with the catalog name.
const SERVICE_ITEM_SELECT: &str = "SELECT os.order_id, os.service_id, cs.name AS service_name, \
                                   os.service_completed \
                                   FROM order_services os \
                                   JOIN common_services cs ON cs.id = os.service_id";

/// Failure modes of [`OrderRepo::create`].
#[derive(Debug, thiserror::Error)]
pub enum OrderCreateError {
    #[error("Service ID {0} does not exist.")]
    UnknownService(DbId),

    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

/// Provides create/read/delete operations for orders.
pub struct OrderRepo;

impl OrderRepo {
    /// Create an order, its info row and its line items in one transaction.
    ///
    /// Every referenced service is checked before anything is written; the
    /// initial `active_order` follows the same completion rule as updates.
    pub async fn create(pool: &PgPool, input: &CreateOrder) -> Result<OrderDetail, OrderCreateError> {
        let mut tx = pool.begin().await?;

        for line in &input.services {
            if !Self::service_exists(&mut tx, line.service_id).await? {
                return Err(OrderCreateError::UnknownService(line.service_id));
            }
        }

        let completed = input
            .additional_requests_completed
            .unwrap_or(Completion::Done);
        let status = derive_order_status(
            &input.services,
            input.additional_request.as_deref(),
            completed,
            None,
        );

        let insert_order = format!(
            "INSERT INTO orders
                (employee_id, customer_id, vehicle_id, order_description,
                 estimated_completion_date, active_order)
             VALUES ($1, $2, $3, COALESCE($4, ''), $5, $6)
             RETURNING {COLUMNS}"
        );
        let order = sqlx::query_as::<_, Order>(&insert_order)
            .bind(input.employee_id)
            .bind(input.customer_id)
            .bind(input.vehicle_id)
            .bind(&input.order_description)
            .bind(input.estimated_completion_date)
            .bind(status.id())
            .fetch_one(&mut *tx)
            .await?;

        let insert_info = format!(
            "INSERT INTO order_info
                (order_id, order_total_price, estimated_completion_date,
                 notes_for_internal_use, notes_for_customer, additional_request,
                 additional_requests_completed)
             VALUES ($1, COALESCE($2, 0), $3, COALESCE($4, ''), COALESCE($5, ''), $6, $7)
             RETURNING {INFO_COLUMNS}"
        );
        let order_info = sqlx::query_as::<_, OrderInfo>(&insert_info)
            .bind(order.id)
            .bind(input.order_total_price)
            .bind(input.estimated_completion_date)
            .bind(&input.notes_for_internal_use)
            .bind(&input.notes_for_customer)
            .bind(&input.additional_request)
            .bind(i16::from(completed))
            .fetch_one(&mut *tx)
            .await?;

        Self::insert_service_lines(&mut tx, order.id, &input.services).await?;
        let services = Self::service_items(&mut tx, order.id).await?;

        tx.commit().await?;
        tracing::info!(order_id = order.id, status = ?status, "Order created");

        Ok(OrderDetail {
            order,
            order_info,
            services,
        })
    }

    /// Find an order with its info row and line items.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<OrderDetail>, sqlx::Error> {
        let mut conn = pool.acquire().await?;

        let query = format!("SELECT {COLUMNS} FROM orders WHERE id = $1");
        let Some(order) = sqlx::query_as::<_, Order>(&query)
            .bind(id)
            .fetch_optional(&mut *conn)
            .await?
        else {
            return Ok(None);
        };

        let info_query = format!("SELECT {INFO_COLUMNS} FROM order_info WHERE order_id = $1");
        let order_info = sqlx::query_as::<_, OrderInfo>(&info_query)
            .bind(id)
            .fetch_one(&mut *conn)
            .await?;

        let services = Self::service_items(&mut conn, id).await?;

        Ok(Some(OrderDetail {
            order,
            order_info,
            services,
        }))
    }

    /// List all orders, newest first, with customer, vehicle, employee and
    /// line item details.
    pub async fn list(pool: &PgPool) -> Result<Vec<OrderListItem>, sqlx::Error> {
        let summaries = sqlx::query_as::<_, OrderSummary>(
            "SELECT
                o.id AS order_id,
                o.created_at AS order_date,
                o.active_order,
                v.year AS vehicle_year,
                v.make AS vehicle_make,
                v.model AS vehicle_model,
                v.color AS vehicle_color,
                v.mileage AS vehicle_mileage,
                v.serial AS vehicle_serial,
                v.tag AS vehicle_tag,
                c.first_name || ' ' || c.last_name AS customer_name,
                c.email AS customer_email,
                c.phone_number AS customer_phone_number,
                e.first_name || ' ' || e.last_name AS employee_name,
                oi.order_total_price,
                oi.estimated_completion_date,
                oi.additional_request,
                oi.additional_requests_completed
             FROM orders o
             JOIN vehicles v ON v.id = o.vehicle_id
             JOIN customers c ON c.id = o.customer_id
             JOIN employees e ON e.id = o.employee_id
             JOIN order_info oi ON oi.order_id = o.id
             ORDER BY o.created_at DESC, o.id DESC",
        )
        .fetch_all(pool)
        .await?;

        let ids: Vec<DbId> = summaries.iter().map(|s| s.order_id).collect();
        let query = format!("{SERVICE_ITEM_SELECT} WHERE os.order_id = ANY($1) ORDER BY os.id");
        let items = sqlx::query_as::<_, OrderServiceItem>(&query)
            .bind(&ids)
            .fetch_all(pool)
            .await?;

        let mut by_order: HashMap<DbId, Vec<OrderServiceItem>> = HashMap::new();
        for item in items {
            by_order.entry(item.order_id).or_default().push(item);
        }

        Ok(summaries
            .into_iter()
            .map(|summary| {
                let services = by_order.remove(&summary.order_id).unwrap_or_default();
                OrderListItem { summary, services }
            })
            .collect())
    }

    /// Delete an order with its info row and line items in one transaction.
    ///
    /// Returns `true` if the order existed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let mut tx = pool.begin().await?;

        sqlx::query("DELETE FROM order_services WHERE order_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;
        sqlx::query("DELETE FROM order_info WHERE order_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;
        let result = sqlx::query("DELETE FROM orders WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        if result.rows_affected() == 0 {
            tx.rollback().await?;
            return Ok(false);
        }

        tx.commit().await?;
        Ok(true)
    }

    // -----------------------------------------------------------------------
    // Line item helpers (shared with the order store)
    // -----------------------------------------------------------------------

    /// Line items of one order in insertion order.
    pub async fn service_items(
        conn: &mut PgConnection,
        order_id: DbId,
    ) -> Result<Vec<OrderServiceItem>, sqlx::Error> {
        let query = format!("{SERVICE_ITEM_SELECT} WHERE os.order_id = $1 ORDER BY os.id");
        sqlx::query_as::<_, OrderServiceItem>(&query)
            .bind(order_id)
            .fetch_all(conn)
            .await
    }

    /// Catalog existence check backed by a count query.
    pub(crate) async fn service_exists(
        conn: &mut PgConnection,
        service_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let count = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM common_services WHERE id = $1",
        )
        .bind(service_id)
        .fetch_one(conn)
        .await?;
        Ok(count > 0)
    }

    /// Insert all `lines` for an order with a single `UNNEST` statement.
    pub(crate) async fn insert_service_lines(
        conn: &mut PgConnection,
        order_id: DbId,
        lines: &[ServiceLine],
    ) -> Result<(), sqlx::Error> {
        if lines.is_empty() {
            return Ok(());
        }

        let service_ids: Vec<DbId> = lines.iter().map(|l| l.service_id).collect();
        let completed: Vec<i16> = lines.iter().map(|l| l.service_completed.into()).collect();

        sqlx::query(
            "INSERT INTO order_services (order_id, service_id, service_completed) \
             SELECT $1, t.service_id, t.service_completed \
             FROM UNNEST($2::bigint[], $3::smallint[]) WITH ORDINALITY \
                AS t(service_id, service_completed, ord) \
             ORDER BY t.ord",
        )
        .bind(order_id)
        .bind(&service_ids)
        .bind(&completed)
        .execute(conn)
        .await?;
        Ok(())
    }
}
