use sqlx::PgPool;

/// Full bootstrap test: connect, migrate, verify schema.
#[sqlx::test(migrations = "./migrations")]
async fn test_full_bootstrap(pool: PgPool) {
    autoshop_db::health_check(&pool).await.unwrap();

    let tables = [
        "company_roles",
        "employees",
        "customers",
        "vehicles",
        "common_services",
        "orders",
        "order_info",
        "order_services",
    ];

    for table in tables {
        let exists: (bool,) = sqlx::query_as(
            "SELECT EXISTS (SELECT 1 FROM information_schema.tables WHERE table_name = $1)",
        )
        .bind(table)
        .fetch_one(&pool)
        .await
        .unwrap_or_else(|e| panic!("{table} lookup failed: {e}"));
        assert!(exists.0, "{table} should exist after migrations");
    }
}

/// The three company roles are seeded with stable ids.
#[sqlx::test(migrations = "./migrations")]
async fn test_roles_seeded(pool: PgPool) {
    let roles = autoshop_db::repositories::RoleRepo::list(&pool).await.unwrap();
    let names: Vec<(i64, &str)> = roles.iter().map(|r| (r.id, r.name.as_str())).collect();
    assert_eq!(names, vec![(1, "employee"), (2, "manager"), (3, "admin")]);

    let name = autoshop_db::repositories::RoleRepo::resolve_name(&pool, 3)
        .await
        .unwrap();
    assert_eq!(name, "admin");
}
