//! Shared setup for tests that talk to a real MySQL server.
//!
//! The tests using this are `#[ignore]`d; run them with
//! `TEST_DATABASE_URL=mysql://root:@localhost:3306 cargo test -- --ignored`.
//! Every call to `setup_test_db()` creates its own scratch database from
//! `schema.sql`, so tests never see each other's rows.

#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};

use sqlx::{mysql::MySqlPoolOptions, MySqlPool};
use survey_app_backend::{config::app_config::connect_options_from_url, db::DB};

const SCHEMA: &str = include_str!("../../schema.sql");

static COUNTER: AtomicUsize = AtomicUsize::new(0);

pub struct TestDb {
    pub db: DB,
    admin: MySqlPool,
    name: String,
}

pub async fn setup_test_db() -> TestDb {
    let url = std::env::var("TEST_DATABASE_URL")
        .expect("TEST_DATABASE_URL must point at a MySQL server");
    let options = connect_options_from_url(&url).expect("Invalid TEST_DATABASE_URL");
    let admin = MySqlPoolOptions::new()
        .max_connections(1)
        .connect_with(options.clone())
        .await
        .expect("Failed to connect to test server");

    let name = format!(
        "survey_test_{}_{}",
        std::process::id(),
        COUNTER.fetch_add(1, Ordering::SeqCst)
    );
    sqlx::raw_sql(&format!(
        "DROP DATABASE IF EXISTS `{name}`; CREATE DATABASE `{name}` CHARACTER SET utf8mb4;"
    ))
    .execute(&admin)
    .await
    .expect("Failed to create test database");

    let pool = MySqlPoolOptions::new()
        .max_connections(8)
        .connect_with(options.database(&name))
        .await
        .expect("Failed to connect to test database");
    sqlx::raw_sql(SCHEMA)
        .execute(&pool)
        .await
        .expect("Failed to load schema");

    TestDb {
        db: DB::from_pool(pool),
        admin,
        name,
    }
}

impl TestDb {
    pub async fn count(&self, table: &str) -> i64 {
        sqlx::query_scalar(&format!("SELECT COUNT(*) FROM {table}"))
            .fetch_one(&self.db.pool)
            .await
            .expect("Failed to count rows")
    }

    pub async fn teardown(self) {
        self.db.close().await;
        sqlx::raw_sql(&format!("DROP DATABASE IF EXISTS `{}`", self.name))
            .execute(&self.admin)
            .await
            .expect("Failed to drop test database");
    }
}
