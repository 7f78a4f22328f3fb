#![allow(dead_code)]

use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use flea_market::db::{DbPool, establish_connection_pool, get_connection};
use flea_market::models::auth::{AuthenticatedUser, JwtSettings};
use flea_market::repository::DieselRepository;
use flea_market::services::auth::sign_up;
use serde_json::json;
use tempfile::TempDir;

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("./migrations");

/// A migrated SQLite database living in a temporary directory that is
/// removed on drop.
pub struct TestDb {
    _dir: TempDir,
    pool: DbPool,
}

impl TestDb {
    pub fn new(filename: &str) -> Self {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join(filename);
        let url = path.to_str().expect("utf-8 temp path").to_string();

        let pool = establish_connection_pool(&url).expect("build pool");
        let mut conn = get_connection(&pool).expect("get connection");
        conn.run_pending_migrations(MIGRATIONS)
            .expect("run migrations");

        Self { _dir: dir, pool }
    }

    pub fn pool(&self) -> DbPool {
        self.pool.clone()
    }

    pub fn repo(&self) -> DieselRepository {
        DieselRepository::new(self.pool())
    }
}

pub fn jwt_settings() -> JwtSettings {
    JwtSettings {
        secret: "integration-secret".to_string(),
        expiry_minutes: 60,
    }
}

/// Registers a user directly through the service layer.
pub fn seed_user(repo: &DieselRepository, email: &str) -> AuthenticatedUser {
    let form = serde_json::from_value(json!({
        "name": "Seller",
        "email": email,
        "password": "secret-password",
    }))
    .expect("valid sign-up form");
    let user = sign_up(repo, form).expect("sign up");
    AuthenticatedUser {
        id: user.id,
        name: user.name.into_inner(),
        status: user.status,
    }
}
