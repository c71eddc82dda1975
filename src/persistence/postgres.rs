//! PostgreSQL implementation of the place repository.

use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use uuid::Uuid;

use super::models::{Place, now_utc};
use crate::config::ServiceConfig;
use crate::error::PlaceError;

type PlaceRow = (String, String, String, String, String);

/// PostgreSQL-backed place repository using `sqlx::PgPool`.
///
/// The pool is internally synchronized; a single `PlaceStore` is shared
/// across all request handlers.
#[derive(Debug, Clone)]
pub struct PlaceStore {
    pool: PgPool,
}

impl PlaceStore {
    /// Creates a new store around an existing connection pool.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Opens a connection pool from the service configuration.
    ///
    /// Connects eagerly: startup fails if the database is unreachable.
    ///
    /// # Errors
    ///
    /// Returns a [`PlaceError::Database`] if the pool cannot be established
    /// within the configured timeout.
    pub async fn connect(config: &ServiceConfig) -> Result<Self, PlaceError> {
        let pool = PgPoolOptions::new()
            .max_connections(config.database_max_connections)
            .min_connections(config.database_min_connections)
            .acquire_timeout(std::time::Duration::from_secs(
                config.database_connect_timeout_secs,
            ))
            .connect(&config.database_url)
            .await?;

        Ok(Self::new(pool))
    }

    /// Inserts a new place and returns the created row.
    ///
    /// The id is a freshly generated UUIDv4 and `created_at == updated_at`
    /// by construction: both come from a single timestamp.
    ///
    /// # Errors
    ///
    /// Returns a [`PlaceError::Database`] on database failure.
    pub async fn create(&self, name: &str, code: &str) -> Result<Place, PlaceError> {
        let id = Uuid::new_v4().to_string();
        let now = now_utc();

        let row = sqlx::query_as::<_, PlaceRow>(
            "INSERT INTO places (id, name, code, created_at, updated_at) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING id, name, code, created_at, updated_at",
        )
        .bind(&id)
        .bind(name)
        .bind(code)
        .bind(&now)
        .bind(&now)
        .fetch_one(&self.pool)
        .await?;

        Ok(row_to_place(row))
    }

    /// Fetches a single place by id.
    ///
    /// # Errors
    ///
    /// Returns [`PlaceError::NotFound`] when no row matches the id and
    /// [`PlaceError::Database`] on any other database failure.
    pub async fn get_by_id(&self, id: &str) -> Result<Place, PlaceError> {
        let row = sqlx::query_as::<_, PlaceRow>(
            "SELECT id, name, code, created_at, updated_at FROM places WHERE id = $1",
        )
        .bind(id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::RowNotFound => PlaceError::NotFound(id.to_string()),
            other => PlaceError::Database(other.to_string()),
        })?;

        Ok(row_to_place(row))
    }

    /// Fetches all places in storage-default order.
    ///
    /// # Errors
    ///
    /// Returns a [`PlaceError::Database`] on database failure.
    pub async fn list(&self) -> Result<Vec<Place>, PlaceError> {
        let rows = sqlx::query_as::<_, PlaceRow>(
            "SELECT id, name, code, created_at, updated_at FROM places",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(row_to_place).collect())
    }

    /// Updates name, code, and `updated_at` for the matching row and
    /// returns the post-update row from the same statement.
    ///
    /// `created_at` and `id` are never touched.
    ///
    /// # Errors
    ///
    /// Returns [`PlaceError::NotFound`] when no row matches the id and
    /// [`PlaceError::Database`] on any other database failure.
    pub async fn update_by_id(
        &self,
        id: &str,
        name: &str,
        code: &str,
    ) -> Result<Place, PlaceError> {
        let now = now_utc();

        let row = sqlx::query_as::<_, PlaceRow>(
            "UPDATE places SET name = $1, code = $2, updated_at = $3 WHERE id = $4 \
             RETURNING id, name, code, created_at, updated_at",
        )
        .bind(name)
        .bind(code)
        .bind(&now)
        .bind(id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::RowNotFound => PlaceError::NotFound(id.to_string()),
            other => PlaceError::Database(other.to_string()),
        })?;

        Ok(row_to_place(row))
    }
}

fn row_to_place((id, name, code, created_at, updated_at): PlaceRow) -> Place {
    Place {
        id,
        name,
        code,
        created_at,
        updated_at,
    }
}
