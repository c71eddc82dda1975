//! Persistence layer: the PostgreSQL-backed `places` table.
//!
//! Provides [`postgres::PlaceStore`], the component owning the database
//! connection pool. Each repository operation is a single parameterized
//! SQL round trip via `sqlx::PgPool`.

pub mod models;
pub mod postgres;
