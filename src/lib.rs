//! # places-service
//!
//! REST API service exposing a single `places` resource backed by a
//! PostgreSQL table.
//!
//! The service is a thin translation layer: each HTTP endpoint maps to one
//! parameterized SQL statement against the `places` table. There is no
//! business logic beyond decoding JSON, running the statement, and encoding
//! the outcome.
//!
//! ## Architecture
//!
//! ```text
//! Clients (HTTP)
//!     │
//!     ├── REST Handlers (api/)
//!     │
//!     ├── PlaceStore (persistence/)
//!     │
//!     └── PostgreSQL (places table)
//! ```

pub mod api;
pub mod app_state;
pub mod config;
pub mod error;
pub mod persistence;
