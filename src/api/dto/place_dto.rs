//! Place-related DTOs for create and update operations.

use serde::Deserialize;
use utoipa::ToSchema;

/// Request body for `POST /places` and `PUT /places/{id}`.
///
/// Carries only the client-supplied fields; id and timestamps are always
/// server-assigned.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct PlaceRequest {
    /// Free-text label for the place.
    pub name: String,
    /// Short identifier code (e.g. `"PAR"`).
    pub code: String,
}
