//! Staff role authorization extractor.

use axum::{async_trait, extract::FromRequestParts, http::request::Parts};
use uuid::Uuid;

use domain::models::UserRole;
use persistence::repositories::UserRepository;

use crate::app::AppState;
use crate::error::ApiError;
use crate::extractors::UserAuth;

/// An authenticated user confirmed to hold a staff role.
///
/// Layered on top of [`UserAuth`]: the token only proves identity, the role
/// comes from the `users` table at request time. A token whose subject no
/// longer exists is treated as unauthenticated, not as a missing resource.
#[derive(Debug, Clone)]
pub struct StaffAuth {
    pub user_id: Uuid,
    pub role: UserRole,
}

#[async_trait]
impl FromRequestParts<AppState> for StaffAuth {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth = UserAuth::from_request_parts(parts, state).await?;

        let repo = UserRepository::new(state.pool.clone());
        let role = repo
            .find_role(auth.user_id)
            .await?
            .ok_or_else(|| ApiError::Unauthorized("Unknown user".to_string()))?;

        if !role.is_staff() {
            return Err(ApiError::Forbidden("Staff access required".to_string()));
        }

        Ok(StaffAuth {
            user_id: auth.user_id,
            role,
        })
    }
}
