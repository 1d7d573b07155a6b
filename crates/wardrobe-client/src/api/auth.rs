//! Authentication endpoints.

use validator::Validate;
use wardrobe_types::auth::{LoginRequest, RegisterRequest};
use wardrobe_types::user::UserProfile;

use crate::client::WardrobeClient;
use crate::error::ClientError;
use crate::session::StoredSession;

impl WardrobeClient {
    /// Authenticate and persist the returned bearer token together with
    /// the username it was issued for. Resolves to the raw token.
    pub async fn login(&self, credentials: &LoginRequest) -> Result<String, ClientError> {
        credentials.validate()?;
        let token: String = self.post("/api/auth/login", credentials).await?;
        let session = StoredSession::new(token.clone(), Some(credentials.username.clone()));
        self.session_store().save(&session).await?;
        tracing::debug!("Logged in as {}", credentials.username);
        Ok(token)
    }

    /// Create an account; resolves to the created profile.
    pub async fn register(&self, request: &RegisterRequest) -> Result<UserProfile, ClientError> {
        request.validate()?;
        self.post("/api/auth/register", request).await
    }

    /// Drop the stored session. Purely client-side; the backend keeps no
    /// session state beyond the token itself.
    pub async fn logout(&self) -> Result<(), ClientError> {
        self.session_store().clear().await
    }
}
