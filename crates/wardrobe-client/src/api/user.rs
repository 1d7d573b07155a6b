//! User profile endpoints.

use reqwest::Method;
use validator::Validate;
use wardrobe_types::user::{ChangePasswordRequest, UpdateProfileRequest, UserProfile};

use crate::client::{RequestOptions, WardrobeClient};
use crate::error::ClientError;

impl WardrobeClient {
    /// Profile of the authenticated user.
    pub async fn get_profile(&self) -> Result<UserProfile, ClientError> {
        self.get("/api/user/profile").await
    }

    /// Apply a partial profile update; resolves to the updated profile.
    pub async fn update_profile(
        &self,
        update: &UpdateProfileRequest,
    ) -> Result<UserProfile, ClientError> {
        update.validate()?;
        self.put("/api/user/profile", update).await
    }

    pub async fn change_password(&self, request: &ChangePasswordRequest) -> Result<(), ClientError> {
        request.validate()?;
        self.execute(Method::PUT, "/api/user/password", RequestOptions::json(request)?)
            .await
    }
}
