use serde_json::json;

use super::{
    client::ApiClient,
    types::{
        ApiError, AuthResponse, ChangePasswordRequest, ForgotPasswordRequest, LoginRequest,
        MessageResponse, OAuthCallbackRequest, OAuthProvider, RegisterRequest,
        ResetPasswordRequest, UpdateProfileRequest, UserEnvelope, UserProfile,
    },
};

impl ApiClient {
    pub async fn login(&self, request: &LoginRequest) -> Result<AuthResponse, ApiError> {
        let response: AuthResponse = self
            .post_public("/auth/login", request, "Login failed. Please try again.")
            .await?;
        self.persist_session(&response)?;
        Ok(response)
    }

    pub async fn register(&self, request: &RegisterRequest) -> Result<AuthResponse, ApiError> {
        let response: AuthResponse = self
            .post_public(
                "/auth/register",
                request,
                "Registration failed. Please try again.",
            )
            .await?;
        self.persist_session(&response)?;
        Ok(response)
    }

    pub async fn oauth_callback(
        &self,
        provider: OAuthProvider,
        code: &str,
    ) -> Result<AuthResponse, ApiError> {
        let path = format!("/auth/{}/callback", provider.as_str());
        let fallback = format!("{} sign-in failed.", provider.label());
        let response: AuthResponse = self
            .post_public(
                &path,
                &OAuthCallbackRequest {
                    code: code.to_string(),
                },
                &fallback,
            )
            .await?;
        self.persist_session(&response)?;
        Ok(response)
    }

    /// Server-side invalidation only; the caller owns local cleanup.
    pub async fn logout(&self) -> Result<(), ApiError> {
        let _: serde_json::Value = self
            .post("/auth/logout", &json!({}), "Logout failed")
            .await?;
        Ok(())
    }

    pub async fn get_me(&self) -> Result<UserProfile, ApiError> {
        let envelope: UserEnvelope = self.get("/auth/me", &[], "Session expired").await?;
        Ok(envelope.into())
    }

    pub async fn update_profile(
        &self,
        request: &UpdateProfileRequest,
    ) -> Result<UserProfile, ApiError> {
        let envelope: UserEnvelope = self
            .put("/auth/profile", request, "Failed to update profile")
            .await?;
        Ok(envelope.into())
    }

    pub async fn change_password(
        &self,
        request: &ChangePasswordRequest,
    ) -> Result<MessageResponse, ApiError> {
        self.post(
            "/auth/change-password",
            request,
            "Failed to change password",
        )
        .await
    }

    pub async fn request_password_reset(&self, email: String) -> Result<MessageResponse, ApiError> {
        self.post_public(
            "/auth/forgot-password",
            &ForgotPasswordRequest { email },
            "Failed to send reset link",
        )
        .await
    }

    pub async fn reset_password(
        &self,
        request: &ResetPasswordRequest,
    ) -> Result<MessageResponse, ApiError> {
        self.post_public(
            "/auth/reset-password",
            request,
            "Failed to reset password",
        )
        .await
    }

    pub fn clear_session(&self) {
        self.token_store().clear();
    }

    fn persist_session(&self, response: &AuthResponse) -> Result<(), ApiError> {
        if response.token.trim().is_empty() {
            return Err(ApiError::decode("Backend returned an empty token"));
        }
        self.token_store()
            .set(&response.token)
            .map_err(ApiError::unknown)
    }
}
