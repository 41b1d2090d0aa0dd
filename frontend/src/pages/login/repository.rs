use crate::api::{
    ApiClient, ApiError, AuthResponse, ChangePasswordRequest, LoginRequest, MessageResponse,
    OAuthProvider, RegisterRequest, ResetPasswordRequest, UpdateProfileRequest, UserProfile,
};
use std::rc::Rc;

#[derive(Clone)]
pub struct AuthRepository {
    client: Rc<ApiClient>,
}

impl Default for AuthRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl AuthRepository {
    pub fn new() -> Self {
        Self {
            client: Rc::new(ApiClient::new()),
        }
    }

    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub fn stored_token(&self) -> Option<String> {
        self.client.token()
    }

    pub fn clear_session(&self) {
        self.client.clear_session();
    }

    pub async fn login(&self, request: LoginRequest) -> Result<AuthResponse, ApiError> {
        self.client.login(&request).await
    }

    pub async fn register(&self, request: RegisterRequest) -> Result<AuthResponse, ApiError> {
        self.client.register(&request).await
    }

    pub async fn complete_oauth(
        &self,
        provider: OAuthProvider,
        code: &str,
    ) -> Result<AuthResponse, ApiError> {
        self.client.oauth_callback(provider, code).await
    }

    pub async fn logout(&self) -> Result<(), ApiError> {
        self.client.logout().await
    }

    pub async fn me(&self) -> Result<UserProfile, ApiError> {
        self.client.get_me().await
    }

    pub async fn update_profile(
        &self,
        request: UpdateProfileRequest,
    ) -> Result<UserProfile, ApiError> {
        self.client.update_profile(&request).await
    }

    pub async fn change_password(
        &self,
        request: ChangePasswordRequest,
    ) -> Result<MessageResponse, ApiError> {
        self.client.change_password(&request).await
    }

    pub async fn request_password_reset(&self, email: String) -> Result<MessageResponse, ApiError> {
        self.client.request_password_reset(email).await
    }

    pub async fn reset_password(
        &self,
        request: ResetPasswordRequest,
    ) -> Result<MessageResponse, ApiError> {
        self.client.reset_password(&request).await
    }
}
