use crate::{
    api::{
        ApiClient, ApiError, ChangePasswordRequest, LoginRequest, MessageResponse, OAuthProvider,
        RegisterRequest, ResetPasswordRequest, UpdateProfileRequest, UserProfile, UserRole,
    },
    pages::login::repository::AuthRepository,
};
use leptos::*;
use std::rc::Rc;

type AuthContext = (ReadSignal<AuthState>, WriteSignal<AuthState>);

/// Session snapshot shared with the component tree.
///
/// `is_authenticated` is only ever set together with `user`, after the backend
/// accepted the token.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AuthState {
    pub user: Option<UserProfile>,
    pub token: Option<String>,
    pub is_authenticated: bool,
    pub loading: bool,
    pub error: Option<String>,
}

impl AuthState {
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn role(&self) -> Option<UserRole> {
        self.user.as_ref().map(|u| u.role)
    }

    pub fn has_role(&self, role: UserRole) -> bool {
        self.is_authenticated && self.role() == Some(role)
    }

    pub fn has_any_role(&self, roles: &[UserRole]) -> bool {
        roles.iter().any(|role| self.has_role(*role))
    }

    fn sign_in(&mut self, user: UserProfile, token: Option<String>) {
        self.user = Some(user);
        self.token = token;
        self.is_authenticated = true;
        self.loading = false;
        self.error = None;
    }

    fn sign_out(&mut self) {
        self.user = None;
        self.token = None;
        self.is_authenticated = false;
        self.loading = false;
    }
}

fn create_auth_context() -> AuthContext {
    let (auth_state, set_auth_state) = create_signal(AuthState {
        loading: true,
        ..AuthState::default()
    });

    let api_client = use_context::<ApiClient>()
        .unwrap_or_else(ApiClient::new)
        .on_unauthorized(move || set_auth_state.update(AuthState::sign_out));
    provide_context(api_client.clone());

    let repo = AuthRepository::new_with_client(Rc::new(api_client));
    spawn_local(async move {
        if let Err(err) = check_auth_status(&repo, set_auth_state).await {
            log::debug!("no session restored on startup: {}", err);
        }
    });

    (auth_state, set_auth_state)
}

#[component]
pub fn AuthProvider(children: Children) -> impl IntoView {
    let ctx = create_auth_context();
    provide_context::<AuthContext>(ctx);
    view! { <>{children()}</> }
}

pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().unwrap_or_else(|| create_signal(AuthState::default()))
}

pub fn use_auth_repository() -> AuthRepository {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    AuthRepository::new_with_client(Rc::new(api))
}

/// Restores the session from the persisted token. A missing token never
/// touches the network; a rejected one ends in the same state as `logout`.
pub async fn check_auth_status(
    repo: &AuthRepository,
    set_auth_state: WriteSignal<AuthState>,
) -> Result<UserProfile, ApiError> {
    let Some(token) = repo.stored_token() else {
        set_auth_state.update(AuthState::sign_out);
        return Err(ApiError::unauthorized("No stored session"));
    };

    set_auth_state.update(|state| state.loading = true);
    match repo.me().await {
        Ok(user) => {
            set_auth_state.update(|state| state.sign_in(user.clone(), Some(token)));
            Ok(user)
        }
        Err(error) => {
            log::warn!("stored session rejected: {}", error);
            repo.clear_session();
            set_auth_state.update(AuthState::sign_out);
            Err(error)
        }
    }
}

async fn establish_session<F>(
    set_auth_state: WriteSignal<AuthState>,
    request: F,
) -> Result<UserProfile, ApiError>
where
    F: std::future::Future<Output = Result<crate::api::AuthResponse, ApiError>>,
{
    set_auth_state.update(|state| {
        state.loading = true;
        state.error = None;
    });

    match request.await {
        Ok(response) => {
            let user = response.user;
            set_auth_state.update(|state| state.sign_in(user.clone(), Some(response.token)));
            Ok(user)
        }
        Err(error) => {
            set_auth_state.update(|state| {
                state.loading = false;
                state.error = Some(error.error.clone());
            });
            Err(error)
        }
    }
}

pub async fn login_request(
    request: LoginRequest,
    repo: &AuthRepository,
    set_auth_state: WriteSignal<AuthState>,
) -> Result<UserProfile, ApiError> {
    establish_session(set_auth_state, repo.login(request)).await
}

pub async fn register_request(
    request: RegisterRequest,
    repo: &AuthRepository,
    set_auth_state: WriteSignal<AuthState>,
) -> Result<UserProfile, ApiError> {
    establish_session(set_auth_state, repo.register(request)).await
}

pub async fn complete_oauth(
    provider: OAuthProvider,
    code: &str,
    repo: &AuthRepository,
    set_auth_state: WriteSignal<AuthState>,
) -> Result<UserProfile, ApiError> {
    establish_session(set_auth_state, repo.complete_oauth(provider, code)).await
}

/// Best-effort server invalidation followed by unconditional local cleanup.
pub async fn logout(repo: &AuthRepository, set_auth_state: WriteSignal<AuthState>) {
    if let Err(error) = repo.logout().await {
        log::warn!("logout request failed, clearing local session anyway: {}", error);
    }
    repo.clear_session();
    set_auth_state.update(|state| {
        state.sign_out();
        state.error = None;
    });
}

pub async fn update_profile(
    updates: UpdateProfileRequest,
    repo: &AuthRepository,
    set_auth_state: WriteSignal<AuthState>,
) -> Result<UserProfile, ApiError> {
    match repo.update_profile(updates).await {
        Ok(user) => {
            set_auth_state.update(|state| {
                state.user = Some(user.clone());
                state.error = None;
            });
            Ok(user)
        }
        Err(error) => {
            set_auth_state.update(|state| state.error = Some(error.error.clone()));
            Err(error)
        }
    }
}

pub async fn change_password(
    request: ChangePasswordRequest,
    repo: &AuthRepository,
    set_auth_state: WriteSignal<AuthState>,
) -> Result<MessageResponse, ApiError> {
    match repo.change_password(request).await {
        Ok(message) => {
            set_auth_state.update(|state| state.error = None);
            Ok(message)
        }
        Err(error) => {
            set_auth_state.update(|state| state.error = Some(error.error.clone()));
            Err(error)
        }
    }
}

/// Sends the reset link. Does not touch the session.
pub async fn forgot_password(
    email: String,
    repo: &AuthRepository,
) -> Result<MessageResponse, ApiError> {
    let email = email.trim().to_string();
    crate::utils::validation::validate_email(&email).map_err(ApiError::validation)?;
    repo.request_password_reset(email).await
}

pub async fn reset_password(
    request: ResetPasswordRequest,
    repo: &AuthRepository,
) -> Result<MessageResponse, ApiError> {
    if request.token.trim().is_empty() {
        return Err(ApiError::validation("Reset link is invalid or incomplete"));
    }
    crate::utils::validation::validate_email(&request.email).map_err(ApiError::validation)?;
    crate::utils::validation::validate_new_password(
        &request.password,
        &request.password_confirmation,
    )
    .map_err(ApiError::validation)?;
    repo.reset_password(request).await
}

pub fn use_login_action() -> Action<LoginRequest, Result<UserProfile, ApiError>> {
    let (_auth, set_auth) = use_auth();
    let repo = use_auth_repository();

    create_action(move |request: &LoginRequest| {
        let payload = request.clone();
        let repo = repo.clone();
        async move { login_request(payload, &repo, set_auth).await }
    })
}

pub fn use_register_action() -> Action<RegisterRequest, Result<UserProfile, ApiError>> {
    let (_auth, set_auth) = use_auth();
    let repo = use_auth_repository();

    create_action(move |request: &RegisterRequest| {
        let payload = request.clone();
        let repo = repo.clone();
        async move { register_request(payload, &repo, set_auth).await }
    })
}

pub fn use_logout_action() -> Action<(), ()> {
    let (_auth, set_auth) = use_auth();
    let repo = use_auth_repository();

    create_action(move |_: &()| {
        let repo = repo.clone();
        async move { logout(&repo, set_auth).await }
    })
}

pub fn use_update_profile_action() -> Action<UpdateProfileRequest, Result<UserProfile, ApiError>>
{
    let (_auth, set_auth) = use_auth();
    let repo = use_auth_repository();

    create_action(move |request: &UpdateProfileRequest| {
        let payload = request.clone();
        let repo = repo.clone();
        async move { update_profile(payload, &repo, set_auth).await }
    })
}

pub fn use_change_password_action(
) -> Action<ChangePasswordRequest, Result<MessageResponse, ApiError>> {
    let (_auth, set_auth) = use_auth();
    let repo = use_auth_repository();

    create_action(move |request: &ChangePasswordRequest| {
        let payload = request.clone();
        let repo = repo.clone();
        async move { change_password(payload, &repo, set_auth).await }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::helpers::{customer, seller};
    use leptos::create_runtime;

    fn with_runtime<T>(test: impl FnOnce() -> T) -> T {
        let runtime = create_runtime();
        let result = test();
        runtime.dispose();
        result
    }

    #[test]
    fn use_auth_returns_default_without_context() {
        with_runtime(|| {
            let (state, _set_state) = use_auth();
            let snapshot = state.get();
            assert!(!snapshot.is_authenticated);
            assert!(snapshot.user.is_none());
        });
    }

    #[test]
    fn role_helpers_require_authenticated_user() {
        let mut state = AuthState::default();
        assert!(!state.has_role(UserRole::Seller));

        state.sign_in(seller(), Some("tok".into()));
        assert!(state.has_role(UserRole::Seller));
        assert!(!state.has_role(UserRole::SuperAdmin));
        assert!(state.has_any_role(&[UserRole::SuperAdmin, UserRole::Seller]));
        assert!(!state.has_any_role(&[]));
        assert_eq!(state.token(), Some("tok"));

        state.sign_out();
        assert!(!state.has_any_role(&[UserRole::Seller]));
        assert!(state.token().is_none());
    }

    #[test]
    fn sign_in_clears_previous_error() {
        let mut state = AuthState {
            error: Some("bad credentials".into()),
            loading: true,
            ..AuthState::default()
        };
        state.sign_in(customer(), None);
        assert!(state.error.is_none());
        assert!(!state.loading);
        assert!(state.is_authenticated);
    }
}
