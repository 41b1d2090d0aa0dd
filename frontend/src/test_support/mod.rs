#[cfg(not(target_arch = "wasm32"))]
pub mod ssr;

pub mod helpers {
    use crate::api::{UserProfile, UserRole};
    use crate::state::auth::AuthState;
    use leptos::*;
    use serde_json::json;

    fn profile(id: u64, name: &str, email: &str, role: UserRole) -> UserProfile {
        UserProfile {
            id,
            name: name.into(),
            email: email.into(),
            phone: None,
            address: None,
            role,
            email_verified_at: None,
            created_at: None,
        }
    }

    pub fn customer() -> UserProfile {
        profile(1, "Alice Example", "alice@example.com", UserRole::User)
    }

    pub fn seller() -> UserProfile {
        profile(2, "Trail Bikes Co", "shop@trailbikes.test", UserRole::Seller)
    }

    pub fn super_admin() -> UserProfile {
        profile(3, "Platform Admin", "admin@velomart.test", UserRole::SuperAdmin)
    }

    /// Backend-shaped user body as returned by `/auth/me` and `/auth/login`.
    pub fn user_json(id: u64, role: &str) -> serde_json::Value {
        json!({
            "id": id,
            "name": "Alice Example",
            "email": "alice@example.com",
            "phone": "+1 555 0100",
            "address": "1 Spoke Street",
            "role": role,
            "email_verified_at": "2025-01-02T10:00:00Z",
            "created_at": "2025-01-01T00:00:00Z"
        })
    }

    pub fn provide_auth(
        user: Option<UserProfile>,
    ) -> (ReadSignal<AuthState>, WriteSignal<AuthState>) {
        let (auth, set_auth) = create_signal(AuthState {
            is_authenticated: user.is_some(),
            token: user.as_ref().map(|_| "test-token".to_string()),
            user,
            loading: false,
            error: None,
        });
        provide_context((auth, set_auth));
        (auth, set_auth)
    }

    pub fn provide_loading_auth() {
        let (auth, set_auth) = create_signal(AuthState {
            loading: true,
            ..AuthState::default()
        });
        provide_context((auth, set_auth));
    }
}
