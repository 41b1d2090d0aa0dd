use super::utils::{latch_for, CallbackParams, CodeLatch, OAUTH_FAILED_PATH};
use crate::{
    api::{OAuthProvider, UserRole},
    pages::login::repository::AuthRepository,
    state::auth::{self, AuthState},
};
use leptos::*;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CallbackOutcome {
    SignedIn(UserRole),
    Failed(String),
    /// The code was already claimed by an earlier run.
    AlreadyHandled,
}

impl CallbackOutcome {
    pub fn redirect_target(&self) -> Option<&'static str> {
        match self {
            CallbackOutcome::SignedIn(role) => Some(role.home_path()),
            CallbackOutcome::Failed(_) => Some(OAUTH_FAILED_PATH),
            CallbackOutcome::AlreadyHandled => None,
        }
    }
}

pub async fn process_callback(
    provider: OAuthProvider,
    params: CallbackParams,
    latch: Option<&CodeLatch>,
    repo: &AuthRepository,
    set_auth_state: WriteSignal<AuthState>,
) -> CallbackOutcome {
    let code = match params.usable_code() {
        Ok(code) => code.to_string(),
        Err(reason) => {
            log::warn!("{} sign-in aborted: {}", provider.label(), reason);
            return CallbackOutcome::Failed(reason);
        }
    };

    if let Some(latch) = latch {
        if !latch.try_claim(&code) {
            log::debug!("{} callback code already exchanged", provider.label());
            return CallbackOutcome::AlreadyHandled;
        }
    }

    match auth::complete_oauth(provider, &code, repo, set_auth_state).await {
        Ok(user) => CallbackOutcome::SignedIn(user.role),
        Err(err) => {
            log::warn!("{} sign-in failed: {}", provider.label(), err);
            CallbackOutcome::Failed(err.error)
        }
    }
}

/// Reads the callback query once on mount and redirects by outcome.
pub fn use_oauth_callback(provider: OAuthProvider) -> ReadSignal<Option<CallbackOutcome>> {
    let (_auth, set_auth) = auth::use_auth();
    let repo = auth::use_auth_repository();
    let (outcome, set_outcome) = create_signal(None::<CallbackOutcome>);

    create_effect(move |_| {
        let params = CallbackParams::from_search(&crate::utils::navigation::current_search());
        let repo = repo.clone();
        spawn_local(async move {
            // A re-mounted Strava page shares the latch, so a code is never
            // exchanged twice.
            let latch = latch_for(provider);
            let result =
                process_callback(provider, params, latch.as_deref(), &repo, set_auth).await;
            if let Some(target) = result.redirect_target() {
                crate::utils::navigation::redirect_to(target);
            }
            set_outcome.set(Some(result));
        });
    });

    outcome
}
