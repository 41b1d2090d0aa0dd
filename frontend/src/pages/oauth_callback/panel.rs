use super::view_model::{use_oauth_callback, CallbackOutcome};
use crate::{api::OAuthProvider, components::layout::LoadingSpinner};
use leptos::*;

#[component]
pub fn OAuthCallbackPanel(provider: OAuthProvider) -> impl IntoView {
    let outcome = use_oauth_callback(provider);
    let status = move || match outcome.get() {
        None | Some(CallbackOutcome::AlreadyHandled) => {
            format!("Completing sign-in with {}...", provider.label())
        }
        Some(CallbackOutcome::SignedIn(_)) => "Signed in. Redirecting...".to_string(),
        Some(CallbackOutcome::Failed(_)) => {
            format!("{} sign-in failed. Returning to login...", provider.label())
        }
    };

    view! {
        <div class="min-h-screen flex flex-col items-center justify-center bg-surface px-4">
            <LoadingSpinner />
            <p class="text-sm text-fg-muted" aria-live="polite">{status}</p>
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_as;

    #[test]
    fn callback_page_shows_progress_for_provider() {
        let html = render_as(None, move || {
            view! { <OAuthCallbackPanel provider=OAuthProvider::Strava /> }
        });
        assert!(html.contains("Completing sign-in with Strava"));
    }
}
