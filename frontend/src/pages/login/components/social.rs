use crate::{
    api::OAuthProvider,
    config,
    pages::oauth_callback::utils::{authorize_url, redirect_uri},
    utils::navigation,
};
use leptos::*;

fn client_id_for(provider: OAuthProvider, cfg: &config::RuntimeConfig) -> Option<String> {
    let id = match provider {
        OAuthProvider::Google => cfg.google_client_id.as_ref(),
        OAuthProvider::Strava => cfg.strava_client_id.as_ref(),
    };
    id.filter(|id| !id.trim().is_empty()).cloned()
}

/// Sign-in buttons for each provider that has a client id configured.
#[component]
pub fn SocialLoginButtons() -> impl IntoView {
    let cfg = config::current();
    let origin = navigation::current_origin();
    let buttons = [OAuthProvider::Google, OAuthProvider::Strava]
        .into_iter()
        .filter_map(|provider| {
            let client_id = client_id_for(provider, &cfg)?;
            let href = authorize_url(provider, &client_id, &redirect_uri(&origin, provider));
            Some(view! {
                <a
                    href=href
                    class="w-full inline-flex justify-center items-center gap-2 py-2 px-4 border border-border rounded-md bg-surface-elevated text-sm font-medium text-fg hover:bg-surface-muted"
                >
                    {format!("Continue with {}", provider.label())}
                </a>
            })
        })
        .collect::<Vec<_>>();

    if buttons.is_empty() {
        return ().into_view();
    }
    view! {
        <div class="space-y-2">
            <div class="relative text-center text-xs text-fg-muted">
                <span class="px-2 bg-surface">"or"</span>
            </div>
            {buttons}
        </div>
    }
    .into_view()
}
