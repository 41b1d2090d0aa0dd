use crate::api::OAuthProvider;
use leptos::*;

mod panel;
pub mod utils;
pub mod view_model;

pub use panel::OAuthCallbackPanel;

#[component]
pub fn GoogleCallbackPage() -> impl IntoView {
    view! { <OAuthCallbackPanel provider=OAuthProvider::Google /> }
}

#[component]
pub fn StravaCallbackPage() -> impl IntoView {
    view! { <OAuthCallbackPanel provider=OAuthProvider::Strava /> }
}
