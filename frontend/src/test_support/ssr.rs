use crate::api::UserProfile;
use leptos::*;

pub fn with_runtime<T>(f: impl FnOnce() -> T) -> T {
    let runtime = leptos::create_runtime();
    let result = f();
    runtime.dispose();
    result
}

/// Runs `f` on a fresh runtime where resources never start fetching.
pub fn with_idle_resources<T>(f: impl FnOnce() -> T) -> T {
    leptos_reactive::suppress_resource_load(true);
    let result = with_runtime(f);
    leptos_reactive::suppress_resource_load(false);
    result
}

/// Renders on the server runtime with resource loading suppressed, so
/// components that fetch on mount render their loading branch.
pub fn render_to_string<F, N>(view: F) -> String
where
    F: FnOnce() -> N + 'static,
    N: IntoView + 'static,
{
    with_idle_resources(|| view().into_view().render_to_string().to_string())
}

/// Same as [`render_to_string`] with an auth context for `user` in place.
pub fn render_as<F, N>(user: Option<UserProfile>, view: F) -> String
where
    F: FnOnce() -> N + 'static,
    N: IntoView + 'static,
{
    render_to_string(move || {
        super::helpers::provide_auth(user);
        view()
    })
}
