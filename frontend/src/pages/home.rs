use crate::{components::layout::Layout, state::auth::use_auth};
use leptos::*;

const HIGHLIGHTS: [(&str, &str); 3] = [
    (
        "Independent shops",
        "Road, gravel and mountain bikes from builders and dealers who know them.",
    ),
    (
        "30-day returns",
        "Unopened items come back in full. Check the refund policy for details.",
    ),
    (
        "Sell with us",
        "Open a seller account, list your stock and get paid on a regular schedule.",
    ),
];

#[component]
pub fn HomePage() -> impl IntoView {
    let (auth, _) = use_auth();
    let cta = move || {
        let state = auth.get();
        match state.role() {
            Some(role) if state.is_authenticated => (role.home_path(), "Go to your dashboard"),
            _ => ("/register", "Create an account"),
        }
    };

    view! {
        <Layout>
            <section class="text-center py-12">
                <h1 class="text-4xl font-extrabold text-fg sm:text-5xl lg:text-6xl">"Velomart"</h1>
                <p class="mt-3 max-w-md mx-auto text-base text-fg-muted sm:text-lg lg:mt-5 lg:text-xl lg:max-w-3xl">
                    "The marketplace for bicycles and cycling gear."
                </p>
                <div class="mt-8 flex justify-center gap-3">
                    <a
                        href=move || cta().0
                        class="px-8 py-3 rounded-md text-base font-medium text-action-primary-text bg-action-primary-bg hover:bg-action-primary-bg-hover"
                    >
                        {move || cta().1}
                    </a>
                    <Show when=move || !auth.get().is_authenticated>
                        <a href="/login" class="px-8 py-3 rounded-md text-base font-medium text-fg border border-border hover:bg-surface-muted">
                            "Sign in"
                        </a>
                    </Show>
                </div>
            </section>
            <section class="grid grid-cols-1 gap-6 md:grid-cols-3">
                {HIGHLIGHTS
                    .iter()
                    .map(|(title, body)| {
                        view! {
                            <div class="bg-surface-elevated rounded-lg shadow p-6">
                                <h2 class="text-lg font-semibold text-fg">{*title}</h2>
                                <p class="mt-2 text-sm text-fg-muted">{*body}</p>
                            </div>
                        }
                    })
                    .collect_view()}
            </section>
        </Layout>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::{helpers::seller, ssr::render_as};

    #[test]
    fn anonymous_visitors_are_invited_to_register() {
        let html = render_as(None, || view! { <HomePage /> });
        assert!(html.contains("Create an account"));
        assert!(html.contains("href=\"/register\""));
    }

    #[test]
    fn signed_in_users_get_their_dashboard_link() {
        let html = render_as(Some(seller()), || view! { <HomePage /> });
        assert!(html.contains("Go to your dashboard"));
        assert!(html.contains("href=\"/seller/dashboard\""));
    }
}
