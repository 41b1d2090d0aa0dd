use crate::{
    api::UserRole,
    state::auth::{self, use_auth},
    utils::navigation,
};
use leptos::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub href: &'static str,
    pub label: &'static str,
}

const fn link(href: &'static str, label: &'static str) -> NavLink {
    NavLink { href, label }
}

/// Header navigation for the signed-in role; `None` means anonymous.
pub fn nav_links(role: Option<UserRole>) -> Vec<NavLink> {
    match role {
        None => vec![link("/login", "Sign in"), link("/register", "Create account")],
        Some(UserRole::SuperAdmin) => vec![
            link("/admin/dashboard", "Dashboard"),
            link("/admin/payouts", "Payouts"),
            link("/profile", "Profile"),
        ],
        Some(UserRole::Seller) => vec![
            link("/seller/dashboard", "Dashboard"),
            link("/seller/payouts", "Payout details"),
            link("/profile", "Profile"),
        ],
        Some(UserRole::User) | Some(UserRole::Unknown) => vec![
            link("/dashboard", "Dashboard"),
            link("/profile", "Profile"),
        ],
    }
}

pub const LEGAL_LINKS: [NavLink; 3] = [
    link("/terms", "Terms of Service"),
    link("/privacy", "Privacy Policy"),
    link("/refund-policy", "Refund Policy"),
];

#[component]
pub fn Header() -> impl IntoView {
    let (auth, _set_auth) = use_auth();
    let (menu_open, set_menu_open) = create_signal(false);
    let role = create_memo(move |_| {
        let state = auth.get();
        if state.is_authenticated {
            state.role()
        } else {
            None
        }
    });
    let user_name = move || auth.get().user.map(|u| u.name).unwrap_or_default();

    let logout_action = auth::use_logout_action();
    let logout_pending = logout_action.pending();
    create_effect(move |_| {
        if logout_action.value().get().is_some() {
            navigation::redirect_to("/login");
        }
    });
    let on_logout = move |_| {
        if logout_pending.get_untracked() {
            return;
        }
        set_menu_open.set(false);
        logout_action.dispatch(());
    };
    let toggle_menu = move |_| set_menu_open.update(|open| *open = !*open);

    let render_links = move |block: bool| {
        nav_links(role.get())
            .into_iter()
            .map(|nav| {
                let class = if block {
                    "block text-fg-muted hover:text-fg px-3 py-2 rounded-md text-sm font-medium hover:bg-action-ghost-bg-hover"
                } else {
                    "text-fg-muted hover:text-fg px-3 py-2 rounded-md text-sm font-medium hover:bg-action-ghost-bg-hover"
                };
                view! {
                    <a href=nav.href class=class on:click=move |_| set_menu_open.set(false)>
                        {nav.label}
                    </a>
                }
            })
            .collect_view()
    };

    view! {
        <header class="bg-surface-elevated shadow-sm border-b border-border">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex justify-between items-center h-16">
                    <a href="/" class="text-xl font-semibold text-fg">"Velomart"</a>
                    <div class="flex items-center">
                        <nav class="hidden lg:flex items-center space-x-4">
                            {move || render_links(false)}
                            <Show when=move || role.get().is_some()>
                                <span class="text-sm text-fg-muted">{user_name}</span>
                                <button
                                    on:click=on_logout
                                    class="text-fg-muted hover:text-fg px-3 py-2 rounded-md text-sm font-medium disabled:opacity-50 hover:bg-action-ghost-bg-hover"
                                    disabled=move || logout_pending.get()
                                >
                                    "Sign out"
                                </button>
                            </Show>
                        </nav>
                        <button
                            type="button"
                            class="lg:hidden inline-flex items-center justify-center p-2 rounded-md text-fg-muted hover:text-fg hover:bg-action-ghost-bg-hover"
                            on:click=toggle_menu
                            aria-expanded=move || menu_open.get()
                            aria-controls="mobile-nav"
                        >
                            <span class="sr-only">
                                {move || if menu_open.get() { "Close menu" } else { "Open menu" }}
                            </span>
                            <svg
                                class="h-6 w-6"
                                xmlns="http://www.w3.org/2000/svg"
                                fill="none"
                                viewBox="0 0 24 24"
                                stroke="currentColor"
                            >
                                <path
                                    stroke-linecap="round"
                                    stroke-linejoin="round"
                                    stroke-width="2"
                                    d="M4 6h16M4 12h16M4 18h16"
                                />
                            </svg>
                        </button>
                    </div>
                </div>
                <Show when=move || menu_open.get()>
                    <div id="mobile-nav" class="lg:hidden border-t border-border">
                        <nav class="px-4 py-3 space-y-2">
                            {move || render_links(true)}
                            <Show when=move || role.get().is_some()>
                                <button
                                    on:click=on_logout
                                    class="w-full text-left text-fg-muted hover:text-fg px-3 py-2 rounded-md text-sm font-medium disabled:opacity-50 hover:bg-action-ghost-bg-hover"
                                    disabled=move || logout_pending.get()
                                >
                                    "Sign out"
                                </button>
                            </Show>
                        </nav>
                    </div>
                </Show>
            </div>
        </header>
    }
}

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="border-t border-border mt-12">
            <div class="max-w-7xl mx-auto px-4 py-6 flex flex-col sm:flex-row justify-between gap-4 text-sm text-fg-muted">
                <p>"© Velomart. Bikes from independent shops."</p>
                <nav class="flex gap-4">
                    {LEGAL_LINKS
                        .iter()
                        .map(|nav| view! { <a href=nav.href class="hover:text-fg">{nav.label}</a> })
                        .collect_view()}
                </nav>
            </div>
        </footer>
    }
}

#[component]
pub fn Layout(children: Children) -> impl IntoView {
    view! {
        <div class="min-h-screen bg-surface flex flex-col">
            <Header/>
            <main class="flex-1 w-full max-w-7xl mx-auto py-6 px-4 sm:px-6 lg:px-8">
                {children()}
            </main>
            <Footer/>
        </div>
    }
}

#[component]
pub fn LoadingSpinner() -> impl IntoView {
    view! {
        <div class="flex justify-center items-center p-8">
            <div class="animate-spin rounded-full h-8 w-8 border-b-2 border-action-primary-bg"></div>
        </div>
    }
}

#[component]
pub fn ErrorMessage(#[prop(into)] message: String) -> impl IntoView {
    view! {
        <div role="alert" class="bg-status-error-bg border border-status-error-border text-status-error-text px-4 py-3 rounded mb-4">
            <p class="text-sm">{message}</p>
        </div>
    }
}

#[component]
pub fn SuccessMessage(#[prop(into)] message: String) -> impl IntoView {
    view! {
        <div role="status" class="bg-status-success-bg border border-status-success-border text-status-success-text px-4 py-3 rounded mb-4">
            <p class="text-sm">{message}</p>
        </div>
    }
}


#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::helpers::{customer, super_admin};
    use crate::test_support::ssr::{render_as, render_to_string};

    #[test]
    fn header_renders_admin_links_for_super_admin() {
        let html = render_as(Some(super_admin()), move || view! { <Header /> });
        assert!(html.contains("/admin/payouts"));
        assert!(html.contains("Sign out"));
        assert!(html.contains("Platform Admin"));
    }

    #[test]
    fn header_for_anonymous_offers_sign_in() {
        let html = render_as(None, move || view! { <Header /> });
        assert!(html.contains("Sign in"));
        assert!(!html.contains("Sign out"));
    }

    #[test]
    fn layout_renders_children_and_legal_footer() {
        let html = render_as(Some(customer()), move || {
            view! { <Layout><div>"child"</div></Layout> }
        });
        assert!(html.contains("child"));
        assert!(html.contains("/refund-policy"));
        assert!(html.contains("/terms"));
    }

    #[test]
    fn renders_feedback_components() {
        let html = render_to_string(move || {
            view! {
                <div>
                    <LoadingSpinner />
                    <ErrorMessage message="error" />
                    <SuccessMessage message="ok" />
                </div>
            }
        });
        assert!(html.contains("animate-spin"));
        assert!(html.contains("error"));
        assert!(html.contains("ok"));
    }
}
