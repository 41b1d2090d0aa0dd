use crate::{
    api::UserRole,
    components::layout::LoadingSpinner,
    state::auth::{use_auth, AuthState},
    utils::navigation,
};
use leptos::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum GuardDecision {
    Wait,
    Render,
    Redirect(&'static str),
}

fn decide(state: &AuthState, roles: &[UserRole]) -> GuardDecision {
    if state.loading {
        return GuardDecision::Wait;
    }
    if !state.is_authenticated {
        return GuardDecision::Redirect("/login");
    }
    if roles.is_empty() || state.has_any_role(roles) {
        return GuardDecision::Render;
    }
    // Signed in with the wrong role: send them to their own landing page.
    GuardDecision::Redirect(
        state
            .role()
            .map(|role| role.home_path())
            .unwrap_or("/dashboard"),
    )
}

fn guarded(roles: Vec<UserRole>, children: ChildrenFn) -> impl IntoView {
    let (auth, _) = use_auth();
    let decision = create_memo(move |_| decide(&auth.get(), &roles));

    create_effect(move |_| {
        if let GuardDecision::Redirect(target) = decision.get() {
            navigation::redirect_to(target);
        }
    });

    view! {
        <Show
            when=move || decision.get() == GuardDecision::Render
            fallback=move || {
                if decision.get() == GuardDecision::Wait {
                    view! { <LoadingSpinner /> }.into_view()
                } else {
                    ().into_view()
                }
            }
        >
            {children()}
        </Show>
    }
}

#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    guarded(Vec::new(), children)
}

#[component]
pub fn RequireRole(#[prop(into)] roles: Vec<UserRole>, children: ChildrenFn) -> impl IntoView {
    guarded(roles, children)
}


#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::helpers::{customer, provide_loading_auth, seller};
    use crate::test_support::ssr::{render_as, render_to_string};

    #[test]
    fn require_auth_renders_children_when_authenticated() {
        let html = render_as(Some(customer()), move || {
            view! {
                <RequireAuth>
                    {|| view! { <div>"protected-content"</div> }}
                </RequireAuth>
            }
        });
        assert!(html.contains("protected-content"));
    }

    #[test]
    fn require_auth_hides_children_when_unauthenticated() {
        let html = render_as(None, move || {
            view! {
                <RequireAuth>
                    {|| view! { <div>"protected-content"</div> }}
                </RequireAuth>
            }
        });
        assert!(!html.contains("protected-content"));
    }

    #[test]
    fn require_auth_shows_spinner_while_loading() {
        let html = render_to_string(move || {
            provide_loading_auth();
            view! {
                <RequireAuth>
                    {|| view! { <div>"protected-content"</div> }}
                </RequireAuth>
            }
        });
        assert!(html.contains("animate-spin"));
        assert!(!html.contains("protected-content"));
    }

    #[test]
    fn require_role_filters_by_role() {
        let allowed = render_as(Some(seller()), move || {
            view! {
                <RequireRole roles=vec![UserRole::Seller]>
                    {|| view! { <div>"seller-only"</div> }}
                </RequireRole>
            }
        });
        assert!(allowed.contains("seller-only"));

        let denied = render_as(Some(customer()), move || {
            view! {
                <RequireRole roles=vec![UserRole::Seller]>
                    {|| view! { <div>"seller-only"</div> }}
                </RequireRole>
            }
        });
        assert!(!denied.contains("seller-only"));
    }
}
