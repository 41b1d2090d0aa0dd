use leptos::*;
use leptos_meta::provide_meta_context;
use leptos_router::*;

use crate::{
    components::{error_boundary::AppErrorBoundary, layout::Layout},
    pages::{
        dashboard::{AdminDashboardPage, SellerDashboardPage, UserDashboardPage},
        forgot_password::ForgotPasswordPage,
        home::HomePage,
        legal::{PrivacyPage, RefundPolicyPage, TermsPage},
        login::LoginPage,
        oauth_callback::{GoogleCallbackPage, StravaCallbackPage},
        payouts::{AdminPayoutsPage, SellerPayoutsPage},
        profile::ProfilePage,
        register::RegisterPage,
        reset_password::ResetPasswordPage,
    },
    state::auth::AuthProvider,
};

pub const ROUTE_PATHS: &[&str] = &[
    "/",
    "/login",
    "/register",
    "/forgot-password",
    "/reset-password",
    "/auth/google/callback",
    "/auth/strava/callback",
    "/dashboard",
    "/profile",
    "/seller/dashboard",
    "/seller/payouts",
    "/admin/dashboard",
    "/admin/payouts",
    "/terms",
    "/privacy",
    "/refund-policy",
];

pub const PROTECTED_ROUTE_PATHS: &[&str] = &[
    "/dashboard",
    "/profile",
    "/seller/dashboard",
    "/seller/payouts",
    "/admin/dashboard",
    "/admin/payouts",
];

pub const PUBLIC_ROUTE_PATHS: &[&str] = &[
    "/",
    "/login",
    "/register",
    "/forgot-password",
    "/reset-password",
    "/auth/google/callback",
    "/auth/strava/callback",
    "/terms",
    "/privacy",
    "/refund-policy",
];

pub fn mount_app() {
    mount_to_body(app_root);
}

pub fn app_root() -> impl IntoView {
    provide_context(crate::api::ApiClient::new());
    provide_meta_context();
    view! {
        <AuthProvider>
            <Router>
                <AppErrorBoundary>
                    <Routes>
                        <Route path="/" view=HomePage/>
                        <Route path="/login" view=LoginPage/>
                        <Route path="/register" view=RegisterPage/>
                        <Route path="/forgot-password" view=ForgotPasswordPage/>
                        <Route path="/reset-password" view=ResetPasswordPage/>
                        <Route path="/auth/google/callback" view=GoogleCallbackPage/>
                        <Route path="/auth/strava/callback" view=StravaCallbackPage/>
                        <Route path="/dashboard" view=UserDashboardPage/>
                        <Route path="/profile" view=ProfilePage/>
                        <Route path="/seller/dashboard" view=SellerDashboardPage/>
                        <Route path="/seller/payouts" view=SellerPayoutsPage/>
                        <Route path="/admin/dashboard" view=AdminDashboardPage/>
                        <Route path="/admin/payouts" view=AdminPayoutsPage/>
                        <Route path="/terms" view=TermsPage/>
                        <Route path="/privacy" view=PrivacyPage/>
                        <Route path="/refund-policy" view=RefundPolicyPage/>
                        <Route path="/*any" view=NotFoundPage/>
                    </Routes>
                </AppErrorBoundary>
            </Router>
        </AuthProvider>
    }
}

#[component]
fn NotFoundPage() -> impl IntoView {
    view! {
        <Layout>
            <div class="text-center py-16 space-y-3">
                <h1 class="text-3xl font-bold text-fg">"Page not found"</h1>
                <p class="text-fg-muted">"The page you were looking for does not exist."</p>
                <a href="/" class="text-link hover:text-link-hover">"Back to the shop"</a>
            </div>
        </Layout>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn public_and_protected_partition_all_routes() {
        let all: HashSet<&str> = ROUTE_PATHS.iter().copied().collect();
        let protected: HashSet<&str> = PROTECTED_ROUTE_PATHS.iter().copied().collect();
        let public: HashSet<&str> = PUBLIC_ROUTE_PATHS.iter().copied().collect();
        assert!(protected.is_disjoint(&public));
        assert_eq!(&protected | &public, all);
    }

    #[test]
    fn no_duplicate_routes() {
        let unique: HashSet<&str> = ROUTE_PATHS.iter().copied().collect();
        assert_eq!(unique.len(), ROUTE_PATHS.len());
    }

    #[test]
    fn role_home_paths_are_routed() {
        use crate::api::UserRole;
        for role in [UserRole::User, UserRole::Seller, UserRole::SuperAdmin] {
            assert!(ROUTE_PATHS.contains(&role.home_path()), "{:?}", role);
        }
    }

    #[test]
    fn oauth_callback_paths_are_routed() {
        use crate::{api::OAuthProvider, pages::oauth_callback::utils::callback_path};
        for provider in [OAuthProvider::Google, OAuthProvider::Strava] {
            assert!(ROUTE_PATHS.contains(&callback_path(provider).as_str()));
        }
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_as;

    #[test]
    fn not_found_page_links_home() {
        let html = render_as(None, || view! { <NotFoundPage /> });
        assert!(html.contains("Page not found"));
        assert!(html.contains("href=\"/\""));
    }
}
