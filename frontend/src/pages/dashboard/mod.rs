pub mod components;
pub mod panel;
pub mod repository;
pub mod utils;
pub mod view_model;

use crate::{
    api::UserRole,
    components::{
        guard::{RequireAuth, RequireRole},
        layout::Layout,
    },
};
use leptos::*;
use panel::DashboardPanel;
use utils::DashboardKind;

#[component]
pub fn UserDashboardPage() -> impl IntoView {
    view! {
        <RequireAuth>
            <Layout>
                <DashboardPanel kind=DashboardKind::Customer />
            </Layout>
        </RequireAuth>
    }
}

#[component]
pub fn SellerDashboardPage() -> impl IntoView {
    view! {
        <RequireRole roles=vec![UserRole::Seller]>
            <Layout>
                <DashboardPanel kind=DashboardKind::Seller />
            </Layout>
        </RequireRole>
    }
}

#[component]
pub fn AdminDashboardPage() -> impl IntoView {
    view! {
        <RequireRole roles=vec![UserRole::SuperAdmin]>
            <Layout>
                <DashboardPanel kind=DashboardKind::Admin />
            </Layout>
        </RequireRole>
    }
}
