mod admin_panel;
pub mod repository;
mod seller_panel;
pub mod utils;
pub mod view_model;

use crate::{
    api::UserRole,
    components::{guard::RequireRole, layout::Layout},
};
use admin_panel::AdminPayoutsPanel;
use leptos::*;
use seller_panel::SellerPayoutsPanel;

#[component]
pub fn AdminPayoutsPage() -> impl IntoView {
    view! {
        <RequireRole roles=vec![UserRole::SuperAdmin]>
            <Layout>
                <AdminPayoutsPanel />
            </Layout>
        </RequireRole>
    }
}

#[component]
pub fn SellerPayoutsPage() -> impl IntoView {
    view! {
        <RequireRole roles=vec![UserRole::Seller]>
            <Layout>
                <SellerPayoutsPanel />
            </Layout>
        </RequireRole>
    }
}
