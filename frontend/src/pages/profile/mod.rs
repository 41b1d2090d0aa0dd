use crate::components::{guard::RequireAuth, layout::Layout};
use leptos::*;

mod panel;
pub mod utils;
mod view_model;

pub use panel::ProfilePanel;

#[component]
pub fn ProfilePage() -> impl IntoView {
    view! {
        <RequireAuth>
            <Layout>
                <ProfilePanel />
            </Layout>
        </RequireAuth>
    }
}
