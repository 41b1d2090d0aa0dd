use super::{components::form::LoginForm, utils, view_model::use_login_view_model};
use crate::utils::navigation;
use leptos::{ev::SubmitEvent, *};

#[component]
pub fn LoginPanel() -> impl IntoView {
    let vm = use_login_view_model();
    let pending = vm.login_action.pending();
    let notice = utils::notice_for_error_param(navigation::query_param("error").as_deref());

    let on_submit = Callback::new(move |ev: SubmitEvent| {
        ev.prevent_default();
        vm.submit();
    });

    view! {
        <LoginForm
            form=vm.form
            error=vm.error
            notice=notice
            pending=pending
            on_submit=on_submit
        />
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_as;

    #[test]
    fn login_panel_renders_form() {
        let html = render_as(None, move || view! { <LoginPanel /> });
        assert!(html.contains("Sign in to Velomart"));
        assert!(html.contains("Forgot your password?"));
        assert!(html.contains("/register"));
    }
}
