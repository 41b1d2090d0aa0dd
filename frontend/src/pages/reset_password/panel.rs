use super::view_model::use_reset_password_view_model;
use crate::components::{
    error::InlineErrorMessage,
    forms::{PasswordField, TextField},
    layout::SuccessMessage,
};
use leptos::*;

#[component]
pub fn ResetPasswordPanel() -> impl IntoView {
    let vm = use_reset_password_view_model();
    let pending = vm.submit_action.pending();

    view! {
        <div class="min-h-screen flex items-center justify-center bg-surface py-12 px-4 sm:px-6 lg:px-8">
            <div class="max-w-md w-full space-y-8">
                <h2 class="mt-6 text-center text-3xl font-extrabold text-fg">"Choose a new password"</h2>
                <Show
                    when=move || vm.success.get().is_none()
                    fallback=move || {
                        view! {
                            <SuccessMessage message=vm.success.get().unwrap_or_default() />
                            <a href="/login" class="block text-center text-sm font-medium text-link hover:text-link-hover">
                                "Go to sign in"
                            </a>
                        }
                    }
                >
                    <form
                        class="space-y-4"
                        on:submit=move |ev| {
                            ev.prevent_default();
                            if !pending.get_untracked() {
                                vm.submit_action.dispatch(vm.request());
                            }
                        }
                    >
                        <TextField
                            id="email"
                            label="Email address"
                            value=vm.email
                            input_type="email"
                            autocomplete="email"
                            required=true
                        />
                        <PasswordField id="password" label="New password" value=vm.password autocomplete="new-password" />
                        <PasswordField
                            id="password_confirmation"
                            label="Confirm new password"
                            value=vm.password_confirmation
                            autocomplete="new-password"
                        />
                        <InlineErrorMessage error=vm.error />
                        <button
                            type="submit"
                            disabled=move || pending.get()
                            class="w-full flex justify-center py-2 px-4 text-sm font-medium rounded-md text-action-primary-text bg-action-primary-bg hover:bg-action-primary-bg-hover disabled:opacity-50"
                        >
                            {move || if pending.get() { "Resetting..." } else { "Reset password" }}
                        </button>
                    </form>
                </Show>
            </div>
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_as;

    #[test]
    fn reset_panel_renders_password_fields() {
        let html = render_as(None, move || view! { <ResetPasswordPanel /> });
        assert!(html.contains("Choose a new password"));
        assert!(html.contains("Confirm new password"));
    }
}
