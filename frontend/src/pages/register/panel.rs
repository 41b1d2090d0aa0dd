use super::view_model::use_register_view_model;
use crate::components::{
    error::InlineErrorMessage,
    forms::{PasswordField, TextField},
};
use leptos::*;

#[component]
pub fn RegisterPanel() -> impl IntoView {
    let vm = use_register_view_model();
    let form = vm.form;
    let pending = vm.register_action.pending();

    view! {
        <div class="min-h-screen flex items-center justify-center bg-surface py-12 px-4 sm:px-6 lg:px-8">
            <div class="max-w-md w-full space-y-8">
                <div>
                    <h2 class="mt-6 text-center text-3xl font-extrabold text-fg">"Create your account"</h2>
                    <p class="mt-2 text-center text-sm text-fg-muted">
                        "Already registered? "
                        <a href="/login" class="font-medium text-link hover:text-link-hover">"Sign in"</a>
                    </p>
                </div>
                <form
                    class="space-y-4"
                    on:submit=move |ev| {
                        ev.prevent_default();
                        vm.submit();
                    }
                >
                    <TextField id="name" label="Full name" value=form.name autocomplete="name" required=true />
                    <TextField
                        id="email"
                        label="Email address"
                        value=form.email
                        input_type="email"
                        autocomplete="email"
                        required=true
                    />
                    <TextField id="phone" label="Phone" value=form.phone input_type="tel" autocomplete="tel" />
                    <PasswordField id="password" label="Password" value=form.password autocomplete="new-password" />
                    <PasswordField
                        id="password_confirmation"
                        label="Confirm password"
                        value=form.password_confirmation
                        autocomplete="new-password"
                    />
                    <label class="inline-flex items-center gap-2 text-sm text-fg-muted">
                        <input
                            type="checkbox"
                            prop:checked=move || form.as_seller.get()
                            on:change=move |ev| form.as_seller.set(event_target_checked(&ev))
                        />
                        "I want to sell bikes on Velomart"
                    </label>
                    <InlineErrorMessage error=vm.error />
                    <button
                        type="submit"
                        disabled=move || pending.get()
                        class="w-full flex justify-center py-2 px-4 text-sm font-medium rounded-md text-action-primary-text bg-action-primary-bg hover:bg-action-primary-bg-hover disabled:opacity-50"
                    >
                        {move || if pending.get() { "Creating account..." } else { "Create account" }}
                    </button>
                </form>
            </div>
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_as;

    #[test]
    fn register_panel_renders_fields() {
        let html = render_as(None, move || view! { <RegisterPanel /> });
        assert!(html.contains("Create your account"));
        assert!(html.contains("Confirm password"));
        assert!(html.contains("sell bikes"));
    }
}
