use super::view_model::use_forgot_password_view_model;
use crate::components::{error::InlineErrorMessage, forms::TextField, layout::SuccessMessage};
use leptos::*;

#[component]
pub fn ForgotPasswordPanel() -> impl IntoView {
    let vm = use_forgot_password_view_model();
    let pending = vm.request_action.pending();

    view! {
        <div class="min-h-screen flex items-center justify-center bg-surface py-12 px-4 sm:px-6 lg:px-8">
            <div class="max-w-md w-full space-y-8">
                <div>
                    <h2 class="mt-6 text-center text-3xl font-extrabold text-fg">"Reset your password"</h2>
                    <p class="mt-2 text-center text-sm text-fg-muted">
                        "Enter the email you signed up with and we'll send you a reset link."
                    </p>
                </div>
                <Show
                    when=move || vm.sent.get().is_none()
                    fallback=move || {
                        view! {
                            <SuccessMessage message=vm.sent.get().unwrap_or_default() />
                            <a href="/login" class="block text-center text-sm font-medium text-link hover:text-link-hover">
                                "Back to sign in"
                            </a>
                        }
                    }
                >
                    <form
                        class="space-y-6"
                        on:submit=move |ev| {
                            ev.prevent_default();
                            vm.submit();
                        }
                    >
                        <TextField
                            id="email-address"
                            label="Email address"
                            value=vm.email
                            input_type="email"
                            autocomplete="email"
                            required=true
                        />
                        <InlineErrorMessage error=vm.error />
                        <button
                            type="submit"
                            disabled=move || pending.get()
                            class="w-full flex justify-center py-2 px-4 text-sm font-medium rounded-md text-action-primary-text bg-action-primary-bg hover:bg-action-primary-bg-hover disabled:opacity-50"
                        >
                            {move || if pending.get() { "Sending..." } else { "Send reset link" }}
                        </button>
                        <a href="/login" class="block text-center text-sm font-medium text-link hover:text-link-hover">
                            "Back to sign in"
                        </a>
                    </form>
                </Show>
            </div>
        </div>
    }
}
