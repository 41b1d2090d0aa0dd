use super::social::SocialLoginButtons;
use crate::{
    api::ApiError,
    components::{
        error::InlineErrorMessage,
        forms::{PasswordField, TextField},
    },
    pages::login::utils::LoginFormState,
};
use leptos::{ev::SubmitEvent, *};

#[component]
pub fn LoginForm(
    form: LoginFormState,
    #[prop(into)] error: Signal<Option<ApiError>>,
    #[prop(into)] notice: MaybeSignal<Option<&'static str>>,
    #[prop(into)] pending: Signal<bool>,
    on_submit: Callback<SubmitEvent>,
) -> impl IntoView {
    view! {
        <div class="min-h-screen flex items-center justify-center bg-surface py-12 px-4 sm:px-6 lg:px-8">
            <div class="max-w-md w-full space-y-8">
                <div>
                    <h2 class="mt-6 text-center text-3xl font-extrabold text-fg">
                        "Sign in to Velomart"
                    </h2>
                    <p class="mt-2 text-center text-sm text-fg-muted">
                        "New here? "
                        <a href="/register" class="font-medium text-link hover:text-link-hover">
                            "Create an account"
                        </a>
                    </p>
                </div>
                {move || {
                    notice
                        .get()
                        .map(|msg| {
                            view! {
                                <div class="bg-status-warning-bg border border-status-warning-border text-status-warning-text px-4 py-3 rounded text-sm">
                                    {msg}
                                </div>
                            }
                        })
                }}
                <form class="mt-8 space-y-6" on:submit=move |ev| on_submit.call(ev)>
                    <div class="space-y-4">
                        <TextField
                            id="email"
                            label="Email address"
                            value=form.email
                            input_type="email"
                            autocomplete="email"
                            required=true
                        />
                        <PasswordField id="password" label="Password" value=form.password />
                    </div>

                    <div class="flex items-center justify-between text-sm">
                        <label class="inline-flex items-center gap-2 text-fg-muted">
                            <input
                                type="checkbox"
                                prop:checked=move || form.remember.get()
                                on:change=move |ev| form.remember.set(event_target_checked(&ev))
                            />
                            "Remember me"
                        </label>
                        <a href="/forgot-password" class="font-medium text-link hover:text-link-hover">
                            "Forgot your password?"
                        </a>
                    </div>

                    <InlineErrorMessage error=error />

                    <button
                        type="submit"
                        disabled=move || pending.get()
                        class="w-full flex justify-center py-2 px-4 border border-transparent text-sm font-medium rounded-md text-action-primary-text bg-action-primary-bg hover:bg-action-primary-bg-hover focus:outline-none focus:ring-2 focus:ring-offset-2 focus:ring-action-primary-focus disabled:opacity-50"
                    >
                        {move || if pending.get() { "Signing in..." } else { "Sign in" }}
                    </button>
                </form>
                <SocialLoginButtons />
            </div>
        </div>
    }
}
