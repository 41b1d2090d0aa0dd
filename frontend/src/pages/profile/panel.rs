use super::view_model::use_profile_view_model;
use crate::{
    components::{
        error::InlineErrorMessage,
        forms::{PasswordField, TextField},
        layout::SuccessMessage,
    },
    state::auth::use_auth,
    utils::time::format_optional_date,
};
use leptos::*;

#[component]
pub fn ProfilePanel() -> impl IntoView {
    let vm = use_profile_view_model();
    let (auth, _) = use_auth();
    let saving = vm.update_action.pending();
    let changing = vm.password_action.pending();

    let role_label = move || auth.get().role().map(|r| r.label()).unwrap_or_default();
    let member_since = move || {
        format_optional_date(auth.get().user.and_then(|u| u.created_at).as_ref())
    };
    let verified = move || {
        auth.get()
            .user
            .map(|u| u.email_verified_at.is_some())
            .unwrap_or(false)
    };

    view! {
        <div class="space-y-8 max-w-2xl">
            <div>
                <h1 class="text-2xl font-bold text-fg">"Your profile"</h1>
                <p class="text-sm text-fg-muted">
                    {role_label} " · member since " {member_since}
                    <Show when=move || !verified()>
                        <span class="ml-2 text-status-warning-text">"Email not verified"</span>
                    </Show>
                </p>
            </div>

            <section class="bg-surface-elevated shadow rounded-lg p-6 space-y-4">
                <h2 class="text-lg font-semibold text-fg">"Account details"</h2>
                <form
                    class="space-y-4"
                    on:submit=move |ev| {
                        ev.prevent_default();
                        vm.save_profile();
                    }
                >
                    <TextField id="name" label="Full name" value=vm.profile.name required=true />
                    <TextField id="email" label="Email address" value=vm.profile.email input_type="email" required=true />
                    <TextField id="phone" label="Phone" value=vm.profile.phone input_type="tel" />
                    <TextField id="address" label="Shipping address" value=vm.profile.address />
                    <InlineErrorMessage error=vm.profile_error />
                    {move || vm.profile_success.get().map(|msg| view! { <SuccessMessage message=msg /> })}
                    <button
                        type="submit"
                        disabled=move || saving.get()
                        class="inline-flex justify-center py-2 px-4 text-sm font-medium rounded-md text-action-primary-text bg-action-primary-bg hover:bg-action-primary-bg-hover disabled:opacity-50"
                    >
                        {move || if saving.get() { "Saving..." } else { "Save changes" }}
                    </button>
                </form>
            </section>

            <section class="bg-surface-elevated shadow rounded-lg p-6 space-y-4">
                <h2 class="text-lg font-semibold text-fg">"Change password"</h2>
                <form
                    class="space-y-4"
                    on:submit=move |ev| {
                        ev.prevent_default();
                        vm.change_password();
                    }
                >
                    <PasswordField id="current_password" label="Current password" value=vm.password.current />
                    <PasswordField
                        id="new_password"
                        label="New password"
                        value=vm.password.new_password
                        autocomplete="new-password"
                    />
                    <PasswordField
                        id="new_password_confirmation"
                        label="Confirm new password"
                        value=vm.password.confirmation
                        autocomplete="new-password"
                    />
                    <InlineErrorMessage error=vm.password_error />
                    {move || vm.password_success.get().map(|msg| view! { <SuccessMessage message=msg /> })}
                    <button
                        type="submit"
                        disabled=move || changing.get()
                        class="inline-flex justify-center py-2 px-4 text-sm font-medium rounded-md text-action-primary-text bg-action-primary-bg hover:bg-action-primary-bg-hover disabled:opacity-50"
                    >
                        {move || if changing.get() { "Updating..." } else { "Update password" }}
                    </button>
                </form>
            </section>
        </div>
    }
}
