use super::view_model::use_seller_payouts_view_model;
use crate::{
    components::{
        error::InlineErrorMessage,
        forms::TextField,
        layout::SuccessMessage,
    },
    utils::format::mask_account_number,
};
use leptos::*;

#[component]
pub fn SellerPayoutsPanel() -> impl IntoView {
    let vm = use_seller_payouts_view_model();
    let saving = vm.save_action.pending();
    let on_file = move || {
        vm.stored
            .get()
            .map(|d| mask_account_number(&d.account_number))
    };

    view! {
        <div class="space-y-6 max-w-2xl">
            <div>
                <h1 class="text-2xl font-bold text-fg">"Payout details"</h1>
                <p class="text-sm text-fg-muted">
                    "Earnings are transferred to this account when the marketplace processes payouts."
                </p>
            </div>
            <section class="bg-surface-elevated shadow rounded-lg p-6 space-y-4">
                {move || match on_file() {
                    Some(masked) => view! {
                        <p class="text-sm">
                            "Account on file: " <span class="font-mono">{masked}</span>
                        </p>
                    }
                        .into_view(),
                    None => view! {
                        <p class="text-sm text-status-warning-text">
                            "Add a bank account to receive payouts."
                        </p>
                    }
                        .into_view(),
                }}
                <form
                    class="space-y-4"
                    on:submit=move |ev| {
                        ev.prevent_default();
                        vm.save();
                    }
                >
                    <TextField id="bank_name" label="Bank name" value=vm.form.bank_name required=true />
                    <TextField id="account_holder" label="Account holder" value=vm.form.account_holder required=true />
                    <TextField
                        id="account_number"
                        label="Account number"
                        value=vm.form.account_number
                        autocomplete="off"
                        placeholder="Leave blank to keep the current account"
                    />
                    <TextField id="routing_code" label="Routing / sort code" value=vm.form.routing_code />
                    <InlineErrorMessage error=vm.error />
                    {move || vm.success.get().map(|msg| view! { <SuccessMessage message=msg /> })}
                    <button
                        type="submit"
                        disabled=move || saving.get()
                        class="inline-flex justify-center py-2 px-4 text-sm font-medium rounded-md text-action-primary-text bg-action-primary-bg hover:bg-action-primary-bg-hover disabled:opacity-50"
                    >
                        {move || if saving.get() { "Saving..." } else { "Save payout details" }}
                    </button>
                </form>
            </section>
        </div>
    }
}
