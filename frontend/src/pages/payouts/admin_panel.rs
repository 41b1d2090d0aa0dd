use super::view_model::{use_admin_payouts_view_model, AdminPayoutsViewModel};
use crate::{
    api::{PayoutRecord, PendingPayout, SellerPaymentDetail},
    components::{
        common::{Button, ButtonVariant},
        confirm_dialog::ConfirmDialog,
        empty_state::EmptyState,
        error::InlineErrorMessage,
        layout::{LoadingSpinner, SuccessMessage},
    },
    utils::{
        format::{format_currency, mask_account_number},
        time::{format_optional_date, format_period},
    },
};
use leptos::*;

#[component]
pub fn AdminPayoutsPanel() -> impl IntoView {
    let vm = use_admin_payouts_view_model();
    let processing = vm.process_action.pending();
    let selected_count = Signal::derive(move || vm.selection.with(|s| s.len()));
    let confirm_message = Signal::derive(move || {
        format!(
            "Send {} to {} seller(s)? This cannot be undone.",
            format_currency(vm.selected_total()),
            selected_count.get()
        )
    });

    view! {
        <div class="space-y-8">
            <div class="flex flex-col gap-3 sm:flex-row sm:items-center sm:justify-between">
                <h1 class="text-2xl font-bold text-fg">"Seller payouts"</h1>
                <div class="flex items-center gap-3">
                    <span class="text-sm text-fg-muted">
                        {move || format!(
                            "{} selected · {}",
                            selected_count.get(),
                            format_currency(vm.selected_total()),
                        )}
                    </span>
                    <Button
                        on:click=move |_| vm.request_process()
                        disabled=Signal::derive(move || selected_count.get() == 0)
                        loading=processing
                    >
                        "Process selected"
                    </Button>
                </div>
            </div>

            <InlineErrorMessage error=vm.error />
            {move || vm.message.get().map(|msg| view! { <SuccessMessage message=msg /> })}

            <PendingPayoutsSection vm=vm />
            <SellerDetailSection vm=vm />
            <PayoutHistorySection vm=vm />

            <ConfirmDialog
                is_open=vm.confirm_open.into()
                title="Process payouts"
                message=confirm_message
                confirm_label="Process"
                pending=processing
                on_confirm=Callback::new(move |_| vm.confirm_process())
                on_cancel=Callback::new(move |_| vm.confirm_open.set(false))
            />
        </div>
    }
}

#[component]
fn PendingPayoutsSection(vm: AdminPayoutsViewModel) -> impl IntoView {
    let all_selected = move || {
        let rows = vm.pending();
        vm.selection.with(|s| s.all_selected(&rows))
    };

    view! {
        <section class="bg-surface-elevated shadow rounded-lg p-4 overflow-x-auto">
            <h2 class="text-lg font-semibold text-fg mb-3">"Pending payouts"</h2>
            <Suspense fallback=|| view! { <LoadingSpinner /> }>
                {move || match vm.pending_resource.get() {
                    None => ().into_view(),
                    Some(Err(err)) => view! {
                        <InlineErrorMessage error=Signal::derive(move || Some(err.clone())) />
                    }
                        .into_view(),
                    Some(Ok(rows)) if rows.is_empty() => view! {
                        <EmptyState
                            title="No pending payouts"
                            description="Every seller has been paid for completed orders."
                        />
                    }
                        .into_view(),
                    Some(Ok(rows)) => view! {
                        <table class="min-w-full text-sm">
                            <thead>
                                <tr class="text-left text-xs uppercase text-fg-muted">
                                    <th class="py-2 pr-3">
                                        <input
                                            type="checkbox"
                                            aria-label="Select all sellers"
                                            prop:checked=all_selected
                                            on:change=move |_| vm.toggle_all()
                                        />
                                    </th>
                                    <th class="py-2 pr-4">"Seller"</th>
                                    <th class="py-2 pr-4">"Period"</th>
                                    <th class="py-2 pr-4">"Orders"</th>
                                    <th class="py-2 pr-4">"Amount"</th>
                                    <th class="py-2"></th>
                                </tr>
                            </thead>
                            <tbody class="divide-y divide-border">
                                {rows.into_iter().map(|row| pending_row(vm, row)).collect_view()}
                            </tbody>
                        </table>
                    }
                        .into_view(),
                }}
            </Suspense>
        </section>
    }
}

fn pending_row(vm: AdminPayoutsViewModel, row: PendingPayout) -> impl IntoView {
    let id = row.seller_id;
    let store = row.store_name.clone().unwrap_or_default();
    let checkbox_label = format!("Select {}", row.seller_name);
    view! {
        <tr>
            <td class="py-2 pr-3">
                <input
                    type="checkbox"
                    aria-label=checkbox_label
                    prop:checked=move || vm.selection.with(|s| s.is_selected(id))
                    on:change=move |_| vm.toggle(id)
                />
            </td>
            <td class="py-2 pr-4">
                <span class="block text-fg">{row.seller_name}</span>
                <span class="block text-xs text-fg-muted">{store}</span>
            </td>
            <td class="py-2 pr-4">{format_period(row.period_start, row.period_end)}</td>
            <td class="py-2 pr-4">{row.orders_count}</td>
            <td class="py-2 pr-4 font-medium">{format_currency(row.amount)}</td>
            <td class="py-2 text-right">
                <button
                    type="button"
                    class="text-sm text-link hover:underline"
                    on:click=move |_| vm.show_detail(id)
                >
                    "Details"
                </button>
            </td>
        </tr>
    }
}

#[component]
fn SellerDetailSection(vm: AdminPayoutsViewModel) -> impl IntoView {
    view! {
        <Show when=move || vm.detail_seller.get().is_some()>
            <section class="bg-surface-elevated shadow rounded-lg p-4 space-y-3">
                <Suspense fallback=|| view! { <LoadingSpinner /> }>
                    {move || match vm.detail_resource.get().flatten() {
                        None => ().into_view(),
                        Some(Err(err)) => view! {
                            <InlineErrorMessage error=Signal::derive(move || Some(err.clone())) />
                        }
                            .into_view(),
                        Some(Ok(detail)) => seller_detail(detail).into_view(),
                    }}
                </Suspense>
            </section>
        </Show>
    }
}

fn seller_detail(detail: SellerPaymentDetail) -> impl IntoView {
    let bank = match detail.payout_details {
        Some(bank) => view! {
            <dl class="grid grid-cols-2 gap-2 text-sm">
                <dt class="text-fg-muted">"Bank"</dt>
                <dd>{bank.bank_name}</dd>
                <dt class="text-fg-muted">"Account holder"</dt>
                <dd>{bank.account_holder}</dd>
                <dt class="text-fg-muted">"Account number"</dt>
                <dd class="font-mono">{mask_account_number(&bank.account_number)}</dd>
            </dl>
        }
            .into_view(),
        None => view! {
            <p class="text-sm text-status-warning-text">
                "This seller has not added payout details yet."
            </p>
        }
            .into_view(),
    };
    view! {
        <div class="flex items-baseline justify-between">
            <h2 class="text-lg font-semibold text-fg">{detail.seller_name}</h2>
            <span class="text-sm text-fg-muted">{detail.email.unwrap_or_default()}</span>
        </div>
        <p class="text-sm">"Pending: " <strong>{format_currency(detail.pending_amount)}</strong></p>
        {bank}
        <ul class="divide-y divide-border text-sm">
            {detail
                .transactions
                .into_iter()
                .map(|tx| {
                    view! {
                        <li class="py-1 flex justify-between">
                            <span class="font-mono">{tx.reference}</span>
                            <span>{format_currency(tx.amount)}</span>
                        </li>
                    }
                })
                .collect_view()}
        </ul>
    }
}

#[component]
fn PayoutHistorySection(vm: AdminPayoutsViewModel) -> impl IntoView {
    view! {
        <section class="bg-surface-elevated shadow rounded-lg p-4 overflow-x-auto">
            <h2 class="text-lg font-semibold text-fg mb-3">"Payout history"</h2>
            <Suspense fallback=|| view! { <LoadingSpinner /> }>
                {move || match vm.history_resource.get() {
                    None => ().into_view(),
                    Some(Err(err)) => view! {
                        <InlineErrorMessage error=Signal::derive(move || Some(err.clone())) />
                    }
                        .into_view(),
                    Some(Ok(page)) => {
                        let has_prev = page.has_prev();
                        let has_next = page.has_next();
                        let current = page.current_page;
                        view! {
                            <table class="min-w-full text-sm">
                                <thead>
                                    <tr class="text-left text-xs uppercase text-fg-muted">
                                        <th class="py-2 pr-4">"Reference"</th>
                                        <th class="py-2 pr-4">"Seller"</th>
                                        <th class="py-2 pr-4">"Amount"</th>
                                        <th class="py-2 pr-4">"Status"</th>
                                        <th class="py-2">"Processed"</th>
                                    </tr>
                                </thead>
                                <tbody class="divide-y divide-border">
                                    {page.data.into_iter().map(history_row).collect_view()}
                                </tbody>
                            </table>
                            <div class="mt-3 flex items-center justify-between text-sm">
                                <span class="text-fg-muted">
                                    {format!("Page {} of {} · {} payouts", current, page.last_page.max(1), page.total)}
                                </span>
                                <div class="flex gap-2">
                                    <Button
                                        variant=ButtonVariant::Secondary
                                        disabled=!has_prev
                                        on:click=move |_| vm.go_to_page(current.saturating_sub(1))
                                    >
                                        "Previous"
                                    </Button>
                                    <Button
                                        variant=ButtonVariant::Secondary
                                        disabled=!has_next
                                        on:click=move |_| vm.go_to_page(current + 1)
                                    >
                                        "Next"
                                    </Button>
                                </div>
                            </div>
                        }
                            .into_view()
                    }
                }}
            </Suspense>
        </section>
    }
}

fn history_row(record: PayoutRecord) -> impl IntoView {
    view! {
        <tr>
            <td class="py-2 pr-4 font-mono">{record.reference.unwrap_or_else(|| format!("#{}", record.id))}</td>
            <td class="py-2 pr-4">{record.seller_name}</td>
            <td class="py-2 pr-4">{format_currency(record.amount)}</td>
            <td class="py-2 pr-4 capitalize">{record.status}</td>
            <td class="py-2">{format_optional_date(record.processed_at.as_ref())}</td>
        </tr>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::{helpers::super_admin, ssr::render_as};

    #[test]
    fn admin_panel_renders_sections() {
        let html = render_as(Some(super_admin()), || view! { <AdminPayoutsPanel /> });
        assert!(html.contains("Seller payouts"));
        assert!(html.contains("Pending payouts"));
        assert!(html.contains("Payout history"));
        assert!(html.contains("0 selected"));
    }
}
