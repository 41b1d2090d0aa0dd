use crate::pages::dashboard::utils::{ActivityRow, RankingRow};
use leptos::*;

#[component]
pub fn RankingTable(title: &'static str, #[prop(into)] rows: Signal<Vec<RankingRow>>) -> impl IntoView {
    view! {
        <section class="bg-surface-elevated rounded-lg shadow p-4">
            <h3 class="text-sm font-semibold text-fg mb-3">{title}</h3>
            <Show
                when=move || !rows.with(Vec::is_empty)
                fallback=|| view! { <p class="text-sm text-fg-muted">"Nothing to rank yet."</p> }
            >
                <ol class="divide-y divide-border">
                    {move || {
                        rows.get()
                            .into_iter()
                            .enumerate()
                            .map(|(i, row)| {
                                view! {
                                    <li class="py-2 flex items-center justify-between text-sm">
                                        <span class="text-fg">{format!("{}. {}", i + 1, row.name)}</span>
                                        <span class="text-right">
                                            <span class="block font-medium text-fg">{row.primary}</span>
                                            <span class="block text-xs text-fg-muted">{row.secondary}</span>
                                        </span>
                                    </li>
                                }
                            })
                            .collect_view()
                    }}
                </ol>
            </Show>
        </section>
    }
}

#[component]
pub fn ActivityTable(
    title: &'static str,
    party_label: &'static str,
    #[prop(into)] rows: Signal<Vec<ActivityRow>>,
) -> impl IntoView {
    view! {
        <section class="bg-surface-elevated rounded-lg shadow p-4 overflow-x-auto">
            <h3 class="text-sm font-semibold text-fg mb-3">{title}</h3>
            <Show
                when=move || !rows.with(Vec::is_empty)
                fallback=|| view! { <p class="text-sm text-fg-muted">"No recent activity."</p> }
            >
                <table class="min-w-full text-sm">
                    <thead>
                        <tr class="text-left text-xs uppercase text-fg-muted">
                            <th class="py-2 pr-4">"Reference"</th>
                            <th class="py-2 pr-4">{party_label}</th>
                            <th class="py-2 pr-4">"Amount"</th>
                            <th class="py-2 pr-4">"Status"</th>
                            <th class="py-2">"Date"</th>
                        </tr>
                    </thead>
                    <tbody class="divide-y divide-border">
                        {move || {
                            rows.get()
                                .into_iter()
                                .map(|row| {
                                    view! {
                                        <tr>
                                            <td class="py-2 pr-4 font-mono">{row.reference}</td>
                                            <td class="py-2 pr-4">{row.party}</td>
                                            <td class="py-2 pr-4">{row.amount}</td>
                                            <td class="py-2 pr-4 capitalize">{row.status}</td>
                                            <td class="py-2">{row.date}</td>
                                        </tr>
                                    }
                                })
                                .collect_view()
                        }}
                    </tbody>
                </table>
            </Show>
        </section>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn activity_table_renders_rows() {
        let html = render_to_string(move || {
            let rows = vec![ActivityRow {
                reference: "VM-0001".into(),
                party: "Alice".into(),
                amount: "$10.00".into(),
                status: "paid".into(),
                date: "Mar 01, 2025".into(),
            }];
            view! {
                <ActivityTable
                    title="Recent orders"
                    party_label="Customer"
                    rows=Signal::derive(move || rows.clone())
                />
            }
        });
        assert!(html.contains("VM-0001"));
        assert!(html.contains("Customer"));
    }

    #[test]
    fn ranking_table_shows_empty_copy() {
        let html = render_to_string(move || {
            view! { <RankingTable title="Top products" rows=Signal::derive(Vec::new) /> }
        });
        assert!(html.contains("Nothing to rank yet."));
    }
}
