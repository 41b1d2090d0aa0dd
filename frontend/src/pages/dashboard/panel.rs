use super::{
    components::{range_selector::TimeRangeSelector, tables::{ActivityTable, RankingTable}},
    utils::DashboardKind,
    view_model::use_dashboard_view_model,
};
use crate::components::{
    charts::{BarChart, StatGrid},
    common::{Button, ButtonVariant},
    error::InlineErrorMessage,
    layout::LoadingSpinner,
};
use crate::utils::format::format_currency;
use leptos::*;

fn party_label(kind: DashboardKind) -> &'static str {
    match kind {
        DashboardKind::Customer => "Recipient",
        DashboardKind::Seller => "Customer",
        DashboardKind::Admin => "Seller",
    }
}

#[component]
pub fn DashboardPanel(kind: DashboardKind) -> impl IntoView {
    let vm = use_dashboard_view_model(kind);
    let view_data = create_memo(move |_| vm.view());
    let error = Signal::derive(move || vm.error());

    let cards = Signal::derive(move || view_data.with(|v| v.cards.clone()));
    let chart = Signal::derive(move || view_data.with(|v| v.chart.clone()));
    let ranking = Signal::derive(move || view_data.with(|v| v.ranking.clone()));
    let activity = Signal::derive(move || view_data.with(|v| v.activity.clone()));

    view! {
        <div class="space-y-6">
            <div class="flex flex-col gap-3 sm:flex-row sm:items-center sm:justify-between">
                <div class="flex items-center gap-3">
                    <h1 class="text-2xl font-bold text-fg">{kind.title()}</h1>
                    <Show when=move || vm.loading()>
                        <LoadingSpinner />
                    </Show>
                </div>
                <TimeRangeSelector
                    selected=vm.range
                    on_change=Callback::new(move |range| vm.select_range(range))
                />
            </div>
            <Show when=move || error.get().is_some()>
                <div class="space-y-2">
                    <InlineErrorMessage error=error />
                    <Button variant=ButtonVariant::Secondary on:click=move |_| vm.retry()>
                        "Retry"
                    </Button>
                </div>
            </Show>
            <StatGrid cards=cards />
            <div class="grid grid-cols-1 gap-6 lg:grid-cols-3">
                <div class="lg:col-span-2">
                    <BarChart title=kind.chart_title() series=chart format_value=format_currency />
                </div>
                {kind
                    .ranking_title()
                    .map(|title| view! { <RankingTable title=title rows=ranking /> })}
            </div>
            <ActivityTable
                title=kind.activity_title()
                party_label=party_label(kind)
                rows=activity
            />
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::{helpers::seller, ssr::render_as};

    #[test]
    fn seller_panel_renders_placeholders_before_load() {
        let html = render_as(Some(seller()), || view! { <DashboardPanel kind=DashboardKind::Seller /> });
        assert!(html.contains("Seller dashboard"));
        assert!(html.contains("Pending payout"));
        assert!(html.contains("Top products"));
        assert!(html.contains("Last 30 days"));
        assert!(html.contains("No recent activity."));
    }

    #[test]
    fn customer_panel_has_no_ranking() {
        let html = render_as(Some(seller()), || view! { <DashboardPanel kind=DashboardKind::Customer /> });
        assert!(html.contains("My dashboard"));
        assert!(!html.contains("Nothing to rank yet."));
    }
}
