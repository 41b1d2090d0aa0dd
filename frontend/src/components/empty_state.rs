use leptos::*;

/// Placeholder card for lists with no rows, e.g. no pending payouts.
#[component]
pub fn EmptyState(
    #[prop(into)] title: String,
    #[prop(optional, into)] description: Option<String>,
) -> impl IntoView {
    view! {
        <div class="text-center py-10 px-4 rounded-lg border-2 border-dashed border-border-strong bg-surface-muted">
            <p class="text-sm font-semibold text-fg">{title}</p>
            {description.map(|desc| view! { <p class="mt-1 text-sm text-fg-muted">{desc}</p> })}
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn empty_state_renders_title_and_description() {
        let html = render_to_string(move || {
            view! { <EmptyState title="No pending payouts" description="All sellers are settled." /> }
        });
        assert!(html.contains("No pending payouts"));
        assert!(html.contains("All sellers are settled."));
    }
}
