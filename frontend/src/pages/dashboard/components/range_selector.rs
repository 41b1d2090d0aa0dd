use crate::api::TimeRange;
use leptos::*;

#[component]
pub fn TimeRangeSelector(
    #[prop(into)] selected: Signal<TimeRange>,
    on_change: Callback<TimeRange>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
) -> impl IntoView {
    view! {
        <div class="inline-flex rounded-md shadow-sm" role="group" aria-label="Time range">
            {TimeRange::ALL
                .into_iter()
                .map(|range| {
                    let active = move || selected.get() == range;
                    view! {
                        <button
                            type="button"
                            class=move || {
                                if active() {
                                    "px-3 py-1.5 text-sm font-medium border border-action-primary-bg bg-action-primary-bg text-action-primary-text"
                                } else {
                                    "px-3 py-1.5 text-sm font-medium border border-border bg-surface-elevated text-fg hover:bg-surface-muted"
                                }
                            }
                            aria-pressed=move || active().to_string()
                            disabled=move || disabled.get()
                            on:click=move |_| on_change.call(range)
                        >
                            {range.label()}
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn renders_every_range_and_marks_selected() {
        let html = render_to_string(move || {
            view! {
                <TimeRangeSelector
                    selected=Signal::derive(|| TimeRange::Quarter)
                    on_change=Callback::new(|_| {})
                />
            }
        });
        for range in TimeRange::ALL {
            assert!(html.contains(range.label()));
        }
        assert_eq!(html.matches("aria-pressed=\"true\"").count(), 1);
    }
}
