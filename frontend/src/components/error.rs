use crate::api::{ApiError, ApiErrorKind};
use leptos::*;

/// Form-level banner for an expected failure (bad credentials, validation).
#[component]
pub fn InlineErrorMessage(#[prop(into)] error: Signal<Option<ApiError>>) -> impl IntoView {
    view! {
        <Show when=move || error.get().is_some() fallback=|| ()>
            <div
                role="alert"
                class="bg-status-error-bg border border-status-error-border text-status-error-text px-4 py-3 rounded space-y-1 my-2"
            >
                <div class="font-bold">{move || error.get().map(|e| e.error).unwrap_or_default()}</div>
                {move || {
                    error
                        .get()
                        .map(|e| {
                            let fields = e.field_messages();
                            let unique: Vec<String> = fields
                                .into_iter()
                                .filter(|msg| *msg != e.error)
                                .collect();
                            if !unique.is_empty() {
                                view! {
                                    <ul class="list-disc list-inside text-sm">
                                        {unique
                                            .into_iter()
                                            .map(|msg| view! { <li>{msg}</li> })
                                            .collect_view()}
                                    </ul>
                                }
                                    .into_view()
                            } else if e.kind == ApiErrorKind::Network {
                                view! {
                                    <div class="text-xs opacity-75">
                                        "Check your connection and try again."
                                    </div>
                                }
                                    .into_view()
                            } else {
                                ().into_view()
                            }
                        })
                        .unwrap_or_else(|| ().into_view())
                }}
            </div>
        </Show>
    }
}
