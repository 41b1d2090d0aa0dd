use leptos::*;

const INPUT_CLASS: &str = "mt-1 block w-full rounded-md border border-form-control-border bg-form-control-bg px-3 py-2 text-sm text-fg shadow-sm focus:outline-none focus:ring-2 focus:ring-action-primary-focus disabled:bg-state-disabled-bg disabled:text-state-disabled-text";

/// Labelled input bound to a signal. `input_type` defaults to `text`.
#[component]
pub fn TextField(
    #[prop(into)] id: String,
    label: &'static str,
    value: RwSignal<String>,
    #[prop(optional)] input_type: Option<&'static str>,
    #[prop(optional)] autocomplete: Option<&'static str>,
    #[prop(optional)] placeholder: Option<&'static str>,
    #[prop(optional)] required: bool,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
) -> impl IntoView {
    view! {
        <div>
            <label for=id.clone() class="block text-sm font-medium text-fg-muted">
                {label}
                {required.then_some(view! { <span class="text-status-error-text">" *"</span> })}
            </label>
            <input
                id=id
                type=input_type.unwrap_or("text")
                class=INPUT_CLASS
                autocomplete=autocomplete
                placeholder=placeholder
                required=required
                disabled=move || disabled.get()
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
        </div>
    }
}

/// Password input with a show/hide toggle.
#[component]
pub fn PasswordField(
    #[prop(into)] id: String,
    label: &'static str,
    value: RwSignal<String>,
    #[prop(optional)] autocomplete: Option<&'static str>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
) -> impl IntoView {
    let (visible, set_visible) = create_signal(false);
    view! {
        <div>
            <label for=id.clone() class="block text-sm font-medium text-fg-muted">{label}</label>
            <div class="relative">
                <input
                    id=id
                    type=move || if visible.get() { "text" } else { "password" }
                    class=INPUT_CLASS
                    autocomplete=autocomplete.unwrap_or("current-password")
                    required=true
                    disabled=move || disabled.get()
                    prop:value=move || value.get()
                    on:input=move |ev| value.set(event_target_value(&ev))
                />
                <button
                    type="button"
                    class="absolute inset-y-0 right-0 px-3 text-xs text-fg-muted hover:text-fg"
                    aria-label=move || if visible.get() { "Hide password" } else { "Show password" }
                    on:click=move |_| set_visible.update(|v| *v = !*v)
                >
                    {move || if visible.get() { "Hide" } else { "Show" }}
                </button>
            </div>
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn text_field_renders_label_and_value() {
        let html = render_to_string(move || {
            let value = create_rw_signal("alice@example.com".to_string());
            view! {
                <TextField
                    id="email"
                    label="Email address"
                    value=value
                    input_type="email"
                    required=true
                />
            }
        });
        assert!(html.contains("Email address"));
        assert!(html.contains("type=\"email\""));
    }

    #[test]
    fn password_field_starts_hidden() {
        let html = render_to_string(move || {
            let value = create_rw_signal(String::new());
            view! { <PasswordField id="password" label="Password" value=value /> }
        });
        assert!(html.contains("type=\"password\""));
        assert!(html.contains("Show password"));
    }
}
