//! Top-level guard for the routed tree.
//!
//! Errors that reach the boundary are classified for display only; every
//! category gets the same recovery options. Errors produced by the API layer
//! carry a tagged [`ApiErrorKind`] which is used directly, anything else falls
//! back to matching on the message text.

use crate::{
    api::{ApiError, ApiErrorKind},
    utils::navigation,
};
use chrono::{DateTime, Utc};
use leptos::*;
use std::collections::VecDeque;
use thiserror::Error;

pub const MAX_ERROR_HISTORY: usize = 5;
pub const MAX_RECOVERY_ATTEMPTS: u32 = 3;
pub const RECOVERY_DELAY_MS: u32 = 1_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    ChunkLoad,
    Network,
    Type,
    Reference,
    Syntax,
    Unknown,
}

impl ErrorCategory {
    pub fn classify(message: &str) -> Self {
        let lower = message.to_ascii_lowercase();
        if lower.contains("chunk") || lower.contains("failed to fetch dynamically imported module")
        {
            ErrorCategory::ChunkLoad
        } else if lower.contains("network")
            || lower.contains("failed to fetch")
            || lower.contains("request failed")
        {
            ErrorCategory::Network
        } else if lower.contains("typeerror") || lower.contains("type error") {
            ErrorCategory::Type
        } else if lower.contains("referenceerror") || lower.contains("is not defined") {
            ErrorCategory::Reference
        } else if lower.contains("syntaxerror") || lower.contains("unexpected token") {
            ErrorCategory::Syntax
        } else {
            ErrorCategory::Unknown
        }
    }

    pub fn from_api_kind(kind: ApiErrorKind) -> Self {
        match kind {
            ApiErrorKind::Network => ErrorCategory::Network,
            ApiErrorKind::Decode => ErrorCategory::Syntax,
            _ => ErrorCategory::Unknown,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            ErrorCategory::ChunkLoad => "Update available",
            ErrorCategory::Network => "Connection problem",
            ErrorCategory::Type | ErrorCategory::Reference | ErrorCategory::Syntax => {
                "Something broke on this page"
            }
            ErrorCategory::Unknown => "Unexpected error",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            ErrorCategory::ChunkLoad => {
                "Part of the application failed to load, usually after a new release. Reloading the page fixes this."
            }
            ErrorCategory::Network => {
                "We could not reach the Velomart servers. Check your connection and try again."
            }
            ErrorCategory::Type | ErrorCategory::Reference | ErrorCategory::Syntax => {
                "The page ran into a problem while rendering. Our team has been notified."
            }
            ErrorCategory::Unknown => "An unexpected error occurred. Please try again.",
        }
    }
}

pub fn classify_error(error: &(dyn std::error::Error + 'static)) -> ErrorCategory {
    match error.downcast_ref::<ApiError>() {
        Some(api) => ErrorCategory::from_api_kind(api.kind),
        None => ErrorCategory::classify(&error.to_string()),
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CapturedError {
    pub message: String,
    pub category: ErrorCategory,
    pub captured_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("recovery limit of {limit} attempts reached")]
pub struct RecoveryRefused {
    pub limit: u32,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ErrorBoundaryState {
    current: Option<CapturedError>,
    history: VecDeque<CapturedError>,
    recovery_attempts: u32,
}

impl ErrorBoundaryState {
    pub fn current(&self) -> Option<&CapturedError> {
        self.current.as_ref()
    }

    pub fn history(&self) -> impl Iterator<Item = &CapturedError> {
        self.history.iter()
    }

    pub fn recovery_attempts(&self) -> u32 {
        self.recovery_attempts
    }

    pub fn can_recover(&self) -> bool {
        self.recovery_attempts < MAX_RECOVERY_ATTEMPTS
    }

    /// Records a caught error. Re-reporting the error already on display is a no-op.
    pub fn capture(&mut self, message: impl Into<String>, category: ErrorCategory) {
        let message = message.into();
        if self
            .current
            .as_ref()
            .is_some_and(|c| c.message == message && c.category == category)
        {
            return;
        }
        log::error!("render error ({:?}): {}", category, message);
        let captured = CapturedError {
            message,
            category,
            captured_at: Utc::now(),
        };
        self.history.push_back(captured.clone());
        while self.history.len() > MAX_ERROR_HISTORY {
            self.history.pop_front();
        }
        self.current = Some(captured);
    }

    /// Starts a recovery attempt. Past the cap the state is left untouched.
    pub fn handle_recover(&mut self) -> Result<u32, RecoveryRefused> {
        if !self.can_recover() {
            log::warn!(
                "recovery refused after {} attempts",
                self.recovery_attempts
            );
            return Err(RecoveryRefused {
                limit: MAX_RECOVERY_ATTEMPTS,
            });
        }
        self.recovery_attempts += 1;
        Ok(self.recovery_attempts)
    }

    pub fn clear_error(&mut self) {
        self.current = None;
    }
}

#[component]
pub fn AppErrorBoundary(children: Children) -> impl IntoView {
    let state = create_rw_signal(ErrorBoundaryState::default());
    provide_context(state);

    view! {
        <ErrorBoundary fallback=move |errors| view! { <ErrorFallback errors=errors state=state /> }>
            {children()}
        </ErrorBoundary>
    }
}

fn latest_error(errors: &Errors) -> Option<(String, ErrorCategory)> {
    errors
        .iter()
        .last()
        .map(|(_, err)| (err.to_string(), classify_error(&***err)))
}

#[component]
fn ErrorFallback(errors: RwSignal<Errors>, state: RwSignal<ErrorBoundaryState>) -> impl IntoView {
    create_effect(move |_| {
        if let Some((message, category)) = errors.with(latest_error) {
            state.update(|s| s.capture(message, category));
        }
    });

    let (recovering, set_recovering) = create_signal(false);
    let display = move || {
        errors
            .with(latest_error)
            .unwrap_or_else(|| (String::new(), ErrorCategory::Unknown))
    };
    let can_recover = move || state.with(|s| s.can_recover());

    let on_recover = move |_| {
        if recovering.get_untracked() {
            return;
        }
        let mut accepted = false;
        state.update(|s| accepted = s.handle_recover().is_ok());
        if !accepted {
            return;
        }
        set_recovering.set(true);
        spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(RECOVERY_DELAY_MS).await;
            state.update(|s| s.clear_error());
            errors.set(Errors::default());
            set_recovering.set(false);
        });
    };

    view! {
        <div class="min-h-screen flex items-center justify-center bg-surface px-4" role="alert">
            <div class="max-w-lg w-full bg-surface-elevated shadow rounded-lg p-8 space-y-4">
                <h1 class="text-2xl font-bold text-fg">{move || display().1.title()}</h1>
                <p class="text-sm text-fg-muted">{move || display().1.description()}</p>
                <pre class="text-xs bg-surface-muted rounded p-3 overflow-x-auto">{move || display().0}</pre>
                <div class="flex flex-wrap gap-2">
                    <button
                        class="inline-flex items-center rounded-md px-4 py-2 text-sm font-semibold bg-action-primary-bg text-action-primary-text"
                        on:click=move |_| navigation::reload_page()
                    >
                        "Reload page"
                    </button>
                    <button
                        class="inline-flex items-center rounded-md px-4 py-2 text-sm font-semibold bg-surface-muted text-fg border border-border"
                        on:click=move |_| navigation::redirect_to("/")
                    >
                        "Go to home"
                    </button>
                    <Show when=can_recover>
                        <button
                            class="inline-flex items-center rounded-md px-4 py-2 text-sm font-semibold bg-surface-muted text-fg border border-border disabled:opacity-50"
                            disabled=move || recovering.get()
                            on:click=on_recover
                        >
                            {move || if recovering.get() { "Recovering..." } else { "Try again" }}
                        </button>
                    </Show>
                </div>
                <p class="text-xs text-fg-muted">
                    {move || {
                        format!(
                            "Recovery attempts: {} / {}",
                            state.with(|s| s.recovery_attempts()),
                            MAX_RECOVERY_ATTEMPTS
                        )
                    }}
                </p>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_matches_message_substrings() {
        assert_eq!(
            ErrorCategory::classify("Loading chunk 7 failed"),
            ErrorCategory::ChunkLoad
        );
        assert_eq!(
            ErrorCategory::classify("NetworkError when attempting to fetch resource"),
            ErrorCategory::Network
        );
        assert_eq!(
            ErrorCategory::classify("TypeError: x is undefined"),
            ErrorCategory::Type
        );
        assert_eq!(
            ErrorCategory::classify("ReferenceError: foo is not defined"),
            ErrorCategory::Reference
        );
        assert_eq!(
            ErrorCategory::classify("SyntaxError: Unexpected token <"),
            ErrorCategory::Syntax
        );
        assert_eq!(ErrorCategory::classify("boom"), ErrorCategory::Unknown);
    }

    #[test]
    fn api_errors_use_their_tagged_kind() {
        // The message alone would classify as Unknown.
        let err = ApiError::request_failed("could not reach host");
        assert_eq!(classify_error(&err), ErrorCategory::Network);

        let decode = ApiError::decode("bad payload");
        assert_eq!(classify_error(&decode), ErrorCategory::Syntax);
    }

    #[test]
    fn history_keeps_last_five() {
        let mut state = ErrorBoundaryState::default();
        for i in 0..7 {
            state.capture(format!("error {}", i), ErrorCategory::Unknown);
        }
        let kept: Vec<&str> = state.history().map(|e| e.message.as_str()).collect();
        assert_eq!(kept, vec!["error 2", "error 3", "error 4", "error 5", "error 6"]);
        assert_eq!(state.current().map(|c| c.message.as_str()), Some("error 6"));
    }

    #[test]
    fn capture_ignores_repeat_of_current_error() {
        let mut state = ErrorBoundaryState::default();
        state.capture("same", ErrorCategory::Type);
        state.capture("same", ErrorCategory::Type);
        assert_eq!(state.history().count(), 1);
    }

    #[test]
    fn recovery_is_refused_past_the_cap_without_state_change() {
        let mut state = ErrorBoundaryState::default();
        state.capture("TypeError: boom", ErrorCategory::Type);

        for expected in 1..=MAX_RECOVERY_ATTEMPTS {
            assert_eq!(state.handle_recover(), Ok(expected));
        }
        assert!(!state.can_recover());

        let before = state.clone();
        assert_eq!(
            state.handle_recover(),
            Err(RecoveryRefused {
                limit: MAX_RECOVERY_ATTEMPTS
            })
        );
        assert_eq!(state, before);
        assert!(state.current().is_some());
    }

    #[test]
    fn clear_error_keeps_history_and_attempts() {
        let mut state = ErrorBoundaryState::default();
        state.capture("boom", ErrorCategory::Unknown);
        state.handle_recover().unwrap();
        state.clear_error();
        assert!(state.current().is_none());
        assert_eq!(state.history().count(), 1);
        assert_eq!(state.recovery_attempts(), 1);
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn boundary_renders_children_when_ok() {
        let html = render_to_string(move || {
            view! { <AppErrorBoundary><p>"storefront"</p></AppErrorBoundary> }
        });
        assert!(html.contains("storefront"));
        assert!(!html.contains("Reload page"));
    }

    #[test]
    fn boundary_renders_fallback_for_failed_child() {
        let html = render_to_string(move || {
            view! {
                <AppErrorBoundary>
                    {Err::<String, ApiError>(ApiError::request_failed("Request failed: offline"))}
                </AppErrorBoundary>
            }
        });
        assert!(html.contains("Connection problem"));
        assert!(html.contains("Request failed: offline"));
        assert!(html.contains("Reload page"));
        assert!(html.contains("Try again"));
    }
}
