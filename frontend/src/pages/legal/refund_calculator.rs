use crate::utils::format::format_amount;
use leptos::*;

pub const RETURN_WINDOW_DAYS: i64 = 30;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RefundCondition {
    #[default]
    Unopened,
    Opened,
    Used,
    Damaged,
}

impl RefundCondition {
    pub const ALL: [RefundCondition; 4] = [
        RefundCondition::Unopened,
        RefundCondition::Opened,
        RefundCondition::Used,
        RefundCondition::Damaged,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RefundCondition::Unopened => "unopened",
            RefundCondition::Opened => "opened",
            RefundCondition::Used => "used",
            RefundCondition::Damaged => "damaged",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RefundCondition::Unopened => "Unopened, original packaging",
            RefundCondition::Opened => "Opened, unused",
            RefundCondition::Used => "Used, good condition",
            RefundCondition::Damaged => "Damaged by the customer",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.as_str() == raw)
    }

    /// Refunded share in percent, `None` when the item cannot be returned.
    pub fn refund_percentage(&self) -> Option<u8> {
        match self {
            RefundCondition::Unopened => Some(100),
            RefundCondition::Opened => Some(90),
            RefundCondition::Used => Some(75),
            RefundCondition::Damaged => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RefundInput {
    pub amount: f64,
    pub days_since_purchase: i64,
    pub condition: RefundCondition,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RefundEstimate {
    pub eligible: bool,
    pub percentage: u8,
    pub refund_amount: String,
    pub restocking_fee: String,
    pub reason: Option<String>,
}

impl RefundEstimate {
    fn ineligible(reason: impl Into<String>) -> Self {
        Self {
            eligible: false,
            percentage: 0,
            refund_amount: format_amount(0.0),
            restocking_fee: format_amount(0.0),
            reason: Some(reason.into()),
        }
    }
}

pub fn calculate_refund(input: RefundInput) -> RefundEstimate {
    if !input.amount.is_finite() || input.amount <= 0.0 {
        return RefundEstimate::ineligible("Order amount must be greater than zero");
    }
    if input.days_since_purchase < 0 {
        return RefundEstimate::ineligible("Days since purchase cannot be negative");
    }
    if input.days_since_purchase > RETURN_WINDOW_DAYS {
        return RefundEstimate::ineligible(format!(
            "Return window ({} days) has expired",
            RETURN_WINDOW_DAYS
        ));
    }
    let Some(percentage) = input.condition.refund_percentage() else {
        return RefundEstimate::ineligible("Damaged items are not eligible for a refund");
    };
    let refund = input.amount * f64::from(percentage) / 100.0;
    RefundEstimate {
        eligible: true,
        percentage,
        refund_amount: format_amount(refund),
        restocking_fee: format_amount(input.amount - refund),
        reason: None,
    }
}

/// Parses the raw form inputs. Blank or malformed numbers read as zero so the
/// estimate reports them as invalid instead of failing.
pub fn input_from_form(amount: &str, days: &str, condition: &str) -> RefundInput {
    RefundInput {
        amount: amount.trim().parse().unwrap_or(0.0),
        days_since_purchase: days.trim().parse().unwrap_or(-1),
        condition: RefundCondition::parse(condition).unwrap_or_default(),
    }
}

#[component]
pub fn RefundCalculator() -> impl IntoView {
    let amount = create_rw_signal(String::new());
    let days = create_rw_signal(String::new());
    let condition = create_rw_signal(RefundCondition::default().as_str().to_string());
    let estimate = create_memo(move |_| {
        let (a, d) = (amount.get(), days.get());
        if a.trim().is_empty() || d.trim().is_empty() {
            None
        } else {
            Some(calculate_refund(input_from_form(&a, &d, &condition.get())))
        }
    });

    view! {
        <section class="bg-surface-muted rounded-lg p-6 space-y-4" aria-labelledby="refund-calculator">
            <h2 id="refund-calculator" class="text-lg font-semibold text-fg">"Refund estimator"</h2>
            <div class="grid grid-cols-1 gap-4 sm:grid-cols-3">
                <label class="block text-sm text-fg-muted">
                    "Order amount"
                    <input
                        type="number"
                        min="0"
                        step="0.01"
                        class="mt-1 block w-full rounded-md border border-form-control-border bg-form-control-bg px-3 py-2 text-sm text-fg"
                        prop:value=move || amount.get()
                        on:input=move |ev| amount.set(event_target_value(&ev))
                    />
                </label>
                <label class="block text-sm text-fg-muted">
                    "Days since delivery"
                    <input
                        type="number"
                        min="0"
                        class="mt-1 block w-full rounded-md border border-form-control-border bg-form-control-bg px-3 py-2 text-sm text-fg"
                        prop:value=move || days.get()
                        on:input=move |ev| days.set(event_target_value(&ev))
                    />
                </label>
                <label class="block text-sm text-fg-muted">
                    "Item condition"
                    <select
                        class="mt-1 block w-full rounded-md border border-form-control-border bg-form-control-bg px-3 py-2 text-sm text-fg"
                        prop:value=move || condition.get()
                        on:change=move |ev| condition.set(event_target_value(&ev))
                    >
                        {RefundCondition::ALL
                            .into_iter()
                            .map(|c| view! { <option value=c.as_str()>{c.label()}</option> })
                            .collect_view()}
                    </select>
                </label>
            </div>
            <div role="status" class="text-sm">
                {move || match estimate.get() {
                    None => view! {
                        <p class="text-fg-muted">"Enter your order amount and how long ago it arrived."</p>
                    }
                        .into_view(),
                    Some(est) if est.eligible => view! {
                        <p class="text-status-success-text">
                            {format!(
                                "Estimated refund: {} ({}%). Restocking fee: {}.",
                                est.refund_amount, est.percentage, est.restocking_fee
                            )}
                        </p>
                    }
                        .into_view(),
                    Some(est) => view! {
                        <p class="text-status-error-text">
                            {format!("Not eligible: {}", est.reason.unwrap_or_default())}
                        </p>
                    }
                        .into_view(),
                }}
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(amount: f64, days: i64, condition: RefundCondition) -> RefundInput {
        RefundInput {
            amount,
            days_since_purchase: days,
            condition,
        }
    }

    #[test]
    fn unopened_within_window_is_full_refund() {
        let est = calculate_refund(input(10000.0, 10, RefundCondition::Unopened));
        assert!(est.eligible);
        assert_eq!(est.percentage, 100);
        assert_eq!(est.refund_amount, "10000.00");
        assert_eq!(est.restocking_fee, "0.00");
        assert!(est.reason.is_none());
    }

    #[test]
    fn expired_window_is_ineligible() {
        let est = calculate_refund(input(10000.0, 40, RefundCondition::Unopened));
        assert!(!est.eligible);
        assert_eq!(
            est.reason.as_deref(),
            Some("Return window (30 days) has expired")
        );
    }

    #[test]
    fn last_day_of_window_still_counts() {
        assert!(calculate_refund(input(100.0, 30, RefundCondition::Unopened)).eligible);
        assert!(!calculate_refund(input(100.0, 31, RefundCondition::Unopened)).eligible);
    }

    #[test]
    fn condition_sets_percentage_and_fee() {
        let opened = calculate_refund(input(250.0, 3, RefundCondition::Opened));
        assert_eq!(opened.percentage, 90);
        assert_eq!(opened.refund_amount, "225.00");
        assert_eq!(opened.restocking_fee, "25.00");

        let used = calculate_refund(input(1200.0, 3, RefundCondition::Used));
        assert_eq!(used.refund_amount, "900.00");
        assert_eq!(used.restocking_fee, "300.00");

        let damaged = calculate_refund(input(1200.0, 3, RefundCondition::Damaged));
        assert!(!damaged.eligible);
    }

    #[test]
    fn invalid_inputs_are_ineligible() {
        assert!(!calculate_refund(input(0.0, 1, RefundCondition::Unopened)).eligible);
        assert!(!calculate_refund(input(-5.0, 1, RefundCondition::Unopened)).eligible);
        let negative_days = calculate_refund(input(50.0, -1, RefundCondition::Unopened));
        assert_eq!(
            negative_days.reason.as_deref(),
            Some("Days since purchase cannot be negative")
        );
    }

    #[test]
    fn form_inputs_parse_leniently() {
        let parsed = input_from_form(" 99.90 ", "7", "opened");
        assert_eq!(parsed.amount, 99.9);
        assert_eq!(parsed.days_since_purchase, 7);
        assert_eq!(parsed.condition, RefundCondition::Opened);
        assert_eq!(input_from_form("x", "", "bogus").condition, RefundCondition::Unopened);
    }
}
