use crate::{
    api::{PayoutDetails, PendingPayout},
    utils::validation,
};
use leptos::*;
use std::collections::BTreeSet;

pub const HISTORY_PER_PAGE: u32 = 15;

/// Seller ids ticked for the next payout batch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PayoutSelection {
    ids: BTreeSet<u64>,
}

impl PayoutSelection {
    pub fn toggle(&mut self, seller_id: u64) {
        if !self.ids.remove(&seller_id) {
            self.ids.insert(seller_id);
        }
    }

    pub fn is_selected(&self, seller_id: u64) -> bool {
        self.ids.contains(&seller_id)
    }

    /// Selects every row, or clears the selection when every row is already selected.
    pub fn toggle_all(&mut self, payouts: &[PendingPayout]) {
        if self.all_selected(payouts) {
            self.ids.clear();
        } else {
            self.ids = payouts.iter().map(|p| p.seller_id).collect();
        }
    }

    pub fn all_selected(&self, payouts: &[PendingPayout]) -> bool {
        !payouts.is_empty() && payouts.iter().all(|p| self.ids.contains(&p.seller_id))
    }

    /// Drops ids that are no longer pending after a reload.
    pub fn retain_pending(&mut self, payouts: &[PendingPayout]) {
        self.ids
            .retain(|id| payouts.iter().any(|p| p.seller_id == *id));
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn ids(&self) -> Vec<u64> {
        self.ids.iter().copied().collect()
    }

    pub fn total(&self, payouts: &[PendingPayout]) -> f64 {
        payouts
            .iter()
            .filter(|p| self.ids.contains(&p.seller_id))
            .map(|p| p.amount)
            .sum()
    }
}

pub fn build_payout_details(
    bank_name: &str,
    account_holder: &str,
    account_number: &str,
    routing_code: &str,
) -> Result<PayoutDetails, String> {
    validation::require("Bank name", bank_name)?;
    validation::require("Account holder", account_holder)?;
    validation::require("Account number", account_number)?;
    let account: String = account_number
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '-')
        .collect();
    if !account.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err("Account number may only contain letters and digits".into());
    }
    if !(4..=34).contains(&account.len()) {
        return Err("Account number must be between 4 and 34 characters".into());
    }
    Ok(PayoutDetails {
        bank_name: bank_name.trim().to_string(),
        account_holder: account_holder.trim().to_string(),
        account_number: account,
        routing_code: validation::optional(routing_code),
    })
}

#[derive(Clone, Copy)]
pub struct PayoutDetailsFormState {
    pub bank_name: RwSignal<String>,
    pub account_holder: RwSignal<String>,
    pub account_number: RwSignal<String>,
    pub routing_code: RwSignal<String>,
}

impl PayoutDetailsFormState {
    pub fn new() -> Self {
        Self {
            bank_name: create_rw_signal(String::new()),
            account_holder: create_rw_signal(String::new()),
            account_number: create_rw_signal(String::new()),
            routing_code: create_rw_signal(String::new()),
        }
    }

    /// Fills everything except the account number, which is only ever shown masked.
    pub fn load(&self, details: &PayoutDetails) {
        self.bank_name.set(details.bank_name.clone());
        self.account_holder.set(details.account_holder.clone());
        self.account_number.set(String::new());
        self.routing_code
            .set(details.routing_code.clone().unwrap_or_default());
    }

    /// A blank account number keeps the stored one.
    pub fn to_details(&self, stored: Option<&PayoutDetails>) -> Result<PayoutDetails, String> {
        let typed = self.account_number.get_untracked();
        let account = match (typed.trim().is_empty(), stored) {
            (true, Some(stored)) => stored.account_number.clone(),
            _ => typed,
        };
        build_payout_details(
            &self.bank_name.get_untracked(),
            &self.account_holder.get_untracked(),
            &account,
            &self.routing_code.get_untracked(),
        )
    }
}


#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::with_runtime;

    #[test]
    fn blank_account_number_keeps_stored_value() {
        with_runtime(|| {
            let stored = PayoutDetails {
                bank_name: "Old Bank".into(),
                account_holder: "Trail Bikes Co".into(),
                account_number: "9876543210".into(),
                routing_code: Some("021000021".into()),
            };
            let form = PayoutDetailsFormState::new();
            form.load(&stored);
            form.bank_name.set("New Bank".into());

            let details = form.to_details(Some(&stored)).unwrap();
            assert_eq!(details.account_number, "9876543210");
            assert_eq!(details.bank_name, "New Bank");
            assert_eq!(details.routing_code.as_deref(), Some("021000021"));

            assert!(form.to_details(None).is_err());
        });
    }
}
