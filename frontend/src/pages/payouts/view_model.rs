use super::{
    repository::PayoutsRepository,
    utils::{PayoutDetailsFormState, PayoutSelection, HISTORY_PER_PAGE},
};
use crate::api::{
    ApiClient, ApiError, Paginated, PayoutDetails, PayoutRecord, PendingPayout,
    ProcessPayoutResponse, SellerPaymentDetail,
};
use leptos::*;
use std::rc::Rc;

fn use_payouts_repository() -> PayoutsRepository {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    PayoutsRepository::new_with_client(Rc::new(api))
}

pub fn process_message(resp: &ProcessPayoutResponse) -> String {
    if resp.failed > 0 {
        format!("{} ({} failed)", resp.message, resp.failed)
    } else {
        resp.message.clone()
    }
}

#[derive(Clone, Copy)]
pub struct AdminPayoutsViewModel {
    pub reload: RwSignal<u32>,
    pub pending_resource: Resource<u32, Result<Vec<PendingPayout>, ApiError>>,
    pub selection: RwSignal<PayoutSelection>,
    pub detail_seller: RwSignal<Option<u64>>,
    pub detail_resource: Resource<Option<u64>, Option<Result<SellerPaymentDetail, ApiError>>>,
    pub confirm_open: RwSignal<bool>,
    pub process_action: Action<Vec<u64>, Result<ProcessPayoutResponse, ApiError>>,
    pub message: RwSignal<Option<String>>,
    pub error: RwSignal<Option<ApiError>>,
    pub history_page: RwSignal<u32>,
    pub history_resource: Resource<(u32, u32), Result<Paginated<PayoutRecord>, ApiError>>,
}

impl AdminPayoutsViewModel {
    pub fn pending(&self) -> Vec<PendingPayout> {
        self.pending_resource
            .get()
            .and_then(Result::ok)
            .unwrap_or_default()
    }

    pub fn selected_total(&self) -> f64 {
        let rows = self.pending();
        self.selection.with(|s| s.total(&rows))
    }

    pub fn toggle(&self, seller_id: u64) {
        self.selection.update(|s| s.toggle(seller_id));
    }

    pub fn toggle_all(&self) {
        let rows = self.pending();
        self.selection.update(|s| s.toggle_all(&rows));
    }

    pub fn show_detail(&self, seller_id: u64) {
        let current = self.detail_seller.get_untracked();
        self.detail_seller
            .set(if current == Some(seller_id) { None } else { Some(seller_id) });
    }

    /// Opens the confirmation step; nothing is sent until `confirm_process`.
    pub fn request_process(&self) {
        if self.selection.with_untracked(PayoutSelection::is_empty) {
            self.error
                .set(Some(ApiError::validation("Select at least one seller")));
            return;
        }
        self.error.set(None);
        self.confirm_open.set(true);
    }

    pub fn confirm_process(&self) {
        self.confirm_open.set(false);
        if self.process_action.pending().get_untracked() {
            return;
        }
        let ids = self.selection.with_untracked(PayoutSelection::ids);
        log::info!("processing payouts for {} sellers", ids.len());
        self.process_action.dispatch(ids);
    }

    pub fn go_to_page(&self, page: u32) {
        self.history_page.set(page.max(1));
    }
}

pub fn use_admin_payouts_view_model() -> AdminPayoutsViewModel {
    let repo = use_payouts_repository();
    let reload = create_rw_signal(0u32);
    let history_page = create_rw_signal(1u32);

    let repo_pending = repo.clone();
    let pending_resource = create_resource(
        move || reload.get(),
        move |_| {
            let repo = repo_pending.clone();
            async move { repo.pending().await }
        },
    );

    let repo_detail = repo.clone();
    let detail_seller = create_rw_signal(None::<u64>);
    let detail_resource = create_resource(
        move || detail_seller.get(),
        move |seller| {
            let repo = repo_detail.clone();
            async move {
                match seller {
                    Some(id) => Some(repo.seller_detail(id).await),
                    None => None,
                }
            }
        },
    );

    let repo_history = repo.clone();
    let history_resource = create_resource(
        move || (history_page.get(), reload.get()),
        move |(page, _)| {
            let repo = repo_history.clone();
            async move { repo.history(page, HISTORY_PER_PAGE).await }
        },
    );

    let repo_process = repo;
    let process_action = create_action(move |ids: &Vec<u64>| {
        let repo = repo_process.clone();
        let ids = ids.clone();
        async move { repo.process(ids).await }
    });

    let selection = create_rw_signal(PayoutSelection::default());
    let message = create_rw_signal(None::<String>);
    let error = create_rw_signal(None::<ApiError>);

    create_effect(move |_| {
        if let Some(Ok(rows)) = pending_resource.get() {
            selection.update(|s| s.retain_pending(&rows));
        }
    });

    create_effect(move |_| {
        if let Some(result) = process_action.value().get() {
            match result {
                Ok(resp) => {
                    message.set(Some(process_message(&resp)));
                    error.set(None);
                    selection.update(PayoutSelection::clear);
                    detail_seller.set(None);
                    reload.update(|n| *n = n.wrapping_add(1));
                }
                Err(err) => {
                    log::warn!("payout batch failed: {}", err);
                    error.set(Some(err));
                }
            }
        }
    });

    AdminPayoutsViewModel {
        reload,
        pending_resource,
        selection,
        detail_seller,
        detail_resource,
        confirm_open: create_rw_signal(false),
        process_action,
        message,
        error,
        history_page,
        history_resource,
    }
}

#[derive(Clone, Copy)]
pub struct SellerPayoutsViewModel {
    pub form: PayoutDetailsFormState,
    pub stored: RwSignal<Option<PayoutDetails>>,
    pub details_resource: Resource<(), Result<Option<PayoutDetails>, ApiError>>,
    pub save_action: Action<PayoutDetails, Result<PayoutDetails, ApiError>>,
    pub error: RwSignal<Option<ApiError>>,
    pub success: RwSignal<Option<String>>,
}

impl SellerPayoutsViewModel {
    pub fn save(&self) -> bool {
        if self.save_action.pending().get_untracked() {
            return false;
        }
        self.success.set(None);
        let stored = self.stored.get_untracked();
        match self.form.to_details(stored.as_ref()) {
            Ok(details) => {
                self.error.set(None);
                self.save_action.dispatch(details);
                true
            }
            Err(msg) => {
                self.error.set(Some(ApiError::validation(msg)));
                false
            }
        }
    }
}

pub fn use_seller_payouts_view_model() -> SellerPayoutsViewModel {
    let repo = use_payouts_repository();
    let form = PayoutDetailsFormState::new();
    let stored = create_rw_signal(None::<PayoutDetails>);
    let error = create_rw_signal(None::<ApiError>);
    let success = create_rw_signal(None::<String>);

    let repo_load = repo.clone();
    let details_resource = create_resource(
        || (),
        move |_| {
            let repo = repo_load.clone();
            async move { repo.my_details().await }
        },
    );

    let save_action = create_action(move |details: &PayoutDetails| {
        let repo = repo.clone();
        let details = details.clone();
        async move { repo.save_my_details(details).await }
    });

    create_effect(move |_| match details_resource.get() {
        Some(Ok(Some(details))) => {
            form.load(&details);
            stored.set(Some(details));
        }
        Some(Err(err)) => error.set(Some(err)),
        _ => {}
    });

    create_effect(move |_| {
        if let Some(result) = save_action.value().get() {
            match result {
                Ok(details) => {
                    form.load(&details);
                    stored.set(Some(details));
                    success.set(Some("Payout details saved".to_string()));
                }
                Err(err) => error.set(Some(err)),
            }
        }
    });

    SellerPayoutsViewModel {
        form,
        stored,
        details_resource,
        save_action,
        error,
        success,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn process_message_mentions_failures() {
        let ok = ProcessPayoutResponse {
            processed: 3,
            failed: 0,
            message: "3 payouts processed".into(),
        };
        assert_eq!(process_message(&ok), "3 payouts processed");

        let partial = ProcessPayoutResponse {
            processed: 2,
            failed: 1,
            message: "2 payouts processed".into(),
        };
        assert_eq!(process_message(&partial), "2 payouts processed (1 failed)");
    }
}
