use crate::api::{
    ApiClient, ApiError, Paginated, PayoutDetails, PayoutRecord, PendingPayout,
    ProcessPayoutResponse, SellerPaymentDetail,
};
use std::rc::Rc;

#[derive(Clone)]
pub struct PayoutsRepository {
    client: Rc<ApiClient>,
}

impl PayoutsRepository {
    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn pending(&self) -> Result<Vec<PendingPayout>, ApiError> {
        self.client.admin_list_pending_payouts().await
    }

    pub async fn seller_detail(&self, seller_id: u64) -> Result<SellerPaymentDetail, ApiError> {
        self.client.admin_get_seller_payment(seller_id).await
    }

    pub async fn process(&self, seller_ids: Vec<u64>) -> Result<ProcessPayoutResponse, ApiError> {
        self.client.admin_process_payouts(seller_ids).await
    }

    pub async fn history(
        &self,
        page: u32,
        per_page: u32,
    ) -> Result<Paginated<PayoutRecord>, ApiError> {
        self.client.admin_payout_history(page, per_page).await
    }

    pub async fn my_details(&self) -> Result<Option<PayoutDetails>, ApiError> {
        self.client.seller_get_payout_details().await
    }

    pub async fn save_my_details(&self, details: PayoutDetails) -> Result<PayoutDetails, ApiError> {
        self.client.seller_update_payout_details(&details).await
    }
}
