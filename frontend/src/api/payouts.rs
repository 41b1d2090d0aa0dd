use super::{
    client::ApiClient,
    types::{
        ApiError, Paginated, PayoutDetails, PayoutRecord, PendingPayout, ProcessPayoutRequest,
        ProcessPayoutResponse, SellerPaymentDetail,
    },
};

impl ApiClient {
    pub async fn admin_list_pending_payouts(&self) -> Result<Vec<PendingPayout>, ApiError> {
        self.get("/admin/payouts/pending", &[], "Failed to load pending payouts")
            .await
    }

    pub async fn admin_get_seller_payment(
        &self,
        seller_id: u64,
    ) -> Result<SellerPaymentDetail, ApiError> {
        self.get(
            &format!("/admin/payouts/sellers/{}", seller_id),
            &[],
            "Failed to load seller payment details",
        )
        .await
    }

    pub async fn admin_process_payouts(
        &self,
        seller_ids: Vec<u64>,
    ) -> Result<ProcessPayoutResponse, ApiError> {
        if seller_ids.is_empty() {
            return Err(ApiError::validation("Select at least one seller"));
        }
        self.post(
            "/admin/payouts/process",
            &ProcessPayoutRequest { seller_ids },
            "Failed to process payouts",
        )
        .await
    }

    pub async fn admin_payout_history(
        &self,
        page: u32,
        per_page: u32,
    ) -> Result<Paginated<PayoutRecord>, ApiError> {
        self.get(
            "/admin/payouts/history",
            &[
                ("page", page.max(1).to_string()),
                ("per_page", per_page.to_string()),
            ],
            "Failed to load payout history",
        )
        .await
    }

    pub async fn seller_get_payout_details(&self) -> Result<Option<PayoutDetails>, ApiError> {
        self.get(
            "/seller/payout-details",
            &[],
            "Failed to load payout details",
        )
        .await
    }

    pub async fn seller_update_payout_details(
        &self,
        details: &PayoutDetails,
    ) -> Result<PayoutDetails, ApiError> {
        self.put(
            "/seller/payout-details",
            details,
            "Failed to save payout details",
        )
        .await
    }
}
