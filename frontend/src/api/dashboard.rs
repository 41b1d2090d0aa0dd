use super::{
    client::ApiClient,
    types::{
        AdminDashboardSummary, ApiError, ChartPoint, OrderSummary, SellerDashboardSummary,
        TimeRange, TopProduct, TopSeller, Transaction, UserDashboardSummary,
    },
};

fn range_query(range: TimeRange) -> [(&'static str, String); 1] {
    [("range", range.as_query().to_string())]
}

impl ApiClient {
    pub async fn get_user_dashboard_summary(
        &self,
        range: TimeRange,
    ) -> Result<UserDashboardSummary, ApiError> {
        self.get(
            "/user/dashboard/summary",
            &range_query(range),
            "Failed to load dashboard summary",
        )
        .await
    }

    pub async fn get_user_recent_orders(&self) -> Result<Vec<OrderSummary>, ApiError> {
        self.get("/user/orders/recent", &[], "Failed to load recent orders")
            .await
    }

    pub async fn get_seller_dashboard_summary(
        &self,
        range: TimeRange,
    ) -> Result<SellerDashboardSummary, ApiError> {
        self.get(
            "/seller/dashboard/summary",
            &range_query(range),
            "Failed to load sales summary",
        )
        .await
    }

    pub async fn get_seller_sales(&self, range: TimeRange) -> Result<Vec<ChartPoint>, ApiError> {
        self.get(
            "/seller/dashboard/sales",
            &range_query(range),
            "Failed to load sales chart",
        )
        .await
    }

    pub async fn get_seller_top_products(
        &self,
        range: TimeRange,
    ) -> Result<Vec<TopProduct>, ApiError> {
        self.get(
            "/seller/dashboard/top-products",
            &range_query(range),
            "Failed to load top products",
        )
        .await
    }

    pub async fn get_seller_recent_orders(&self) -> Result<Vec<OrderSummary>, ApiError> {
        self.get(
            "/seller/dashboard/recent-orders",
            &[],
            "Failed to load recent orders",
        )
        .await
    }

    pub async fn get_admin_dashboard_summary(
        &self,
        range: TimeRange,
    ) -> Result<AdminDashboardSummary, ApiError> {
        self.get(
            "/admin/dashboard/summary",
            &range_query(range),
            "Failed to load marketplace summary",
        )
        .await
    }

    pub async fn get_admin_revenue(&self, range: TimeRange) -> Result<Vec<ChartPoint>, ApiError> {
        self.get(
            "/admin/dashboard/revenue",
            &range_query(range),
            "Failed to load revenue chart",
        )
        .await
    }

    pub async fn get_admin_top_sellers(
        &self,
        range: TimeRange,
    ) -> Result<Vec<TopSeller>, ApiError> {
        self.get(
            "/admin/dashboard/top-sellers",
            &range_query(range),
            "Failed to load top sellers",
        )
        .await
    }

    pub async fn get_admin_recent_transactions(&self) -> Result<Vec<Transaction>, ApiError> {
        self.get(
            "/admin/dashboard/recent-transactions",
            &[],
            "Failed to load transactions",
        )
        .await
    }
}
