use crate::api::{
    AdminDashboardSummary, ApiClient, ApiError, ChartPoint, OrderSummary, SellerDashboardSummary,
    TimeRange, TopProduct, TopSeller, Transaction, UserDashboardSummary,
};
use std::rc::Rc;

#[derive(Debug, Clone, PartialEq)]
pub struct UserDashboardData {
    pub summary: UserDashboardSummary,
    pub recent_orders: Vec<OrderSummary>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SellerDashboardData {
    pub summary: SellerDashboardSummary,
    pub sales: Vec<ChartPoint>,
    pub top_products: Vec<TopProduct>,
    pub recent_orders: Vec<OrderSummary>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AdminDashboardData {
    pub summary: AdminDashboardSummary,
    pub revenue: Vec<ChartPoint>,
    pub top_sellers: Vec<TopSeller>,
    pub transactions: Vec<Transaction>,
}

/// Each loader issues its requests concurrently and fails as a whole when any
/// one of them fails.
#[derive(Clone)]
pub struct DashboardRepository {
    client: Rc<ApiClient>,
}

impl DashboardRepository {
    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn load_user(&self, range: TimeRange) -> Result<UserDashboardData, ApiError> {
        let (summary, recent_orders) = futures::try_join!(
            self.client.get_user_dashboard_summary(range),
            self.client.get_user_recent_orders(),
        )?;
        Ok(UserDashboardData {
            summary,
            recent_orders,
        })
    }

    pub async fn load_seller(&self, range: TimeRange) -> Result<SellerDashboardData, ApiError> {
        let (summary, sales, top_products, recent_orders) = futures::try_join!(
            self.client.get_seller_dashboard_summary(range),
            self.client.get_seller_sales(range),
            self.client.get_seller_top_products(range),
            self.client.get_seller_recent_orders(),
        )?;
        Ok(SellerDashboardData {
            summary,
            sales,
            top_products,
            recent_orders,
        })
    }

    pub async fn load_admin(&self, range: TimeRange) -> Result<AdminDashboardData, ApiError> {
        let (summary, revenue, top_sellers, transactions) = futures::try_join!(
            self.client.get_admin_dashboard_summary(range),
            self.client.get_admin_revenue(range),
            self.client.get_admin_top_sellers(range),
            self.client.get_admin_recent_transactions(),
        )?;
        Ok(AdminDashboardData {
            summary,
            revenue,
            top_sellers,
            transactions,
        })
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::utils::storage::MemoryTokenStore;
    use httpmock::prelude::*;
    use serde_json::json;

    fn repository(server: &MockServer) -> DashboardRepository {
        let client = ApiClient::new_with_base_url(server.url("/api"))
            .with_token_store(Rc::new(MemoryTokenStore::with_token("tok")));
        DashboardRepository::new_with_client(Rc::new(client))
    }

    fn order(id: u64) -> serde_json::Value {
        json!({
            "id": id,
            "order_number": format!("VM-{:04}", id),
            "customer_name": "Alice Example",
            "total": 1299.0,
            "status": "shipped",
            "created_at": "2025-03-01T09:00:00Z"
        })
    }

    #[tokio::test]
    async fn seller_dashboard_joins_all_four_requests() {
        let server = MockServer::start_async().await;
        let summary = server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/api/seller/dashboard/summary")
                    .query_param("range", "7d");
                then.status(200).json_body(json!({
                    "total_sales": 5400.0,
                    "total_orders": 6,
                    "total_commission": 540.0,
                    "pending_payout": 4860.0,
                    "sales_change_pct": 12.5
                }));
            })
            .await;
        let sales = server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/api/seller/dashboard/sales")
                    .query_param("range", "7d");
                then.status(200).json_body(json!([
                    { "label": "Mon", "value": 1200.0 },
                    { "label": "Tue", "value": 4200.0 }
                ]));
            })
            .await;
        let top = server
            .mock_async(|when, then| {
                when.method(GET).path("/api/seller/dashboard/top-products");
                then.status(200).json_body(json!([
                    { "id": 4, "name": "Gravel King 2", "units_sold": 3, "revenue": 3900.0 }
                ]));
            })
            .await;
        let recent = server
            .mock_async(|when, then| {
                when.method(GET).path("/api/seller/dashboard/recent-orders");
                then.status(200).json_body(json!([order(1), order(2)]));
            })
            .await;

        let data = repository(&server)
            .load_seller(TimeRange::Week)
            .await
            .unwrap();

        summary.assert_async().await;
        sales.assert_async().await;
        top.assert_async().await;
        recent.assert_async().await;
        assert_eq!(data.sales.len(), 2);
        assert_eq!(data.top_products[0].name, "Gravel King 2");
        assert_eq!(data.recent_orders.len(), 2);
        assert_eq!(data.summary.sales_change_pct, Some(12.5));
    }

    #[tokio::test]
    async fn admin_dashboard_fails_whole_when_one_request_fails() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/api/admin/dashboard/summary");
                then.status(200).json_body(json!({
                    "total_revenue": 1.0,
                    "total_commission": 0.1,
                    "total_orders": 1,
                    "active_sellers": 1,
                    "total_customers": 1,
                    "pending_payouts": 0.0
                }));
            })
            .await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/api/admin/dashboard/revenue");
                then.status(500).json_body(json!({ "message": "Server Error" }));
            })
            .await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/api/admin/dashboard/top-sellers");
                then.status(200).json_body(json!([]));
            })
            .await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/api/admin/dashboard/recent-transactions");
                then.status(200).json_body(json!([]));
            })
            .await;

        let err = repository(&server)
            .load_admin(TimeRange::Month)
            .await
            .unwrap_err();

        assert_eq!(err.error, "Server Error");
        assert_eq!(err.kind, crate::api::ApiErrorKind::Server);
    }

    #[tokio::test]
    async fn user_dashboard_loads_summary_and_orders() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/api/user/dashboard/summary")
                    .query_param("range", "1y");
                then.status(200).json_body(json!({
                    "total_orders": 3,
                    "total_spent": 3897.0,
                    "pending_orders": 1
                }));
            })
            .await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/api/user/orders/recent");
                then.status(200).json_body(json!([order(9)]));
            })
            .await;

        let data = repository(&server)
            .load_user(TimeRange::Year)
            .await
            .unwrap();

        assert_eq!(data.summary.total_orders, 3);
        assert_eq!(data.summary.wishlist_count, 0);
        assert_eq!(data.recent_orders[0].order_number, "VM-0009");
    }
}
