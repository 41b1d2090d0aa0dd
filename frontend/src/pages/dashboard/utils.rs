use super::repository::{AdminDashboardData, SellerDashboardData, UserDashboardData};
use crate::{
    api::{OrderSummary, TimeRange, Transaction, UserRole},
    components::charts::{ChartSeries, StatCard},
    utils::{
        format::{format_change_pct, format_count, format_currency},
        time::format_date,
    },
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DashboardKind {
    Customer,
    Seller,
    Admin,
}

impl DashboardKind {
    pub fn for_role(role: UserRole) -> Self {
        match role {
            UserRole::SuperAdmin => DashboardKind::Admin,
            UserRole::Seller => DashboardKind::Seller,
            UserRole::User | UserRole::Unknown => DashboardKind::Customer,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            DashboardKind::Customer => "My dashboard",
            DashboardKind::Seller => "Seller dashboard",
            DashboardKind::Admin => "Marketplace overview",
        }
    }

    pub fn chart_title(&self) -> &'static str {
        match self {
            DashboardKind::Customer => "Recent order totals",
            DashboardKind::Seller => "Sales",
            DashboardKind::Admin => "Revenue",
        }
    }

    pub fn ranking_title(&self) -> Option<&'static str> {
        match self {
            DashboardKind::Customer => None,
            DashboardKind::Seller => Some("Top products"),
            DashboardKind::Admin => Some("Top sellers"),
        }
    }

    pub fn activity_title(&self) -> &'static str {
        match self {
            DashboardKind::Customer | DashboardKind::Seller => "Recent orders",
            DashboardKind::Admin => "Recent transactions",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RankingRow {
    pub name: String,
    pub primary: String,
    pub secondary: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ActivityRow {
    pub reference: String,
    pub party: String,
    pub amount: String,
    pub status: String,
    pub date: String,
}

impl From<&OrderSummary> for ActivityRow {
    fn from(order: &OrderSummary) -> Self {
        Self {
            reference: order.order_number.clone(),
            party: order.customer_name.clone().unwrap_or_default(),
            amount: format_currency(order.total),
            status: order.status.clone(),
            date: format_date(&order.created_at),
        }
    }
}

impl From<&Transaction> for ActivityRow {
    fn from(tx: &Transaction) -> Self {
        Self {
            reference: tx.reference.clone(),
            party: tx.seller_name.clone().unwrap_or_default(),
            amount: format_currency(tx.amount),
            status: tx.status.clone(),
            date: format_date(&tx.created_at),
        }
    }
}

/// Everything a dashboard panel renders, independent of role.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardView {
    pub cards: Vec<StatCard>,
    pub chart: ChartSeries,
    pub ranking: Vec<RankingRow>,
    pub activity: Vec<ActivityRow>,
}

impl DashboardView {
    /// Zeroed cards shown until the first load resolves.
    pub fn placeholder(kind: DashboardKind) -> Self {
        let money = format_currency(0.0);
        let cards = match kind {
            DashboardKind::Customer => vec![
                StatCard::new("Orders", "0"),
                StatCard::new("Total spent", money.clone()),
                StatCard::new("Pending orders", "0"),
                StatCard::new("Wishlist", "0"),
            ],
            DashboardKind::Seller => vec![
                StatCard::new("Sales", money.clone()),
                StatCard::new("Orders", "0"),
                StatCard::new("Commission", money.clone()),
                StatCard::new("Pending payout", money),
            ],
            DashboardKind::Admin => vec![
                StatCard::new("Revenue", money.clone()),
                StatCard::new("Commission", money.clone()),
                StatCard::new("Orders", "0"),
                StatCard::new("Active sellers", "0"),
                StatCard::new("Customers", "0"),
                StatCard::new("Pending payouts", money),
            ],
        };
        Self {
            cards,
            chart: ChartSeries::default(),
            ranking: Vec::new(),
            activity: Vec::new(),
        }
    }
}

impl From<&UserDashboardData> for DashboardView {
    fn from(data: &UserDashboardData) -> Self {
        let s = &data.summary;
        Self {
            cards: vec![
                StatCard::new("Orders", format_count(s.total_orders)),
                StatCard::new("Total spent", format_currency(s.total_spent)),
                StatCard::new("Pending orders", format_count(s.pending_orders)),
                StatCard::new("Wishlist", format_count(s.wishlist_count)),
            ],
            chart: data
                .recent_orders
                .iter()
                .rev()
                .map(|o| (o.order_number.clone(), o.total))
                .collect(),
            ranking: Vec::new(),
            activity: data.recent_orders.iter().map(ActivityRow::from).collect(),
        }
    }
}

impl From<&SellerDashboardData> for DashboardView {
    fn from(data: &SellerDashboardData) -> Self {
        let s = &data.summary;
        Self {
            cards: vec![
                StatCard::new("Sales", format_currency(s.total_sales))
                    .with_change(format_change_pct(s.sales_change_pct)),
                StatCard::new("Orders", format_count(s.total_orders))
                    .with_change(format_change_pct(s.orders_change_pct)),
                StatCard::new("Commission", format_currency(s.total_commission)),
                StatCard::new("Pending payout", format_currency(s.pending_payout)),
            ],
            chart: ChartSeries::from_points(&data.sales),
            ranking: data
                .top_products
                .iter()
                .map(|p| RankingRow {
                    name: p.name.clone(),
                    primary: format_currency(p.revenue),
                    secondary: format!("{} sold", format_count(p.units_sold)),
                })
                .collect(),
            activity: data.recent_orders.iter().map(ActivityRow::from).collect(),
        }
    }
}

impl From<&AdminDashboardData> for DashboardView {
    fn from(data: &AdminDashboardData) -> Self {
        let s = &data.summary;
        Self {
            cards: vec![
                StatCard::new("Revenue", format_currency(s.total_revenue))
                    .with_change(format_change_pct(s.revenue_change_pct)),
                StatCard::new("Commission", format_currency(s.total_commission)),
                StatCard::new("Orders", format_count(s.total_orders)),
                StatCard::new("Active sellers", format_count(s.active_sellers)),
                StatCard::new("Customers", format_count(s.total_customers)),
                StatCard::new("Pending payouts", format_currency(s.pending_payouts)),
            ],
            chart: ChartSeries::from_points(&data.revenue),
            ranking: data
                .top_sellers
                .iter()
                .map(|seller| RankingRow {
                    name: seller.store_name.clone(),
                    primary: format_currency(seller.total_sales),
                    secondary: format!("{} commission", format_currency(seller.commission)),
                })
                .collect(),
            activity: data.transactions.iter().map(ActivityRow::from).collect(),
        }
    }
}

pub fn initial_range(query: Option<&str>) -> TimeRange {
    query.and_then(TimeRange::from_query).unwrap_or_default()
}
