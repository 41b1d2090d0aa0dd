use chrono::{DateTime, NaiveDate, Utc};
use leptos::*;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
    #[serde(default)]
    pub remember: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub password_confirmation: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<UserRole>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthResponse {
    #[serde(alias = "access_token")]
    pub token: String,
    pub user: UserProfile,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    User,
    Seller,
    SuperAdmin,
    #[serde(other)]
    Unknown,
}

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::User => "user",
            UserRole::Seller => "seller",
            UserRole::SuperAdmin => "super_admin",
            UserRole::Unknown => "unknown",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            UserRole::User => "Customer",
            UserRole::Seller => "Seller",
            UserRole::SuperAdmin => "Super Admin",
            UserRole::Unknown => "Unknown",
        }
    }

    pub fn home_path(&self) -> &'static str {
        match self {
            UserRole::SuperAdmin => "/admin/dashboard",
            UserRole::Seller => "/seller/dashboard",
            UserRole::User | UserRole::Unknown => "/dashboard",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: u64,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    pub role: UserRole,
    #[serde(default)]
    pub email_verified_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// Accepts both a bare user object and Laravel's `{ "user": {...} }` wrapper.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub(crate) enum UserEnvelope {
    Wrapped { user: UserProfile },
    Bare(UserProfile),
}

impl From<UserEnvelope> for UserProfile {
    fn from(envelope: UserEnvelope) -> Self {
        match envelope {
            UserEnvelope::Wrapped { user } => user,
            UserEnvelope::Bare(user) => user,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdateProfileRequest {
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

impl UpdateProfileRequest {
    pub fn from_profile(user: &UserProfile) -> Self {
        Self {
            name: user.name.clone(),
            email: user.email.clone(),
            phone: user.phone.clone(),
            address: user.address.clone(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChangePasswordRequest {
    pub current_password: String,
    pub new_password: String,
    pub new_password_confirmation: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForgotPasswordRequest {
    pub email: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResetPasswordRequest {
    pub token: String,
    pub email: String,
    pub password: String,
    pub password_confirmation: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OAuthProvider {
    Google,
    Strava,
}

impl OAuthProvider {
    pub fn as_str(&self) -> &'static str {
        match self {
            OAuthProvider::Google => "google",
            OAuthProvider::Strava => "strava",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            OAuthProvider::Google => "Google",
            OAuthProvider::Strava => "Strava",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OAuthCallbackRequest {
    pub code: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

// ---- dashboards ----

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TimeRange {
    #[serde(rename = "7d")]
    Week,
    #[default]
    #[serde(rename = "30d")]
    Month,
    #[serde(rename = "90d")]
    Quarter,
    #[serde(rename = "1y")]
    Year,
}

impl TimeRange {
    pub const ALL: [TimeRange; 4] = [
        TimeRange::Week,
        TimeRange::Month,
        TimeRange::Quarter,
        TimeRange::Year,
    ];

    pub fn as_query(&self) -> &'static str {
        match self {
            TimeRange::Week => "7d",
            TimeRange::Month => "30d",
            TimeRange::Quarter => "90d",
            TimeRange::Year => "1y",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TimeRange::Week => "Last 7 days",
            TimeRange::Month => "Last 30 days",
            TimeRange::Quarter => "Last 90 days",
            TimeRange::Year => "Last 12 months",
        }
    }

    pub fn from_query(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|range| range.as_query() == raw)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartPoint {
    pub label: String,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderSummary {
    pub id: u64,
    pub order_number: String,
    #[serde(default)]
    pub customer_name: Option<String>,
    pub total: f64,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserDashboardSummary {
    pub total_orders: u32,
    pub total_spent: f64,
    pub pending_orders: u32,
    #[serde(default)]
    pub wishlist_count: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SellerDashboardSummary {
    pub total_sales: f64,
    pub total_orders: u32,
    pub total_commission: f64,
    pub pending_payout: f64,
    #[serde(default)]
    pub sales_change_pct: Option<f64>,
    #[serde(default)]
    pub orders_change_pct: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopProduct {
    pub id: u64,
    pub name: String,
    pub units_sold: u32,
    pub revenue: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdminDashboardSummary {
    pub total_revenue: f64,
    pub total_commission: f64,
    pub total_orders: u32,
    pub active_sellers: u32,
    pub total_customers: u32,
    pub pending_payouts: f64,
    #[serde(default)]
    pub revenue_change_pct: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopSeller {
    pub seller_id: u64,
    pub store_name: String,
    pub total_sales: f64,
    pub commission: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: u64,
    pub reference: String,
    #[serde(default)]
    pub seller_name: Option<String>,
    pub amount: f64,
    #[serde(default)]
    pub commission: f64,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

// ---- payouts ----

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PendingPayout {
    pub seller_id: u64,
    pub seller_name: String,
    #[serde(default)]
    pub store_name: Option<String>,
    pub amount: f64,
    pub orders_count: u32,
    #[serde(default)]
    pub period_start: Option<NaiveDate>,
    #[serde(default)]
    pub period_end: Option<NaiveDate>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PayoutDetails {
    pub bank_name: String,
    pub account_holder: String,
    pub account_number: String,
    #[serde(default)]
    pub routing_code: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SellerPaymentDetail {
    pub seller_id: u64,
    pub seller_name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub payout_details: Option<PayoutDetails>,
    pub pending_amount: f64,
    #[serde(default)]
    pub transactions: Vec<Transaction>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessPayoutRequest {
    pub seller_ids: Vec<u64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessPayoutResponse {
    pub processed: u32,
    #[serde(default)]
    pub failed: u32,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayoutRecord {
    pub id: u64,
    pub seller_id: u64,
    pub seller_name: String,
    pub amount: f64,
    pub status: String,
    #[serde(default)]
    pub reference: Option<String>,
    #[serde(default)]
    pub processed_at: Option<DateTime<Utc>>,
}

/// Laravel paginator body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paginated<T> {
    pub data: Vec<T>,
    pub current_page: u32,
    pub last_page: u32,
    pub per_page: u32,
    pub total: u64,
}

impl<T> Paginated<T> {
    pub fn has_next(&self) -> bool {
        self.current_page < self.last_page
    }

    pub fn has_prev(&self) -> bool {
        self.current_page > 1
    }
}

// ---- errors ----

/// Tagged category attached by the HTTP layer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApiErrorKind {
    Network,
    Unauthorized,
    Validation,
    Server,
    Decode,
    #[default]
    Unknown,
}

#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[error("{error}")]
pub struct ApiError {
    pub error: String,
    pub code: String,
    #[serde(default)]
    pub kind: ApiErrorKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

impl From<ApiError> for String {
    fn from(error: ApiError) -> Self {
        error.error
    }
}

impl IntoView for ApiError {
    fn into_view(self) -> View {
        self.error.into_view()
    }
}

impl ApiError {
    fn new(msg: impl Into<String>, code: &str, kind: ApiErrorKind) -> Self {
        Self {
            error: msg.into(),
            code: code.to_string(),
            kind,
            details: None,
        }
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::new(msg, "VALIDATION_ERROR", ApiErrorKind::Validation)
    }

    pub fn unknown(msg: impl Into<String>) -> Self {
        Self::new(msg, "UNKNOWN", ApiErrorKind::Unknown)
    }

    pub fn request_failed(msg: impl Into<String>) -> Self {
        Self::new(msg, "REQUEST_FAILED", ApiErrorKind::Network)
    }

    pub fn decode(msg: impl Into<String>) -> Self {
        Self::new(msg, "DECODE_ERROR", ApiErrorKind::Decode)
    }

    pub fn unauthorized(msg: impl Into<String>) -> Self {
        Self::new(msg, "UNAUTHORIZED", ApiErrorKind::Unauthorized)
    }

    /// Builds an error from a non-success status and the (possibly empty) body.
    pub fn from_status(status: u16, body: Option<BackendErrorBody>, fallback: &str) -> Self {
        let (kind, code) = match status {
            401 | 403 => (ApiErrorKind::Unauthorized, "UNAUTHORIZED"),
            422 | 400 => (ApiErrorKind::Validation, "VALIDATION_ERROR"),
            500..=599 => (ApiErrorKind::Server, "SERVER_ERROR"),
            _ => (ApiErrorKind::Unknown, "UNKNOWN"),
        };
        let body = body.unwrap_or_default();
        let message = body
            .message
            .or(body.error)
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| fallback.to_string());
        Self {
            error: message,
            code: code.to_string(),
            kind,
            details: body.errors,
        }
    }

    /// Flattened field messages from a Laravel `errors` object.
    pub fn field_messages(&self) -> Vec<String> {
        match &self.details {
            Some(Value::Object(map)) => map
                .values()
                .flat_map(|v| match v {
                    Value::Array(items) => items
                        .iter()
                        .filter_map(|i| i.as_str().map(str::to_string))
                        .collect::<Vec<_>>(),
                    Value::String(s) => vec![s.clone()],
                    _ => Vec::new(),
                })
                .collect(),
            Some(Value::Array(items)) => items
                .iter()
                .filter_map(|i| i.as_str().map(str::to_string))
                .collect(),
            _ => Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct BackendErrorBody {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub errors: Option<Value>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    #[wasm_bindgen_test]
    fn serialize_register_request_skips_empty_optionals() {
        let req = RegisterRequest {
            name: "Ada".into(),
            email: "ada@example.com".into(),
            password: "secret123".into(),
            password_confirmation: "secret123".into(),
            phone: None,
            role: Some(UserRole::Seller),
        };
        let v = serde_json::to_value(&req).unwrap();
        assert_eq!(v["role"], serde_json::json!("seller"));
        assert!(v.get("phone").is_none());
    }

    #[wasm_bindgen_test]
    fn deserialize_auth_response_accepts_access_token_alias() {
        let raw = r#"{
            "access_token": "tok",
            "user": { "id": 7, "name": "Bob", "email": "bob@example.com", "role": "super_admin" }
        }"#;
        let resp: AuthResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(resp.token, "tok");
        assert_eq!(resp.user.role, UserRole::SuperAdmin);
        assert!(resp.user.phone.is_none());
    }
}
