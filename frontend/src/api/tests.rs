#![cfg(not(coverage))]

use super::*;
use crate::test_support::helpers::user_json;
use crate::utils::storage::{MemoryTokenStore, TokenStore};
use httpmock::prelude::*;
use serde_json::json;
use std::cell::Cell;
use std::rc::Rc;

fn client_with_token(server: &MockServer, token: Option<&str>) -> (ApiClient, MemoryTokenStore) {
    let store = match token {
        Some(token) => MemoryTokenStore::with_token(token),
        None => MemoryTokenStore::default(),
    };
    let client =
        ApiClient::new_with_base_url(server.url("/api")).with_token_store(Rc::new(store.clone()));
    (client, store)
}

#[tokio::test]
async fn login_persists_token_from_response() {
    let server = MockServer::start_async().await;
    let login = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/api/auth/login")
                .json_body(json!({
                    "email": "alice@example.com",
                    "password": "secret123",
                    "remember": false
                }));
            then.status(200).json_body(json!({
                "token": "tok-1",
                "user": user_json(1, "user")
            }));
        })
        .await;

    let (client, store) = client_with_token(&server, None);
    let response = client
        .login(&LoginRequest {
            email: "alice@example.com".into(),
            password: "secret123".into(),
            remember: false,
        })
        .await
        .unwrap();

    login.assert_async().await;
    assert_eq!(response.user.id, 1);
    assert_eq!(store.get().as_deref(), Some("tok-1"));
}

#[tokio::test]
async fn login_failure_surfaces_backend_message_and_keeps_store_empty() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/api/auth/login");
            then.status(422).json_body(json!({
                "message": "These credentials do not match our records.",
                "errors": { "email": ["These credentials do not match our records."] }
            }));
        })
        .await;

    let (client, store) = client_with_token(&server, None);
    let err = client
        .login(&LoginRequest {
            email: "alice@example.com".into(),
            password: "wrong".into(),
            remember: false,
        })
        .await
        .unwrap_err();

    assert_eq!(err.error, "These credentials do not match our records.");
    assert_eq!(err.kind, ApiErrorKind::Validation);
    assert!(store.get().is_none());
}

#[tokio::test]
async fn authenticated_calls_send_bearer_token() {
    let server = MockServer::start_async().await;
    let me = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/api/auth/me")
                .header("Authorization", "Bearer tok-9");
            then.status(200).json_body(json!({ "user": user_json(9, "seller") }));
        })
        .await;

    let (client, _store) = client_with_token(&server, Some("tok-9"));
    let user = client.get_me().await.unwrap();

    me.assert_async().await;
    assert_eq!(user.role, UserRole::Seller);
}

#[tokio::test]
async fn missing_token_fails_without_network_call() {
    let server = MockServer::start_async().await;
    let me = server
        .mock_async(|when, then| {
            when.method(GET).path("/api/auth/me");
            then.status(200).json_body(user_json(1, "user"));
        })
        .await;

    let (client, _store) = client_with_token(&server, None);
    let err = client.get_me().await.unwrap_err();

    assert_eq!(err.kind, ApiErrorKind::Unauthorized);
    assert_eq!(me.hits_async().await, 0);
}

#[tokio::test]
async fn unauthorized_response_clears_token_and_notifies_handler() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/api/seller/dashboard/recent-orders");
            then.status(401).json_body(json!({ "message": "Unauthenticated." }));
        })
        .await;

    let notified = Rc::new(Cell::new(0));
    let counter = notified.clone();
    let (client, store) = client_with_token(&server, Some("stale"));
    let client = client.on_unauthorized(move || counter.set(counter.get() + 1));

    let err = client.get_seller_recent_orders().await.unwrap_err();

    assert_eq!(err.error, "Unauthenticated.");
    assert_eq!(err.kind, ApiErrorKind::Unauthorized);
    assert!(store.get().is_none());
    assert_eq!(notified.get(), 1);
}

#[tokio::test]
async fn logout_accepts_empty_no_content_response() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/api/auth/logout");
            then.status(204);
        })
        .await;

    let (client, _store) = client_with_token(&server, Some("tok"));
    client.logout().await.unwrap();
}

#[tokio::test]
async fn unreachable_backend_maps_to_network_kind() {
    let client = ApiClient::new_with_base_url("http://127.0.0.1:9/api")
        .with_token_store(Rc::new(MemoryTokenStore::with_token("tok")));
    let err = client.get_me().await.unwrap_err();
    assert_eq!(err.kind, ApiErrorKind::Network);
    assert_eq!(err.code, "REQUEST_FAILED");
}

#[tokio::test]
async fn malformed_success_body_is_a_decode_error() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/api/user/orders/recent");
            then.status(200).json_body(json!({ "orders": "nope" }));
        })
        .await;

    let (client, _store) = client_with_token(&server, Some("tok"));
    let err = client.get_user_recent_orders().await.unwrap_err();
    assert_eq!(err.kind, ApiErrorKind::Decode);
}

#[tokio::test]
async fn dashboard_calls_forward_time_range() {
    let server = MockServer::start_async().await;
    let summary = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/api/admin/dashboard/summary")
                .query_param("range", "90d");
            then.status(200).json_body(json!({
                "total_revenue": 125000.0,
                "total_commission": 12500.0,
                "total_orders": 310,
                "active_sellers": 24,
                "total_customers": 980,
                "pending_payouts": 8400.5
            }));
        })
        .await;

    let (client, _store) = client_with_token(&server, Some("tok"));
    let result = client
        .get_admin_dashboard_summary(TimeRange::Quarter)
        .await
        .unwrap();

    summary.assert_async().await;
    assert_eq!(result.active_sellers, 24);
    assert!(result.revenue_change_pct.is_none());
}

#[tokio::test]
async fn process_payouts_requires_selection() {
    let server = MockServer::start_async().await;
    let process = server
        .mock_async(|when, then| {
            when.method(POST).path("/api/admin/payouts/process");
            then.status(200)
                .json_body(json!({ "processed": 0, "message": "ok" }));
        })
        .await;

    let (client, _store) = client_with_token(&server, Some("tok"));
    let err = client.admin_process_payouts(Vec::new()).await.unwrap_err();

    assert_eq!(err.kind, ApiErrorKind::Validation);
    assert_eq!(process.hits_async().await, 0);
}

#[tokio::test]
async fn payout_history_requests_page_and_decodes_paginator() {
    let server = MockServer::start_async().await;
    let history = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/api/admin/payouts/history")
                .query_param("page", "2")
                .query_param("per_page", "10");
            then.status(200).json_body(json!({
                "data": [{
                    "id": 11,
                    "seller_id": 3,
                    "seller_name": "Trail Bikes Co",
                    "amount": 1520.75,
                    "status": "completed",
                    "reference": "PO-0011",
                    "processed_at": "2025-02-01T08:30:00Z"
                }],
                "current_page": 2,
                "last_page": 2,
                "per_page": 10,
                "total": 11
            }));
        })
        .await;

    let (client, _store) = client_with_token(&server, Some("tok"));
    let page = client.admin_payout_history(2, 10).await.unwrap();

    history.assert_async().await;
    assert_eq!(page.data.len(), 1);
    assert!(!page.has_next());
    assert!(page.has_prev());
}

#[tokio::test]
async fn seller_without_payout_details_decodes_none() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/api/seller/payout-details");
            then.status(200).body("null");
        })
        .await;

    let (client, _store) = client_with_token(&server, Some("tok"));
    let details = client.seller_get_payout_details().await.unwrap();
    assert!(details.is_none());
}
