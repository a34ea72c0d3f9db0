use std::time::{Duration, Instant};

use payloads::UserId;
use reqwest::StatusCode;
use test_helpers::{assert_status_code, spawn_app, spawn_app_with_delay};

#[tokio::test]
async fn list_users_returns_fixture_in_id_order() -> anyhow::Result<()> {
    let app = spawn_app().await;

    let users = app.client.get_users().await?;

    assert_eq!(users.len(), 5);
    let ids: Vec<_> = users.iter().map(|u| u.id).collect();
    let mut sorted = ids.clone();
    sorted.sort();
    assert_eq!(ids, sorted);
    assert_eq!(users[0].username, "alice");

    Ok(())
}

#[tokio::test]
async fn get_user_by_id() -> anyhow::Result<()> {
    let app = spawn_app().await;

    let user = app.client.get_user(&UserId(1)).await?;

    assert_eq!(user.id, UserId(1));
    assert_eq!(user.username, "alice");
    assert_eq!(user.email, "alice@wonderland.example");

    Ok(())
}

#[tokio::test]
async fn get_user_matches_list_entry() -> anyhow::Result<()> {
    let app = spawn_app().await;

    let users = app.client.get_users().await?;
    for listed in &users {
        let fetched = app.client.get_user(&listed.id).await?;
        assert_eq!(&fetched, listed);
    }

    Ok(())
}

#[tokio::test]
async fn unknown_user_is_not_found() -> anyhow::Result<()> {
    let app = spawn_app().await;

    let result = app.client.get_user(&UserId(9999)).await;

    assert_status_code(result, StatusCode::NOT_FOUND);

    Ok(())
}

#[tokio::test]
async fn not_found_body_names_the_user() -> anyhow::Result<()> {
    let app = spawn_app().await;

    match app.client.get_user(&UserId(42)).await {
        Err(payloads::ClientError::APIError(_, body)) => {
            assert!(body.contains("user 42"), "unexpected body: {body}");
        }
        other => panic!("Expected APIError, got {other:?}"),
    }

    Ok(())
}

#[tokio::test]
async fn network_failure_is_reported_as_network_error() -> anyhow::Result<()> {
    // reserve a port, then release it so nothing is listening there
    let port = std::net::TcpListener::bind("127.0.0.1:0")?
        .local_addr()?
        .port();
    let client = payloads::APIClient {
        address: format!("http://127.0.0.1:{port}"),
        inner_client: reqwest::Client::new(),
    };

    let result = client.get_users().await;

    assert!(matches!(result, Err(payloads::ClientError::Network(_))));

    Ok(())
}

#[tokio::test]
async fn response_delay_is_applied() -> anyhow::Result<()> {
    let app = spawn_app_with_delay(Duration::from_millis(200)).await;

    let started = Instant::now();
    app.client.get_users().await?;

    assert!(started.elapsed() >= Duration::from_millis(200));

    Ok(())
}
