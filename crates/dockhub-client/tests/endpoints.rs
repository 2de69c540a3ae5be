//! Integration tests for the resource methods.

mod common;

use serde_json::json;

use common::harness;
use dockhub_client::{CacheConfig, Description, HubError, Method, NewRepository, Page, RepoRef};

const V2: &str = "https://hub.docker.com/v2";

#[tokio::test]
async fn test_login_stores_token() {
    let h = harness(CacheConfig::default());
    h.transport.reply(json!({"token": "jwt-token"}));

    let info = h.client.login("alice", "secret").await.unwrap();

    assert_eq!(info["token"], "jwt-token");
    assert_eq!(h.client.credential().as_deref(), Some("jwt-token"));

    let request = h.transport.last();
    assert_eq!(request.method, Method::Post);
    assert_eq!(request.url, format!("{V2}/users/login/"));
    assert_eq!(
        request.body,
        Some(json!({"username": "alice", "password": "secret"}))
    );
}

#[tokio::test]
async fn test_login_requires_both_arguments() {
    let h = harness(CacheConfig::default());

    let err = h.client.login("alice", "").await.unwrap_err();

    assert!(matches!(err, HubError::InvalidArgument { .. }));
    assert_eq!(h.transport.calls(), 0);
}

#[tokio::test]
async fn test_login_without_token_fails() {
    let h = harness(CacheConfig::default());
    h.transport.reply(json!({"user": "alice"}));

    let err = h.client.login("alice", "secret").await.unwrap_err();

    assert!(matches!(err, HubError::Authentication { .. }));
    assert!(h.client.credential().is_none());
}

#[tokio::test]
async fn test_login_surfaces_remote_detail() {
    let h = harness(CacheConfig::default());
    h.transport
        .reply(json!({"detail": "Incorrect authentication credentials."}));

    let err = h.client.login("alice", "wrong").await.unwrap_err();
    assert_eq!(err.to_string(), "Incorrect authentication credentials.");
}

#[tokio::test]
async fn test_logged_in_user_requires_token() {
    let h = harness(CacheConfig::default());

    let err = h.client.logged_in_user().await.unwrap_err();

    assert!(matches!(err, HubError::NotAuthenticated));
    assert_eq!(h.transport.calls(), 0);
}

#[tokio::test]
async fn test_logged_in_user_after_login() {
    let h = harness(CacheConfig::default());
    h.transport.reply(json!({"token": "t"}));
    h.transport.reply(json!({"id": "1", "username": "alice", "is_admin": false}));

    h.client.login("alice", "secret").await.unwrap();
    let user = h.client.logged_in_user().await.unwrap();

    assert_eq!(user["username"], "alice");
    let request = h.transport.last();
    assert_eq!(request.url, format!("{V2}/user/"));
    assert_eq!(request.headers.get("authorization").unwrap(), "JWT t");
}

#[tokio::test]
async fn test_switching_credential_drops_cached_user() {
    let h = harness(CacheConfig::default());
    h.transport.reply(json!({"username": "alice"}));
    h.transport.reply(json!({"username": "bob"}));

    h.client.set_credential("alice-token");
    let first = h.client.logged_in_user().await.unwrap();
    h.client.set_credential("bob-token");
    let second = h.client.logged_in_user().await.unwrap();

    assert_eq!(first["username"], "alice");
    assert_eq!(second["username"], "bob");
    assert_eq!(h.transport.calls(), 2);
    assert_eq!(h.transport.last().headers.get("authorization").unwrap(), "JWT bob-token");
}

#[tokio::test]
async fn test_login_drops_cached_responses() {
    let h = harness(CacheConfig::default());
    h.transport.reply(json!({"name": "app", "is_private": false}));
    h.transport.reply(json!({"token": "t"}));
    h.transport.reply(json!({"name": "app", "is_private": true}));
    let repo = RepoRef::new("alice", "app");

    h.client.repository(&repo).await.unwrap();
    h.client.login("alice", "secret").await.unwrap();
    let after = h.client.repository(&repo).await.unwrap();

    assert_eq!(after["is_private"], true);
    assert_eq!(h.transport.calls(), 3);
}

#[tokio::test]
async fn test_repository_paths() {
    let h = harness(CacheConfig::disabled());

    h.client.repository(&RepoRef::official("nginx")).await.unwrap();
    assert_eq!(h.transport.last().url, format!("{V2}/repositories/library/nginx/"));

    h.client.repository(&RepoRef::new("_", "nginx")).await.unwrap();
    assert_eq!(h.transport.last().url, format!("{V2}/repositories/library/nginx/"));

    h.client
        .repository(&RepoRef::new("RyanTheAllmighty", "nginx"))
        .await
        .unwrap();
    assert_eq!(
        h.transport.last().url,
        format!("{V2}/repositories/ryantheallmighty/nginx/")
    );
}

#[tokio::test]
async fn test_repositories_lowercases_user() {
    let h = harness(CacheConfig::default());

    h.client.repositories("Alice").await.unwrap();

    assert_eq!(h.transport.last().url, format!("{V2}/users/alice/repositories/"));
}

#[tokio::test]
async fn test_user_requires_name() {
    let h = harness(CacheConfig::default());

    assert!(matches!(
        h.client.user("").await,
        Err(HubError::InvalidArgument { .. })
    ));
    assert!(matches!(
        h.client.repositories_starred("", Page::default()).await,
        Err(HubError::InvalidArgument { .. })
    ));
    assert_eq!(h.transport.calls(), 0);
}

#[tokio::test]
async fn test_tags_paginates_and_extracts_results() {
    let h = harness(CacheConfig::default());
    h.transport
        .reply(json!({"count": 2, "results": [{"name": "latest"}, {"name": "1.25"}]}));

    let tags = h
        .client
        .tags(&RepoRef::official("nginx"), Page::new(2, 10))
        .await
        .unwrap();

    assert_eq!(tags, json!([{"name": "latest"}, {"name": "1.25"}]));
    assert_eq!(
        h.transport.last().url,
        format!("{V2}/repositories/library/nginx/tags?page_size=10&page=2")
    );
}

#[tokio::test]
async fn test_starred_uses_default_page() {
    let h = harness(CacheConfig::default());

    h.client
        .repositories_starred("alice", Page::default())
        .await
        .unwrap();

    assert_eq!(
        h.transport.last().url,
        format!("{V2}/users/alice/repositories/starred?page_size=100&page=1")
    );
}

#[tokio::test]
async fn test_comments_and_webhooks_paths() {
    let h = harness(CacheConfig::default());
    let repo = RepoRef::new("alice", "app");

    h.client.comments(&repo, Page::default()).await.unwrap();
    assert_eq!(
        h.transport.last().url,
        format!("{V2}/repositories/alice/app/comments?page_size=100&page=1")
    );

    h.client.webhooks(&repo, Page::default()).await.unwrap();
    assert_eq!(
        h.transport.last().url,
        format!("{V2}/repositories/alice/app/webhooks?page_size=100&page=1")
    );
}

#[tokio::test]
async fn test_set_repository_description() {
    let h = harness(CacheConfig::default());
    let repo = RepoRef::new("alice", "app");

    h.client
        .set_repository_description(&repo, &Description::default().short("A tiny app"))
        .await
        .unwrap();

    let request = h.transport.last();
    assert_eq!(request.method, Method::Patch);
    assert_eq!(request.url, format!("{V2}/repositories/alice/app/"));
    assert_eq!(request.body, Some(json!({"description": "A tiny app"})));
}

#[tokio::test]
async fn test_set_repository_description_requires_content() {
    let h = harness(CacheConfig::default());

    let err = h
        .client
        .set_repository_description(&RepoRef::new("alice", "app"), &Description::default())
        .await
        .unwrap_err();

    assert!(matches!(err, HubError::InvalidArgument { .. }));
    assert_eq!(h.transport.calls(), 0);
}

#[tokio::test]
async fn test_star_and_unstar() {
    let h = harness(CacheConfig::default());
    let repo = RepoRef::new("alice", "app");
    h.transport.reply_empty();
    h.transport.reply_empty();

    h.client.star_repository(&repo).await.unwrap();
    h.client.unstar_repository(&repo).await.unwrap();

    let requests = h.transport.requests();
    assert_eq!(requests[0].method, Method::Post);
    assert_eq!(requests[0].url, format!("{V2}/repositories/alice/app/stars/"));
    assert_eq!(requests[0].body, Some(json!({})));
    assert_eq!(requests[1].method, Method::Delete);
    assert_eq!(requests[1].url, format!("{V2}/repositories/alice/app/stars/"));
}

#[tokio::test]
async fn test_create_and_delete_repository() {
    let h = harness(CacheConfig::default());
    h.transport.reply(json!({"namespace": "alice", "name": "app"}));
    h.transport.reply_empty();

    let created = h
        .client
        .create_repository(&NewRepository::new("alice", "app").private())
        .await
        .unwrap();
    h.client
        .delete_repository(&RepoRef::new("alice", "app"))
        .await
        .unwrap();

    assert_eq!(created, Some(json!({"namespace": "alice", "name": "app"})));
    let requests = h.transport.requests();
    assert_eq!(requests[0].url, format!("{V2}/repositories/"));
    assert_eq!(requests[0].body.as_ref().unwrap()["is_private"], true);
    assert_eq!(requests[1].method, Method::Delete);
    assert_eq!(requests[1].url, format!("{V2}/repositories/alice/app/"));
}

#[tokio::test]
async fn test_webhook_lifecycle() {
    let h = harness(CacheConfig::default());
    let repo = RepoRef::new("alice", "app");
    h.transport.reply(json!({"id": 7, "name": "ci"}));
    h.transport.reply_empty();

    let hook = h.client.create_webhook(&repo, "ci").await.unwrap();
    h.client.delete_webhook(&repo, 7).await.unwrap();

    assert_eq!(hook.unwrap()["id"], 7);
    let requests = h.transport.requests();
    assert_eq!(requests[0].body, Some(json!({"name": "ci"})));
    assert_eq!(
        requests[1].url,
        format!("{V2}/repositories/alice/app/webhooks/7/")
    );
}

#[tokio::test]
async fn test_create_webhook_requires_name() {
    let h = harness(CacheConfig::default());

    let err = h
        .client
        .create_webhook(&RepoRef::new("alice", "app"), "")
        .await
        .unwrap_err();

    assert!(matches!(err, HubError::InvalidArgument { .. }));
}

#[tokio::test]
async fn test_create_webhook_hook() {
    let h = harness(CacheConfig::default());
    h.transport
        .reply(json!({"id": 3, "hook_url": "https://ci.example.com/hook"}));

    let hook = h
        .client
        .create_webhook_hook(&RepoRef::new("Alice", "app"), 7, "https://ci.example.com/hook")
        .await
        .unwrap();

    assert_eq!(hook.unwrap()["hook_url"], "https://ci.example.com/hook");
    let request = h.transport.last();
    assert_eq!(request.method, Method::Post);
    assert_eq!(
        request.url,
        format!("{V2}/repositories/alice/app/webhooks/7/hooks/")
    );
    assert_eq!(
        request.body,
        Some(json!({"hook_url": "https://ci.example.com/hook"}))
    );
}

#[tokio::test]
async fn test_create_webhook_hook_requires_url() {
    let h = harness(CacheConfig::default());

    let err = h
        .client
        .create_webhook_hook(&RepoRef::new("alice", "app"), 7, "")
        .await
        .unwrap_err();

    assert!(matches!(err, HubError::InvalidArgument { .. }));
    assert_eq!(h.transport.calls(), 0);
}
