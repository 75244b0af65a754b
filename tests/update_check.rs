use std::cmp::Ordering;

use release_check::proxy::store::{CachedNodes, FileNodeStore, NodeStore};
use release_check::{
    ProxyNodeResolver, ReleaseFetcher, ReleaseSource, SourceKind, UpdateChecker, compare_versions,
};
use tempfile::TempDir;

fn api_fetcher(server: &mockito::ServerGuard, path: &str) -> ReleaseFetcher {
    ReleaseFetcher::with_sources(
        vec![ReleaseSource::new(
            format!("{}{}", server.url(), path),
            SourceKind::Api,
        )],
        "https://github.com/owner/app/releases/latest".to_string(),
    )
}

#[tokio::test]
async fn full_pipeline_reports_update_from_release_api() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/repos/owner/app/releases/latest")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{
                "tag_name": "v3.1.0",
                "body": "- Faster startup",
                "html_url": "https://github.com/owner/app/releases/tag/v3.1.0",
                "assets": [
                    {"browser_download_url": "https://dl.example.com/app-3.1.0.zip", "name": "app-3.1.0.zip", "size": 4096}
                ]
            }"#,
        )
        .create_async()
        .await;

    let checker =
        UpdateChecker::with_provider(api_fetcher(&server, "/repos/owner/app/releases/latest"));
    let result = checker.check_update(Some("3.0.2")).await.unwrap();

    assert!(result.has_update);
    assert_eq!(result.latest_version, "3.1.0");
    assert_eq!(result.current_version, "3.0.2");

    let info = result.release_info.unwrap();
    assert!(info.body.contains("- Faster startup"));
    assert_eq!(info.assets.len(), 1);
    assert_eq!(info.assets[0].name, "app-3.1.0.zip");
}

#[tokio::test]
async fn full_pipeline_degrades_to_no_update_when_every_source_fails() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/repos/owner/app/releases/latest")
        .with_status(503)
        .create_async()
        .await;

    let checker =
        UpdateChecker::with_provider(api_fetcher(&server, "/repos/owner/app/releases/latest"));

    assert_eq!(checker.check_update(Some("1.0.0")).await, None);
}

#[tokio::test]
async fn resolver_persists_ranked_nodes_and_reuses_them_within_ttl() {
    let temp_dir = TempDir::new().unwrap();
    let store_path = temp_dir.path().join("github_proxy_nodes.json");

    let mut server = mockito::Server::new_async().await;
    let ranking = server
        .mock("GET", "/github")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{"code": 200, "data": [
                {"url": "https://fast.example.com", "speed": 8.0},
                {"url": "https://slow.example.com", "speed": 2.0}
            ]}"#,
        )
        .expect(1)
        .create_async()
        .await;

    let ranking_url = format!("{}/github", server.url());
    let resolver =
        ProxyNodeResolver::with_store(FileNodeStore::new(store_path.clone()), &ranking_url);

    let first = resolver.get_proxy_nodes().await;
    assert_eq!(
        first,
        vec![
            "https://fast.example.com".to_string(),
            "https://slow.example.com".to_string()
        ]
    );

    // Second call must come from the cache file, byte-identical, no new request.
    let second = resolver.get_proxy_nodes().await;
    ranking.assert_async().await;
    assert_eq!(second, first);

    let persisted = FileNodeStore::new(store_path).load().unwrap().unwrap();
    assert_eq!(persisted.nodes, first);
}

#[tokio::test]
async fn resolver_ignores_expired_entry_and_refreshes() {
    let temp_dir = TempDir::new().unwrap();
    let store_path = temp_dir.path().join("github_proxy_nodes.json");

    // Seed an entry that expired long ago.
    let store = FileNodeStore::new(store_path.clone());
    store
        .save(&CachedNodes {
            nodes: vec!["https://expired.example.com".to_string()],
            timestamp: 0,
        })
        .unwrap();

    let mut server = mockito::Server::new_async().await;
    let ranking = server
        .mock("GET", "/github")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"code": 200, "data": [{"url": "https://new.example.com", "speed": 1.0}]}"#)
        .expect(1)
        .create_async()
        .await;

    let ranking_url = format!("{}/github", server.url());
    let resolver = ProxyNodeResolver::with_store(FileNodeStore::new(store_path), &ranking_url);
    let nodes = resolver.get_proxy_nodes().await;

    ranking.assert_async().await;
    assert_eq!(nodes, vec!["https://new.example.com".to_string()]);
}

#[test]
fn compare_versions_matches_documented_contract() {
    assert_eq!(compare_versions("1.2", "1.2.0"), Ordering::Equal);
    assert_eq!(compare_versions("2.0.0", "1.9.9"), Ordering::Greater);
    assert_eq!(compare_versions("1.0", "1.0.1"), Ordering::Less);
}
